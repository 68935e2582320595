//! Level definitions
//!
//! A level is data: starting health, a spawn policy, a win condition and an
//! optional successor. Configs are serde types so campaigns can be shipped
//! as JSON and validated on load; `campaign()` builds the stock three-level
//! progression in code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable level identifiers, doubling as campaign ordering keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    One,
    Two,
    Final,
}

/// How and when a level feeds enemies onto the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Fixed number of spawn cycles, each topping the field back up to
    /// `enemies_per_cycle` grunts at random heights
    Waves { enemies_per_cycle: u32, cycles: u32 },
    /// A single boss, nothing else
    BossDuel,
    /// Grunt waves that grow by one each wave, then a boss alongside the
    /// stragglers, with power-ups raining the whole time
    Onslaught {
        base_wave_size: u32,
        waves_before_boss: u32,
        power_up_rate: f64,
    },
}

/// What ends the level in the player's favor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    /// Every spawn cycle ran and every spawned grunt is gone
    AllWavesCleared,
    /// The boss is destroyed
    BossDefeated,
    /// The boss is destroyed and no other enemy remains
    BossDefeatedAndFieldClear,
}

/// Everything the runtime needs to play one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Background asset name, passed through to the presentation layer
    pub background: String,
    pub player_health: i32,
    /// Health of the boss this level spawns, if any
    pub boss_health: i32,
    pub spawn: SpawnPolicy,
    pub win: WinCondition,
    /// Cull projectiles that drift far offscreen instead of simulating
    /// them forever
    #[serde(default = "default_true")]
    pub cull_offscreen_projectiles: bool,
    /// Level to advance to on a win; `None` ends the campaign
    pub next_level: Option<LevelId>,
}

fn default_true() -> bool {
    true
}

/// Rejected level configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositivePlayerHealth(i32),
    NonPositiveBossHealth(i32),
    EmptyWave,
    ZeroCycles,
    PowerUpRateOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositivePlayerHealth(h) => {
                write!(f, "player health must be positive, got {h}")
            }
            ConfigError::NonPositiveBossHealth(h) => {
                write!(f, "boss health must be positive, got {h}")
            }
            ConfigError::EmptyWave => write!(f, "wave size must be at least 1"),
            ConfigError::ZeroCycles => write!(f, "spawn cycle count must be at least 1"),
            ConfigError::PowerUpRateOutOfRange(r) => {
                write!(f, "power-up rate must be within [0, 1], got {r}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl LevelConfig {
    /// Reject configs that could never be played to completion
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_health <= 0 {
            return Err(ConfigError::NonPositivePlayerHealth(self.player_health));
        }
        match self.spawn {
            SpawnPolicy::Waves {
                enemies_per_cycle,
                cycles,
            } => {
                if enemies_per_cycle == 0 {
                    return Err(ConfigError::EmptyWave);
                }
                if cycles == 0 {
                    return Err(ConfigError::ZeroCycles);
                }
            }
            SpawnPolicy::BossDuel => {
                if self.boss_health <= 0 {
                    return Err(ConfigError::NonPositiveBossHealth(self.boss_health));
                }
            }
            SpawnPolicy::Onslaught {
                base_wave_size,
                power_up_rate,
                ..
            } => {
                if base_wave_size == 0 {
                    return Err(ConfigError::EmptyWave);
                }
                if self.boss_health <= 0 {
                    return Err(ConfigError::NonPositiveBossHealth(self.boss_health));
                }
                if !(0.0..=1.0).contains(&power_up_rate) {
                    return Err(ConfigError::PowerUpRateOutOfRange(power_up_rate));
                }
            }
        }
        Ok(())
    }

    /// Whether this level's spawn policy ever fields a boss
    pub fn spawns_boss(&self) -> bool {
        matches!(
            self.spawn,
            SpawnPolicy::BossDuel | SpawnPolicy::Onslaught { .. }
        )
    }
}

/// Ordered collection of levels keyed by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRegistry {
    levels: Vec<(LevelId, LevelConfig)>,
}

impl LevelRegistry {
    pub fn new(levels: Vec<(LevelId, LevelConfig)>) -> Self {
        Self { levels }
    }

    pub fn get(&self, id: LevelId) -> Option<&LevelConfig> {
        self.levels
            .iter()
            .find(|(lid, _)| *lid == id)
            .map(|(_, c)| c)
    }

    pub fn first(&self) -> Option<(LevelId, &LevelConfig)> {
        self.levels.first().map(|(id, c)| (*id, c))
    }

    /// The stock three-level campaign
    pub fn campaign() -> Self {
        Self::new(vec![
            (
                LevelId::One,
                LevelConfig {
                    background: "background1".into(),
                    player_health: 5,
                    boss_health: 0,
                    spawn: SpawnPolicy::Waves {
                        enemies_per_cycle: 5,
                        cycles: 3,
                    },
                    win: WinCondition::AllWavesCleared,
                    cull_offscreen_projectiles: true,
                    next_level: Some(LevelId::Two),
                },
            ),
            (
                LevelId::Two,
                LevelConfig {
                    background: "background2".into(),
                    player_health: 5,
                    boss_health: crate::consts::BOSS_HEALTH,
                    spawn: SpawnPolicy::BossDuel,
                    win: WinCondition::BossDefeated,
                    cull_offscreen_projectiles: true,
                    next_level: Some(LevelId::Final),
                },
            ),
            (
                LevelId::Final,
                LevelConfig {
                    background: "background3".into(),
                    player_health: 5,
                    boss_health: crate::consts::BOSS_HEALTH,
                    spawn: SpawnPolicy::Onslaught {
                        base_wave_size: 3,
                        waves_before_boss: 2,
                        power_up_rate: 0.02,
                    },
                    win: WinCondition::BossDefeatedAndFieldClear,
                    cull_offscreen_projectiles: true,
                    next_level: None,
                },
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_is_valid_and_chained() {
        let registry = LevelRegistry::campaign();
        let (first_id, _) = registry.first().unwrap();
        assert_eq!(first_id, LevelId::One);

        let mut id = Some(first_id);
        let mut visited = 0;
        while let Some(current) = id {
            let config = registry.get(current).expect("chained level must exist");
            config.validate().expect("campaign level must validate");
            id = config.next_level;
            visited += 1;
        }
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let mut config = LevelRegistry::campaign().get(LevelId::One).unwrap().clone();
        config.player_health = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositivePlayerHealth(0))
        );

        let mut config = LevelRegistry::campaign().get(LevelId::Two).unwrap().clone();
        config.boss_health = -1;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveBossHealth(-1)));

        let mut config = LevelRegistry::campaign()
            .get(LevelId::Final)
            .unwrap()
            .clone();
        config.spawn = SpawnPolicy::Onslaught {
            base_wave_size: 3,
            waves_before_boss: 2,
            power_up_rate: 1.5,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PowerUpRateOutOfRange(1.5))
        );
    }

    #[test]
    fn test_config_json_round_trip_with_defaults() {
        // cull_offscreen_projectiles falls back to true when absent
        let json = r#"{
            "background": "background1",
            "player_health": 5,
            "boss_health": 0,
            "spawn": { "Waves": { "enemies_per_cycle": 5, "cycles": 3 } },
            "win": "AllWavesCleared",
            "next_level": "Two"
        }"#;
        let config: LevelConfig = serde_json::from_str(json).unwrap();
        assert!(config.cull_offscreen_projectiles);
        assert_eq!(config.next_level, Some(LevelId::Two));
        config.validate().unwrap();
    }
}
