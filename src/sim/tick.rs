//! Fixed-timestep level orchestrator
//!
//! `LevelRuntime` owns one level's entities and advances them with `tick`,
//! called at a fixed 20 Hz cadence by the host loop. Each tick runs the
//! same phase order: timers, spawning, movement, enemy fire, penetration,
//! pruning, collisions, kill accounting, health propagation, outcome check.
//! That order is load-bearing; several behaviors (the one-tick lag between
//! a collision kill and its score credit, destroyed entities remaining
//! visible to collisions until the next prune) fall out of it.
//!
//! The timer queue drains on every clock tick, including while paused or
//! after the level has ended. A scheduled detonation therefore fires on
//! schedule even mid-pause; its action is a no-op if the target entity is
//! already gone.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::boss::Boss;
use super::collision;
use super::enemy::{Enemy, EnemyUnit};
use super::entity::{Destructible, EntityId, IdAlloc, Simulated};
use super::level::{ConfigError, LevelConfig, SpawnPolicy, WinCondition};
use super::managers::{EnemyManager, PowerUpManager, ProjectileManager};
use super::player::PlayerUnit;
use super::powerup::{PowerUp, PowerUpKind};
use super::projectile::{Projectile, ProjectileEvent};
use super::state::{GameState, GameStateManager};
use crate::audio::{AudioSink, Cue};
use crate::consts::*;
use crate::stage::Stage;

/// Deferred one-shot action keyed to an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Burst an armed area shot into fragments
    Detonate(EntityId),
    /// End a fragment's flight
    ExpireFragment(EntityId),
}

/// One-shot timers ordered by due tick
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(u64, TimerAction)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, action: TimerAction) {
        self.pending.push((due_tick, action));
    }

    /// Remove and return every action due at or before `now`, in the order
    /// it was scheduled
    pub fn drain_due(&mut self, now: u64) -> Vec<TimerAction> {
        let mut due = Vec::new();
        self.pending.retain(|(tick, action)| {
            if *tick <= now {
                due.push(*action);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// One level's complete simulation
pub struct LevelRuntime {
    config: LevelConfig,
    states: GameStateManager,
    ids: IdAlloc,
    rng: Pcg32,
    player: PlayerUnit,
    enemies: EnemyManager,
    projectiles: ProjectileManager,
    power_ups: PowerUpManager,
    timers: TimerQueue,
    clock: u64,
    spawn_cycles_done: u32,
    wave: u32,
    boss_spawned: bool,
}

impl LevelRuntime {
    /// Build a runtime for a validated config; the player is attached to
    /// the stage immediately.
    pub fn new(
        config: LevelConfig,
        seed: u64,
        stage: &mut dyn Stage,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ids = IdAlloc::new();
        let player = PlayerUnit::new(ids.next(), config.player_health);
        stage.attach(player.id(), player.kind());
        stage.player_health(player.health());
        Ok(Self {
            config,
            states: GameStateManager::new(),
            ids,
            rng: Pcg32::seed_from_u64(seed),
            player,
            enemies: EnemyManager::new(),
            projectiles: ProjectileManager::new(),
            power_ups: PowerUpManager::new(),
            timers: TimerQueue::new(),
            clock: 0,
            spawn_cycles_done: 0,
            wave: 0,
            boss_spawned: false,
        })
    }

    pub fn state(&self) -> GameState {
        self.states.current()
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn player(&self) -> &PlayerUnit {
        &self.player
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.roster.count()
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Register an observer for state transitions
    pub fn subscribe(&mut self, observer: Box<dyn FnMut(GameState)>) {
        self.states.subscribe(observer);
    }

    /// Begin play: Loading then Playing
    pub fn start(&mut self) {
        log::info!("level start: {}", self.config.background);
        self.states.set_state(GameState::Loading);
        self.states.set_state(GameState::Playing);
    }

    pub fn pause(&mut self) {
        if self.states.is_playing() {
            self.states.set_state(GameState::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.states.current() == GameState::Paused {
            self.states.set_state(GameState::Playing);
        }
    }

    /// Tear the level down, detaching every remaining entity
    pub fn shutdown(&mut self, stage: &mut dyn Stage) {
        self.enemies.roster.clear_all(stage);
        self.projectiles.clear_all(stage);
        self.power_ups.roster.clear_all(stage);
        stage.detach(self.player.id());
    }

    // Movement intents; they only take effect while Playing because the
    // player update is gated with everything else.

    pub fn move_up(&mut self) {
        self.player.move_up();
    }

    pub fn move_down(&mut self) {
        self.player.move_down();
    }

    pub fn move_left(&mut self) {
        self.player.move_left();
    }

    pub fn move_right(&mut self) {
        self.player.move_right();
    }

    pub fn stop_vertical(&mut self) {
        self.player.stop_vertical();
    }

    pub fn stop_horizontal(&mut self) {
        self.player.stop_horizontal();
    }

    /// Player fire action; ignored outside Playing
    pub fn fire(&mut self, stage: &mut dyn Stage, audio: &mut dyn AudioSink) {
        if self.states.is_not_playing() {
            return;
        }
        for shot in self.player.fire(&mut self.ids) {
            self.projectiles.user.add(Some(shot), stage);
        }
        audio.play(Cue::Shoot);
    }

    /// Advance the simulation by one fixed step
    pub fn tick(&mut self, stage: &mut dyn Stage, audio: &mut dyn AudioSink) {
        self.clock += 1;

        // Timers fire on the wall clock of ticks, not on play state.
        for action in self.timers.drain_due(self.clock) {
            self.apply_timer(action, stage);
        }

        if self.states.is_not_playing() {
            return;
        }

        self.spawn_enemies(stage);

        self.player.update();
        self.enemies.update_all(&mut self.rng);
        self.power_ups.update_all();
        for (id, event) in self.projectiles.update_all() {
            match event {
                ProjectileEvent::Armed => {
                    self.timers
                        .schedule(self.clock + AREA_SHOT_DETONATE_DELAY, TimerAction::Detonate(id));
                }
            }
        }

        self.projectiles
            .generate_enemy_fire(&self.enemies, &mut self.ids, &mut self.rng, stage);

        // Kill accounting is a population delta across the prune, so an
        // enemy destroyed by this tick's collisions is credited next tick.
        let enemies_before = self.enemies.roster.count();

        for enemy in self.enemies.roster.iter_mut() {
            if !enemy.is_destroyed() && enemy.has_penetrated(FIELD_WIDTH) {
                self.player.take_damage();
                enemy.destroy();
            }
        }

        self.enemies.roster.prune_destroyed(stage);
        self.projectiles.prune_destroyed(stage);
        self.power_ups.roster.prune_destroyed(stage);

        collision::melee_pass(&mut self.player, &mut self.enemies);
        collision::user_projectile_pass(&mut self.projectiles.user, &mut self.enemies);
        collision::enemy_projectile_pass(&mut self.projectiles.hostile, &mut self.player);
        collision::power_up_pass(&mut self.power_ups, &mut self.player, audio);

        let enemies_after = self.enemies.roster.count();
        for _ in 0..enemies_before.saturating_sub(enemies_after) {
            self.player.record_kill();
        }

        if self.config.cull_offscreen_projectiles {
            for shot in self
                .projectiles
                .user
                .iter_mut()
                .chain(self.projectiles.hostile.iter_mut())
            {
                if shot.is_offscreen() {
                    shot.destroy();
                }
            }
        }

        stage.player_health(self.player.health());

        self.check_outcome(audio);
    }

    /// Feed the field according to the level's spawn policy
    fn spawn_enemies(&mut self, stage: &mut dyn Stage) {
        match self.config.spawn {
            SpawnPolicy::Waves {
                enemies_per_cycle,
                cycles,
            } => {
                if self.spawn_cycles_done < cycles && self.enemies.roster.count() == 0 {
                    self.spawn_grunt_wave(enemies_per_cycle, stage);
                    self.spawn_cycles_done += 1;
                    log::debug!(
                        "wave {}/{} spawned ({} grunts)",
                        self.spawn_cycles_done,
                        cycles,
                        enemies_per_cycle
                    );
                }
            }
            SpawnPolicy::BossDuel => {
                if !self.boss_spawned {
                    self.spawn_boss(stage);
                }
            }
            SpawnPolicy::Onslaught {
                base_wave_size,
                waves_before_boss,
                power_up_rate,
            } => {
                let grunts_alive = self
                    .enemies
                    .roster
                    .iter()
                    .filter(|e| matches!(e, Enemy::Grunt(_)))
                    .count();
                // No more reinforcements once the boss has fallen; the
                // player only has to mop up.
                let boss_down = self.boss_spawned
                    && !self
                        .enemies
                        .roster
                        .iter()
                        .any(|e| matches!(e, Enemy::Boss(_)));
                if grunts_alive == 0 && !boss_down {
                    self.spawn_grunt_wave(base_wave_size + self.wave, stage);
                    self.wave += 1;
                }
                if self.wave > waves_before_boss && !self.boss_spawned {
                    self.spawn_boss(stage);
                }
                if self.rng.random::<f64>() < power_up_rate {
                    let x = self.rng.random_range(0.0..FIELD_WIDTH - POWER_UP_WIDTH);
                    let power_up = PowerUp::new(
                        self.ids.next(),
                        PowerUpKind::SpreadShot,
                        Vec2::new(x, 0.0),
                    );
                    self.power_ups.roster.add(Some(power_up), stage);
                }
            }
        }
    }

    fn spawn_grunt_wave(&mut self, count: u32, stage: &mut dyn Stage) {
        for _ in 0..count {
            let y = self.rng.random_range(0.0..ENEMY_MAX_SPAWN_Y);
            let grunt = EnemyUnit::new(self.ids.next(), Vec2::new(FIELD_WIDTH, y));
            self.enemies.roster.add(Some(Enemy::Grunt(grunt)), stage);
        }
    }

    fn spawn_boss(&mut self, stage: &mut dyn Stage) {
        let boss = Boss::new(self.ids.next(), self.config.boss_health, &mut self.rng);
        log::info!("boss spawned with {} health", self.config.boss_health);
        self.enemies.roster.add(Some(Enemy::Boss(boss)), stage);
        self.boss_spawned = true;
    }

    fn apply_timer(&mut self, action: TimerAction, stage: &mut dyn Stage) {
        match action {
            TimerAction::Detonate(id) => {
                let origin = match self.projectiles.hostile.find_mut(id) {
                    Some(shot) if !shot.is_destroyed() => {
                        let pos = shot.pos;
                        shot.destroy();
                        Some(pos)
                    }
                    _ => None,
                };
                if let Some(origin) = origin {
                    for fragment in
                        Projectile::burst_fragments(origin, &mut self.ids, &mut self.rng)
                    {
                        self.timers.schedule(
                            self.clock + FRAGMENT_LIFETIME,
                            TimerAction::ExpireFragment(fragment.id()),
                        );
                        self.projectiles.hostile.add(Some(fragment), stage);
                    }
                }
            }
            TimerAction::ExpireFragment(id) => {
                if let Some(fragment) = self.projectiles.hostile.find_mut(id) {
                    fragment.destroy();
                }
            }
        }
    }

    /// Loss is checked before victory: on a tick satisfying both, the
    /// player loses.
    fn check_outcome(&mut self, audio: &mut dyn AudioSink) {
        if self.player.is_destroyed() {
            log::info!("level lost at tick {}", self.clock);
            self.states.set_state(GameState::GameOver);
            audio.play(Cue::Lose);
            return;
        }
        let won = match self.config.win {
            WinCondition::AllWavesCleared => match self.config.spawn {
                SpawnPolicy::Waves { cycles, .. } => {
                    self.spawn_cycles_done >= cycles && self.enemies.roster.count() == 0
                }
                _ => false,
            },
            WinCondition::BossDefeated => {
                self.boss_spawned
                    && !self
                        .enemies
                        .roster
                        .iter()
                        .any(|e| matches!(e, Enemy::Boss(_)))
            }
            WinCondition::BossDefeatedAndFieldClear => {
                self.boss_spawned && self.enemies.roster.count() == 0
            }
        };
        if won {
            log::info!(
                "level won at tick {} with {} kills",
                self.clock,
                self.player.kills()
            );
            self.states.set_state(GameState::Win);
            audio.play(Cue::Win);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::sim::level::{LevelId, LevelRegistry};
    use crate::sim::projectile::ProjectileKind;
    use crate::stage::RecordingStage;

    fn waves_config(enemies_per_cycle: u32, cycles: u32) -> LevelConfig {
        LevelConfig {
            background: "background1".into(),
            player_health: 5,
            boss_health: 0,
            spawn: SpawnPolicy::Waves {
                enemies_per_cycle,
                cycles,
            },
            win: WinCondition::AllWavesCleared,
            cull_offscreen_projectiles: true,
            next_level: None,
        }
    }

    fn boss_config() -> LevelConfig {
        LevelRegistry::campaign().get(LevelId::Two).unwrap().clone()
    }

    fn started(config: LevelConfig, seed: u64) -> (LevelRuntime, RecordingStage, RecordingAudio) {
        let mut stage = RecordingStage::new();
        let mut runtime = LevelRuntime::new(config, seed, &mut stage).unwrap();
        runtime.start();
        (runtime, stage, RecordingAudio::default())
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut stage = RecordingStage::new();
        let mut config = waves_config(5, 3);
        config.player_health = 0;
        assert!(LevelRuntime::new(config, 1, &mut stage).is_err());
    }

    #[test]
    fn test_wave_spawns_and_refills_until_cycles_exhausted() {
        let (mut rt, mut stage, mut audio) = started(waves_config(3, 2), 7);
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 3);

        // Clear the field: one tick to sweep the wrecks, then the second
        // cycle refills.
        for e in rt.enemies.roster.iter_mut() {
            e.destroy();
        }
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 0);
        assert_eq!(rt.player().kills(), 3);
        assert_eq!(rt.state(), GameState::Playing);
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 3);
        assert_eq!(rt.spawn_cycles_done, 2);

        // Clear the last wave: no refill remains, so the level is won.
        for e in rt.enemies.roster.iter_mut() {
            e.destroy();
        }
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.state(), GameState::Win);
        assert!(audio.cues.contains(&Cue::Win));
        assert_eq!(rt.player().kills(), 6);
    }

    #[test]
    fn test_collision_kill_credited_one_tick_late() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 1);

        // Park a shot on the grunt so this tick's collision pass kills it;
        // the grunt is wide enough that one step of relative motion keeps
        // the overlap.
        let grunt_pos = rt.enemies.roster.iter().next().unwrap().bounds().min;
        let id = rt.ids.next();
        rt.projectiles
            .user
            .add(Some(Projectile::player_shot(id, grunt_pos)), &mut stage);

        rt.tick(&mut stage, &mut audio);
        // Destroyed by collision after the prune: still on the roster,
        // no kill credited yet.
        assert_eq!(rt.player().kills(), 0);
        assert!(rt.enemies.roster.iter().next().unwrap().is_destroyed());

        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.player().kills(), 1);
        assert_eq!(rt.enemy_count(), 0);
        assert_eq!(rt.state(), GameState::Win);
    }

    #[test]
    fn test_penetration_damages_player_and_removes_grunt() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);
        rt.tick(&mut stage, &mut audio);

        // Teleport the grunt a full field-width past its spawn point.
        for e in rt.enemies.roster.iter_mut() {
            if let Enemy::Grunt(g) = e {
                g.pos.x -= FIELD_WIDTH + 10.0;
            }
        }
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.player().health(), 4);
        assert_eq!(rt.enemy_count(), 0);
        assert_eq!(stage.last_health, Some(4));
    }

    #[test]
    fn test_pause_freezes_entities_but_clock_advances() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);
        rt.tick(&mut stage, &mut audio);
        let x_before = rt.enemies.roster.iter().next().unwrap().bounds().min.x;

        rt.pause();
        for _ in 0..10 {
            rt.tick(&mut stage, &mut audio);
        }
        let x_paused = rt.enemies.roster.iter().next().unwrap().bounds().min.x;
        assert_eq!(x_before, x_paused);
        assert_eq!(rt.clock(), 11);

        rt.resume();
        rt.tick(&mut stage, &mut audio);
        let x_resumed = rt.enemies.roster.iter().next().unwrap().bounds().min.x;
        assert_eq!(x_resumed, x_before + GRUNT_VELOCITY_X);
    }

    #[test]
    fn test_fire_gated_on_playing() {
        let mut stage = RecordingStage::new();
        let mut audio = RecordingAudio::default();
        let mut rt = LevelRuntime::new(waves_config(1, 1), 7, &mut stage).unwrap();

        // Not started yet: the fire action is dropped.
        rt.fire(&mut stage, &mut audio);
        assert_eq!(rt.projectiles.user.count(), 0);
        assert!(audio.cues.is_empty());

        rt.start();
        rt.fire(&mut stage, &mut audio);
        assert_eq!(rt.projectiles.user.count(), 1);
        assert_eq!(audio.cues, vec![Cue::Shoot]);

        rt.pause();
        rt.fire(&mut stage, &mut audio);
        assert_eq!(rt.projectiles.user.count(), 1);
    }

    #[test]
    fn test_spread_volley_after_power_up_pickup() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);

        let pickup = PowerUp::new(rt.ids.next(), PowerUpKind::SpreadShot, rt.player.pos);
        rt.power_ups.roster.add(Some(pickup), &mut stage);
        rt.tick(&mut stage, &mut audio);

        assert!(audio.cues.contains(&Cue::PowerUpCollected));
        assert_eq!(rt.player().spread_charges(), 1);

        rt.fire(&mut stage, &mut audio);
        assert_eq!(rt.projectiles.user.count(), 5);
        assert_eq!(rt.player().spread_charges(), 0);
    }

    #[test]
    fn test_area_shot_detonates_into_expiring_fragments() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);

        // Drop an area shot one step short of its trigger line.
        let shot = {
            let mut s = Projectile::area_shot(rt.ids.next(), 400.0);
            s.pos.x = AREA_SHOT_ARM_X + 1.0;
            s
        };
        let shot_id = shot.id();
        rt.projectiles.hostile.add(Some(shot), &mut stage);

        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.timers.pending_count(), 1);

        for _ in 0..AREA_SHOT_DETONATE_DELAY {
            rt.tick(&mut stage, &mut audio);
        }
        assert!(rt.projectiles.hostile.find_mut(shot_id).is_none());
        let fragments = rt
            .projectiles
            .hostile
            .iter()
            .filter(|p| p.kind() == ProjectileKind::Fragment)
            .count();
        assert_eq!(fragments, AREA_FRAGMENT_COUNT);

        for _ in 0..=FRAGMENT_LIFETIME {
            rt.tick(&mut stage, &mut audio);
        }
        let fragments = rt
            .projectiles
            .hostile
            .iter()
            .filter(|p| p.kind() == ProjectileKind::Fragment)
            .count();
        assert_eq!(fragments, 0);
        assert_eq!(rt.timers.pending_count(), 0);
    }

    #[test]
    fn test_detonation_fires_even_while_paused() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);
        let shot = {
            let mut s = Projectile::area_shot(rt.ids.next(), 400.0);
            s.pos.x = AREA_SHOT_ARM_X + 1.0;
            s
        };
        rt.projectiles.hostile.add(Some(shot), &mut stage);
        rt.tick(&mut stage, &mut audio);

        rt.pause();
        for _ in 0..AREA_SHOT_DETONATE_DELAY {
            rt.tick(&mut stage, &mut audio);
        }
        let fragments = rt
            .projectiles
            .hostile
            .iter()
            .filter(|p| p.kind() == ProjectileKind::Fragment)
            .count();
        assert_eq!(fragments, AREA_FRAGMENT_COUNT);
    }

    #[test]
    fn test_boss_duel_win_on_boss_death() {
        let (mut rt, mut stage, mut audio) = started(boss_config(), 7);
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 1);
        assert!(rt.boss_spawned);

        for e in rt.enemies.roster.iter_mut() {
            e.destroy();
        }
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.state(), GameState::Win);
        assert!(audio.cues.contains(&Cue::Win));
    }

    #[test]
    fn test_loss_takes_priority_over_win() {
        let mut config = waves_config(1, 1);
        config.player_health = 1;
        let (mut rt, mut stage, mut audio) = started(config, 7);
        rt.tick(&mut stage, &mut audio);

        // Clear the field and park a hostile shot on the player: the same
        // tick satisfies both outcomes.
        for e in rt.enemies.roster.iter_mut() {
            e.destroy();
        }
        let shot = Projectile::enemy_shot(
            rt.ids.next(),
            rt.player.pos - Vec2::new(ENEMY_SHOT_VELOCITY_X, 0.0),
        );
        rt.projectiles.hostile.add(Some(shot), &mut stage);

        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.state(), GameState::GameOver);
        assert!(audio.cues.contains(&Cue::Lose));
        assert!(!audio.cues.contains(&Cue::Win));
    }

    #[test]
    fn test_offscreen_projectiles_culled() {
        let (mut rt, mut stage, mut audio) = started(waves_config(1, 1), 7);
        let shot = Projectile::enemy_shot(
            rt.ids.next(),
            Vec2::new(-OFFSCREEN_MARGIN - ENEMY_SHOT_WIDTH, 300.0),
        );
        rt.projectiles.hostile.add(Some(shot), &mut stage);

        rt.tick(&mut stage, &mut audio);
        // Marked this tick, swept by the next prune.
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.projectiles.hostile.count(), 0);
    }

    #[test]
    fn test_onslaught_waves_grow_then_boss_joins() {
        let config = LevelRegistry::campaign()
            .get(LevelId::Final)
            .unwrap()
            .clone();
        let (mut rt, mut stage, mut audio) = started(config, 7);

        rt.tick(&mut stage, &mut audio);
        let first_wave = rt
            .enemies
            .roster
            .iter()
            .filter(|e| matches!(e, Enemy::Grunt(_)))
            .count();
        assert_eq!(first_wave, 3);
        assert!(!rt.boss_spawned);

        // Clear two waves: the third spawns with the boss alongside. Each
        // clear takes a sweep tick before the refill tick.
        for wave in 0..2 {
            for e in rt.enemies.roster.iter_mut() {
                e.destroy();
            }
            rt.tick(&mut stage, &mut audio);
            rt.tick(&mut stage, &mut audio);
            let grunts = rt
                .enemies
                .roster
                .iter()
                .filter(|e| matches!(e, Enemy::Grunt(_)))
                .count();
            assert_eq!(grunts, 4 + wave);
        }
        assert!(rt.boss_spawned);
        assert!(
            rt.enemies
                .roster
                .iter()
                .any(|e| matches!(e, Enemy::Boss(_)))
        );

        // Kill everything: with the boss down no reinforcements arrive and
        // the clear field wins the level.
        for e in rt.enemies.roster.iter_mut() {
            e.destroy();
        }
        rt.tick(&mut stage, &mut audio);
        assert_eq!(rt.enemy_count(), 0);
        assert_eq!(rt.state(), GameState::Win);
    }

    #[test]
    fn test_shutdown_detaches_everything() {
        let (mut rt, mut stage, mut audio) = started(waves_config(2, 1), 7);
        rt.tick(&mut stage, &mut audio);
        rt.fire(&mut stage, &mut audio);

        rt.shutdown(&mut stage);
        assert!(stage.live().is_empty());
    }
}
