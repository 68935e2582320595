//! Entity lifecycle managers
//!
//! Each entity category lives in a `Roster`: append-only during a tick,
//! pruned of destroyed members once per tick, cleared wholesale at level
//! transition. Every membership change is mirrored to the presentation
//! stage with exactly one attach or detach per entity.
//!
//! Managers own no collision logic; that is centralized in `collision`.
//! The projectile manager does own enemy fire generation, because newly
//! fired shots land in its enemy-fired roster.

use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::entity::{Destructible, EntityId, IdAlloc, Simulated};
use super::powerup::PowerUp;
use super::projectile::{Projectile, ProjectileEvent};
use crate::stage::Stage;

/// Homogeneous entity collection with the uniform lifecycle contract
pub struct Roster<T: Simulated> {
    members: Vec<T>,
}

impl<T: Simulated> Roster<T> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append an entity, attaching it to the stage. `None` is a no-op: a
    /// probabilistic fire attempt that produced nothing is a normal
    /// outcome, not an error.
    pub fn add(&mut self, entity: Option<T>, stage: &mut dyn Stage) {
        if let Some(entity) = entity {
            debug_assert!(
                self.members.iter().all(|m| m.id() != entity.id()),
                "duplicate roster insertion"
            );
            stage.attach(entity.id(), entity.kind());
            self.members.push(entity);
        }
    }

    /// Remove exactly the destroyed members, detaching each from the stage
    pub fn prune_destroyed(&mut self, stage: &mut dyn Stage) {
        self.members.retain(|m| {
            if m.is_destroyed() {
                stage.detach(m.id());
                false
            } else {
                true
            }
        });
    }

    /// Remove every member unconditionally (level transition / restart)
    pub fn clear_all(&mut self, stage: &mut dyn Stage) {
        for m in &self.members {
            stage.detach(m.id());
        }
        self.members.clear();
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.members.iter_mut()
    }

    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.members.iter_mut().find(|m| m.id() == id)
    }
}

impl<T: Simulated> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All hostile units on the field
#[derive(Default)]
pub struct EnemyManager {
    pub roster: Roster<Enemy>,
}

impl EnemyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-frame update in insertion order; destroyed members are skipped
    /// (they are gone as of the next prune and must have no further effect)
    pub fn update_all(&mut self, rng: &mut Pcg32) {
        for enemy in self.roster.iter_mut() {
            if !enemy.is_destroyed() {
                enemy.update(rng);
            }
        }
    }
}

/// User-fired and enemy-fired projectiles, in separate rosters
#[derive(Default)]
pub struct ProjectileManager {
    pub user: Roster<Projectile>,
    pub hostile: Roster<Projectile>,
}

impl ProjectileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update both rosters, collecting any events raised (area shots
    /// arming) for the orchestrator.
    pub fn update_all(&mut self) -> Vec<(EntityId, ProjectileEvent)> {
        let mut events = Vec::new();
        for shot in self.user.iter_mut().chain(self.hostile.iter_mut()) {
            if shot.is_destroyed() {
                continue;
            }
            if let Some(event) = shot.update() {
                events.push((shot.id(), event));
            }
        }
        events
    }

    /// Ask every live enemy for one probabilistic fire attempt and enqueue
    /// whatever comes back into the enemy-fired roster.
    pub fn generate_enemy_fire(
        &mut self,
        enemies: &EnemyManager,
        ids: &mut IdAlloc,
        rng: &mut Pcg32,
        stage: &mut dyn Stage,
    ) {
        for enemy in enemies.roster.iter() {
            if enemy.is_destroyed() {
                continue;
            }
            self.hostile.add(enemy.try_fire(ids, rng), stage);
        }
    }

    pub fn prune_destroyed(&mut self, stage: &mut dyn Stage) {
        self.user.prune_destroyed(stage);
        self.hostile.prune_destroyed(stage);
    }

    pub fn clear_all(&mut self, stage: &mut dyn Stage) {
        self.user.clear_all(stage);
        self.hostile.clear_all(stage);
    }
}

/// Collectibles on the field
#[derive(Default)]
pub struct PowerUpManager {
    pub roster: Roster<PowerUp>,
}

impl PowerUpManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_all(&mut self) {
        for p in self.roster.iter_mut() {
            if !p.is_destroyed() {
                p.update();
            }
        }
    }
}
