//! Enemy units: the simple grunt and the category enum over grunt and boss
//!
//! Grunts drift left at constant speed with one health and a small per-tick
//! fire chance. The `Enemy` enum is what the enemy roster stores; it
//! dispatches update/fire/hitbox behavior without runtime type inspection.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::boss::Boss;
use super::entity::{Destructible, EntityId, EntityKind, IdAlloc, Simulated};
use super::projectile::Projectile;
use super::rect::Rect;
use crate::consts::*;

pub struct EnemyUnit {
    id: EntityId,
    pub pos: Vec2,
    health: i32,
    destroyed: bool,
    spawn_x: f32,
}

impl EnemyUnit {
    pub fn new(id: EntityId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            health: GRUNT_HEALTH,
            destroyed: false,
            spawn_x: pos.x,
        }
    }

    pub fn update(&mut self) {
        self.pos.x += GRUNT_VELOCITY_X;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, Vec2::new(GRUNT_WIDTH, GRUNT_HEIGHT))
    }

    pub fn try_fire(&self, ids: &mut IdAlloc, rng: &mut Pcg32) -> Option<Projectile> {
        if rng.random::<f64>() < GRUNT_FIRE_RATE {
            let muzzle = self.pos + Vec2::new(GRUNT_MUZZLE_X, GRUNT_MUZZLE_Y);
            Some(Projectile::enemy_shot(ids.next(), muzzle))
        } else {
            None
        }
    }

    /// Horizontal distance travelled since spawn
    pub fn travelled(&self) -> f32 {
        (self.pos.x - self.spawn_x).abs()
    }
}

impl Destructible for EnemyUnit {
    fn take_damage(&mut self) {
        self.health -= 1;
        if self.health <= 0 {
            self.destroy();
        }
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Simulated for EnemyUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Grunt
    }
}

/// Any hostile unit the enemy roster can hold
pub enum Enemy {
    Grunt(EnemyUnit),
    Boss(Boss),
}

impl Enemy {
    pub fn update(&mut self, rng: &mut Pcg32) {
        match self {
            Enemy::Grunt(g) => g.update(),
            Enemy::Boss(b) => b.update(rng),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Enemy::Grunt(g) => g.bounds(),
            Enemy::Boss(b) => b.bounds(),
        }
    }

    /// The shape incoming projectiles are tested against: the boss exposes
    /// its reduced hitbox, everything else its full bounds.
    pub fn incoming_hitbox(&self) -> Rect {
        match self {
            Enemy::Grunt(g) => g.bounds(),
            Enemy::Boss(b) => b.reduced_hitbox(),
        }
    }

    pub fn try_fire(&self, ids: &mut IdAlloc, rng: &mut Pcg32) -> Option<Projectile> {
        match self {
            Enemy::Grunt(g) => g.try_fire(ids, rng),
            Enemy::Boss(b) => b.try_fire(ids, rng),
        }
    }

    /// True once the unit has crossed the whole play field (defense breach).
    /// The boss is clamped to the field and can never trigger this.
    pub fn has_penetrated(&self, field_width: f32) -> bool {
        match self {
            Enemy::Grunt(g) => g.travelled() > field_width,
            Enemy::Boss(_) => false,
        }
    }
}

impl Destructible for Enemy {
    fn take_damage(&mut self) {
        match self {
            Enemy::Grunt(g) => g.take_damage(),
            Enemy::Boss(b) => b.take_damage(),
        }
    }

    fn destroy(&mut self) {
        match self {
            Enemy::Grunt(g) => g.destroy(),
            Enemy::Boss(b) => b.destroy(),
        }
    }

    fn is_destroyed(&self) -> bool {
        match self {
            Enemy::Grunt(g) => g.is_destroyed(),
            Enemy::Boss(b) => b.is_destroyed(),
        }
    }
}

impl Simulated for Enemy {
    fn id(&self) -> EntityId {
        match self {
            Enemy::Grunt(g) => g.id(),
            Enemy::Boss(b) => b.id(),
        }
    }

    fn kind(&self) -> EntityKind {
        match self {
            Enemy::Grunt(g) => g.kind(),
            Enemy::Boss(b) => b.kind(),
        }
    }
}
