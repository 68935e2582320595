//! Projectiles: player shots, enemy shots, boss area shots and fragments
//!
//! All projectiles fly at constant velocity and die instantly when damaged.
//! The boss area shot is the odd one out: once it drifts past its trigger
//! line it arms, and the orchestrator schedules a delayed detonation that
//! bursts it into short-lived fragments with randomized velocities.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::{Destructible, EntityId, EntityKind, IdAlloc, Simulated};
use super::rect::Rect;
use crate::consts::*;

/// Per-kind movement and trigger state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileKind {
    PlayerShot,
    EnemyShot,
    /// Boss ranged attack; `armed` latches once the trigger line is crossed
    AreaShot { armed: bool },
    Fragment,
}

/// Raised by a projectile's update for the orchestrator to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileEvent {
    /// An area shot crossed its trigger line this tick
    Armed,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    id: EntityId,
    pub pos: Vec2,
    vel: Vec2,
    kind: ProjectileKind,
    destroyed: bool,
}

impl Projectile {
    pub fn player_shot(id: EntityId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::new(PLAYER_SHOT_VELOCITY_X, 0.0),
            kind: ProjectileKind::PlayerShot,
            destroyed: false,
        }
    }

    pub fn enemy_shot(id: EntityId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::new(ENEMY_SHOT_VELOCITY_X, 0.0),
            kind: ProjectileKind::EnemyShot,
            destroyed: false,
        }
    }

    /// Boss area shot; spawns at the fixed attack line, at the given height
    pub fn area_shot(id: EntityId, y: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(AREA_SHOT_START_X, y),
            vel: Vec2::new(AREA_SHOT_VELOCITY_X, 0.0),
            kind: ProjectileKind::AreaShot { armed: false },
            destroyed: false,
        }
    }

    pub fn fragment(id: EntityId, pos: Vec2, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            kind: ProjectileKind::Fragment,
            destroyed: false,
        }
    }

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    fn size(&self) -> Vec2 {
        match self.kind {
            ProjectileKind::PlayerShot => Vec2::new(PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT),
            ProjectileKind::EnemyShot => Vec2::new(ENEMY_SHOT_WIDTH, ENEMY_SHOT_HEIGHT),
            ProjectileKind::AreaShot { .. } => Vec2::new(AREA_SHOT_WIDTH, AREA_SHOT_HEIGHT),
            ProjectileKind::Fragment => Vec2::new(FRAGMENT_WIDTH, FRAGMENT_HEIGHT),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, self.size())
    }

    /// Advance one tick; reports `Armed` the tick an area shot crosses its
    /// trigger line (exactly once per projectile).
    pub fn update(&mut self) -> Option<ProjectileEvent> {
        self.pos += self.vel;
        if let ProjectileKind::AreaShot { armed: false } = self.kind
            && self.pos.x < AREA_SHOT_ARM_X
        {
            self.kind = ProjectileKind::AreaShot { armed: true };
            return Some(ProjectileEvent::Armed);
        }
        None
    }

    /// True once the projectile is a full margin outside the play field
    pub fn is_offscreen(&self) -> bool {
        let b = self.bounds();
        b.max.x < -OFFSCREEN_MARGIN
            || b.min.x > FIELD_WIDTH + OFFSCREEN_MARGIN
            || b.max.y < -OFFSCREEN_MARGIN
            || b.min.y > FIELD_HEIGHT + OFFSCREEN_MARGIN
    }

    /// Build the fragment burst for a detonating area shot
    pub fn burst_fragments(origin: Vec2, ids: &mut IdAlloc, rng: &mut Pcg32) -> Vec<Projectile> {
        (0..AREA_FRAGMENT_COUNT)
            .map(|_| {
                let vel = Vec2::new(
                    rng.random_range(FRAGMENT_MIN_VX..FRAGMENT_MAX_VX),
                    rng.random_range(FRAGMENT_MIN_VY..FRAGMENT_MAX_VY),
                );
                Projectile::fragment(ids.next(), origin, vel)
            })
            .collect()
    }
}

impl Destructible for Projectile {
    /// Projectiles have no health: any damage destroys them
    fn take_damage(&mut self) {
        self.destroy();
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl Simulated for Projectile {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        match self.kind {
            ProjectileKind::PlayerShot => EntityKind::PlayerShot,
            ProjectileKind::EnemyShot => EntityKind::EnemyShot,
            ProjectileKind::AreaShot { .. } => EntityKind::AreaShot,
            ProjectileKind::Fragment => EntityKind::Fragment,
        }
    }
}
