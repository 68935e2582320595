//! The boss: a heavyweight enemy with a shuffled move pattern and a shield
//!
//! Movement replays a shuffled list of vertical velocities in fixed-length
//! chunks, reshuffling every time a chunk completes, which gives the boss a
//! jittery but bounded drift. The shield is a timer state machine: a small
//! per-tick chance to raise it, complete damage immunity while raised, and
//! an automatic drop after a fixed frame count.
//!
//! The boss also exposes a reduced hitbox (bounds inset on all sides) used
//! only for incoming-projectile tests; melee and penetration checks use the
//! full bounds.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::entity::{Destructible, EntityId, EntityKind, IdAlloc, Simulated};
use super::projectile::Projectile;
use super::rect::Rect;
use crate::consts::*;

pub struct Boss {
    id: EntityId,
    pub pos: Vec2,
    health: i32,
    destroyed: bool,
    move_pattern: Vec<f32>,
    move_index: usize,
    frames_in_current_move: u32,
    shielded: bool,
    shield_frames: u32,
}

impl Boss {
    pub fn new(id: EntityId, health: i32, rng: &mut Pcg32) -> Self {
        let mut move_pattern = Vec::with_capacity(BOSS_MOVE_FREQUENCY * 3);
        for _ in 0..BOSS_MOVE_FREQUENCY {
            move_pattern.push(BOSS_VERTICAL_VELOCITY);
            move_pattern.push(-BOSS_VERTICAL_VELOCITY);
            move_pattern.push(0.0);
        }
        move_pattern.shuffle(rng);

        Self {
            id,
            pos: Vec2::new(BOSS_START_X, BOSS_START_Y),
            health,
            destroyed: false,
            move_pattern,
            move_index: 0,
            frames_in_current_move: 0,
            shielded: false,
            shield_frames: 0,
        }
    }

    /// Advance movement and the shield timer by one tick
    pub fn update(&mut self, rng: &mut Pcg32) {
        let dy = self.next_move(rng);
        self.pos.y += dy;

        // Clamp to the play field on all four sides
        self.pos.y = self.pos.y.clamp(0.0, FIELD_HEIGHT - BOSS_HEIGHT);
        self.pos.x = self.pos.x.clamp(0.0, FIELD_WIDTH - BOSS_WIDTH);

        self.update_shield(rng);
    }

    /// Current pattern entry; every `BOSS_MOVE_REPEAT_FRAMES` frames the
    /// pattern is reshuffled and the cursor advances, wrapping at the end.
    fn next_move(&mut self, rng: &mut Pcg32) -> f32 {
        let current = self.move_pattern[self.move_index];
        self.frames_in_current_move += 1;
        if self.frames_in_current_move == BOSS_MOVE_REPEAT_FRAMES {
            self.move_pattern.shuffle(rng);
            self.frames_in_current_move = 0;
            self.move_index += 1;
        }
        if self.move_index == self.move_pattern.len() {
            self.move_index = 0;
        }
        current
    }

    fn update_shield(&mut self, rng: &mut Pcg32) {
        if self.shielded {
            self.shield_frames += 1;
            if self.shield_frames >= BOSS_SHIELD_FRAMES {
                self.shielded = false;
                self.shield_frames = 0;
                log::debug!("boss shield expired");
            }
        } else if rng.random::<f64>() < BOSS_SHIELD_RATE {
            self.shielded = true;
            self.shield_frames = 0;
            log::debug!("boss shield raised");
        }
    }

    /// Probabilistic ranged attack; at most one area shot per tick
    pub fn try_fire(&self, ids: &mut IdAlloc, rng: &mut Pcg32) -> Option<Projectile> {
        if rng.random::<f64>() < BOSS_FIRE_RATE {
            Some(Projectile::area_shot(ids.next(), self.pos.y + BOSS_MUZZLE_Y))
        } else {
            None
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, Vec2::new(BOSS_WIDTH, BOSS_HEIGHT))
    }

    /// Reduced hitbox for incoming-projectile tests only
    pub fn reduced_hitbox(&self) -> Rect {
        self.bounds().inset(BOSS_HITBOX_INSET)
    }

    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    #[cfg(test)]
    pub(crate) fn force_shield(&mut self, on: bool) {
        self.shielded = on;
        self.shield_frames = 0;
    }
}

impl Destructible for Boss {
    /// Complete immunity while shielded; otherwise one health per hit
    fn take_damage(&mut self) {
        if self.shielded {
            return;
        }
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

impl Simulated for Boss {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Boss
    }
}
