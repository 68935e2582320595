//! Falling collectibles
//!
//! A power-up drops at constant speed and destroys itself past the cull
//! line. Taking damage doubles as the "collected" signal; the collision
//! pass applies the effect to the player first and then destroys it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Destructible, EntityId, EntityKind, Simulated};
use super::player::PlayerUnit;
use super::rect::Rect;
use crate::consts::*;

/// Named effect applied to the player on collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Grants one spread-shot charge
    SpreadShot,
}

pub struct PowerUp {
    id: EntityId,
    pub pos: Vec2,
    kind: PowerUpKind,
    destroyed: bool,
}

impl PowerUp {
    pub fn new(id: EntityId, kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            kind,
            destroyed: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += POWER_UP_FALL_SPEED;
        if self.pos.y > POWER_UP_CULL_Y {
            self.destroy();
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, Vec2::new(POWER_UP_WIDTH, POWER_UP_HEIGHT))
    }

    /// Apply the collection effect to the player
    pub fn apply(&self, player: &mut PlayerUnit) {
        match self.kind {
            PowerUpKind::SpreadShot => player.grant_spread_charge(),
        }
    }
}

impl Destructible for PowerUp {
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

impl Simulated for PowerUp {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::PowerUp
    }
}
