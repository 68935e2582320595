//! The player-controlled unit
//!
//! Movement is intent-driven: the input collaborator sets -1/0/+1 velocity
//! multipliers per axis and the per-tick update applies them, refusing any
//! step that would leave the bounded play rectangle. Firing emits one
//! projectile, or a five-shot spread while a spread-shot charge is pending.

use glam::Vec2;

use super::entity::{Destructible, EntityId, EntityKind, IdAlloc, Simulated};
use super::projectile::Projectile;
use super::rect::Rect;
use crate::consts::*;

pub struct PlayerUnit {
    id: EntityId,
    pub pos: Vec2,
    health: i32,
    destroyed: bool,
    vx_intent: i32,
    vy_intent: i32,
    kills: u32,
    spread_charges: u32,
}

impl PlayerUnit {
    pub fn new(id: EntityId, health: i32) -> Self {
        Self {
            id,
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            health,
            destroyed: false,
            vx_intent: 0,
            vy_intent: 0,
            kills: 0,
            spread_charges: 0,
        }
    }

    /// Apply movement intents; a step that would cross a bound is dropped
    /// for that axis (the unit stops at its current position rather than
    /// clamping to the edge).
    pub fn update(&mut self) {
        if self.vy_intent != 0 {
            let new_y = self.pos.y + PLAYER_SPEED * self.vy_intent as f32;
            if (PLAYER_MIN_Y..=PLAYER_MAX_Y).contains(&new_y) {
                self.pos.y = new_y;
            }
        }
        if self.vx_intent != 0 {
            let new_x = self.pos.x + PLAYER_SPEED * self.vx_intent as f32;
            if (PLAYER_MIN_X..=PLAYER_MAX_X).contains(&new_x) {
                self.pos.x = new_x;
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    /// Produce this fire action's projectiles: five offset shots while a
    /// spread charge is pending (consuming it), one otherwise.
    pub fn fire(&mut self, ids: &mut IdAlloc) -> Vec<Projectile> {
        let muzzle = self.pos + Vec2::new(PLAYER_MUZZLE_X, PLAYER_MUZZLE_Y);
        if self.spread_charges > 0 {
            self.spread_charges -= 1;
            SPREAD_OFFSETS
                .iter()
                .map(|dy| Projectile::player_shot(ids.next(), muzzle + Vec2::new(0.0, *dy)))
                .collect()
        } else {
            vec![Projectile::player_shot(ids.next(), muzzle)]
        }
    }

    pub fn grant_spread_charge(&mut self) {
        self.spread_charges += 1;
    }

    pub fn spread_charges(&self) -> u32 {
        self.spread_charges
    }

    pub fn record_kill(&mut self) {
        self.kills += 1;
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    // Movement intents, driven by the input collaborator.

    pub fn move_up(&mut self) {
        self.vy_intent = -1;
    }

    pub fn move_down(&mut self) {
        self.vy_intent = 1;
    }

    pub fn move_left(&mut self) {
        self.vx_intent = -1;
    }

    pub fn move_right(&mut self) {
        self.vx_intent = 1;
    }

    pub fn stop_vertical(&mut self) {
        self.vy_intent = 0;
    }

    pub fn stop_horizontal(&mut self) {
        self.vx_intent = 0;
    }
}

impl Destructible for PlayerUnit {
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

impl Simulated for PlayerUnit {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> PlayerUnit {
        PlayerUnit::new(EntityId(1), 5)
    }

    #[test]
    fn test_movement_respects_bounds() {
        let mut p = player();
        p.pos.y = PLAYER_MIN_Y;
        p.move_up();
        p.update();
        assert_eq!(p.pos.y, PLAYER_MIN_Y);

        p.stop_vertical();
        p.move_down();
        p.update();
        assert_eq!(p.pos.y, PLAYER_MIN_Y + PLAYER_SPEED);
    }

    #[test]
    fn test_single_then_spread_fire() {
        let mut p = player();
        let mut ids = IdAlloc::new();

        assert_eq!(p.fire(&mut ids).len(), 1);

        p.grant_spread_charge();
        assert_eq!(p.spread_charges(), 1);
        let volley = p.fire(&mut ids);
        assert_eq!(volley.len(), 5);
        assert_eq!(p.spread_charges(), 0);

        // Charge consumed: back to single shots
        assert_eq!(p.fire(&mut ids).len(), 1);
    }

    #[test]
    fn test_damage_to_destruction() {
        let mut p = player();
        for _ in 0..4 {
            p.take_damage();
            assert!(!p.is_destroyed());
        }
        p.take_damage();
        assert!(p.is_destroyed());
        assert_eq!(p.health(), 0);
    }
}
