//! Collision detection and resolution across entity categories
//!
//! Four passes, each a double iteration over two collections with a rect
//! intersection test per pair. Damage is applied through `Destructible`,
//! which is where the per-category policies live (shield immunity,
//! instant projectile death), so the passes stay uniform.
//!
//! No pass removes entities: a projectile that overlaps several enemies in
//! one tick damages all of them, and the marked-destroyed members are
//! swept by the next prune phase.

use crate::audio::{AudioSink, Cue};

use super::entity::Destructible;
use super::managers::{EnemyManager, PowerUpManager, Roster};
use super::player::PlayerUnit;
use super::projectile::Projectile;

/// Player vs every enemy: on overlap both take one damage (symmetric)
pub fn melee_pass(player: &mut PlayerUnit, enemies: &mut EnemyManager) {
    let player_bounds = player.bounds();
    for enemy in enemies.roster.iter_mut() {
        if player_bounds.intersects(&enemy.bounds()) {
            player.take_damage();
            enemy.take_damage();
        }
    }
}

/// User projectiles vs enemies
///
/// Each enemy is tested against its incoming hitbox (the boss exposes a
/// reduced one). On overlap the projectile self-destructs and the enemy
/// takes damage, which the boss ignores while shielded. No early exit: one
/// projectile can damage every enemy it overlaps this tick.
pub fn user_projectile_pass(shots: &mut Roster<Projectile>, enemies: &mut EnemyManager) {
    for shot in shots.iter_mut() {
        for enemy in enemies.roster.iter_mut() {
            if shot.bounds().intersects(&enemy.incoming_hitbox()) {
                shot.take_damage();
                enemy.take_damage();
            }
        }
    }
}

/// Enemy projectiles vs the player: both take damage on overlap
pub fn enemy_projectile_pass(shots: &mut Roster<Projectile>, player: &mut PlayerUnit) {
    let player_bounds = player.bounds();
    for shot in shots.iter_mut() {
        if shot.bounds().intersects(&player_bounds) {
            shot.take_damage();
            player.take_damage();
        }
    }
}

/// Power-ups vs the player: apply the collection effect, then destroy the
/// power-up (its destruction doubles as the collected signal)
pub fn power_up_pass(
    power_ups: &mut PowerUpManager,
    player: &mut PlayerUnit,
    audio: &mut dyn AudioSink,
) {
    let player_bounds = player.bounds();
    for power_up in power_ups.roster.iter_mut() {
        if power_up.bounds().intersects(&player_bounds) {
            power_up.apply(player);
            audio.play(Cue::PowerUpCollected);
            power_up.destroy();
        }
    }
}
