//! Entity identity and the destruction contract
//!
//! Every simulated object carries a unique id (used by the presentation
//! collaborator to pair attach/detach calls) and a monotonic destroyed flag:
//! once an entity is destroyed it stays destroyed until it is pruned from
//! its roster.

use serde::{Deserialize, Serialize};

/// Unique handle for one simulated entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Monotonically increasing id allocator, one per level runtime
#[derive(Debug)]
pub struct IdAlloc {
    next: u32,
}

impl Default for IdAlloc {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAlloc {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Entity category, forwarded to the presentation layer on attach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Grunt,
    Boss,
    PlayerShot,
    EnemyShot,
    AreaShot,
    Fragment,
    PowerUp,
}

/// Take-damage/destroy contract for entities that can die
///
/// `destroy` is one-way: implementations never clear the flag. A destroyed
/// entity performs no further gameplay effects but stays in its roster until
/// the next prune phase, so the current tick's collision passes can still
/// see it.
pub trait Destructible {
    /// Category-specific damage effect (health decrement, immediate
    /// destruction, shield no-op...)
    fn take_damage(&mut self);

    /// Mark the entity destroyed
    fn destroy(&mut self);

    fn is_destroyed(&self) -> bool;
}

/// Roster membership contract: identity plus the destruction flag
pub trait Simulated: Destructible {
    fn id(&self) -> EntityId;
    fn kind(&self) -> EntityKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_alloc_unique_and_increasing() {
        let mut ids = IdAlloc::new();
        let a = ids.next();
        let b = ids.next();
        let c = ids.next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.0 < b.0 && b.0 < c.0);
    }
}
