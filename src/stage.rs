//! Presentation attachment collaborator
//!
//! The simulation has no opinion on how entities are drawn. Whenever a
//! roster gains or loses an entity it notifies the injected `Stage`, which
//! a renderer can use to keep a scene graph in sync. Player health changes
//! are propagated the same way.

use crate::sim::{EntityId, EntityKind};

pub trait Stage {
    /// An entity joined the simulation
    fn attach(&mut self, id: EntityId, kind: EntityKind);

    /// An entity left the simulation (pruned or cleared)
    fn detach(&mut self, id: EntityId);

    /// Player health after this tick
    fn player_health(&mut self, health: i32);
}

/// Stage that ignores every notification; for headless use
#[derive(Debug, Default)]
pub struct NullStage;

impl Stage for NullStage {
    fn attach(&mut self, _id: EntityId, _kind: EntityKind) {}
    fn detach(&mut self, _id: EntityId) {}
    fn player_health(&mut self, _health: i32) {}
}

/// Stage that records every notification; used by tests to assert the
/// attach/detach pairing contract
#[derive(Debug, Default)]
pub struct RecordingStage {
    pub attached: Vec<(EntityId, EntityKind)>,
    pub detached: Vec<EntityId>,
    pub last_health: Option<i32>,
}

impl RecordingStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids currently attached and not yet detached
    pub fn live(&self) -> Vec<EntityId> {
        self.attached
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !self.detached.contains(id))
            .collect()
    }
}

impl Stage for RecordingStage {
    fn attach(&mut self, id: EntityId, kind: EntityKind) {
        self.attached.push((id, kind));
    }

    fn detach(&mut self, id: EntityId) {
        self.detached.push(id);
    }

    fn player_health(&mut self, health: i32) {
        self.last_health = Some(health);
    }
}
