//! Fixed-timestep combat simulation
//!
//! Deterministic given a seed and an input sequence: all randomness flows
//! through one seeded PCG32 stream and entities advance in insertion order.

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod entity;
pub mod level;
pub mod managers;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use boss::Boss;
pub use enemy::{Enemy, EnemyUnit};
pub use entity::{Destructible, EntityId, EntityKind, IdAlloc, Simulated};
pub use level::{ConfigError, LevelConfig, LevelId, LevelRegistry, SpawnPolicy, WinCondition};
pub use managers::{EnemyManager, PowerUpManager, ProjectileManager, Roster};
pub use player::PlayerUnit;
pub use powerup::{PowerUp, PowerUpKind};
pub use projectile::{Projectile, ProjectileEvent, ProjectileKind};
pub use rect::Rect;
pub use state::{GameState, GameStateManager};
pub use tick::{LevelRuntime, TimerAction, TimerQueue};
