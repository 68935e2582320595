//! Sky Strike - a side-scrolling arcade combat simulation engine
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (entities, managers, collisions, levels)
//! - `stage`: Presentation attachment collaborator (how entities reach a renderer)
//! - `audio`: Sound-effect collaborator trait
//!
//! The engine is headless: rendering, audio playback and input devices live
//! outside the crate and talk to it through the `stage` and `audio` traits
//! and the movement/fire intents on `sim::LevelRuntime`.

pub mod audio;
pub mod sim;
pub mod stage;

pub use audio::{AudioSink, Cue, NullAudio};
pub use sim::{GameState, LevelConfig, LevelId, LevelRegistry, LevelRuntime};
pub use stage::{NullStage, Stage};

/// Game configuration constants
pub mod consts {
    /// Simulation cadence (ticks per second)
    pub const TICK_HZ: u32 = 20;
    /// Fixed tick interval in milliseconds
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 1300.0;
    pub const FIELD_HEIGHT: f32 = 750.0;
    /// Enemies never spawn below this line (leaves room for ground UI)
    pub const ENEMY_MAX_SPAWN_Y: f32 = FIELD_HEIGHT - 150.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_START_X: f32 = 5.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Per-axis speed in pixels per tick, scaled by the -1/0/+1 intent
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_MIN_Y: f32 = 0.0;
    pub const PLAYER_MAX_Y: f32 = 630.0;
    pub const PLAYER_MIN_X: f32 = 0.0;
    pub const PLAYER_MAX_X: f32 = 1000.0;
    /// Muzzle offset from the player's top-left corner
    pub const PLAYER_MUZZLE_X: f32 = 100.0;
    pub const PLAYER_MUZZLE_Y: f32 = 20.0;
    /// Vertical offsets of the five spread-shot projectiles
    pub const SPREAD_OFFSETS: [f32; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

    /// Grunt enemy defaults
    pub const GRUNT_WIDTH: f32 = 90.0;
    pub const GRUNT_HEIGHT: f32 = 65.0;
    pub const GRUNT_VELOCITY_X: f32 = -6.0;
    pub const GRUNT_HEALTH: i32 = 1;
    /// Per-tick probability of a grunt firing
    pub const GRUNT_FIRE_RATE: f64 = 0.01;
    pub const GRUNT_MUZZLE_X: f32 = -100.0;
    pub const GRUNT_MUZZLE_Y: f32 = 50.0;

    /// Boss defaults
    pub const BOSS_WIDTH: f32 = 260.0;
    pub const BOSS_HEIGHT: f32 = 200.0;
    pub const BOSS_START_X: f32 = 1000.0;
    pub const BOSS_START_Y: f32 = 400.0;
    pub const BOSS_HEALTH: i32 = 60;
    /// Vertical speed of each non-zero move-pattern entry
    pub const BOSS_VERTICAL_VELOCITY: f32 = 8.0;
    /// How many copies of each velocity (+v, -v, 0) seed the move pattern
    pub const BOSS_MOVE_FREQUENCY: usize = 5;
    /// Frames a pattern entry is replayed before advancing and reshuffling
    pub const BOSS_MOVE_REPEAT_FRAMES: u32 = 10;
    /// Per-tick probability of firing an area shot
    pub const BOSS_FIRE_RATE: f64 = 0.015;
    /// Per-tick probability of raising the shield while it is down
    pub const BOSS_SHIELD_RATE: f64 = 0.003;
    /// Shield auto-drops after this many shielded frames
    pub const BOSS_SHIELD_FRAMES: u32 = 250;
    /// Inset applied to the boss bounds for incoming-projectile tests
    pub const BOSS_HITBOX_INSET: f32 = 80.0;
    /// Muzzle offset from the boss's top edge
    pub const BOSS_MUZZLE_Y: f32 = 75.0;

    /// Projectile defaults
    pub const PLAYER_SHOT_WIDTH: f32 = 60.0;
    pub const PLAYER_SHOT_HEIGHT: f32 = 18.0;
    pub const PLAYER_SHOT_VELOCITY_X: f32 = 18.0;
    pub const ENEMY_SHOT_WIDTH: f32 = 40.0;
    pub const ENEMY_SHOT_HEIGHT: f32 = 16.0;
    pub const ENEMY_SHOT_VELOCITY_X: f32 = -10.0;
    pub const AREA_SHOT_WIDTH: f32 = 70.0;
    pub const AREA_SHOT_HEIGHT: f32 = 50.0;
    pub const AREA_SHOT_VELOCITY_X: f32 = -5.0;
    pub const AREA_SHOT_START_X: f32 = 950.0;
    /// The area shot arms once it drifts left of this x coordinate
    pub const AREA_SHOT_ARM_X: f32 = 300.0;
    /// Ticks between arming and detonation (1 second)
    pub const AREA_SHOT_DETONATE_DELAY: u64 = 20;
    pub const AREA_FRAGMENT_COUNT: usize = 3;
    pub const FRAGMENT_WIDTH: f32 = 40.0;
    pub const FRAGMENT_HEIGHT: f32 = 40.0;
    /// Fragments self-destruct this many ticks after spawning (2 seconds)
    pub const FRAGMENT_LIFETIME: u64 = 40;
    pub const FRAGMENT_MIN_VX: f32 = -23.0;
    pub const FRAGMENT_MAX_VX: f32 = -3.0;
    pub const FRAGMENT_MIN_VY: f32 = -10.0;
    pub const FRAGMENT_MAX_VY: f32 = 15.0;

    /// Power-up defaults
    pub const POWER_UP_WIDTH: f32 = 40.0;
    pub const POWER_UP_HEIGHT: f32 = 40.0;
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;
    /// Power-ups falling past this y destroy themselves
    pub const POWER_UP_CULL_Y: f32 = 650.0;

    /// Projectiles this far outside the field are culled (when enabled)
    pub const OFFSCREEN_MARGIN: f32 = 100.0;
}
