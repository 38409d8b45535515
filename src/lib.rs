//! Flappy Fin - A single-screen gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Per-tick simulation (physics, obstacle stream, collisions)
//! - `game`: Run state machine, scoring and the presentation snapshot
//! - `progression`: Difficulty and cosmetic unlock gates
//! - `highscores`: Per-difficulty best scores
//! - `persistence`: Key-value storage adapters
//! - `platform`: Browser/native platform glue
//! - `tuning`: Data-driven game balance

pub mod cosmetic;
pub mod difficulty;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod progression;
pub mod sim;
pub mod tuning;

pub use cosmetic::CosmeticChoice;
pub use difficulty::{DifficultyTier, TierConfig};
pub use game::{Game, Snapshot};
pub use highscores::HighScores;
pub use persistence::{KeyValueStore, MemoryStore, PersistenceError};
pub use progression::{Progression, UnlockState};
pub use tuning::{ConfigurationError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Downward acceleration added to the avatar velocity every tick
    pub const GRAVITY: f32 = 0.38;
    /// Velocity the avatar is set to on jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -6.0;

    /// Avatar defaults - fixed column, circular body
    pub const AVATAR_X: f32 = 90.0;
    pub const AVATAR_RADIUS: f32 = 18.0;
    /// Smaller hitbox used when the forgiving hitbox is enabled
    pub const AVATAR_FORGIVING_RADIUS: f32 = 14.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_SPACING: f32 = 200.0;
    pub const OBSTACLE_SPEED: f32 = 2.4;
    /// Distance past the right edge where the first obstacle of a run spawns
    pub const FIRST_OBSTACLE_OFFSET: f32 = 80.0;

    /// Minimum distance between the playfield top and a gap
    pub const GAP_TOP_MARGIN: f32 = 80.0;
    /// Minimum distance between a gap and the playfield bottom
    pub const GAP_BOTTOM_MARGIN: f32 = 120.0;

    /// Best score on the prerequisite tier that opens the next gate
    pub const UNLOCK_THRESHOLD: u32 = 10;
}
