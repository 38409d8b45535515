//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - Obstacles kept in left-to-right order
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use collision::{HitBox, avatar_obstacle_collision, avatar_out_of_bounds, check_end};
pub use obstacle::{GapBounds, generate};
pub use state::{Avatar, EndCause, GameEvent, GameSession, Obstacle, RunState};
pub use tick::{jump, tick};
