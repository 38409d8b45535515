//! Idle/demo mode - a simple policy that plays the game
//!
//! Looks at the next obstacle the avatar still has to clear and jumps when
//! the avatar is about to sink below that gap. Used by the headless demo and
//! for attract-mode screens.

use super::state::{GameSession, RunState};
use crate::tuning::Tuning;

/// Distance above the gap bottom the avatar tries to stay clear of
const FLOOR_CUSHION: f32 = 8.0;

/// Vertical target the autopilot tries to stay above: the bottom of the
/// next uncleared gap, or the playfield floor when nothing is ahead.
pub fn target_floor(session: &GameSession, tuning: &Tuning) -> f32 {
    let avatar_left = tuning.avatar_x - tuning.hit_radius();
    session
        .obstacles
        .iter()
        .find(|o| o.right_edge(tuning.obstacle_width) >= avatar_left)
        .map(|o| o.gap_bottom)
        .unwrap_or(tuning.height)
}

/// Whether the autopilot would press jump before the next tick
pub fn wants_jump(session: &GameSession, tuning: &Tuning) -> bool {
    match session.run_state {
        RunState::Over => false,
        RunState::NotStarted => true,
        RunState::Playing => {
            let avatar = session.avatar;
            if avatar.vy < 0.0 {
                return false;
            }
            // Where the bottom of the hitbox lands after the next tick
            let next_vy = avatar.vy + tuning.gravity;
            let next_bottom = avatar.y + next_vy + tuning.hit_radius();
            next_bottom > target_floor(session, tuning) - FLOOR_CUSHION
        }
    }
}
