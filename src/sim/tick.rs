//! Per-frame simulation tick
//!
//! One call per display refresh, driven by the presentation layer. Ticks
//! outside `RunState::Playing` do nothing.

use rand::Rng;

use super::collision::{HitBox, check_end};
use super::obstacle::{GapBounds, generate};
use super::state::{GameEvent, GameSession, RunState};
use crate::tuning::Tuning;

/// Discrete jump input.
///
/// Starts the run from `NotStarted` and applies the impulse in the same
/// step, so the avatar moves on the very first input. Ignored once the run
/// is over. Returns true if the input was applied.
pub fn jump(session: &mut GameSession, tuning: &Tuning) -> bool {
    match session.run_state {
        RunState::Over => return false,
        RunState::NotStarted => {
            session.run_state = RunState::Playing;
            session.events.push(GameEvent::RunStarted);
            log::debug!("Run started on {}", session.tier.name());
        }
        RunState::Playing => {}
    }
    session.avatar.jump(tuning.jump_impulse);
    true
}

/// Advance the session by one tick. Returns how many obstacles were
/// cleared during this tick.
pub fn tick<R: Rng>(session: &mut GameSession, tuning: &Tuning, rng: &mut R) -> u32 {
    if session.run_state != RunState::Playing {
        return 0;
    }
    session.time_ticks += 1;

    // Gravity
    session.avatar.fall(tuning.gravity);

    // Scroll
    for obstacle in session.obstacles.iter_mut() {
        obstacle.x -= tuning.obstacle_speed;
    }

    // Evict the leftmost obstacle once fully off-screen
    if session
        .obstacles
        .front()
        .is_some_and(|o| o.right_edge(tuning.obstacle_width) < 0.0)
    {
        session.obstacles.pop_front();
    }

    // Keep at least two obstacles queued
    if session.obstacles.len() < 2 {
        let x = session
            .obstacles
            .back()
            .map(|o| o.x + tuning.obstacle_spacing)
            .unwrap_or(tuning.width + tuning.first_obstacle_offset);
        let bounds = GapBounds::from_tuning(tuning);
        session
            .obstacles
            .push_back(generate(x, session.tier.gap(), &bounds, rng));
    }

    // Score obstacles whose right edge passed the avatar column
    let mut cleared = 0;
    for obstacle in session.obstacles.iter_mut() {
        if !obstacle.scored && obstacle.right_edge(tuning.obstacle_width) < tuning.avatar_x {
            obstacle.scored = true;
            session.score += 1;
            cleared += 1;
            session.events.push(GameEvent::ScoreChanged(session.score));
        }
    }

    // Collisions
    let hit_box = HitBox::around(session.avatar.center(tuning.avatar_x), tuning.hit_radius());
    if let Some(cause) = check_end(
        &hit_box,
        &session.obstacles,
        tuning.obstacle_width,
        tuning.height,
    ) {
        session.run_state = RunState::Over;
        session.events.push(GameEvent::RunOver(cause));
        log::debug!(
            "Run over ({:?}) after {} ticks with score {}",
            cause,
            session.time_ticks,
            session.score
        );
    }

    cleared
}
