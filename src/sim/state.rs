//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameSession`]; the tick and input
//! functions take it explicitly.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::{GapBounds, generate};
use crate::difficulty::DifficultyTier;
use crate::progression::UnlockState;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunState {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an explicit reset
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Hit an obstacle outside its gap
    Collision,
    /// Left the playfield through the top or bottom
    OutOfBounds,
}

/// Things the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    RunStarted,
    /// Run score after an obstacle was cleared
    ScoreChanged(u32),
    NewBest { tier: DifficultyTier, score: u32 },
    /// A best score landed on the unlock threshold; menus should refresh
    UnlocksChanged(UnlockState),
    RunOver(EndCause),
}

/// The player's avatar. Its column is fixed (`Tuning::avatar_x`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Vertical centre (pixels, down is positive)
    pub y: f32,
    /// Vertical velocity (pixels/tick, down is positive)
    pub vy: f32,
}

impl Avatar {
    /// Avatar at rest in the vertical middle of the playfield
    pub fn new(height: f32) -> Self {
        Self {
            y: height / 2.0,
            vy: 0.0,
        }
    }

    pub fn center(&self, avatar_x: f32) -> Vec2 {
        Vec2::new(avatar_x, self.y)
    }

    /// One explicit Euler step
    pub fn fall(&mut self, gravity: f32) {
        self.vy += gravity;
        self.y += self.vy;
    }

    /// Overwrite velocity with the jump impulse
    pub fn jump(&mut self, impulse: f32) {
        self.vy = impulse;
    }
}

/// A gapped obstacle column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom of the upper segment
    pub gap_top: f32,
    /// Top of the lower segment
    pub gap_bottom: f32,
    /// Already counted toward the run score
    pub scored: bool,
}

impl Obstacle {
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_bottom - self.gap_top
    }
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    pub tier: DifficultyTier,
    pub avatar: Avatar,
    /// Left to right by `x`
    pub obstacles: VecDeque<Obstacle>,
    pub run_state: RunState,
    pub score: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameSession {
    /// Fresh run: centred avatar, two obstacles just past the right edge
    pub fn new<R: Rng>(tier: DifficultyTier, tuning: &Tuning, rng: &mut R) -> Self {
        let bounds = GapBounds::from_tuning(tuning);
        let first_x = tuning.width + tuning.first_obstacle_offset;

        let mut obstacles = VecDeque::with_capacity(3);
        obstacles.push_back(generate(first_x, tier.gap(), &bounds, rng));
        obstacles.push_back(generate(
            first_x + tuning.obstacle_spacing,
            tier.gap(),
            &bounds,
            rng,
        ));

        Self {
            tier,
            avatar: Avatar::new(tuning.height),
            obstacles,
            run_state: RunState::NotStarted,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.run_state == RunState::Playing
    }

    pub fn is_over(&self) -> bool {
        self.run_state == RunState::Over
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fall_is_explicit_euler() {
        let mut avatar = Avatar::new(640.0);
        assert_eq!(avatar.y, 320.0);
        avatar.fall(0.38);
        assert!((avatar.vy - 0.38).abs() < 1e-6);
        assert!((avatar.y - 320.38).abs() < 1e-3);
        avatar.fall(0.38);
        assert!((avatar.vy - 0.76).abs() < 1e-6);
        assert!((avatar.y - 321.14).abs() < 1e-3);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut avatar = Avatar::new(640.0);
        avatar.vy = 9.0;
        avatar.jump(-6.0);
        assert_eq!(avatar.vy, -6.0);
        avatar.jump(-6.0);
        assert_eq!(avatar.vy, -6.0);
    }

    #[test]
    fn test_new_session_layout() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let session = GameSession::new(DifficultyTier::Medium, &tuning, &mut rng);

        assert_eq!(session.run_state, RunState::NotStarted);
        assert_eq!(session.score, 0);
        assert_eq!(session.obstacles.len(), 2);
        assert_eq!(session.obstacles[0].x, tuning.width + tuning.first_obstacle_offset);
        assert_eq!(
            session.obstacles[1].x,
            session.obstacles[0].x + tuning.obstacle_spacing
        );
        for obstacle in &session.obstacles {
            assert!(!obstacle.scored);
            assert_eq!(obstacle.gap_size(), DifficultyTier::Medium.gap());
        }
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut session = GameSession::new(DifficultyTier::Easy, &tuning, &mut rng);
        session.events.push(GameEvent::RunStarted);
        assert_eq!(session.drain_events(), vec![GameEvent::RunStarted]);
        assert!(session.drain_events().is_empty());
    }
}
