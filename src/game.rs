//! Game loop and run state machine
//!
//! [`Game`] owns the current [`GameSession`] together with the tuning,
//! progression, persisted choices and RNG. The presentation layer drives it
//! with discrete events (`tick`, `jump`, `reset`, `select_difficulty`,
//! `select_cosmetic`) and reads back a [`Snapshot`] each frame.
//!
//! ```text
//! NotStarted --jump--> Playing --collision/bounds--> Over --reset--> NotStarted
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::cosmetic::CosmeticChoice;
use crate::difficulty::DifficultyTier;
use crate::persistence::KeyValueStore;
use crate::progression::{Progression, UnlockState};
use crate::sim::{self, Avatar, GameEvent, GameSession, Obstacle, RunState};
use crate::tuning::{ConfigurationError, Tuning};

/// Read-only view of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub avatar: Avatar,
    pub avatar_x: f32,
    pub visual_radius: f32,
    pub hit_radius: f32,
    pub obstacles: Vec<Obstacle>,
    pub obstacle_width: f32,
    pub run_state: RunState,
    pub score: u32,
    pub tier: DifficultyTier,
    pub tier_name: &'static str,
    pub best: u32,
    pub cosmetic: CosmeticChoice,
    /// Asset the avatar should be drawn with
    pub cosmetic_image: &'static str,
    pub unlocks: UnlockState,
}

/// A running game bound to a persistence backend
pub struct Game<S: KeyValueStore> {
    tuning: Tuning,
    store: S,
    progression: Progression,
    cosmetic: CosmeticChoice,
    session: GameSession,
    rng: Pcg32,
}

impl<S: KeyValueStore> Game<S> {
    /// Validate the tuning, load persisted progress and set up a fresh run
    /// on the easiest tier.
    pub fn new(tuning: Tuning, store: S, seed: u64) -> Result<Self, ConfigurationError> {
        tuning.validate()?;

        let progression = Progression::load(&store, tuning.progression);
        let mut cosmetic = CosmeticChoice::load(&store);
        if !progression.is_cosmetic_unlocked(cosmetic) {
            log::warn!(
                "Stored cosmetic {} is still locked, using {}",
                cosmetic.name(),
                CosmeticChoice::default().name()
            );
            cosmetic = CosmeticChoice::default();
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let session = GameSession::new(DifficultyTier::default(), &tuning, &mut rng);

        log::info!("Game ready (seed {seed}, gated: {})", progression.is_gated());

        Ok(Self {
            tuning,
            store,
            progression,
            cosmetic,
            session,
            rng,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn run_state(&self) -> RunState {
        self.session.run_state
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn tier(&self) -> DifficultyTier {
        self.session.tier
    }

    pub fn cosmetic(&self) -> CosmeticChoice {
        self.cosmetic
    }

    pub fn is_unlocked(&self, tier: DifficultyTier) -> bool {
        self.progression.is_unlocked(tier)
    }

    pub fn is_cosmetic_unlocked(&self, choice: CosmeticChoice) -> bool {
        self.progression.is_cosmetic_unlocked(choice)
    }

    /// Advance one frame. Every score increment is fed to progression so
    /// new bests are persisted as they happen.
    pub fn tick(&mut self) {
        let before = self.session.score;
        sim::tick(&mut self.session, &self.tuning, &mut self.rng);

        let tier = self.session.tier;
        for score in before + 1..=self.session.score {
            let outcome = self.progression.record_score(&mut self.store, tier, score);
            if outcome.new_best {
                self.session.events.push(GameEvent::NewBest { tier, score });
            }
            if outcome.unlocks_changed {
                self.session
                    .events
                    .push(GameEvent::UnlocksChanged(self.progression.unlock_state()));
            }
        }

        if self.session.is_over() && self.session.score > 0 {
            log::info!(
                "Run over on {}: {} (best {})",
                tier.name(),
                self.session.score,
                self.progression.best(tier)
            );
        }
    }

    /// Jump input. Starts the run if it has not started yet.
    pub fn jump(&mut self) -> bool {
        sim::jump(&mut self.session, &self.tuning)
    }

    /// Fresh run on the active tier. Undrained events carry over.
    pub fn reset(&mut self) {
        self.restart(self.session.tier);
    }

    fn restart(&mut self, tier: DifficultyTier) {
        let pending = self.session.drain_events();
        self.session = GameSession::new(tier, &self.tuning, &mut self.rng);
        self.session.events = pending;
    }

    /// Switch tier and reset. Locked tiers are refused.
    pub fn select_difficulty(&mut self, tier: DifficultyTier) -> bool {
        if !self.progression.is_unlocked(tier) {
            log::debug!("Refused locked tier {}", tier.name());
            return false;
        }
        self.restart(tier);
        log::info!("Difficulty set to {} (gap {})", tier.name(), tier.gap());
        true
    }

    /// Pick a skin and persist it. Locked skins are refused.
    pub fn select_cosmetic(&mut self, choice: CosmeticChoice) -> bool {
        if !self.progression.is_cosmetic_unlocked(choice) {
            log::debug!("Refused locked cosmetic {}", choice.name());
            return false;
        }
        self.cosmetic = choice;
        choice.save(&mut self.store);
        true
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.session.drain_events()
    }

    pub fn snapshot(&self) -> Snapshot {
        let tier = self.session.tier;
        Snapshot {
            width: self.tuning.width,
            height: self.tuning.height,
            avatar: self.session.avatar,
            avatar_x: self.tuning.avatar_x,
            visual_radius: self.tuning.visual_radius,
            hit_radius: self.tuning.hit_radius(),
            obstacles: self.session.obstacles.iter().copied().collect(),
            obstacle_width: self.tuning.obstacle_width,
            run_state: self.session.run_state,
            score: self.session.score,
            tier,
            tier_name: tier.name(),
            best: self.progression.best(tier),
            cosmetic: self.cosmetic,
            cosmetic_image: self.cosmetic.image(),
            unlocks: self.progression.unlock_state(),
        }
    }
}
