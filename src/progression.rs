//! Unlock gates
//!
//! Tiers unlock in a strict chain: `Easy` is always open, and every other
//! tier opens once the previous tier's best score reaches
//! [`UNLOCK_THRESHOLD`]. The gated skin opens the same way off the hardest
//! tier. Unlock state is derived from best scores, so it can never revert.

use serde::{Deserialize, Serialize};

use crate::consts::UNLOCK_THRESHOLD;
use crate::cosmetic::CosmeticChoice;
use crate::difficulty::DifficultyTier;
use crate::highscores::HighScores;
use crate::persistence::KeyValueStore;

/// Unlock state of every gate, for menus to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockState {
    /// Indexed like `DifficultyTier::ALL`
    pub tiers: [bool; DifficultyTier::ALL.len()],
    /// Indexed like `CosmeticChoice::ALL`
    pub cosmetics: [bool; CosmeticChoice::ALL.len()],
}

impl UnlockState {
    pub fn tier(&self, tier: DifficultyTier) -> bool {
        DifficultyTier::ALL
            .iter()
            .position(|t| *t == tier)
            .map(|i| self.tiers[i])
            .unwrap_or(false)
    }

    pub fn cosmetic(&self, choice: CosmeticChoice) -> bool {
        CosmeticChoice::ALL
            .iter()
            .position(|c| *c == choice)
            .map(|i| self.cosmetics[i])
            .unwrap_or(false)
    }
}

/// Result of feeding a run's score into progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreOutcome {
    /// The score beat the tier's previous best (and was persisted)
    pub new_best: bool,
    /// The new best landed exactly on the unlock threshold (gated play only)
    pub unlocks_changed: bool,
}

/// Best scores plus the gates derived from them
#[derive(Debug, Clone)]
pub struct Progression {
    scores: HighScores,
    /// When false every gate is open (single-mode play)
    gated: bool,
}

impl Progression {
    pub fn new(scores: HighScores, gated: bool) -> Self {
        Self { scores, gated }
    }

    /// Load best scores from the store
    pub fn load(store: &impl KeyValueStore, gated: bool) -> Self {
        Self::new(HighScores::load(store), gated)
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn best(&self, tier: DifficultyTier) -> u32 {
        self.scores.best(tier)
    }

    pub fn is_gated(&self) -> bool {
        self.gated
    }

    /// Whether a tier can be selected
    pub fn is_unlocked(&self, tier: DifficultyTier) -> bool {
        if !self.gated {
            return true;
        }
        match tier.prerequisite() {
            None => true,
            Some(prev) => self.scores.best(prev) >= UNLOCK_THRESHOLD,
        }
    }

    /// Whether a skin can be selected
    pub fn is_cosmetic_unlocked(&self, choice: CosmeticChoice) -> bool {
        if !self.gated || !choice.is_gated() {
            return true;
        }
        self.scores.best(DifficultyTier::HARDEST) >= UNLOCK_THRESHOLD
    }

    /// Snapshot of every gate
    pub fn unlock_state(&self) -> UnlockState {
        UnlockState {
            tiers: DifficultyTier::ALL.map(|t| self.is_unlocked(t)),
            cosmetics: CosmeticChoice::ALL.map(|c| self.is_cosmetic_unlocked(c)),
        }
    }

    /// Feed the current run score for `tier`. A new best is persisted
    /// immediately.
    pub fn record_score(
        &mut self,
        store: &mut impl KeyValueStore,
        tier: DifficultyTier,
        score: u32,
    ) -> ScoreOutcome {
        if !self.scores.record(tier, score) {
            return ScoreOutcome::default();
        }
        self.scores.save_tier(store, tier);

        let unlocks_changed = self.gated && score == UNLOCK_THRESHOLD;
        if unlocks_changed {
            log::info!(
                "{} best reached {}, unlock gates refreshed",
                tier.name(),
                UNLOCK_THRESHOLD
            );
        }

        ScoreOutcome {
            new_best: true,
            unlocks_changed,
        }
    }
}
