//! Per-difficulty best scores
//!
//! One integer per tier, each under its own storage key. Best scores only
//! ever go up.

use serde::{Deserialize, Serialize};

use crate::difficulty::DifficultyTier;
use crate::persistence::KeyValueStore;

/// Best score record, indexed by tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    best: [u32; DifficultyTier::ALL.len()],
}

impl HighScores {
    /// Create an empty record (all zeros)
    pub fn new() -> Self {
        Self::default()
    }

    fn index(tier: DifficultyTier) -> usize {
        match tier {
            DifficultyTier::Easy => 0,
            DifficultyTier::Medium => 1,
            DifficultyTier::Hard => 2,
            DifficultyTier::Extreme => 3,
        }
    }

    /// Best score for a tier
    pub fn best(&self, tier: DifficultyTier) -> u32 {
        self.best[Self::index(tier)]
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, tier: DifficultyTier, score: u32) -> bool {
        score > self.best(tier)
    }

    /// Record a score. Returns true if it set a new best.
    pub fn record(&mut self, tier: DifficultyTier, score: u32) -> bool {
        if !self.qualifies(tier, score) {
            return false;
        }
        self.best[Self::index(tier)] = score;
        true
    }

    /// Iterate `(tier, best)` pairs in tier order
    pub fn iter(&self) -> impl Iterator<Item = (DifficultyTier, u32)> + '_ {
        DifficultyTier::ALL.into_iter().map(|t| (t, self.best(t)))
    }

    /// Load best scores. Missing or unparseable values count as 0.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut scores = Self::new();
        for tier in DifficultyTier::ALL {
            let value = store
                .get(tier.storage_key())
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .unwrap_or(0);
            scores.best[Self::index(tier)] = value;
        }
        log::info!(
            "Loaded best scores: {}",
            scores
                .iter()
                .map(|(t, s)| format!("{}={}", t.as_str(), s))
                .collect::<Vec<_>>()
                .join(", ")
        );
        scores
    }

    /// Persist one tier's best score. Failures are logged and dropped; the
    /// previously stored value simply comes back on the next load.
    pub fn save_tier(&self, store: &mut impl KeyValueStore, tier: DifficultyTier) {
        let value = self.best(tier).to_string();
        if let Err(e) = store.set(tier.storage_key(), &value) {
            log::warn!("Failed to save best score for {}: {e}", tier.name());
        }
    }
}
