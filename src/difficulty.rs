//! Difficulty tiers
//!
//! Tiers form a linear chain from `Easy` to `Extreme`. Each one only changes
//! the vertical gap the avatar has to fit through.

use serde::{Deserialize, Serialize};

/// Static configuration for a single tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierConfig {
    /// Display name
    pub name: &'static str,
    /// Vertical gap size (pixels)
    pub gap: f32,
}

/// Difficulty levels, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
    #[serde(rename = "killer", alias = "extreme")]
    Extreme,
}

impl DifficultyTier {
    /// All tiers in unlock order
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Extreme,
    ];

    /// The hardest tier (gates the cosmetic unlock)
    pub const HARDEST: DifficultyTier = DifficultyTier::Extreme;

    pub fn config(&self) -> TierConfig {
        match self {
            DifficultyTier::Easy => TierConfig {
                name: "Easy",
                gap: 155.0,
            },
            DifficultyTier::Medium => TierConfig {
                name: "Medium",
                gap: 130.0,
            },
            DifficultyTier::Hard => TierConfig {
                name: "Hard",
                gap: 119.0,
            },
            DifficultyTier::Extreme => TierConfig {
                name: "Fin Killer",
                gap: 95.0,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn gap(&self) -> f32 {
        self.config().gap
    }

    /// Short tag used in storage keys and the web boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Extreme => "killer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(DifficultyTier::Easy),
            "medium" | "med" => Some(DifficultyTier::Medium),
            "hard" => Some(DifficultyTier::Hard),
            "killer" | "extreme" => Some(DifficultyTier::Extreme),
            _ => None,
        }
    }

    /// The tier whose best score gates this one (`None` for `Easy`)
    pub fn prerequisite(&self) -> Option<Self> {
        match self {
            DifficultyTier::Easy => None,
            DifficultyTier::Medium => Some(DifficultyTier::Easy),
            DifficultyTier::Hard => Some(DifficultyTier::Medium),
            DifficultyTier::Extreme => Some(DifficultyTier::Hard),
        }
    }

    /// Storage key holding this tier's best score
    pub fn storage_key(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "flappy-fin-highscore-easy",
            DifficultyTier::Medium => "flappy-fin-highscore-medium",
            DifficultyTier::Hard => "flappy-fin-highscore-hard",
            DifficultyTier::Extreme => "flappy-fin-highscore-killer",
        }
    }
}
