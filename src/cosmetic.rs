//! Avatar skins
//!
//! The selected skin is persisted under a single key as its tag string.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Selectable avatar skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CosmeticChoice {
    #[default]
    SchoolFin,
    PoolFin,
}

impl CosmeticChoice {
    pub const ALL: [CosmeticChoice; 2] = [CosmeticChoice::SchoolFin, CosmeticChoice::PoolFin];

    /// Storage key for the selected skin
    pub const STORAGE_KEY: &'static str = "flappy-fin-currentfin";

    pub fn name(&self) -> &'static str {
        match self {
            CosmeticChoice::SchoolFin => "School Fin",
            CosmeticChoice::PoolFin => "Pool Fin",
        }
    }

    /// Image asset the presentation layer should draw for this skin
    pub fn image(&self) -> &'static str {
        match self {
            CosmeticChoice::SchoolFin => "schoolfin.jpg",
            CosmeticChoice::PoolFin => "fin.jpg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CosmeticChoice::SchoolFin => "schoolfin",
            CosmeticChoice::PoolFin => "poolfin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "schoolfin" => Some(CosmeticChoice::SchoolFin),
            "poolfin" => Some(CosmeticChoice::PoolFin),
            _ => None,
        }
    }

    /// Whether this skin sits behind an unlock gate
    pub fn is_gated(&self) -> bool {
        matches!(self, CosmeticChoice::PoolFin)
    }

    /// Load the persisted choice, falling back to the default skin
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY).as_deref().and_then(Self::from_str) {
            Some(choice) => {
                log::info!("Loaded cosmetic choice: {}", choice.name());
                choice
            }
            None => Self::default(),
        }
    }

    /// Persist this choice. Failures are logged and dropped.
    pub fn save(&self, store: &mut impl KeyValueStore) {
        if let Err(e) = store.set(Self::STORAGE_KEY, self.as_str()) {
            log::warn!("Failed to save cosmetic choice: {e}");
        }
    }
}
