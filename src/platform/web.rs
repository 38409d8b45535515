//! Browser-facing game handle
//!
//! The page owns the canvas, the menus and the `requestAnimationFrame`
//! loop. It forwards input here and renders from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::cosmetic::CosmeticChoice;
use crate::difficulty::DifficultyTier;
use crate::game::Game;
use crate::persistence::LocalStore;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    super::init_logging();
    log::info!("Flappy Fin (wasm) loaded");
}

/// Game bound to LocalStorage
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a game. `tuning_json` may be empty to use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> Result<WebGame, JsError> {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json)?
        };
        let game = Game::new(tuning, LocalStore::new(), super::clock_seed())?;
        Ok(WebGame { game })
    }

    pub fn tick(&mut self) {
        self.game.tick();
    }

    pub fn jump(&mut self) -> bool {
        self.game.jump()
    }

    /// New run. Events not yet drained stay queued.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Tier tag: `easy`, `medium`, `hard` or `killer`
    #[wasm_bindgen(js_name = selectDifficulty)]
    pub fn select_difficulty(&mut self, tag: &str) -> bool {
        DifficultyTier::from_str(tag).is_some_and(|tier| self.game.select_difficulty(tier))
    }

    /// Skin tag: `schoolfin` or `poolfin`
    #[wasm_bindgen(js_name = selectCosmetic)]
    pub fn select_cosmetic(&mut self, tag: &str) -> bool {
        CosmeticChoice::from_str(tag).is_some_and(|choice| self.game.select_cosmetic(choice))
    }

    /// Current snapshot as JSON
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.snapshot())?)
    }

    /// Events raised since the last call, as a JSON array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.drain_events())?)
    }
}
