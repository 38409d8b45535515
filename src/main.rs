//! Flappy Fin entry point
//!
//! On the web the page drives `platform::web::WebGame` directly. Natively
//! there is no window; the binary plays a few autopilot runs headless and
//! logs how far progression got.

#[cfg(not(target_arch = "wasm32"))]
use flappy_fin::sim::autopilot;
#[cfg(not(target_arch = "wasm32"))]
use flappy_fin::sim::{GameEvent, RunState};
#[cfg(not(target_arch = "wasm32"))]
use flappy_fin::{DifficultyTier, Game, MemoryStore, Tuning, platform};

/// Runs attempted per tier before moving on
#[cfg(not(target_arch = "wasm32"))]
const RUNS_PER_TIER: u32 = 5;
/// Safety cap so a perfect autopilot run still terminates
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS_PER_RUN: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    platform::init_logging();
    log::info!("Flappy Fin (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let seed = platform::clock_seed();
    let mut game = match Game::new(Tuning::default(), MemoryStore::new(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            std::process::exit(1);
        }
    };

    for tier in DifficultyTier::ALL {
        if !game.select_difficulty(tier) {
            log::info!("{} is still locked, stopping", tier.name());
            break;
        }
        for run in 1..=RUNS_PER_TIER {
            let score = play_one_run(&mut game);
            println!("{:<10} run {run}: score {score}", tier.name());
            game.reset();
        }
    }

    println!("\nBest scores:");
    for (tier, best) in game.progression().scores().iter() {
        let lock = if game.is_unlocked(tier) { "" } else { " (locked)" };
        println!("  {:<10} {best}{lock}", tier.name());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn play_one_run(game: &mut Game<MemoryStore>) -> u32 {
    for _ in 0..MAX_TICKS_PER_RUN {
        if autopilot::wants_jump(game.session(), game.tuning()) {
            game.jump();
        }
        game.tick();
        for event in game.drain_events() {
            if let GameEvent::UnlocksChanged(_) = event {
                log::info!("New unlock reached on {}", game.tier().name());
            }
        }
        if game.run_state() == RunState::Over {
            break;
        }
    }
    game.score()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
