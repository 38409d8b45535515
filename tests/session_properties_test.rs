//! Property tests: simulation invariants under random input schedules

use proptest::prelude::*;

use flappy_fin::sim::{GameEvent, RunState, autopilot};
use flappy_fin::{DifficultyTier, Game, MemoryStore, Tuning};

fn tier_strategy() -> impl Strategy<Value = DifficultyTier> {
    prop::sample::select(DifficultyTier::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Gravity, queue size/order, FIFO eviction and gap sizes hold on
    /// every tick of a run.
    #[test]
    fn prop_tick_invariants(
        seed in any::<u64>(),
        tier in tier_strategy(),
        jumps in prop::collection::vec(any::<bool>(), 50..600),
        assisted in any::<bool>(),
    ) {
        let tuning = Tuning { progression: false, ..Tuning::default() };
        let mut game = Game::new(tuning.clone(), MemoryStore::new(), seed).unwrap();
        prop_assert!(game.select_difficulty(tier));
        game.jump();

        for pressed in jumps {
            if game.run_state() != RunState::Playing {
                break;
            }
            let jump = if assisted {
                autopilot::wants_jump(game.session(), &tuning)
            } else {
                pressed
            };
            if jump {
                game.jump();
            }

            let before = game.session().clone();
            game.tick();
            let after = game.session();

            // Velocity grows by exactly one gravity step per tick
            prop_assert!((after.avatar.vy - (before.avatar.vy + tuning.gravity)).abs() < 1e-4);
            prop_assert!((after.avatar.y - (before.avatar.y + after.avatar.vy)).abs() < 1e-3);

            // At least two obstacles, strictly left-to-right
            prop_assert!(after.obstacles.len() >= 2);
            for pair in after.obstacles.iter().collect::<Vec<_>>().windows(2) {
                prop_assert!(pair[0].x < pair[1].x);
            }

            // The old front is evicted iff its right edge went below zero
            let old_front = before.obstacles[0];
            let moved_x = old_front.x - tuning.obstacle_speed;
            let evicted = moved_x + tuning.obstacle_width < 0.0;
            prop_assert_eq!(after.obstacles[0].x != moved_x, evicted);

            for o in &after.obstacles {
                prop_assert_eq!(o.gap_size(), tier.gap());
                prop_assert!(o.gap_top >= tuning.gap_top_margin);
                prop_assert!(o.gap_bottom <= tuning.height - tuning.gap_bottom_margin);
            }
        }
    }

    /// Each obstacle adds to the score exactly once
    #[test]
    fn prop_score_counts_each_obstacle_once(seed in any::<u64>(), tier in tier_strategy()) {
        let tuning = Tuning { progression: false, ..Tuning::default() };
        let mut game = Game::new(tuning.clone(), MemoryStore::new(), seed).unwrap();
        prop_assert!(game.select_difficulty(tier));

        let mut evicted_scored = 0u32;
        for _ in 0..3000 {
            if game.run_state() == RunState::Over {
                break;
            }
            if autopilot::wants_jump(game.session(), &tuning) {
                game.jump();
            }
            let before = game.session().clone();
            game.tick();
            let after = game.session();

            if after.obstacles[0].x != before.obstacles[0].x - tuning.obstacle_speed {
                prop_assert!(before.obstacles[0].scored);
                evicted_scored += 1;
            }
            let flagged = after.obstacles.iter().filter(|o| o.scored).count() as u32;
            prop_assert_eq!(after.score, evicted_scored + flagged);
            prop_assert!(after.score - before.score <= 1);
        }

        let score_events = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::ScoreChanged(_)))
            .count() as u32;
        prop_assert_eq!(score_events, game.score());
    }

    /// Best scores never drop and unlocks never close across many runs
    #[test]
    fn prop_progression_is_monotonic(
        seed in any::<u64>(),
        runs in prop::collection::vec((tier_strategy(), 0u32..400), 1..12),
    ) {
        let tuning = Tuning::default();
        let mut game = Game::new(tuning.clone(), MemoryStore::new(), seed).unwrap();
        let mut prev_best = DifficultyTier::ALL.map(|t| game.progression().best(t));
        let mut prev_unlocks = game.progression().unlock_state();

        for (tier, length) in runs {
            game.select_difficulty(tier);
            game.jump();
            for _ in 0..length {
                if autopilot::wants_jump(game.session(), &tuning) {
                    game.jump();
                }
                game.tick();
            }
            game.reset();

            let best = DifficultyTier::ALL.map(|t| game.progression().best(t));
            for (now, then) in best.iter().zip(prev_best.iter()) {
                prop_assert!(now >= then);
            }
            let unlocks = game.progression().unlock_state();
            for (now, then) in unlocks.tiers.iter().zip(prev_unlocks.tiers.iter()) {
                prop_assert!(*now || !*then);
            }
            prev_best = best;
            prev_unlocks = unlocks;
        }
    }
}

#[test]
fn test_same_seed_same_run() {
    let tuning = Tuning::default();
    let play = |seed: u64| {
        let mut game = Game::new(tuning.clone(), MemoryStore::new(), seed).unwrap();
        for _ in 0..5000 {
            if game.run_state() == RunState::Over {
                break;
            }
            if autopilot::wants_jump(game.session(), &tuning) {
                game.jump();
            }
            game.tick();
        }
        (game.score(), game.session().time_ticks, game.snapshot())
    };

    assert_eq!(play(2024), play(2024));
}
