//! Evaluation throttling and position gating.

use std::sync::Arc;

use furrow_core::{LocationId, Tile, Timestamp};
use furrow_engine::{EngineConfig, RunEngine, RunPhase, TickInput, TickOutcome};
use furrow_test_utils::fixtures::{full_herb_run_inventory, herb_catalog, BANK};
use furrow_test_utils::MockGameState;
use proptest::prelude::*;

fn running(config: EngineConfig) -> RunEngine {
    let mock = MockGameState::holding(full_herb_run_inventory());
    let mut engine = RunEngine::new(Arc::new(herb_catalog()), mock, config).unwrap();
    engine.start_run(&[LocationId::from("catherby")]).unwrap();
    engine
}

fn evaluated(outcome: TickOutcome) -> bool {
    matches!(outcome, TickOutcome::Evaluated { .. })
}

fn blind(now: u64) -> TickInput {
    TickInput {
        now: Timestamp(now),
        position: None,
        status_code: None,
    }
}

#[test]
fn first_tick_always_evaluates() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(123_456, BANK))));
}

#[test]
fn ticks_inside_the_window_are_throttled() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(0, BANK))));
    assert_eq!(e.tick(TickInput::at(999, BANK)), TickOutcome::Throttled);
    assert!(evaluated(e.tick(TickInput::at(1000, BANK))));
    assert_eq!(e.tick(TickInput::at(1500, BANK)), TickOutcome::Throttled);
    assert_eq!(e.metrics().evaluations, 2);
    assert_eq!(e.metrics().throttled, 2);
}

#[test]
fn custom_throttle_window() {
    let mut e = running(EngineConfig {
        throttle_ms: 250,
        ..EngineConfig::default()
    });
    assert!(evaluated(e.tick(TickInput::at(0, BANK))));
    assert_eq!(e.tick(TickInput::at(249, BANK)), TickOutcome::Throttled);
    assert!(evaluated(e.tick(TickInput::at(250, BANK))));
}

#[test]
fn missing_position_is_skipped_without_consuming_the_window() {
    let mut e = running(EngineConfig::default());
    assert_eq!(e.tick(blind(0)), TickOutcome::Skipped);
    assert!(evaluated(e.tick(TickInput::at(1, BANK))));
    assert_eq!(e.tick(blind(500)), TickOutcome::Throttled);
    assert_eq!(e.tick(blind(1001)), TickOutcome::Skipped);
    assert!(evaluated(e.tick(TickInput::at(1002, BANK))));
    assert_eq!(e.metrics().skipped, 2);
}

#[test]
fn backwards_clock_is_throttled() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(5000, BANK))));
    assert_eq!(e.tick(TickInput::at(3000, BANK)), TickOutcome::Throttled);
    assert!(evaluated(e.tick(TickInput::at(6000, BANK))));
}

#[test]
fn resume_skips_the_window() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(0, BANK))));
    e.pause_run().unwrap();
    e.resume_run().unwrap();
    assert!(evaluated(e.tick(TickInput::at(10, BANK))));
}

#[test]
fn throttled_jump_waits_for_the_window() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(0, BANK))));
    assert_eq!(e.phase(), RunPhase::ReadyToTransit);

    let landed = Tile::new(BANK.x + 25, BANK.y, BANK.plane);
    assert_eq!(e.tick(TickInput::at(500, landed)), TickOutcome::Throttled);
    assert_eq!(e.phase(), RunPhase::ReadyToTransit);
    assert_eq!(e.state().and_then(|s| s.last_position()), Some(BANK));

    assert!(evaluated(e.tick(TickInput::at(1000, landed))));
    assert_eq!(e.phase(), RunPhase::Transiting);
    assert_eq!(e.state().and_then(|s| s.last_position()), Some(landed));
}

#[test]
fn inactive_wins_over_throttle() {
    let mut e = running(EngineConfig::default());
    assert!(evaluated(e.tick(TickInput::at(0, BANK))));
    e.pause_run().unwrap();
    assert_eq!(e.tick(TickInput::at(1, BANK)), TickOutcome::Inactive);
    assert_eq!(e.metrics().throttled, 0);
}

proptest! {
    #[test]
    fn evaluations_follow_the_window(
        steps in prop::collection::vec((0u64..2500, any::<bool>()), 1..40)
    ) {
        let mut e = running(EngineConfig::default());
        let mut now = 0u64;
        let mut last: Option<u64> = None;
        let mut expected = 0u64;
        for (delta, seen) in steps {
            now += delta;
            let input = if seen { TickInput::at(now, BANK) } else { blind(now) };
            let outcome = e.tick(input);
            let open = last.map_or(true, |l| now - l >= 1000);
            match (open, seen) {
                (false, _) => {
                    prop_assert_eq!(outcome, TickOutcome::Throttled);
                }
                (true, false) => {
                    prop_assert_eq!(outcome, TickOutcome::Skipped);
                }
                (true, true) => {
                    prop_assert!(evaluated(outcome));
                    last = Some(now);
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(e.metrics().evaluations, expected);
    }
}
