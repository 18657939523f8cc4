//! Phase transitions delivered over the feed.

use std::sync::Arc;

use furrow_core::{LocationId, Timestamp};
use furrow_engine::{EngineConfig, PhaseTransition, RunEngine, RunPhase, TickInput};
use furrow_test_utils::fixtures::{full_herb_run_inventory, herb_catalog, BANK, CAMELOT_LANDING};
use furrow_test_utils::MockGameState;

fn engine(config: EngineConfig) -> RunEngine {
    let mock = MockGameState::holding(full_herb_run_inventory());
    RunEngine::new(Arc::new(herb_catalog()), mock, config).unwrap()
}

#[test]
fn transitions_arrive_in_order() {
    let mut e = engine(EngineConfig::default());
    let rx = e.subscribe();
    let catherby = Some(LocationId::from("catherby"));

    e.start_run(&[LocationId::from("catherby")]).unwrap();
    e.tick(TickInput::at(0, BANK));
    e.tick(TickInput::at(1000, CAMELOT_LANDING));
    e.pause_run().unwrap();
    e.stop_run();

    let got: Vec<PhaseTransition> = rx.try_iter().collect();
    assert_eq!(
        got,
        vec![
            PhaseTransition {
                from: RunPhase::Idle,
                to: RunPhase::ReadyToTransit,
                location: catherby.clone(),
                at: None,
            },
            PhaseTransition {
                from: RunPhase::ReadyToTransit,
                to: RunPhase::Transiting,
                location: catherby.clone(),
                at: Some(Timestamp(1000)),
            },
            PhaseTransition {
                from: RunPhase::Transiting,
                to: RunPhase::Paused,
                location: catherby,
                at: None,
            },
            PhaseTransition {
                from: RunPhase::Paused,
                to: RunPhase::Idle,
                location: None,
                at: None,
            },
        ]
    );
    assert_eq!(e.metrics().transitions, 4);
}

#[test]
fn unchanged_phase_publishes_nothing() {
    let mut e = engine(EngineConfig::default());
    e.start_run(&[LocationId::from("catherby")]).unwrap();
    let rx = e.subscribe();
    e.tick(TickInput::at(0, BANK));
    e.tick(TickInput::at(1000, BANK));
    assert!(rx.try_recv().is_err());
}

#[test]
fn slow_subscriber_is_dropped() {
    let mut e = engine(EngineConfig {
        feed_capacity: 1,
        ..EngineConfig::default()
    });
    let slow = e.subscribe();
    let fast = e.subscribe();

    e.start_run(&[LocationId::from("catherby")]).unwrap();
    assert_eq!(fast.try_recv().map(|t| t.to), Ok(RunPhase::ReadyToTransit));

    e.pause_run().unwrap();
    assert_eq!(e.metrics().subscribers_dropped, 1);
    assert_eq!(fast.try_recv().map(|t| t.to), Ok(RunPhase::Paused));

    // The dropped subscriber keeps what it buffered, then sees a closed feed.
    assert_eq!(slow.try_recv().map(|t| t.to), Ok(RunPhase::ReadyToTransit));
    assert!(slow.recv().is_err());
}

#[test]
fn dropped_receiver_is_pruned() {
    let mut e = engine(EngineConfig::default());
    drop(e.subscribe());
    e.start_run(&[LocationId::from("catherby")]).unwrap();
    assert_eq!(e.metrics().subscribers_dropped, 1);
    assert!(format!("{e:?}").contains("subscribers: 0"));
}
