//! A scripted two-stop herb run against a mock game state.
//!
//! Demonstrates:
//!   1. Building an engine over the sample herb catalog
//!   2. Subscribing to the transition feed
//!   3. Ticking through gathering, transit, navigation and the action
//!   4. Signalling completion from the host
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example scripted_run

use std::sync::Arc;

use env_logger::{Builder, Env};
use furrow_core::{LocationId, Tile};
use furrow_engine::{EngineConfig, RunEngine, RunPhase, TickInput};
use furrow_test_utils::fixtures::{
    full_herb_run_inventory, herb_catalog, ARDOUGNE_CLOAK_LANDING, ARDOUGNE_PATCH, BANK,
    CAMELOT_LANDING, CATHERBY_PATCH,
};
use furrow_test_utils::MockGameState;

// ─── Script ─────────────────────────────────────────────────────

/// Host ticks every 600ms, like a game tick.
const TICK_MS: u64 = 600;

const READY: i32 = 4;
const EMPTY: i32 = 0;

/// One scripted host frame.
enum Step {
    Tick(Tile, Option<i32>),
    Restock,
    Signal,
}

fn script() -> Vec<Step> {
    use Step::*;
    vec![
        Tick(BANK, None),
        Tick(BANK, None),
        Restock,
        Tick(BANK, None),
        Tick(ARDOUGNE_CLOAK_LANDING, None),
        Tick(ARDOUGNE_CLOAK_LANDING, None),
        Tick(ARDOUGNE_PATCH, Some(READY)),
        Tick(ARDOUGNE_PATCH, Some(READY)),
        Signal,
        Tick(ARDOUGNE_PATCH, Some(EMPTY)),
        Tick(ARDOUGNE_PATCH, None),
        Tick(CAMELOT_LANDING, None),
        Tick(CAMELOT_LANDING, None),
        Tick(CATHERBY_PATCH, Some(EMPTY)),
        Tick(CATHERBY_PATCH, Some(EMPTY)),
        Signal,
        Tick(CATHERBY_PATCH, Some(EMPTY)),
    ]
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    let _ = builder.try_init();

    let mock = MockGameState::new();
    let mut engine = RunEngine::new(
        Arc::new(herb_catalog()),
        mock.clone(),
        EngineConfig {
            throttle_ms: TICK_MS,
            ..EngineConfig::default()
        },
    )?;
    let feed = engine.subscribe();

    engine.start_run(&[LocationId::from("ardougne"), LocationId::from("catherby")])?;
    for shortfall in engine.unsatisfied_requirements() {
        println!("  missing: {} x{}", shortfall.label, shortfall.remaining);
    }

    let mut now = 0u64;
    for step in script() {
        match step {
            Step::Restock => {
                println!("  (player withdraws supplies from the bank)");
                mock.set_inventory(full_herb_run_inventory());
            }
            Step::Signal => {
                println!("  (player finishes at the patch)");
                engine.signal_action_complete()?;
            }
            Step::Tick(position, code) => {
                let mut input = TickInput::at(now, position);
                if let Some(code) = code {
                    input = input.with_code(code);
                }
                engine.tick(input);
                now += TICK_MS;
            }
        }
        for t in feed.try_iter() {
            let place = t.location.as_ref().map_or("-", |l| l.as_str());
            println!("{:>8} {:<20} -> {:<20} [{place}]", now, t.from, t.to);
        }
    }

    let metrics = engine.metrics();
    println!(
        "\n{} after {} evaluations, {} transitions, {} locations",
        engine.phase(),
        metrics.evaluations,
        metrics.transitions,
        metrics.locations_completed
    );
    for visit in engine.visits() {
        println!(
            "  {} {} (left {}) at {}",
            visit.location, visit.action, visit.observed, visit.completed_at
        );
    }

    if engine.phase() != RunPhase::RunComplete {
        return Err(format!("script ended in {}", engine.phase()).into());
    }
    Ok(())
}
