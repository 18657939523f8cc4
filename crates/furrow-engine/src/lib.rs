//! Run engine orchestrating Furrow runs.
//!
//! Provides [`RunEngine`], a tick-driven finite-state machine that walks
//! a run through preparation, transit, and per-location actions. Each
//! evaluation re-resolves what the player needs, decodes the current
//! target's status code, and asks the configured completion oracle
//! whether the current action is done.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod feed;
pub mod metrics;
pub mod oracle;
pub mod phase;
pub mod state;

pub use config::{ConfigError, EngineConfig};
pub use engine::{CommandError, RunEngine, TickInput, TickOutcome};
pub use feed::PhaseTransition;
pub use metrics::RunMetrics;
pub use oracle::{ActionContext, CompletionOracle, LifecycleOracle, NeverComplete, SignalOracle};
pub use phase::{Maintenance, RunPhase};
pub use state::{PlannedStop, RunFault, RunPlan, RunState, VisitRecord};
