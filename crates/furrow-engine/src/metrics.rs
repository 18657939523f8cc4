//! Counters for the run engine.
//!
//! [`RunMetrics`] is cumulative across runs of one engine; hosts read it
//! for diagnostics and reset it by replacing the engine.

/// Cumulative engine counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Ticks that passed the throttle and were evaluated.
    pub evaluations: u64,
    /// Ticks rejected by the throttle.
    pub throttled: u64,
    /// Ticks ignored for lack of a player position.
    pub skipped: u64,
    /// Phase changes, from ticks and commands alike.
    pub transitions: u64,
    /// Locations completed.
    pub locations_completed: u64,
    /// Decodes that produced `Unknown`, including missing status codes.
    pub decode_unknown: u64,
    /// Feed subscribers dropped for being full or disconnected.
    pub subscribers_dropped: u64,
}
