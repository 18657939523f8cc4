//! Narrow interfaces to the host game.
//!
//! Furrow never talks to the game directly. The host implements these
//! traits over whatever client API it has; the engine only ever reads
//! through them.

use crate::inventory::InventorySnapshot;

/// Read-only access to non-item capabilities (skill levels, house
/// furniture tiers) used by placeholder requirements.
pub trait CapabilitySource {
    /// Current level of the named capability, or `None` if the host does
    /// not know it. Unknown capabilities resolve as level zero.
    fn capability_level(&self, name: &str) -> Option<u32>;
}

/// The engine's view of the host game state between ticks.
///
/// Player position and raw status codes arrive with each tick; this
/// trait covers what the engine also needs outside a tick (at `start`
/// and `resume`): the inventory and capability levels.
pub trait GameStateSource: CapabilitySource + Send {
    /// Capture the player's current holdings.
    ///
    /// Called at most once per evaluation; the returned snapshot is
    /// treated as immutable for the rest of that evaluation.
    fn inventory(&self) -> InventorySnapshot;
}

/// A capability source that knows nothing. Every placeholder requirement
/// checked against it is unsatisfied unless its level is zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapabilities;

impl CapabilitySource for NoCapabilities {
    fn capability_level(&self, _name: &str) -> Option<u32> {
        None
    }
}
