//! Furrow: guidance for repeating multi-location gathering runs.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Furrow sub-crates. For most users, adding `furrow` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use furrow::prelude::*;
//!
//! // The host's view of the game: here, a fixed inventory.
//! struct Host;
//! impl CapabilitySource for Host {
//!     fn capability_level(&self, _name: &str) -> Option<u32> { None }
//! }
//! impl GameStateSource for Host {
//!     fn inventory(&self) -> InventorySnapshot {
//!         InventorySnapshot::from_counts([(ResourceId(563), 2)])
//!     }
//! }
//!
//! let patch = Tile::new(2813, 3463, 0);
//! let catalog = Catalog::builder()
//!     .location(
//!         TargetLocation::new("catherby", "Catherby", patch, TargetCategory::Herb, StatusKey(4772))
//!             .with_transit(
//!                 TransitOption::new("CAMELOT", TransitKind::Spellbook, "Camelot", Tile::new(2757, 3478, 0))
//!                     .requires_item(ResourceId(563), 1)?,
//!             ),
//!     )
//!     .build()?;
//!
//! let mut engine = RunEngine::new(Arc::new(catalog), Host, EngineConfig::default())?;
//! engine.start_run(&[LocationId::from("catherby")])?;
//! assert_eq!(engine.phase(), RunPhase::ReadyToTransit);
//!
//! // Walking up to the patch skips the transit.
//! engine.tick(TickInput::at(0, Tile::new(2816, 3463, 0)));
//! engine.tick(TickInput::at(1000, patch).with_code(0));
//! assert_eq!(engine.phase(), RunPhase::AtTarget);
//! assert_eq!(engine.current_target_state(), LifecycleState::Empty);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `furrow-core` | IDs, tiles, requirements, resolver, status decoder, host traits |
//! | [`atlas`] | `furrow-atlas` | Locations, transit options, the catalog |
//! | [`engine`] | `furrow-engine` | Run engine, phases, oracles, transition feed |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, resolution, and decoding (`furrow-core`).
pub use furrow_core as types;

/// Location catalog (`furrow-atlas`).
pub use furrow_atlas as atlas;

/// Run engine (`furrow-engine`).
pub use furrow_engine as engine;

/// Convenience re-exports for the most common types.
///
/// ```rust
/// use furrow::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use furrow_core::{
        Capability, CapabilitySource, CategoryRequirement, GameStateSource, InventorySnapshot,
        LifecycleState, LocationId, Need, Requirement, ResourceId, StatusKey, TargetCategory, Tile,
        Timestamp, TransitId,
    };

    // Resolution and decoding
    pub use furrow_core::{Resolver, Shortfall, StatusDecoder};

    // Catalog
    pub use furrow_atlas::{Catalog, CatalogBuilder, TargetLocation, TransitKind, TransitOption};

    // Errors
    pub use furrow_atlas::CatalogError;
    pub use furrow_core::RequirementError;
    pub use furrow_engine::{CommandError, ConfigError};

    // Engine
    pub use furrow_engine::{
        CompletionOracle, EngineConfig, LifecycleOracle, Maintenance, PhaseTransition, RunEngine,
        RunMetrics, RunPhase, RunPlan, SignalOracle, TickInput, TickOutcome,
    };
}
