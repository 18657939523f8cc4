//! Core types and pure logic for Furrow runs.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, positions, and requirement types used throughout the
//! Furrow workspace, together with the two pure subsystems every run
//! depends on: requirement resolution against an inventory snapshot,
//! and status-code decoding into a normalized lifecycle state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod inventory;
pub mod lifecycle;
pub mod requirement;
pub mod resolve;
pub mod tile;
pub mod traits;

pub use error::RequirementError;
pub use id::{LocationId, ResourceId, StatusKey, Timestamp, TransitId};
pub use inventory::InventorySnapshot;
pub use lifecycle::{Band, LifecycleState, StatusDecoder, TargetCategory, Treatment};
pub use requirement::{Capability, CategoryRequirement, Need, Requirement};
pub use resolve::{Resolver, Shortfall};
pub use tile::Tile;
pub use traits::{CapabilitySource, GameStateSource, NoCapabilities};
