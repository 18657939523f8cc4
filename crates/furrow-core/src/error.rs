//! Error types for requirement construction.
//!
//! Runtime lookups never fail: resolution and decoding degrade to
//! "not satisfied" and `Unknown`. The only errors in this crate are
//! construction-time invariant violations.

use std::error::Error;
use std::fmt;

use crate::id::ResourceId;

/// Errors from building a [`Requirement`](crate::Requirement) or
/// [`CategoryRequirement`](crate::CategoryRequirement).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequirementError {
    /// An item requirement asked for zero of something. Zero-quantity
    /// requirements are reserved for capability placeholders.
    ZeroQuantity {
        /// The primary resource of the rejected requirement.
        primary: ResourceId,
    },
    /// A category requirement was given no member resources.
    EmptyCategory {
        /// Label of the rejected category.
        label: String,
    },
}

impl fmt::Display for RequirementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuantity { primary } => {
                write!(f, "requirement for resource {primary} has zero quantity")
            }
            Self::EmptyCategory { label } => {
                write!(f, "category '{label}' has no member resources")
            }
        }
    }
}

impl Error for RequirementError {}
