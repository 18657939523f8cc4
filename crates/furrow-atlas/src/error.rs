//! Error types for catalog construction.

use std::error::Error;
use std::fmt;

use furrow_core::{LocationId, RequirementError, TransitId};

/// Errors detected by [`CatalogBuilder::build`](crate::CatalogBuilder::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two locations share an ID.
    DuplicateLocation {
        /// The repeated ID.
        id: LocationId,
    },
    /// Two transit options within one location share an ID.
    DuplicateTransit {
        /// Location holding the options.
        location: LocationId,
        /// The repeated transit ID.
        transit: TransitId,
    },
    /// A location was given an empty display name.
    EmptyName {
        /// The offending location.
        id: LocationId,
    },
    /// A requirement built through the catalog builder was invalid.
    Requirement(RequirementError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocation { id } => write!(f, "duplicate location id '{id}'"),
            Self::DuplicateTransit { location, transit } => write!(
                f,
                "location '{location}' has duplicate transit id '{transit}'"
            ),
            Self::EmptyName { id } => write!(f, "location '{id}' has an empty name"),
            Self::Requirement(e) => write!(f, "invalid requirement: {e}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Requirement(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RequirementError> for CatalogError {
    fn from(e: RequirementError) -> Self {
        Self::Requirement(e)
    }
}
