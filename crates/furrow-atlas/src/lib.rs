//! Location catalog for Furrow runs.
//!
//! A [`Catalog`] is static configuration: where each target is, which
//! category it belongs to, where its status code lives, and which
//! transit options reach it. It is built and validated once through
//! [`CatalogBuilder`], then shared read-only with the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod location;
pub mod transit;

pub use catalog::{Catalog, CatalogBuilder, IdResolution};
pub use error::CatalogError;
pub use location::TargetLocation;
pub use transit::{TransitKind, TransitOption};
