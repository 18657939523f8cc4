//! The read-only location catalog and its builder.
//!
//! A [`Catalog`] is built once, validated, wrapped in an `Arc`, and
//! shared with the engine. Nothing mutates it afterwards.

use indexmap::IndexMap;

use furrow_core::{LocationId, Need, Requirement, ResourceId, TargetCategory, TransitId};

use crate::error::CatalogError;
use crate::location::TargetLocation;
use crate::transit::TransitOption;

/// Result of matching a list of requested IDs against a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdResolution {
    /// Known IDs in request order, first occurrence only.
    pub known: Vec<LocationId>,
    /// Requested IDs the catalog does not contain.
    pub unknown: Vec<LocationId>,
}

/// Static table of locations, per-category supplies, and run-wide tools.
///
/// # Examples
///
/// ```
/// use furrow_atlas::{Catalog, TargetLocation};
/// use furrow_core::{LocationId, StatusKey, TargetCategory, Tile};
///
/// let catalog = Catalog::builder()
///     .location(TargetLocation::new(
///         "catherby",
///         "Catherby",
///         Tile::new(2813, 3463, 0),
///         TargetCategory::Herb,
///         StatusKey(4771),
///     ))
///     .build()?;
///
/// assert!(catalog.get(&LocationId::from("catherby")).is_some());
/// # Ok::<(), furrow_atlas::CatalogError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    locations: IndexMap<LocationId, TargetLocation>,
    supplies: IndexMap<TargetCategory, Vec<Need>>,
    tools: Vec<Need>,
}

impl Catalog {
    /// Start building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up a location.
    pub fn get(&self, id: &LocationId) -> Option<&TargetLocation> {
        self.locations.get(id)
    }

    /// Whether `id` is in the catalog.
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// Locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &TargetLocation> {
        self.locations.values()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the catalog has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Supplies consumed at every location of `category`.
    pub fn supplies(&self, category: TargetCategory) -> &[Need] {
        self.supplies
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tools needed for the whole run.
    pub fn tools(&self) -> &[Need] {
        &self.tools
    }

    /// Split requested IDs into known and unknown, keeping request
    /// order and dropping repeats.
    pub fn resolve_ids<'a>(&self, ids: impl IntoIterator<Item = &'a LocationId>) -> IdResolution {
        let mut out = IdResolution::default();
        for id in ids {
            if !self.contains(id) {
                out.unknown.push(id.clone());
            } else if !out.known.contains(id) {
                out.known.push(id.clone());
            }
        }
        out
    }

    /// Everything the player must hold before leaving for `location`:
    /// the transit's requirements, the category supplies, then the tools.
    ///
    /// With `transit` as `None` the transit contributes nothing.
    pub fn needs_for(
        &self,
        location: &TargetLocation,
        transit: Option<&TransitOption>,
    ) -> Vec<Need> {
        let mut needs: Vec<Need> = transit.map(|t| t.needs().collect()).unwrap_or_default();
        needs.extend(self.supplies(location.category()).iter().cloned());
        needs.extend(self.tools.iter().cloned());
        needs
    }

    /// Pick the transit for `location`: `preferred` if the location has
    /// it, otherwise the default.
    pub fn choose_transit<'a>(
        &self,
        location: &'a TargetLocation,
        preferred: Option<&TransitId>,
    ) -> Option<&'a TransitOption> {
        preferred
            .and_then(|id| location.transit(id))
            .or_else(|| location.default_transit())
    }
}

/// Accumulates catalog contents and validates them at [`build`](Self::build).
///
/// Requirement-constructing helpers defer their errors: the first
/// failure is reported by `build`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    locations: Vec<TargetLocation>,
    supplies: IndexMap<TargetCategory, Vec<Need>>,
    tools: Vec<Need>,
    deferred: Option<CatalogError>,
}

impl CatalogBuilder {
    /// Add a location.
    pub fn location(mut self, location: TargetLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Add a supply consumed at every location of `category`.
    pub fn supply(mut self, category: TargetCategory, need: impl Into<Need>) -> Self {
        self.supplies.entry(category).or_default().push(need.into());
        self
    }

    /// Add a plain item supply.
    pub fn supply_item(self, category: TargetCategory, primary: ResourceId, quantity: u32) -> Self {
        match Requirement::item(primary, quantity) {
            Ok(req) => self.supply(category, req),
            Err(e) => self.defer(e.into()),
        }
    }

    /// Add a run-wide tool.
    pub fn tool(mut self, need: impl Into<Need>) -> Self {
        self.tools.push(need.into());
        self
    }

    /// Add a tool satisfied by any of several variants.
    pub fn tool_any_of(
        self,
        primary: ResourceId,
        alternatives: impl IntoIterator<Item = ResourceId>,
    ) -> Self {
        match Requirement::any_of(primary, 1, alternatives) {
            Ok(req) => self.tool(req),
            Err(e) => self.defer(e.into()),
        }
    }

    fn defer(mut self, err: CatalogError) -> Self {
        if self.deferred.is_none() {
            self.deferred = Some(err);
        }
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        let mut locations = IndexMap::with_capacity(self.locations.len());
        for loc in self.locations {
            if loc.name().trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    id: loc.id().clone(),
                });
            }
            let mut seen: Vec<&TransitId> = Vec::with_capacity(loc.transit_options().len());
            for t in loc.transit_options() {
                if seen.contains(&t.id()) {
                    return Err(CatalogError::DuplicateTransit {
                        location: loc.id().clone(),
                        transit: t.id().clone(),
                    });
                }
                seen.push(t.id());
            }
            if locations.contains_key(loc.id()) {
                return Err(CatalogError::DuplicateLocation {
                    id: loc.id().clone(),
                });
            }
            locations.insert(loc.id().clone(), loc);
        }
        log::debug!(
            "catalog built: {} locations, {} supply categories, {} tools",
            locations.len(),
            self.supplies.len(),
            self.tools.len()
        );
        Ok(Catalog {
            locations,
            supplies: self.supplies,
            tools: self.tools,
        })
    }
}
