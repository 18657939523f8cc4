//! Target locations.

use furrow_core::{LocationId, StatusKey, TargetCategory, Tile, TransitId};

use crate::transit::TransitOption;

/// A place the run visits.
///
/// Transit options are kept in insertion order, which is also their
/// presentation priority: the first option is the default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetLocation {
    id: LocationId,
    name: String,
    position: Tile,
    category: TargetCategory,
    status_key: StatusKey,
    transit_options: Vec<TransitOption>,
}

impl TargetLocation {
    /// A location with no transit options yet.
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        position: Tile,
        category: TargetCategory,
        status_key: StatusKey,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            category,
            status_key,
            transit_options: Vec::new(),
        }
    }

    /// Append a transit option.
    pub fn with_transit(mut self, option: TransitOption) -> Self {
        self.transit_options.push(option);
        self
    }

    /// Stable ID.
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the target itself.
    pub fn position(&self) -> Tile {
        self.position
    }

    /// Category, selecting the decoder band and supply list.
    pub fn category(&self) -> TargetCategory {
        self.category
    }

    /// Where the host reads this location's raw status code.
    pub fn status_key(&self) -> StatusKey {
        self.status_key
    }

    /// Transit options in priority order.
    pub fn transit_options(&self) -> &[TransitOption] {
        &self.transit_options
    }

    /// Look up a transit option by ID.
    pub fn transit(&self, id: &TransitId) -> Option<&TransitOption> {
        self.transit_options.iter().find(|t| t.id() == id)
    }

    /// The first transit option, if any.
    pub fn default_transit(&self) -> Option<&TransitOption> {
        self.transit_options.first()
    }

    /// Whether `tile` is within `radius` of the target (same plane only).
    pub fn is_near(&self, tile: &Tile, radius: u32) -> bool {
        self.position.within(tile, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transit::TransitKind;

    fn ardougne() -> TargetLocation {
        TargetLocation::new(
            "ardougne",
            "Ardougne",
            Tile::new(2670, 3374, 0),
            TargetCategory::Herb,
            StatusKey(4771),
        )
        .with_transit(TransitOption::new(
            "ARDOUGNE_CLOAK",
            TransitKind::Item,
            "Ardougne cloak",
            Tile::new(2667, 3375, 0),
        ))
        .with_transit(TransitOption::new(
            "ARDOUGNE_TELEPORT",
            TransitKind::Spellbook,
            "Ardougne Teleport",
            Tile::new(2662, 3305, 0),
        ))
    }

    #[test]
    fn first_option_is_default() {
        let loc = ardougne();
        assert_eq!(
            loc.default_transit().map(|t| t.id().as_str()),
            Some("ARDOUGNE_CLOAK")
        );
    }

    #[test]
    fn no_options_means_no_default() {
        let loc = TargetLocation::new(
            "x",
            "X",
            Tile::new(0, 0, 0),
            TargetCategory::Tree,
            StatusKey(1),
        );
        assert!(loc.default_transit().is_none());
    }

    #[test]
    fn transit_lookup_by_id() {
        let loc = ardougne();
        let spell = loc.transit(&TransitId::from("ARDOUGNE_TELEPORT")).unwrap();
        assert_eq!(spell.kind(), TransitKind::Spellbook);
        assert!(loc.transit(&TransitId::from("NOPE")).is_none());
    }

    #[test]
    fn near_uses_chebyshev_on_same_plane() {
        let loc = ardougne();
        assert!(loc.is_near(&Tile::new(2667, 3375, 0), 5));
        assert!(loc.is_near(&Tile::new(2675, 3379, 0), 5));
        assert!(!loc.is_near(&Tile::new(2676, 3374, 0), 5));
        assert!(!loc.is_near(&Tile::new(2670, 3374, 1), 5));
    }
}
