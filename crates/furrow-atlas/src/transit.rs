//! Ways of reaching a location.

use std::fmt;

use furrow_core::{Need, Requirement, RequirementError, ResourceId, Tile, TransitId};

/// How a transit option moves the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitKind {
    /// A spell cast from a spellbook.
    Spellbook,
    /// An item: tablet, cape, jewellery, and so on.
    Item,
    /// The house portal nexus.
    PortalNexus,
    /// The house jewellery box.
    JewelleryBox,
    /// A spirit tree.
    SpiritTree,
    /// The mounted Xeric's talisman in the house.
    MountedXerics,
}

impl TransitKind {
    /// Whether this transit departs from the player's house.
    pub fn is_house_transit(self) -> bool {
        matches!(
            self,
            Self::PortalNexus | Self::JewelleryBox | Self::MountedXerics
        )
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spellbook => "Spellbook",
            Self::Item => "Item",
            Self::PortalNexus => "Portal nexus",
            Self::JewelleryBox => "Jewellery box",
            Self::SpiritTree => "Spirit tree",
            Self::MountedXerics => "Mounted Xeric's talisman",
        }
    }
}

impl fmt::Display for TransitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One way of reaching a location, with what it costs.
///
/// # Examples
///
/// ```
/// use furrow_atlas::{TransitKind, TransitOption};
/// use furrow_core::{ResourceId, Tile};
///
/// let spell = TransitOption::new(
///     "ARDOUGNE_TELEPORT",
///     TransitKind::Spellbook,
///     "Ardougne Teleport",
///     Tile::new(2662, 3305, 0),
/// )
/// .requires_item(ResourceId(563), 2)?
/// .requires_item(ResourceId(555), 2)?;
///
/// assert_eq!(spell.requirements().len(), 2);
/// # Ok::<(), furrow_core::RequirementError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitOption {
    id: TransitId,
    kind: TransitKind,
    description: String,
    destination: Tile,
    requirements: Vec<Requirement>,
}

impl TransitOption {
    /// A transit option with no requirements yet.
    pub fn new(
        id: impl Into<TransitId>,
        kind: TransitKind,
        description: impl Into<String>,
        destination: Tile,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
            destination,
            requirements: Vec::new(),
        }
    }

    /// Add a requirement.
    pub fn requires(mut self, req: Requirement) -> Self {
        self.requirements.push(req);
        self
    }

    /// Add a plain item requirement.
    pub fn requires_item(
        self,
        primary: ResourceId,
        quantity: u32,
    ) -> Result<Self, RequirementError> {
        Ok(self.requires(Requirement::item(primary, quantity)?))
    }

    /// Stable ID, unique within its location.
    pub fn id(&self) -> &TransitId {
        &self.id
    }

    /// Kind of transit.
    pub fn kind(&self) -> TransitKind {
        self.kind
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the player lands.
    pub fn destination(&self) -> Tile {
        self.destination
    }

    /// Everything needed to use this transit.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Requirements as [`Need`]s.
    pub fn needs(&self) -> impl Iterator<Item = Need> + '_ {
        self.requirements.iter().cloned().map(Need::Item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furrow_core::Capability;

    #[test]
    fn house_transits() {
        assert!(TransitKind::PortalNexus.is_house_transit());
        assert!(TransitKind::JewelleryBox.is_house_transit());
        assert!(TransitKind::MountedXerics.is_house_transit());
        assert!(!TransitKind::Spellbook.is_house_transit());
        assert!(!TransitKind::SpiritTree.is_house_transit());
        assert!(!TransitKind::Item.is_house_transit());
    }

    #[test]
    fn requires_item_rejects_zero() {
        let res = TransitOption::new("X", TransitKind::Item, "x", Tile::new(0, 0, 0))
            .requires_item(ResourceId(1), 0);
        match res {
            Err(RequirementError::ZeroQuantity { .. }) => {}
            other => panic!("expected ZeroQuantity, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_requirements_become_needs() {
        let nexus = TransitOption::new(
            "PORTAL_NEXUS",
            TransitKind::PortalNexus,
            "Portal nexus",
            Tile::new(2662, 3305, 0),
        )
        .requires(Requirement::capability(
            Capability::new("construction", 72).with_detail("Portal nexus"),
        ));
        let needs: Vec<Need> = nexus.needs().collect();
        assert_eq!(needs.len(), 1);
        assert_eq!(needs[0].display_label(), "construction level 72");
    }
}
