//! Resource requirements: single items, any-of variants, categories, and
//! capability placeholders.
//!
//! All requirement types are immutable once constructed. Construction
//! enforces the quantity and membership invariants so that resolution
//! never has to second-guess its inputs.

use smallvec::SmallVec;

use crate::error::RequirementError;
use crate::id::ResourceId;

/// A non-item condition, such as a minimum skill level or a piece of
/// furniture built in the player's house.
///
/// Checked against the host's [`CapabilitySource`](crate::CapabilitySource)
/// rather than the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capability {
    /// Name of the capability as understood by the host (e.g. `"construction"`).
    pub name: String,
    /// Minimum level required.
    pub level: u32,
    /// Optional free-form detail for display (e.g. the furniture to build).
    pub detail: Option<String>,
}

impl Capability {
    /// A capability with no display detail.
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            detail: None,
        }
    }

    /// Attach a display detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A needed resource and quantity, optionally satisfiable by any of
/// several interchangeable resource IDs (tiers, charge levels, staff
/// variants).
///
/// Held quantities are summed across the primary and every alternative,
/// so "2 of any tier" is satisfied by one tier-2 and one tier-4 item.
///
/// A requirement built with [`Requirement::capability`] is a structural
/// placeholder: it has quantity zero and is checked against a capability
/// instead of the inventory.
///
/// # Examples
///
/// ```
/// use furrow_core::{Requirement, ResourceId};
///
/// let cloak = Requirement::any_of(
///     ResourceId(13122),
///     1,
///     [ResourceId(13123), ResourceId(13124)],
/// ).unwrap();
///
/// assert_eq!(cloak.resource_ids().len(), 3);
/// assert!(!cloak.is_placeholder());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requirement {
    primary: ResourceId,
    quantity: u32,
    alternatives: SmallVec<[ResourceId; 4]>,
    capability: Option<Capability>,
    label: Option<String>,
}

impl Requirement {
    /// A plain requirement: `quantity` of exactly `primary`.
    pub fn item(primary: ResourceId, quantity: u32) -> Result<Self, RequirementError> {
        Self::any_of(primary, quantity, [])
    }

    /// `quantity` in total of `primary` or any of `alternatives`.
    ///
    /// The alternative list may repeat the primary; resolution
    /// de-duplicates before summing.
    pub fn any_of(
        primary: ResourceId,
        quantity: u32,
        alternatives: impl IntoIterator<Item = ResourceId>,
    ) -> Result<Self, RequirementError> {
        if quantity == 0 {
            return Err(RequirementError::ZeroQuantity { primary });
        }
        Ok(Self {
            primary,
            quantity,
            alternatives: alternatives.into_iter().collect(),
            capability: None,
            label: None,
        })
    }

    /// A structural placeholder: no item needed, `capability` applies.
    pub fn capability(capability: Capability) -> Self {
        Self {
            primary: ResourceId(0),
            quantity: 0,
            alternatives: SmallVec::new(),
            capability: Some(capability),
            label: None,
        }
    }

    /// Attach a display label.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The resource shown to the player when this requirement is missing.
    pub fn primary(&self) -> ResourceId {
        self.primary
    }

    /// Required total quantity (zero for placeholders).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Alternatives as given at construction.
    pub fn alternatives(&self) -> &[ResourceId] {
        &self.alternatives
    }

    /// The capability checked instead of the inventory, for placeholders.
    pub fn capability_condition(&self) -> Option<&Capability> {
        self.capability.as_ref()
    }

    /// Display label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this is a zero-quantity capability placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.capability.is_some()
    }

    /// Every resource that counts towards this requirement, primary
    /// first, with duplicates removed.
    pub fn resource_ids(&self) -> SmallVec<[ResourceId; 8]> {
        let mut ids: SmallVec<[ResourceId; 8]> = SmallVec::new();
        if self.is_placeholder() {
            return ids;
        }
        ids.push(self.primary);
        for id in &self.alternatives {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        ids
    }
}

/// A requirement satisfied by the sum of holdings across every member of
/// a category ("any herb seed, 9 in total").
///
/// # Examples
///
/// ```
/// use furrow_core::{CategoryRequirement, ResourceId};
///
/// let seeds = CategoryRequirement::new(
///     "Herb seeds",
///     3,
///     [ResourceId(5291), ResourceId(5292), ResourceId(5291)],
/// ).unwrap();
///
/// assert_eq!(seeds.members().len(), 2);
/// assert_eq!(seeds.display_label(), "3x Herb seeds (any type)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRequirement {
    label: String,
    quantity: u32,
    members: Vec<ResourceId>,
}

impl CategoryRequirement {
    /// Build a category requirement. Members are de-duplicated, keeping
    /// first-seen order; an empty member list is rejected.
    pub fn new(
        label: impl Into<String>,
        quantity: u32,
        members: impl IntoIterator<Item = ResourceId>,
    ) -> Result<Self, RequirementError> {
        let label = label.into();
        let mut unique: Vec<ResourceId> = Vec::new();
        for id in members {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.is_empty() {
            return Err(RequirementError::EmptyCategory { label });
        }
        Ok(Self {
            label,
            quantity,
            members: unique,
        })
    }

    /// The same category with a different required quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            label: self.label.clone(),
            quantity,
            members: self.members.clone(),
        }
    }

    /// Category label (e.g. `"Herb seeds"`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Required total across all members.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// De-duplicated member resources.
    pub fn members(&self) -> &[ResourceId] {
        &self.members
    }

    /// Whether `id` belongs to this category.
    pub fn contains(&self, id: ResourceId) -> bool {
        self.members.contains(&id)
    }

    /// Representative resource for display: the first member.
    pub fn display_id(&self) -> ResourceId {
        // Construction guarantees at least one member.
        self.members.first().copied().unwrap_or(ResourceId(0))
    }

    /// Human-readable summary, e.g. `"9x Herb seeds (any type)"`.
    pub fn display_label(&self) -> String {
        format!("{}x {} (any type)", self.quantity, self.label)
    }
}

/// One unit of "what the player must hold", as re-resolved each tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Need {
    /// An item, any-of, or placeholder requirement.
    Item(Requirement),
    /// A sum-over-category requirement.
    Category(CategoryRequirement),
}

impl Need {
    /// Resource to display when this need is unmet.
    pub fn display_id(&self) -> ResourceId {
        match self {
            Self::Item(req) => req.primary(),
            Self::Category(cat) => cat.display_id(),
        }
    }

    /// Human-readable label for this need.
    pub fn display_label(&self) -> String {
        match self {
            Self::Item(req) => match (req.label(), req.capability_condition()) {
                (Some(label), _) => label.to_string(),
                (None, Some(cap)) => format!("{} level {}", cap.name, cap.level),
                (None, None) => format!("resource {}", req.primary()),
            },
            Self::Category(cat) => cat.display_label(),
        }
    }
}

impl From<Requirement> for Need {
    fn from(req: Requirement) -> Self {
        Self::Item(req)
    }
}

impl From<CategoryRequirement> for Need {
    fn from(cat: CategoryRequirement) -> Self {
        Self::Category(cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_rejects_zero_quantity() {
        assert_eq!(
            Requirement::item(ResourceId(563), 0),
            Err(RequirementError::ZeroQuantity {
                primary: ResourceId(563)
            })
        );
    }

    #[test]
    fn resource_ids_dedups_primary_listed_as_alternative() {
        let req = Requirement::any_of(
            ResourceId(1),
            1,
            [ResourceId(1), ResourceId(2), ResourceId(2), ResourceId(3)],
        )
        .unwrap();
        assert_eq!(
            req.resource_ids().as_slice(),
            &[ResourceId(1), ResourceId(2), ResourceId(3)]
        );
    }

    #[test]
    fn empty_alternatives_is_plain() {
        let req = Requirement::item(ResourceId(7), 2).unwrap();
        assert!(req.alternatives().is_empty());
        assert_eq!(req.resource_ids().as_slice(), &[ResourceId(7)]);
    }

    #[test]
    fn placeholder_has_no_resources() {
        let level = Capability::new("construction", 50);
        let req = Requirement::capability(level.with_detail("Portal nexus"));
        assert!(req.is_placeholder());
        assert_eq!(req.quantity(), 0);
        assert!(req.resource_ids().is_empty());
        assert_eq!(
            req.capability_condition().and_then(|c| c.detail.as_deref()),
            Some("Portal nexus")
        );
    }

    #[test]
    fn category_rejects_empty_members() {
        let err = CategoryRequirement::new("Nothing", 1, []).unwrap_err();
        assert!(matches!(err, RequirementError::EmptyCategory { .. }));
    }

    #[test]
    fn category_with_quantity_keeps_members() {
        let members = [ResourceId(5291), ResourceId(5295)];
        let seeds = CategoryRequirement::new("Herb seeds", 1, members).unwrap();
        let nine = seeds.with_quantity(9);
        assert_eq!(nine.quantity(), 9);
        assert_eq!(nine.members(), seeds.members());
        assert_eq!(nine.display_id(), ResourceId(5291));
    }

    #[test]
    fn need_labels() {
        let law: Need = Requirement::item(ResourceId(563), 2)
            .unwrap()
            .labelled("Law rune")
            .into();
        assert_eq!(law.display_label(), "Law rune");

        let bare: Need = Requirement::item(ResourceId(563), 2).unwrap().into();
        assert_eq!(bare.display_label(), "resource 563");

        let poh: Need = Requirement::capability(Capability::new("construction", 50)).into();
        assert_eq!(poh.display_label(), "construction level 50");
    }
}
