//! Requirement resolution against an inventory snapshot.
//!
//! Every "does the player hold enough?" question in Furrow goes through
//! the summing functions here: an any-of requirement and a category
//! requirement both reduce to "sum the held quantity over a de-duplicated
//! ID set and compare". Placeholders are delegated to the host's
//! [`CapabilitySource`].
//!
//! Resolution is pure. A [`Resolver`] only borrows its inputs, so any
//! number of readers may resolve against the same snapshot concurrently.

use crate::id::ResourceId;
use crate::inventory::InventorySnapshot;
use crate::requirement::{CategoryRequirement, Need, Requirement};
use crate::traits::CapabilitySource;

/// An unmet need, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortfall {
    /// Resource to show (primary item, or first category member).
    pub display_id: ResourceId,
    /// Human-readable label.
    pub label: String,
    /// How many more are needed (levels, for placeholders).
    pub remaining: u32,
}

/// Total held towards an item requirement, summed over its de-duplicated
/// resource set. Zero for placeholders.
pub fn held_total(req: &Requirement, snapshot: &InventorySnapshot) -> u64 {
    snapshot.total(req.resource_ids().iter())
}

/// Total held across a category's members.
pub fn category_total(cat: &CategoryRequirement, snapshot: &InventorySnapshot) -> u64 {
    snapshot.total(cat.members())
}

fn shortfall(quantity: u32, held: u64) -> u32 {
    if held >= u64::from(quantity) {
        0
    } else {
        // held < quantity <= u32::MAX
        quantity - held as u32
    }
}

/// Whether `req` is satisfied.
pub fn is_satisfied(
    req: &Requirement,
    snapshot: &InventorySnapshot,
    capabilities: &dyn CapabilitySource,
) -> bool {
    remaining(req, snapshot, capabilities) == 0
}

/// How many more of `req` are needed, never negative.
///
/// For a placeholder this is the number of missing capability levels.
pub fn remaining(
    req: &Requirement,
    snapshot: &InventorySnapshot,
    capabilities: &dyn CapabilitySource,
) -> u32 {
    match req.capability_condition() {
        Some(cap) => {
            let current = capabilities.capability_level(&cap.name).unwrap_or(0);
            cap.level.saturating_sub(current)
        }
        None => shortfall(req.quantity(), held_total(req, snapshot)),
    }
}

/// Whether the summed holding across `cat`'s members reaches its quantity.
pub fn is_category_satisfied(cat: &CategoryRequirement, snapshot: &InventorySnapshot) -> bool {
    remaining_category(cat, snapshot) == 0
}

/// How many more category members are needed, never negative.
pub fn remaining_category(cat: &CategoryRequirement, snapshot: &InventorySnapshot) -> u32 {
    shortfall(cat.quantity(), category_total(cat, snapshot))
}

/// Resolves requirements against one snapshot and one capability source.
///
/// # Examples
///
/// ```
/// use furrow_core::{InventorySnapshot, NoCapabilities, Requirement, Resolver, ResourceId};
///
/// let inv = InventorySnapshot::from_counts([(ResourceId(563), 1)]);
/// let resolver = Resolver::new(&inv, &NoCapabilities);
/// let law = Requirement::item(ResourceId(563), 2).unwrap();
///
/// assert!(!resolver.is_satisfied(&law));
/// assert_eq!(resolver.remaining(&law), 1);
/// ```
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    snapshot: &'a InventorySnapshot,
    capabilities: &'a dyn CapabilitySource,
}

impl<'a> Resolver<'a> {
    /// Borrow a snapshot and a capability source.
    pub fn new(snapshot: &'a InventorySnapshot, capabilities: &'a dyn CapabilitySource) -> Self {
        Self {
            snapshot,
            capabilities,
        }
    }

    /// The snapshot being resolved against.
    pub fn snapshot(&self) -> &'a InventorySnapshot {
        self.snapshot
    }

    /// See [`is_satisfied`].
    pub fn is_satisfied(&self, req: &Requirement) -> bool {
        is_satisfied(req, self.snapshot, self.capabilities)
    }

    /// See [`remaining`].
    pub fn remaining(&self, req: &Requirement) -> u32 {
        remaining(req, self.snapshot, self.capabilities)
    }

    /// See [`is_category_satisfied`].
    pub fn is_category_satisfied(&self, cat: &CategoryRequirement) -> bool {
        is_category_satisfied(cat, self.snapshot)
    }

    /// See [`remaining_category`].
    pub fn remaining_category(&self, cat: &CategoryRequirement) -> u32 {
        remaining_category(cat, self.snapshot)
    }

    /// How many more are needed for either kind of [`Need`].
    pub fn need_remaining(&self, need: &Need) -> u32 {
        match need {
            Need::Item(req) => self.remaining(req),
            Need::Category(cat) => self.remaining_category(cat),
        }
    }

    /// Whether a [`Need`] is met.
    pub fn need_satisfied(&self, need: &Need) -> bool {
        self.need_remaining(need) == 0
    }

    /// Whether every need in `needs` is met. Vacuously true when empty.
    pub fn all_satisfied<'n>(&self, needs: impl IntoIterator<Item = &'n Need>) -> bool {
        needs.into_iter().all(|n| self.need_satisfied(n))
    }

    /// Every unmet need, in input order.
    pub fn shortfalls<'n>(&self, needs: impl IntoIterator<Item = &'n Need>) -> Vec<Shortfall> {
        needs
            .into_iter()
            .filter_map(|need| {
                let remaining = self.need_remaining(need);
                (remaining > 0).then(|| Shortfall {
                    display_id: need.display_id(),
                    label: need.display_label(),
                    remaining,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("snapshot_len", &self.snapshot.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::Capability;
    use crate::traits::NoCapabilities;
    use proptest::prelude::*;

    struct Levels(Vec<(&'static str, u32)>);

    impl CapabilitySource for Levels {
        fn capability_level(&self, name: &str) -> Option<u32> {
            self.0.iter().find(|(n, _)| *n == name).map(|(_, l)| *l)
        }
    }

    fn inv(slots: &[(u32, u32)]) -> InventorySnapshot {
        InventorySnapshot::from_counts(slots.iter().map(|(id, q)| (ResourceId(*id), *q)))
    }

    #[test]
    fn plain_requirement_reads_primary_only() {
        let req = Requirement::item(ResourceId(1), 2).unwrap();
        let snapshot = inv(&[(1, 1), (2, 10)]);
        assert!(!is_satisfied(&req, &snapshot, &NoCapabilities));
        assert_eq!(remaining(&req, &snapshot, &NoCapabilities), 1);
    }

    #[test]
    fn alternatives_are_summed() {
        let req = Requirement::any_of(ResourceId(1), 3, [ResourceId(2), ResourceId(3)]).unwrap();
        let snapshot = inv(&[(1, 1), (2, 1), (3, 1)]);
        assert!(is_satisfied(&req, &snapshot, &NoCapabilities));
    }

    #[test]
    fn primary_repeated_in_alternatives_counts_once() {
        let req = Requirement::any_of(ResourceId(1), 2, [ResourceId(1)]).unwrap();
        let snapshot = inv(&[(1, 1)]);
        assert!(!is_satisfied(&req, &snapshot, &NoCapabilities));
        assert_eq!(remaining(&req, &snapshot, &NoCapabilities), 1);
    }

    #[test]
    fn absent_resources_read_as_zero() {
        let req = Requirement::item(ResourceId(99), 1).unwrap();
        assert_eq!(
            remaining(&req, &InventorySnapshot::empty(), &NoCapabilities),
            1
        );
    }

    #[test]
    fn placeholder_delegates_to_capabilities() {
        let req = Requirement::capability(Capability::new("construction", 50));
        let full_inventory = inv(&[(0, 100)]);
        assert!(!is_satisfied(&req, &full_inventory, &NoCapabilities));
        assert_eq!(remaining(&req, &full_inventory, &NoCapabilities), 50);

        let levels = Levels(vec![("construction", 47)]);
        assert_eq!(remaining(&req, &full_inventory, &levels), 3);

        let levels = Levels(vec![("construction", 72)]);
        assert!(is_satisfied(&req, &InventorySnapshot::empty(), &levels));
    }

    #[test]
    fn category_sums_members() {
        let seeds = CategoryRequirement::new(
            "Herb seeds",
            4,
            [ResourceId(5291), ResourceId(5295), ResourceId(5304)],
        )
        .unwrap();
        let snapshot = inv(&[(5291, 1), (5295, 2), (5304, 1), (1, 50)]);
        assert!(is_category_satisfied(&seeds, &snapshot));
        assert_eq!(remaining_category(&seeds.with_quantity(6), &snapshot), 2);
    }

    #[test]
    fn shortfalls_list_only_unmet_needs_in_order() {
        let needs: Vec<Need> = vec![
            Requirement::item(ResourceId(563), 2)
                .unwrap()
                .labelled("Law rune")
                .into(),
            Requirement::item(ResourceId(555), 2).unwrap().into(),
            CategoryRequirement::new("Herb seeds", 3, [ResourceId(5291)])
                .unwrap()
                .into(),
        ];
        let snapshot = inv(&[(555, 2), (5291, 1)]);
        let resolver = Resolver::new(&snapshot, &NoCapabilities);
        let short = resolver.shortfalls(&needs);
        assert_eq!(
            short,
            vec![
                Shortfall {
                    display_id: ResourceId(563),
                    label: "Law rune".to_string(),
                    remaining: 2,
                },
                Shortfall {
                    display_id: ResourceId(5291),
                    label: "3x Herb seeds (any type)".to_string(),
                    remaining: 2,
                },
            ]
        );
        assert!(!resolver.all_satisfied(&needs));
        assert!(resolver.all_satisfied(&[]));
    }

    fn arb_distribution(total: u32, slots: usize) -> impl Strategy<Value = Vec<u32>> {
        // Cut points in [0, total], sorted; consecutive differences sum to `total`.
        proptest::collection::vec(0..=total, slots - 1).prop_map(move |mut cuts| {
            cuts.sort_unstable();
            let mut parts = Vec::with_capacity(cuts.len() + 1);
            let mut prev = 0;
            for c in cuts {
                parts.push(c - prev);
                prev = c;
            }
            parts.push(total - prev);
            parts
        })
    }

    /// A quantity and a split of `quantity - short` across four slots.
    fn arb_split(short: u32) -> impl Strategy<Value = (u32, Vec<u32>)> {
        (1u32..500).prop_flat_map(move |q| {
            arb_distribution(q - short, 4).prop_map(move |parts| (q, parts))
        })
    }

    fn four_way(quantity: u32) -> Requirement {
        let alternatives = [ResourceId(11), ResourceId(12), ResourceId(13)];
        Requirement::any_of(ResourceId(10), quantity, alternatives).unwrap()
    }

    fn spread(dist: &[u32]) -> InventorySnapshot {
        InventorySnapshot::from_counts((10u32..).map(ResourceId).zip(dist.iter().copied()))
    }

    proptest! {
        #[test]
        fn additivity_one_short_is_unsatisfied((quantity, dist) in arb_split(1)) {
            let req = four_way(quantity);
            let snapshot = spread(&dist);
            prop_assert!(!is_satisfied(&req, &snapshot, &NoCapabilities));
            prop_assert_eq!(remaining(&req, &snapshot, &NoCapabilities), 1);
        }

        #[test]
        fn additivity_exact_is_satisfied((quantity, dist) in arb_split(0)) {
            let req = four_way(quantity);
            let snapshot = spread(&dist);
            prop_assert!(is_satisfied(&req, &snapshot, &NoCapabilities));
            prop_assert_eq!(remaining(&req, &snapshot, &NoCapabilities), 0);
        }

        #[test]
        fn remaining_never_exceeds_quantity(
            quantity in 1u32..=u32::MAX,
            held in proptest::collection::vec((0u32..8, any::<u32>()), 0..8),
        ) {
            let alternatives = [ResourceId(1), ResourceId(2)];
            let req = Requirement::any_of(ResourceId(0), quantity, alternatives).unwrap();
            let slots = held.into_iter().map(|(id, n)| (ResourceId(id), n));
            let snapshot = InventorySnapshot::from_counts(slots);
            let left = remaining(&req, &snapshot, &NoCapabilities);
            prop_assert!(left <= quantity);
            prop_assert_eq!(left == 0, is_satisfied(&req, &snapshot, &NoCapabilities));
        }

        #[test]
        fn category_matches_item_any_of(
            quantity in 1u32..1000,
            held in proptest::collection::vec(0u32..400, 3),
        ) {
            let ids = [ResourceId(1), ResourceId(2), ResourceId(3)];
            let cat = CategoryRequirement::new("c", quantity, ids).unwrap();
            let req = Requirement::any_of(ids[0], quantity, ids[1..].iter().copied()).unwrap();
            let snapshot = InventorySnapshot::from_counts(ids.iter().copied().zip(held));
            prop_assert_eq!(
                remaining_category(&cat, &snapshot),
                remaining(&req, &snapshot, &NoCapabilities)
            );
        }
    }
}
