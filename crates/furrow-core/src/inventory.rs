//! Immutable per-tick view of the player's held resources.

use indexmap::IndexMap;

use crate::id::ResourceId;

/// Held quantity per resource, captured once per evaluation.
///
/// Snapshots are rebuilt wholesale from the host on every evaluation and
/// never patched afterwards, so readers holding one can never observe a
/// half-applied update. Resources that are absent read as zero.
///
/// # Examples
///
/// ```
/// use furrow_core::{InventorySnapshot, ResourceId};
///
/// // Two inventory slots holding the same rune are merged.
/// let inv = InventorySnapshot::from_counts([
///     (ResourceId(563), 10),
///     (ResourceId(555), 4),
///     (ResourceId(563), 5),
/// ]);
///
/// assert_eq!(inv.count(ResourceId(563)), 15);
/// assert_eq!(inv.count(ResourceId(1)), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    counts: IndexMap<ResourceId, u32>,
}

impl InventorySnapshot {
    /// A snapshot holding nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(resource, quantity)` slots. Repeated
    /// resources are summed (saturating), zero-quantity slots are dropped.
    pub fn from_counts(slots: impl IntoIterator<Item = (ResourceId, u32)>) -> Self {
        let mut counts: IndexMap<ResourceId, u32> = IndexMap::new();
        for (id, qty) in slots {
            if qty == 0 {
                continue;
            }
            let entry = counts.entry(id).or_insert(0);
            *entry = entry.saturating_add(qty);
        }
        Self { counts }
    }

    /// Held quantity of `id` (zero if absent).
    pub fn count(&self, id: ResourceId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Sum of held quantities over `ids`. The caller is responsible for
    /// de-duplicating; a repeated id is counted twice.
    pub fn total<'a>(&self, ids: impl IntoIterator<Item = &'a ResourceId>) -> u64 {
        ids.into_iter().map(|id| u64::from(self.count(*id))).sum()
    }

    /// Number of distinct resources held.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Held resources in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, u32)> + '_ {
        self.counts.iter().map(|(id, qty)| (*id, *qty))
    }
}

impl FromIterator<(ResourceId, u32)> for InventorySnapshot {
    fn from_iter<I: IntoIterator<Item = (ResourceId, u32)>>(iter: I) -> Self {
        Self::from_counts(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_repeated_slots() {
        let inv: InventorySnapshot = [(ResourceId(1), 3), (ResourceId(1), 4)]
            .into_iter()
            .collect();
        assert_eq!(inv.count(ResourceId(1)), 7);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn merge_saturates() {
        let inv = InventorySnapshot::from_counts([(ResourceId(1), u32::MAX), (ResourceId(1), 5)]);
        assert_eq!(inv.count(ResourceId(1)), u32::MAX);
    }

    #[test]
    fn zero_slots_are_dropped() {
        let inv = InventorySnapshot::from_counts([(ResourceId(1), 0)]);
        assert!(inv.is_empty());
    }

    #[test]
    fn total_widens_to_u64() {
        let slots = [(ResourceId(1), u32::MAX), (ResourceId(2), u32::MAX)];
        let inv = InventorySnapshot::from_counts(slots);
        let ids = [ResourceId(1), ResourceId(2), ResourceId(3)];
        assert_eq!(inv.total(&ids), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn iter_preserves_first_seen_order() {
        let inv = InventorySnapshot::from_counts([
            (ResourceId(9), 1),
            (ResourceId(2), 1),
            (ResourceId(9), 1),
        ]);
        let order: Vec<ResourceId> = inv.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![ResourceId(9), ResourceId(2)]);
    }
}
