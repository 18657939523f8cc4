//! Test utilities and mock types for Furrow development.
//!
//! Provides a shared, mutable mock of [`GameStateSource`] and a sample
//! herb-run catalog (see [`fixtures`]) for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use furrow_core::{CapabilitySource, GameStateSource, InventorySnapshot, ResourceId};

#[derive(Default)]
struct MockState {
    held: Vec<(ResourceId, u32)>,
    capabilities: HashMap<String, u32>,
    inventory_reads: usize,
}

/// Mock implementation of [`GameStateSource`].
///
/// Cloning shares the underlying state, so a test can hand one clone to
/// the engine and keep mutating the other between ticks.
#[derive(Clone, Default)]
pub struct MockGameState {
    inner: Arc<Mutex<MockState>>,
}

impl MockGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock already holding `slots`.
    pub fn holding(slots: impl IntoIterator<Item = (u32, u32)>) -> Self {
        let mock = Self::new();
        mock.set_inventory(slots);
        mock
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the held slots.
    pub fn set_inventory(&self, slots: impl IntoIterator<Item = (u32, u32)>) {
        self.lock().held = slots
            .into_iter()
            .map(|(id, q)| (ResourceId(id), q))
            .collect();
    }

    /// Add one slot.
    pub fn give(&self, id: u32, quantity: u32) {
        self.lock().held.push((ResourceId(id), quantity));
    }

    /// Remove every slot holding `id`.
    pub fn remove(&self, id: u32) {
        self.lock().held.retain(|(held, _)| *held != ResourceId(id));
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.lock().held.clear();
    }

    pub fn set_capability(&self, name: &str, level: u32) {
        self.lock().capabilities.insert(name.to_string(), level);
    }

    /// How many times the engine has read the inventory.
    pub fn inventory_reads(&self) -> usize {
        self.lock().inventory_reads
    }
}

impl CapabilitySource for MockGameState {
    fn capability_level(&self, name: &str) -> Option<u32> {
        self.lock().capabilities.get(name).copied()
    }
}

impl GameStateSource for MockGameState {
    fn inventory(&self) -> InventorySnapshot {
        let mut state = self.lock();
        state.inventory_reads += 1;
        InventorySnapshot::from_counts(state.held.iter().copied())
    }
}
