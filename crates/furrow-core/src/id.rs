//! Strongly-typed identifiers and the host-supplied [`Timestamp`].

use std::fmt;

/// Identifies a resource (an item) held by the player.
///
/// Resource IDs come from the host game and are opaque to Furrow. Two
/// different IDs are never assumed to be interchangeable unless a
/// requirement lists them together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a target location within a catalog.
///
/// Location IDs are stable, human-chosen keys (`"ardougne"`), used by the
/// host to select which locations take part in a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub String);

impl LocationId {
    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for LocationId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Identifies a transit option within one location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitId(pub String);

impl TransitId {
    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransitId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for TransitId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Address of a location's raw status code in the host game state.
///
/// Static configuration: the catalog records which key each location
/// reads, and the host looks the code up before calling `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusKey(pub u32);

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StatusKey {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Host-supplied wall-clock time in milliseconds.
///
/// Furrow never reads a clock itself. The epoch is whatever the host
/// chooses; only differences between timestamps are meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Milliseconds elapsed since `earlier`, saturating at zero if the
    /// host clock went backwards.
    pub fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
