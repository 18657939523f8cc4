//! Target categories, lifecycle states, and the status-code decoder.
//!
//! The host reports one raw integer per location. What that integer
//! means depends on the location's [`TargetCategory`]: every category
//! shares the same band layout and differs only in how many growing
//! stages precede "ready". [`StatusDecoder`] holds one [`Band`] per
//! category and is total: every input maps to some [`LifecycleState`].

use std::fmt;

use indexmap::IndexMap;

// ── TargetCategory ──────────────────────────────────────────────

/// Kind of target at a location. Selects the decoder band and the
/// category supply list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetCategory {
    /// Herb patches.
    Herb,
    /// Regular tree patches.
    Tree,
    /// Fruit tree patches.
    FruitTree,
    /// Flower patches.
    Flower,
    /// Allotments.
    Allotment,
    /// Hops.
    Hop,
    /// Bushes.
    Bush,
    /// Spirit tree patches.
    SpiritTree,
    /// Anything else with its own band.
    Special,
}

impl TargetCategory {
    /// Every category, in declaration order.
    pub const ALL: [TargetCategory; 9] = [
        Self::Herb,
        Self::Tree,
        Self::FruitTree,
        Self::Flower,
        Self::Allotment,
        Self::Hop,
        Self::Bush,
        Self::SpiritTree,
        Self::Special,
    ];

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Herb => "Herb",
            Self::Tree => "Tree",
            Self::FruitTree => "Fruit tree",
            Self::Flower => "Flower",
            Self::Allotment => "Allotment",
            Self::Hop => "Hop",
            Self::Bush => "Bush",
            Self::SpiritTree => "Spirit tree",
            Self::Special => "Special",
        }
    }
}

impl fmt::Display for TargetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── LifecycleState ──────────────────────────────────────────────

/// A treatment already applied to a growing target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Treatment {
    /// Watered.
    Watered,
    /// Composted.
    Composted,
    /// Protected from disease.
    Protected,
}

/// Normalized state of a target, independent of category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Not determined, or the code fell outside the category's bands.
    #[default]
    Unknown,
    /// Nothing planted.
    Empty,
    /// Planted, not yet ready.
    Growing,
    /// Ready for collection.
    Ready,
    /// Degraded; needs treatment.
    Diseased,
    /// Failed; needs clearing.
    Dead,
    /// Growing with a treatment applied.
    Treated(Treatment),
}

impl LifecycleState {
    /// Ready, diseased, or dead: the player has something to do here.
    pub fn requires_action(self) -> bool {
        matches!(self, Self::Ready | Self::Diseased | Self::Dead)
    }

    /// Empty or dead.
    pub fn can_plant(self) -> bool {
        matches!(self, Self::Empty | Self::Dead)
    }

    /// Ready for collection.
    pub fn can_harvest(self) -> bool {
        self == Self::Ready
    }

    /// Diseased.
    pub fn needs_treatment(self) -> bool {
        self == Self::Diseased
    }

    /// Dead.
    pub fn needs_removal(self) -> bool {
        self == Self::Dead
    }

    /// Growing, treated or not.
    pub fn is_growing(self) -> bool {
        matches!(self, Self::Growing | Self::Treated(_))
    }

    /// Short name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Empty => "Empty",
            Self::Growing => "Growing",
            Self::Ready => "Ready",
            Self::Diseased => "Diseased",
            Self::Dead => "Dead",
            Self::Treated(Treatment::Watered) => "Watered",
            Self::Treated(Treatment::Composted) => "Composted",
            Self::Treated(Treatment::Protected) => "Protected",
        }
    }

    /// One-sentence description for display.
    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "State not yet determined",
            Self::Empty => "Empty and ready for planting",
            Self::Growing => "Still growing",
            Self::Ready => "Ready to collect",
            Self::Diseased => "Diseased and needs a cure",
            Self::Dead => "Dead and needs clearing",
            Self::Treated(Treatment::Watered) => "Growing, watered",
            Self::Treated(Treatment::Composted) => "Growing, composted",
            Self::Treated(Treatment::Protected) => "Growing, protected from disease",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ── Band ────────────────────────────────────────────────────────

/// Code layout for one category, parameterised by its number of growing
/// stages `g`:
///
/// | code            | state                     |
/// |-----------------|---------------------------|
/// | `0`             | `Empty`                   |
/// | `1..=g`         | `Growing`                 |
/// | `g+1`           | `Ready`                   |
/// | `g+2`           | `Diseased`                |
/// | `g+3`           | `Dead`                    |
/// | `g+4, g+5, g+6` | `Treated(Watered, Composted, Protected)` |
/// | anything else   | outside the band          |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// Number of growing stages before the target is ready.
    pub growing_stages: u8,
}

impl Band {
    /// A band with `growing_stages` growing codes.
    pub const fn new(growing_stages: u8) -> Self {
        Self { growing_stages }
    }

    /// Classify `raw`, or `None` if it lies outside the band.
    pub fn classify(self, raw: i32) -> Option<LifecycleState> {
        let g = i32::from(self.growing_stages);
        let state = match raw {
            0 => LifecycleState::Empty,
            r if (1..=g).contains(&r) => LifecycleState::Growing,
            r if r == g + 1 => LifecycleState::Ready,
            r if r == g + 2 => LifecycleState::Diseased,
            r if r == g + 3 => LifecycleState::Dead,
            r if r == g + 4 => LifecycleState::Treated(Treatment::Watered),
            r if r == g + 5 => LifecycleState::Treated(Treatment::Composted),
            r if r == g + 6 => LifecycleState::Treated(Treatment::Protected),
            _ => return None,
        };
        Some(state)
    }

    /// Highest code inside the band.
    pub fn max_code(self) -> i32 {
        i32::from(self.growing_stages) + 6
    }
}

// ── StatusDecoder ───────────────────────────────────────────────

/// Table-driven decoder from `(raw code, category)` to [`LifecycleState`].
///
/// Decoding never fails. Codes outside a band, and any code for a
/// category with no row, decode to [`LifecycleState::Unknown`].
///
/// # Examples
///
/// ```
/// use furrow_core::{LifecycleState, StatusDecoder, TargetCategory};
///
/// let decoder = StatusDecoder::standard();
/// assert_eq!(decoder.decode(0, TargetCategory::Herb), LifecycleState::Empty);
/// assert_eq!(decoder.decode(4, TargetCategory::Herb), LifecycleState::Ready);
/// assert_eq!(decoder.decode(99, TargetCategory::Herb), LifecycleState::Unknown);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDecoder {
    bands: IndexMap<TargetCategory, Band>,
}

impl StatusDecoder {
    /// A decoder with no rows; every code decodes to `Unknown`.
    pub fn empty() -> Self {
        Self {
            bands: IndexMap::new(),
        }
    }

    /// The standard table covering every [`TargetCategory`].
    pub fn standard() -> Self {
        Self::empty()
            .with_band(TargetCategory::Herb, Band::new(3))
            .with_band(TargetCategory::Flower, Band::new(3))
            .with_band(TargetCategory::Allotment, Band::new(4))
            .with_band(TargetCategory::Bush, Band::new(4))
            .with_band(TargetCategory::Special, Band::new(5))
            .with_band(TargetCategory::Tree, Band::new(6))
            .with_band(TargetCategory::FruitTree, Band::new(6))
            .with_band(TargetCategory::Hop, Band::new(8))
            .with_band(TargetCategory::SpiritTree, Band::new(9))
    }

    /// Add or replace the row for `category`.
    pub fn with_band(mut self, category: TargetCategory, band: Band) -> Self {
        self.bands.insert(category, band);
        self
    }

    /// Row for `category`, if any.
    pub fn band(&self, category: TargetCategory) -> Option<Band> {
        self.bands.get(&category).copied()
    }

    /// Decode `raw` for `category`.
    pub fn decode(&self, raw: i32, category: TargetCategory) -> LifecycleState {
        let Some(band) = self.band(category) else {
            log::warn!("no decoder row for {category}; code {raw} decodes as Unknown");
            return LifecycleState::Unknown;
        };
        match band.classify(raw) {
            Some(state) => state,
            None => {
                log::debug!("code {raw} outside the {category} band");
                LifecycleState::Unknown
            }
        }
    }
}

impl Default for StatusDecoder {
    fn default() -> Self {
        Self::standard()
    }
}
