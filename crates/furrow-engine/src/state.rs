//! Per-run mutable state, plans, faults, and visit records.

use std::fmt;

use furrow_core::{LifecycleState, LocationId, Need, Tile, Timestamp, TransitId};

use crate::phase::RunPhase;

/// One stop of a run, with an optional preferred transit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedStop {
    /// Location to visit.
    pub location: LocationId,
    /// Transit to prefer; the location's default is used when `None` or
    /// when the location has no such option.
    pub transit: Option<TransitId>,
}

/// Ordered stops for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunPlan {
    /// Stops in visiting order.
    pub stops: Vec<PlannedStop>,
}

impl RunPlan {
    /// A plan visiting `ids` in order with default transits.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a LocationId>) -> Self {
        Self {
            stops: ids
                .into_iter()
                .map(|id| PlannedStop {
                    location: id.clone(),
                    transit: None,
                })
                .collect(),
        }
    }

    /// Append a stop.
    pub fn stop(mut self, location: impl Into<LocationId>, transit: Option<TransitId>) -> Self {
        self.stops.push(PlannedStop {
            location: location.into(),
            transit,
        });
        self
    }
}

/// Why a run ended up in [`RunPhase::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunFault {
    /// None of the requested locations exist in the catalog.
    NoEnabledLocations,
    /// The host failed the run.
    Host(String),
}

impl fmt::Display for RunFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEnabledLocations => write!(f, "no enabled locations"),
            Self::Host(reason) => write!(f, "host fault: {reason}"),
        }
    }
}

/// A completed location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    /// The location.
    pub location: LocationId,
    /// Action phase that completed it.
    pub action: RunPhase,
    /// State decoded on the completing evaluation.
    pub observed: LifecycleState,
    /// Host time of completion.
    pub completed_at: Timestamp,
}

/// Mutable state of one run. Created by `start`, mutated only by the
/// engine, discarded by `stop`.
#[derive(Clone, Debug)]
pub struct RunState {
    pub(crate) phase: RunPhase,
    pub(crate) locations: Vec<LocationId>,
    pub(crate) transits: Vec<Option<TransitId>>,
    pub(crate) current_index: usize,
    pub(crate) needs: Vec<Need>,
    pub(crate) current_target_state: LifecycleState,
    pub(crate) last_position: Option<Tile>,
    pub(crate) transit_origin: Option<Tile>,
    pub(crate) last_evaluated: Option<Timestamp>,
    pub(crate) transit_notified: bool,
    pub(crate) completion_signalled: bool,
    pub(crate) visits: Vec<VisitRecord>,
    pub(crate) fault: Option<RunFault>,
}

impl RunState {
    pub(crate) fn new(locations: Vec<LocationId>, transits: Vec<Option<TransitId>>) -> Self {
        Self {
            phase: RunPhase::Idle,
            locations,
            transits,
            current_index: 0,
            needs: Vec::new(),
            current_target_state: LifecycleState::Unknown,
            last_position: None,
            transit_origin: None,
            last_evaluated: None,
            transit_notified: false,
            completion_signalled: false,
            visits: Vec::new(),
            fault: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Locations of this run, fixed at start.
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// Index of the current location.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current location, if the run has not run past its end.
    pub fn current_location(&self) -> Option<&LocationId> {
        self.locations.get(self.current_index)
    }

    /// Transit chosen for the current location.
    pub fn current_transit(&self) -> Option<&TransitId> {
        self.transits
            .get(self.current_index)
            .and_then(Option::as_ref)
    }

    /// What the current location needs.
    pub fn needs(&self) -> &[Need] {
        &self.needs
    }

    /// Last decoded state of the current target.
    pub fn current_target_state(&self) -> LifecycleState {
        self.current_target_state
    }

    /// Player position at the last evaluation.
    pub fn last_position(&self) -> Option<Tile> {
        self.last_position
    }

    /// Where the player stood when the current transit began.
    pub fn transit_origin(&self) -> Option<Tile> {
        self.transit_origin
    }

    /// Time of the last evaluation.
    pub fn last_evaluated(&self) -> Option<Timestamp> {
        self.last_evaluated
    }

    /// Whether completion has been signalled for the current action.
    pub fn completion_signalled(&self) -> bool {
        self.completion_signalled
    }

    /// Completed locations, in completion order.
    pub fn visits(&self) -> &[VisitRecord] {
        &self.visits
    }

    /// Fault, when in [`RunPhase::Error`].
    pub fn fault(&self) -> Option<&RunFault> {
        self.fault.as_ref()
    }

    pub(crate) fn has_next(&self) -> bool {
        self.current_index + 1 < self.locations.len()
    }

    /// Clear per-location progress when moving on or resuming.
    pub(crate) fn reset_location_progress(&mut self) {
        self.current_target_state = LifecycleState::Unknown;
        self.transit_origin = None;
        self.transit_notified = false;
        self.completion_signalled = false;
    }
}
