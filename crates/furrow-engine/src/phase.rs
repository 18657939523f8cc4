//! Run phases.

use std::fmt;

use furrow_core::LifecycleState;

/// Where a run currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// No run.
    #[default]
    Idle,
    /// Missing something needed for the current location.
    GatheringResources,
    /// Everything held; waiting for the player to leave.
    ReadyToTransit,
    /// Transit in progress.
    Transiting,
    /// Landed; walking to the target.
    Navigating,
    /// Within reach of the target.
    AtTarget,
    /// Collecting a ready target.
    Collecting,
    /// Planting into an empty target.
    Planting,
    /// Curing a diseased target.
    Treating,
    /// Clearing a dead target.
    Clearing,
    /// Applying compost.
    Composting,
    /// Watering.
    Watering,
    /// Current location done; the next one is being prepared.
    MovingToNext,
    /// Every location done.
    RunComplete,
    /// Suspended by the host.
    Paused,
    /// Stopped by a fault; see [`RunFault`](crate::RunFault).
    Error,
}

impl RunPhase {
    /// A run is in progress and ticking (not idle, paused, complete, or failed).
    pub fn is_active(self) -> bool {
        !matches!(
            self,
            Self::Idle | Self::RunComplete | Self::Paused | Self::Error
        )
    }

    /// At the target, idle or acting.
    pub fn is_at_target(self) -> bool {
        self == Self::AtTarget || self.is_action()
    }

    /// Moving between locations.
    pub fn is_travelling(self) -> bool {
        matches!(
            self,
            Self::Transiting | Self::Navigating | Self::MovingToNext
        )
    }

    /// Getting ready to leave.
    pub fn is_preparing(self) -> bool {
        matches!(self, Self::GatheringResources | Self::ReadyToTransit)
    }

    /// Performing an action at the target.
    pub fn is_action(self) -> bool {
        matches!(
            self,
            Self::Collecting
                | Self::Planting
                | Self::Treating
                | Self::Clearing
                | Self::Composting
                | Self::Watering
        )
    }

    /// An action picked from the decoded state, so a later decode may
    /// re-target it. Composting and watering are host requests.
    pub fn is_state_driven(self) -> bool {
        matches!(
            self,
            Self::Collecting | Self::Planting | Self::Treating | Self::Clearing
        )
    }

    /// The action a decoded state calls for, if any.
    pub fn action_for(state: LifecycleState) -> Option<RunPhase> {
        match state {
            LifecycleState::Ready => Some(Self::Collecting),
            LifecycleState::Diseased => Some(Self::Treating),
            LifecycleState::Dead => Some(Self::Clearing),
            LifecycleState::Empty => Some(Self::Planting),
            _ => None,
        }
    }

    /// Short name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::GatheringResources => "Gathering Resources",
            Self::ReadyToTransit => "Ready to Transit",
            Self::Transiting => "Transiting",
            Self::Navigating => "Navigating",
            Self::AtTarget => "At Target",
            Self::Collecting => "Collecting",
            Self::Planting => "Planting",
            Self::Treating => "Treating",
            Self::Clearing => "Clearing",
            Self::Composting => "Composting",
            Self::Watering => "Watering",
            Self::MovingToNext => "Moving to Next",
            Self::RunComplete => "Run Complete",
            Self::Paused => "Paused",
            Self::Error => "Error",
        }
    }

    /// One-sentence description for display.
    pub fn description(self) -> &'static str {
        match self {
            Self::Idle => "No run active",
            Self::GatheringResources => "Collect the resources listed for the next location",
            Self::ReadyToTransit => "Everything gathered, ready to travel",
            Self::Transiting => "Travelling to the location",
            Self::Navigating => "Walk to the target",
            Self::AtTarget => "At the target, ready to interact",
            Self::Collecting => "Collect from the target",
            Self::Planting => "Plant into the target",
            Self::Treating => "Cure the diseased target",
            Self::Clearing => "Clear the dead target",
            Self::Composting => "Apply compost to the target",
            Self::Watering => "Water the target",
            Self::MovingToNext => "Location done, preparing the next one",
            Self::RunComplete => "Every location has been completed",
            Self::Paused => "Run paused",
            Self::Error => "The run stopped with an error",
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Maintenance actions the host may request at a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maintenance {
    /// Apply compost.
    Composting,
    /// Water.
    Watering,
}

impl From<Maintenance> for RunPhase {
    fn from(kind: Maintenance) -> Self {
        match kind {
            Maintenance::Composting => Self::Composting,
            Maintenance::Watering => Self::Watering,
        }
    }
}
