//! Completion oracles: deciding when an action at a target is done.
//!
//! The engine never infers completion on its own. Each action-phase
//! evaluation builds an [`ActionContext`] and asks the configured
//! [`CompletionOracle`]. Hosts with richer signals (chat messages,
//! animations) can supply their own strategy.

use furrow_atlas::TargetLocation;
use furrow_core::{LifecycleState, Treatment};

use crate::phase::RunPhase;

/// What an oracle sees when asked about the current action.
#[derive(Clone, Copy, Debug)]
pub struct ActionContext<'a> {
    /// The action phase being performed.
    pub phase: RunPhase,
    /// Where it is being performed.
    pub location: &'a TargetLocation,
    /// State decoded on this evaluation.
    pub observed: LifecycleState,
    /// Whether the host called `signal_action_complete` since the
    /// action started.
    pub signalled: bool,
}

/// Strategy deciding whether the current action is finished.
pub trait CompletionOracle: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Whether the action described by `ctx` is complete.
    fn is_complete(&self, ctx: &ActionContext<'_>) -> bool;
}

/// Complete only when the host signals it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalOracle;

impl CompletionOracle for SignalOracle {
    fn name(&self) -> &str {
        "signal"
    }

    fn is_complete(&self, ctx: &ActionContext<'_>) -> bool {
        ctx.signalled
    }
}

/// Complete when signalled, or when the decoded state shows the action
/// took effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct LifecycleOracle;

impl CompletionOracle for LifecycleOracle {
    fn name(&self) -> &str {
        "lifecycle"
    }

    fn is_complete(&self, ctx: &ActionContext<'_>) -> bool {
        if ctx.signalled {
            return true;
        }
        match ctx.phase {
            RunPhase::Composting => ctx.observed == LifecycleState::Treated(Treatment::Composted),
            RunPhase::Watering => ctx.observed == LifecycleState::Treated(Treatment::Watered),
            RunPhase::Collecting | RunPhase::Planting | RunPhase::Treating | RunPhase::Clearing => {
                ctx.observed.is_growing()
            }
            _ => false,
        }
    }
}

/// Never completes. Runs using it only advance through `stop`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverComplete;

impl CompletionOracle for NeverComplete {
    fn name(&self) -> &str {
        "never"
    }

    fn is_complete(&self, _ctx: &ActionContext<'_>) -> bool {
        false
    }
}
