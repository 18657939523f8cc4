//! The run engine: a tick-driven state machine over one run.
//!
//! [`RunEngine`] owns the run state and is the only thing that mutates
//! it. The host calls [`tick`](RunEngine::tick) with the player's
//! position and the current location's raw status code; commands
//! (`start_run`, `pause_run`, ...) arrive between ticks. The engine
//! calls into the resolver and decoder and never calls back into the
//! host except through [`GameStateSource`].

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Receiver;
use furrow_atlas::{Catalog, TargetLocation, TransitOption};
use furrow_core::{
    CapabilitySource, GameStateSource, InventorySnapshot, LifecycleState, LocationId, Resolver,
    Shortfall, StatusDecoder, TargetCategory, Tile, Timestamp,
};

use crate::config::{ConfigError, EngineConfig};
use crate::feed::{PhaseTransition, TransitionFeed};
use crate::metrics::RunMetrics;
use crate::oracle::ActionContext;
use crate::phase::{Maintenance, RunPhase};
use crate::state::{RunFault, RunPlan, RunState, VisitRecord};

// ── Tick I/O ───────────────────────────────────────────────────────

/// What the host observed this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInput {
    /// Host time.
    pub now: Timestamp,
    /// Player position, if known.
    pub position: Option<Tile>,
    /// Raw status code at the current location's status key, if read.
    pub status_code: Option<i32>,
}

impl TickInput {
    /// A tick with a position and no status code.
    pub fn at(now: u64, position: Tile) -> Self {
        Self {
            now: Timestamp(now),
            position: Some(position),
            status_code: None,
        }
    }

    /// Attach a status code.
    pub fn with_code(mut self, code: i32) -> Self {
        self.status_code = Some(code);
        self
    }
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Too soon after the last evaluation; nothing changed.
    Throttled,
    /// No active run; nothing changed.
    Inactive,
    /// No player position; nothing changed.
    Skipped,
    /// The run was evaluated.
    Evaluated {
        /// Phase before the evaluation.
        from: RunPhase,
        /// Phase after the evaluation (may equal `from`).
        to: RunPhase,
    },
}

// ── CommandError ───────────────────────────────────────────────────

/// A host command that is illegal in the current phase. The run is
/// left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// `start` outside [`RunPhase::Idle`].
    NotIdle {
        /// Phase at the time of the command.
        phase: RunPhase,
    },
    /// The command needs an active run.
    NotActive {
        /// Phase at the time of the command.
        phase: RunPhase,
    },
    /// `resume` outside [`RunPhase::Paused`].
    NotPaused {
        /// Phase at the time of the command.
        phase: RunPhase,
    },
    /// The command needs the player at the target.
    NotAtTarget {
        /// Phase at the time of the command.
        phase: RunPhase,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotIdle { phase } => write!(f, "a run is already in progress ({phase})"),
            Self::NotActive { phase } => write!(f, "no active run ({phase})"),
            Self::NotPaused { phase } => write!(f, "run is not paused ({phase})"),
            Self::NotAtTarget { phase } => write!(f, "not at the target ({phase})"),
        }
    }
}

impl Error for CommandError {}

// ── Helpers ────────────────────────────────────────────────────────

struct HostCapabilities<'a>(&'a dyn GameStateSource);

impl CapabilitySource for HostCapabilities<'_> {
    fn capability_level(&self, name: &str) -> Option<u32> {
        self.0.capability_level(name)
    }
}

fn decode(
    decoder: &StatusDecoder,
    metrics: &mut RunMetrics,
    code: Option<i32>,
    category: TargetCategory,
) -> LifecycleState {
    let state = match code {
        Some(raw) => decoder.decode(raw, category),
        None => {
            log::debug!("no status code this tick; {category} target is Unknown");
            LifecycleState::Unknown
        }
    };
    if state == LifecycleState::Unknown {
        metrics.decode_unknown += 1;
    }
    state
}

// ── RunEngine ──────────────────────────────────────────────────────

/// Tick-driven run orchestrator.
///
/// Single-threaded: the host serializes every call. The catalog is
/// shared read-only; everything else is owned.
pub struct RunEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    source: Box<dyn GameStateSource>,
    state: Option<RunState>,
    inventory: InventorySnapshot,
    shortfalls: Vec<Shortfall>,
    feed: TransitionFeed,
    metrics: RunMetrics,
}

impl RunEngine {
    /// Validate `config` and build an idle engine.
    pub fn new(
        catalog: Arc<Catalog>,
        source: impl GameStateSource + 'static,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let feed = TransitionFeed::new(config.feed_capacity);
        Ok(Self {
            catalog,
            config,
            source: Box::new(source),
            state: None,
            inventory: InventorySnapshot::empty(),
            shortfalls: Vec::new(),
            feed,
            metrics: RunMetrics::default(),
        })
    }

    // ── Commands ───────────────────────────────────────────────────

    /// Start a run over `ids` using each location's default transit.
    pub fn start_run(&mut self, ids: &[LocationId]) -> Result<(), CommandError> {
        self.start_plan(RunPlan::from_ids(ids))
    }

    /// Start a run following `plan`.
    ///
    /// Unknown locations are skipped. If none remain the run enters
    /// [`RunPhase::Error`] with [`RunFault::NoEnabledLocations`].
    pub fn start_plan(&mut self, plan: RunPlan) -> Result<(), CommandError> {
        let phase = self.phase();
        if phase != RunPhase::Idle {
            return Err(CommandError::NotIdle { phase });
        }

        let resolution = self
            .catalog
            .resolve_ids(plan.stops.iter().map(|s| &s.location));
        for id in &resolution.unknown {
            log::warn!("location '{id}' is not in the catalog; skipping it");
        }

        let mut transits = Vec::with_capacity(resolution.known.len());
        for id in &resolution.known {
            let preferred = plan
                .stops
                .iter()
                .find(|s| &s.location == id)
                .and_then(|s| s.transit.as_ref());
            let chosen = self
                .catalog
                .get(id)
                .and_then(|loc| self.catalog.choose_transit(loc, preferred))
                .map(|t| t.id().clone());
            if let Some(want) = preferred {
                if chosen.as_ref() != Some(want) {
                    log::warn!("location '{id}' has no transit '{want}'; using its default");
                }
            }
            transits.push(chosen);
        }

        let mut state = RunState::new(resolution.known, transits);
        if state.locations.is_empty() {
            log::warn!("run has no enabled locations");
            state.fault = Some(RunFault::NoEnabledLocations);
            self.state = Some(state);
            self.transition(RunPhase::Error, None);
            return Ok(());
        }

        log::info!("run started over {} locations", state.locations.len());
        self.state = Some(state);
        self.inventory = self.source.inventory();
        self.refresh_needs();
        let to = self.preparation_phase();
        self.transition(to, None);
        Ok(())
    }

    /// Discard the run and return to [`RunPhase::Idle`]. A no-op when idle.
    pub fn stop_run(&mut self) {
        if let Some(state) = self.state.take() {
            log::info!(
                "run stopped in {} after {} of {} locations",
                state.phase,
                state.visits.len(),
                state.locations.len()
            );
            self.shortfalls.clear();
            self.publish(state.phase, RunPhase::Idle, None, None);
        }
    }

    /// Suspend an active run.
    pub fn pause_run(&mut self) -> Result<(), CommandError> {
        let phase = self.phase();
        if !phase.is_active() {
            return Err(CommandError::NotActive { phase });
        }
        self.transition(RunPhase::Paused, None);
        Ok(())
    }

    /// Resume a paused run. Needs are re-resolved against a fresh
    /// inventory, and the next tick evaluates immediately.
    pub fn resume_run(&mut self) -> Result<(), CommandError> {
        let phase = self.phase();
        if phase != RunPhase::Paused {
            return Err(CommandError::NotPaused { phase });
        }
        if let Some(state) = self.state.as_mut() {
            state.last_position = None;
            state.last_evaluated = None;
            state.reset_location_progress();
        }
        self.inventory = self.source.inventory();
        self.refresh_needs();
        let to = self.preparation_phase();
        self.transition(to, None);
        Ok(())
    }

    /// Fail an active run with a host-supplied reason.
    pub fn fail_run(&mut self, reason: impl Into<String>) -> Result<(), CommandError> {
        let phase = self.phase();
        if !phase.is_active() {
            return Err(CommandError::NotActive { phase });
        }
        let fault = RunFault::Host(reason.into());
        log::warn!("run failed: {fault}");
        if let Some(state) = self.state.as_mut() {
            state.fault = Some(fault);
        }
        self.transition(RunPhase::Error, None);
        Ok(())
    }

    /// Tell the engine the player has started a transit.
    ///
    /// The notice is held until the run next evaluates in
    /// [`RunPhase::ReadyToTransit`], so it survives the change out of
    /// gathering. The position of the last evaluation becomes the transit
    /// origin.
    pub fn notify_transit(&mut self) -> Result<(), CommandError> {
        let phase = self.phase();
        if !phase.is_active() {
            return Err(CommandError::NotActive { phase });
        }
        if let Some(state) = self.state.as_mut() {
            state.transit_notified = true;
            state.transit_origin = state.last_position;
        }
        Ok(())
    }

    /// Tell the engine the current action is done. Read by the
    /// completion oracle on the next action-phase evaluation. A signal
    /// sent at the target while the state calls for no action is dropped
    /// on the next evaluation.
    pub fn signal_action_complete(&mut self) -> Result<(), CommandError> {
        let phase = self.phase();
        if !phase.is_at_target() {
            return Err(CommandError::NotAtTarget { phase });
        }
        if let Some(state) = self.state.as_mut() {
            state.completion_signalled = true;
        }
        Ok(())
    }

    /// Start a maintenance action at the target.
    pub fn request_maintenance(&mut self, kind: Maintenance) -> Result<(), CommandError> {
        let phase = self.phase();
        if phase != RunPhase::AtTarget {
            return Err(CommandError::NotAtTarget { phase });
        }
        if let Some(state) = self.state.as_mut() {
            state.completion_signalled = false;
        }
        self.transition(kind.into(), None);
        Ok(())
    }

    /// Receive every future phase change.
    pub fn subscribe(&mut self) -> Receiver<PhaseTransition> {
        self.feed.subscribe()
    }

    // ── Tick ───────────────────────────────────────────────────────

    /// Advance the run by at most one phase.
    pub fn tick(&mut self, input: TickInput) -> TickOutcome {
        let from = self.phase();
        if !from.is_active() {
            return TickOutcome::Inactive;
        }
        if let Some(last) = self.state.as_ref().and_then(|s| s.last_evaluated) {
            let elapsed = input.now.millis_since(last);
            if elapsed < self.config.throttle_ms {
                self.metrics.throttled += 1;
                log::trace!("tick at {} throttled ({elapsed}ms since last)", input.now);
                return TickOutcome::Throttled;
            }
        }
        let Some(position) = input.position else {
            self.metrics.skipped += 1;
            log::trace!("tick at {} has no position; skipped", input.now);
            return TickOutcome::Skipped;
        };
        self.metrics.evaluations += 1;
        let to = self.evaluate(input.now, position, input.status_code);
        TickOutcome::Evaluated { from, to }
    }

    fn evaluate(&mut self, now: Timestamp, position: Tile, code: Option<i32>) -> RunPhase {
        self.inventory = self.source.inventory();
        self.recompute_shortfalls();

        let catalog = Arc::clone(&self.catalog);
        let radius = self.config.detection_radius;
        let threshold = self.config.teleport_threshold;
        let decoder = &self.config.decoder;
        let Some(state) = self.state.as_mut() else {
            return RunPhase::Idle;
        };
        let previous = state.last_position.replace(position);
        state.last_evaluated = Some(now);
        let phase = state.phase;
        let Some(location) = state.current_location().and_then(|id| catalog.get(id)) else {
            return phase;
        };

        let mut advanced = false;
        let next = match phase {
            RunPhase::GatheringResources | RunPhase::MovingToNext => {
                Some(if self.shortfalls.is_empty() {
                    RunPhase::ReadyToTransit
                } else {
                    RunPhase::GatheringResources
                })
            }
            RunPhase::ReadyToTransit => {
                let jumped = previous.is_some_and(|p| p.jumped_to(&position, threshold));
                if jumped || state.transit_notified {
                    state.transit_origin = if jumped {
                        previous
                    } else {
                        state.transit_origin.or(Some(position))
                    };
                    Some(RunPhase::Transiting)
                } else if location.is_near(&position, radius) {
                    Some(RunPhase::Navigating)
                } else {
                    None
                }
            }
            RunPhase::Transiting => match state.transit_origin {
                Some(origin) if !origin.jumped_to(&position, threshold) => None,
                _ => Some(RunPhase::Navigating),
            },
            RunPhase::Navigating => {
                if location.is_near(&position, radius) {
                    state.current_target_state =
                        decode(decoder, &mut self.metrics, code, location.category());
                    Some(RunPhase::AtTarget)
                } else {
                    None
                }
            }
            RunPhase::AtTarget => {
                let observed = decode(decoder, &mut self.metrics, code, location.category());
                state.current_target_state = observed;
                let action = RunPhase::action_for(observed);
                if action.is_none() {
                    // Nothing to do yet; a signal now cannot belong to a later action.
                    state.completion_signalled = false;
                }
                action
            }
            action if action.is_action() => {
                let observed = decode(decoder, &mut self.metrics, code, location.category());
                state.current_target_state = observed;
                let ctx = ActionContext {
                    phase: action,
                    location,
                    observed,
                    signalled: state.completion_signalled,
                };
                if self.config.oracle.is_complete(&ctx) {
                    log::debug!(
                        "{action} at '{}' complete ({} oracle, observed {observed})",
                        location.id(),
                        self.config.oracle.name()
                    );
                    state.visits.push(VisitRecord {
                        location: location.id().clone(),
                        action,
                        observed,
                        completed_at: now,
                    });
                    state.completion_signalled = false;
                    self.metrics.locations_completed += 1;
                    if state.has_next() {
                        state.current_index += 1;
                        state.reset_location_progress();
                        advanced = true;
                        Some(RunPhase::MovingToNext)
                    } else {
                        Some(RunPhase::RunComplete)
                    }
                } else if action.is_state_driven() {
                    RunPhase::action_for(observed).filter(|a| *a != action)
                } else {
                    None
                }
            }
            _ => None,
        };

        if advanced {
            self.refresh_needs();
        }
        if let Some(to) = next {
            self.transition(to, Some(now));
            if to == RunPhase::RunComplete {
                log::info!("run complete: {} locations visited", self.visits().len());
            }
        }
        self.phase()
    }

    // ── Internals ──────────────────────────────────────────────────

    fn preparation_phase(&self) -> RunPhase {
        if self.shortfalls.is_empty() {
            RunPhase::ReadyToTransit
        } else {
            RunPhase::GatheringResources
        }
    }

    /// Rebuild the need list for the current location.
    fn refresh_needs(&mut self) {
        let catalog = Arc::clone(&self.catalog);
        if let Some(state) = self.state.as_mut() {
            let needs = state
                .current_location()
                .and_then(|id| catalog.get(id))
                .map(|loc| {
                    let transit = state.current_transit().and_then(|t| loc.transit(t));
                    catalog.needs_for(loc, transit)
                })
                .unwrap_or_default();
            state.needs = needs;
        }
        self.recompute_shortfalls();
    }

    fn recompute_shortfalls(&mut self) {
        let needs = self
            .state
            .as_ref()
            .map(|s| s.needs.as_slice())
            .unwrap_or(&[]);
        let caps = HostCapabilities(self.source.as_ref());
        let resolver = Resolver::new(&self.inventory, &caps);
        self.shortfalls = resolver.shortfalls(needs);
    }

    fn transition(&mut self, to: RunPhase, at: Option<Timestamp>) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let from = state.phase;
        if from == to {
            return;
        }
        state.phase = to;
        if from == RunPhase::ReadyToTransit {
            state.transit_notified = false;
        }
        let location = state.current_location().cloned();
        self.publish(from, to, location, at);
    }

    fn publish(
        &mut self,
        from: RunPhase,
        to: RunPhase,
        location: Option<LocationId>,
        at: Option<Timestamp>,
    ) {
        match &location {
            Some(id) => log::debug!("{from} -> {to} at '{id}'"),
            None => log::debug!("{from} -> {to}"),
        }
        self.metrics.transitions += 1;
        let dropped = self.feed.publish(&PhaseTransition {
            from,
            to,
            location,
            at,
        });
        self.metrics.subscribers_dropped += dropped as u64;
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Current phase ([`RunPhase::Idle`] without a run).
    pub fn phase(&self) -> RunPhase {
        self.state.as_ref().map_or(RunPhase::Idle, |s| s.phase)
    }

    /// The run state, if a run exists.
    pub fn state(&self) -> Option<&RunState> {
        self.state.as_ref()
    }

    /// The current location.
    pub fn current_location(&self) -> Option<&TargetLocation> {
        self.state
            .as_ref()
            .and_then(RunState::current_location)
            .and_then(|id| self.catalog.get(id))
    }

    /// Last decoded state of the current target.
    pub fn current_target_state(&self) -> LifecycleState {
        self.state
            .as_ref()
            .map_or(LifecycleState::Unknown, |s| s.current_target_state)
    }

    /// Locations of the current run, in visiting order.
    pub fn enabled_locations(&self) -> &[LocationId] {
        self.state
            .as_ref()
            .map(|s| s.locations.as_slice())
            .unwrap_or(&[])
    }

    /// Unmet needs for the current location, as of the last evaluation
    /// or command.
    pub fn unsatisfied_requirements(&self) -> &[Shortfall] {
        &self.shortfalls
    }

    /// Transit chosen for the current location.
    pub fn selected_transit(&self) -> Option<&TransitOption> {
        let state = self.state.as_ref()?;
        let transit = state.current_transit()?;
        self.current_location()?.transit(transit)
    }

    /// Completed locations, in completion order.
    pub fn visits(&self) -> &[VisitRecord] {
        self.state
            .as_ref()
            .map(|s| s.visits.as_slice())
            .unwrap_or(&[])
    }

    /// Fault, when in [`RunPhase::Error`].
    pub fn fault(&self) -> Option<&RunFault> {
        self.state.as_ref().and_then(RunState::fault)
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Inventory captured at the last evaluation or command.
    pub fn inventory(&self) -> &InventorySnapshot {
        &self.inventory
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The validated configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl fmt::Debug for RunEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunEngine")
            .field("phase", &self.phase())
            .field("locations", &self.enabled_locations())
            .field("shortfalls", &self.shortfalls.len())
            .field("subscribers", &self.feed.subscriber_count())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
