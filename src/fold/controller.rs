//! Fold progress state machine.
//!
//! ```text
//! Manual (stage 0) --drag >= threshold--> Auto (stage 1) --tick--> Auto (stage 2) --tick--> Done
//!        ^   |                                                                               ^
//!        +---+ pointer-up: progress snaps to 0                      force-finish (any state) -+
//! ```
//!
//! The controller consumes explicit messages (pointer events, ticks, the force-finish level) and
//! never touches a renderer; pair it with [`crate::interpolate`] to get vertices.

use std::ops::{Deref, DerefMut};

use crate::config::engine::FoldParams;
use crate::fold::input::{GesturePhase, InputHost, PointerEvent, Registration};
use crate::fold::observer::{FoldObserver, NullObserver};
use crate::fold::state::{DragSession, FoldSnapshot, FoldState, Phase};
use crate::foundation::core::Stage;

/// Message consumed by [`FoldController::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FoldMsg {
    /// Pointer or touch input from the host.
    Pointer(PointerEvent),
    /// One render tick lasting `dt_secs`.
    Tick {
        /// Tick duration in seconds.
        dt_secs: f64,
    },
    /// Current level of the external force-finish signal.
    ForceFinish(bool),
}

/// Owns [`FoldState`] and drives it from input and ticks.
#[derive(Debug)]
pub struct FoldController<O: FoldObserver = NullObserver> {
    params: FoldParams,
    state: FoldState,
    drag: Option<DragSession>,
    force_finish: bool,
    registration: Option<Registration>,
    reported: FoldSnapshot,
    observer: O,
}

impl FoldController<NullObserver> {
    /// Controller without an observer.
    pub fn new(params: FoldParams) -> Self {
        Self::with_observer(params, NullObserver)
    }
}

impl<O: FoldObserver> FoldController<O> {
    /// Controller reporting to `observer`.
    pub fn with_observer(params: FoldParams, observer: O) -> Self {
        let state = FoldState::default();
        Self {
            params,
            state,
            drag: None,
            force_finish: false,
            registration: None,
            reported: state.snapshot(),
            observer,
        }
    }

    /// Current state.
    pub fn state(&self) -> FoldState {
        self.state
    }

    /// Current `(stage, progress, complete)`.
    pub fn snapshot(&self) -> FoldSnapshot {
        self.state.snapshot()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Tuning in use.
    pub fn params(&self) -> &FoldParams {
        &self.params
    }

    /// Whether a manual drag is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether listeners are registered on a host.
    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Last level seen for the force-finish signal.
    pub fn force_finish_asserted(&self) -> bool {
        self.force_finish
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Register pointer and touch listeners on `host`.
    ///
    /// Returns `false` and registers nothing if already attached. Reports the current snapshot
    /// on success so an overlay can render its first instruction.
    #[tracing::instrument(skip_all)]
    pub fn attach<H: InputHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.registration.is_some() {
            tracing::debug!("already attached; ignoring");
            return false;
        }
        self.registration = Some(Registration::register(host));
        let snapshot = self.state.snapshot();
        self.reported = snapshot;
        self.observer.on_progress_change(snapshot);
        true
    }

    /// Remove every listener registered by [`Self::attach`] and stop consuming ticks.
    ///
    /// An open drag is discarded and its partial progress dropped. Returns the number of
    /// listeners removed; detaching while detached is a no-op returning 0.
    #[tracing::instrument(skip_all)]
    pub fn detach<H: InputHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let Some(registration) = self.registration.take() else {
            return 0;
        };
        if self.drag.take().is_some() && self.state.phase() == Phase::Manual {
            self.state.progress = 0.0;
        }
        let removed = registration.release(host);
        tracing::debug!(removed, "detached");
        self.report();
        removed
    }

    /// Attach for the lifetime of the returned guard; dropping it detaches.
    pub fn attach_scoped<'a, H: InputHost>(
        &'a mut self,
        host: &'a mut H,
    ) -> AttachGuard<'a, O, H> {
        let owns = self.attach(&mut *host);
        AttachGuard {
            controller: self,
            host,
            owns,
        }
    }

    /// Feed one pointer event.
    pub fn dispatch(&mut self, event: PointerEvent) {
        self.handle(FoldMsg::Pointer(event));
    }

    /// Advance one render tick.
    pub fn tick(&mut self, dt_secs: f64) {
        self.handle(FoldMsg::Tick { dt_secs });
    }

    /// Update the force-finish level. Asserting it finishes the crane immediately.
    pub fn set_force_finish(&mut self, asserted: bool) {
        self.handle(FoldMsg::ForceFinish(asserted));
    }

    /// Apply one message, then notify the observer of any state change.
    ///
    /// Pointer events and ticks are ignored while detached. The force-finish level is always
    /// recorded, and while asserted it wins over everything else, including the tick that
    /// would otherwise advance playback.
    pub fn handle(&mut self, msg: FoldMsg) {
        let completed = match msg {
            FoldMsg::ForceFinish(asserted) => {
                self.force_finish = asserted;
                if asserted {
                    self.apply_force_finish();
                }
                false
            }
            _ if self.registration.is_none() => {
                tracing::trace!(?msg, "ignored while detached");
                return;
            }
            FoldMsg::Pointer(event) => {
                self.on_pointer(event);
                false
            }
            FoldMsg::Tick { dt_secs } => self.on_tick(dt_secs),
        };

        self.report();
        if completed {
            self.observer.on_complete();
        }
    }

    fn on_pointer(&mut self, event: PointerEvent) {
        let listening = self
            .registration
            .as_ref()
            .is_some_and(|r| r.listens_to(event.channel));
        if !listening {
            return;
        }
        let x = event.position.x;
        match event.channel.gesture() {
            GesturePhase::Down => self.pointer_down(x),
            GesturePhase::Move => self.pointer_move(x),
            GesturePhase::Up => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, x: f64) {
        // Mouse and touch may both report the same press; keep the first anchor.
        if self.force_finish || self.state.phase() != Phase::Manual || self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession { anchor_x: x });
        tracing::debug!(anchor_x = x, "drag started");
        self.observer.on_drag_start();
    }

    fn pointer_move(&mut self, x: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        if self.state.phase() != Phase::Manual {
            self.drag = None;
            return;
        }

        let progress = drag.progress_at(x, self.params.drag_sensitivity);
        if progress >= self.params.drag_threshold {
            self.drag = None;
            self.state = FoldState {
                stage: Stage::SquareBase,
                progress: 0.0,
                complete: false,
                auto_playing: true,
            };
            tracing::debug!("crease closed; playback started");
        } else {
            self.state.progress = progress;
        }
    }

    fn pointer_up(&mut self) {
        self.drag = None;
        if self.state.phase() == Phase::Manual && self.state.progress < self.params.drag_threshold
        {
            if self.state.progress > 0.0 {
                tracing::debug!(progress = self.state.progress, "released early; snapping back");
            }
            self.state.progress = 0.0;
        }
    }

    /// Returns `true` on the tick that completes the crane.
    fn on_tick(&mut self, dt_secs: f64) -> bool {
        if self.force_finish {
            self.apply_force_finish();
            return false;
        }
        if !self.state.auto_playing || self.state.complete {
            return false;
        }

        let next = self.state.progress + self.params.auto_rate.step(dt_secs);
        if next < 1.0 {
            self.state.progress = next;
            return false;
        }

        match self.state.stage {
            Stage::Shaping => {
                self.state = FoldState::finished();
                tracing::debug!("fold complete");
                true
            }
            stage => {
                self.state.stage = stage.next();
                self.state.progress = 0.0;
                tracing::debug!(stage = %self.state.stage, "stage advanced");
                false
            }
        }
    }

    fn apply_force_finish(&mut self) {
        self.drag = None;
        if self.state != FoldState::finished() {
            tracing::debug!(from_stage = %self.state.stage, "force-finish");
            self.state = FoldState::finished();
        }
    }

    fn report(&mut self) {
        let snapshot = self.state.snapshot();
        if snapshot != self.reported {
            self.reported = snapshot;
            self.observer.on_progress_change(snapshot);
        }
    }
}

/// Keeps a controller attached to a host; detaches on drop.
pub struct AttachGuard<'a, O: FoldObserver, H: InputHost> {
    controller: &'a mut FoldController<O>,
    host: &'a mut H,
    owns: bool,
}

impl<O: FoldObserver, H: InputHost> AttachGuard<'_, O, H> {
    /// Borrow the host.
    pub fn host(&self) -> &H {
        &*self.host
    }
}

impl<O: FoldObserver, H: InputHost> Deref for AttachGuard<'_, O, H> {
    type Target = FoldController<O>;

    fn deref(&self) -> &Self::Target {
        &*self.controller
    }
}

impl<O: FoldObserver, H: InputHost> DerefMut for AttachGuard<'_, O, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.controller
    }
}

impl<O: FoldObserver, H: InputHost> Drop for AttachGuard<'_, O, H> {
    fn drop(&mut self) {
        if self.owns {
            self.controller.detach(&mut *self.host);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fold/controller.rs"]
mod tests;
