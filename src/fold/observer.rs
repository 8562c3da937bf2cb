use crate::fold::state::FoldSnapshot;

/// Collaborator notified by the fold controller.
///
/// All callbacks are fire-and-forget: there is no return value and nothing is retried.
pub trait FoldObserver {
    /// Called once per handled message whose `(stage, progress, complete)` differs from the last
    /// reported value, and once on attach.
    fn on_progress_change(&mut self, _snapshot: FoldSnapshot) {}

    /// Called exactly once, when autonomous playback finishes the crane.
    fn on_complete(&mut self) {}

    /// Called when a manual drag begins.
    fn on_drag_start(&mut self) {}
}

impl<T: FoldObserver + ?Sized> FoldObserver for &mut T {
    fn on_progress_change(&mut self, snapshot: FoldSnapshot) {
        (**self).on_progress_change(snapshot);
    }

    fn on_complete(&mut self) {
        (**self).on_complete();
    }

    fn on_drag_start(&mut self) {
        (**self).on_drag_start();
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl FoldObserver for NullObserver {}

/// A recorded observer callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FoldEvent {
    /// `on_progress_change`.
    Progress(FoldSnapshot),
    /// `on_complete`.
    Complete,
    /// `on_drag_start`.
    DragStart,
}

/// In-memory observer for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<FoldEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow recorded callbacks in call order.
    pub fn events(&self) -> &[FoldEvent] {
        &self.events
    }

    /// Drain recorded callbacks.
    pub fn take(&mut self) -> Vec<FoldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of `on_complete` calls seen.
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FoldEvent::Complete))
            .count()
    }

    /// Most recent progress snapshot, if any.
    pub fn last_snapshot(&self) -> Option<FoldSnapshot> {
        self.events.iter().rev().find_map(|e| match e {
            FoldEvent::Progress(s) => Some(*s),
            _ => None,
        })
    }
}

impl FoldObserver for RecordingObserver {
    fn on_progress_change(&mut self, snapshot: FoldSnapshot) {
        self.events.push(FoldEvent::Progress(snapshot));
    }

    fn on_complete(&mut self) {
        self.events.push(FoldEvent::Complete);
    }

    fn on_drag_start(&mut self) {
        self.events.push(FoldEvent::DragStart);
    }
}
