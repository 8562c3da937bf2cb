use crate::foundation::core::Stage;

/// Controller phase, derived from the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Stage 0: progress follows the user's drag.
    Manual,
    /// Stages 1 and 2: progress advances on ticks.
    Auto,
    /// Stage 3: terminal.
    Done,
}

/// Fold state owned by [`crate::FoldController`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FoldState {
    /// Current fold stage.
    pub stage: Stage,
    /// Progress within the stage, always in `[0, 1]`.
    pub progress: f64,
    /// Set once the crane is finished; never cleared.
    pub complete: bool,
    /// Whether ticks currently advance progress.
    pub auto_playing: bool,
}

impl Default for FoldState {
    fn default() -> Self {
        Self {
            stage: Stage::Crease,
            progress: 0.0,
            complete: false,
            auto_playing: false,
        }
    }
}

impl FoldState {
    /// The finished, terminal state.
    pub fn finished() -> Self {
        Self {
            stage: Stage::Finished,
            progress: 1.0,
            complete: true,
            auto_playing: false,
        }
    }

    /// Phase implied by the stage.
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Crease => Phase::Manual,
            Stage::SquareBase | Stage::Shaping => Phase::Auto,
            Stage::Finished => Phase::Done,
        }
    }

    /// Whether no further transitions can happen short of force-finish.
    pub fn is_terminal(&self) -> bool {
        self.stage.is_finished() && self.complete
    }

    /// The externally reported triple.
    pub fn snapshot(&self) -> FoldSnapshot {
        FoldSnapshot {
            stage: self.stage,
            progress: self.progress,
            complete: self.complete,
        }
    }
}

/// `(stage, progress, complete)` as reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FoldSnapshot {
    /// Current fold stage.
    pub stage: Stage,
    /// Progress within the stage.
    pub progress: f64,
    /// Whether folding has finished.
    pub complete: bool,
}

/// Open manual drag. Only the horizontal anchor matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer x at pointer-down.
    pub anchor_x: f64,
}

impl DragSession {
    /// Progress for a pointer at `x`, clamped to `[0, 1]`.
    pub fn progress_at(&self, x: f64, sensitivity: f64) -> f64 {
        crate::foundation::math::clamp01((x - self.anchor_x) * sensitivity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fold/state.rs"]
mod tests;
