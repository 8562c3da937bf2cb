use crate::config::engine::{EngineConfig, Timings};
use crate::flight::release::{GroupTransform, ReleaseFlight};
use crate::fold::controller::FoldController;
use crate::fold::input::InputHost;
use crate::fold::observer::{FoldObserver, NullObserver};
use crate::fold::state::FoldSnapshot;
use crate::foundation::core::Mat4;
use crate::foundation::error::{OrizuruError, OrizuruResult};
use crate::geometry::interpolate::interpolate;
use crate::geometry::mesh::FoldedMesh;

/// Everything a renderer needs for one crane on one tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CraneFrame {
    /// Fold state the mesh was built from.
    pub snapshot: FoldSnapshot,
    /// Folded vertex positions and normals.
    pub mesh: FoldedMesh,
    /// Group transform.
    pub transform: GroupTransform,
    /// `transform` as a model matrix.
    pub matrix: Mat4,
    /// Colour string, passed through untouched.
    pub color: String,
}

/// One crane: fold controller, release flight and colour behind a single tick.
#[derive(Debug)]
pub struct CraneInstance<O: FoldObserver = NullObserver> {
    controller: FoldController<O>,
    flight: ReleaseFlight,
    timings: Timings,
    color: String,
}

impl CraneInstance<NullObserver> {
    /// Instance without an observer.
    pub fn new(config: &EngineConfig) -> OrizuruResult<Self> {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: FoldObserver> CraneInstance<O> {
    /// Validate `config` and build an instance in the palette's default colour.
    pub fn with_observer(config: &EngineConfig, observer: O) -> OrizuruResult<Self> {
        config.validate()?;
        let color = config
            .palette
            .default_color()
            .map(|c| c.color.clone())
            .ok_or_else(|| OrizuruError::config("palette must have at least one colour"))?;
        Ok(Self {
            controller: FoldController::with_observer(config.fold, observer),
            flight: ReleaseFlight::new(config.flight),
            timings: config.timings,
            color,
        })
    }

    /// Borrow the fold controller.
    pub fn controller(&self) -> &FoldController<O> {
        &self.controller
    }

    /// Mutably borrow the fold controller.
    pub fn controller_mut(&mut self) -> &mut FoldController<O> {
        &mut self.controller
    }

    /// Borrow the release flight.
    pub fn flight(&self) -> &ReleaseFlight {
        &self.flight
    }

    /// Register input listeners on `host`.
    pub fn attach<H: InputHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.controller.attach(host)
    }

    /// Remove input listeners from `host`.
    pub fn detach<H: InputHost + ?Sized>(&mut self, host: &mut H) -> usize {
        self.controller.detach(host)
    }

    /// Follow the external release flag.
    pub fn set_releasing(&mut self, releasing: bool) {
        self.flight.set_releasing(releasing);
    }

    /// Follow the external force-finish flag.
    pub fn set_force_finish(&mut self, asserted: bool) {
        self.controller.set_force_finish(asserted);
    }

    /// Current colour string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Replace the colour string.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Whether the release flight has run long enough to hand the crane to the gallery.
    pub fn handoff_due(&self) -> bool {
        self.flight.is_active() && self.flight.handoff_due(self.timings.release_delay())
    }

    /// Whether the gallery's settle lock has also run out after the hand-off.
    pub fn settle_due(&self) -> bool {
        let total = self
            .timings
            .release_delay()
            .saturating_add(self.timings.settle());
        self.flight.is_active() && self.flight.handoff_due(total)
    }

    /// Tick the controller and the flight, then build the frame.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn frame(&mut self, dt_secs: f64) -> CraneFrame {
        self.controller.tick(dt_secs);
        self.flight.tick(dt_secs);

        let snapshot = self.controller.snapshot();
        let transform = self.flight.transform();
        CraneFrame {
            snapshot,
            mesh: interpolate(snapshot.stage, snapshot.progress),
            transform,
            matrix: transform.to_matrix(),
            color: self.color.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/instance.rs"]
mod tests;
