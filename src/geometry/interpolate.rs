//! Stage/progress to vertex positions.
//!
//! The first crease is a hinge: linearly blending the flat sheet into the triangle would drag
//! the tail corner straight through the centre pivot, so stage 0 rotates the moving half of the
//! sheet about the crease diagonal instead. Every later stage is a plain per-coordinate blend
//! between two named poses.

use std::f32::consts::{FRAC_1_SQRT_2, PI};

use crate::foundation::core::{Stage, Vec3};
use crate::foundation::math::{clamp01, lerp_vec3, rotate_about_axis};
use crate::geometry::mesh::FoldedMesh;
use crate::geometry::poses::{PoseName, Vertices, library};
use crate::geometry::topology::slot;

/// Unit crease axis, the diagonal through the right and left wing tips.
pub const CREASE_AXIS: Vec3 = Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0);

/// Slots on the tail side of the crease; they swing over during stage 0.
pub const CREASE_MOVING: [usize; 8] = [
    slot::TAIL_TIP,
    slot::WAIST_RB,
    slot::WAIST_LB,
    slot::TAIL_KNEE_SPINE,
    slot::TAIL_KNEE_L,
    slot::TAIL_KNEE_R,
    slot::WING_R_ROOT_B,
    slot::WING_L_ROOT_B,
];

/// How one stage turns progress into positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldStep {
    /// Hinge the tail half of `Flat` about [`CREASE_AXIS`] by `progress * PI`.
    Crease,
    /// Linear blend from one pose to another.
    Blend {
        /// Pose at progress 0.
        from: PoseName,
        /// Pose at progress 1.
        to: PoseName,
    },
    /// A fixed pose regardless of progress.
    Hold(PoseName),
}

/// Fold steps indexed by [`Stage::index`].
pub const FOLD_STEPS: [FoldStep; 4] = [
    FoldStep::Crease,
    FoldStep::Blend {
        from: PoseName::Triangle,
        to: PoseName::Diamond,
    },
    FoldStep::Blend {
        from: PoseName::Diamond,
        to: PoseName::Crane,
    },
    FoldStep::Hold(PoseName::Crane),
];

impl FoldStep {
    /// The step used for `stage`.
    pub fn for_stage(stage: Stage) -> Self {
        FOLD_STEPS[usize::from(stage.index())]
    }

    /// Positions for this step at `progress` (expected in `[0, 1]`, not re-clamped).
    pub fn vertices(self, progress: f64) -> Vertices {
        match self {
            Self::Crease => crease_fold(progress),
            Self::Blend { from, to } => blend(
                library().get(from).vertices(),
                library().get(to).vertices(),
                progress,
            ),
            Self::Hold(pose) => *library().get(pose).vertices(),
        }
    }
}

/// Stage 0: rotate the moving slots of `Flat` about the crease axis; copy the rest.
pub fn crease_fold(progress: f64) -> Vertices {
    let angle = progress as f32 * PI;
    let mut out = *library().get(PoseName::Flat).vertices();
    for i in CREASE_MOVING {
        out[i] = rotate_about_axis(out[i], CREASE_AXIS, angle);
    }
    out
}

/// Per-coordinate blend `from + (to - from) * progress`.
///
/// At `progress >= 1` the target is returned verbatim so the end of a stage matches the next
/// pose bit for bit.
pub fn blend(from: &Vertices, to: &Vertices, progress: f64) -> Vertices {
    if progress >= 1.0 {
        return *to;
    }
    let t = progress as f32;
    std::array::from_fn(|i| lerp_vec3(from[i], to[i], t))
}

/// Pose the crane for `(stage, progress)` and recompute its normals.
///
/// The caller owns clamping; see [`interpolate_clamped`] for untrusted input.
#[tracing::instrument(level = "trace")]
pub fn interpolate(stage: Stage, progress: f64) -> FoldedMesh {
    FoldedMesh::from_positions(FoldStep::for_stage(stage).vertices(progress))
}

/// [`interpolate`] for raw external inputs: clamps the stage into `0..=3` and progress into
/// `[0, 1]` (NaN becomes 0).
pub fn interpolate_clamped(stage: i64, progress: f64) -> FoldedMesh {
    interpolate(Stage::from_index_clamped(stage), clamp01(progress))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/interpolate.rs"]
mod tests;
