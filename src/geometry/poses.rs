//! Named target poses.
//!
//! Each pose is one recognizable silhouette over the shared topology. The sheet spans
//! `[-1, 1]^2` on the `z = 0` plane when flat; the finished crane is roughly centred on the
//! origin with the wings along X.

use std::sync::LazyLock;

use crate::foundation::core::Vec3;
use crate::foundation::error::{OrizuruError, OrizuruResult};
use crate::geometry::topology::VERTEX_COUNT;

/// One position per topology slot.
pub type Vertices = [Vec3; VERTEX_COUNT];

/// Pose identifiers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PoseName {
    /// Unfolded square showing the diagonal crease pattern.
    Flat,
    /// First crease closed: tail corner folded onto the beak corner.
    Triangle,
    /// Square base, seen as a diamond.
    Diamond,
    /// Bird base: neck, tail and wings separated but not raised.
    BirdBase,
    /// Finished crane.
    Crane,
}

impl PoseName {
    /// All poses in fold order.
    pub const ALL: [Self; 5] = [
        Self::Flat,
        Self::Triangle,
        Self::Diamond,
        Self::BirdBase,
        Self::Crane,
    ];

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::BirdBase => "bird_base",
            Self::Crane => "crane",
        }
    }
}

impl std::fmt::Display for PoseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PoseName {
    type Err = OrizuruError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == norm || (norm == "birdbase" && *p == Self::BirdBase))
            .ok_or_else(|| OrizuruError::validation(format!("unknown pose '{s}'")))
    }
}

/// An immutable named vertex set.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    name: PoseName,
    vertices: Vertices,
}

impl Pose {
    /// Pose identifier.
    pub fn name(&self) -> PoseName {
        self.name
    }

    /// Vertex positions, one per topology slot.
    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    fn validate(&self) -> OrizuruResult<()> {
        for (slot, v) in self.vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(OrizuruError::geometry(format!(
                    "pose '{}' slot {slot} is not finite: {v}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// The five built-in poses.
#[derive(Debug)]
pub struct PoseLibrary {
    poses: [Pose; 5],
}

static LIBRARY: LazyLock<PoseLibrary> = LazyLock::new(|| {
    let lib = PoseLibrary::builtin();
    if let Err(e) = lib.validate() {
        panic!("built-in pose library is malformed: {e}");
    }
    tracing::debug!(poses = lib.poses.len(), "pose library validated");
    lib
});

/// Process-wide pose library, validated on first access.
pub fn library() -> &'static PoseLibrary {
    &LIBRARY
}

impl PoseLibrary {
    fn builtin() -> Self {
        let pose = |name, vertices| Pose { name, vertices };
        Self {
            poses: [
                pose(PoseName::Flat, FLAT),
                pose(PoseName::Triangle, TRIANGLE),
                pose(PoseName::Diamond, DIAMOND),
                pose(PoseName::BirdBase, BIRD_BASE),
                pose(PoseName::Crane, CRANE),
            ],
        }
    }

    /// Check every pose for non-finite coordinates and that pose names match their slots.
    pub fn validate(&self) -> OrizuruResult<()> {
        for (expected, pose) in PoseName::ALL.into_iter().zip(&self.poses) {
            if pose.name != expected {
                return Err(OrizuruError::geometry(format!(
                    "pose library slot for '{expected}' holds '{}'",
                    pose.name
                )));
            }
            pose.validate()?;
        }
        Ok(())
    }

    /// Look up a pose.
    pub fn get(&self, name: PoseName) -> &Pose {
        &self.poses[name as usize]
    }

    /// Iterate poses in fold order.
    pub fn iter(&self) -> impl Iterator<Item = &Pose> {
        self.poses.iter()
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

// Flat crease pattern. Corners: 1 top-right, 2 bottom-left, 3 top-left, 4 bottom-right.
const FLAT: Vertices = [
    v(0.0, 0.0, 0.0),
    v(1.0, 1.0, 0.0),
    v(-1.0, -1.0, 0.0),
    v(-1.0, 1.0, 0.0),
    v(1.0, -1.0, 0.0),
    // waist: edge midpoints
    v(0.0, 1.0, 0.0),
    v(-1.0, 0.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(1.0, 0.0, 0.0),
    // tail knees, top-left quadrant
    v(-0.5, 0.5, 0.0),
    v(-1.0, 0.5, 0.0),
    v(-0.5, 1.0, 0.0),
    // neck knees, bottom-right quadrant
    v(0.5, -0.5, 0.0),
    v(0.5, -1.0, 0.0),
    v(1.0, -0.5, 0.0),
    // beak bends
    v(0.75, -0.75, 0.0),
    v(0.75, -1.0, 0.0),
    v(1.0, -0.75, 0.0),
    // wing roots
    v(1.0, 0.0, 0.0),
    v(0.0, 1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(-1.0, 0.0, 0.0),
];

// Tail corner folded across y = x onto the beak corner. Folded layers sit slightly above the
// sheet to avoid z-fighting.
const TRIANGLE: Vertices = [
    v(0.0, 0.0, 0.0),
    v(1.0, 1.0, 0.0),
    v(-1.0, -1.0, 0.0),
    v(1.0, -1.0, 0.02),
    v(1.0, -1.0, 0.0),
    v(1.0, 0.0, 0.01),
    v(0.0, -1.0, 0.01),
    v(0.0, -1.0, 0.0),
    v(1.0, 0.0, 0.0),
    v(0.5, -0.5, 0.02),
    v(0.5, -0.5, 0.02),
    v(0.5, -0.5, 0.02),
    v(0.5, -0.5, 0.0),
    v(0.5, -0.5, 0.0),
    v(0.5, -0.5, 0.0),
    v(0.75, -0.75, 0.0),
    v(0.75, -0.75, 0.0),
    v(0.75, -0.75, 0.0),
    v(1.0, 0.0, 0.0),
    v(1.0, 0.0, 0.01),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.01),
];

// Square base centred on the origin; internal slots collapse to the centre.
const DIAMOND: Vertices = [
    v(0.0, 0.71, 0.0),
    v(0.0, -0.71, 0.0),
    v(0.0, -0.71, 0.0),
    v(0.0, -0.71, 0.0),
    v(0.0, -0.71, 0.0),
    v(0.71, 0.0, 0.0),
    v(-0.71, 0.0, 0.0),
    v(-0.71, 0.0, 0.0),
    v(0.71, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.0, 0.0, 0.0),
    v(0.35, 0.0, 0.0),
    v(0.35, 0.0, 0.0),
    v(-0.35, 0.0, 0.0),
    v(-0.35, 0.0, 0.0),
];

const BIRD_BASE: Vertices = [
    v(0.0, 0.8, 0.0),
    v(0.8, -0.2, 0.0),
    v(-0.8, -0.2, 0.0),
    v(0.0, -2.0, -0.2),
    v(0.0, -2.0, 0.2),
    v(0.0, -0.5, 0.0),
    v(0.0, -0.5, 0.0),
    v(0.0, -0.5, 0.0),
    v(0.0, -0.5, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.0, 0.0),
    v(0.0, -1.3, 0.0),
    v(0.0, -1.3, 0.0),
    v(0.0, -1.3, 0.0),
    v(0.0, -0.2, 0.0),
    v(0.0, -0.2, 0.0),
    v(0.0, -0.2, 0.0),
    v(0.0, -0.2, 0.0),
];

const CRANE: Vertices = [
    v(0.0, 0.0, 0.0),
    v(1.8, 0.5, 0.0),
    v(-1.8, 0.5, 0.0),
    v(0.0, 1.1, 1.0),
    v(0.0, 0.0, -0.8),
    v(0.35, -0.6, 0.35),
    v(-0.35, -0.6, 0.35),
    v(-0.35, -0.6, -0.35),
    v(0.35, -0.6, -0.35),
    // tail, neck, beak
    v(0.0, 0.6, 0.5),
    v(-0.08, 0.7, 0.6),
    v(0.08, 0.7, 0.6),
    v(0.0, 0.8, -0.5),
    v(-0.08, 0.9, -0.6),
    v(0.08, 0.9, -0.6),
    v(0.0, 0.4, -0.7),
    v(-0.06, 0.45, -0.8),
    v(0.06, 0.45, -0.8),
    // wing roots sit just outside the waist
    v(0.36, -0.59, -0.35),
    v(0.36, -0.59, 0.35),
    v(-0.36, -0.59, -0.35),
    v(-0.36, -0.59, 0.35),
];

#[cfg(test)]
#[path = "../../tests/unit/geometry/poses.rs"]
mod tests;
