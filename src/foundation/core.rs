pub use glam::{EulerRot, Mat4, Quat, Vec3};
pub use kurbo::Point;

/// Discrete fold milestone.
///
/// Stages are ordered; `Finished` is terminal. Integer conversions clamp into `0..=3`, so an
/// out-of-range stage coming from a caller can never index past the fold table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "u8", from = "u8")]
pub enum Stage {
    /// Flat sheet, first diagonal crease driven by the user's drag.
    Crease,
    /// Triangle collapsing into the square base (diamond).
    SquareBase,
    /// Diamond raised into the finished crane silhouette.
    Shaping,
    /// Finished crane.
    Finished,
}

impl Stage {
    /// All stages in fold order.
    pub const ALL: [Self; 4] = [Self::Crease, Self::SquareBase, Self::Shaping, Self::Finished];

    /// Numeric stage index (`0..=3`).
    pub const fn index(self) -> u8 {
        match self {
            Self::Crease => 0,
            Self::SquareBase => 1,
            Self::Shaping => 2,
            Self::Finished => 3,
        }
    }

    /// Map any integer onto a stage, clamping below 0 to `Crease` and above 3 to `Finished`.
    pub fn from_index_clamped(index: i64) -> Self {
        match index {
            i64::MIN..=0 => Self::Crease,
            1 => Self::SquareBase,
            2 => Self::Shaping,
            _ => Self::Finished,
        }
    }

    /// The following stage; `Finished` stays `Finished`.
    pub fn next(self) -> Self {
        Self::from_index_clamped(i64::from(self.index()) + 1)
    }

    /// Whether this is the terminal stage.
    pub fn is_finished(self) -> bool {
        self == Self::Finished
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> Self {
        stage.index()
    }
}

impl From<u8> for Stage {
    fn from(index: u8) -> Self {
        Self::from_index_clamped(i64::from(index))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
