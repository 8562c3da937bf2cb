//! Orizuru is a procedural origami crane folding engine.
//!
//! A crane is a fixed 22-vertex, 20-triangle mesh. Its shape is a pure function of a discrete fold
//! [`Stage`] and a continuous progress in `[0, 1]`; a small state machine turns pointer drags and
//! render ticks into that pair, and a release flight moves the finished crane off screen.
//!
//! # Pipeline overview
//!
//! 1. **Input**: pointer/touch events and ticks -> [`FoldController`] -> `(stage, progress)`
//! 2. **Geometry**: `(stage, progress)` -> [`interpolate`] -> [`FoldedMesh`]
//! 3. **Flight**: release flag and ticks -> [`ReleaseFlight`] -> [`GroupTransform`]
//! 4. **Frame**: [`CraneInstance::frame`] runs all of the above for one tick
//!
//! Rendering, scene setup and persistence are left to the caller; the engine only produces vertex
//! buffers, normals and a model matrix.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: interpolation is pure, and the controller only changes on explicit messages.
//! - **Static data validated once**: pose tables are checked on first use.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod flight;
mod fold;
mod foundation;
mod geometry;
mod session;

pub use config::engine::{AutoRate, EngineConfig, FlightParams, FoldParams, Timings};
pub use config::instructions::Instructions;
pub use config::palette::{CraneColor, Palette};
pub use flight::release::{GroupTransform, ReleaseFlight};
pub use fold::controller::{AttachGuard, FoldController, FoldMsg};
pub use fold::input::{
    GesturePhase, InMemoryHost, InputChannel, InputHost, ListenerId, PointerEvent,
};
pub use fold::observer::{FoldEvent, FoldObserver, NullObserver, RecordingObserver};
pub use fold::state::{DragSession, FoldSnapshot, FoldState, Phase};
pub use foundation::core::{EulerRot, Mat4, Point, Quat, Stage, Vec3};
pub use foundation::error::{OrizuruError, OrizuruResult};
pub use foundation::math::{clamp01, lerp_vec3, rotate_about_axis};
pub use geometry::export::{to_obj_string, write_obj};
pub use geometry::interpolate::{
    CREASE_AXIS, CREASE_MOVING, FOLD_STEPS, FoldStep, blend, crease_fold, interpolate,
    interpolate_clamped,
};
pub use geometry::mesh::FoldedMesh;
pub use geometry::poses::{Pose, PoseLibrary, PoseName, Vertices, library};
pub use geometry::topology::{TRIANGLE_COUNT, TRIANGLES, VERTEX_COUNT, index_buffer, slot};
pub use session::instance::{CraneFrame, CraneInstance};
