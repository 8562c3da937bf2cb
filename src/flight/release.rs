use std::time::Duration;

use crate::config::engine::FlightParams;
use crate::foundation::core::{EulerRot, Mat4, Quat, Vec3};

/// Rigid transform of the whole crane group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GroupTransform {
    /// Translation.
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl GroupTransform {
    /// Transform of a crane that is still on the folding stage.
    pub fn rest(params: &FlightParams) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::new(0.0, params.rest_yaw, 0.0),
            scale: params.rest_scale,
        }
    }

    /// Column-major model matrix: translate * rotate * scale.
    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, self.position)
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Time-driven departure of the folded crane.
///
/// Independent of fold state: it only reacts to the release flag and tick durations. There is no
/// terminal state; the owner stops rendering once [`ReleaseFlight::handoff_due`] says so.
#[derive(Clone, Debug)]
pub struct ReleaseFlight {
    params: FlightParams,
    active: bool,
    elapsed: f64,
    transform: GroupTransform,
}

impl ReleaseFlight {
    /// Inactive flight at the rest transform.
    pub fn new(params: FlightParams) -> Self {
        Self {
            transform: GroupTransform::rest(&params),
            params,
            active: false,
            elapsed: 0.0,
        }
    }

    /// Start the flight. Idempotent.
    pub fn release(&mut self) {
        self.set_releasing(true);
    }

    /// Follow the external release flag. Clearing it freezes the group where it is.
    pub fn set_releasing(&mut self, releasing: bool) {
        if releasing && !self.active {
            tracing::debug!("release flight started");
        }
        self.active = releasing;
    }

    /// Whether ticks currently move the group.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Return to the rest transform and clear the clock.
    pub fn reset(&mut self) {
        self.active = false;
        self.elapsed = 0.0;
        self.transform = GroupTransform::rest(&self.params);
    }

    /// Advance by `dt_secs`; a no-op while inactive or for non-positive `dt`.
    pub fn tick(&mut self, dt_secs: f64) {
        if !self.active || !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        self.elapsed += dt_secs;

        let dt = dt_secs as f32;
        let p = &self.params;
        let t = &mut self.transform;
        t.position += Vec3::from_array(p.velocity) * dt;
        t.rotation += Vec3::from_array(p.spin) * dt;
        if t.scale < p.scale_cap {
            t.scale = (t.scale + p.scale_rate * dt).min(p.scale_cap);
        }
    }

    /// Current group transform.
    pub fn transform(&self) -> GroupTransform {
        self.transform
    }

    /// Time spent flying, saturating at `Duration::MAX`.
    pub fn elapsed(&self) -> Duration {
        Duration::try_from_secs_f64(self.elapsed).unwrap_or(Duration::MAX)
    }

    /// Whether the flight has run for at least `delay`.
    pub fn handoff_due(&self, delay: Duration) -> bool {
        self.elapsed >= delay.as_secs_f64()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flight/release.rs"]
mod tests;
