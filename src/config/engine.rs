use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::config::instructions::Instructions;
use crate::config::palette::Palette;
use crate::foundation::error::{OrizuruError, OrizuruResult};

/// Engine configuration.
///
/// JSON-facing and fully defaulted: an empty object `{}` yields the stock crane. Unknown keys are
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Gesture and playback tuning.
    pub fold: FoldParams,
    /// Release flight tuning.
    pub flight: FlightParams,
    /// Hand-off timings used by the owning scene.
    pub timings: Timings,
    /// Overlay text per fold stage.
    pub instructions: Instructions,
    /// Crane colours offered to the user.
    pub palette: Palette,
}

impl EngineConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OrizuruResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| OrizuruError::config(format!("parse engine config JSON: {e}")))
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> OrizuruResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| OrizuruError::config(format!("parse engine config JSON: {e}")))
    }

    /// Parse and validate a configuration file.
    #[tracing::instrument(skip_all)]
    pub fn from_path(path: impl AsRef<Path>) -> OrizuruResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            OrizuruError::config(format!("open engine config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(cfg)
    }

    /// Check every section.
    pub fn validate(&self) -> OrizuruResult<()> {
        self.fold.validate()?;
        self.flight.validate()?;
        self.instructions.validate()?;
        self.palette.validate()
    }

    /// Pretty JSON rendering of the effective configuration.
    pub fn to_json_pretty(&self) -> OrizuruResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OrizuruError::serde(format!("encode engine config: {e}")))
    }
}

/// Rate at which autonomous playback advances progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AutoRate {
    /// Fixed increment per tick; total duration depends on the host's tick frequency.
    PerTick(f64),
    /// Increment per second of tick `dt`; duration is independent of tick frequency.
    PerSecond(f64),
}

impl AutoRate {
    /// Progress gained by one tick lasting `dt_secs`.
    pub fn step(self, dt_secs: f64) -> f64 {
        match self {
            Self::PerTick(v) => v,
            Self::PerSecond(v) => v * dt_secs.max(0.0),
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::PerTick(v) | Self::PerSecond(v) => v,
        }
    }
}

impl Default for AutoRate {
    fn default() -> Self {
        Self::PerTick(0.015)
    }
}

/// Gesture and playback tuning for the fold controller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldParams {
    /// Progress per pixel of horizontal drag.
    pub drag_sensitivity: f64,
    /// Progress at which the manual crease completes and playback starts.
    pub drag_threshold: f64,
    /// Autonomous playback rate for stages 1 and 2.
    pub auto_rate: AutoRate,
}

impl Default for FoldParams {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.005,
            drag_threshold: 0.99,
            auto_rate: AutoRate::default(),
        }
    }
}

impl FoldParams {
    /// Reject rates that would stall or reverse the fold.
    pub fn validate(&self) -> OrizuruResult<()> {
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(OrizuruError::config(
                "fold.drag_sensitivity must be finite and > 0",
            ));
        }
        if !(self.drag_threshold > 0.0 && self.drag_threshold <= 1.0) {
            return Err(OrizuruError::config("fold.drag_threshold must be in (0, 1]"));
        }
        let rate = self.auto_rate.value();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(OrizuruError::config(
                "fold.auto_rate value must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Release flight tuning. Velocities are per second.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightParams {
    /// Uniform scale of the group while folding.
    pub rest_scale: f32,
    /// Rotation of the group about Y while folding (radians).
    pub rest_yaw: f32,
    /// Translation rate `[x, y, z]` while releasing.
    pub velocity: [f32; 3],
    /// Euler rotation rate `[x, y, z]` (radians) while releasing.
    pub spin: [f32; 3],
    /// Scale growth rate while releasing.
    pub scale_rate: f32,
    /// Scale never exceeds this while releasing.
    pub scale_cap: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            rest_scale: 0.85,
            rest_yaw: std::f32::consts::FRAC_PI_4,
            velocity: [0.0, 1.5, -4.0],
            spin: [-0.5, 0.0, 0.2],
            scale_rate: 0.5,
            scale_cap: 1.25,
        }
    }
}

impl FlightParams {
    /// Reject non-finite rates and a cap below the rest scale.
    pub fn validate(&self) -> OrizuruResult<()> {
        let all = [self.rest_scale, self.rest_yaw, self.scale_rate, self.scale_cap]
            .into_iter()
            .chain(self.velocity)
            .chain(self.spin);
        for v in all {
            if !v.is_finite() {
                return Err(OrizuruError::config("flight values must be finite"));
            }
        }
        if self.rest_scale <= 0.0 {
            return Err(OrizuruError::config("flight.rest_scale must be > 0"));
        }
        if self.scale_rate < 0.0 {
            return Err(OrizuruError::config("flight.scale_rate must be >= 0"));
        }
        if self.scale_cap < self.rest_scale {
            return Err(OrizuruError::config(
                "flight.scale_cap must be >= flight.rest_scale",
            ));
        }
        Ok(())
    }
}

/// Scene hand-off timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timings {
    /// How long the release flight plays before the gallery takes over.
    pub release_delay_ms: u64,
    /// How long gallery controls stay locked after the hand-off.
    pub settle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            release_delay_ms: 2500,
            settle_ms: 1800,
        }
    }
}

impl Timings {
    /// Release delay as a `Duration`.
    pub fn release_delay(&self) -> Duration {
        Duration::from_millis(self.release_delay_ms)
    }

    /// Settle time as a `Duration`.
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/engine.rs"]
mod tests;
