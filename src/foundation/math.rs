use crate::foundation::core::Vec3;

/// Clamp to `[0, 1]`; NaN maps to 0 so a bad input can never leak into vertex data.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Rotate `v` by `angle` radians about the unit vector `axis` (Rodrigues' formula).
///
/// `v' = v cos t + (axis x v) sin t + axis (axis . v)(1 - cos t)`
#[inline]
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * axis.dot(v) * (1.0 - cos)
}

/// Per-coordinate linear blend `a + (b - a) * t`.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
