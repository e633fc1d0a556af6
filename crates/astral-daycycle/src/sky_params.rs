//! Per-frame sky lighting parameters derived from the light direction.

use glam::Vec3;

/// Scalar visibility/intensity outputs recomputed every frame.
///
/// All values are pure functions of the current light direction. The
/// transition constants encode the intended day/night curve, not any
/// physical model; they are reproduced exactly for visual parity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyParameters {
    /// Sun disk visibility in `[0, 1]`.
    pub sun_visibility: f32,
    /// Progress through the twilight color ramp in `[0, 1]`.
    pub twilight_time: f32,
    /// Strength of the twilight band in `[0, 1]`; peaks at the horizon.
    pub twilight_visibility: f32,
    /// Specular highlight visibility in `[0, 1]`.
    pub specular_visibility: f32,
    /// Uniform light level in `[0, 1]`, applied to all three color
    /// channels; this sky has no color temperature shift.
    pub light_intensity: f32,
}

impl SkyParameters {
    /// Derive the parameter bundle from the current light direction.
    ///
    /// `intensity` is the cosine of the light's angle from zenith,
    /// so `1` is noon, `0` the horizon, `-1` midnight.
    pub fn derive(light_direction: Vec3) -> Self {
        let intensity = light_direction.dot(Vec3::Y);

        let sun_visibility = ((intensity + 0.1) * 2.0).clamp(0.0, 1.0);
        let twilight_time = ((intensity + 0.1) * 3.0).clamp(0.0, 1.0);
        let twilight_visibility = 1.0 - (intensity * 3.0).abs().min(1.0);
        let specular_visibility = sun_visibility.sqrt();
        let light_intensity = (sun_visibility + 0.333).min(1.0);

        Self {
            sun_visibility,
            twilight_time,
            twilight_visibility,
            specular_visibility,
            light_intensity,
        }
    }
}
