//! Sky rotation state: a cumulative angle around a fixed tilted axis.

use glam::{Mat3, Quat, Vec3};

/// Default axis tilt away from +Z, in degrees.
pub const DEFAULT_TILT_DEGREES: f32 = -30.0;

/// Default angular speed in radians per second.
pub const DEFAULT_SPEED: f32 = 0.05;

/// Phase origin of the cycle; chosen so a fresh sky starts in daylight.
const INITIAL_ANGLE: f32 = -1.0;

/// Continuously rotating sky state.
///
/// Holds a single cumulative `angle` (radians, unbounded; only its sine
/// and cosine are ever used) around an axis derived once from the tilt.
/// The rotation matrix is recomputed fresh from the cumulative angle on
/// every call, so there is no incremental accumulation to drift.
#[derive(Clone, Debug)]
pub struct SkyRotation {
    axis: Vec3,
    speed: f32,
    angle: f32,
}

impl SkyRotation {
    /// Create a rotation state with the given axis tilt (degrees) and
    /// angular speed (radians per second).
    ///
    /// The axis is `(0, 0, 1)` rotated about `(0, 1, 0)` by the tilt,
    /// computed once; it stays fixed for the lifetime of the sky.
    /// Both inputs must be finite; a NaN speed would poison the
    /// cumulative angle on the first [`SkyRotation::advance`].
    pub fn new(tilt_degrees: f32, speed: f32) -> Self {
        debug_assert!(
            tilt_degrees.is_finite() && speed.is_finite(),
            "tilt and speed must be finite"
        );
        let axis = Quat::from_axis_angle(Vec3::Y, tilt_degrees.to_radians()) * Vec3::Z;
        Self {
            axis,
            speed,
            angle: INITIAL_ANGLE,
        }
    }

    /// Rotation axis (unit length).
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Cumulative rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance the rotation by `elapsed_seconds`.
    ///
    /// Negative or non-finite elapsed time is treated as zero elapsed
    /// time so the frame path never feeds NaN into the matrix.
    pub fn advance(&mut self, elapsed_seconds: f32) {
        if !elapsed_seconds.is_finite() || elapsed_seconds < 0.0 {
            log::warn!("ignoring invalid frame time {elapsed_seconds}");
            return;
        }
        self.angle += self.speed * elapsed_seconds;
    }

    /// The rotation matrix for the current angle about the fixed axis.
    pub fn matrix(&self) -> Mat3 {
        Mat3::from_axis_angle(self.axis, self.angle)
    }

    /// Current light direction: the up vector carried through the
    /// rotation, with x and z negated to match the shader's mirrored
    /// coordinate convention.
    pub fn light_direction(&self) -> Vec3 {
        let rotated = self.matrix() * Vec3::Y;
        Vec3::new(-rotated.x, rotated.y, -rotated.z)
    }
}

impl Default for SkyRotation {
    fn default() -> Self {
        Self::new(DEFAULT_TILT_DEGREES, DEFAULT_SPEED)
    }
}
