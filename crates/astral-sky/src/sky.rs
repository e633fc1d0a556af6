//! The sky instance: owns the star texture and rotation state, and
//! produces one immutable frame of lighting values per update.

use glam::{Mat3, Vec3};

use astral_daycycle::{SkyParameters, SkyRotation};
use astral_starfield::StarMap;

use crate::config::{ConfigError, SkyConfig};
use crate::uniforms::SkyUniforms;

/// A procedural sky: a baked star texture plus a continuously rotating
/// light direction.
///
/// Construction does all the heavy work (the star map build is a
/// blocking computation proportional to `stars_count`); the per-frame
/// update is a handful of trigonometric operations and never fails.
/// The instance is single-owner: only its owner calls [`Sky::update`].
#[derive(Debug)]
pub struct Sky {
    config: SkyConfig,
    star_map: StarMap,
    rotation: SkyRotation,
}

/// One frame of sky state, returned by [`Sky::update`].
///
/// A plain immutable value type: no scratch buffers are shared between
/// frames, so a renderer may hold onto a frame for as long as it likes.
#[derive(Clone, Copy, Debug)]
pub struct SkyFrame {
    /// Rotation matrix for the current cumulative angle.
    pub rotation: Mat3,
    /// Current light direction (unit length).
    pub light_direction: Vec3,
    /// Scalar lighting parameters derived from the light direction.
    pub params: SkyParameters,
}

impl Sky {
    /// Validate the configuration, bake the star map, and set up the
    /// rotation state.
    pub fn new(config: SkyConfig) -> Result<Sky, ConfigError> {
        config.validate()?;

        let star_map = StarMap::build(&config.star_map_config())?;
        let rotation = SkyRotation::new(config.tilt_degrees, config.rotation_speed);

        log::info!(
            "procedural sky ready: {} stars on a {}x{} texture, seed {}",
            config.stars_count,
            star_map.width(),
            star_map.height(),
            config.seed
        );

        Ok(Sky {
            config,
            star_map,
            rotation,
        })
    }

    /// The configuration this sky was built from.
    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// The baked star texture. Immutable; safe for concurrent reads
    /// while the owner keeps updating the rotation.
    pub fn star_map(&self) -> &StarMap {
        &self.star_map
    }

    /// Advance the sky by `elapsed_seconds` and return the new frame.
    ///
    /// Invalid elapsed time (negative, NaN, infinite) advances nothing;
    /// the returned frame then simply repeats the current state.
    pub fn update(&mut self, elapsed_seconds: f32) -> SkyFrame {
        self.rotation.advance(elapsed_seconds);
        self.frame()
    }

    /// The current frame without advancing time.
    pub fn frame(&self) -> SkyFrame {
        let light_direction = self.rotation.light_direction();
        SkyFrame {
            rotation: self.rotation.matrix(),
            light_direction,
            params: SkyParameters::derive(light_direction),
        }
    }

    /// Pack a frame into the GPU-ready uniform block.
    pub fn uniforms(&self, frame: &SkyFrame) -> SkyUniforms {
        SkyUniforms::pack(frame, self.config.grid_size, self.config.dither_size)
    }
}
