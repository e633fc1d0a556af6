//! Sky configuration and construction-time validation.

use astral_starfield::{StarMapConfig, StarMapError};

/// Build configuration for a [`Sky`](crate::Sky) instance.
///
/// The defaults are the reference configuration the sky was tuned
/// against; in particular `max_offset` and the star count are
/// empirical visual-parity constants, not derived values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyConfig {
    /// Star field seed.
    pub seed: u64,
    /// Per-face star texture size in texels.
    pub grid_size: u32,
    /// Number of stars to scatter.
    pub stars_count: u32,
    /// Half-width of the star red/green color band around 0.5.
    pub max_offset: f32,
    /// Sky rotation speed in radians per second.
    pub rotation_speed: f32,
    /// Rotation axis tilt away from +Z, in degrees.
    pub tilt_degrees: f32,
    /// Width/height of the caller's dither texture, forwarded opaquely
    /// into the uniform set. The sky never reads dither contents.
    pub dither_size: Option<(u32, u32)>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            seed: 87,
            grid_size: 64,
            stars_count: 10_000,
            max_offset: 0.43,
            rotation_speed: 0.05,
            tilt_degrees: -30.0,
            dither_size: None,
        }
    }
}

impl SkyConfig {
    /// Fail fast on invalid parameters.
    ///
    /// Invalid values are never silently clamped; a failed construction
    /// is terminal and the caller must reconstruct with corrected
    /// parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if !self.max_offset.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "max_offset",
                value: self.max_offset,
            });
        }
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "rotation_speed",
                value: self.rotation_speed,
            });
        }
        if !self.tilt_degrees.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "tilt_degrees",
                value: self.tilt_degrees,
            });
        }
        Ok(())
    }

    /// The star map slice of this configuration.
    pub(crate) fn star_map_config(&self) -> StarMapConfig {
        StarMapConfig {
            seed: self.seed,
            grid_size: self.grid_size,
            stars_count: self.stars_count,
            max_offset: self.max_offset,
        }
    }
}

/// Construction-time configuration errors. There are no runtime errors
/// in the per-frame update path.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The star grid would have no texels.
    #[error("sky grid size must be non-zero")]
    ZeroGridSize,

    /// A float parameter was NaN or infinite.
    #[error("sky parameter {name} must be finite, got {value}")]
    NonFinite {
        /// Which configuration field was invalid.
        name: &'static str,
        /// The offending value.
        value: f32,
    },

    /// The star map builder rejected its configuration.
    #[error(transparent)]
    StarMap(#[from] StarMapError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SkyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_grid_size_fails_validation() {
        let config = SkyConfig {
            grid_size: 0,
            ..SkyConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroGridSize), "got {err:?}");
    }

    #[test]
    fn test_non_finite_parameters_fail_validation() {
        for (name, config) in [
            (
                "max_offset",
                SkyConfig {
                    max_offset: f32::NAN,
                    ..SkyConfig::default()
                },
            ),
            (
                "rotation_speed",
                SkyConfig {
                    rotation_speed: f32::INFINITY,
                    ..SkyConfig::default()
                },
            ),
            (
                "tilt_degrees",
                SkyConfig {
                    tilt_degrees: f32::NEG_INFINITY,
                    ..SkyConfig::default()
                },
            ),
        ] {
            let err = config.validate().unwrap_err();
            match err {
                ConfigError::NonFinite { name: field, .. } => {
                    assert_eq!(field, name, "wrong field reported")
                }
                other => panic!("expected NonFinite for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_matches_reference_configuration() {
        let config = SkyConfig::default();
        assert_eq!(config.seed, 87);
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.stars_count, 10_000);
        assert!((config.max_offset - 0.43).abs() < 1e-6);
        assert!((config.rotation_speed - 0.05).abs() < 1e-6);
        assert!((config.tilt_degrees - (-30.0)).abs() < 1e-6);
    }
}
