//! Star map construction: scatter stars uniformly over the sphere and bake
//! them into a six-faces-side-by-side RGBA8 texture strip.

use std::f32::consts::TAU;

use glam::Vec3;

use astral_cubemap::{CubeFace, project_to_grid};

use crate::rng::SkyRng;

/// Build configuration for a [`StarMap`].
///
/// A map's contents are a pure function of these fields: the same
/// configuration always produces a byte-identical buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarMapConfig {
    /// Seed for the star generator; the identity of a star field.
    pub seed: u64,
    /// Width/height of each cube face in texels.
    pub grid_size: u32,
    /// Number of stars to scatter. May exceed the texel count; later
    /// stars overwrite earlier ones that land on the same texel.
    pub stars_count: u32,
    /// Half-width of the red/green channel band around 0.5.
    pub max_offset: f32,
}

impl Default for StarMapConfig {
    fn default() -> Self {
        Self {
            seed: 87,
            grid_size: 64,
            stars_count: 10_000,
            max_offset: 0.43,
        }
    }
}

/// Errors raised by [`StarMap::build`] on invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum StarMapError {
    /// The per-face grid size was zero; the map would have no texels.
    #[error("star map grid size must be non-zero")]
    ZeroGridSize,

    /// The red/green channel offset was NaN or infinite.
    #[error("star map max offset must be finite, got {0}")]
    InvalidOffset(f32),
}

/// An immutable star texture: `grid_size * 6` wide by `grid_size` tall,
/// four bytes per texel.
///
/// Red and green carry the star's color components, blue a heavily
/// dim-biased brightness, and alpha the twinkle factor sampled
/// downstream as per-star intensity variation. Built once per
/// configuration; safe for concurrent reads afterwards.
#[derive(Debug)]
pub struct StarMap {
    grid_size: u32,
    pixels: Vec<u8>,
}

impl StarMap {
    /// Scatter `stars_count` stars uniformly over the unit sphere and
    /// bake them into the texture strip.
    ///
    /// Stars that collide on a texel silently overwrite each other;
    /// this is accepted lossy behavior, not a defect.
    pub fn build(config: &StarMapConfig) -> Result<StarMap, StarMapError> {
        if config.grid_size == 0 {
            return Err(StarMapError::ZeroGridSize);
        }
        if !config.max_offset.is_finite() {
            return Err(StarMapError::InvalidOffset(config.max_offset));
        }

        let grid = config.grid_size;
        let width = grid * 6;
        let mut pixels = vec![0u8; (width * grid * 4) as usize];

        let mut rng = SkyRng::new(config.seed);
        let lo = 0.5 - config.max_offset;
        let hi = 0.5 + config.max_offset;

        for _ in 0..config.stars_count {
            // Uniform point on the sphere from two draws: azimuth plus a
            // uniform z coordinate. The construction is part of the
            // determinism contract and must not be reordered.
            let a = rng.next_f32() * TAU;
            let b = rng.next_f32() * 2.0 - 1.0;
            let c = (1.0 - b * b).sqrt();
            let dir = Vec3::new(a.cos() * c, a.sin() * c, b);

            let r = (lerp(lo, hi, rng.next_f32()) * 255.0) as u8;
            let g = (lerp(lo, hi, rng.next_f32()) * 255.0) as u8;
            // Sixth power: most stars end up dim blue, a handful bright.
            let bl = (rng.next_f32().powi(6) * 255.0) as u8;
            let al = (rng.next_f32() * 255.0) as u8;

            let texel = project_to_grid(dir, grid);
            let idx = Self::flat_index(grid, texel.face, texel.col, texel.row);
            pixels[idx..idx + 4].copy_from_slice(&[r, g, bl, al]);
        }

        log::debug!(
            "star map baked: {} stars into {width}x{grid} texels (seed {})",
            config.stars_count,
            config.seed
        );

        Ok(StarMap {
            grid_size: grid,
            pixels,
        })
    }

    /// Per-face grid size in texels.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Texture width: six faces side by side.
    pub fn width(&self) -> u32 {
        self.grid_size * 6
    }

    /// Texture height: one face.
    pub fn height(&self) -> u32 {
        self.grid_size
    }

    /// The raw RGBA8 buffer, row-major, `width() * height() * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one texel's RGBA bytes.
    pub fn texel(&self, face: CubeFace, col: u32, row: u32) -> [u8; 4] {
        let idx = Self::flat_index(self.grid_size, face, col, row);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    fn flat_index(grid: u32, face: CubeFace, col: u32, row: u32) -> usize {
        ((row * grid * 6 + face.index() as u32 * grid + col) * 4) as usize
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_config_produces_byte_identical_maps() {
        let config = StarMapConfig {
            seed: 87,
            grid_size: 64,
            stars_count: 10_000,
            max_offset: 0.43,
        };
        let a = StarMap::build(&config).unwrap();
        let b = StarMap::build(&config).unwrap();
        assert_eq!(
            a.pixels(),
            b.pixels(),
            "identical configurations must produce byte-identical buffers"
        );
    }

    #[test]
    fn test_different_seeds_produce_different_maps() {
        let mut config = StarMapConfig::default();
        let a = StarMap::build(&config).unwrap();
        config.seed = 9999;
        let b = StarMap::build(&config).unwrap();
        assert_ne!(
            a.pixels(),
            b.pixels(),
            "different seeds should produce different star maps"
        );
    }

    #[test]
    fn test_buffer_dimensions() {
        let config = StarMapConfig {
            grid_size: 32,
            ..StarMapConfig::default()
        };
        let map = StarMap::build(&config).unwrap();
        assert_eq!(map.width(), 192);
        assert_eq!(map.height(), 32);
        assert_eq!(map.pixels().len(), 192 * 32 * 4);
    }

    #[test]
    fn test_zero_grid_size_is_rejected() {
        let config = StarMapConfig {
            grid_size: 0,
            ..StarMapConfig::default()
        };
        let err = StarMap::build(&config).unwrap_err();
        assert!(
            matches!(err, StarMapError::ZeroGridSize),
            "expected ZeroGridSize, got {err:?}"
        );
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        let config = StarMapConfig {
            max_offset: f32::NAN,
            ..StarMapConfig::default()
        };
        let err = StarMap::build(&config).unwrap_err();
        assert!(
            matches!(err, StarMapError::InvalidOffset(_)),
            "expected InvalidOffset, got {err:?}"
        );
    }

    #[test]
    fn test_stars_land_on_every_face() {
        let map = StarMap::build(&StarMapConfig::default()).unwrap();
        for face in CubeFace::ALL {
            let mut lit = 0usize;
            for row in 0..map.grid_size() {
                for col in 0..map.grid_size() {
                    let [r, g, _, _] = map.texel(face, col, row);
                    if r > 0 || g > 0 {
                        lit += 1;
                    }
                }
            }
            assert!(
                lit > 100,
                "face {face:?} has only {lit} lit texels out of 4096"
            );
        }
    }

    #[test]
    fn test_red_green_stay_inside_offset_band() {
        let config = StarMapConfig::default();
        let map = StarMap::build(&config).unwrap();
        let lo = ((0.5 - config.max_offset) * 255.0) as u8;
        let hi = ((0.5 + config.max_offset) * 255.0) as u8 + 1;
        for chunk in map.pixels().chunks_exact(4) {
            let (r, g) = (chunk[0], chunk[1]);
            if r == 0 && g == 0 {
                continue; // unlit texel
            }
            assert!(
                (lo..=hi).contains(&r) && (lo..=hi).contains(&g),
                "star color ({r}, {g}) escaped the [{lo}, {hi}] band"
            );
        }
    }

    #[test]
    fn test_blue_channel_skews_dim() {
        let map = StarMap::build(&StarMapConfig::default()).unwrap();
        let mut dim = 0usize;
        let mut bright = 0usize;
        for chunk in map.pixels().chunks_exact(4) {
            if chunk[0] == 0 && chunk[1] == 0 {
                continue;
            }
            if chunk[2] < 16 {
                dim += 1;
            } else if chunk[2] > 128 {
                bright += 1;
            }
        }
        assert!(
            dim > bright * 3,
            "sixth-power skew should leave far more dim ({dim}) than bright ({bright}) blue channels"
        );
    }

    #[test]
    fn test_overcrowded_map_builds_without_error() {
        // Far more stars than texels on a tiny grid: overwrites, no failure.
        let config = StarMapConfig {
            grid_size: 2,
            stars_count: 5_000,
            ..StarMapConfig::default()
        };
        let map = StarMap::build(&config).unwrap();
        assert_eq!(map.pixels().len(), 12 * 2 * 4);
    }
}
