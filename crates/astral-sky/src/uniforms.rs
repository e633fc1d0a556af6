//! GPU-side uniform block for the sky shader.

use bytemuck::{Pod, Zeroable};

use crate::sky::SkyFrame;

/// Everything the sky shader consumes each frame, packed for a uniform
/// buffer. Matches the WGSL struct layout.
///
/// WGSL alignment rules: mat3x3<f32> occupies three vec4-aligned
/// columns, and vec2<f32> needs 8-byte alignment, so explicit padding
/// keeps scalar fields from shifting the vectors.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SkyUniforms {
    /// Sky rotation matrix, three vec4-padded columns. (offset 0)
    pub rotation: [[f32; 4]; 3],
    /// Direction to the light, unit length. (offset 48)
    pub dir_to_light: [f32; 3],
    /// Sun disk visibility. (offset 60)
    pub sun_visibility: f32,
    /// Light color; all three channels carry the same intensity. (offset 64)
    pub light: [f32; 3],
    /// Twilight ramp progress. (offset 76)
    pub twilight_time: f32,
    /// Twilight band strength. (offset 80)
    pub twilight_visibility: f32,
    /// Specular highlight visibility. (offset 84)
    pub specular_visibility: f32,
    /// Star grid size per face. (offset 88)
    pub grid_size: f32,
    /// Star texture width: grid size times six faces. (offset 92)
    pub grid_size_scaled: f32,
    /// Dither texture dimensions, forwarded opaquely. (offset 96)
    pub dither_size: [f32; 2],
    /// Padding for 16-byte struct alignment. (offset 104)
    pub _padding: [f32; 2],
}

impl SkyUniforms {
    /// Pack a sky frame plus the static texture parameters.
    ///
    /// `dither_size` is whatever the caller registered at construction;
    /// the sky only forwards the dimensions, never the contents.
    pub fn pack(frame: &SkyFrame, grid_size: u32, dither_size: Option<(u32, u32)>) -> Self {
        let m = frame.rotation;
        let (dither_w, dither_h) = dither_size.unwrap_or((0, 0));
        let l = frame.params.light_intensity;

        Self {
            rotation: [
                [m.x_axis.x, m.x_axis.y, m.x_axis.z, 0.0],
                [m.y_axis.x, m.y_axis.y, m.y_axis.z, 0.0],
                [m.z_axis.x, m.z_axis.y, m.z_axis.z, 0.0],
            ],
            dir_to_light: frame.light_direction.into(),
            sun_visibility: frame.params.sun_visibility,
            light: [l, l, l],
            twilight_time: frame.params.twilight_time,
            twilight_visibility: frame.params.twilight_visibility,
            specular_visibility: frame.params.specular_visibility,
            grid_size: grid_size as f32,
            grid_size_scaled: (grid_size * 6) as f32,
            dither_size: [dither_w as f32, dither_h as f32],
            _padding: [0.0; 2],
        }
    }
}
