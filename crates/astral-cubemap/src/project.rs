//! Direction-to-face projection: map a 3D direction onto the star texture grid.

use glam::Vec3;

use crate::CubeFace;

/// A texel position on the six-face star grid.
///
/// `col` and `row` are in `[0, grid_size)`, local to `face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TexelCoord {
    /// Which cube face the texel lies on.
    pub face: CubeFace,
    /// Column within the face.
    pub col: u32,
    /// Row within the face.
    pub row: u32,
}

/// Determine which cube face a direction vector belongs to.
///
/// The face is picked by the axis with the largest absolute component;
/// the sign of that component picks between the two opposing faces.
/// Exact-magnitude ties resolve in evaluation order x → y → z, first
/// match wins. This tie-break is part of the mapping contract, not an
/// error condition.
#[must_use]
pub fn dominant_face(dir: Vec3) -> CubeFace {
    let ax = dir.x.abs();
    let ay = dir.y.abs();
    let az = dir.z.abs();

    if ax >= ay && ax >= az {
        if dir.x > 0.0 {
            CubeFace::PosX
        } else {
            CubeFace::NegX
        }
    } else if ay >= az {
        if dir.y > 0.0 {
            CubeFace::PosY
        } else {
            CubeFace::NegY
        }
    } else if dir.z > 0.0 {
        CubeFace::PosZ
    } else {
        CubeFace::NegZ
    }
}

/// Project a non-zero direction onto its dominant cube face.
///
/// Returns `(face, u, v)` with `u` and `v` in `[0, 1]`: the direction's
/// tangent/bitangent components divided by the dominant-axis magnitude,
/// remapped from `[-1, 1]`. The input does not need to be unit length;
/// a zero vector yields non-finite coordinates and is the caller's
/// responsibility to exclude.
#[must_use]
pub fn project(dir: Vec3) -> (CubeFace, f32, f32) {
    let face = dominant_face(dir);
    let max_axis = dir.dot(face.normal()).abs();

    let u = dir.dot(face.tangent()) / max_axis;
    let v = dir.dot(face.bitangent()) / max_axis;

    (face, (u + 1.0) * 0.5, (v + 1.0) * 0.5)
}

/// Project a direction to a texel index on a `grid_size`-per-face grid.
///
/// Texel indices are floored (grid cells, not rounded samples); `u = 1.0`
/// exactly is clamped onto the last cell of the face rather than
/// spilling into the neighboring one. `grid_size` must be non-zero.
#[must_use]
pub fn project_to_grid(dir: Vec3, grid_size: u32) -> TexelCoord {
    debug_assert!(grid_size > 0, "grid_size must be non-zero");

    let (face, u, v) = project(dir);
    let col = ((u * grid_size as f32).floor() as u32).min(grid_size - 1);
    let row = ((v * grid_size as f32).floor() as u32).min(grid_size - 1);

    TexelCoord { face, col, row }
}
