//! The six faces of the sky cube and their basis vectors.

use glam::Vec3;

/// The six faces of the cube the star texture is laid out on.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction. The discriminant is the face's
/// column offset in the six-faces-side-by-side texture strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Face index in `0..6`, matching the texture strip order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::X,
            CubeFace::NegX => Vec3::NEG_X,
            CubeFace::PosY => Vec3::Y,
            CubeFace::NegY => Vec3::NEG_Y,
            CubeFace::PosZ => Vec3::Z,
            CubeFace::NegZ => Vec3::NEG_Z,
        }
    }

    /// Tangent vector: direction of increasing `u` on this face.
    ///
    /// Together with [`CubeFace::bitangent`] this table defines the
    /// mapping the sampling shader inverts; it must not be changed.
    #[must_use]
    pub fn tangent(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::NEG_Z,
            CubeFace::NegX => Vec3::Z,
            CubeFace::PosY => Vec3::X,
            CubeFace::NegY => Vec3::X,
            CubeFace::PosZ => Vec3::X,
            CubeFace::NegZ => Vec3::NEG_X,
        }
    }

    /// Bitangent vector: direction of increasing `v` on this face.
    #[must_use]
    pub fn bitangent(self) -> Vec3 {
        match self {
            CubeFace::PosX => Vec3::Y,
            CubeFace::NegX => Vec3::Y,
            CubeFace::PosY => Vec3::NEG_Z,
            CubeFace::NegY => Vec3::Z,
            CubeFace::PosZ => Vec3::Y,
            CubeFace::NegZ => Vec3::Y,
        }
    }
}
