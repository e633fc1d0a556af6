//! Cube-face sky mapping: the six-face texture model and the projection from
//! 3D directions onto it.

mod cube_face;
mod project;

pub use cube_face::CubeFace;
pub use project::{TexelCoord, dominant_face, project, project_to_grid};
