//! Day cycle: the rotating sun direction and the per-frame sky lighting
//! parameters derived from it.

mod rotation;
mod sky_params;

pub use rotation::SkyRotation;
pub use sky_params::SkyParameters;
