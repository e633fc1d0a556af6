//! Procedural sky state: star texture, rotating light, and the per-frame
//! lighting parameters a shading stage consumes.

mod config;
mod sky;
mod uniforms;

pub use config::{ConfigError, SkyConfig};
pub use sky::{Sky, SkyFrame};
pub use uniforms::SkyUniforms;

pub use astral_daycycle::{SkyParameters, SkyRotation};
pub use astral_starfield::{StarMap, StarMapConfig, StarMapError};
