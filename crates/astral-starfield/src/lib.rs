//! Procedural star field: deterministic star placement on the sky sphere,
//! baked into a six-face RGBA8 texture strip.

mod rng;
mod star_map;

pub use rng::SkyRng;
pub use star_map::{StarMap, StarMapConfig, StarMapError};
