//! U.S. Standard Atmosphere, 1976.
//!
//! Physical properties of the atmosphere (temperature, pressure, density,
//! speed of sound, viscosity, gravity) as a function of geometric altitude in
//! kilometers, from sea level up to 1000 km. All quantities are SI.
//!
//! The model is built once and immutable afterwards; every query is a pure
//! function of altitude, so a single instance can be shared freely across
//! threads.
//!
//! ```
//! use ussa1976::AtmosphereUs76;
//!
//! let atmo = AtmosphereUs76::new();
//! let t = atmo.temperature_k(11.0).unwrap();
//! assert!((t - 216.77).abs() < 0.01);
//! ```

pub mod atmosphere;
pub mod math;

pub use atmosphere::{AtmosphereProperties, AtmosphereUs76, Error};

use once_cell::sync::Lazy;

/// Shared, lazily built model instance for callers that do not need to own
/// one.
pub static STANDARD: Lazy<AtmosphereUs76> = Lazy::new(AtmosphereUs76::new);
