//! U.S. Standard Atmosphere, 1976 model.

mod tables;
mod us76;

pub use us76::{AtmosphereProperties, AtmosphereUs76};

use thiserror::Error;

/// Errors returned by atmosphere queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Altitude is negative or above the 1000 km top of the model. Nothing is
    /// clamped or extrapolated outside that range.
    #[error("altitude {alt_km} km is outside the modeled range 0..=1000 km")]
    InvalidAltitude { alt_km: f64 },

    /// The upper-atmosphere pressure lookup fell outside its sample table.
    /// Unreachable while the altitude range check holds, but guarded
    /// independently rather than trusted.
    #[error("altitude {alt_km} km is outside the 86..=1000 km pressure table")]
    InterpolationDomain { alt_km: f64 },
}
