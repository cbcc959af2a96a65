use log::debug;
use serde::Serialize;

use super::{Error, tables};
use crate::math::spline::CubicSpline;

// Constants of the 1976 standard, SI with kilometer lengths.
const EARTH_RADIUS_KM: f64 = 6356.766;
const G0_M_S2: f64 = 9.80665;
const T0_K: f64 = 288.15;
const P0_PA: f64 = 101_325.0;
const M0_KG_KMOL: f64 = 28.9644;
const RSTAR_J_KMOL_K: f64 = 8314.32;
const GAMMA: f64 = 1.4;
const SUTHERLAND_K: f64 = 110.0;
const BETA_VISCOSITY: f64 = 1.458e-6;
const SIDEREAL_DAY_S: f64 = 86164.091;

const TOP_OF_MODEL_KM: f64 = 1000.0;

/// All quantities of the model evaluated at one altitude.
#[derive(Debug, Clone, Serialize)]
pub struct AtmosphereProperties {
    pub altitude_km: f64,
    pub geopotential_altitude_km: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub speed_of_sound_m_s: f64,
    pub dynamic_viscosity_pa_s: f64,
    pub kinematic_viscosity_m2_s: f64,
    pub gravity_m_s2: f64,
    pub centripetal_accel_m_s2: f64,
}

/// U.S. Standard Atmosphere, 1976.
///
/// [`AtmosphereUs76::new`] derives the layer base temperatures and pressures
/// recursively from the sea-level constants and precomputes the pressure
/// spline for the 86..=1000 km band. The value is immutable afterwards and
/// every query takes `&self`, so one instance can serve any number of
/// threads.
///
/// Altitudes are geometric kilometers. Queries outside 0..=1000 km return
/// [`Error::InvalidAltitude`]; nothing is clamped or extrapolated.
#[derive(Debug, Clone)]
pub struct AtmosphereUs76 {
    /// Molecular-scale temperature at each layer boundary [K].
    layer_base_temp_k: [f64; 8],
    /// Pressure at each layer boundary [Pa].
    layer_base_pressure_pa: [f64; 8],
    /// Pressure over the 86..=1000 km sample table.
    upper_pressure: CubicSpline,
}

impl Default for AtmosphereUs76 {
    fn default() -> Self {
        Self::new()
    }
}

impl AtmosphereUs76 {
    pub fn new() -> AtmosphereUs76 {
        let mut tmb = [0.0; 8];
        let mut pb = [0.0; 8];
        tmb[0] = T0_K;
        pb[0] = P0_PA;

        // Each layer base follows from the previous one: lapse-rate law for
        // temperature, then the barometric exponential (isothermal layers) or
        // polytropic law for pressure.
        for i in 1..tables::LAYER_BASE_KM.len() {
            let dh_km = tables::LAYER_BASE_KM[i] - tables::LAYER_BASE_KM[i - 1];
            let lapse = tables::LAPSE_K_PER_KM[i - 1];
            tmb[i] = tmb[i - 1] + lapse * dh_km;

            pb[i] = if tables::ISOTHERMAL_LAYERS.contains(&(i - 1)) {
                pb[i - 1]
                    * (-G0_M_S2 * M0_KG_KMOL * dh_km / (RSTAR_J_KMOL_K / 1000.0 * tmb[i - 1]))
                        .exp()
            } else {
                pb[i - 1]
                    * (tmb[i - 1] / tmb[i])
                        .powf(G0_M_S2 * M0_KG_KMOL / (RSTAR_J_KMOL_K / 1000.0 * lapse))
            };
        }

        let upper_pressure = CubicSpline::new(&tables::UPPER_ALT_KM, &tables::UPPER_PRESSURE_PA)
            .expect("static pressure table is a valid spline input");

        debug!(
            "built 1976 standard atmosphere: {} layers below 86 km, {} upper pressure samples",
            tables::LAPSE_K_PER_KM.len(),
            tables::UPPER_ALT_KM.len()
        );

        AtmosphereUs76 {
            layer_base_temp_k: tmb,
            layer_base_pressure_pa: pb,
            upper_pressure,
        }
    }

    /// Geopotential altitude [km] of a geometric altitude [km].
    pub fn geopotential_altitude_km(&self, alt_km: f64) -> f64 {
        EARTH_RADIUS_KM * alt_km / (EARTH_RADIUS_KM + alt_km)
    }

    /// Gravitational acceleration [m/s^2], inverse-square falloff from the
    /// surface value.
    pub fn gravity_m_s2(&self, alt_km: f64) -> f64 {
        G0_M_S2 * (EARTH_RADIUS_KM / (EARTH_RADIUS_KM + alt_km)).powi(2)
    }

    /// Centripetal acceleration [m/s^2] of a point co-rotating with Earth at
    /// this radius (sidereal rate).
    pub fn centripetal_accel_m_s2(&self, alt_km: f64) -> f64 {
        let omega = 2.0 * std::f64::consts::PI / SIDEREAL_DAY_S;
        (EARTH_RADIUS_KM + alt_km) * 1000.0 * omega * omega
    }

    /// Molecular-scale temperature [K].
    pub fn temperature_k(&self, alt_km: f64) -> Result<f64, Error> {
        Self::check_altitude(alt_km)?;

        if alt_km < 86.0 {
            let geo_km = self.geopotential_altitude_km(alt_km);
            let i = Self::temperature_layer(geo_km);
            Ok(self.layer_base_temp_k[i]
                + tables::LAPSE_K_PER_KM[i] * (geo_km - tables::LAYER_BASE_KM[i]))
        } else if alt_km <= 91.0 {
            // Isothermal mesopause band.
            Ok(186.8673)
        } else if alt_km <= 110.0 {
            // Elliptical segment of the lower thermosphere.
            Ok(263.1905 - 76.3232 * (1.0 - ((alt_km - 91.0) / -19.9429).powi(2)).sqrt())
        } else if alt_km <= 120.0 {
            Ok(240.0 + 12.0 * (alt_km - 110.0))
        } else {
            // Exponential approach to the thermospheric asymptote, with the
            // altitude argument rescaled to geocentric radius.
            let t_inf = 1000.0;
            let t10 = 360.0;
            let z10 = 120.0;
            let lambda = 12.0 / (t_inf - t10);
            let gsy = (alt_km - z10) * (EARTH_RADIUS_KM + z10) / (EARTH_RADIUS_KM + alt_km);
            Ok(t_inf - (t_inf - t10) * (-lambda * gsy).exp())
        }
    }

    /// Static pressure [Pa].
    pub fn pressure_pa(&self, alt_km: f64) -> Result<f64, Error> {
        Self::check_altitude(alt_km)?;

        if alt_km < 86.0 {
            let geo_km = self.geopotential_altitude_km(alt_km);
            let i = Self::pressure_layer(geo_km);
            let base_t = self.layer_base_temp_k[i];
            let base_p = self.layer_base_pressure_pa[i];

            if tables::ISOTHERMAL_LAYERS.contains(&i) {
                let dh_km = geo_km - tables::LAYER_BASE_KM[i];
                Ok(base_p
                    * (-G0_M_S2 * M0_KG_KMOL * dh_km / (RSTAR_J_KMOL_K / 1000.0 * base_t)).exp())
            } else {
                // Temperature is re-derived at the query altitude, not cached.
                let t = self.temperature_k(alt_km)?;
                Ok(base_p
                    * (base_t / t).powf(
                        G0_M_S2 * M0_KG_KMOL
                            / (RSTAR_J_KMOL_K / 1000.0 * tables::LAPSE_K_PER_KM[i]),
                    ))
            }
        } else {
            self.upper_pressure
                .eval(alt_km)
                .map_err(|_| Error::InterpolationDomain { alt_km })
        }
    }

    /// Air density [kg/m^3], ideal-gas closure of this model's own pressure
    /// and temperature.
    pub fn density_kg_m3(&self, alt_km: f64) -> Result<f64, Error> {
        Ok(self.pressure_pa(alt_km)? * M0_KG_KMOL
            / (RSTAR_J_KMOL_K * self.temperature_k(alt_km)?))
    }

    /// Speed of sound [m/s].
    pub fn speed_of_sound_m_s(&self, alt_km: f64) -> Result<f64, Error> {
        Ok((GAMMA * RSTAR_J_KMOL_K * self.temperature_k(alt_km)? / M0_KG_KMOL).sqrt())
    }

    /// Dynamic viscosity [Pa*s], Sutherland's law.
    pub fn dynamic_viscosity_pa_s(&self, alt_km: f64) -> Result<f64, Error> {
        let t = self.temperature_k(alt_km)?;
        Ok(BETA_VISCOSITY * t.powf(1.5) / (t + SUTHERLAND_K))
    }

    /// Kinematic viscosity [m^2/s], dynamic viscosity over density.
    pub fn kinematic_viscosity_m2_s(&self, alt_km: f64) -> Result<f64, Error> {
        Ok(self.dynamic_viscosity_pa_s(alt_km)? / self.density_kg_m3(alt_km)?)
    }

    /// Every quantity of the model at one altitude.
    pub fn properties(&self, alt_km: f64) -> Result<AtmosphereProperties, Error> {
        Ok(AtmosphereProperties {
            altitude_km: alt_km,
            geopotential_altitude_km: self.geopotential_altitude_km(alt_km),
            temperature_k: self.temperature_k(alt_km)?,
            pressure_pa: self.pressure_pa(alt_km)?,
            density_kg_m3: self.density_kg_m3(alt_km)?,
            speed_of_sound_m_s: self.speed_of_sound_m_s(alt_km)?,
            dynamic_viscosity_pa_s: self.dynamic_viscosity_pa_s(alt_km)?,
            kinematic_viscosity_m2_s: self.kinematic_viscosity_m2_s(alt_km)?,
            gravity_m_s2: self.gravity_m_s2(alt_km),
            centripetal_accel_m_s2: self.centripetal_accel_m_s2(alt_km),
        })
    }

    fn check_altitude(alt_km: f64) -> Result<(), Error> {
        if (0.0..=TOP_OF_MODEL_KM).contains(&alt_km) {
            Ok(())
        } else {
            Err(Error::InvalidAltitude { alt_km })
        }
    }

    /// Layer containing this geopotential altitude, scanning boundaries low
    /// to high with an exclusive upper bound.
    ///
    /// The geopotential image of geometric altitudes just under 86 km can
    /// land a hair above the tabulated 84.852 km top boundary, so the scan
    /// falls back to the top layer instead of failing there.
    fn temperature_layer(geo_km: f64) -> usize {
        tables::LAYER_BASE_KM
            .windows(2)
            .position(|w| geo_km < w[1])
            .unwrap_or(tables::LAPSE_K_PER_KM.len() - 1)
    }

    /// Same scan with an inclusive upper bound: at an exact boundary the
    /// pressure laws use the lower layer's base values, which the recursion
    /// makes continuous with the layer above.
    fn pressure_layer(geo_km: f64) -> usize {
        tables::LAYER_BASE_KM
            .windows(2)
            .position(|w| geo_km <= w[1])
            .unwrap_or(tables::LAPSE_K_PER_KM.len() - 1)
    }
}
