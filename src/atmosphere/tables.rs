//! Static reference data of the 1976 standard: the geopotential layer
//! structure below 86 km and the pressure sample table above it.

/// Geopotential heights of the layer boundaries [km].
pub(crate) const LAYER_BASE_KM: [f64; 8] = [0.0, 11.0, 20.0, 32.0, 47.0, 51.0, 71.0, 84.852];

/// Molecular-scale temperature lapse rate within each layer [K/km].
pub(crate) const LAPSE_K_PER_KM: [f64; 7] = [-6.5, 0.0, 1.0, 2.8, 0.0, -2.8, -2.0];

/// Zero-lapse-rate layers, which take the barometric exponential law instead
/// of the polytropic one.
pub(crate) const ISOTHERMAL_LAYERS: [usize; 2] = [1, 4];

/// Altitudes of the upper-atmosphere pressure samples [km].
///
/// Tabulations of this data sometimes carry a meters label on the altitude
/// column, but the values are kilometers (0.37338 Pa at 86 is the published
/// 86 km pressure) and every lookup here is keyed by kilometer altitudes.
pub(crate) const UPPER_ALT_KM: [f64; 89] = [
    86.0, 87.0, 88.0, 89.0, 90.0, 91.0, 93.0, 95.0, 97.0, 99.0, 101.0, 103.0, 105.0, 107.0, 109.0,
    110.0, 111.0, 112.0, 113.0, 114.0, 115.0, 116.0, 117.0, 118.0, 119.0, 120.0, 125.0, 130.0,
    135.0, 140.0, 145.0, 150.0, 160.0, 170.0, 180.0, 190.0, 200.0, 210.0, 220.0, 230.0, 240.0,
    250.0, 260.0, 270.0, 280.0, 290.0, 300.0, 310.0, 320.0, 330.0, 340.0, 350.0, 360.0, 370.0,
    380.0, 390.0, 400.0, 410.0, 420.0, 430.0, 440.0, 450.0, 460.0, 470.0, 480.0, 490.0, 500.0,
    525.0, 550.0, 575.0, 600.0, 625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0, 825.0,
    850.0, 875.0, 900.0, 925.0, 950.0, 975.0, 980.0, 990.0, 1000.0,
];

/// Pressure at each [`UPPER_ALT_KM`] sample [Pa].
pub(crate) const UPPER_PRESSURE_PA: [f64; 89] = [
    3.7338e-1, 3.1259e-1, 2.6173e-1, 2.1919e-1, 1.8359e-1, 1.5381e-1, 1.0801e-1, 7.5966e-2,
    5.3571e-2, 3.7948e-2, 2.7192e-2, 1.9742e-2, 1.4477e-2, 1.0751e-2, 8.1142e-3, 7.1042e-3,
    6.2614e-3, 5.5547e-3, 4.9570e-3, 4.4473e-3, 4.0096e-3, 3.6312e-3, 3.3022e-3, 3.0144e-3,
    2.7615e-3, 2.5382e-3, 1.7354e-3, 1.2505e-3, 9.3568e-4, 7.2028e-4, 5.6691e-4, 4.5422e-4,
    3.0395e-4, 2.1210e-4, 1.5271e-4, 1.1266e-4, 8.4736e-5, 6.4756e-5, 5.0149e-5, 3.9276e-5,
    3.1059e-5, 2.4767e-5, 1.9894e-5, 1.6083e-5, 1.3076e-5, 1.0683e-5, 8.7704e-6, 7.2285e-6,
    5.9796e-6, 4.9630e-6, 4.1320e-6, 3.4498e-6, 2.8878e-6, 2.4234e-6, 2.0384e-6, 1.7184e-6,
    1.4518e-6, 1.2291e-6, 1.0427e-6, 8.8645e-7, 7.5517e-7, 6.4468e-7, 5.5155e-7, 4.7292e-7,
    4.0642e-7, 3.5011e-7, 3.0236e-7, 2.1200e-7, 1.5137e-7, 1.1028e-7, 8.2130e-8, 6.2601e-8,
    4.8865e-8, 3.9048e-8, 3.1908e-8, 2.6611e-8, 2.2599e-8, 1.9493e-8, 1.7036e-8, 1.5051e-8,
    1.3415e-8, 1.2043e-8, 1.0873e-8, 9.8635e-9, 8.9816e-9, 8.2043e-9, 8.0597e-9, 7.7805e-9,
    7.5138e-9,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_tables_are_consistent() {
        assert_eq!(LAYER_BASE_KM.len(), LAPSE_K_PER_KM.len() + 1);
        assert!(LAYER_BASE_KM.windows(2).all(|w| w[0] < w[1]));
        assert!(ISOTHERMAL_LAYERS.iter().all(|&i| LAPSE_K_PER_KM[i] == 0.0));
    }

    #[test]
    fn test_upper_table_is_a_valid_spline_input() {
        assert_eq!(UPPER_ALT_KM.len(), UPPER_PRESSURE_PA.len());
        assert!(UPPER_ALT_KM.windows(2).all(|w| w[0] < w[1]));
        assert!(UPPER_PRESSURE_PA.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(UPPER_ALT_KM[0], 86.0);
        assert_eq!(UPPER_ALT_KM[UPPER_ALT_KM.len() - 1], 1000.0);
    }
}
