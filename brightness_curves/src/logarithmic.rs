use core::f64::consts::E;

use num_traits::Float;

use crate::error::{check_gamma, check_size, Result};
use crate::lut::Lut;
use crate::pwm::{normalize, quantize};

pub const DEFAULT_LOG_GAMMA: f64 = 2.2;

/// Steep near zero, flat towards full scale: `ln(1 + n * (e - 1)) ^ gamma`
pub fn generate_logarithmic_lut(size: usize, gamma: f64) -> Result<Lut> {
    check_size(size)?;
    check_gamma(gamma)?;
    Ok(Lut::from_fn(size, |level| {
        if level == 0 {
            return 0;
        }
        let normalized = normalize(level, size);
        quantize(Float::powf(Float::ln(1.0 + normalized * (E - 1.0)), gamma))
    }))
}

#[cfg(test)]
mod test {
    use crate::logarithmic::{generate_logarithmic_lut, DEFAULT_LOG_GAMMA};
    use crate::pwm::DUTY_MAX;

    #[test]
    fn ten_levels() {
        let lut = generate_logarithmic_lut(10, 2.2).unwrap();
        assert_eq!(lut[0], 0);
        assert_eq!(lut[9], DUTY_MAX);
        assert_eq!(
            lut.into_vec(),
            [0, 88, 342, 717, 1177, 1698, 2261, 2854, 3467, 4095]
        );
    }

    #[test]
    fn eleven_levels_with_default_gamma() {
        let lut = generate_logarithmic_lut(11, DEFAULT_LOG_GAMMA).unwrap();
        assert_eq!(
            lut.into_vec(),
            [0, 71, 280, 594, 984, 1431, 1919, 2436, 2975, 3530, 4095]
        );
    }

    #[test]
    fn larger_gamma_dims_the_middle() {
        let soft = generate_logarithmic_lut(64, 1.5).unwrap();
        let hard = generate_logarithmic_lut(64, 3.0).unwrap();
        assert!(hard[32] < soft[32]);
        assert_eq!(hard[63], soft[63]);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(generate_logarithmic_lut(1, 2.2).is_err());
        assert!(generate_logarithmic_lut(10, 0.0).is_err());
        assert!(generate_logarithmic_lut(10, -2.2).is_err());
    }
}
