use num_traits::Float;

use crate::error::{check_gamma, check_size, Result};
use crate::lut::Lut;
use crate::pwm::{normalize, quantize};

pub const DEFAULT_GAMMA: f64 = 2.6;

/// Power law correction `n ^ gamma`
pub fn generate_gamma_lut(size: usize, gamma: f64) -> Result<Lut> {
    check_size(size)?;
    check_gamma(gamma)?;
    Ok(Lut::from_fn(size, |level| {
        if level == 0 {
            return 0;
        }
        quantize(Float::powf(normalize(level, size), gamma))
    }))
}
