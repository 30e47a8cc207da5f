use num_traits::Float;

use crate::error::{check_size, Result};
use crate::lut::Lut;
use crate::pwm::{normalize, quantize};

/// Lightness (L*) at full brightness
const L_MAX: f64 = 100.0;

/// Basically eyes perceive lightness changes in a non-linear way.
/// CIE1931 gives the relative luminance `Y` which is perceived as lightness `L` (0..100).
pub fn cie1931_luminance(lightness: f64) -> f64 {
    if lightness <= 8.0 {
        lightness / 903.3
    } else {
        Float::powf((lightness + 16.0) / 116.0, 3.0)
    }
}

/// Luminance for `lightness`, relative to the luminance at full lightness
pub fn cie1931_normalized(lightness: f64) -> f64 {
    cie1931_luminance(lightness) / cie1931_luminance(L_MAX)
}

/// Perceptually uniform dimming: level `i` is treated as lightness `i / (size - 1) * 100`.
pub fn generate_cie1931_lut(size: usize) -> Result<Lut> {
    check_size(size)?;
    Ok(Lut::from_fn(size, |level| {
        let lightness = normalize(level, size) * L_MAX;
        quantize(cie1931_normalized(lightness))
    }))
}
