use crate::error::Result;
use crate::exponential::generate_exponential_lut;
use crate::gamma::{generate_gamma_lut, DEFAULT_GAMMA};
use crate::logarithmic::{generate_logarithmic_lut, DEFAULT_LOG_GAMMA};
use crate::lut::Lut;
use crate::perceived_light_math::generate_cie1931_lut;

/// Brightness correction curve family.
///
/// Every variant turns a table size into a [Lut] with one duty value per brightness level,
/// so a caller can iterate over a set of curves without knowing how each one is computed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub enum Curve {
    /// Perceptually uniform, CIE1931 lightness
    Cie1931,
    /// `ln(1 + n * (e - 1)) ^ gamma`
    Logarithmic { gamma: f64 },
    /// Duty doubles at a fixed level interval
    Exponential,
    /// `n ^ gamma`
    Gamma { gamma: f64 },
}

impl Curve {
    /// Logarithmic curve with gamma 2.2
    pub const fn logarithmic() -> Curve {
        Curve::Logarithmic {
            gamma: DEFAULT_LOG_GAMMA,
        }
    }

    /// Power law curve with gamma 2.6
    pub const fn gamma() -> Curve {
        Curve::Gamma {
            gamma: DEFAULT_GAMMA,
        }
    }

    /// All curve families with their default parameters
    pub const ALL: [Curve; 4] = [
        Curve::Cie1931,
        Curve::logarithmic(),
        Curve::Exponential,
        Curve::gamma(),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Curve::Cie1931 => "cie1931",
            Curve::Logarithmic { .. } => "logarithmic",
            Curve::Exponential => "exponential",
            Curve::Gamma { .. } => "gamma",
        }
    }

    /// Exponent of the parametrized curves
    pub fn exponent(&self) -> Option<f64> {
        match *self {
            Curve::Logarithmic { gamma } | Curve::Gamma { gamma } => Some(gamma),
            Curve::Cie1931 | Curve::Exponential => None,
        }
    }

    /// Computes a fresh table of `size` duty values, `size` must be at least 2.
    pub fn generate(&self, size: usize) -> Result<Lut> {
        match *self {
            Curve::Cie1931 => generate_cie1931_lut(size),
            Curve::Logarithmic { gamma } => generate_logarithmic_lut(size, gamma),
            Curve::Exponential => generate_exponential_lut(size),
            Curve::Gamma { gamma } => generate_gamma_lut(size, gamma),
        }
    }
}
