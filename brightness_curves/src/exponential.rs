use num_traits::Float;

use crate::error::{check_size, Result};
use crate::lut::Lut;
use crate::pwm::{quantize_unclamped, DUTY_MAX};

/// Number of levels after which the duty doubles
pub fn doubling_rate(size: usize) -> f64 {
    ((size - 1) as f64 * Float::log10(2.0_f64)) / Float::log10(DUTY_MAX as f64)
}

/// Duty doubles every [doubling_rate] levels, anchored at 0 and [DUTY_MAX].
///
/// Interior levels are evaluated as `DUTY_MAX * 2^(i/R) / DUTY_MAX` on purpose,
/// the intermediate scaling changes how some values round.
pub fn generate_exponential_lut(size: usize) -> Result<Lut> {
    check_size(size)?;
    let rate = doubling_rate(size);
    let last = size - 1;
    let duty_max = DUTY_MAX as f64;
    Ok(Lut::from_fn(size, |level| {
        if level == 0 {
            0
        } else if level == last {
            DUTY_MAX
        } else {
            quantize_unclamped((duty_max * Float::powf(2.0, level as f64 / rate)) / duty_max)
        }
    }))
}

#[cfg(test)]
mod test {
    use num_traits::Float;

    use crate::exponential::{doubling_rate, generate_exponential_lut};
    use crate::pwm::DUTY_MAX;

    #[test]
    fn eleven_levels() {
        let lut = generate_exponential_lut(11).unwrap();
        assert_eq!(
            lut.into_vec(),
            [0, 2, 5, 12, 28, 64, 147, 338, 776, 1782, 4095]
        );
    }

    #[test]
    fn endpoints_are_exact() {
        for size in [2, 3, 100, 4096] {
            let lut = generate_exponential_lut(size).unwrap();
            assert_eq!(lut[0], 0, "size {}", size);
            assert_eq!(lut[size - 1], DUTY_MAX, "size {}", size);
        }
        assert_eq!(generate_exponential_lut(3).unwrap().into_vec(), [0, 64, 4095]);
    }

    #[test]
    fn full_table_starts_at_one() {
        let lut = generate_exponential_lut(4096).unwrap();
        assert_eq!(lut.as_slice()[..5], [0, 1, 1, 1, 1]);
        assert_eq!(lut[2048], 64);
        assert_eq!(lut[4094], 4087);
    }

    #[test]
    fn rate_grows_with_table_size() {
        assert!(doubling_rate(4096) > doubling_rate(256));
        let full_scale = Float::powf(2.0_f64, 4095.0 / doubling_rate(4096));
        assert!(Float::abs(full_scale - 4095.0) < 1e-6);
    }

    #[test]
    fn single_level_is_rejected() {
        assert!(generate_exponential_lut(1).is_err());
    }
}
