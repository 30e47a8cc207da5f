use num_traits::Float;

/// PWM duty value as consumed by the LED driver (`led_duty_t` on the firmware side).
pub type Duty = u16;

/// 12-bit PWM resolution
pub const DUTY_MAX: Duty = 4095;

/// Highest brightness level the firmware accepts
pub const BRIGHT_LEVEL_MAX: usize = 4095;

/// One table entry per brightness level
pub const DEFAULT_LUT_SIZE: usize = BRIGHT_LEVEL_MAX + 1;

/// Rounds to the nearest integer, ties go to the even neighbour.
pub fn round_half_even(value: f64) -> f64 {
    let rounded = Float::round(value);
    if Float::abs(rounded - value) == 0.5 {
        2.0 * Float::round(value / 2.0)
    } else {
        rounded
    }
}

/// Scales a corrected fraction in [0, 1] to a duty value, rounding and clamping to [0, DUTY_MAX].
pub fn quantize(corrected: f64) -> Duty {
    let duty = round_half_even(corrected * DUTY_MAX as f64);
    duty.max(0.0).min(DUTY_MAX as f64) as Duty
}

/// Rounds an already scaled duty value. The caller guarantees the range.
pub fn quantize_unclamped(duty: f64) -> Duty {
    let duty = round_half_even(duty);
    debug_assert!(duty >= 0.0 && duty <= DUTY_MAX as f64, "duty out of range: {}", duty);
    duty as Duty
}

/// Maps brightness level `i` of a `size` table into [0, 1]
pub(crate) fn normalize(level: usize, size: usize) -> f64 {
    level as f64 / (size - 1) as f64
}
