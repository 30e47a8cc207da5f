#![no_std]
//! Brightness correction curves for PWM driven LEDs.
//!
//! Every curve maps a brightness level `0..size` to a 12-bit PWM duty value, so firmware can
//! dim with a single table lookup.

extern crate alloc;

pub mod curve;
pub mod error;
pub mod exponential;
pub mod gamma;
pub mod logarithmic;
pub mod lut;
pub mod perceived_light_math;
pub mod pwm;

pub use curve::Curve;
pub use error::{Error, InvalidArgument};
pub use lut::Lut;
pub use pwm::{Duty, DUTY_MAX};
