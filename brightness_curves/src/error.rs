use crate::lut::MIN_LUT_SIZE;

/// Argument that a curve generator refused to work with
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("table size must be at least 2, got {0}")]
    Size(usize),
    /// Zero, negative and non-finite exponents are not supported
    #[error("gamma must be a positive finite number, got {0}")]
    Gamma(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn check_size(size: usize) -> Result<()> {
    if size < MIN_LUT_SIZE {
        Err(InvalidArgument::Size(size).into())
    } else {
        Ok(())
    }
}

pub(crate) fn check_gamma(gamma: f64) -> Result<()> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::Gamma(gamma).into())
    }
}
