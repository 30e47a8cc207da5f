use alloc::vec::Vec;

use no_std_compat::fmt;
use no_std_compat::ops::Index;

use crate::pwm::Duty;

/// Smallest table which still maps both ends of the brightness range
pub const MIN_LUT_SIZE: usize = 2;

/// Brightness correction table, `lut[i]` is the PWM duty for brightness level `i`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lut {
    duties: Vec<Duty>,
}

impl Lut {
    pub(crate) fn from_fn<F>(size: usize, duty_at: F) -> Lut
    where
        F: FnMut(usize) -> Duty,
    {
        Lut {
            duties: (0..size).map(duty_at).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.duties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.duties.is_empty()
    }

    pub fn get(&self, level: usize) -> Option<Duty> {
        self.duties.get(level).copied()
    }

    pub fn as_slice(&self) -> &[Duty] {
        &self.duties
    }

    pub fn iter(&self) -> impl Iterator<Item = Duty> + '_ {
        self.duties.iter().copied()
    }

    pub fn into_vec(self) -> Vec<Duty> {
        self.duties
    }

    /// true if no duty is lower than the one of the previous level
    pub fn is_monotonic(&self) -> bool {
        self.duties.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Index<usize> for Lut {
    type Output = Duty;

    fn index(&self, level: usize) -> &Duty {
        &self.duties[level]
    }
}

/// Plain decimal values in index order, joined by ", "
impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut duties = self.duties.iter();
        if let Some(first) = duties.next() {
            write!(f, "{}", first)?;
            for duty in duties {
                write!(f, ", {}", duty)?;
            }
        }
        Ok(())
    }
}
