use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Strictly positive length of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Distance(u32);

impl Distance {
    /// Validate and wrap a raw distance.
    pub fn new(value: i64) -> Result<Self> {
        match u32::try_from(value) {
            Ok(inner) if inner > 0 => Ok(Self(inner)),
            _ => Err(Error::InvalidDistance { value }),
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Sum of two distances; fails only when the result does not fit.
    pub fn checked_add(self, other: Distance) -> Result<Distance> {
        Distance::new(i64::from(self.0) + i64::from(other.0))
    }

    /// Difference of two distances; fails unless `other` is strictly shorter.
    pub fn checked_sub(self, other: Distance) -> Result<Distance> {
        Distance::new(i64::from(self.0) - i64::from(other.0))
    }
}

impl TryFrom<i64> for Distance {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Distance::new(value)
    }
}

impl From<Distance> for u32 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
