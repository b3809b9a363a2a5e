use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{Result, ScaffoldError};

pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 25;

/// A puzzle day, always within `FIRST_DAY..=LAST_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub fn new(n: i64) -> Result<Self> {
        match u8::try_from(n) {
            Ok(n) if (FIRST_DAY..=LAST_DAY).contains(&n) => Ok(Self(n)),
            _ => Err(ScaffoldError::OutOfRange(n.to_string())),
        }
    }
}

impl FromStr for Day {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => Day::new(n),
            // Numeric but too large for i64 is still just out of range
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(ScaffoldError::OutOfRange(s.to_string()))
            }
            Err(_) => Err(ScaffoldError::NotANumber(s.to_string())),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
