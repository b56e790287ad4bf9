use std::fmt;

/// Sex encoded in the serial number of a personal identity number.
///
/// Odd last serial digits belong to men, even ones to women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Derives the sex from the last digit of the serial number.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 { Sex::Male } else { Sex::Female }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}
