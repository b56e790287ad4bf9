//! # Personal Identity Number Model
//!
//! [`IdentityNumber`] is the parsed form of `YYYYMMDD-NNNC`: birth date, a
//! separator, a three digit serial and a check digit. Values can only be
//! obtained by validating a string or by generating one, so every instance
//! carries a matching check digit.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use pin_common::{PinError, Separator, Sex};
use tracing::debug;

use crate::checksum::{self, CHECKSUM_INPUT_LEN};
use crate::format::{self, SEPARATOR_INDEX};

/// A validated personal identity number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityNumber {
    date: String,
    separator: Separator,
    serial: u16,
    check_digit: u8,
}

impl IdentityNumber {
    /// Parses and validates a personal identity number.
    ///
    /// The century digits and the separator are left out of the checksum; the
    /// remaining nine leading digits must reproduce the trailing check digit.
    ///
    /// # Errors
    /// * [`PinError::InvalidFormat`] if `input` is not `YYYYMMDD-NNNC` or `YYYYMMDD+NNNC`.
    /// * [`PinError::ChecksumMismatch`] if the check digit is wrong.
    pub fn parse(input: &str) -> Result<Self, PinError> {
        if !format::is_pin(input) {
            debug!(input, "rejected personal identity number with invalid format");
            return Err(PinError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let bytes = input.as_bytes();
        let separator =
            Separator::from_byte(bytes[SEPARATOR_INDEX]).ok_or_else(|| PinError::InvalidFormat {
                input: input.to_string(),
            })?;

        // Year within century, month, day, then the serial.
        let mut digits = [0u8; CHECKSUM_INPUT_LEN];
        let relevant = bytes[2..SEPARATOR_INDEX]
            .iter()
            .chain(&bytes[SEPARATOR_INDEX + 1..format::PIN_LEN - 1]);
        for (digit, byte) in digits.iter_mut().zip(relevant) {
            *digit = byte - b'0';
        }

        let expected = checksum::check_digit(&digits);
        let actual = bytes[format::PIN_LEN - 1] - b'0';
        if expected != actual {
            debug!(input, expected, actual, "rejected personal identity number with bad check digit");
            return Err(PinError::ChecksumMismatch {
                input: input.to_string(),
                expected,
                actual,
            });
        }

        Ok(Self {
            date: input[..SEPARATOR_INDEX].to_string(),
            separator,
            serial: serial_from_digits(&digits[6..]),
            check_digit: actual,
        })
    }

    /// Builds a number from an already checked `YYYYMMDD` date and a serial below 1000.
    pub(crate) fn from_parts(date: &str, separator: Separator, serial: u16) -> Self {
        let mut digits = [0u8; CHECKSUM_INPUT_LEN];
        for (digit, byte) in digits[..6].iter_mut().zip(&date.as_bytes()[2..]) {
            *digit = byte - b'0';
        }
        digits[6] = (serial / 100 % 10) as u8;
        digits[7] = (serial / 10 % 10) as u8;
        digits[8] = (serial % 10) as u8;

        Self {
            date: date.to_string(),
            separator,
            serial,
            check_digit: checksum::check_digit(&digits),
        }
    }

    /// The eight `YYYYMMDD` digits.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The three digit birth number.
    pub fn serial(&self) -> u16 {
        self.serial
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// Sex encoded by the last serial digit (odd: male, even: female).
    pub fn sex(&self) -> Sex {
        Sex::from_digit((self.serial % 10) as u8)
    }

    pub fn is_male(&self) -> bool {
        self.sex() == Sex::Male
    }

    pub fn is_female(&self) -> bool {
        self.sex() == Sex::Female
    }

    /// Returns true when written with `+`, the marker for holders aged 100 or more.
    pub fn is_centenarian(&self) -> bool {
        self.separator == Separator::Plus
    }

    /// Interprets the date digits as a calendar date.
    ///
    /// Validation accepts any eight digits, so this is `None` for numbers like
    /// `19901399-...` that passed the checksum but name no real day.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        let year: i32 = self.date[..4].parse().ok()?;
        let month: u32 = self.date[4..6].parse().ok()?;
        let day: u32 = self.date[6..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Succeeds only when the number encodes `expected`.
    ///
    /// # Errors
    /// Returns [`PinError::WrongSex`] for the other sex.
    pub fn ensure_sex(self, expected: Sex) -> Result<Self, PinError> {
        if self.sex() == expected {
            Ok(self)
        } else {
            Err(PinError::WrongSex {
                input: self.to_string(),
                expected,
            })
        }
    }
}

fn serial_from_digits(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |serial, &digit| serial * 10 + u16::from(digit))
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:03}{}",
            self.date, self.separator, self.serial, self.check_digit
        )
    }
}

impl FromStr for IdentityNumber {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
