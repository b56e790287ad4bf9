//! Error types for generating and validating personal identity numbers.

use thiserror::Error;

use crate::identity::sex::Sex;

/// Errors that can occur when generating, parsing or querying a personal identity number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PinError {
    /// The date is not exactly eight ASCII digits.
    #[error("{input} is not a valid date, expects format YYYYMMDD")]
    InvalidDate { input: String },

    /// The personal identity number does not match `YYYYMMDD-NNNC` or `YYYYMMDD+NNNC`.
    #[error("{input} is not a valid personal identity number, expects format YYYYMMDD-NNNC")]
    InvalidFormat { input: String },

    /// The checksum input is not exactly nine ASCII digits.
    #[error("{input} is not a valid checksum input, expects 9 digits")]
    InvalidDigits { input: String },

    /// The trailing check digit does not match the recomputed one.
    #[error(
        "{input} is not a valid personal identity number, check digit is {actual} but should be {expected}"
    )]
    ChecksumMismatch {
        input: String,
        expected: u8,
        actual: u8,
    },

    /// The number is valid but encodes the other sex.
    #[error("{input} is not a valid {expected} personal identity number")]
    WrongSex { input: String, expected: Sex },
}

impl PinError {
    /// Returns true if the input did not have the required fixed-width shape.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            PinError::InvalidDate { .. }
                | PinError::InvalidFormat { .. }
                | PinError::InvalidDigits { .. }
        )
    }

    /// Returns true if the input was well formed but its check digit was wrong.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, PinError::ChecksumMismatch { .. })
    }

    /// Returns true if the input was valid but belonged to the other sex.
    pub fn is_wrong_sex(&self) -> bool {
        matches!(self, PinError::WrongSex { .. })
    }

    /// The string the error was raised for.
    pub fn input(&self) -> &str {
        match self {
            PinError::InvalidDate { input }
            | PinError::InvalidFormat { input }
            | PinError::InvalidDigits { input }
            | PinError::ChecksumMismatch { input, .. }
            | PinError::WrongSex { input, .. } => input,
        }
    }
}
