//! # pin-core
//!
//! Generates and validates Swedish personal identity numbers of the form
//! `YYYYMMDD-NNNC`: birth date, separator, three digit serial and check digit.
//!
//! ## Layout
//! * **[`format`]**: fixed-width shape predicates for dates and numbers.
//! * **[`checksum`]**: the weighted Luhn-style check digit.
//! * **[`identity`]**: the validated [`IdentityNumber`] and its queries.
//! * **[`generator`]**: random numbers from an injected RNG and clock.
//!
//! The free functions below cover the common cases. Each check comes as a
//! `validate*` function that explains a failure and an `is_*` function that
//! only answers yes or no.
//!
//! ```
//! let pin = pin_core::generate_from_date("19901121").unwrap();
//! assert!(pin_core::is_valid(&pin.to_string()));
//! assert!(pin_core::is_male("19901121-8774"));
//! assert!(pin_core::validate_female("19901121-8774").is_err());
//! ```

pub mod checksum;
pub mod format;
pub mod generator;
pub mod identity;

use pin_common::{PinError, Sex};

pub use checksum::compute_check_digit;
pub use generator::Generator;
pub use generator::clock::{Clock, FixedClock, SystemClock};
pub use identity::IdentityNumber;

/// Generates a number for a random birth date between 1970-01-01 and today.
pub fn generate() -> Result<IdentityNumber, PinError> {
    Generator::new().generate()
}

/// Generates a number with a random serial for a `YYYYMMDD` date.
pub fn generate_from_date(date: &str) -> Result<IdentityNumber, PinError> {
    Generator::new().generate_from_date(date)
}

/// Validates format and check digit.
pub fn validate(pin: &str) -> Result<IdentityNumber, PinError> {
    IdentityNumber::parse(pin)
}

pub fn is_valid(pin: &str) -> bool {
    validate(pin).is_ok()
}

/// Validates `pin` and requires it to belong to a man.
pub fn validate_male(pin: &str) -> Result<IdentityNumber, PinError> {
    validate(pin)?.ensure_sex(Sex::Male)
}

/// Validates `pin` and requires it to belong to a woman.
pub fn validate_female(pin: &str) -> Result<IdentityNumber, PinError> {
    validate(pin)?.ensure_sex(Sex::Female)
}

/// False for invalid numbers as well as for women.
pub fn is_male(pin: &str) -> bool {
    validate_male(pin).is_ok()
}

/// False for invalid numbers as well as for men.
pub fn is_female(pin: &str) -> bool {
    validate_female(pin).is_ok()
}
