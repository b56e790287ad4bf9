use pin_common::Sex;
use tracing::debug;

/// Validates `pin`, and its sex when `expected` is given. Prints nothing on success.
pub fn check(pin: &str, expected: Option<Sex>) -> anyhow::Result<()> {
    let pin = match expected {
        None => pin_core::validate(pin)?,
        Some(Sex::Male) => pin_core::validate_male(pin)?,
        Some(Sex::Female) => pin_core::validate_female(pin)?,
    };

    debug!(
        %pin,
        sex = %pin.sex(),
        centenarian = pin.is_centenarian(),
        "personal identity number accepted"
    );
    Ok(())
}
