//! Check digit of a personal identity number.
//!
//! A Luhn variant over nine digits: the last six of the date followed by the
//! three serial digits. Weights alternate 2, 1, 2, ... starting at the first
//! digit, two-digit products are folded into their digit sum, and the check
//! digit is `(10 - sum % 10) % 10`.

use pin_common::PinError;
use tracing::trace;

/// Number of digits the check digit is computed over.
pub const CHECKSUM_INPUT_LEN: usize = 9;

/// Computes the check digit for nine ASCII digits.
///
/// # Errors
/// Returns [`PinError::InvalidDigits`] if `digits` is not exactly nine ASCII digits.
pub fn compute_check_digit(digits: &str) -> Result<u8, PinError> {
    let values = to_digits(digits).ok_or_else(|| PinError::InvalidDigits {
        input: digits.to_string(),
    })?;

    Ok(check_digit(&values))
}

/// Computes the check digit for nine digit values in `0..=9`.
pub fn check_digit(digits: &[u8; CHECKSUM_INPUT_LEN]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| weighted(i, digit))
        .sum();

    trace!(sum, "weighted digit sum");

    ((10 - sum % 10) % 10) as u8
}

fn weighted(position: usize, digit: u8) -> u32 {
    let weight: u32 = if position % 2 == 0 { 2 } else { 1 };
    let product: u32 = u32::from(digit) * weight;

    if product >= 10 {
        product - 10 + 1
    } else {
        product
    }
}

fn to_digits(s: &str) -> Option<[u8; CHECKSUM_INPUT_LEN]> {
    let bytes = s.as_bytes();
    if bytes.len() != CHECKSUM_INPUT_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut values = [0u8; CHECKSUM_INPUT_LEN];
    for (value, byte) in values.iter_mut().zip(bytes) {
        *value = byte - b'0';
    }
    Some(values)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
