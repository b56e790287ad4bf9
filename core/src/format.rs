//! Fixed-width shape checks for dates and personal identity numbers.
//!
//! Only length, digits and the separator position are enforced. Century,
//! month and day are never range-checked.

use pin_common::Separator;

/// Length of a `YYYYMMDD` date.
pub const DATE_LEN: usize = 8;

/// Length of a full `YYYYMMDD-NNNC` personal identity number.
pub const PIN_LEN: usize = 13;

/// Byte offset of the separator in a personal identity number.
pub const SEPARATOR_INDEX: usize = DATE_LEN;

/// Returns true if `s` is exactly eight ASCII digits.
pub fn is_date(s: &str) -> bool {
    s.len() == DATE_LEN && all_digits(s.as_bytes())
}

/// Returns true if `s` is eight digits, a `-` or `+`, then four digits.
pub fn is_pin(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != PIN_LEN {
        return false;
    }

    all_digits(&bytes[..SEPARATOR_INDEX])
        && Separator::from_byte(bytes[SEPARATOR_INDEX]).is_some()
        && all_digits(&bytes[SEPARATOR_INDEX + 1..])
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
