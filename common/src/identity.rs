//! # Identity Number Parts
//!
//! Value types for the pieces of a personal identity number that carry a
//! meaning of their own:
//! * [`separator::Separator`]: the character between date and serial (`-` or `+`).
//! * [`sex::Sex`]: encoded by the parity of the last serial digit.

pub mod separator;
pub mod sex;
