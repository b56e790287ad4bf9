//! Types shared between the `pin` core library and its command line front-end.
//!
//! * **[`error`]**: the [`PinError`] returned by every fallible operation.
//! * **[`identity`]**: small value types describing parts of a personal identity number.
//! * **[`config`]**: output settings handed from the CLI to the terminal layer.

pub mod config;
pub mod error;
pub mod identity;

pub use error::PinError;
pub use identity::separator::Separator;
pub use identity::sex::Sex;
