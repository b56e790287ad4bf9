//! Random personal identity numbers.
//!
//! A [`Generator`] owns its random number generator and its [`Clock`], so
//! callers decide where entropy comes from. [`Generator::new`] draws from the
//! thread-local RNG, [`Generator::seeded`] is reproducible.

use chrono::DateTime;
use pin_common::{PinError, Separator};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::format;
use crate::identity::IdentityNumber;

pub mod clock;

use clock::{Clock, SystemClock};

/// Smallest serial handed out.
pub const SERIAL_MIN: u16 = 100;

/// Largest serial handed out.
pub const SERIAL_MAX: u16 = 999;

pub struct Generator<R, C> {
    rng: R,
    clock: C,
}

impl Generator<ThreadRng, SystemClock> {
    pub fn new() -> Self {
        Self::with_parts(rand::rng(), SystemClock)
    }
}

impl Default for Generator<ThreadRng, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<StdRng, SystemClock> {
    /// Same seed and same day give the same sequence of numbers.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R: Rng, C: Clock> Generator<R, C> {
    pub fn with_parts(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Generates a number for a random birth date between 1970-01-01 and now.
    ///
    /// # Errors
    /// Propagates [`Generator::generate_from_date`]; a formatted date is always
    /// eight digits, so this does not fail in practice.
    pub fn generate(&mut self) -> Result<IdentityNumber, PinError> {
        let date = self.random_date();
        self.generate_from_date(&date)
    }

    /// Generates a number for the given `YYYYMMDD` date with a random serial.
    ///
    /// # Errors
    /// Returns [`PinError::InvalidDate`] if `date` is not exactly eight ASCII digits.
    pub fn generate_from_date(&mut self, date: &str) -> Result<IdentityNumber, PinError> {
        if !format::is_date(date) {
            return Err(PinError::InvalidDate {
                input: date.to_string(),
            });
        }

        let serial: u16 = self.rng.random_range(SERIAL_MIN..=SERIAL_MAX);
        let pin = IdentityNumber::from_parts(date, Separator::Dash, serial);

        debug!(%pin, "generated personal identity number");
        Ok(pin)
    }

    /// Uniform over whole seconds from the UNIX epoch up to the clock's now, in UTC.
    fn random_date(&mut self) -> String {
        let max: i64 = self.clock.now().timestamp().max(0);
        let secs: i64 = self.rng.random_range(0..=max);

        DateTime::from_timestamp(secs, 0)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .format("%Y%m%d")
            .to_string()
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
