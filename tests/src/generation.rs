use chrono::{NaiveDate, TimeZone, Utc};
use pin_common::PinError;
use pin_core::{FixedClock, Generator, IdentityNumber};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Every number from the default generator must pass validation.
#[test]
fn generate_is_always_valid() {
    for _ in 0..500 {
        let pin: IdentityNumber = pin_core::generate().unwrap();
        let text: String = pin.to_string();
        assert_eq!(text.len(), 13);
        assert!(pin_core::is_valid(&text), "{text} failed validation");
    }
}

#[test]
fn generate_from_date_round_trips() {
    for date in ["19901121", "19840707", "20000229", "00000000", "99999999"] {
        let pin: IdentityNumber = pin_core::generate_from_date(date).unwrap();
        let text: String = pin.to_string();

        assert!(text.starts_with(&format!("{date}-")), "{text} lost its date");
        assert_eq!(pin_core::validate(&text), Ok(pin));
    }
}

#[test]
fn generate_from_date_rejects_bad_dates() {
    let err: PinError = pin_core::generate_from_date("1990-11-21").unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(err.input(), "1990-11-21");
}

/// Birth dates fall between the epoch and the injected "now".
#[test]
fn generated_dates_respect_clock() {
    let now = Utc.with_ymd_and_hms(1971, 1, 1, 0, 0, 0).unwrap();
    let mut generator = Generator::with_parts(StdRng::seed_from_u64(11), FixedClock(now));

    for _ in 0..100 {
        let pin: IdentityNumber = generator.generate().unwrap();
        let born: NaiveDate = pin.birth_date().expect("generated dates are real days");
        assert!(pin.date().starts_with("197"), "{pin} born after the clock");
        assert!(born <= now.date_naive());
    }
}

#[test]
fn seeded_generators_agree() {
    let mut first = Generator::seeded(2024);
    let mut second = Generator::seeded(2024);

    for _ in 0..20 {
        assert_eq!(
            first.generate_from_date("19901121").unwrap(),
            second.generate_from_date("19901121").unwrap()
        );
    }
}

proptest! {
    #[test]
    fn any_date_generates_a_valid_number(date in "[0-9]{8}") {
        let pin: IdentityNumber = pin_core::generate_from_date(&date).unwrap();
        prop_assert!(pin_core::is_valid(&pin.to_string()));
        prop_assert!((100..=999).contains(&pin.serial()));
    }
}
