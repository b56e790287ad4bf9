use pin_common::{PinError, Separator, Sex};
use pin_core::IdentityNumber;
use proptest::prelude::*;

/*************************************************************
                    Fixed validity vectors
**************************************************************/

#[test]
fn rejects_numbers_without_century() {
    for pin in ["9011218774", "901121-8774", "901121+8774"] {
        let result: Result<IdentityNumber, PinError> = pin_core::validate(pin);
        assert!(
            matches!(result, Err(PinError::InvalidFormat { .. })),
            "{pin} should have failed on format, got {result:?}"
        );
    }
}

#[test]
fn accepts_both_separators() {
    let dash: IdentityNumber = pin_core::validate("19901121-8774").unwrap();
    let plus: IdentityNumber = pin_core::validate("19901121+8774").unwrap();

    assert_eq!(dash.separator(), Separator::Dash);
    assert_eq!(plus.separator(), Separator::Plus);
    assert_eq!(dash.check_digit(), plus.check_digit());
}

#[test]
fn error_message_names_the_input() {
    let err: PinError = pin_core::validate("19901121-8770").unwrap_err();
    assert!(err.is_checksum_error());
    assert!(
        err.to_string().starts_with("19901121-8770 "),
        "unexpected message: {err}"
    );
}

/*************************************************************
                      Sex from the serial
**************************************************************/

#[test]
fn male_vector() {
    assert!(pin_core::validate_male("19901121-8774").is_ok());
    assert!(pin_core::is_male("19901121-8774"));

    let err: PinError = pin_core::validate_female("19901121-8774").unwrap_err();
    assert_eq!(
        err,
        PinError::WrongSex {
            input: "19901121-8774".to_string(),
            expected: Sex::Female,
        }
    );
}

#[test]
fn female_vector() {
    assert!(pin_core::validate_female("19131221-7324").is_ok());
    assert!(pin_core::is_female("19131221-7324"));
    assert!(!pin_core::is_male("19131221-7324"));
    assert!(pin_core::validate_male("19131221-7324").unwrap_err().is_wrong_sex());
}

#[test]
fn invalid_numbers_have_no_sex() {
    for pin in ["19901121-8775", "901121-8774", "not a number"] {
        assert!(!pin_core::is_male(pin), "{pin} reported as male");
        assert!(!pin_core::is_female(pin), "{pin} reported as female");
        assert!(!pin_core::validate_male(pin).unwrap_err().is_wrong_sex());
    }
}

/*************************************************************
                         Properties
**************************************************************/

/// Builds a correctly checksummed number from arbitrary parts.
fn checksummed(date: &str, serial: &str, separator: char) -> String {
    let digits: String = format!("{}{}", &date[2..], serial);
    let check: u8 = pin_core::compute_check_digit(&digits).unwrap();
    format!("{date}{separator}{serial}{check}")
}

proptest! {
    #[test]
    fn exactly_one_sex_for_valid_numbers(
        date in "[0-9]{8}",
        serial in "[0-9]{3}",
        separator in prop::sample::select(vec!['-', '+']),
    ) {
        let pin: String = checksummed(&date, &serial, separator);
        prop_assert!(pin_core::is_valid(&pin));
        prop_assert_ne!(pin_core::is_male(&pin), pin_core::is_female(&pin));
    }

    #[test]
    fn display_preserves_input(
        date in "[0-9]{8}",
        serial in "[0-9]{3}",
        separator in prop::sample::select(vec!['-', '+']),
    ) {
        let pin: String = checksummed(&date, &serial, separator);
        let parsed: IdentityNumber = pin.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), pin);
    }

    #[test]
    fn wrong_check_digit_is_rejected(
        date in "[0-9]{8}",
        serial in "[0-9]{3}",
        shift in 1u8..=9,
    ) {
        let pin: String = checksummed(&date, &serial, '-');
        let check: u8 = pin.as_bytes()[12] - b'0';
        let broken: String = format!("{}{}", &pin[..12], (check + shift) % 10);

        let err: PinError = pin_core::validate(&broken).unwrap_err();
        prop_assert!(err.is_checksum_error());
    }
}
