//! Property-based tests for form validation and OTP entry

use emarket::shared::otp::{OtpEntry, OTP_LENGTH, OTP_LENGTH_MESSAGE};
use emarket::shared::validation::{validate_email, validate_login_fields, validate_register_fields, Field};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_email_without_at_is_invalid(s in "[^@]*") {
        prop_assert!(!validate_email(&s));
    }

    #[test]
    fn test_simple_emails_are_valid(email in "[a-z0-9]{1,10}@[a-z]{1,10}\\.[a-z]{1,5}") {
        prop_assert!(validate_email(&email));
    }

    #[test]
    fn test_email_with_whitespace_is_invalid(
        local in "[a-z]{1,8}",
        gap in "[ \t]{1,3}",
        domain in "[a-z]{1,8}\\.[a-z]{2,4}",
    ) {
        let email = format!("{local}{gap}@{domain}");
        prop_assert!(!validate_email(&email));
    }

    #[test]
    fn test_blank_fields_are_required(
        email in "[ \t]{0,5}",
        password in "[ \t]{0,5}",
        name in "[ \t]{0,5}",
    ) {
        let errors = validate_register_fields(&email, &password, &name, "", 6);
        prop_assert_eq!(errors.get(Field::Email), Some("Email is required"));
        prop_assert_eq!(errors.get(Field::Password), Some("Password is required"));
        prop_assert_eq!(errors.get(Field::Name), Some("Name is required"));
        prop_assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn test_short_password_is_rejected(password in "[a-z]{1,5}") {
        let errors = validate_login_fields("a@b.co", &password, 6);
        prop_assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 6 characters")
        );
        prop_assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_valid_login_has_no_errors(
        email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}",
        password in "[a-zA-Z0-9]{6,20}",
    ) {
        prop_assert!(validate_login_fields(&email, &password, 6).is_empty());
    }

    #[test]
    fn test_six_digits_submit(code in "[0-9]{6}") {
        let mut entry = OtpEntry::new();
        for (index, digit) in code.chars().enumerate() {
            prop_assert!(entry.input(index, &digit.to_string()));
        }
        prop_assert!(entry.is_complete());
        prop_assert_eq!(entry.submit_code(), Ok(code));
    }

    #[test]
    fn test_partial_code_is_rejected(code in "[0-9]{0,5}") {
        let mut entry = OtpEntry::new();
        for (index, digit) in code.chars().enumerate() {
            entry.input(index, &digit.to_string());
        }
        let error = entry.submit_code().unwrap_err();
        prop_assert_eq!(error.user_message(), OTP_LENGTH_MESSAGE);
    }

    #[test]
    fn test_non_digit_input_is_ignored(index in 0..OTP_LENGTH, text in "[a-zA-Z]{1,3}|[0-9]{2,4}") {
        let mut entry = OtpEntry::new();
        prop_assert!(!entry.input(index, &text));
        prop_assert_eq!(entry.cell(index), None);
    }
}
