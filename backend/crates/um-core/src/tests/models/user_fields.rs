use crate::{CoreError, MAX_FIELD_LENGTH, UserFields};

use googletest::prelude::*;

#[test]
fn given_padded_input_when_normalized_then_fields_are_canonical() {
    let fields = UserFields::normalized(" Jo ", " Doe ", " Jo@Example.com ");

    assert_that!(fields.first_name.as_str(), eq("Jo"));
    assert_that!(fields.last_name.as_str(), eq("Doe"));
    assert_that!(fields.email.as_str(), eq("jo@example.com"));
}

#[test]
fn given_valid_fields_when_validated_then_ok() {
    let result = UserFields::normalized("Jo", "Doe", "jo@example.com").validated();

    assert_that!(result, ok(anything()));
}

#[test]
fn given_whitespace_only_first_name_when_validated_then_first_name_rejected() {
    let result = UserFields::normalized("   ", "Doe", "jo@example.com").validated();

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("firstName"));
        }
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn given_empty_last_name_when_validated_then_last_name_rejected() {
    let result = UserFields::normalized("Jo", "", "jo@example.com").validated();

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("lastName"));
        }
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn given_malformed_email_when_validated_then_email_rejected() {
    let result = UserFields::normalized("Jo", "Doe", "not-an-email").validated();

    match result {
        Err(CoreError::Validation { field, message, .. }) => {
            assert_eq!(field.as_deref(), Some("email"));
            assert!(message.starts_with("email"));
        }
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn given_name_at_limit_when_validated_then_ok() {
    let name = "a".repeat(MAX_FIELD_LENGTH);
    let result = UserFields::normalized(&name, "Doe", "jo@example.com").validated();

    assert_that!(result, ok(anything()));
}

#[test]
fn given_name_over_limit_when_validated_then_rejected() {
    let name = "a".repeat(MAX_FIELD_LENGTH + 1);
    let result = UserFields::normalized("Jo", &name, "jo@example.com").validated();

    assert_that!(result, err(anything()));
}

#[test]
fn given_multibyte_name_at_limit_when_validated_then_ok() {
    // 255 characters, 510 bytes
    let name = "é".repeat(MAX_FIELD_LENGTH);
    let result = UserFields::normalized(&name, "Doe", "jo@example.com").validated();

    assert_that!(result, ok(anything()));
}
