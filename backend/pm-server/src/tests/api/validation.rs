use crate::ApiError;
use crate::api::validation::{email, optional_description, password, required_title};

use pm_config::ValidationConfig;

use googletest::prelude::*;

fn limits() -> ValidationConfig {
    ValidationConfig {
        max_title_length: 10,
        max_description_length: 20,
        min_password_length: 8,
    }
}

#[test]
fn given_padded_title_when_validated_then_trimmed() {
    // Given
    let limits = limits();

    // When
    let title = required_title("title", "  Ship it  ", &limits).unwrap();

    // Then
    assert_that!(title, eq("Ship it"));
}

#[test]
fn given_blank_title_when_validated_then_field_error() {
    // Given
    let limits = limits();

    // When
    let error = required_title("title", "   ", &limits).unwrap_err();

    // Then
    let field = match error {
        ApiError::Validation { field, .. } => field,
        _ => None,
    };
    assert_that!(field, some(eq("title")));
}

#[test]
fn given_title_over_limit_when_validated_then_rejected() {
    // Given
    let limits = limits();

    // When
    let result = required_title("name", "eleven char", &limits);

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_multibyte_title_at_limit_when_validated_then_accepted() {
    // Given
    let limits = limits();

    // When
    let title = required_title("title", "ääääääääää", &limits).unwrap();

    // Then
    assert_that!(title.chars().count(), eq(10));
}

#[test]
fn given_blank_description_when_validated_then_none() {
    // Given
    let limits = limits();

    // When
    let description = optional_description(Some("  \n "), &limits).unwrap();

    // Then
    assert_that!(description, none());
}

#[test]
fn given_long_description_when_validated_then_rejected() {
    // Given
    let limits = limits();
    let text = "x".repeat(21);

    // When
    let result = optional_description(Some(&text), &limits);

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_mixed_case_email_when_validated_then_lowercased() {
    // When
    let normalized = email(" Ada@Example.COM ").unwrap();

    // Then
    assert_that!(normalized, eq("ada@example.com"));
}

#[test]
fn given_email_without_at_when_validated_then_rejected() {
    // When
    let result = email("ada.example.com");

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_short_password_when_validated_then_rejected() {
    // Given
    let limits = limits();

    // When
    let short = password("1234567", &limits);
    let exact = password("12345678", &limits);

    // Then
    assert_that!(short.is_err(), eq(true));
    assert_that!(exact.is_ok(), eq(true));
}
