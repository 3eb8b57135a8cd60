//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedToken {
        token: "@".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(ErrorImpl::UnexpectedToken {
        expected: TokenKind::Identifier,
        found: TokenKind::Int,
    });

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got Int instead"
    );
}

#[test]
fn test_missing_prefix_handler_message() {
    let error: Error = ErrorImpl::MissingPrefixHandler {
        kind: TokenKind::Semicolon,
    }
    .into();

    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
    assert_eq!(error.to_string(), "no prefix parse function for Semicolon found");
}

#[test]
fn test_invalid_integer_message() {
    let error = Error::new(ErrorImpl::InvalidIntegerLiteral {
        literal: "99999999999999999999".to_string(),
    });

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Invalid integer: `99999999999999999999`, is it above the 64-bit limit?"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 });

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 8 levels");
}
