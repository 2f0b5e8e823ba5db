//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position(10, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.character(), '#');
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.cl".to_string()));
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '$' }, pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position(3, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised character: '#' at offset 3");
    assert_eq!(
        error.get_error_impl().to_string(),
        "unrecognised character: '#'"
    );
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '[' },
        Position(0, Rc::new("test.cl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`[`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_control_character() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '\0' },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_tip().to_string(), "Remove the control character '\\0'");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
