//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer that converts source text into a stream
//! of tokens. It handles:
//!
//! - A priority-ordered rule table of character classes, keywords and
//!   integer constants
//! - Maximal-munch matching with earliest-rule tie-breaking
//! - Case-insensitive keyword recognition
//! - Token position tracking for error reporting

pub mod lexer;
pub mod rules;
pub mod tokens;
