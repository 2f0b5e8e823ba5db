//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer and its rule table:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a regex-backed rule for a character class or run
//! - `MK_KEYWORD_RULE!` - Creates a case-insensitive keyword rule
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched lexeme
/// * `$span` - The source span
/// * `$line` - The 1-based line the lexeme starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConst, "42".to_string(), span, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            line: $line,
        }
    };
}

/// Creates a rule whose pattern is a regular expression.
///
/// The pattern is anchored to the start of the remaining input, so the
/// rule only ever matches a prefix. Panics if the pattern does not compile,
/// which makes it suitable only for patterns fixed at build time.
///
/// # Arguments
///
/// * `$pattern` - The regex source, without anchors
/// * `$kind` - The TokenKind produced on a match
///
/// # Example
///
/// ```ignore
/// MK_RULE!("[0-9]+", TokenKind::IntConst)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal, $kind:expr) => {
        $crate::lexer::rules::Rule::new(
            $crate::lexer::rules::Pattern::Regex(
                $crate::regex::Regex::new(concat!("\\A(?:", $pattern, ")")).unwrap(),
            ),
            $kind,
        )
    };
}

/// Creates a rule matching a keyword literal, ignoring ASCII case.
///
/// # Example
///
/// ```ignore
/// MK_KEYWORD_RULE!("class", TokenKind::Class)
/// ```
#[macro_export]
macro_rules! MK_KEYWORD_RULE {
    ($literal:literal, $kind:expr) => {
        $crate::lexer::rules::Rule::new($crate::lexer::rules::Pattern::Keyword($literal), $kind)
    };
}
