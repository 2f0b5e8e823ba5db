//! Line-numbered token listing, the format the command-line tool prints.
//!
//! A listing starts with `#name "file"` and then has one `#<line> KIND "lexeme"`
//! entry per token. Diagnostics go to a separate writer so the listing stays
//! machine-readable.

use std::io::{self, Write};

use tracing::info;

use crate::{
    lexer::{
        lexer::{Lexer, ScanOptions},
        tokens::{Token, TokenKind},
    },
    render_error,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// Leave BLANK tokens out of the listing.
    pub skip_blanks: bool,
    /// Skip unrecognised characters instead of stopping at the first one.
    pub recover: bool,
    /// Only list these kinds; empty means every kind.
    pub kinds: Vec<TokenKind>,
}

impl ListingOptions {
    fn shows(&self, token: &Token) -> bool {
        if self.skip_blanks && token.is_blank() {
            return false;
        }

        self.kinds.is_empty() || self.kinds.contains(&token.kind)
    }
}

/// Scans `source` and writes its listing to `out` and its diagnostics to
/// `err`. Returns the number of unrecognised characters met.
pub fn write_listing<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    source: &str,
    file_name: &str,
    options: &ListingOptions,
) -> io::Result<usize> {
    writeln!(out, "#name {:?}", file_name)?;

    let scan_options = ScanOptions::default().with_error_recovery(options.recover);
    let lexer = Lexer::new(source.to_string(), Some(file_name.to_string())).with_options(scan_options);

    let mut errors = 0;

    for result in lexer {
        match result {
            Ok(token) if options.shows(&token) => writeln!(out, "#{} {}", token.line, token)?,
            Ok(_) => {}
            Err(error) => {
                errors += 1;
                write!(err, "{}", render_error(&error, source, file_name))?;
            }
        }
    }

    info!(file = %file_name, errors, "listed");
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(source: &str, options: &ListingOptions) -> (String, String, usize) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let errors = write_listing(&mut out, &mut err, source, "test.cl", options).unwrap();

        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            errors,
        )
    }

    #[test]
    fn test_listing_header_and_lines() {
        let (out, err, errors) = listing("if\n  7", &ListingOptions::default());

        assert_eq!(
            out,
            "#name \"test.cl\"\n\
             #1 IF \"if\"\n\
             #1 BLANK \"\\n\"\n\
             #2 BLANK \" \"\n\
             #2 BLANK \" \"\n\
             #2 DIGIT \"7\"\n"
        );
        assert!(err.is_empty());
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_listing_skip_blanks() {
        let options = ListingOptions {
            skip_blanks: true,
            ..Default::default()
        };
        let (out, _, _) = listing("x <- 1;\n\nfi", &options);

        assert_eq!(
            out,
            "#name \"test.cl\"\n\
             #1 LOWERCASE_LETTER \"x\"\n\
             #1 OPERATOR \"<\"\n\
             #1 OPERATOR \"-\"\n\
             #1 DIGIT \"1\"\n\
             #1 SINGLE_CHAR_TOKEN \";\"\n\
             #3 FI \"fi\"\n"
        );
    }

    #[test]
    fn test_listing_kind_filter() {
        let options = ListingOptions {
            kinds: vec![TokenKind::IntConst, TokenKind::Class],
            ..Default::default()
        };
        let (out, _, _) = listing("class A\n{ 42 7 }\n", &options);

        assert_eq!(out, "#name \"test.cl\"\n#1 CLASS \"class\"\n#2 INT_CONST \"42\"\n");
    }

    #[test]
    fn test_listing_stops_at_first_error() {
        let (out, err, errors) = listing("a\nb#\nc", &ListingOptions::default());

        assert_eq!(out, "#name \"test.cl\"\n#1 LOWERCASE_LETTER \"a\"\n#1 BLANK \"\\n\"\n#2 LOWERCASE_LETTER \"b\"\n");
        assert_eq!(errors, 1);
        assert!(err.contains("-> test.cl"));
        assert!(err.contains("2 | b#"));
    }

    #[test]
    fn test_listing_lines_after_recovered_error() {
        let options = ListingOptions {
            skip_blanks: true,
            recover: true,
            ..Default::default()
        };
        let (out, err, errors) = listing("a\nb#\nc", &options);

        assert_eq!(
            out,
            "#name \"test.cl\"\n\
             #1 LOWERCASE_LETTER \"a\"\n\
             #2 LOWERCASE_LETTER \"b\"\n\
             #3 LOWERCASE_LETTER \"c\"\n"
        );
        assert_eq!(errors, 1);
        assert!(err.contains("UnrecognisedCharacter"));
    }
}
