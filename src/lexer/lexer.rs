use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    rules::{longest_match, Rule, RULES},
    tokens::Token,
};

/// How the token iterator reacts to an unrecognised character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip the offending character and keep scanning instead of stopping
    /// after the first error.
    pub error_recovery: bool,
}

impl ScanOptions {
    pub fn with_error_recovery(mut self, enabled: bool) -> Self {
        self.error_recovery = enabled;
        self
    }
}

/// Scanner over a single source buffer.
///
/// `next_token` applies maximal munch with rule-priority tie-breaking at the
/// cursor and advances only on success. Errors leave the cursor in place;
/// `skip_char` is the explicit way past an unrecognised character. The
/// cursor never moves backwards, so a consumed lexer cannot be rewound. Build
/// a new one over the same source to rescan.
///
/// Offsets are stored as `u32`; positions past `u32::MAX` saturate, so
/// sources of 4 GiB or more report clamped offsets.
#[derive(Clone)]
pub struct Lexer<'r> {
    rules: &'r [Rule],
    source: String,
    pos: usize,
    line: usize,
    file: Rc<String>,
    options: ScanOptions,
    halted: bool,
}

impl Lexer<'static> {
    pub fn new(source: String, file: Option<String>) -> Lexer<'static> {
        Lexer::with_rules(source, file, &RULES)
    }
}

impl<'r> Lexer<'r> {
    pub fn with_rules(source: String, file: Option<String>, rules: &'r [Rule]) -> Lexer<'r> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            rules,
            source,
            pos: 0,
            line: 1,
            file: file_name,
            options: ScanOptions::default(),
            halted: false,
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) {
        self.line += self.source[self.pos..self.pos + n].matches('\n').count();
        self.pos += n;
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(clamp_offset(offset), Rc::clone(&self.file))
    }

    /// Produces the token at the cursor.
    ///
    /// `Ok(None)` means the input is exhausted. On `Err` the cursor is left
    /// on the offending character.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if self.at_eof() {
            return Ok(None);
        }

        let Some((rule, len)) = longest_match(self.rules, self.remainder()) else {
            let character = self.at().unwrap_or('\0');
            debug!(offset = self.pos, ?character, "unrecognised character");

            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character },
                self.position_at(self.pos),
            ));
        };

        let start = self.pos;
        let token = MK_TOKEN!(
            rule.kind(),
            String::from(&self.source[start..start + len]),
            Span {
                start: self.position_at(start),
                end: self.position_at(start + len),
            },
            self.line
        );
        self.advance_n(len);

        trace!(kind = %token.kind, value = ?token.value, offset = start, line = token.line, "token");
        Ok(Some(token))
    }

    /// Steps over one character without producing a token, returning it.
    pub fn skip_char(&mut self) -> Option<char> {
        let character = self.at()?;
        debug!(offset = self.pos, ?character, "skipping character");

        self.advance_n(character.len_utf8());
        Some(character)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.halted = true;
                None
            }
            Err(error) => {
                if self.options.error_recovery {
                    self.skip_char();
                } else {
                    self.halted = true;
                }
                Some(Err(error))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

pub(crate) fn clamp_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Scans all of `source`, stopping at the first unrecognised character.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source, file).collect::<Result<Vec<Token>, Error>>()?;

    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Scans all of `source`, skipping each unrecognised character and
/// collecting an error for it.
pub fn tokenize_recovering(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let lexer = Lexer::new(source, file)
        .with_options(ScanOptions::default().with_error_recovery(true));

    let mut tokens = vec![];
    let mut errors = vec![];

    for result in lexer {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }

    debug!(count = tokens.len(), errors = errors.len(), "tokenized with recovery");
    (tokens, errors)
}
