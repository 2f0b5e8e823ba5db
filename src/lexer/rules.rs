//! The pattern-to-token rule table and the maximal-munch selection over it.
//!
//! Rules are kept in priority order. At every cursor position each rule
//! reports the longest prefix it can match; the longest match wins and,
//! among equally long matches, the rule declared first wins.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_KEYWORD_RULE, MK_RULE};

use super::tokens::TokenKind;

#[derive(Debug, Clone)]
pub enum Pattern {
    /// Anchored regular expression; only a match at offset 0 counts.
    Regex(Regex),
    /// Literal compared without regard to ASCII case.
    Keyword(&'static str),
}

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    kind: TokenKind,
}

impl Rule {
    pub fn new(pattern: Pattern, kind: TokenKind) -> Self {
        Rule { pattern, kind }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in bytes of the longest prefix of `input` this rule matches,
    /// zero when it does not match at all.
    pub fn match_len(&self, input: &str) -> usize {
        match &self.pattern {
            Pattern::Regex(regex) => regex
                .find(input)
                .filter(|m| m.start() == 0)
                .map(|m| m.end())
                .unwrap_or(0),
            Pattern::Keyword(literal) => input
                .get(..literal.len())
                .filter(|window| window.eq_ignore_ascii_case(literal))
                .map(|window| window.len())
                .unwrap_or(0),
        }
    }
}

lazy_static! {
    pub static ref RULES: Vec<Rule> = vec![
        MK_RULE!("[0-9]", TokenKind::Digit),
        MK_RULE!("[a-z]", TokenKind::LowercaseLetter),
        MK_RULE!("[A-Z]", TokenKind::UppercaseLetter),
        MK_RULE!("[a-zA-Z]", TokenKind::Letter),
        MK_RULE!("[ \\n\\x0C\\r\\t\\x0B]", TokenKind::Blank),
        MK_RULE!("[+\\-*/<]", TokenKind::Operator),
        MK_RULE!("[{}():;@.,=~]", TokenKind::SingleCharToken),
        MK_KEYWORD_RULE!("class", TokenKind::Class),
        MK_KEYWORD_RULE!("else", TokenKind::Else),
        MK_KEYWORD_RULE!("fi", TokenKind::Fi),
        MK_KEYWORD_RULE!("if", TokenKind::If),
        MK_KEYWORD_RULE!("in", TokenKind::In),
        MK_KEYWORD_RULE!("inherits", TokenKind::Inherits),
        MK_KEYWORD_RULE!("let", TokenKind::Let),
        MK_KEYWORD_RULE!("loop", TokenKind::Loop),
        MK_KEYWORD_RULE!("pool", TokenKind::Pool),
        MK_KEYWORD_RULE!("then", TokenKind::Then),
        MK_KEYWORD_RULE!("while", TokenKind::While),
        MK_KEYWORD_RULE!("case", TokenKind::Case),
        MK_KEYWORD_RULE!("esac", TokenKind::Esac),
        MK_KEYWORD_RULE!("of", TokenKind::Of),
        MK_KEYWORD_RULE!("new", TokenKind::New),
        MK_KEYWORD_RULE!("isvoid", TokenKind::IsVoid),
        MK_KEYWORD_RULE!("not", TokenKind::Not),
        MK_RULE!("[0-9]+", TokenKind::IntConst),
    ];
}

/// Picks the winning rule for the start of `input`.
///
/// Returns the rule and its match length, or `None` if no rule matches a
/// non-empty prefix. Ties on length go to the earliest rule in `rules`.
pub fn longest_match<'r>(rules: &'r [Rule], input: &str) -> Option<(&'r Rule, usize)> {
    let mut best: Option<(&'r Rule, usize)> = None;

    for rule in rules {
        let len = rule.match_len(input);

        if len > best.map(|(_, best_len)| best_len).unwrap_or(0) {
            best = Some((rule, len));
        }
    }

    best
}
