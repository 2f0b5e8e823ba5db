use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};
use thiserror::Error;

use crate::Span;

lazy_static! {
    pub static ref LABEL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL {
            map.insert(kind.label(), kind);
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Character classes
    Digit,
    LowercaseLetter,
    UppercaseLetter,
    Letter,
    Blank,
    Operator,
    SingleCharToken,

    // Reserved
    Class,
    Else,
    Fi,
    If,
    In,
    Inherits,
    Let,
    Loop,
    Pool,
    Then,
    While,
    Case,
    Esac,
    Of,
    New,
    IsVoid,
    Not,

    IntConst,
}

impl TokenKind {
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Digit,
        TokenKind::LowercaseLetter,
        TokenKind::UppercaseLetter,
        TokenKind::Letter,
        TokenKind::Blank,
        TokenKind::Operator,
        TokenKind::SingleCharToken,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::Fi,
        TokenKind::If,
        TokenKind::In,
        TokenKind::Inherits,
        TokenKind::Let,
        TokenKind::Loop,
        TokenKind::Pool,
        TokenKind::Then,
        TokenKind::While,
        TokenKind::Case,
        TokenKind::Esac,
        TokenKind::Of,
        TokenKind::New,
        TokenKind::IsVoid,
        TokenKind::Not,
        TokenKind::IntConst,
    ];

    /// The label consumers key on, e.g. `INT_CONST`.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Digit => "DIGIT",
            TokenKind::LowercaseLetter => "LOWERCASE_LETTER",
            TokenKind::UppercaseLetter => "UPPERCASE_LETTER",
            TokenKind::Letter => "LETTER",
            TokenKind::Blank => "BLANK",
            TokenKind::Operator => "OPERATOR",
            TokenKind::SingleCharToken => "SINGLE_CHAR_TOKEN",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::Fi => "FI",
            TokenKind::If => "IF",
            TokenKind::In => "IN",
            TokenKind::Inherits => "INHERITS",
            TokenKind::Let => "LET",
            TokenKind::Loop => "LOOP",
            TokenKind::Pool => "POOL",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::Case => "CASE",
            TokenKind::Esac => "ESAC",
            TokenKind::Of => "OF",
            TokenKind::New => "NEW",
            TokenKind::IsVoid => "ISVOID",
            TokenKind::Not => "NOT",
            TokenKind::IntConst => "INT_CONST",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Else
                | TokenKind::Fi
                | TokenKind::If
                | TokenKind::In
                | TokenKind::Inherits
                | TokenKind::Let
                | TokenKind::Loop
                | TokenKind::Pool
                | TokenKind::Then
                | TokenKind::While
                | TokenKind::Case
                | TokenKind::Esac
                | TokenKind::Of
                | TokenKind::New
                | TokenKind::IsVoid
                | TokenKind::Not
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown token kind `{0}`")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LABEL_LOOKUP
            .get(s)
            .copied()
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    /// 1-based line the lexeme starts on.
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_blank(&self) -> bool {
        self.kind == TokenKind::Blank
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// True for the single-character class tokens.
    pub fn is_character_class(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Digit,
            TokenKind::LowercaseLetter,
            TokenKind::UppercaseLetter,
            TokenKind::Letter,
            TokenKind::Blank,
            TokenKind::Operator,
            TokenKind::SingleCharToken,
        ])
    }
}
