use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt::{self, Formatter};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumDiscriminants, EnumIter};

// Longest token the lexer will accept, counting the quotes of a string.
pub const MAX_TOKEN: usize = 1023;

#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(TokenType))]
pub enum Token {
    LBrace,
    RBrace,

    // A double quoted string, escapes already resolved
    Str(String),
    // Numbers, reserved words and identifiers
    Word(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Str(s) => write!(f, "\"{}\"", escape(s)),
            Self::Word(w) => write!(f, "{}", w),
        }
    }
}

impl Token {
    pub fn is(&self, token_type: TokenType) -> bool {
        TokenType::from(self) == token_type
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Word(w) => RESERVED_WORDS.get(w.as_str()).copied(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Keyword {
    #[strum(to_string = "print")]
    Print,
    #[strum(to_string = "add")]
    Add,
    #[strum(to_string = "sub")]
    Sub,
    #[strum(to_string = "mul")]
    Mul,
    #[strum(to_string = "div")]
    Div,
    #[strum(to_string = "equal")]
    Equal,
    #[strum(to_string = "less")]
    Less,
    #[strum(to_string = "not")]
    Not,
    #[strum(to_string = "and")]
    And,
    #[strum(to_string = "or")]
    Or,
    #[strum(to_string = "concat")]
    Concat,
    #[strum(to_string = "substr")]
    Substr,
    #[strum(to_string = "set")]
    Set,
    #[strum(to_string = "if")]
    If,
    #[strum(to_string = "while")]
    While,
}

lazy_static! {
    pub static ref RESERVED_WORDS: HashMap<String, Keyword> =
        Keyword::iter().map(|k| (k.to_string(), k)).collect();
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains_key(word)
}

/// Inverse of the escape handling in the lexer, so a string can be written
/// back out as source.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            c => escaped.push(c),
        }
    }
    escaped
}
