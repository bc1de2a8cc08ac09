mod expression;
pub use expression::*;

use crate::token::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Operator {
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
    #[strum(to_string = "and")]
    And,
    #[strum(to_string = "or")]
    Or,
    #[strum(to_string = "concat")]
    Concat,
}

impl Operator {
    /// The binary operator a reserved word stands for, if it is one.
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Add => Self::Add,
            Keyword::Sub => Self::Sub,
            Keyword::Mul => Self::Mul,
            Keyword::Div => Self::Div,
            Keyword::Equal => Self::Equal,
            Keyword::Less => Self::Less,
            Keyword::And => Self::And,
            Keyword::Or => Self::Or,
            Keyword::Concat => Self::Concat,
            _ => return None,
        })
    }
}
