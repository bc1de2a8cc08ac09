use super::Operator;
use crate::token::escape;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(String),
    Variable(String),
    Print(Box<Expression>),
    Compound(Vec<Expression>),
    Binary(BinaryExpression),
    Not(Box<Expression>),
    Substr(SubstrExpression),
    Set(SetExpression),
    If(IfExpression),
    While(WhileExpression),
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Literal(value) => {
                if is_integer_literal(value) {
                    write!(f, "{}", value)
                } else {
                    write!(f, "\"{}\"", escape(value))
                }
            }
            Self::Variable(name) => write!(f, "{}", name),
            Self::Print(operand) => write!(f, "print {}", operand),
            Self::Compound(exprs) => {
                let parts: Vec<String> = exprs.iter().map(Expression::to_string).collect();
                write!(f, "{{ {} }}", parts.join(" "))
            }
            Self::Binary(expr) => write!(f, "{}", expr),
            Self::Not(operand) => write!(f, "not {}", operand),
            Self::Substr(expr) => write!(f, "{}", expr),
            Self::Set(expr) => write!(f, "{}", expr),
            Self::If(expr) => write!(f, "{}", expr),
            Self::While(expr) => write!(f, "{}", expr),
        }
    }
}

/// Whether a bare word reads as an integer literal: an optional sign
/// followed by at least one decimal digit, and nothing else.
pub fn is_integer_literal(word: &str) -> bool {
    let digits = word
        .strip_prefix('-')
        .or_else(|| word.strip_prefix('+'))
        .unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: Operator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub line: usize,
}

impl Display for BinaryExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.operator, self.left, self.right)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubstrExpression {
    pub source: Box<Expression>,
    pub start: Box<Expression>,
    pub end: Box<Expression>,
    pub line: usize,
}

impl Display for SubstrExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "substr {} {} {}", self.source, self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetExpression {
    pub name: String,
    pub value: Box<Expression>,
}

impl Display for SetExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "set {} {}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub body: Box<Expression>,
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "if {} {}", self.condition, self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpression {
    pub condition: Box<Expression>,
    pub body: Box<Expression>,
}

impl Display for WhileExpression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "while {} {}", self.condition, self.body)
    }
}
