use crate::ast::{self, Expression, Operator};
use crate::lexer::{LexError, Lexer};
use crate::token::{self, Keyword, Token, TokenType};
use custom_error::custom_error;
use log::trace;

// Longest name a variable may be given.
pub const MAX_VAR_NAME: usize = 20;

// Deepest expressions may nest. Parsing and evaluation both recurse once per
// level, so this also bounds the evaluator's stack use.
pub const MAX_DEPTH: usize = 128;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub ParseError

    Lex{source: LexError} = "{source}",
    TokenExpected{line: usize} = "line {line}: token expected",
    EmptyCompound{line: usize} = "line {line}: empty compound expression",
    InvalidToken{line: usize, token: String} = "line {line}: invalid token \"{token}\"",
    UnexpectedToken{line: usize, token: String} = "line {line}: unexpected token \"{token}\"",
    InvalidVariableName{line: usize, name: String} = "line {line}: invalid variable name \"{name}\"",
    TooDeep{line: usize} = "line {line}: expressions nested too deeply",
}

pub type Result<T> = std::result::Result<T, ParseError>;

pub struct Parser {
    lexer: Lexer,
    depth: usize,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self { lexer, depth: 0 }
    }

    pub fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Parse the single expression making up a whole program. Anything left
    /// over after it is an error.
    pub fn parse_program(mut self) -> Result<Expression> {
        let token = self.expect_token()?;
        let program = self.parse(token)?;

        if let Some(token) = self.lexer.next_token()? {
            return Err(ParseError::UnexpectedToken {
                line: self.line(),
                token: token.to_string(),
            });
        }

        Ok(program)
    }

    fn expect_token(&mut self) -> Result<Token> {
        match self.lexer.next_token()? {
            Some(token) => Ok(token),
            None => Err(ParseError::TokenExpected { line: self.line() }),
        }
    }

    fn parse_next(&mut self) -> Result<Box<Expression>> {
        let token = self.expect_token()?;
        self.parse(token).map(Box::new)
    }

    /// Parse one expression, given the token it starts with.
    pub fn parse(&mut self, token: Token) -> Result<Expression> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { line: self.line() });
        }

        self.depth += 1;
        let expr = self.parse_expression(token);
        self.depth -= 1;
        expr
    }

    fn parse_expression(&mut self, token: Token) -> Result<Expression> {
        match token {
            Token::Word(word) if ast::is_integer_literal(&word) => Ok(Expression::Literal(word)),
            Token::Str(value) => Ok(Expression::Literal(value)),
            Token::LBrace => self.parse_compound(),
            Token::Word(_) => match token.keyword() {
                Some(keyword) => self.parse_keyword(keyword),
                None => self.parse_variable(token),
            },
            Token::RBrace => Err(ParseError::InvalidToken {
                line: self.line(),
                token: token.to_string(),
            }),
        }
    }

    fn parse_compound(&mut self) -> Result<Expression> {
        let mut exprs = vec![];

        loop {
            let token = self.expect_token()?;
            if token.is(TokenType::RBrace) {
                break;
            }
            exprs.push(self.parse(token)?);
        }

        if exprs.is_empty() {
            return Err(ParseError::EmptyCompound { line: self.line() });
        }

        trace!("parsed compound of {} expressions", exprs.len());
        Ok(Expression::Compound(exprs))
    }

    fn parse_keyword(&mut self, keyword: Keyword) -> Result<Expression> {
        let line = self.line();

        if let Some(operator) = Operator::from_keyword(keyword) {
            let left = self.parse_next()?;
            let right = self.parse_next()?;
            return Ok(Expression::Binary(ast::BinaryExpression {
                operator,
                left,
                right,
                line,
            }));
        }

        Ok(match keyword {
            Keyword::Print => Expression::Print(self.parse_next()?),
            Keyword::Not => Expression::Not(self.parse_next()?),
            Keyword::Set => {
                let name = self.parse_variable_name()?;
                let value = self.parse_next()?;
                Expression::Set(ast::SetExpression { name, value })
            }
            Keyword::If => {
                let condition = self.parse_next()?;
                let body = self.parse_next()?;
                Expression::If(ast::IfExpression { condition, body })
            }
            Keyword::While => {
                let condition = self.parse_next()?;
                let body = self.parse_next()?;
                Expression::While(ast::WhileExpression { condition, body })
            }
            Keyword::Substr => {
                let source = self.parse_next()?;
                let start = self.parse_next()?;
                let end = self.parse_next()?;
                Expression::Substr(ast::SubstrExpression {
                    source,
                    start,
                    end,
                    line,
                })
            }
            // Binary operators were handled above
            _ => unreachable!("keyword {} has no parse rule", keyword),
        })
    }

    fn parse_variable(&mut self, token: Token) -> Result<Expression> {
        match token {
            Token::Word(word) if starts_alphabetic(&word) => Ok(Expression::Variable(word)),
            token => Err(ParseError::InvalidToken {
                line: self.line(),
                token: token.to_string(),
            }),
        }
    }

    fn parse_variable_name(&mut self) -> Result<String> {
        match self.expect_token()? {
            Token::Word(name)
                if starts_alphabetic(&name)
                    && name.chars().count() <= MAX_VAR_NAME
                    && !token::is_reserved(&name) =>
            {
                Ok(name)
            }
            other => Err(ParseError::InvalidVariableName {
                line: self.line(),
                name: other.to_string(),
            }),
        }
    }
}

fn starts_alphabetic(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_alphabetic)
}

/// Parse a whole program from source text.
pub fn parse(input: &str) -> Result<Expression> {
    Parser::new(Lexer::new(input.to_owned())).parse_program()
}
