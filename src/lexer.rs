use crate::token::{Token, MAX_TOKEN};
use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub LexError

    TokenTooLong{line: usize} = "line {line}: token too long",
    UnterminatedString{line: usize, found: &'static str} = "line {line}: {found} while reading string literal",
    InvalidEscape{line: usize, ch: char} = "line {line}: invalid escape sequence \"\\{ch}\"",
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: usize,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '{' || c == '}' || c == '"' || c == '#'
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl Lexer {
    pub fn new(input: String) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
        };
        lexer.read_char();
        lexer
    }

    /// Number of lines read so far, starting from 1 like most editors.
    pub fn line(&self) -> usize {
        self.line
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.ch {
            None => return Ok(None),
            Some('{') => Token::LBrace,
            Some('}') => Token::RBrace,
            Some('"') => return self.read_string().map(Some),
            Some(_) => return self.read_word().map(Some),
        };
        self.read_char();
        Ok(Some(token))
    }

    fn read_word(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        while let Some(c) = self.ch {
            if is_delimiter(c) {
                break;
            }
            if self.position - start >= MAX_TOKEN {
                return Err(LexError::TokenTooLong { line: self.line });
            }
            self.read_char();
        }
        Ok(Token::Word(self.input[start..self.position].iter().collect()))
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let mut value = String::new();
        // The opening quote already counts against the limit.
        let mut len = 1;

        loop {
            self.read_char();
            let c = match self.ch {
                None => {
                    return Err(LexError::UnterminatedString {
                        line: self.line,
                        found: "end of input",
                    })
                }
                Some('\n') => {
                    return Err(LexError::UnterminatedString {
                        line: self.line,
                        found: "newline",
                    })
                }
                Some('"') => break,
                Some('\\') => {
                    self.read_char();
                    match self.ch {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some(ch) if ch != '\n' => {
                            return Err(LexError::InvalidEscape {
                                line: self.line,
                                ch,
                            })
                        }
                        Some(_) => {
                            return Err(LexError::UnterminatedString {
                                line: self.line,
                                found: "newline",
                            })
                        }
                        None => {
                            return Err(LexError::UnterminatedString {
                                line: self.line,
                                found: "end of input",
                            })
                        }
                    }
                }
                Some(c) => c,
            };

            // Leave room for the closing quote.
            if len + 1 >= MAX_TOKEN {
                return Err(LexError::TokenTooLong { line: self.line });
            }
            value.push(c);
            len += 1;
        }

        // Step past the closing quote.
        self.read_char();
        Ok(Token::Str(value))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.ch {
            if c == '#' {
                while !matches!(self.ch, None | Some('\n')) {
                    self.read_char();
                }
                continue;
            }
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.read_char();
        }
    }
}
