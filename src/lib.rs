pub mod ast;
mod environment;
pub mod evaluator;
pub mod lexer;
pub mod parser;
mod token;

pub use environment::Environment;
pub use evaluator::EvalError;
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use token::{Keyword, Token, TokenType};

use custom_error::custom_error;
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

custom_error! {
    pub RunError

    Open{path: PathBuf, source: io::Error} = @{ format!("Can't open file: {} ({})", path.display(), source) },
    Parse{source: ParseError} = "{source}",
    Eval{source: EvalError} = "{source}",
}

/// Parse a whole program and run it under a fresh environment. The value of
/// the program itself is thrown away; only what it prints matters.
pub fn run(source: &str, out: &mut dyn Write) -> Result<(), RunError> {
    let program = parser::parse(source)?;
    debug!("parsed program: {}", program);

    let mut env = Environment::new();
    let result = evaluator::eval(&program, &mut env, out)?;
    debug!(
        "program finished with {:?}, {} variables bound",
        result,
        env.len()
    );
    Ok(())
}

pub fn run_file(path: &Path, out: &mut dyn Write) -> Result<(), RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Open {
        path: path.to_owned(),
        source,
    })?;
    run(&source, out)
}
