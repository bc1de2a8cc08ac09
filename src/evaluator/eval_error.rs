use custom_error::custom_error;
use std::io;

custom_error! {
    pub EvalError

    DivideByZero{line: usize} = "line {line}: divide by zero",
    InvalidSubstring{line: usize, start: i64, end: i64} = "line {line}: substring start {start} is past its end {end}",
    Output{source: io::Error} = "unable to write output: {source}",
}
