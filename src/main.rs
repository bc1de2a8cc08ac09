use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Runs a program written in a small language where every value is a string.
#[derive(Parser, Debug)]
#[command(name = "interpreter", version, about, long_about = None)]
struct Args {
    /// Source file holding the program to run.
    program: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = string_interpreter::run_file(&args.program, &mut out);
    // Whatever was printed before a failure still gets shown.
    let flushed = out.flush();

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
    if let Err(err) = flushed {
        eprintln!("unable to write output: {}", err);
        process::exit(1);
    }
}
