use std::fs;
use std::path::PathBuf;

use string_interpreter::{run, run_file, EvalError, ParseError, RunError};

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    run(src, &mut out).unwrap_or_else(|e| panic!("Program failed:\n{}\nError: {}", src, e));
    String::from_utf8(out).expect("Output was not UTF-8")
}

fn error_of(src: &str) -> (RunError, String) {
    let mut out = Vec::new();
    let err = run(src, &mut out).expect_err("Program should have failed");
    (err, String::from_utf8(out).expect("Output was not UTF-8"))
}

fn temp_program(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "string-interpreter-{}-{}.txt",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).expect("Failed to write program file");
    path
}

#[test]
fn factorial() {
    let src = r#"
# Print factorials up to 6!
{
  set n 1
  set fact 1
  while less n 7 {
    set fact mul fact n
    print concat concat n "! = " fact
    set n add n 1
  }
}
"#;

    assert_eq!(
        output_of(src),
        "1! = 1\n2! = 2\n3! = 6\n4! = 24\n5! = 120\n6! = 720\n"
    );
}

#[test]
fn reverse_a_string() {
    let src = r#"
{
  set word "stressed"
  set i 8
  set result ""
  while less 0 i {
    set result concat result substr word sub i 1 i
    set i sub i 1
  }
  print result
}
"#;

    assert_eq!(output_of(src), "desserts\n");
}

#[test]
fn fizzbuzz() {
    let src = r#"
{
  set i 1
  while not less 15 i {
    set line ""
    if equal 0 sub i mul div i 3 3 set line "Fizz"
    if equal 0 sub i mul div i 5 5 set line concat line "Buzz"
    if not line set line i
    print line
    set i add i 1
  }
}
"#;

    let expected = [
        "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13",
        "14", "FizzBuzz",
    ];
    let lines: Vec<String> = output_of(src).lines().map(str::to_owned).collect();
    assert_eq!(lines, expected);
}

#[test]
fn escapes_reach_output() {
    assert_eq!(
        output_of(r#"print "say \"hi\"\tthen\\leave\n""#),
        "say \"hi\"\tthen\\leave\n\n"
    );
}

#[test]
fn trailing_token_is_rejected() {
    let (err, output) = error_of("{ print 1 }\n\n}");
    assert_eq!(err.to_string(), "line 3: unexpected token \"}\"");
    // Nothing runs when the program does not parse.
    assert_eq!(output, "");
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let (err, output) = error_of("{\n  print \"before\"\n  print div 1 0\n  print \"after\"\n}");

    assert!(matches!(
        err,
        RunError::Eval {
            source: EvalError::DivideByZero { line: 3 }
        }
    ));
    assert_eq!(err.to_string(), "line 3: divide by zero");
    assert_eq!(output, "before\n");
}

#[test]
fn parse_errors_carry_lines() {
    let cases = vec![
        ("{\n\n}", "line 3: empty compound expression"),
        ("{ print\n", "line 2: token expected"),
        ("\n@", "line 2: invalid token \"@\""),
        ("set 9 1", "line 1: invalid variable name \"9\""),
        ("print \"open\nclosed\"", "line 1: newline while reading string literal"),
    ];

    for (src, message) in cases.into_iter() {
        let (err, _) = error_of(src);
        assert!(matches!(err, RunError::Parse { .. }), "{}", src);
        assert_eq!(err.to_string(), message, "{}", src);
    }
}

#[test]
fn deep_nesting_is_rejected() {
    let src = format!("{{\n  print {}1\n}}", "not ".repeat(200_000));
    let (err, output) = error_of(&src);

    assert!(matches!(
        err,
        RunError::Parse {
            source: ParseError::TooDeep { line: 2 }
        }
    ));
    assert_eq!(err.to_string(), "line 2: expressions nested too deeply");
    assert_eq!(output, "");
}

#[test]
fn empty_program_is_rejected() {
    let (err, _) = error_of("# nothing but a comment\n");
    assert!(matches!(
        err,
        RunError::Parse {
            source: ParseError::TokenExpected { line: 2 }
        }
    ));
}

#[test]
fn runs_program_from_file() {
    let path = temp_program(
        "countdown",
        "{ set n 3 while n { print n set n sub n 1 if equal n 0 set n \"\" } }",
    );
    let mut out = Vec::new();

    run_file(&path, &mut out).expect("Program failed");
    fs::remove_file(&path).ok();

    assert_eq!(String::from_utf8(out).expect("Output was not UTF-8"), "3\n2\n1\n");
}

#[test]
fn missing_file_is_reported() {
    let path = std::env::temp_dir().join("string-interpreter-no-such-program.txt");
    let mut out = Vec::new();

    let err = run_file(&path, &mut out).expect_err("Missing file should fail");
    assert!(matches!(err, RunError::Open { .. }));
    assert!(err.to_string().starts_with("Can't open file: "));
}
