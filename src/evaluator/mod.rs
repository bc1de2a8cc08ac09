
mod eval_error;
pub use eval_error::EvalError;

use crate::ast::{self, Expression, Operator};
use crate::environment::Environment;
use log::{debug, trace};
use std::io::Write;

pub type Result<T> = std::result::Result<T, EvalError>;

/// What boolean operations produce for true. False is the empty string.
pub const TRUE: &str = "True";

pub fn truth_value(value: &str) -> bool {
    !value.is_empty()
}

fn from_bool(b: bool) -> String {
    if b {
        TRUE.to_owned()
    } else {
        String::new()
    }
}

/// Read the integer at the start of a value, the way `scanf` would: leading
/// whitespace and an optional sign are allowed, and anything after the
/// digits is ignored. Values without digits read as zero and values out of
/// range saturate.
pub fn to_integer(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .map(|d| i64::from(d - b'0'))
        .fold(0i64, |n, d| {
            if negative {
                n.saturating_mul(10).saturating_sub(d)
            } else {
                n.saturating_mul(10).saturating_add(d)
            }
        })
}

/// Evaluate an expression, returning its value. Anything printed goes to `out`.
pub fn eval(expr: &Expression, env: &mut Environment, out: &mut dyn Write) -> Result<String> {
    match expr {
        Expression::Literal(value) => Ok(value.clone()),
        Expression::Variable(name) => Ok(env.get(name)),
        Expression::Print(operand) => {
            let value = eval(operand, env, out)?;
            writeln!(out, "{}", value)?;
            Ok(String::new())
        }
        Expression::Compound(exprs) => eval_compound(exprs, env, out),
        Expression::Binary(binary) => {
            let left = eval(&binary.left, env, out)?;
            let right = eval(&binary.right, env, out)?;
            eval_binary_expression(binary.operator, left, right, binary.line)
        }
        Expression::Not(operand) => Ok(from_bool(!truth_value(&eval(operand, env, out)?))),
        Expression::Substr(substr) => eval_substr_expression(substr, env, out),
        Expression::Set(set) => {
            let value = eval(&set.value, env, out)?;
            trace!("set {} = {:?}", set.name, value);
            env.set(&set.name, value);
            Ok(String::new())
        }
        Expression::If(if_expr) => {
            if truth_value(&eval(&if_expr.condition, env, out)?) {
                eval(&if_expr.body, env, out)
            } else {
                Ok(String::new())
            }
        }
        Expression::While(while_expr) => eval_while_expression(while_expr, env, out),
    }
}

fn eval_compound(
    exprs: &[Expression],
    env: &mut Environment,
    out: &mut dyn Write,
) -> Result<String> {
    exprs
        .iter()
        .try_fold(String::new(), |_, expr| eval(expr, env, out))
}

fn eval_binary_expression(
    operator: Operator,
    left: String,
    right: String,
    line: usize,
) -> Result<String> {
    match operator {
        Operator::Concat => Ok(left + &right),
        Operator::And => Ok(from_bool(truth_value(&left) && truth_value(&right))),
        Operator::Or => Ok(from_bool(truth_value(&left) || truth_value(&right))),
        op => eval_integer_expression(op, to_integer(&left), to_integer(&right), line),
    }
}

fn eval_integer_expression(
    operator: Operator,
    left: i64,
    right: i64,
    line: usize,
) -> Result<String> {
    Ok(match operator {
        Operator::Add => left.wrapping_add(right).to_string(),
        Operator::Sub => left.wrapping_sub(right).to_string(),
        Operator::Mul => left.wrapping_mul(right).to_string(),
        Operator::Div => {
            if right == 0 {
                return Err(EvalError::DivideByZero { line });
            }
            left.wrapping_div(right).to_string()
        }
        Operator::Equal => from_bool(left == right),
        Operator::Less => from_bool(left < right),
        Operator::Concat | Operator::And | Operator::Or => {
            unreachable!("{} is not an integer operator", operator)
        }
    })
}

fn eval_substr_expression(
    substr: &ast::SubstrExpression,
    env: &mut Environment,
    out: &mut dyn Write,
) -> Result<String> {
    // The bounds are worked out, and checked, before the source string.
    let start = to_integer(&eval(&substr.start, env, out)?);
    let end = to_integer(&eval(&substr.end, env, out)?);

    if start > end {
        return Err(EvalError::InvalidSubstring {
            line: substr.line,
            start,
            end,
        });
    }

    let source = eval(&substr.source, env, out)?;

    // Bounds past either end of the string are pulled back inside it.
    let len = source.chars().count() as i64;
    let start = start.max(0).min(len) as usize;
    let end = end.max(0).min(len) as usize;

    Ok(source.chars().skip(start).take(end - start).collect())
}

fn eval_while_expression(
    while_expr: &ast::WhileExpression,
    env: &mut Environment,
    out: &mut dyn Write,
) -> Result<String> {
    let mut result = String::new();
    let mut iterations = 0usize;

    while truth_value(&eval(&while_expr.condition, env, out)?) {
        result = eval(&while_expr.body, env, out)?;
        iterations += 1;
    }

    debug!("loop finished after {} iterations", iterations);
    Ok(result)
}
