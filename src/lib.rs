//! A tree-walking interpreter for a small dynamically-typed scripting
//! language: integers, booleans, strings, arrays, hash maps,
//! first-class functions with lexical closures, conditionals, and a
//! `while` loop.
//!
//! ```
//! use wisp::run_source;
//!
//! let (value, errors) = run_source("(10 + 10) / (1 * 2) + 5");
//! assert!(errors.is_empty());
//! assert_eq!(value.unwrap().to_string(), "15");
//! ```

pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

use environment::Environment;
use lexer::Lexer;
use parser::{ParseError, Parser};
use value::Value;

/// Lexes, parses and evaluates `source` against a fresh top-level
/// environment. Mirrors the driver's contract from `spec.md` §1: given
/// an AST and an environment, produce a value — this just also builds
/// the AST and environment so callers (the CLI, the REPL, tests)
/// don't have to wire the pipeline themselves each time.
///
/// Returns `(None, errors)` if parsing failed; the program is never
/// evaluated when parse errors are present (`spec.md` §7).
pub fn run_source(source: &str) -> (Option<Value>, Vec<ParseError>) {
    let env = Environment::new();
    run_source_with_env(source, &env)
}

/// Like [`run_source`], but evaluates against a caller-supplied
/// environment so bindings persist across calls — what the REPL needs
/// for one line to see an earlier line's `var`s.
pub fn run_source_with_env(
    source: &str,
    env: &std::rc::Rc<std::cell::RefCell<Environment>>,
) -> (Option<Value>, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return (None, parser.errors().to_vec());
    }

    let value = evaluator::eval_program(&program, env);
    (Some(value), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_source_returns_final_value() {
        let (value, errors) = run_source("1 + 2");
        assert!(errors.is_empty());
        assert_eq!(value, Some(Value::Integer(3)));
    }

    #[test]
    fn run_source_reports_parse_errors_without_evaluating() {
        let (value, errors) = run_source("(1 +");
        assert!(value.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn persistent_environment_sees_earlier_bindings() {
        let env = Environment::new();
        run_source_with_env("var x = 41;", &env);
        let (value, _) = run_source_with_env("x + 1", &env);
        assert_eq!(value, Some(Value::Integer(42)));
    }
}
