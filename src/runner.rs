use crate::error::MiniError;
use crate::evaluator::{Environment, Evaluator};
use crate::parser::Parser;

/// Runs one statement against the caller's environment: parse, then
/// evaluate. The parser pulls tokens from the lexer on demand, so there is
/// no separate scanning pass.
pub fn run(source: &str, environment: &mut Environment) -> Result<i64, MiniError> {
    let ast = Parser::new(source).parse()?;
    Evaluator::new(environment).evaluate(&ast)
}

/// Like [`run`], but prints a diagnostic report against the source on
/// failure instead of returning the error.
pub fn run_and_report(
    source: &str,
    filename: Option<&str>,
    environment: &mut Environment,
) -> Option<i64> {
    match run(source, environment) {
        Ok(value) => Some(value),
        Err(error) => {
            error.report(source, filename);
            None
        }
    }
}
