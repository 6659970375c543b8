use crate::lexer::TokenKind;
use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

/// The closed failure taxonomy of the pipeline. The lexer never fails
/// (unrecognized input becomes `Unknown` tokens), so the first three
/// variants belong to the parser and the last two to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A token that cannot start or continue the current grammar rule.
    UnexpectedToken(TokenKind),
    /// A '(' without its matching ')'.
    UnmatchedParenthesis,
    /// A `Constant` lexeme that does not convert to an integer.
    MalformedNumber(String),
    /// Evaluation referenced a name with no binding.
    UndefinedVariable(String),
    /// Evaluation of '/' with a zero right operand.
    DivisionByZero,
}

enum Category {
    Parse,
    Runtime,
}

impl ErrorKind {
    fn category(&self) -> Category {
        match self {
            ErrorKind::UnexpectedToken(_)
            | ErrorKind::UnmatchedParenthesis
            | ErrorKind::MalformedNumber(_) => Category::Parse,
            ErrorKind::UndefinedVariable(_) | ErrorKind::DivisionByZero => Category::Runtime,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniError {
    pub kind: ErrorKind,
    pub span: Span,
    pub help: Option<String>,
}

impl MiniError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            help: None,
        }
    }

    pub fn with_help(kind: ErrorKind, span: Span, help: String) -> Self {
        Self {
            kind,
            span,
            help: Some(help),
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::UnexpectedToken(kind) => format!("Unexpected token: {}", kind),
            ErrorKind::UnmatchedParenthesis => "Expected ')' after expression".to_string(),
            ErrorKind::MalformedNumber(lexeme) => format!("Malformed number: '{}'", lexeme),
            ErrorKind::UndefinedVariable(name) => format!("Undefined variable '{}'", name),
            ErrorKind::DivisionByZero => "Division by zero".to_string(),
        }
    }

    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<repl>");

        let (color, kind_str) = match self.kind.category() {
            Category::Parse => (Color::Yellow, "Parse Error"),
            Category::Runtime => (Color::Magenta, "Runtime Error"),
        };

        let message = self.message();
        let mut report_builder = Report::build(ReportKind::Error, filename, self.span.start)
            .with_message(format!("{}: {}", kind_str.fg(color), message))
            .with_label(
                Label::new((filename, self.span.start..self.span.end))
                    .with_message(&message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        report_builder
            .finish()
            .print((filename, Source::from(source)))
            .unwrap();
    }
}

impl fmt::Display for MiniError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for MiniError {}
