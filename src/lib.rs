// minilang interpreter library
//
// A small arithmetic/variable-assignment language: an on-demand lexer, a
// recursive-descent parser with one-token lookahead, and a tree-walking
// evaluator over a caller-owned integer environment.

// Public modules
pub mod ast;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runner;

// Re-export commonly used items
pub use ast::{BinaryOp, Expr};
pub use error::{ErrorKind, MiniError, Span};
pub use evaluator::{Environment, Evaluator};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::run;
