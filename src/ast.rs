use crate::error::Span;

/// The closed expression set of the language. Non-leaf variants exclusively
/// own their children, so a parse always yields a tree, never a graph.
/// Variable names are copied out of the source buffer, so the tree does not
/// borrow from it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal {
        value: i64,
        span: Span,
    },
    Variable {
        name: String,
        span: Span,
    },
    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
        span: Span,
    },
    /// Assignment is an expression with a value, but the grammar only
    /// admits it as a statement form, never nested inside expressions.
    Assign {
        name: String,
        value: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal { span, .. } => *span,
            Expr::Variable { span, .. } => *span,
            Expr::Binary { span, .. } => *span,
            Expr::Assign { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}
