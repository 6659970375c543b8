use crate::ast::{BinaryOp, Expr};
use crate::error::{ErrorKind, MiniError, Span};
use crate::lexer::{Lexer, Token, TokenKind};

/// Recursive-descent parser for:
///
/// ```text
/// statement  := identifier '=' expression | expression
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := constant | identifier | '(' expression ')'
/// ```
///
/// The parser pulls tokens from the lexer on demand with one token of
/// lookahead. Invariant: after any grammar-rule method returns, `current`
/// holds the first token that rule did not consume.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    pushback: Option<Token<'src>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next();
        Self {
            lexer,
            current,
            pushback: None,
        }
    }

    /// Parses one statement. Tokens after a complete statement are left
    /// unconsumed.
    pub fn parse(&mut self) -> Result<Expr, MiniError> {
        if self.current.is(TokenKind::Identifier) {
            let id = self.current;
            self.advance();
            if self.current.is(TokenKind::Assign) {
                self.advance();
                let value = self.expression()?;
                let span = Span::new(id.span.start, value.span().end);
                return Ok(Expr::Assign {
                    name: id.lexeme.to_string(),
                    value: Box::new(value),
                    span,
                });
            }
            // No '=' followed: the identifier was the first token of an
            // ordinary expression. Park the lookahead in the pushback slot
            // and restore the identifier as current; the lexer's scan
            // position is untouched, so nothing already scanned is lost.
            self.unread(id);
        }
        self.expression()
    }

    fn advance(&mut self) {
        self.current = match self.pushback.take() {
            Some(token) => token,
            None => self.lexer.next(),
        };
    }

    fn unread(&mut self, token: Token<'src>) {
        debug_assert!(self.pushback.is_none(), "single-token pushback overflow");
        self.pushback = Some(self.current);
        self.current = token;
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.current.is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // The End token has an empty span; widen it so diagnostics still point
    // at a visible position.
    fn error_span(token: &Token) -> Span {
        if token.is(TokenKind::End) {
            Span::single(token.span.start)
        } else {
            token.span
        }
    }

    fn expression(&mut self) -> Result<Expr, MiniError> {
        let mut expr = self.term()?;

        loop {
            let operator = if self.current.is(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.current.is(TokenKind::Minus) {
                BinaryOp::Subtract
            } else {
                break;
            };
            self.advance();

            let right = self.term()?;
            let span = Span::new(expr.span().start, right.span().end);
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
                span,
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, MiniError> {
        let mut expr = self.factor()?;

        loop {
            let operator = if self.current.is(TokenKind::Mul) {
                BinaryOp::Multiply
            } else if self.current.is(TokenKind::Div) {
                BinaryOp::Divide
            } else {
                break;
            };
            self.advance();

            let right = self.factor()?;
            let span = Span::new(expr.span().start, right.span().end);
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
                span,
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, MiniError> {
        let token = self.current;

        match token.kind {
            TokenKind::Constant => {
                // The lexer accepts '.' ungoverned while scanning numbers,
                // so integer conversion is the gate that rejects lexemes
                // like "3.14.159".
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    MiniError::with_help(
                        ErrorKind::MalformedNumber(token.lexeme.to_string()),
                        token.span,
                        "Constants must be plain integers. Example: 42".to_string(),
                    )
                })?;
                self.advance();
                Ok(Expr::Literal {
                    value,
                    span: token.span,
                })
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Variable {
                    name: token.lexeme.to_string(),
                    span: token.span,
                })
            }
            TokenKind::LeftParam => {
                self.advance();
                let expr = self.expression()?;
                if !self.match_kind(TokenKind::RightParam) {
                    return Err(MiniError::with_help(
                        ErrorKind::UnmatchedParenthesis,
                        Self::error_span(&self.current),
                        "Every opening parenthesis '(' must have a matching ')'.".to_string(),
                    ));
                }
                Ok(expr)
            }
            _ => Err(MiniError::with_help(
                ErrorKind::UnexpectedToken(token.kind),
                Self::error_span(&token),
                "Expected a constant, a variable, or a parenthesized expression here."
                    .to_string(),
            )),
        }
    }
}
