use crate::error::Span;
use std::fmt;

/// The single token classification shared by the lexer and the parser.
///
/// `StringLiteral` and `Eol` are inert: no lexing rule produces them
/// (newlines are consumed as whitespace before classification, and string
/// scanning yields `ConstString`), but they remain members of the closed
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Constant,
    LeftCurly,
    RightCurly,
    Keyword,
    StringLiteral,
    LeftParam,
    RightParam,
    Dot,
    Semicolon,
    Comma,
    Pipe,
    End,
    Eol,
    Colon,
    ConstString,
    Plus,
    Minus,
    Mul,
    Div,
    Assign,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Constant => "constant",
            TokenKind::LeftCurly => "leftcurly",
            TokenKind::RightCurly => "rightcurly",
            TokenKind::Keyword => "keyword",
            TokenKind::StringLiteral => "string",
            TokenKind::LeftParam => "leftparam",
            TokenKind::RightParam => "rightparam",
            TokenKind::Dot => "dot",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Comma => "comma",
            TokenKind::Pipe => "pipe",
            TokenKind::End => "end",
            TokenKind::Eol => "eol",
            TokenKind::Colon => "colon",
            TokenKind::ConstString => "conststring",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Mul => "mul",
            TokenKind::Div => "div",
            TokenKind::Assign => "assign",
            TokenKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexeme. The lexeme is a read-only view into the source
/// buffer spanning `span.start..span.end`; tokens never own character data,
/// so their validity is bounded by the lifetime of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

const KEYWORDS: &[&str] = &[
    "def", "return", "if", "else", "while", "for", "in", "break", "continue", "true", "false",
    "null",
];

fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// On-demand tokenizer over a read-only source buffer.
///
/// `next()` always produces a token: unrecognized input becomes `Unknown`
/// and exhausted input becomes `End`, so the lexer itself has no error
/// channel. All failure logic lives in the parser and evaluator.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Consumes and classifies one token starting at the current scan
    /// position. Past end of input this keeps returning `End`.
    pub fn next(&mut self) -> Token<'src> {
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' || c == '\n' {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.pos;
        let c = match self.peek() {
            // Buffer exhausted (or a '\0' sentinel): terminal state.
            None => return Token::new(TokenKind::End, "", Span::new(start, start)),
            Some(c) => c,
        };

        match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier_or_keyword(start),
            c if c.is_ascii_digit() => self.number(start),
            '"' => self.const_string(start),
            '(' => self.atomic(TokenKind::LeftParam, start),
            ')' => self.atomic(TokenKind::RightParam, start),
            '{' => self.atomic(TokenKind::LeftCurly, start),
            '}' => self.atomic(TokenKind::RightCurly, start),
            ';' => self.atomic(TokenKind::Semicolon, start),
            ',' => self.atomic(TokenKind::Comma, start),
            '.' => self.atomic(TokenKind::Dot, start),
            '|' => self.atomic(TokenKind::Pipe, start),
            ':' => self.atomic(TokenKind::Colon, start),
            '+' => self.atomic(TokenKind::Plus, start),
            '-' => self.atomic(TokenKind::Minus, start),
            '*' => self.atomic(TokenKind::Mul, start),
            '/' => self.atomic(TokenKind::Div, start),
            '=' => self.atomic(TokenKind::Assign, start),
            _ => self.atomic(TokenKind::Unknown, start),
        }
    }

    fn peek(&self) -> Option<char> {
        let c = self.source[self.pos..].chars().next()?;
        // The buffer terminator is the only recognized end-of-input marker
        // besides the slice boundary itself.
        if c == '\0' {
            None
        } else {
            Some(c)
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token::new(
            kind,
            &self.source[start..self.pos],
            Span::new(start, self.pos),
        )
    }

    fn atomic(&mut self, kind: TokenKind, start: usize) -> Token<'src> {
        self.advance();
        self.token(kind, start)
    }

    fn identifier_or_keyword(&mut self, start: usize) -> Token<'src> {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance();
        }
        let word = &self.source[start..self.pos];
        let kind = if is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, word, Span::new(start, self.pos))
    }

    // Scans digits and '.' ungoverned; a lexeme like "3.14.159" is still a
    // Constant token here, and integer conversion rejects it downstream.
    fn number(&mut self, start: usize) -> Token<'src> {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        self.token(TokenKind::Constant, start)
    }

    // Both quote characters are part of the lexeme span. An unterminated
    // string silently consumes to the end of the buffer.
    fn const_string(&mut self, start: usize) -> Token<'src> {
        self.advance(); // opening "
        while matches!(self.peek(), Some(c) if c != '"') {
            self.advance();
        }
        self.advance(); // closing ", if present
        self.token(TokenKind::ConstString, start)
    }
}
