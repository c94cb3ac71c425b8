// Author: Alexander Starov
// License: MIT

use std::fmt;
use std::str::Chars;

use crate::FplError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // --- structure ---
    BlockStart,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,

    // --- literals ---
    Identifier,
    String,
    Number,
    Boolean,

    Eof,
    /// Malformed number or unrecognized character; reported by the parser when consumed.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::BlockStart => "'@'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Eof => "end of input",
            TokenKind::Error => "invalid token",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal text. Strings hold their contents without the quotes.
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token { kind, text: text.into(), line, column }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Pull-based tokenizer. Holds only the current character; every call to
/// `next_token` produces exactly one token.
pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Produce the next token. Only an unterminated string is a hard lexer error;
    /// other bad input comes back as a `TokenKind::Error` token.
    pub fn next_token(&mut self) -> Result<Token, FplError> {
        tokenizer::next_token(self)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, FplError>;

    /// Yields tokens up to but not including `Eof`, stopping after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                // Drain so iteration ends after the error.
                while self.peek.is_some() {
                    scanner::bump(self);
                }
                Some(Err(e))
            }
        }
    }
}
