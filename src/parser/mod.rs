use crate::lexer::{Lexer, Token, TokenKind};
use crate::FplError;
use crate::ast::{Block, Document, Value};

mod document;
mod value;

/// Arrays and objects nested deeper than this are rejected.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser holding exactly one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, FplError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Consume the current token if it is of `expected` kind and pull the next one.
    pub(crate) fn eat(&mut self, expected: TokenKind) -> Result<Token, FplError> {
        if !self.current.is(expected) {
            return Err(FplError::UnexpectedToken {
                token: self.current.text.clone(),
                line: self.current.line,
                column: self.current.column,
                hint: Some(format!("Expected {}, found {}", expected, self.current.kind)),
                code: Some(201),
            });
        }
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume a comma if one is next; separators are optional.
    pub(crate) fn eat_optional_comma(&mut self) -> Result<(), FplError> {
        if self.at(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
        }
        Ok(())
    }

    pub(crate) fn enter_nested(&mut self) -> Result<(), FplError> {
        if self.depth >= MAX_DEPTH {
            return Err(FplError::NestingTooDeep {
                limit: MAX_DEPTH,
                line: self.current.line,
                column: self.current.column,
                hint: Some("Flatten the structure of this value".into()),
                code: Some(205),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave_nested(&mut self) {
        self.depth -= 1;
    }

    pub fn parse_document(&mut self) -> Result<Document, FplError> {
        document::parse_document(self)
    }

    /// Parse a single `@name { ... }` block at the current position.
    pub fn parse_block(&mut self) -> Result<(String, Block), FplError> {
        document::parse_block(self)
    }

    pub fn parse_value(&mut self) -> Result<Value, FplError> {
        value::parse_value(self)
    }
}

#[cfg(test)]
mod tests;
