use super::*;
use super::scanner::{bump, position, skip_whitespace_and_comments};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, FplError> {
    skip_whitespace_and_comments(lexer);

    let (line, column) = position(lexer);
    let token = match lexer.peek {
        Some('@') => tokenize_symbol(lexer, TokenKind::BlockStart, line, column),
        Some('{') => tokenize_symbol(lexer, TokenKind::LeftBrace, line, column),
        Some('}') => tokenize_symbol(lexer, TokenKind::RightBrace, line, column),
        Some('[') => tokenize_symbol(lexer, TokenKind::LeftBracket, line, column),
        Some(']') => tokenize_symbol(lexer, TokenKind::RightBracket, line, column),
        Some(':') => tokenize_symbol(lexer, TokenKind::Colon, line, column),
        Some(',') => tokenize_symbol(lexer, TokenKind::Comma, line, column),
        Some('"') => return tokenize_string(lexer, line, column),
        Some(c) if c.is_ascii_digit() || c == '.' => tokenize_number(lexer, line, column),
        Some(c) if c.is_ascii_alphabetic() => tokenize_identifier_or_boolean(lexer, line, column),
        Some(ch) => {
            bump(lexer);
            Token::new(TokenKind::Error, ch.to_string(), line, column)
        }
        None => Token::new(TokenKind::Eof, "", line, column),
    };

    Ok(token)
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind, line: usize, column: usize) -> Token {
    let ch = bump(lexer).map(String::from).unwrap_or_default();
    Token::new(kind, ch, line, column)
}

fn tokenize_string(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token, FplError> {
    bump(lexer); // opening quote
    let mut content = String::new();

    loop {
        match bump(lexer) {
            Some('"') => return Ok(Token::new(TokenKind::String, content, line, column)),
            Some(ch) => content.push(ch),
            None => {
                return Err(FplError::UnterminatedString {
                    line,
                    column,
                    hint: Some("Add a closing '\"'".into()),
                    code: Some(101),
                });
            }
        }
    }
}

fn tokenize_number(lexer: &mut Lexer, line: usize, column: usize) -> Token {
    let mut num = String::new();
    let mut seen_dot = false;

    while let Some(ch) = lexer.peek {
        if ch == '.' {
            if seen_dot {
                num.push(ch);
                bump(lexer);
                return Token::new(TokenKind::Error, num, line, column);
            }
            seen_dot = true;
        } else if !ch.is_ascii_digit() {
            break;
        }
        num.push(ch);
        bump(lexer);
    }

    Token::new(TokenKind::Number, num, line, column)
}

fn tokenize_identifier_or_boolean(lexer: &mut Lexer, line: usize, column: usize) -> Token {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    let kind = match ident.as_str() {
        "true" | "false" => TokenKind::Boolean,
        _ => TokenKind::Identifier,
    };

    Token::new(kind, ident, line, column)
}
