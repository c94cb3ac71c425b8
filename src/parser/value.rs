use indexmap::IndexMap;

use super::*;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, FplError> {
    match parser.current().kind {
        TokenKind::String => parse_string_value(parser),
        TokenKind::Number => parse_number_value(parser),
        TokenKind::Boolean => parse_bool_value(parser),
        TokenKind::LeftBracket => parse_array_value(parser),
        TokenKind::LeftBrace => parse_object_value(parser),
        TokenKind::Error => Err(invalid_literal(parser.current())),
        _ => {
            let tok = parser.current();
            Err(FplError::UnexpectedValue {
                token: tok.text.clone(),
                line: tok.line,
                column: tok.column,
                hint: Some(format!(
                    "Expected a string, number, boolean, array or object, found {}",
                    tok.kind
                )),
                code: Some(204),
            })
        }
    }
}

fn parse_string_value(parser: &mut Parser) -> Result<Value, FplError> {
    let tok = parser.eat(TokenKind::String)?;
    Ok(Value::String(tok.text))
}

fn parse_number_value(parser: &mut Parser) -> Result<Value, FplError> {
    let tok = parser.eat(TokenKind::Number)?;
    match tok.text.parse::<f64>() {
        Ok(n) => Ok(Value::Number(n)),
        Err(_) => Err(malformed_number(&tok)),
    }
}

fn parse_bool_value(parser: &mut Parser) -> Result<Value, FplError> {
    let tok = parser.eat(TokenKind::Boolean)?;
    Ok(Value::Boolean(tok.text == "true"))
}

fn parse_array_value(parser: &mut Parser) -> Result<Value, FplError> {
    parser.enter_nested()?;
    parser.eat(TokenKind::LeftBracket)?;
    let mut arr = Vec::new();

    while !parser.at(TokenKind::RightBracket) {
        arr.push(parse_value(parser)?);
        parser.eat_optional_comma()?;
    }

    parser.eat(TokenKind::RightBracket)?;
    parser.leave_nested();
    Ok(Value::Array(arr))
}

/// Object keys inside values are identifiers only; quoted keys are a block-level feature.
fn parse_object_value(parser: &mut Parser) -> Result<Value, FplError> {
    parser.enter_nested()?;
    parser.eat(TokenKind::LeftBrace)?;
    let mut entries = IndexMap::new();

    while !parser.at(TokenKind::RightBrace) {
        let key = parser.eat(TokenKind::Identifier)?.text;
        parser.eat(TokenKind::Colon)?;
        let value = parse_value(parser)?;
        entries.insert(key, value);
        parser.eat_optional_comma()?;
    }

    parser.eat(TokenKind::RightBrace)?;
    parser.leave_nested();
    Ok(Value::Object(entries))
}

fn invalid_literal(tok: &Token) -> FplError {
    let starts_numeric = tok
        .text
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');

    if starts_numeric {
        malformed_number(tok)
    } else {
        FplError::UnexpectedCharacter {
            character: tok.text.chars().next().unwrap_or('\0'),
            line: tok.line,
            column: tok.column,
            hint: Some("Unexpected character in input".into()),
            code: Some(103),
        }
    }
}

fn malformed_number(tok: &Token) -> FplError {
    FplError::MalformedNumber {
        literal: tok.text.clone(),
        line: tok.line,
        column: tok.column,
        hint: Some("Numbers are digits with at most one '.'".into()),
        code: Some(102),
    }
}
