use super::*;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, FplError> {
    let mut document = Document::new();

    loop {
        match parser.current().kind {
            TokenKind::Eof => break,
            TokenKind::BlockStart => {
                let (name, block) = parse_block(parser)?;
                document.insert_block(name, block);
            }
            _ => {
                let tok = parser.current();
                return Err(FplError::ExpectedBlockStart {
                    token: tok.text.clone(),
                    line: tok.line,
                    column: tok.column,
                    hint: Some("Top-level content must be blocks like `@name { ... }`".into()),
                    code: Some(202),
                });
            }
        }
    }

    Ok(document)
}

pub(super) fn parse_block(parser: &mut Parser) -> Result<(String, Block), FplError> {
    parser.eat(TokenKind::BlockStart)?;
    let name = parser.eat(TokenKind::Identifier)?.text;
    parser.eat(TokenKind::LeftBrace)?;
    let properties = parse_properties(parser)?;
    parser.eat(TokenKind::RightBrace)?;

    Ok((name, properties))
}

fn parse_properties(parser: &mut Parser) -> Result<Block, FplError> {
    let mut properties = Block::new();

    while !parser.at(TokenKind::RightBrace) {
        let key = parse_property_key(parser)?;
        parser.eat(TokenKind::Colon)?;
        let value = value::parse_value(parser)?;
        properties.insert(key, value);
        parser.eat_optional_comma()?;
    }

    Ok(properties)
}

/// Block property keys may be identifiers or quoted strings.
fn parse_property_key(parser: &mut Parser) -> Result<String, FplError> {
    match parser.current().kind {
        TokenKind::Identifier => Ok(parser.eat(TokenKind::Identifier)?.text),
        TokenKind::String => Ok(parser.eat(TokenKind::String)?.text),
        _ => {
            let tok = parser.current();
            Err(FplError::ExpectedKey {
                token: tok.text.clone(),
                line: tok.line,
                column: tok.column,
                hint: if tok.is(TokenKind::Eof) {
                    Some("Block is missing its closing '}'".into())
                } else {
                    None
                },
                code: Some(203),
            })
        }
    }
}
