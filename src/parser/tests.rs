#[cfg(test)]
use super::*;

fn parse(input: &str) -> Result<Document, FplError> {
    Parser::new(input)?.parse_document()
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_parser_basic_document() {
    let input = r#"
# application settings
@app {
  name: "FplApp",
  version: 2,
  debug: true
}

@server {
  host: "localhost"
  ports: [8080, 8081]
}
"#;

    let doc = parse(input).expect("Failed to parse document");

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.block_names().collect::<Vec<_>>(), vec!["app", "server"]);
    assert_eq!(doc.property("app", "name"), Some(&Value::String("FplApp".into())));
    assert_eq!(doc.property("app", "version"), Some(&num(2.0)));
    assert_eq!(doc.property("app", "debug"), Some(&Value::Boolean(true)));
    assert_eq!(
        doc.property("server", "ports"),
        Some(&Value::Array(vec![num(8080.0), num(8081.0)]))
    );
}

#[test]
fn test_all_value_kinds() {
    let doc = parse(r#"@a { x: 1, y: "s", z: true, w: [1,2,3], v: {k: 1} }"#).unwrap();
    let block = doc.get("a").expect("block a");

    assert_eq!(block["x"], num(1.0));
    assert_eq!(block["y"], Value::String("s".into()));
    assert_eq!(block["z"], Value::Boolean(true));
    assert_eq!(block["w"], Value::Array(vec![num(1.0), num(2.0), num(3.0)]));

    let v = block["v"].as_object().expect("v is an object");
    assert_eq!(v.len(), 1);
    assert_eq!(v["k"], num(1.0));
}

#[test]
fn test_empty_inputs() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("   \n\t  ").unwrap().is_empty());
    assert!(parse("# just a comment\n# and another").unwrap().is_empty());
}

#[test]
fn test_empty_block() {
    let doc = parse("@a {}").unwrap();
    assert_eq!(doc.len(), 1);
    assert!(doc.get("a").unwrap().is_empty());
}

#[test]
fn test_duplicate_blocks_replace_wholesale() {
    let doc = parse("@a {x:1} @a {y:2}").unwrap();
    assert_eq!(doc.len(), 1);

    let block = doc.get("a").unwrap();
    assert_eq!(block.len(), 1);
    assert_eq!(block.get("y"), Some(&num(2.0)));
    assert!(block.get("x").is_none());
}

#[test]
fn test_duplicate_keys_last_wins() {
    let doc = parse("@a {x:1,x:2}").unwrap();
    let block = doc.get("a").unwrap();
    assert_eq!(block.len(), 1);
    assert_eq!(block["x"], num(2.0));

    let doc = parse("@a { o: { k: 1, k: \"two\" } }").unwrap();
    let o = doc.property("a", "o").unwrap();
    assert_eq!(o.get("k"), Some(&Value::String("two".into())));
}

#[test]
fn test_trailing_commas() {
    assert_eq!(parse("@a {x:1,}").unwrap(), parse("@a {x:1}").unwrap());
    assert_eq!(parse("@a {w:[1,2,]}").unwrap(), parse("@a {w:[1,2]}").unwrap());
    assert_eq!(parse("@a {o:{k:1,}}").unwrap(), parse("@a {o:{k:1}}").unwrap());
}

#[test]
fn test_commas_are_optional_separators() {
    let doc = parse("@a { x: 1 y: 2 list: [1 2 3] }").unwrap();
    assert_eq!(doc.property("a", "y"), Some(&num(2.0)));
    assert_eq!(doc.property("a", "list").unwrap().as_array().unwrap().len(), 3);
}

#[test]
fn test_array_order_and_duplicates_preserved() {
    let doc = parse(r#"@a { l: [3, 1, 3, "x", false, [], {}] }"#).unwrap();
    let items = doc.property("a", "l").unwrap().as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0], num(3.0));
    assert_eq!(items[1], num(1.0));
    assert_eq!(items[2], num(3.0));
    assert_eq!(items[5], Value::Array(vec![]));
    assert_eq!(items[6], Value::Object(Default::default()));
}

#[test]
fn test_deeply_nested_values() {
    let doc = parse("@a { n: { inner: { list: [ { leaf: \"yes\" } ] } } }").unwrap();
    let leaf = doc
        .property("a", "n")
        .and_then(|v| v.get("inner"))
        .and_then(|v| v.get("list"))
        .and_then(|v| v.as_array())
        .and_then(|l| l.first())
        .and_then(|v| v.get("leaf"));
    assert_eq!(leaf, Some(&Value::String("yes".into())));
}

#[test]
fn test_string_keys_in_blocks() {
    assert_eq!(parse(r#"@a {"foo": 1}"#).unwrap(), parse("@a {foo: 1}").unwrap());

    let doc = parse(r#"@a {"with space": 1}"#).unwrap();
    assert!(doc.property("a", "with space").is_some());
}

#[test]
fn test_string_keys_rejected_in_objects() {
    let err = parse(r#"@a { o: {"k": 1} }"#).unwrap_err();
    assert!(matches!(err, FplError::UnexpectedToken { ref token, .. } if token == "k"));
}

#[test]
fn test_block_name_must_be_identifier() {
    let err = parse(r#"@"a" {}"#).unwrap_err();
    assert!(matches!(err, FplError::UnexpectedToken { ref token, .. } if token == "a"));

    assert!(parse("@true {}").is_err());
    assert!(parse("@ {}").is_err());
}

#[test]
fn test_hash_in_string_value() {
    let doc = parse("@a { c: \"#fff\" } # trailing comment").unwrap();
    assert_eq!(doc.property("a", "c"), Some(&Value::String("#fff".into())));
}

#[test]
fn test_number_forms() {
    let doc = parse("@a { a: 0, b: 0.25, c: .5, d: 10., e: 007 }").unwrap();
    assert_eq!(doc.property("a", "a"), Some(&num(0.0)));
    assert_eq!(doc.property("a", "b"), Some(&num(0.25)));
    assert_eq!(doc.property("a", "c"), Some(&num(0.5)));
    assert_eq!(doc.property("a", "d"), Some(&num(10.0)));
    assert_eq!(doc.property("a", "e"), Some(&num(7.0)));
}

#[test]
fn test_missing_value() {
    let err = parse("@a { x: }").unwrap_err();
    assert!(matches!(err, FplError::UnexpectedValue { ref token, .. } if token == "}"));
    assert!(err.is_syntax());
}

#[test]
fn test_missing_closing_brace() {
    let err = parse("@a { x: 1 ").unwrap_err();
    assert!(matches!(err, FplError::ExpectedKey { .. }));

    assert!(parse("@a {").is_err());
    assert!(parse("@a { l: [1, 2 }").is_err());
}

#[test]
fn test_unterminated_string() {
    let err = parse("\"unterminated").unwrap_err();
    assert!(matches!(err, FplError::UnterminatedString { .. }));

    let err = parse("@a { s: \"open }").unwrap_err();
    assert!(matches!(err, FplError::UnterminatedString { line: 1, column: 9, .. }));
}

#[test]
fn test_malformed_number_value() {
    let err = parse("@a { x: 1.2.3 }").unwrap_err();
    assert!(matches!(err, FplError::MalformedNumber { ref literal, .. } if literal == "1.2."));
    assert!(err.is_lexical());

    let err = parse("@a { x: . }").unwrap_err();
    assert!(matches!(err, FplError::MalformedNumber { ref literal, .. } if literal == "."));
}

#[test]
fn test_unrecognized_character_value() {
    let err = parse("@a { x: $ }").unwrap_err();
    assert!(matches!(err, FplError::UnexpectedCharacter { character: '$', .. }));
}

#[test]
fn test_identifier_is_not_a_value() {
    let err = parse("@a { x: localhost }").unwrap_err();
    assert!(matches!(err, FplError::UnexpectedValue { ref token, .. } if token == "localhost"));
}

#[test]
fn test_top_level_must_be_blocks() {
    let err = parse("x: 1").unwrap_err();
    assert!(matches!(err, FplError::ExpectedBlockStart { ref token, .. } if token == "x"));

    let err = parse("@a {} }").unwrap_err();
    assert!(matches!(err, FplError::ExpectedBlockStart { ref token, .. } if token == "}"));
}

#[test]
fn test_error_positions() {
    let input = "@a {\n  x: 1\n  y: ]\n}";
    let err = parse(input).unwrap_err();
    assert_eq!(err.position(), Some((3, 6)));
    assert!(err.to_string().contains("3:6"));
}

#[test]
fn test_unexpected_token_names_literal() {
    let err = parse("@a { x 1 }").unwrap_err();
    assert!(err.to_string().contains("Unexpected token: 1"));
    assert_eq!(err.code(), Some(201));
}

#[test]
fn test_first_error_aborts() {
    // the valid first block is not returned on failure
    let result = parse("@good { x: 1 } @bad { y: }");
    assert!(result.is_err());
}

#[test]
fn test_nesting_limit() {
    let ok = format!("@a {{ v: {}{} }}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    assert!(parse(&ok).is_ok());

    let deep = format!("@a {{ v: {}{} }}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
    let err = parse(&deep).unwrap_err();
    assert!(matches!(err, FplError::NestingTooDeep { limit: MAX_DEPTH, .. }));
}

#[test]
fn test_parse_single_block_and_value() {
    let mut parser = Parser::new("@net { mtu: 1500 } @other {}").unwrap();
    let (name, block) = parser.parse_block().unwrap();
    assert_eq!(name, "net");
    assert_eq!(block["mtu"], num(1500.0));

    let mut parser = Parser::new("[true, \"x\"]").unwrap();
    let value = parser.parse_value().unwrap();
    assert_eq!(value, Value::Array(vec![Value::Boolean(true), Value::String("x".into())]));
}

#[test]
fn test_reparse_is_deterministic() {
    let input = r#"@a { x: 1, o: { b: 2, a: 1 } } @b { l: ["p", "q"] }"#;
    let first = parse(input).unwrap();
    let second = parse(input).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        second.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>()
    );
}
