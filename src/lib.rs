//! FPL: a small block-structured configuration format.
//!
//! ```
//! let doc = fpl_cfg::parse(r#"@server { host: "localhost", port: 8080 }"#).unwrap();
//! assert_eq!(doc.property("server", "port"), Some(&fpl_cfg::Value::Number(8080.0)));
//! ```

use std::io::Read;

pub mod ast;
pub mod error;
pub mod export;
pub mod kernel;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Block, Document, Value};
pub use error::FplError;
pub use config::FplConfig;

/// Parse FPL text into a [`Document`]. The first error aborts the whole parse.
pub fn parse(input: &str) -> Result<Document, FplError> {
    parser::Parser::new(input)?.parse_document()
}

/// Read the whole stream, then parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document, FplError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse(&content)
}
