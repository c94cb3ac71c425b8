//! Entry point used by the kernel's aid subsystem. Shares the parser with the
//! crate-level [`parse`](crate::parse); nothing here re-implements the grammar.

pub mod aid {
    use std::io::Read;

    use crate::{Document, FplError};

    pub fn parse(input: &str) -> Result<Document, FplError> {
        crate::parse(input)
    }

    pub fn parse_reader<R: Read>(reader: R) -> Result<Document, FplError> {
        crate::parse_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::aid;

    #[test]
    fn test_aid_facade_matches_crate_parse() {
        let input = "@kernel { threads: 4, modules: [\"net\", \"fs\"] }";
        assert_eq!(aid::parse(input).unwrap(), crate::parse(input).unwrap());
        assert_eq!(aid::parse_reader(input.as_bytes()).unwrap(), crate::parse(input).unwrap());
    }

    #[test]
    fn test_aid_facade_propagates_errors() {
        assert!(aid::parse("@kernel { threads: }").is_err());
    }
}
