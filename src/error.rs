// Author: Alexander Starov
// License: MIT

use std::fmt;

/// The main error type for FPL lexing, parsing and config access.
#[derive(Debug, Clone, PartialEq)]
pub enum FplError {
    /// Raised when a string literal reaches end of input before its closing quote.
    UnterminatedString {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A numeric literal with more than one decimal point, or one that does not convert.
    MalformedNumber {
        literal: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A required token kind was missing; carries the literal text of what was found.
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExpectedBlockStart {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExpectedKey {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedValue {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    NestingTooDeep {
        limit: usize,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Reading the input stream failed.
    Io {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    PathNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for FplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FplError::UnterminatedString { line, column, hint, code } =>
                write!(f, "[FPL] Unterminated string starting at {}:{}{}",
                    line, column, suffix(hint, code)),
            FplError::MalformedNumber { literal, line, column, hint, code } =>
                write!(f, "[FPL] Malformed number '{}' at {}:{}{}",
                    literal, line, column, suffix(hint, code)),
            FplError::UnexpectedCharacter { character, line, column, hint, code } =>
                write!(f, "[FPL] Unexpected character '{}' at {}:{}{}",
                    character, line, column, suffix(hint, code)),
            FplError::UnexpectedToken { token, line, column, hint, code } =>
                write!(f, "[FPL] Unexpected token: {} at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            FplError::ExpectedBlockStart { token, line, column, hint, code } =>
                write!(f, "[FPL] Expected block start, got '{}' at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            FplError::ExpectedKey { token, line, column, hint, code } =>
                write!(f, "[FPL] Expected key (identifier or string), got '{}' at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            FplError::UnexpectedValue { token, line, column, hint, code } =>
                write!(f, "[FPL] Unexpected value type '{}' at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            FplError::NestingTooDeep { limit, line, column, hint, code } =>
                write!(f, "[FPL] Nesting deeper than {} levels at {}:{}{}",
                    limit, line, column, suffix(hint, code)),
            FplError::Io { message, hint, code } =>
                write!(f, "[FPL] I/O Error: {}{}", message, suffix(hint, code)),
            FplError::FileError { message, path, hint, code } =>
                write!(f, "[FPL] File Error '{}': {}{}", path, message, suffix(hint, code)),
            FplError::PathNotFound { path, hint, code } =>
                write!(f, "[FPL] Path '{}' not found in configuration{}", path, suffix(hint, code)),
            FplError::TypeError { message, line, column, hint, code } =>
                write!(f, "[FPL] Type Error at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for FplError {}

impl From<std::io::Error> for FplError {
    fn from(e: std::io::Error) -> Self {
        FplError::Io {
            message: e.to_string(),
            hint: Some("Check that the input stream is readable UTF-8 text".into()),
            code: Some(301),
        }
    }
}

impl FplError {
    pub fn code(&self) -> Option<u32> {
        match self {
            FplError::UnterminatedString { code, .. }
            | FplError::MalformedNumber { code, .. }
            | FplError::UnexpectedCharacter { code, .. }
            | FplError::UnexpectedToken { code, .. }
            | FplError::ExpectedBlockStart { code, .. }
            | FplError::ExpectedKey { code, .. }
            | FplError::UnexpectedValue { code, .. }
            | FplError::NestingTooDeep { code, .. }
            | FplError::Io { code, .. }
            | FplError::FileError { code, .. }
            | FplError::PathNotFound { code, .. }
            | FplError::TypeError { code, .. } => *code,
        }
    }

    /// Source position of the error, if it has one. Lines and columns are 1-based.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            FplError::UnterminatedString { line, column, .. }
            | FplError::MalformedNumber { line, column, .. }
            | FplError::UnexpectedCharacter { line, column, .. }
            | FplError::UnexpectedToken { line, column, .. }
            | FplError::ExpectedBlockStart { line, column, .. }
            | FplError::ExpectedKey { line, column, .. }
            | FplError::UnexpectedValue { line, column, .. }
            | FplError::NestingTooDeep { line, column, .. }
            | FplError::TypeError { line, column, .. } => {
                if *line == 0 { None } else { Some((*line, *column)) }
            }
            FplError::Io { .. } | FplError::FileError { .. } | FplError::PathNotFound { .. } => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.position().map(|(line, _)| line)
    }

    pub fn column(&self) -> Option<usize> {
        self.position().map(|(_, column)| column)
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            FplError::UnterminatedString { .. }
                | FplError::MalformedNumber { .. }
                | FplError::UnexpectedCharacter { .. }
        )
    }

    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            FplError::UnexpectedToken { .. }
                | FplError::ExpectedBlockStart { .. }
                | FplError::ExpectedKey { .. }
                | FplError::UnexpectedValue { .. }
                | FplError::NestingTooDeep { .. }
        )
    }
}
