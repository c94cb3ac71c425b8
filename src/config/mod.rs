// Author: Alexander Starov
// License: MIT

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::ast::{Block, Document, Value};
use crate::FplError;

mod access;
mod conversion;
mod helpers;

/// A parsed FPL document plus the source text it came from, with typed lookups.
#[derive(Debug, Clone)]
pub struct FplConfig {
    document: Document,
    raw_content: String, // Store for error reporting
    source: Option<PathBuf>,
}

impl FromStr for FplConfig {
    type Err = FplError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let document = crate::parse(content)?;

        Ok(Self {
            document,
            raw_content: content.to_string(),
            source: None,
        })
    }
}

impl FplConfig {
    /// Parse an FPL config from a string (no file I/O). Same as `content.parse::<FplConfig>()`.
    pub fn from_str(content: &str) -> Result<Self, FplError> {
        content.parse()
    }

    /// Read the whole stream and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, FplError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_str(&content)
    }

    /// Load an FPL config file. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = FplConfig::from_file("~/.config/app/settings.fpl")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FplError> {
        let path = helpers::expand_home(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| FplError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(302),
        })?;

        let mut config = Self::from_str(&content)?;
        debug!(path = %path.display(), blocks = config.document.len(), "loaded FPL config");
        config.source = Some(path);
        Ok(config)
    }

    /// Load an FPL config file with fallback support
    ///
    /// Tries to load from the primary path first. If that file can't be read,
    /// attempts to load from the fallback path. Parse errors in the primary file
    /// are returned as-is and do not trigger the fallback.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, FplError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(FplError::FileError { message: primary_message, .. }) => {
                warn!(
                    primary = %primary.as_ref().display(),
                    fallback = %fallback.as_ref().display(),
                    reason = %primary_message,
                    "primary FPL config unavailable, using fallback"
                );
                Self::from_file(&fallback).map_err(|e| match e {
                    FplError::FileError { message, .. } => FplError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(302),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Path the config was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn block(&self, name: &str) -> Option<&Block> {
        self.document.get(name)
    }

    pub fn has_block(&self, name: &str) -> bool {
        self.document.contains_block(name)
    }

    pub fn block_names(&self) -> Vec<String> {
        self.document.block_names().map(str::to_string).collect()
    }

    /// Deserialize a whole block into a serde type.
    ///
    /// Numbers are `f64`. Whole numbers up to 2^53 - 1 (9007199254740991) reach serde
    /// as integers; anything larger stays a float, so it cannot fill an integer
    /// field and the call fails with a `TypeError` (code 420). Read such values as
    /// `f64`, or as strings.
    ///
    /// # Examples
    /// ```
    /// # use fpl_cfg::FplConfig;
    /// #[derive(serde::Deserialize)]
    /// struct Server { host: String, port: u16 }
    ///
    /// let config = FplConfig::from_str(r#"@server { host: "0.0.0.0", port: 80 }"#).unwrap();
    /// let server: Server = config.deserialize_block("server").unwrap();
    /// assert_eq!(server.port, 80);
    /// ```
    pub fn deserialize_block<T: DeserializeOwned>(&self, name: &str) -> Result<T, FplError> {
        let block = self.document.get(name).ok_or_else(|| FplError::PathNotFound {
            path: name.to_string(),
            hint: Some(format!("Declare it with `@{} {{ ... }}`", name)),
            code: Some(304),
        })?;

        let json = serde_json::Value::Object(
            block
                .iter()
                .map(|(k, v)| (k.clone(), crate::export::value_to_json(v)))
                .collect(),
        );

        serde_json::from_value(json).map_err(|e| {
            let (line, snippet) = helpers::find_block_line(name, &self.raw_content);
            FplError::TypeError {
                message: format!("Block '{}' does not match the expected shape: {}", name, e),
                line,
                column: 0,
                hint: (line > 0).then(|| format!("Block declared at: {}", snippet)),
                code: Some(420),
            }
        })
    }
}
