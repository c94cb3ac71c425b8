use super::*;

impl FplConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// The first segment names the block; later segments walk nested objects.
    /// Both `snake_case` and `kebab-case` spellings of a key are accepted.
    ///
    /// # Examples
    /// ```
    /// # use fpl_cfg::FplConfig;
    /// let config = FplConfig::from_str(r#"@server { host: "localhost", port: 8080 }"#).unwrap();
    /// let host: String = config.get("server.host").unwrap();
    /// let port: u16 = config.get("server.port").unwrap();
    /// assert_eq!((host.as_str(), port), ("localhost", 8080));
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, FplError>
    where
        T: TryFrom<Value, Error = FplError>,
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, FplError>
    where
        T: TryFrom<Value, Error = FplError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(FplError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// ```
    /// # use fpl_cfg::FplConfig;
    /// let config = FplConfig::from_str("@server {}").unwrap();
    /// assert_eq!(config.get_or("server.timeout", 30u64), 30);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = FplError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` by dotted path, e.g. `server.tls.cert`.
    ///
    /// A bare block name is not a value; use [`FplConfig::block`] or
    /// [`FplConfig::get_keys`] for that.
    pub fn get_value(&self, path: &str) -> Result<&Value, FplError> {
        let not_found = || FplError::PathNotFound {
            path: path.to_string(),
            hint: Some("Paths look like `block.key` or `block.key.nested`".into()),
            code: Some(304),
        };

        let mut segs = path.split('.');
        let block_name = segs.next().filter(|s| !s.is_empty()).ok_or_else(not_found)?;
        let first_key = segs.next().ok_or_else(not_found)?;

        let block = self.document.get(block_name).ok_or_else(not_found)?;
        let mut current = helpers::lookup(block, first_key).ok_or_else(not_found)?;

        for seg in segs {
            current = match current {
                Value::Object(entries) => helpers::lookup(entries, seg).ok_or_else(not_found)?,
                _ => return Err(not_found()),
            };
        }

        Ok(current)
    }

    /// Get all keys at a given path level: a block name or a path to an object.
    ///
    /// ```
    /// # use fpl_cfg::FplConfig;
    /// let config = FplConfig::from_str("@db { pool: { min: 1, max: 8 } }").unwrap();
    /// assert_eq!(config.get_keys("db").unwrap(), vec!["pool"]);
    /// assert_eq!(config.get_keys("db.pool").unwrap(), vec!["min", "max"]);
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, FplError> {
        if !path.contains('.') {
            return self
                .document
                .get(path)
                .map(|block| block.keys().cloned().collect())
                .ok_or_else(|| FplError::PathNotFound {
                    path: path.to_string(),
                    hint: Some("No block with this name".into()),
                    code: Some(304),
                });
        }

        match self.get_value(path)? {
            Value::Object(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(FplError::TypeError {
                message: format!("Path '{}' is a {}, not an object", path, other.type_name()),
                line: 0,
                column: 0,
                hint: Some("Only blocks and objects have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists. A bare block name counts.
    pub fn has(&self, path: &str) -> bool {
        if path.contains('.') {
            self.get_value(path).is_ok()
        } else {
            self.has_block(path)
        }
    }
}

/// Attach the source line of the looked-up key to a type error.
fn enhance_error_with_line_info(e: FplError, path: &str, raw_content: &str) -> FplError {
    match e {
        FplError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                FplError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    column: 0,
                    hint,
                    code,
                }
            } else {
                FplError::TypeError { message, line: 0, column: 0, hint, code }
            }
        }
        other => other,
    }
}
