use super::*;

impl CfgDocument {
    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use dictcfg::CfgDocument;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = CfgDocument::from_file("settings.cfg")?;
    /// let port: u16 = config.get("server.port")?;
    /// let ratio: rust_decimal::Decimal = config.get("limits.ratio")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| {
            let line = helpers::find_config_line(path, &self.raw_content).map_or(0, |(l, _)| l);
            e.at_path(path, line)
        })
    }

    /// Like [`CfgDocument::get`], but a missing path is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value`. An empty path returns the whole document.
    pub fn get_value(&self, path: &str) -> Result<Value, ConfigError> {
        if path.trim().is_empty() {
            return Ok(Value::Document(self.document.clone()));
        }
        self.lookup(path)
            .cloned()
            .ok_or_else(|| ConfigError::MissingKey { path: path.to_string() })
    }

    /// Keys of the document at `path`, in document order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, ConfigError> {
        match self.get_value(path)? {
            Value::Document(doc) => Ok(doc.keys().map(str::to_string).collect()),
            other => Err(ConfigError::type_error("document", other.type_name()).at_path(path, 0)),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        path.trim().is_empty() || self.lookup(path).is_some()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.document.get(segments.next()?)?;
        for segment in segments {
            current = current.as_document()?.get(segment)?;
        }
        Some(current)
    }
}
