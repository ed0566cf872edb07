// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::ast::{Document, Value};
use crate::constants::ConstantTable;
use crate::error::ConfigError;
use crate::parser;

mod access;
mod conversion;
mod helpers;

/// A parsed config file together with its source text and constants.
///
/// The source is kept so type errors can point back at the offending line.
pub struct CfgDocument {
    document: Document,
    constants: ConstantTable,
    raw_content: String,
}

impl CfgDocument {
    /// Load and parse a config file.
    ///
    /// # Example
    /// ```ignore
    /// let config = CfgDocument::from_file("settings.cfg")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let content = fs::read_to_string(path_ref).map_err(|e| ConfigError::Read {
            path: path_ref.display().to_string(),
            source: e,
        })?;
        debug!(path = %path_ref.display(), bytes = content.len(), "config file read");
        Self::from_str(&content)
    }

    /// Load a config file with fallback support.
    ///
    /// The fallback is only tried when the primary file cannot be read; a
    /// primary file with a syntax error is reported as such.
    pub fn from_file_with_fallback<P: AsRef<Path>>(primary: P, fallback: P) -> Result<Self, ConfigError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(ConfigError::Read { path, source }) => {
                warn!(%path, error = %source, "primary config unreadable, trying fallback");
                Self::from_file(&fallback).map_err(|e| match e {
                    ConfigError::Read { .. } => ConfigError::NoConfigFound {
                        primary: primary.as_ref().display().to_string(),
                        fallback: fallback.as_ref().display().to_string(),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Parse config text directly (no file I/O).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut parser = parser::Parser::new(content);
        let document = parser.parse_document()?;

        Ok(Self {
            document,
            constants: parser.into_constants(),
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Constants declared by the source, after the last redeclaration.
    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}
