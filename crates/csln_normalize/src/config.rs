/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Normalizer configuration.
//!
//! Configuration only ever adds vocabulary: extra month tokens for another
//! locale, extra name suffixes, extra elision phrases. The built-in English
//! and German tables are always present.
//!
//! ```yaml
//! months:
//!   juin: 6
//!   juillet: 7
//! suffixes: [fils]
//! elision-markers: [et coll.]
//! ```

use crate::error::{NormalizeError, Result};
use crate::vocabulary::Vocabulary;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Additional vocabulary for a [`Normalizer`](crate::Normalizer).
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct NormalizerConfig {
    /// Month tokens and their month number (1-12).
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub months: IndexMap<String, u8>,
    /// Name suffixes such as "fils".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
    /// Trailing phrases that stand for omitted names, such as "et coll.".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elision_markers: Vec<String>,
}

impl NormalizerConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| NormalizeError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file. Files ending in `.json` are
    /// read as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
        let parse_error = |message: String| NormalizeError::Parse {
            path: path.display().to_string(),
            message,
        };

        let config: Self = match ext {
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded normalizer config");
        Ok(config)
    }

    /// Check month numbers and reject blank terms.
    pub fn validate(&self) -> Result<()> {
        for (token, &value) in &self.months {
            if token.trim().is_empty() {
                return Err(NormalizeError::EmptyTerm("month"));
            }
            if !(1..=12).contains(&value) {
                return Err(NormalizeError::InvalidMonth {
                    token: token.clone(),
                    value,
                });
            }
        }
        if self.suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(NormalizeError::EmptyTerm("suffix"));
        }
        if self.elision_markers.iter().any(|s| s.trim().is_empty()) {
            return Err(NormalizeError::EmptyTerm("elision marker"));
        }
        Ok(())
    }

    /// The built-in vocabulary extended with the configured terms.
    pub fn vocabulary(&self) -> Vocabulary {
        let mut vocabulary = Vocabulary::default();
        for (token, &month) in &self.months {
            vocabulary.add_month(token, month);
        }
        for suffix in &self.suffixes {
            vocabulary.add_suffix(suffix);
        }
        for marker in &self.elision_markers {
            vocabulary.add_elision_marker(marker);
        }
        vocabulary
    }
}
