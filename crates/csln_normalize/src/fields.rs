/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field mappings hold one citation's raw or normalized metadata.
//!
//! The segmenter hands the normalizer a mapping from field name to raw text.
//! Normalization rewrites values in place, and may rename fields
//! (`author` becomes `editor`) or split them (`date` becomes `year`, `month`
//! and `day`). Keys the normalizer does not recognize pass through untouched.

use crate::str_enum;
use indexmap::IndexMap;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value that could be either a number or text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum FieldValue {
    Number(i64),
    Text(String),
}

impl FieldValue {
    /// The text of the value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The numeric value, if it is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// The record of one citation's metadata, keyed by field name.
///
/// Insertion order is kept so that output reads in the order fields were
/// produced; it carries no meaning.
pub type FieldMapping = IndexMap<String, FieldValue>;

str_enum! {
    /// The field names the normalizer knows how to rewrite or produce.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Field {
        Author = "author",
        Editor = "editor",
        Translator = "translator",
        Date = "date",
        Year = "year",
        Month = "month",
        Day = "day",
        Url = "url",
        Title = "title",
        Container = "container",
        Booktitle = "booktitle",
        Journal = "journal",
        Edition = "edition",
        Volume = "volume",
        Number = "number",
        Pages = "pages",
        Location = "location",
        Publisher = "publisher",
        Isbn = "isbn",
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed access to a [`FieldMapping`] by [`Field`].
pub trait FieldMappingExt {
    /// The text value of a field, if present and textual.
    fn text(&self, field: Field) -> Option<&str>;
    /// The numeric value of a field, if present and numeric.
    fn number(&self, field: Field) -> Option<i64>;
    /// Set a field, replacing any previous value in its current position.
    fn set(&mut self, field: Field, value: impl Into<FieldValue>);
    /// Remove a field, keeping the order of the remaining fields.
    fn take(&mut self, field: Field) -> Option<FieldValue>;
}

impl FieldMappingExt for FieldMapping {
    fn text(&self, field: Field) -> Option<&str> {
        self.get(field.as_str()).and_then(FieldValue::as_text)
    }

    fn number(&self, field: Field) -> Option<i64> {
        self.get(field.as_str()).and_then(FieldValue::as_number)
    }

    fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.insert(field.as_str().to_string(), value.into());
    }

    fn take(&mut self, field: Field) -> Option<FieldValue> {
        self.shift_remove(field.as_str())
    }
}
