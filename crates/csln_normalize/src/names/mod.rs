/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Person names.
//!
//! Raw name text goes through two steps: [`split`] cuts it into groups of
//! comma-separated segments, and [`format`] turns each group into
//! [`PersonName`]s by way of the shapes in [`shape`]. The result renders in
//! the canonical "Surname, Given." form, joined with `" and "`:
//!
//! ```
//! use csln_normalize::names::normalize_names;
//!
//! assert_eq!(
//!     normalize_names("Edgar A. Poe, Herman Melville"),
//!     "Poe, Edgar A. and Melville, Herman"
//! );
//! ```
//!
//! Rendering is idempotent: normalizing canonical output returns it unchanged.

pub mod shape;
pub mod split;

pub use shape::{classify, is_initial, NameShape};
pub use split::{split, SegmentGroup};

use crate::vocabulary::Vocabulary;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One formatted person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PersonName {
    pub surname: String,
    /// Full given names and initials, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
    /// A generational or degree suffix such as "jr.", rendered after the surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surname)?;
        if let Some(suffix) = &self.suffix {
            write!(f, ", {}", suffix)?;
        }
        if !self.given.is_empty() {
            write!(f, ", {}", self.given.join(" "))?;
        }
        Ok(())
    }
}

/// An ordered list of people.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NameList(pub Vec<PersonName>);

impl NameList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonName> {
        self.0.iter()
    }

    /// Append the people of another list.
    pub fn extend(&mut self, other: NameList) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", names.join(" and "))
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a PersonName;
    type IntoIter = std::slice::Iter<'a, PersonName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Format segment groups as a list of people.
pub fn format(groups: &[SegmentGroup], vocabulary: &Vocabulary) -> NameList {
    NameList(
        groups
            .iter()
            .flat_map(|group| {
                classify(group, vocabulary)
                    .into_iter()
                    .filter_map(|shape| shape.format(vocabulary))
                    .collect::<Vec<_>>()
            })
            .collect(),
    )
}

/// Split and format raw name text.
pub fn parse_names(text: &str, vocabulary: &Vocabulary) -> NameList {
    format(&split(text), vocabulary)
}

/// Normalize raw name text with the built-in vocabulary.
pub fn normalize_names(text: &str) -> String {
    parse_names(text, &Vocabulary::default()).to_string()
}
