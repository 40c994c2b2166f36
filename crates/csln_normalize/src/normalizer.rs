/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The [`Normalizer`] ties the field routines to one vocabulary.

use crate::bibliographic;
use crate::config::NormalizerConfig;
use crate::date;
use crate::error::Result;
use crate::fields::{Field, FieldMapping};
use crate::names::{self, NameList};
use crate::roles;
use crate::url;
use crate::vocabulary::Vocabulary;
use std::path::Path;

/// Rewrites raw citation fields into canonical form.
///
/// A normalizer holds nothing but its vocabulary, so it is cheap to clone
/// and can be shared between threads. Every routine takes a mapping and
/// returns it, rewritten where the field was recognized and untouched where
/// it was not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalizer {
    vocabulary: Vocabulary,
}

impl Normalizer {
    /// A normalizer with the built-in English and German vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer with the built-in vocabulary extended by `config`.
    pub fn with_config(config: &NormalizerConfig) -> Self {
        Self {
            vocabulary: config.vocabulary(),
        }
    }

    /// Load a configuration file and build a normalizer from it.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Ok(Self::with_config(&NormalizerConfig::from_path(path)?))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse raw name text.
    pub fn parse_names(&self, text: &str) -> NameList {
        names::parse_names(text, &self.vocabulary)
    }

    /// Render raw name text in canonical form.
    pub fn normalize_names(&self, text: &str) -> String {
        self.parse_names(text).to_string()
    }

    pub fn normalize_author(&self, fields: FieldMapping) -> FieldMapping {
        roles::normalize_author(fields, &self.vocabulary)
    }

    pub fn normalize_editor(&self, fields: FieldMapping) -> FieldMapping {
        roles::normalize_editor(fields, &self.vocabulary)
    }

    pub fn normalize_translator(&self, fields: FieldMapping) -> FieldMapping {
        roles::normalize_translator(fields, &self.vocabulary)
    }

    pub fn normalize_url(&self, fields: FieldMapping) -> FieldMapping {
        url::normalize_url(fields)
    }

    pub fn normalize_date(&self, fields: FieldMapping) -> FieldMapping {
        date::normalize_date(fields, &self.vocabulary)
    }

    pub fn normalize_title(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_title(fields)
    }

    /// Normalize one of `container`, `booktitle` or `journal`.
    pub fn normalize_container(&self, fields: FieldMapping, field: Field) -> FieldMapping {
        bibliographic::normalize_container(fields, field)
    }

    pub fn normalize_edition(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_edition(fields)
    }

    pub fn normalize_volume(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_volume(fields)
    }

    pub fn normalize_number(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_number(fields)
    }

    pub fn normalize_pages(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_pages(fields)
    }

    pub fn normalize_location(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_location(fields)
    }

    pub fn normalize_isbn(&self, fields: FieldMapping) -> FieldMapping {
        bibliographic::normalize_isbn(fields)
    }

    /// Run the routine that owns `field`. Fields without a routine of their
    /// own (`year`, `month`, `day`, `publisher`) are returned unchanged.
    pub fn normalize(&self, field: Field, fields: FieldMapping) -> FieldMapping {
        match field {
            Field::Author => self.normalize_author(fields),
            Field::Editor => self.normalize_editor(fields),
            Field::Translator => self.normalize_translator(fields),
            Field::Date => self.normalize_date(fields),
            Field::Url => self.normalize_url(fields),
            Field::Title => self.normalize_title(fields),
            Field::Container | Field::Booktitle | Field::Journal => {
                self.normalize_container(fields, field)
            }
            Field::Edition => self.normalize_edition(fields),
            Field::Volume => self.normalize_volume(fields),
            Field::Number => self.normalize_number(fields),
            Field::Pages => self.normalize_pages(fields),
            Field::Location => self.normalize_location(fields),
            Field::Isbn => self.normalize_isbn(fields),
            Field::Year | Field::Month | Field::Day | Field::Publisher => fields,
        }
    }

    /// Run the routine for a field given by name. Unknown names are a no-op.
    pub fn normalize_named(&self, name: &str, fields: FieldMapping) -> FieldMapping {
        match Field::from_name(name) {
            Some(field) => self.normalize(field, fields),
            None => fields,
        }
    }

    /// Run every routine whose field is present.
    ///
    /// Authors are classified first so that the editor routine sees authors
    /// that turned out to be editors. The title routine runs before the
    /// edition routine so that an edition moved out of the title is normalized
    /// too, and the volume routine before the number routine.
    pub fn normalize_all(&self, fields: FieldMapping) -> FieldMapping {
        Field::ALL.iter().fold(fields, |fields, &field| {
            if fields.contains_key(field.as_str()) {
                self.normalize(field, fields)
            } else {
                fields
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use crate::fields::FieldMappingExt;

    #[test]
    fn test_field_order_supports_normalize_all() {
        let position = |field: Field| Field::ALL.iter().position(|f| *f == field);
        assert!(position(Field::Author) < position(Field::Editor));
        assert!(position(Field::Title) < position(Field::Edition));
        assert!(position(Field::Volume) < position(Field::Number));
    }

    #[test]
    fn test_dispatch_by_name() {
        let normalizer = Normalizer::new();
        let out = normalizer.normalize_named("url", fields! { "url" => "URL: http://a.org/" });
        assert_eq!(out.text(Field::Url), Some("http://a.org/"));

        let input = fields! { "keywords" => "a; b" };
        assert_eq!(normalizer.normalize_named("keywords", input.clone()), input);
    }

    #[test]
    fn test_config_extends_routines() {
        let config = NormalizerConfig::from_yaml_str("months:\n  juin: 6\n").unwrap();
        let normalizer = Normalizer::with_config(&config);
        let out = normalizer.normalize_date(fields! { "date" => "juin 1999" });
        assert_eq!(out.number(Field::Month), Some(6));
        assert_eq!(out.number(Field::Year), Some(1999));
    }

    #[test]
    fn test_normalizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Normalizer>();
    }
}
