/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! CSLN Normalize
//!
//! This crate rewrites the raw field text a citation segmenter produces into
//! canonical bibliographic data: name lists in "Surname, Given." form,
//! numeric year/month/day fields, bare URLs, and tidied titles, containers,
//! volumes and pages.
//!
//! Every routine takes a [`FieldMapping`] and returns it. Normalization never
//! fails: a field that cannot be read is returned unchanged, and fields the
//! normalizer does not know pass through untouched.
//!
//! # Example
//!
//! ```rust
//! use csln_normalize::{fields, Field, FieldMappingExt, Normalizer};
//!
//! let normalizer = Normalizer::new();
//! let record = normalizer.normalize_all(fields! {
//!     "author" => "In: D. Knuth (ed.)",
//!     "date" => "(July 2009)",
//!     "url" => "Available at: https://example.org/x.pdf [Retrieved today]",
//! });
//!
//! assert_eq!(record.text(Field::Author), None);
//! assert_eq!(record.text(Field::Editor), Some("Knuth, D."));
//! assert_eq!(record.number(Field::Year), Some(2009));
//! assert_eq!(record.number(Field::Month), Some(7));
//! assert_eq!(record.text(Field::Url), Some("https://example.org/x.pdf"));
//! ```

mod macros;

pub mod bibliographic;
pub mod config;
pub mod date;
pub mod error;
pub mod fields;
pub mod names;
pub mod normalizer;
pub mod roles;
pub mod url;
pub mod vocabulary;

pub use config::NormalizerConfig;
pub use date::StructuredDate;
pub use error::{NormalizeError, Result};
pub use fields::{Field, FieldMapping, FieldMappingExt, FieldValue};
pub use names::{NameList, PersonName};
pub use normalizer::Normalizer;
pub use vocabulary::Vocabulary;
