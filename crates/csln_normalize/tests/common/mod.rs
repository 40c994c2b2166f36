/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use csln_normalize::{Field, FieldMapping, FieldValue, Normalizer};

// --- Helper Functions for Test Data Construction ---

/// A mapping holding one text field.
pub fn single(field: Field, text: &str) -> FieldMapping {
    let mut mapping = FieldMapping::new();
    mapping.insert(field.as_str().to_string(), FieldValue::from(text));
    mapping
}

/// A mapping of text fields, in the given order.
pub fn record(pairs: &[(&str, &str)]) -> FieldMapping {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), FieldValue::from(*value)))
        .collect()
}

/// The field names of a mapping, in order.
pub fn keys(mapping: &FieldMapping) -> Vec<&str> {
    mapping.keys().map(String::as_str).collect()
}

/// Normalize raw name text with the default vocabulary.
pub fn names(text: &str) -> String {
    Normalizer::new().normalize_names(text)
}

/// A reference list's worth of raw records for batch tests.
pub fn sample_records() -> Vec<FieldMapping> {
    vec![
        record(&[
            ("author", "Edgar A. Poe, Herman Melville"),
            ("title", "\"Tales.\""),
            ("date", "(July 2009)"),
        ]),
        record(&[
            ("author", "D. Knuth (ed.)"),
            ("date", "(1997 Okt.)"),
            ("pages", "pp. 123-130"),
        ]),
        record(&[
            ("editor", "In: Edward Wood et al."),
            ("url", "Available at: example.org/x.pdf [Retrieved today]"),
            ("date", "(15 May 1984)"),
        ]),
        record(&[
            ("author", "Plath, L.C., Asgaard, G., ... Botros, N."),
            ("volume", "12(3)"),
            ("location", "New York: Wiley"),
        ]),
    ]
}
