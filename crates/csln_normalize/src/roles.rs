/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Contributor roles.
//!
//! Segmenters often leave role and elision markers attached to names:
//! "In: D. Knuth (ed.)", "Edward Wood et al.", "trans. by A. Smith". The
//! routines here strip those markers before handing the text to the name
//! formatter, and move authors that are really editors to the `editor` field.

use crate::fields::{Field, FieldMapping, FieldMappingExt};
use crate::names::{parse_names, NameList};
use crate::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::LazyLock;

/// A leading "in", "in:", "ed.", "(ed.)", "ed. by", "edited by" or "Hrsg. v.".
/// A marker must be followed by a period, colon, parenthesis or whitespace,
/// so that "Edward" and "In-Young" survive. The bare "ed" is lower case only.
static LEADING_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:in(?:\s*:\s*|\s+))?(?:(?:eds?\.?|edited)\s+by\b\s*:?\s*|\(?(?:(?-i:eds?)|hrsg|hgg?)(?:\.\)?|\))?(?:\s+(?:von\b|v\.)|\s*:|\s)\s*|by\s+)?",
    )
    .expect("valid regex")
});

/// A trailing "(ed.)", "(eds)", "ed.", "(Hrsg.)" and friends. Outside
/// parentheses only the lower-case forms count, so that a final given name
/// "Ed" or "Ed." stays.
static TRAILING_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s,]+)(?:\(\s*(?:eds?|hrsg|hgg?|editors?|herausgeber)\.?\s*\)|(?-i:(?:eds?|hrsg|hgg?)\.?|Hrsg\.?|Hgg?\.))\s*$",
    )
    .expect("valid regex")
});

/// A parenthesized role marker anywhere in the text.
static EMBEDDED_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(?:eds?|hrsg|hgg?)\.?\s*\)").expect("valid regex")
});

/// A trailing "et al.", "u.a.", "u. a.", "and others" or "& others".
static ELISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s,]+)(?:et\s*al(?:ii|ia)?\b\.?|(?-i:u\.\s*a\.)|(?:and|&)\s+others\b\.?)\s*$",
    )
    .expect("valid regex")
});

static LEADING_TRANSLATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:translated|transl|trans|übersetzt|übers|traduit|trad)\b\.?(?:\s+(?:by|von|par)\b)?\s*:?\s*",
    )
    .expect("valid regex")
});

static TRAILING_TRANSLATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[\s,]+)\(?\s*(?:transl|trans|übers|trad)\b\.?\s*\)?\s*$")
        .expect("valid regex")
});

/// Whether author text carries an editor marker: "(ed.)" anywhere, or a
/// lower-case "ed." at the end.
pub fn has_editor_marker(text: &str) -> bool {
    EMBEDDED_ROLE.is_match(text) || TRAILING_ROLE.is_match(text)
}

/// Remove trailing elision markers, including configured ones.
pub fn strip_elision(text: &str, vocabulary: &Vocabulary) -> String {
    strip_trailing(text, vocabulary, &[&*ELISION])
}

/// Remove leading and trailing role markers and trailing elision markers.
pub fn strip_editor_markers(text: &str, vocabulary: &Vocabulary) -> String {
    let text = EMBEDDED_ROLE.replace_all(text, " ");
    let text = LEADING_ROLE.replace(&text, "");
    strip_trailing(&text, vocabulary, &[&*TRAILING_ROLE, &*ELISION])
}

/// Remove translator markers and trailing elision markers.
pub fn strip_translator_markers(text: &str, vocabulary: &Vocabulary) -> String {
    let text = LEADING_TRANSLATOR.replace(text, "");
    strip_trailing(&text, vocabulary, &[&*TRAILING_TRANSLATOR, &*ELISION])
}

/// Apply trailing patterns until none matches, so that
/// "Knuth et al. (eds.)" loses both markers.
fn strip_trailing(text: &str, vocabulary: &Vocabulary, patterns: &[&Regex]) -> String {
    let mut current = text.trim().to_string();
    loop {
        let mut next = current.clone();
        for pattern in patterns {
            next = pattern.replace(&next, "").trim_end().to_string();
        }
        for marker in vocabulary.elision_markers() {
            if let Some(stripped) = strip_phrase(&next, marker) {
                next = stripped.trim_end().to_string();
            }
        }
        let next = next.trim_end_matches(|c: char| c == ',' || c == ';').trim().to_string();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strip a lower-cased phrase from the end of `text`, matching case-insensitively
/// and only at a word start.
fn strip_phrase<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    if phrase.is_empty() {
        return None;
    }
    text.char_indices()
        .map(|(idx, _)| idx)
        .filter(|&idx| idx == 0 || text[..idx].ends_with(|c: char| c == ' ' || c == ','))
        .find(|&idx| text[idx..].trim_end().to_lowercase() == phrase)
        .map(|idx| &text[..idx])
}

fn names_of(text: &str, vocabulary: &Vocabulary) -> Option<NameList> {
    let names = parse_names(text, vocabulary);
    (!names.is_empty()).then_some(names)
}

/// Editor names with all role and elision markers removed.
pub fn editor_names(text: &str, vocabulary: &Vocabulary) -> Option<NameList> {
    names_of(&strip_editor_markers(text, vocabulary), vocabulary)
}

/// Normalize the `editor` field.
pub fn normalize_editor(mut fields: FieldMapping, vocabulary: &Vocabulary) -> FieldMapping {
    let Some(raw) = fields.text(Field::Editor) else {
        return fields;
    };
    match editor_names(raw, vocabulary) {
        Some(names) => fields.set(Field::Editor, names.to_string()),
        None => tracing::debug!(field = %Field::Editor, "no names recognized, field left unchanged"),
    }
    fields
}

/// Normalize the `author` field, moving it to `editor` when it carries an
/// editor marker. Reclassified names are appended to an existing editor.
pub fn normalize_author(mut fields: FieldMapping, vocabulary: &Vocabulary) -> FieldMapping {
    let Some(raw) = fields.text(Field::Author) else {
        return fields;
    };

    if !has_editor_marker(raw) {
        match names_of(&strip_elision(raw, vocabulary), vocabulary) {
            Some(names) => fields.set(Field::Author, names.to_string()),
            None => {
                tracing::debug!(field = %Field::Author, "no names recognized, field left unchanged")
            }
        }
        return fields;
    }

    let Some(names) = editor_names(raw, vocabulary) else {
        tracing::debug!(field = %Field::Author, "editor marker without names, field left unchanged");
        return fields;
    };
    tracing::trace!(%names, "reclassifying author as editor");

    let editor = match fields.text(Field::Editor) {
        Some(existing) => match editor_names(existing, vocabulary) {
            Some(mut list) => {
                list.extend(names);
                list.to_string()
            }
            None => format!("{} and {}", existing, names),
        },
        None => names.to_string(),
    };
    fields.take(Field::Author);
    fields.set(Field::Editor, editor);
    fields
}

/// Normalize the `translator` field.
pub fn normalize_translator(mut fields: FieldMapping, vocabulary: &Vocabulary) -> FieldMapping {
    let Some(raw) = fields.text(Field::Translator) else {
        return fields;
    };
    match names_of(&strip_translator_markers(raw, vocabulary), vocabulary) {
        Some(names) => fields.set(Field::Translator, names.to_string()),
        None => {
            tracing::debug!(field = %Field::Translator, "no names recognized, field left unchanged")
        }
    }
    fields
}
