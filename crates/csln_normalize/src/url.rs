/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! URL extraction.
//!
//! Reference lists dress URLs up in boilerplate ("Available at: ...",
//! "[Accessed 3 May 2020]"). The extractor strips that and returns the URL
//! exactly as written: it never adds a scheme and never trims punctuation
//! that belongs to the URL text.

use crate::fields::{Field, FieldMapping, FieldMappingExt};
use regex::{Match, Regex};
use std::sync::LazyLock;

static BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:available\s+(?:at|from)|retrieved\s+from)\b\s*:?|url\s*:)\s*")
        .expect("valid regex")
});

/// One or more bracketed annotations at the end: "[Retrieved today]".
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*\[[^\]]*\])+\s*$").expect("valid regex"));

static SCHEME_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b[a-z][a-z0-9+.\-]*://[^\s<>"\[\]]+"#).expect("valid regex")
});

/// A dot-separated host with an alphabetic top-level label, and an optional path.
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+[a-z]{2,}(?:/[^\s<>"\[\]]*)?"#)
        .expect("valid regex")
});

/// Extract a URL from free text, or `None` if nothing URL-shaped is present.
///
/// Scheme-qualified URLs win over bare host paths. A bare host only counts
/// when a path follows it or it ends the text, so "e.g. see example.org" does
/// not turn "e.g" into a host.
pub fn extract_url(text: &str) -> Option<&str> {
    let text = BOILERPLATE
        .find(text)
        .map_or(text, |m| &text[m.end()..]);
    let text = ANNOTATION.find(text).map_or(text, |m| &text[..m.start()]);

    longest(&SCHEME_URL, text, |_| true).or_else(|| {
        longest(&BARE_URL, text, |m| {
            m.as_str().contains('/') || text[m.end()..].trim().is_empty()
        })
    })
}

fn longest<'h>(
    re: &Regex,
    text: &'h str,
    accept: impl Fn(&Match<'h>) -> bool,
) -> Option<&'h str> {
    re.find_iter(text)
        .filter(|m| accept(m))
        .max_by_key(|m| m.len())
        .map(|m| m.as_str())
}

/// Normalize the `url` field.
pub fn normalize_url(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Url) else {
        return fields;
    };
    match extract_url(raw).map(str::to_string) {
        Some(url) => fields.set(Field::Url, url),
        None => tracing::debug!(field = %Field::Url, "no url recognized, field left unchanged"),
    }
    fields
}
