/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Title, container, edition, volume, pages, location and ISBN fields.

use crate::fields::{Field, FieldMapping, FieldMappingExt};
use regex::Regex;
use std::sync::LazyLock;

/// Opening and closing quote characters stripped from titles.
const QUOTES: &[char] = &['"', '\'', '“', '”', '„', '‘', '’', '‚', '«', '»', '‹', '›'];

/// Trailing edge punctuation.
const EDGE_PUNCTUATION: &[char] = &['.', ',', ':', ';'];

const ORDINALS: &[(&str, i64)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

/// An edition statement closing a title: "Walden, 2nd ed.", "Faust (3. Aufl.)".
static TITLE_EDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[\s,;:(\[]+(\d+|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\s*(?:st|nd|rd|th|\.)?\s*(?:ed(?:ition)?|aufl(?:age)?)\b\.?\s*[)\]]?\s*$",
    )
    .expect("valid regex")
});

static EDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d+|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\s*(?:st|nd|rd|th|\.)?\s*(?:(?:ed(?:ition)?|aufl(?:age)?)\b\.?)?\s*$",
    )
    .expect("valid regex")
});

static CONTAINER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*in\b\s*:?\s+").expect("valid regex"));

/// "12", "vol. 12", "Bd. 4", "12(3)", "12, no. 3".
static VOLUME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:vol(?:ume)?|bd|band|jg|jahrgang)\.?\s*)?(\d+)\s*(?:\(\s*(\d+)\s*\)|[,:]?\s*(?:no|nr|num|issue|heft|h)\.?\s*(\d+))?\s*[.,:;]?\s*$",
    )
    .expect("valid regex")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:no|nr|num(?:ber)?|issue|heft|h)\.?\s*)?(\d+)\s*[.,:;]?\s*$")
        .expect("valid regex")
});

/// A page range with any dash form between the ends.
static PAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:pp?\.?\s*|s\.\s*)?([a-z]?\d+[a-z]?)\s*(?:-+|[–—‐‑−])\s*([a-z]?\d+[a-z]?)\s*\.?\s*$",
    )
    .expect("valid regex")
});

/// A single page or a page count: "pp. 123", "123 pp.", "240 S.".
static PAGE_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:pp?\.?\s*)?(\d+)\s*(?:pp?\.|pages|s\.|seiten)?\s*\.?\s*$")
        .expect("valid regex")
});

/// ISBN-13 before ISBN-10, so a 13-digit run is never cut short.
static ISBN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b97[89](?:[\- ]?\d){10}\b|\b(?:\d[\- ]?){9}[\dx]\b").expect("valid regex")
});

fn trim_edges(text: &str) -> &str {
    text.trim().trim_end_matches(EDGE_PUNCTUATION).trim()
}

fn edition_number(token: &str) -> Option<i64> {
    token.parse().ok().or_else(|| {
        let token = token.to_lowercase();
        ORDINALS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, n)| *n)
    })
}

/// Remove one pair of surrounding quotes, or a lone leading or trailing one.
fn strip_quotes(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(QUOTES).unwrap_or(text);
    text.strip_suffix(QUOTES).unwrap_or(text).trim()
}

/// Normalize the `title` field. An edition statement at the end of the title
/// moves to `edition` unless that field is already present.
pub fn normalize_title(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Title) else {
        return fields;
    };

    let mut title = trim_edges(strip_quotes(raw)).to_string();
    if fields.text(Field::Edition).is_none() && fields.number(Field::Edition).is_none() {
        let found = TITLE_EDITION
            .captures(&title)
            .and_then(|caps| Some((caps.get(0)?.start(), edition_number(&caps[1])?)));
        if let Some((start, edition)) = found {
            tracing::trace!(edition, "moving edition statement out of title");
            title = trim_edges(&title[..start]).to_string();
            fields.set(Field::Edition, edition);
        }
    }
    let title = strip_quotes(&title).to_string();

    if title.is_empty() {
        tracing::debug!(field = %Field::Title, "title is empty after trimming, field left unchanged");
        return fields;
    }
    fields.set(Field::Title, title);
    fields
}

/// Normalize a container-like field (`container`, `booktitle` or `journal`).
pub fn normalize_container(mut fields: FieldMapping, field: Field) -> FieldMapping {
    let Some(raw) = fields.text(field) else {
        return fields;
    };
    let stripped = CONTAINER_PREFIX.replace(raw, "");
    let container = trim_edges(strip_quotes(&stripped)).to_string();
    if container.is_empty() {
        tracing::debug!(field = %field, "container is empty after trimming, field left unchanged");
        return fields;
    }
    fields.set(field, container);
    fields
}

/// Normalize the `edition` field to a number when it is one.
pub fn normalize_edition(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Edition) else {
        return fields;
    };
    match EDITION
        .captures(raw)
        .and_then(|caps| edition_number(&caps[1]))
    {
        Some(edition) => fields.set(Field::Edition, edition),
        None => {
            let trimmed = trim_edges(raw).to_string();
            if trimmed.is_empty() {
                tracing::debug!(field = %Field::Edition, "unrecognized edition, field left unchanged");
            } else {
                fields.set(Field::Edition, trimmed);
            }
        }
    }
    fields
}

/// Normalize the `volume` field. An issue number folded into the volume
/// ("12(3)") moves to `number` unless that field is already present.
pub fn normalize_volume(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Volume) else {
        return fields;
    };
    let parsed = VOLUME.captures(raw).and_then(|caps| {
        let volume = caps[1].parse::<i64>().ok()?;
        let number = caps
            .get(2)
            .or_else(|| caps.get(3))
            .and_then(|m| m.as_str().parse::<i64>().ok());
        Some((volume, number))
    });
    let Some((volume, number)) = parsed else {
        tracing::debug!(field = %Field::Volume, "unrecognized volume, field left unchanged");
        return fields;
    };

    fields.set(Field::Volume, volume);
    if let Some(number) = number {
        if fields.contains_key(Field::Number.as_str()) {
            tracing::debug!(number, "volume carries an issue number but number is already set");
        } else {
            fields.set(Field::Number, number);
        }
    }
    fields
}

/// Normalize the `number` field to an integer: "no. 3" becomes 3.
pub fn normalize_number(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Number) else {
        return fields;
    };
    match NUMBER
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i64>().ok())
    {
        Some(number) => fields.set(Field::Number, number),
        None => tracing::debug!(field = %Field::Number, "unrecognized number, field left unchanged"),
    }
    fields
}

/// Normalize the `pages` field: ranges become "start--end", a page count
/// loses its "pp." marker.
pub fn normalize_pages(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Pages) else {
        return fields;
    };
    let pages = if let Some(caps) = PAGE_RANGE.captures(raw) {
        format!("{}--{}", &caps[1], &caps[2])
    } else if let Some(caps) = PAGE_COUNT.captures(raw) {
        caps[1].to_string()
    } else {
        tracing::debug!(field = %Field::Pages, "unrecognized pages, field left unchanged");
        return fields;
    };
    fields.set(Field::Pages, pages);
    fields
}

/// Normalize the `location` field, splitting "New York: Wiley" into location
/// and publisher when no publisher is present.
pub fn normalize_location(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Location) else {
        return fields;
    };
    let has_publisher = fields.contains_key(Field::Publisher.as_str());

    let (location, publisher) = match raw.split_once(':') {
        Some((location, publisher)) if !has_publisher => {
            (trim_edges(location).to_string(), trim_edges(publisher).to_string())
        }
        _ => (trim_edges(raw).to_string(), String::new()),
    };

    if location.is_empty() {
        tracing::debug!(field = %Field::Location, "location is empty after trimming, field left unchanged");
        return fields;
    }
    fields.set(Field::Location, location);
    if !publisher.is_empty() {
        fields.set(Field::Publisher, publisher);
    }
    fields
}

/// The first ISBN-shaped token in `text`, with separators removed.
pub fn extract_isbn(text: &str) -> Option<String> {
    ISBN.find(text).map(|m| {
        m.as_str()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    })
}

/// Normalize the `isbn` field.
pub fn normalize_isbn(mut fields: FieldMapping) -> FieldMapping {
    let Some(raw) = fields.text(Field::Isbn) else {
        return fields;
    };
    match extract_isbn(raw) {
        Some(isbn) => fields.set(Field::Isbn, isbn),
        None => tracing::debug!(field = %Field::Isbn, "no isbn recognized, field left unchanged"),
    }
    fields
}
