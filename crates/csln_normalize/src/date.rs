/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Free-order date extraction.
//!
//! Citation dates show up as "(July 2009)", "(1997 Sept.)", "15 May 1984" or
//! "2009-07-15". The text is tokenized into digit runs, words and single
//! characters, and the parts are picked out by shape rather than position.

use crate::fields::{Field, FieldMapping, FieldMappingExt};
use crate::vocabulary::Vocabulary;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use winnow::combinator::{alt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// A year with optional month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StructuredDate {
    pub year: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
    /// Only set when `month` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,
}

impl fmt::Display for StructuredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
            if let Some(day) = self.day {
                write!(f, "-{:02}", day)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateToken<'a> {
    Digits(&'a str),
    Word(&'a str),
    Other(char),
}

fn date_token<'a>(input: &mut &'a str) -> Result<DateToken<'a>, ErrMode<ContextError>> {
    alt((
        take_while(1.., |c: char| c.is_ascii_digit()).map(DateToken::Digits),
        take_while(1.., |c: char| c.is_alphabetic()).map(DateToken::Word),
        any.map(DateToken::Other),
    ))
    .parse_next(input)
}

fn date_tokens<'a>(input: &mut &'a str) -> Result<Vec<DateToken<'a>>, ErrMode<ContextError>> {
    repeat(0.., date_token).parse_next(input)
}

fn tokenize(text: &str) -> Vec<DateToken<'_>> {
    let mut input = text;
    date_tokens(&mut input).unwrap_or_default()
}

fn small_number(digits: &str, range: std::ops::RangeInclusive<u8>) -> Option<u8> {
    if digits.len() > 2 {
        return None;
    }
    digits.parse::<u8>().ok().filter(|n| range.contains(n))
}

/// A `YYYY-MM` or `YYYY-MM-DD` run.
fn iso_date(tokens: &[DateToken<'_>]) -> Option<StructuredDate> {
    tokens.windows(3).enumerate().find_map(|(idx, window)| {
        let [DateToken::Digits(year), DateToken::Other('-'), DateToken::Digits(month)] = window
        else {
            return None;
        };
        if year.len() != 4 {
            return None;
        }
        let month = small_number(month, 1..=12)?;
        let day = match tokens.get(idx + 3..idx + 5) {
            Some([DateToken::Other('-'), DateToken::Digits(day)]) => small_number(day, 1..=31),
            _ => None,
        };
        Some(StructuredDate {
            year: year.parse().ok()?,
            month: Some(month),
            day,
        })
    })
}

/// Extract a date from free text. Returns `None` when no four-digit year is found.
///
/// ```
/// use csln_normalize::date::{extract_date, StructuredDate};
/// use csln_normalize::Vocabulary;
///
/// let date = extract_date("(15 May 1984)", &Vocabulary::default());
/// assert_eq!(date, Some(StructuredDate { year: 1984, month: Some(5), day: Some(15) }));
/// ```
pub fn extract_date(text: &str, vocabulary: &Vocabulary) -> Option<StructuredDate> {
    let tokens = tokenize(text);

    let month = tokens.iter().find_map(|token| match token {
        DateToken::Word(word) => vocabulary.month(word),
        _ => None,
    });
    if month.is_none() {
        if let Some(date) = iso_date(&tokens) {
            return Some(date);
        }
    }

    let year = tokens.iter().find_map(|token| match token {
        DateToken::Digits(digits) if digits.len() == 4 => digits.parse::<i64>().ok(),
        _ => None,
    })?;
    // A digit run glued to a word ("2nd", "3rd") is an ordinal, not a day.
    let day = month.and_then(|_| {
        tokens.iter().enumerate().find_map(|(idx, token)| match token {
            DateToken::Digits(digits)
                if !matches!(tokens.get(idx + 1), Some(DateToken::Word(_))) =>
            {
                small_number(digits, 1..=31)
            }
            _ => None,
        })
    });

    Some(StructuredDate { year, month, day })
}

/// Normalize the `date` field into numeric `year`, `month` and `day` fields.
/// The `date` field is removed only when a year was found.
pub fn normalize_date(mut fields: FieldMapping, vocabulary: &Vocabulary) -> FieldMapping {
    let Some(raw) = fields.text(Field::Date) else {
        return fields;
    };
    let Some(date) = extract_date(raw, vocabulary) else {
        tracing::debug!(field = %Field::Date, "no year recognized, field left unchanged");
        return fields;
    };

    tracing::trace!(%date, "extracted date");
    fields.take(Field::Date);
    fields.set(Field::Year, date.year);
    if let Some(month) = date.month {
        fields.set(Field::Month, i64::from(month));
    }
    if let Some(day) = date.day {
        fields.set(Field::Day, i64::from(day));
    }
    fields
}
