/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Name shapes.
//!
//! A segment group is classified up front into a sequence of [`NameShape`]s,
//! one per person. Each shape has a single formatting function, so the rules
//! for "Edgar A. Poe", "Poe, Edgar A." and "A, B, C" can be tested apart.
//!
//! Pairing a surname segment with the segment after it is the ambiguous step.
//! A segment can be a surname when it is a single token, or several tokens none
//! of which is an initial ("Aeschlimann Magnin"). The next segment is its given
//! part when it has at most one full word ("Edgar A.", "L.C.", "Herman"), or
//! when the surname is a single token ("Poe, Edgar Allan"). Two multi-word
//! segments in a row ("Aa Bb, Cc Dd") are two people in natural order.

use super::PersonName;
use crate::vocabulary::Vocabulary;

/// The forms one person's segments can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape<'a> {
    /// Given names before the surname in one segment: "Edgar A. Poe".
    /// A suffix may follow in its own segment: "John Smith, Jr.".
    Natural {
        name: &'a str,
        suffix: Option<&'a str>,
    },
    /// A surname segment and a given segment, with an optional suffix segment
    /// between or after them: "Poe, Edgar A.", "A, jr., B", "A, B, jr.".
    Inverted {
        surname: &'a str,
        given: Option<&'a str>,
        suffix: Option<&'a str>,
    },
    /// The unpaired last token of an odd-length enumeration: "C" in "A, B, C".
    ///
    /// Kept because existing data depends on it, though it most likely
    /// misreads a given name as a person. Do not build further rules on it.
    Lone(&'a str),
}

impl NameShape<'_> {
    /// Format this shape as a person. Returns `None` when no surname remains
    /// once suffixes are set aside.
    pub fn format(&self, vocabulary: &Vocabulary) -> Option<PersonName> {
        match *self {
            NameShape::Natural { name, suffix } => format_natural(name, suffix, vocabulary),
            NameShape::Inverted {
                surname,
                given,
                suffix,
            } => format_inverted(surname, given, suffix, vocabulary),
            NameShape::Lone(token) => format_lone(token),
        }
    }
}

/// Classify the segments of one group into per-person shapes, left to right.
pub fn classify<'a>(segments: &'a [String], vocabulary: &Vocabulary) -> Vec<NameShape<'a>> {
    let mut shapes = Vec::new();
    let mut i = 0;

    while i < segments.len() {
        let segment = segments[i].as_str();
        let at = |offset: usize| segments.get(i + offset).map(String::as_str);

        // "A, jr., B" or "John Smith, Jr."
        if let Some(suffix) = at(1).filter(|s| is_suffix_segment(s, vocabulary)) {
            let given = at(2).filter(|g| {
                is_surname_shaped(segment)
                    && !is_suffix_segment(g, vocabulary)
                    && is_given_shaped(g, segment, vocabulary)
            });
            let single = segment.split_whitespace().count() == 1;
            if given.is_some() || single {
                i += if given.is_some() { 3 } else { 2 };
                shapes.push(NameShape::Inverted {
                    surname: segment,
                    given,
                    suffix: Some(suffix),
                });
            } else {
                i += 2;
                shapes.push(NameShape::Natural {
                    name: segment,
                    suffix: Some(suffix),
                });
            }
            continue;
        }

        // "Poe, Edgar A." optionally followed by a suffix: "A, B, jr."
        if let Some(given) = at(1).filter(|g| {
            is_surname_shaped(segment) && is_given_shaped(g, segment, vocabulary)
        }) {
            let suffix = at(2).filter(|s| is_suffix_segment(s, vocabulary));
            i += if suffix.is_some() { 3 } else { 2 };
            shapes.push(NameShape::Inverted {
                surname: segment,
                given: Some(given),
                suffix,
            });
            continue;
        }

        i += 1;
        shapes.push(if segment.split_whitespace().count() > 1 {
            NameShape::Natural {
                name: segment,
                suffix: None,
            }
        } else {
            NameShape::Lone(segment)
        });
    }

    tracing::trace!(?shapes, "classified name segments");
    shapes
}

/// A one-to-three letter token starting upper-case that is either a single
/// letter or ends in a period: "A", "E.", "L.C.", "J.-P.".
pub fn is_initial(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    let Some(first) = letters.first() else {
        return false;
    };
    first.is_uppercase()
        && letters.len() <= 3
        && (token.chars().count() == 1 || token.ends_with('.'))
        && token
            .chars()
            .all(|c| c.is_alphabetic() || c == '.' || c == '-')
}

fn is_suffix_segment(segment: &str, vocabulary: &Vocabulary) -> bool {
    !segment.contains(char::is_whitespace) && vocabulary.is_suffix(segment)
}

fn is_surname_shaped(segment: &str) -> bool {
    let mut tokens = segment.split_whitespace().peekable();
    let first = tokens.next();
    tokens.peek().is_none() || first.into_iter().chain(tokens).all(|t| !is_initial(t))
}

fn is_given_shaped(segment: &str, surname: &str, vocabulary: &Vocabulary) -> bool {
    let words = segment
        .split_whitespace()
        .filter(|t| !is_initial(t) && !vocabulary.is_suffix(t))
        .count();
    words <= 1 || surname.split_whitespace().count() == 1
}

/// Render a given-name token: a bare single letter becomes an initial.
fn initialize(token: &str) -> String {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => format!("{}.", c),
        _ => token.to_string(),
    }
}

/// Split tokens into name tokens and suffix tokens, keeping order in both.
fn partition_suffixes<'a>(
    tokens: impl Iterator<Item = &'a str>,
    vocabulary: &Vocabulary,
) -> (Vec<&'a str>, Vec<&'a str>) {
    tokens.partition(|t| !vocabulary.is_suffix(t))
}

fn join_suffixes(found: Vec<&str>, explicit: Option<&str>) -> Option<String> {
    let all: Vec<&str> = explicit.into_iter().chain(found).collect();
    (!all.is_empty()).then(|| all.join(" "))
}

fn format_natural(name: &str, suffix: Option<&str>, vocabulary: &Vocabulary) -> Option<PersonName> {
    let (mut tokens, found) = partition_suffixes(name.split_whitespace(), vocabulary);
    let surname = tokens.pop()?.to_string();
    Some(PersonName {
        surname,
        given: tokens.into_iter().map(initialize).collect(),
        suffix: join_suffixes(found, suffix),
    })
}

fn format_inverted(
    surname: &str,
    given: Option<&str>,
    suffix: Option<&str>,
    vocabulary: &Vocabulary,
) -> Option<PersonName> {
    let (surname_tokens, mut found) = partition_suffixes(surname.split_whitespace(), vocabulary);
    if surname_tokens.is_empty() {
        return None;
    }
    let (given_tokens, given_suffixes) =
        partition_suffixes(given.unwrap_or_default().split_whitespace(), vocabulary);
    found.extend(given_suffixes);

    Some(PersonName {
        surname: surname_tokens.join(" "),
        given: given_tokens.into_iter().map(initialize).collect(),
        suffix: join_suffixes(found, suffix),
    })
}

fn format_lone(token: &str) -> Option<PersonName> {
    Some(PersonName {
        surname: token.to_string(),
        given: Vec::new(),
        suffix: None,
    })
}
