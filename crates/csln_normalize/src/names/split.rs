/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Splits raw name text into groups of comma-separated segments.

use regex::Regex;
use std::sync::LazyLock;

/// Hard separators between people: semicolons, ellipses and the connectors
/// "and", "und" and "&", each optionally preceded by a comma. Connector
/// words match in any case.
static PERSON_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:;|\.\.\.|…|,?\s*\b(?i:and|und)\b|,?\s*&)\s*").expect("valid regex")
});

/// An ordered run of comma-separated segments. A person never spans two groups.
pub type SegmentGroup = Vec<String>;

/// Split raw name text into segment groups.
///
/// Connectors, semicolons and ellipsis markers close a group and are dropped.
/// Within a group the text is cut on commas; segments are trimmed and empty
/// ones discarded, so "Asgaard, G., … Botros, N." yields
/// `[["Asgaard", "G."], ["Botros", "N."]]`.
pub fn split(text: &str) -> Vec<SegmentGroup> {
    PERSON_BOUNDARY
        .split(text)
        .map(split_commas)
        .filter(|group| !group.is_empty())
        .collect()
}

fn split_commas(text: &str) -> SegmentGroup {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(groups: &[&[&str]]) -> Vec<SegmentGroup> {
        groups
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_commas_within_one_group() {
        assert_eq!(split("A, B, C, D"), owned(&[&["A", "B", "C", "D"]]));
    }

    #[test]
    fn test_semicolons_separate_people() {
        assert_eq!(
            split("Edgar A. Poe; Herman Melville"),
            owned(&[&["Edgar A. Poe"], &["Herman Melville"]])
        );
    }

    #[test]
    fn test_ellipsis_closes_group() {
        let expected = owned(&[&["Plath", "L.C.", "Asgaard", "G."], &["Botros", "N."]]);
        assert_eq!(split("Plath, L.C., Asgaard, G., ... Botros, N."), expected);
        assert_eq!(split("Plath, L.C., Asgaard, G., … Botros, N."), expected);
    }

    #[test]
    fn test_connectors() {
        assert_eq!(
            split("Aa Bb, Cc Dd, and E F G"),
            owned(&[&["Aa Bb", "Cc Dd"], &["E F G"]])
        );
        assert_eq!(
            split("Smith, J. & Jones, K."),
            owned(&[&["Smith", "J."], &["Jones", "K."]])
        );
        assert_eq!(split("Müller und Schmidt"), owned(&[&["Müller"], &["Schmidt"]]));
    }

    #[test]
    fn test_connector_inside_word_is_kept() {
        assert_eq!(split("Sandra Anderson"), owned(&[&["Sandra Anderson"]]));
    }

    #[test]
    fn test_upper_case_connectors() {
        assert_eq!(split("Smith AND Jones"), owned(&[&["Smith"], &["Jones"]]));
        assert_eq!(split("Müller UND Schmidt"), owned(&[&["Müller"], &["Schmidt"]]));
    }

    #[test]
    fn test_empty_input() {
        assert!(split("").is_empty());
        assert!(split(" ; , ").is_empty());
    }
}
