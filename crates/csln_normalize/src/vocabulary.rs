/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Lookup tables for month names and name suffixes.
//!
//! Keys are stored lower-cased with any trailing period removed, so "Sept.",
//! "SEPT" and "sept" all hit the same entry. English and German forms live
//! side by side; new locales are added as rows, or at runtime through
//! [`NormalizerConfig`](crate::NormalizerConfig).

use std::collections::{HashMap, HashSet};

/// Month tokens and their month number.
pub const MONTHS: &[(&str, u8)] = &[
    ("january", 1),
    ("jan", 1),
    ("januar", 1),
    ("jänner", 1),
    ("jän", 1),
    ("february", 2),
    ("feb", 2),
    ("febr", 2),
    ("februar", 2),
    ("march", 3),
    ("mar", 3),
    ("märz", 3),
    ("maerz", 3),
    ("mär", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("mai", 5),
    ("june", 6),
    ("jun", 6),
    ("juni", 6),
    ("july", 7),
    ("jul", 7),
    ("juli", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
    ("dezember", 12),
    ("dez", 12),
];

/// Generational and degree suffixes that follow a surname. "V" is left out,
/// since it is far more often an initial.
pub const NAME_SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "vi", "vii", "viii", "phd", "ph.d", "md", "m.d", "esq",
];

/// Lower-case a token and drop one trailing period.
pub fn term_key(token: &str) -> String {
    let token = token.trim();
    token.strip_suffix('.').unwrap_or(token).to_lowercase()
}

/// Look up a month token in the built-in table.
pub fn month_number(token: &str) -> Option<u8> {
    let key = term_key(token);
    MONTHS
        .iter()
        .find(|(term, _)| *term == key)
        .map(|(_, month)| *month)
}

/// Whether a token is a built-in name suffix.
pub fn is_name_suffix(token: &str) -> bool {
    let key = term_key(token);
    NAME_SUFFIXES.contains(&key.as_str())
}

/// The built-in tables plus any terms added by configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    months: HashMap<String, u8>,
    suffixes: HashSet<String>,
    elision_markers: Vec<String>,
}

impl Vocabulary {
    /// Add a month token. The token is key-normalized before insertion.
    pub fn add_month(&mut self, token: &str, month: u8) {
        self.months.insert(term_key(token), month);
    }

    /// Add a name suffix.
    pub fn add_suffix(&mut self, token: &str) {
        self.suffixes.insert(term_key(token));
    }

    /// Add a trailing elision phrase, such as "mit weiteren".
    pub fn add_elision_marker(&mut self, phrase: &str) {
        self.elision_markers.push(phrase.trim().to_lowercase());
    }

    pub fn month(&self, token: &str) -> Option<u8> {
        month_number(token).or_else(|| self.months.get(&term_key(token)).copied())
    }

    pub fn is_suffix(&self, token: &str) -> bool {
        is_name_suffix(token) || self.suffixes.contains(&term_key(token))
    }

    /// Configured elision phrases, lower-cased.
    pub fn elision_markers(&self) -> &[String] {
        &self.elision_markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lookup_ignores_case_and_period() {
        assert_eq!(month_number("July"), Some(7));
        assert_eq!(month_number("Sept."), Some(9));
        assert_eq!(month_number("Okt."), Some(10));
        assert_eq!(month_number("MÄRZ"), Some(3));
        assert_eq!(month_number("Dez"), Some(12));
        assert_eq!(month_number("Monday"), None);
    }

    #[test]
    fn test_every_month_is_covered() {
        for month in 1..=12u8 {
            assert!(MONTHS.iter().any(|(_, m)| *m == month), "month {}", month);
        }
    }

    #[test]
    fn test_suffixes() {
        assert!(is_name_suffix("jr."));
        assert!(is_name_suffix("Jr"));
        assert!(is_name_suffix("III"));
        assert!(is_name_suffix("Ph.D."));
        assert!(!is_name_suffix("Poe"));
        assert!(!is_name_suffix("A."));
        assert!(!is_name_suffix("V"));
        assert!(!is_name_suffix("V."));
    }

    #[test]
    fn test_configured_terms_extend_tables() {
        let mut vocabulary = Vocabulary::default();
        assert_eq!(vocabulary.month("juin"), None);
        vocabulary.add_month("Juin", 6);
        vocabulary.add_suffix("fils");
        assert_eq!(vocabulary.month("juin."), Some(6));
        assert_eq!(vocabulary.month("May"), Some(5));
        assert!(vocabulary.is_suffix("Fils"));
    }
}
