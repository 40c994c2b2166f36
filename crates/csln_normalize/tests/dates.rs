/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use csln_normalize::{Field, FieldMappingExt, FieldValue, Normalizer};

fn date(raw: &str) -> csln_normalize::FieldMapping {
    Normalizer::new().normalize_date(single(Field::Date, raw))
}

#[test]
fn test_month_and_year() {
    let h = date("(July 2009)");
    assert_eq!(h.number(Field::Year), Some(2009));
    assert_eq!(h.number(Field::Month), Some(7));
    assert!(!h.contains_key("day"));
    assert!(!h.contains_key("date"));
}

#[test]
fn test_abbreviated_months() {
    let h = date("(1997 Sept.)");
    assert_eq!(h.number(Field::Year), Some(1997));
    assert_eq!(h.number(Field::Month), Some(9));

    let h = date("(1997 Okt.)");
    assert_eq!(h.number(Field::Year), Some(1997));
    assert_eq!(h.number(Field::Month), Some(10));
}

#[test]
fn test_day_month_and_year() {
    let h = date("(15 May 1984)");
    assert_eq!(h.number(Field::Year), Some(1984));
    assert_eq!(h.number(Field::Month), Some(5));
    assert_eq!(h.number(Field::Day), Some(15));
}

#[test]
fn test_printing_ordinal_is_not_a_day() {
    let h = date("(May 2009, 2nd printing)");
    assert_eq!(h.number(Field::Year), Some(2009));
    assert_eq!(h.number(Field::Month), Some(5));
    assert!(!h.contains_key("day"));
}

#[test]
fn test_values_are_integers_in_json() {
    let h = date("(15 May 1984)");
    assert_eq!(
        serde_json::to_string(&h).unwrap(),
        r#"{"year":1984,"month":5,"day":15}"#
    );
}

#[test]
fn test_unrecognized_date_is_unchanged() {
    let h = date("n.d.");
    assert_eq!(h.get("date"), Some(&FieldValue::from("n.d.")));
    assert!(!h.contains_key("year"));
}

#[test]
fn test_other_fields_survive() {
    let h = Normalizer::new().normalize_date(record(&[
        ("title", "Walden"),
        ("date", "1854"),
        ("note", "first edition"),
    ]));
    assert_eq!(keys(&h), vec!["title", "note", "year"]);
}
