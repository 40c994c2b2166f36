/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use csln_normalize::{fields, Field, FieldMapping, FieldMappingExt, FieldValue, Normalizer};

#[test]
fn test_normalize_all_on_a_book_chapter() {
    let out = Normalizer::new().normalize_all(fields! {
        "author" => "D. Knuth (ed.)",
        "title" => "\"Literate Programming, 2nd ed.\"",
        "booktitle" => "In: Proceedings of the Symposium,",
        "date" => "(1997 Okt.)",
        "pages" => "pp. 123–130",
        "location" => "Stanford: CSLI.",
        "isbn" => "ISBN 0-937073-80-6",
        "keywords" => "literate; programming",
    });

    assert_eq!(out.text(Field::Author), None);
    assert_eq!(out.text(Field::Editor), Some("Knuth, D."));
    assert_eq!(out.text(Field::Title), Some("Literate Programming"));
    assert_eq!(out.number(Field::Edition), Some(2));
    assert_eq!(out.text(Field::Booktitle), Some("Proceedings of the Symposium"));
    assert_eq!(out.number(Field::Year), Some(1997));
    assert_eq!(out.number(Field::Month), Some(10));
    assert_eq!(out.text(Field::Pages), Some("123--130"));
    assert_eq!(out.text(Field::Location), Some("Stanford"));
    assert_eq!(out.text(Field::Publisher), Some("CSLI"));
    assert_eq!(out.text(Field::Isbn), Some("0937073806"));
    assert_eq!(out["keywords"], FieldValue::from("literate; programming"));
}

#[test]
fn test_normalize_all_on_an_article() {
    let out = Normalizer::new().normalize_all(fields! {
        "author" => "Plath, L.C., Asgaard, G., … Botros, N.",
        "journal" => "Nature.",
        "volume" => "12(3)",
        "url" => "Retrieved from https://doi.org/10.1000/xyz [PDF]",
    });

    assert_eq!(
        out.text(Field::Author),
        Some("Plath, L.C. and Asgaard, G. and Botros, N.")
    );
    assert_eq!(out.text(Field::Journal), Some("Nature"));
    assert_eq!(out.number(Field::Volume), Some(12));
    assert_eq!(out.number(Field::Number), Some(3));
    assert_eq!(out.text(Field::Url), Some("https://doi.org/10.1000/xyz"));
}

#[test]
fn test_normalize_all_is_stable() {
    let normalizer = Normalizer::new();
    for raw in sample_records() {
        let once = normalizer.normalize_all(raw);
        assert_eq!(normalizer.normalize_all(once.clone()), once);
    }
}

#[test]
fn test_empty_mapping() {
    assert_eq!(Normalizer::new().normalize_all(FieldMapping::new()), fields! {});
}

#[test]
fn test_numeric_input_is_left_alone() {
    let input = fields! { "year" => 2009, "volume" => 4 };
    assert_eq!(Normalizer::new().normalize_all(input.clone()), input);
}

#[test]
fn test_unrecognized_fields_are_never_dropped() {
    let input = record(&[("date", "unknown"), ("url", "n/a"), ("source", "scan 3")]);
    let out = Normalizer::new().normalize_all(input.clone());
    assert_eq!(out, input);
}

#[test]
fn test_batch_on_independent_threads() {
    let normalizer = Normalizer::new();
    let records = sample_records();
    let expected: Vec<FieldMapping> = records
        .iter()
        .cloned()
        .map(|r| normalizer.normalize_all(r))
        .collect();

    let parallel: Vec<FieldMapping> = std::thread::scope(|scope| {
        let handles: Vec<_> = records
            .into_iter()
            .map(|r| {
                let normalizer = &normalizer;
                scope.spawn(move || normalizer.normalize_all(r))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, expected);
}

#[test]
fn test_mapping_round_trips_through_yaml() {
    let out = Normalizer::new().normalize_all(record(&[
        ("author", "A, jr., B"),
        ("date", "(15 May 1984)"),
    ]));
    let yaml = serde_yaml::to_string(&out).unwrap();
    let back: FieldMapping = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, out);
    assert_eq!(back.number(Field::Day), Some(15));
}
