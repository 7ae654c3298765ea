// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{correlate, pearson, CorrelateOptions, Method};
use crate::model::{Column, Dataset, InputError, VariableName};

fn some(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

fn three_column_dataset() -> Dataset {
    Dataset::from_numeric([
        ("a", some(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])),
        ("b", some(&[2.0, 1.0, 4.0, 3.0, 6.0, 5.0])),
        ("c", some(&[6.0, 4.0, 5.0, 2.0, 3.0, 1.0])),
    ])
    .expect("dataset")
}

#[rstest]
#[case(Method::Pearson)]
#[case(Method::Spearman)]
#[case(Method::Kendall)]
fn correlate_is_symmetric_with_masked_diagonal(#[case] method: Method) {
    let m = correlate(&three_column_dataset(), &CorrelateOptions { method }).expect("correlate");

    assert_eq!(m.len(), 3);
    assert!(m.is_symmetric());
    for i in 0..m.len() {
        assert_eq!(m.at(i, i), None, "diagonal {i} must be masked");
    }
    for value in m.present_values() {
        assert!((-1.0..=1.0).contains(&value));
    }
    assert_eq!(m.present_values().len(), 6);
}

#[test]
fn correlate_requires_two_numeric_columns() {
    let dataset = Dataset::new(vec![
        Column::text(VariableName::new("model").expect("name"), vec![Some("x".to_owned())]),
        Column::numeric(VariableName::new("mpg").expect("name"), vec![Some(21.0)]),
    ])
    .expect("dataset");

    let err = correlate(&dataset, &CorrelateOptions::default()).unwrap_err();
    assert_eq!(err, InputError::TooFewNumericColumns { found: 1 });
}

#[test]
fn correlate_skips_text_columns() {
    let dataset = Dataset::new(vec![
        Column::text(
            VariableName::new("label").expect("name"),
            vec![Some("p".to_owned()), Some("q".to_owned()), None],
        ),
        Column::numeric(VariableName::new("x").expect("name"), some(&[1.0, 2.0, 3.0])),
        Column::numeric(VariableName::new("y").expect("name"), some(&[3.0, 1.0, 2.0])),
    ])
    .expect("dataset");

    let m = correlate(&dataset, &CorrelateOptions::default()).expect("correlate");
    let names = m.names().iter().map(VariableName::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn zero_variance_column_yields_missing_row_and_column() {
    let dataset = Dataset::from_numeric([
        ("a", some(&[1.0, 2.0, 3.0, 4.0])),
        ("flat", some(&[7.0, 7.0, 7.0, 7.0])),
        ("b", some(&[2.0, 4.0, 5.0, 9.0])),
    ])
    .expect("dataset");

    let m = correlate(&dataset, &CorrelateOptions::default()).expect("correlate");
    assert_eq!(m.row("flat").expect("row"), vec![None, None, None]);
    assert_eq!(m.value("a", "flat"), None);
    assert_eq!(m.value("b", "flat"), None);
    assert!(m.value("a", "b").is_some());
}

#[test]
fn missing_cells_are_deleted_pairwise_not_listwise() {
    let dataset = Dataset::from_numeric([
        ("a", some(&[1.0, 2.0, 3.0, 4.0, -50.0])),
        ("b", vec![Some(2.0), Some(4.0), Some(6.0), Some(8.0), None]),
        ("c", some(&[1.0, 2.0, 3.0, 4.0, 5.0])),
    ])
    .expect("dataset");

    let m = correlate(&dataset, &CorrelateOptions::default()).expect("correlate");

    // a~b only sees the first four rows.
    assert!((m.value("a", "b").expect("a~b") - 1.0).abs() < 1e-12);

    // a~c keeps the fifth row even though b is missing there.
    let expected = pearson(&[1.0, 2.0, 3.0, 4.0, -50.0], &[1.0, 2.0, 3.0, 4.0, 5.0])
        .expect("pearson");
    assert!((m.value("a", "c").expect("a~c") - expected).abs() < 1e-12);
    assert!(expected < 0.0);
}

#[test]
fn too_few_complete_pairs_yield_missing_cell() {
    let dataset = Dataset::from_numeric([
        ("a", vec![Some(1.0), None, Some(3.0)]),
        ("b", vec![None, Some(2.0), Some(1.0)]),
        ("c", some(&[3.0, 1.0, 2.0])),
    ])
    .expect("dataset");

    let m = correlate(&dataset, &CorrelateOptions::default()).expect("correlate");
    assert_eq!(m.value("a", "b"), None);
    assert!(m.value("a", "c").is_some());
}

#[test]
fn spearman_equals_pearson_of_ranks() {
    let dataset = Dataset::from_numeric([
        ("x", some(&[1.0, 5.0, 2.0, 8.0, 3.0])),
        ("y", some(&[10.0, 200.0, 30.0, 1000.0, 15.0])),
    ])
    .expect("dataset");

    let m = correlate(&dataset, &CorrelateOptions { method: Method::Spearman })
        .expect("correlate");
    let expected = pearson(&[1.0, 4.0, 2.0, 5.0, 3.0], &[1.0, 4.0, 3.0, 5.0, 2.0])
        .expect("pearson of ranks");
    assert!((m.value("x", "y").expect("x~y") - expected).abs() < 1e-12);
}

#[rstest]
#[case("pearson", Method::Pearson)]
#[case(" Spearman ", Method::Spearman)]
#[case("KENDALL", Method::Kendall)]
fn method_parses_case_insensitively(#[case] raw: &str, #[case] expected: Method) {
    assert_eq!(raw.parse::<Method>(), Ok(expected));
}

#[test]
fn method_rejects_unknown_names() {
    let err = "tau".parse::<Method>().unwrap_err();
    assert!(err.to_string().contains("tau"));
}
