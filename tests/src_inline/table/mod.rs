use super::*;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}

#[test]
fn rejects_duplicate_column_names() {
    let err = Table::new(headers(&["id", "score", "id"])).unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn(name) if name == "id"));
}

#[test]
fn short_row_is_out_of_range() {
    let mut table = Table::new(headers(&["id", "score"])).expect("table");
    table.push_row(row(&["1", "10"])).expect("row");
    let err = table.push_row(row(&["2"])).unwrap_err();
    match err {
        TableError::FieldOutOfRange {
            row,
            expected,
            found,
        } => {
            assert_eq!((row, expected, found), (2, 2, 1));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(table.n_rows(), 1);
}

#[test]
fn extra_fields_are_ignored() {
    let mut table = Table::new(headers(&["id"])).expect("table");
    table.push_row(row(&["1", "extra"])).expect("row");
    assert_eq!(table.column("id"), Some(&["1".to_string()][..]));
    assert_eq!(table.rows().collect::<Vec<_>>(), vec![vec!["1"]]);
}

#[test]
fn missing_column_reports_headers() {
    let table = Table::new(headers(&["id", "score"])).expect("table");
    let err = table.require_column("disadv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("disadv"));
    assert!(msg.contains("\"id\", \"score\""));
}

#[test]
fn retain_rows_compacts_every_column() {
    let mut table = Table::new(headers(&["id", "score"])).expect("table");
    for (id, score) in [("1", "a"), ("2", "b"), ("3", "c")] {
        table.push_row(row(&[id, score])).expect("row");
    }
    let removed = table.retain_rows(&[true, false, true]);
    assert_eq!(removed, 1);
    let rows: Vec<Vec<&str>> = table.rows().collect();
    assert_eq!(rows, vec![vec!["1", "a"], vec!["3", "c"]]);
}
