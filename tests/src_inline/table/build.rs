use super::*;
use crate::input::tokenize::tokenize;

fn records(lines: &[&str]) -> Vec<Result<Vec<String>, InputError>> {
    lines.iter().map(|l| Ok(tokenize(l))).collect()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn builds_columns_in_header_order() {
    let table = build_table(records(&["1,10", "2,20"]), headers(&["id", "score"])).expect("table");
    assert_eq!(table.headers(), &["id".to_string(), "score".to_string()]);
    assert_eq!(table.column("id").expect("id"), &["1", "2"]);
    assert_eq!(table.column("score").expect("score"), &["10", "20"]);
    assert_eq!(table.n_rows(), 2);
}

#[test]
fn short_record_fails() {
    let err = build_table(records(&["1,10", "2"]), headers(&["id", "score"])).unwrap_err();
    assert!(matches!(
        err,
        TableError::FieldOutOfRange {
            row: 2,
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn record_errors_propagate() {
    let input = vec![
        Ok(vec!["1".to_string()]),
        Err(InputError::Io(std::io::Error::other("boom"))),
    ];
    let err = build_table(input, headers(&["id"])).unwrap_err();
    assert!(matches!(err, TableError::Input(InputError::Io(_))));
}

#[test]
fn no_records_gives_empty_columns() {
    let table = build_table(records(&[]), headers(&["id"])).expect("table");
    assert!(table.is_empty());
    assert_eq!(table.column("id").expect("id").len(), 0);
}
