use super::*;
use crate::input::SourceFormat;
use tempfile::tempdir;

fn primary(text: &str) -> RecordReader {
    RecordReader::from_text(text, SourceFormat::Delimited, ReadOptions::default())
}

#[test]
fn external_csv_header_spans_lines() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("headers.csv");
    std::fs::write(&path, " id , name,\n score \n").expect("write");

    let mut data = primary("1,a,10\n");
    let headers =
        resolve_headers(&mut data, Some(path.as_path()), ReadOptions::default()).expect("headers");
    assert_eq!(headers, vec!["id", "name", "score"]);
    let first = data.next().expect("row").expect("ok");
    assert_eq!(first, vec!["1", "a", "10"]);
}

#[test]
fn external_text_header_is_tokenized() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("headers.txt");
    std::fs::write(&path, "id, 'last, first'\n\"score\"\n").expect("write");

    let mut data = primary("");
    let headers =
        resolve_headers(&mut data, Some(path.as_path()), ReadOptions::default()).expect("headers");
    assert_eq!(headers, vec!["id", "last, first", "score"]);
}

#[test]
fn embedded_header_consumes_exactly_one_record() {
    let mut data = primary("id,score\n1,10\n2,20\n");
    let headers = resolve_headers(&mut data, None, ReadOptions::default()).expect("headers");
    assert_eq!(headers, vec!["id", "score"]);
    let next = data.next().expect("row").expect("ok");
    assert_eq!(next, vec!["1".to_string(), "10".to_string()]);
}

#[test]
fn empty_source_yields_no_headers() {
    let mut data = primary("");
    let headers = resolve_headers(&mut data, None, ReadOptions::default()).expect("headers");
    assert!(headers.is_empty());
}

#[test]
fn normalize_removes_only_first_blank() {
    let raw = vec![
        "a".to_string(),
        "  ".to_string(),
        "b\n".to_string(),
        String::new(),
    ];
    assert_eq!(normalize_headers(raw), vec!["a", "b", ""]);
}
