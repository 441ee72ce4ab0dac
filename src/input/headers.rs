use std::path::Path;

use tracing::debug;

use crate::input::{InputError, ReadOptions, RecordReader, path_display};

/// Resolve column names for `primary`.
///
/// With a separate header source every record of that file is concatenated
/// in order, so a header may span several physical lines. Without one,
/// exactly one record is taken from `primary`, leaving it positioned on the
/// first data row. An empty result means no header could be found.
pub fn resolve_headers(
    primary: &mut RecordReader,
    header_source: Option<&Path>,
    opts: ReadOptions,
) -> Result<Vec<String>, InputError> {
    let mut headers = Vec::new();
    match header_source {
        Some(path) => {
            let reader = RecordReader::open(path, opts)?;
            for record in reader {
                headers.extend(record?);
            }
            debug!(
                header_file = %path_display(path),
                raw = headers.len(),
                "read external header"
            );
        }
        None => {
            if let Some(record) = primary.next() {
                headers.extend(record?);
            }
        }
    }
    Ok(normalize_headers(headers))
}

/// Trim every name and drop the first blank one, if any.
pub fn normalize_headers(headers: Vec<String>) -> Vec<String> {
    let mut headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
    if let Some(blank) = headers.iter().position(|h| h.is_empty()) {
        headers.remove(blank);
    }
    headers
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/headers.rs"]
mod tests;
