use std::path::Path;

use crate::input::headers::resolve_headers;
use crate::input::{ReadOptions, RecordReader};
use crate::table::build::build_table;
use crate::table::{Table, TableError};

pub fn load_table(
    path: &Path,
    header_path: Option<&Path>,
    opts: ReadOptions,
) -> Result<Table, TableError> {
    let records = RecordReader::open(path, opts)?;
    load_from_records(records, header_path, opts)
}

/// Resolve headers from `records` (or `header_path`) and build the table
/// from whatever records remain.
pub fn load_from_records(
    mut records: RecordReader,
    header_path: Option<&Path>,
    opts: ReadOptions,
) -> Result<Table, TableError> {
    let headers = resolve_headers(&mut records, header_path, opts)?;
    if headers.is_empty() {
        return Err(TableError::NoHeaders);
    }
    build_table(records, headers)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/load.rs"]
mod tests;
