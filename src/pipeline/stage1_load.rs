use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::input::{ReadOptions, SourceFormat, path_display};
use crate::table::load::load_table;
use crate::table::{Table, TableError};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Clone)]
pub struct LoadCtx {
    pub input_path: PathBuf,
    pub format: SourceFormat,
    pub table: Table,
}

pub fn run_stage1(
    input: &Path,
    header_file: Option<&Path>,
    opts: ReadOptions,
) -> Result<LoadCtx, Stage1Error> {
    let format = SourceFormat::detect(input);
    let table = load_table(input, header_file, opts)?;

    if table.is_empty() {
        warn!(input = %path_display(input), "table has no data rows");
    }
    info!(
        input = %path_display(input),
        header_file = ?header_file.map(Path::to_string_lossy),
        format = %format,
        columns = table.n_cols(),
        rows = table.n_rows(),
        "table loaded"
    );

    Ok(LoadCtx {
        input_path: input.to_path_buf(),
        format,
        table,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
