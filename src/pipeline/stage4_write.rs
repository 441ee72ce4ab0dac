use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::input::{ReadOptions, path_display};
use crate::table::Table;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// `<dir>/<stem>_<suffix>.<ext>` next to `input`; a trailing `.gz` is dropped.
pub fn filtered_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut base = input.to_path_buf();
    if base.extension().and_then(|s| s.to_str()) == Some("gz") {
        base.set_extension("");
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{suffix}"),
    };
    base.with_file_name(name)
}

/// Header row first, then every row in header order.
pub fn write_table_csv(path: &Path, table: &Table, opts: ReadOptions) -> Result<(), Stage4Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(false)
        .from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    info!(
        out = %path_display(path),
        rows = table.n_rows(),
        "table written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_write.rs"]
mod tests;
