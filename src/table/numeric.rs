use crate::stats::aggregate::KeyedMeans;
use crate::table::{Table, TableError};

/// Parse the named columns as `f64`, row-aligned.
///
/// A row is skipped when any selected value is blank; any other value that
/// fails to parse is an error.
pub fn numeric_columns(table: &Table, names: &[&str]) -> Result<Vec<Vec<f64>>, TableError> {
    let columns = names
        .iter()
        .map(|name| table.require_column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = vec![Vec::with_capacity(table.n_rows()); names.len()];
    for row in 0..table.n_rows() {
        if columns.iter().any(|c| c[row].trim().is_empty()) {
            continue;
        }
        for (j, column) in columns.iter().enumerate() {
            let raw = column[row].trim();
            let value = raw.parse::<f64>().map_err(|_| TableError::NotNumeric {
                column: names[j].to_string(),
                row: row + 1,
                value: raw.to_string(),
            })?;
            out[j].push(value);
        }
    }
    Ok(out)
}

/// Per-key means of `column`, keyed by `key_column`. Blank values and
/// blank keys are skipped.
pub fn keyed_means(
    table: &Table,
    key_column: &str,
    column: &str,
) -> Result<KeyedMeans, TableError> {
    let keys = table.require_column(key_column)?;
    let values = table.require_column(column)?;
    let mut means = KeyedMeans::new();
    for (row, (key, raw)) in keys.iter().zip(values).enumerate() {
        let (key, raw) = (key.trim(), raw.trim());
        if key.is_empty() || raw.is_empty() {
            continue;
        }
        let value = raw.parse::<f64>().map_err(|_| TableError::NotNumeric {
            column: column.to_string(),
            row: row + 1,
            value: raw.to_string(),
        })?;
        means.push(key, value);
    }
    Ok(means)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/numeric.rs"]
mod tests;
