use thiserror::Error;

use crate::table::filter::{FilterOutcome, filter_inconsistent_groups};
use crate::table::{Table, TableError};

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Clone)]
pub struct FilterCtx {
    pub group_column: String,
    pub property_column: String,
    pub rows_before: usize,
    pub outcome: FilterOutcome,
    pub table: Table,
}

pub fn run_stage2_filter(
    table: Table,
    group_column: &str,
    property_column: &str,
) -> Result<FilterCtx, Stage2Error> {
    let rows_before = table.n_rows();
    let (table, outcome) = filter_inconsistent_groups(table, group_column, property_column)?;
    Ok(FilterCtx {
        group_column: group_column.to_string(),
        property_column: property_column.to_string(),
        rows_before,
        outcome,
        table,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_filter.rs"]
mod tests;
