use std::ops::Range;

use serde::Serialize;
use tracing::{debug, info};

use crate::table::{Table, TableError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub removed_rows: usize,
    pub removed_groups: usize,
    pub kept_groups: usize,
}

/// Drop every contiguous group whose property value changes within it.
///
/// Rows are expected to be sorted by `group_column`; a group is a maximal
/// run of equal keys, so a key that reappears later starts a new group.
/// All columns lose the rows of a rejected group, not only the two named.
pub fn filter_inconsistent_groups(
    mut table: Table,
    group_column: &str,
    property_column: &str,
) -> Result<(Table, FilterOutcome), TableError> {
    let groups = table.require_column(group_column)?;
    let property = table.require_column(property_column)?;

    let mut keep = vec![true; groups.len()];
    let mut outcome = FilterOutcome::default();
    for run in contiguous_runs(groups) {
        let last = &property[run.end - 1];
        if property[run.clone()].iter().all(|v| v == last) {
            outcome.kept_groups += 1;
            continue;
        }
        debug!(
            group = %groups[run.start],
            rows = run.len(),
            "removing group with changing {property_column}"
        );
        keep[run.clone()].fill(false);
        outcome.removed_groups += 1;
    }

    outcome.removed_rows = table.retain_rows(&keep);
    info!(
        removed_rows = outcome.removed_rows,
        removed_groups = outcome.removed_groups,
        kept_groups = outcome.kept_groups,
        "grouped consistency filter finished"
    );
    Ok((table, outcome))
}

/// Half-open index ranges of maximal runs of equal values.
pub fn contiguous_runs(values: &[String]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    if values.is_empty() {
        return runs;
    }
    let mut start = 0;
    for i in 1..=values.len() {
        if i == values.len() || values[i] != values[i - 1] {
            runs.push(start..i);
            start = i;
        }
    }
    runs
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/filter.rs"]
mod tests;
