use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::stats::StatsError;
use crate::stats::aggregate::align_means;
use crate::stats::correlation::{Pairwise, PartialCorrelation, pairwise, partial_from_pairwise};
use crate::table::numeric::{keyed_means, numeric_columns};
use crate::table::{Table, TableError};

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),
}

#[derive(Debug, Clone, Default)]
pub struct CorrelateRequest {
    /// Two or three column names: x, y and the optional control z.
    pub columns: Vec<String>,
    /// Average every column per value of this key before correlating.
    pub by: Option<String>,
    /// With `by`, keep only keys with a single x observation.
    pub single: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelateCtx {
    pub columns: Vec<String>,
    pub by: Option<String>,
    pub observations: usize,
    pub dropped_multi: usize,
    pub pairwise: Pairwise,
    pub partial: PartialCorrelation,
}

pub fn run_stage3_correlate(
    table: &Table,
    request: &CorrelateRequest,
) -> Result<CorrelateCtx, Stage3Error> {
    let names: Vec<&str> = request.columns.iter().map(String::as_str).collect();
    if !(2..=3).contains(&names.len()) {
        return Err(StatsError::ColumnCount(names.len()).into());
    }

    let mut dropped_multi = 0usize;
    let values = match request.by.as_deref() {
        Some(key) => {
            let mut sets = names
                .iter()
                .map(|name| keyed_means(table, key, name))
                .collect::<Result<Vec<_>, _>>()?;
            if request.single {
                dropped_multi = sets[0].retain_single();
            }
            let (keys, columns) = align_means(&sets);
            info!(by = key, keys = keys.len(), dropped_multi, "aggregated by key");
            columns
        }
        None => numeric_columns(table, &names)?,
    };

    let slices: Vec<&[f64]> = values.iter().map(Vec::as_slice).collect();
    let pairwise = pairwise(&slices)?;
    let partial = partial_from_pairwise(&pairwise, slices.len() == 3)?;

    let observations = values.first().map_or(0, Vec::len);
    info!(
        observations,
        rxy = pairwise.rxy,
        rxy_z = partial.rxy_z,
        "correlation computed"
    );

    Ok(CorrelateCtx {
        columns: request.columns.clone(),
        by: request.by.clone(),
        observations,
        dropped_multi,
        pairwise,
        partial,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_correlate.rs"]
mod tests;
