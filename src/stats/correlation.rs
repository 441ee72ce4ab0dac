use serde::Serialize;

use crate::stats::StatsError;

/// Pearson product-moment correlation of two equal-length samples.
///
/// Fails with [`StatsError::Degenerate`] when either sample has no spread.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if is_constant(x) || is_constant(y) {
        return Err(StatsError::Degenerate("zero variance input"));
    }

    let n = x.len() as f64;
    let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        sx += a;
        sy += b;
        sxx += a * a;
        syy += b * b;
        sxy += a * b;
    }

    let vx = n * sxx - sx * sx;
    let vy = n * syy - sy * sy;
    if vx <= 0.0 || vy <= 0.0 {
        return Err(StatsError::Degenerate("zero variance input"));
    }
    let r = (n * sxy - sx * sy) / (vx.sqrt() * vy.sqrt());
    if !r.is_finite() {
        return Err(StatsError::Degenerate("non-finite correlation"));
    }
    Ok(r.clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pairwise {
    pub rxy: f64,
    pub rxz: f64,
    pub ryz: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartialCorrelation {
    pub rxy_z: f64,
    pub rxz_y: f64,
    pub ryz_x: f64,
}

/// Pairwise correlations among `x`, `y` and the optional `z`.
///
/// Without `z`, `rxz` and `ryz` are zero.
pub fn pairwise(columns: &[&[f64]]) -> Result<Pairwise, StatsError> {
    let (x, y, z) = split_columns(columns)?;
    let rxy = pearson(x, y)?;
    let (rxz, ryz) = match z {
        Some(z) => (pearson(x, z)?, pearson(y, z)?),
        None => (0.0, 0.0),
    };
    Ok(Pairwise { rxy, rxz, ryz })
}

/// First-order partial correlations of `x`, `y` and optional `z`.
pub fn partial_correlation(columns: &[&[f64]]) -> Result<PartialCorrelation, StatsError> {
    let r = pairwise(columns)?;
    partial_from_pairwise(&r, columns.len() == 3)
}

/// Partials from already computed pairwise coefficients, using
/// `ryx == rxy`, `rzx == rxz` and `rzy == ryz`.
///
/// Without a control column this is `(rxy, 0, 0)` exactly, even when
/// `|rxy| == 1`.
pub fn partial_from_pairwise(
    r: &Pairwise,
    with_control: bool,
) -> Result<PartialCorrelation, StatsError> {
    if !with_control {
        return Ok(PartialCorrelation {
            rxy_z: r.rxy,
            rxz_y: 0.0,
            ryz_x: 0.0,
        });
    }
    Ok(PartialCorrelation {
        rxy_z: first_order(r.rxy, r.rxz, r.ryz)?,
        rxz_y: first_order(r.rxz, r.rxy, r.ryz)?,
        ryz_x: first_order(r.ryz, r.rxy, r.rxz)?,
    })
}

// r_ab.c = (r_ab - r_ac r_bc) / (sqrt(1 - r_ac^2) sqrt(1 - r_bc^2))
fn first_order(r_ab: f64, r_ac: f64, r_bc: f64) -> Result<f64, StatsError> {
    let denom = (1.0 - r_ac * r_ac).sqrt() * (1.0 - r_bc * r_bc).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Err(StatsError::Degenerate("perfectly correlated control variable"));
    }
    Ok((r_ab - r_ac * r_bc) / denom)
}

fn split_columns<'a>(
    columns: &[&'a [f64]],
) -> Result<(&'a [f64], &'a [f64], Option<&'a [f64]>), StatsError> {
    match columns {
        [x, y] => Ok((*x, *y, None)),
        [x, y, z] => {
            if z.len() != x.len() {
                return Err(StatsError::LengthMismatch {
                    left: x.len(),
                    right: z.len(),
                });
            }
            Ok((*x, *y, Some(*z)))
        }
        other => Err(StatsError::ColumnCount(other.len())),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/correlation.rs"]
mod tests;
