//! Per-layer opacity schedules.
//!
//! An observer looking down through layers `1..=N` sees layer `k` attenuated by
//! every layer above it, so its visible share is `a_k * prod_{n>k} (1 - a_n)`.
//! Requiring equal shares over the opaque background plus `N` content layers
//! gives `a_k = 1 / (k + 1)` for the content layers.

use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math;

/// Default alphas for `n` content layers: `1/2, 1/3, ..., 1/(n+1)`.
pub fn default_alphas(n: usize) -> Vec<f64> {
    (0..n).map(|j| 1.0 / (j as f64 + 2.0)).collect()
}

/// Explicit alphas after validation, or the default schedule.
pub fn resolve_alphas(explicit: Option<&[f64]>, n: usize) -> BlendResult<Vec<f64>> {
    let Some(alphas) = explicit else {
        return Ok(default_alphas(n));
    };
    if alphas.len() != n {
        return Err(BlendError::AlphaCountMismatch {
            alphas: alphas.len(),
            slices: n,
        });
    }
    alphas
        .iter()
        .enumerate()
        .map(|(i, &a)| math::check_alpha(Some(i), a))
        .collect()
}

/// Visible share of each layer (bottom first) for an observer on top.
pub fn visible_contributions(alphas: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; alphas.len()];
    let mut transmitted = 1.0;
    for (slot, &a) in out.iter_mut().zip(alphas).rev() {
        *slot = a * transmitted;
        transmitted *= 1.0 - a;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/alpha.rs"]
mod tests;
