use crate::foundation::error::{BlendError, BlendResult};

/// Largest value, or `None` for an empty input. NaN entries are skipped.
pub(crate) fn peak(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().filter(|v| !v.is_nan()).reduce(f64::max)
}

/// Largest value, required to be finite and strictly positive.
///
/// `what` names the data for the error message.
pub(crate) fn positive_peak(
    values: impl IntoIterator<Item = f64>,
    what: &str,
) -> BlendResult<f64> {
    let Some(max) = peak(values) else {
        return Err(BlendError::degenerate(format!("{what} is empty")));
    };
    if !max.is_finite() || max <= 0.0 {
        return Err(BlendError::degenerate(format!(
            "{what} has maximum {max}; cannot normalize"
        )));
    }
    Ok(max)
}

/// Divide every value by the peak in place and return the peak.
pub(crate) fn normalize_to_peak(values: &mut [f64], what: &str) -> BlendResult<f64> {
    let max = positive_peak(values.iter().copied(), what)?;
    for v in values.iter_mut() {
        *v /= max;
    }
    Ok(max)
}

/// Validate one alpha value. `index` is the stack position, if there is one.
pub(crate) fn check_alpha(index: Option<usize>, value: f64) -> BlendResult<f64> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(BlendError::InvalidAlpha { index, value });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
