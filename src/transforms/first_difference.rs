// =============================================================================
// First Difference — Discrete Derivative
// =============================================================================
//
// Difference between consecutive samples:
//   y[0] = x[0] - 0
//   y[i] = x[i] - x[i-1]
//
// Computed from the input directly, not from the running sum.

/// Calculate the first difference of `samples`.
///
/// The output has exactly `samples.len()` elements.  Empty input yields an
/// empty `Vec`.
pub fn calculate_first_difference(samples: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(samples.len());
    let mut prev = 0.0_f64;
    for &x in samples {
        result.push(x - prev);
        prev = x;
    }
    result
}

/// Return the most recent first-difference value.
pub fn current_first_difference(samples: &[f64]) -> Option<f64> {
    match samples {
        [] => None,
        [only] => Some(*only),
        [.., prev, last] => Some(last - prev),
    }
}
