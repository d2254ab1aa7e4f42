// =============================================================================
// Running Sum — Discrete Integration
// =============================================================================
//
// Cumulative (prefix) sum of the input:
//   y[0] = x[0]
//   y[i] = y[i-1] + x[i]
//
// The running sum of a zero-mean tone stays bounded; a DC offset shows up as a
// ramp.

/// Calculate the running sum of `samples`.
///
/// The output has exactly `samples.len()` elements.  Empty input yields an
/// empty `Vec`.
pub fn calculate_running_sum(samples: &[f64]) -> Vec<f64> {
    let mut result = Vec::with_capacity(samples.len());
    let mut acc = 0.0_f64;
    for &x in samples {
        acc += x;
        result.push(acc);
    }
    result
}

/// Return the final running-sum value (the total of all samples).
pub fn current_running_sum(samples: &[f64]) -> Option<f64> {
    calculate_running_sum(samples).last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_sum_basic() {
        let sum = calculate_running_sum(&[1.0, 2.0, 4.0]);
        assert_eq!(sum, vec![1.0, 3.0, 7.0]);
    }

    #[test]
    fn running_sum_single_sample() {
        assert_eq!(calculate_running_sum(&[5.0]), vec![5.0]);
    }

    #[test]
    fn running_sum_empty() {
        assert!(calculate_running_sum(&[]).is_empty());
        assert!(current_running_sum(&[]).is_none());
    }

    #[test]
    fn running_sum_recurrence_holds() {
        let samples: Vec<f64> = (0..50).map(|i| ((i as f64) * 0.37).sin()).collect();
        let sum = calculate_running_sum(&samples);
        assert_eq!(sum.len(), samples.len());
        assert_eq!(sum[0], samples[0]);
        for i in 1..samples.len() {
            assert_eq!(sum[i], sum[i - 1] + samples[i], "index {i}");
        }
    }

    #[test]
    fn running_sum_is_pure() {
        let samples = vec![0.5, -1.25, 3.0, 0.0, -2.5];
        assert_eq!(calculate_running_sum(&samples), calculate_running_sum(&samples));
    }

    #[test]
    fn current_running_sum_is_total() {
        let samples: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let total = current_running_sum(&samples).unwrap();
        assert!((total - 55.0).abs() < 1e-10);
    }
}
