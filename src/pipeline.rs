// =============================================================================
// Pipeline — load, transform, persist
// =============================================================================

use std::path::PathBuf;

use anyhow::{ensure, Result};
use tracing::{info, warn};

use crate::persistence::persist_signals;
use crate::run_config::RunConfig;
use crate::signal::SignalSet;
use crate::transforms::{current_first_difference, current_running_sum};

/// Transform `input` and write all three series according to `config`.
///
/// Returns the computed set together with the written file paths.
pub fn run(input: &[f64], config: &RunConfig) -> Result<(SignalSet, Vec<PathBuf>)> {
    let set = SignalSet::from_input(input);
    ensure!(
        set.lengths_match(),
        "derived signals do not match input length {}",
        set.len()
    );

    if set.is_empty() {
        warn!("input signal is empty, writing empty files");
    }

    info!(
        samples = set.len(),
        total = ?current_running_sum(set.input()),
        last_difference = ?current_first_difference(set.input()),
        "transforms computed"
    );

    let written = persist_signals(&set, config)?;
    Ok((set, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::SignalKind;
    use crate::waveform::{INPUT_SIGNAL_F32_1KHZ_15KHZ, SIG_LENGTH};

    fn scratch_config() -> RunConfig {
        RunConfig {
            output_dir: std::env::temp_dir().join(format!("signal_run_{}", uuid::Uuid::new_v4())),
        }
    }

    #[test]
    fn reference_waveform_end_to_end() {
        let config = scratch_config();
        let (set, written) = run(&INPUT_SIGNAL_F32_1KHZ_15KHZ, &config).unwrap();

        assert_eq!(set.len(), SIG_LENGTH);
        assert_eq!(written.len(), 3);
        for path in &written {
            let content = std::fs::read_to_string(path).unwrap();
            assert_eq!(content.lines().count(), SIG_LENGTH, "{}", path.display());
        }

        let first_diff = std::fs::read_to_string(config.output_path(SignalKind::FirstDifference)).unwrap();
        let mut lines = first_diff.lines();
        assert_eq!(lines.next(), Some("0"));
        assert_eq!(lines.next(), Some("0.592466"));

        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn running_sum_of_reference_waveform_is_bounded() {
        // Zero-mean tones integrate to a bounded series.
        let config = scratch_config();
        let (set, _) = run(&INPUT_SIGNAL_F32_1KHZ_15KHZ, &config).unwrap();
        assert!(set.running_sum().iter().all(|v| v.abs() < 20.0));
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn small_input_end_to_end() {
        let config = scratch_config();
        let (set, _) = run(&[1.0, 2.0, 4.0], &config).unwrap();
        assert_eq!(set.running_sum(), &[1.0, 3.0, 7.0]);
        assert_eq!(set.first_difference(), &[1.0, 1.0, 2.0]);
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }
}
