// =============================================================================
// Signal Transforms — Main Entry Point
// =============================================================================
//
// Computes the running sum and first difference of the built-in 1 kHz + 15 kHz
// reference waveform and writes all three series as `.dat` files.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod persistence;
mod pipeline;
mod run_config;
mod signal;
mod transforms;
mod waveform;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::run_config::RunConfig;
use crate::waveform::{INPUT_SIGNAL_F32_1KHZ_15KHZ, SAMPLE_RATE_HZ, SIG_LENGTH};

const RUN_CONFIG_PATH: &str = "run_config.json";

fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = RunConfig::load_or_default(RUN_CONFIG_PATH);
    config.apply_env_overrides();

    info!(
        samples = SIG_LENGTH,
        sample_rate_hz = SAMPLE_RATE_HZ,
        output_dir = %config.output_dir.display(),
        "Signal transforms starting"
    );

    // ── 2. Transform & persist ───────────────────────────────────────────
    let (_, written) = pipeline::run(&INPUT_SIGNAL_F32_1KHZ_15KHZ, &config)?;

    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    info!("Signal transforms finished");
    Ok(())
}
