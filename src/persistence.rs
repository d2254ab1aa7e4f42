// =============================================================================
// Signal Persistence — plain-text `.dat` files, one sample per line
// =============================================================================
//
// Each series goes to its own file with no header or metadata.  Samples use
// the classic `%g` rendering with 6 significant digits, so the files line up
// with output from C-stream based tooling.
//
// Writes use an atomic tmp + rename so a crashed run never leaves a truncated
// file behind.  Every I/O error propagates; nothing is retried.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::run_config::RunConfig;
use crate::signal::SignalSet;

/// Significant digits used when rendering a sample.
const PRECISION: usize = 6;

// =============================================================================
// Formatting
// =============================================================================

/// Render `x` the way `printf("%g")` does at the default precision.
///
/// - fixed notation when the decimal exponent is in `-4..6`, scientific
///   otherwise (`1.5e+06`, `1e-05`)
/// - trailing zeros and a dangling decimal point are dropped
/// - non-finite values render as `nan`, `inf`, `-inf`
pub fn format_sample(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to PRECISION significant digits.
    let sci = format!("{:.*e}", PRECISION - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Render a whole series, one sample per line, newline-terminated.
pub fn render_signal(samples: &[f64]) -> String {
    let mut out = String::with_capacity(samples.len() * 12);
    for &x in samples {
        out.push_str(&format_sample(x));
        out.push('\n');
    }
    out
}

// =============================================================================
// File output
// =============================================================================

/// Write one series to `path` atomically (write to `<path>.tmp`, then rename).
pub fn write_signal(path: impl AsRef<Path>, samples: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let content = render_signal(samples);

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    let result = std::fs::write(&tmp_path, &content)
        .with_context(|| format!("failed to write tmp signal file {}", tmp_path.display()))
        .and_then(|()| {
            std::fs::rename(&tmp_path, path)
                .with_context(|| format!("failed to rename tmp signal file to {}", path.display()))
        });

    if result.is_err() {
        // Best effort; the original error is what gets reported.
        let _ = std::fs::remove_file(&tmp_path);
    }
    result?;

    debug!(path = %path.display(), samples = samples.len(), "signal written");
    Ok(())
}

/// Persist all three series of `set` under `config.output_dir`.
///
/// Returns the written paths in persistence order.
pub fn persist_signals(set: &SignalSet, config: &RunConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;

    let mut written = Vec::with_capacity(3);
    for (kind, samples) in set.iter() {
        let path = config.output_path(kind);
        write_signal(&path, samples)
            .with_context(|| format!("failed to persist {kind} signal"))?;
        written.push(path);
    }

    info!(
        output_dir = %config.output_dir.display(),
        files = written.len(),
        samples = set.len(),
        "signals persisted"
    );
    Ok(written)
}
