// =============================================================================
// Run Configuration — where the signal files are written
// =============================================================================
//
// Only the output directory is configurable; the file names and the signal
// itself are fixed.  All fields carry `#[serde(default)]` so a partial (or empty)
// JSON object loads cleanly.
//
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::signal::SignalKind;

/// Env var that overrides `output_dir`.
pub const OUTPUT_DIR_ENV: &str = "TRANSFORM_OUTPUT_DIR";

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

// =============================================================================
// RunConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory the three `.dat` files are written into.  Created if missing.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read run config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse run config from {}", path.display()))?;

        info!(
            path = %path.display(),
            output_dir = %config.output_dir.display(),
            "run config loaded"
        );

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but cannot be read or parsed is logged and ignored;
    /// configuration problems never abort a run.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no run config file, using defaults");
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load run config, using defaults");
            Self::default()
        })
    }

    /// Apply `TRANSFORM_OUTPUT_DIR` if it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        self.apply_output_dir_override(std::env::var(OUTPUT_DIR_ENV).ok());
    }

    fn apply_output_dir_override(&mut self, value: Option<String>) {
        if let Some(dir) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            info!(output_dir = %dir, "output directory overridden from {}", OUTPUT_DIR_ENV);
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Full output path for `kind`.
    pub fn output_path(&self, kind: SignalKind) -> PathBuf {
        self.output_dir.join(kind.default_file_name())
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        assert_eq!(cfg.output_path(SignalKind::Input), PathBuf::from(".").join("input_signal.dat"));
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RunConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "output_dir": "out" }"#;
        let cfg: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!(
            cfg.output_path(SignalKind::RunningSum),
            PathBuf::from("out").join("running_sum_signal.dat")
        );
    }

    #[test]
    fn file_names_are_not_configurable() {
        let json = r#"{ "output_dir": "out", "running_sum_file": "sum.dat" }"#;
        let cfg: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            cfg.output_path(SignalKind::RunningSum),
            PathBuf::from("out").join("running_sum_signal.dat")
        );
        assert_eq!(
            cfg.output_path(SignalKind::FirstDifference),
            PathBuf::from("out").join("first_diff_signal.dat")
        );
    }

    #[test]
    fn roundtrip_serialisation() {
        let cfg = RunConfig {
            output_dir: PathBuf::from("signals/out"),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("run_config_{}.json", uuid::Uuid::new_v4()));
        assert!(RunConfig::load(&path).is_err());
        assert_eq!(RunConfig::load_or_default(&path), RunConfig::default());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("run_config_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(RunConfig::load_or_default(&path), RunConfig::default());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn output_dir_override() {
        let mut cfg = RunConfig::default();
        cfg.apply_output_dir_override(Some("  ".into()));
        assert_eq!(cfg.output_dir, PathBuf::from("."));
        cfg.apply_output_dir_override(Some("/tmp/signals".into()));
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/signals"));
    }
}
