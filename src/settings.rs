use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_INPUT_DIR: &str = "10k_html_2024";
const DEFAULT_OUTPUT_DIR: &str = "item1a_text_2024";

/// Defaults, then `item1a.toml` if present, then `ITEM1A_*` variables.
/// CLI flags are applied on top by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Worker threads; 0 leaves the choice to rayon.
    pub jobs: usize,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("item1a").required(false))
                .add_source(Environment::with_prefix("ITEM1A").try_parsing(true)),
        )
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .set_default("input_dir", DEFAULT_INPUT_DIR)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("jobs", 0_i64)?
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults() {
        let s = Settings::from_config(Config::builder()).unwrap();
        assert_eq!(s.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(s.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(s.jobs, 0);
    }

    #[test]
    fn file_overrides_defaults() {
        let toml = "input_dir = \"filings\"\njobs = 4\n";
        let s = Settings::from_config(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap();
        assert_eq!(s.input_dir, PathBuf::from("filings"));
        assert_eq!(s.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(s.jobs, 4);
    }

    #[test]
    fn bad_value_is_rejected() {
        let toml = "jobs = \"many\"\n";
        let result = Settings::from_config(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        );
        assert!(result.is_err());
    }
}
