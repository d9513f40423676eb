//! Command-line surface
//!
//! Gantree: L4_Cli → Args
//!
//! Resolves the run configuration from defaults, an optional JSON file, and
//! command-line overrides (in that order of precedence, lowest first).

use clap::{Parser, ValueEnum};
use qsearch_core::{recommended_iterations, stats, QsError, QsResult, SearchConfiguration};
use std::path::PathBuf;

/// Output format for the per-trial report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "qsearch")]
#[command(about = "Validate Grover search success rates against theory")]
pub struct Args {
    /// Number of database qubits (database size = 2^n)
    #[arg(short = 'n', long)]
    pub register_size: Option<u32>,

    /// Number of Grover iterates per search
    #[arg(short, long, conflicts_with = "optimal")]
    pub iterations: Option<u32>,

    /// Use floor(pi/4 * sqrt(2^n)) iterates
    #[arg(long)]
    pub optimal: bool,

    /// Number of trials
    #[arg(short, long)]
    pub repeats: Option<u32>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the sampling backend
    #[arg(long)]
    pub seed: Option<u64>,

    /// Per-bit readout error probability
    #[arg(long, default_value_t = 0.0)]
    pub readout_error: f64,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Wait for Enter after each trial
    #[arg(long)]
    pub interactive: bool,

    /// Confidence level for the final consistency check
    #[arg(long, default_value_t = stats::DEFAULT_CONFIDENCE_LEVEL)]
    pub confidence: f64,

    /// Log filter directive (e.g. "info", "qsearch_harness=debug")
    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl Args {
    /// Build the run configuration
    /// Gantree: resolve_config(&self) -> Result<SearchConfiguration> // 설정 병합
    pub fn resolve_config(&self) -> QsResult<SearchConfiguration> {
        let mut config = match &self.config {
            Some(path) => SearchConfiguration::from_file(path)?,
            None => SearchConfiguration::default(),
        };

        if let Some(n) = self.register_size {
            config = config.with_register_size(n)?;
        }
        if let Some(r) = self.repeats {
            config = config.with_repeats(r)?;
        }
        if let Some(k) = self.iterations {
            config = config.with_iterations(k)?;
        }
        if self.optimal {
            let k = recommended_iterations(config.register_size())?;
            config = config.with_iterations(k)?;
        }

        Ok(config)
    }

    /// Reject a confidence level the summary check cannot use
    pub fn validate_confidence(&self) -> QsResult<()> {
        if !(stats::MIN_CONFIDENCE_LEVEL..=stats::MAX_CONFIDENCE_LEVEL).contains(&self.confidence)
        {
            return Err(QsError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("qsearch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config, SearchConfiguration::default());
        assert_eq!(args.format, Format::Text);
        assert!(!args.interactive);
        assert!(args.validate_confidence().is_ok());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&["-n", "2", "-i", "1", "-r", "1000", "--format", "json"]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config, SearchConfiguration::new(2, 1, 1000).unwrap());
        assert_eq!(args.format, Format::Json);
    }

    #[test]
    fn test_optimal_iterations() {
        let args = parse(&["-n", "10", "--optimal"]);
        assert_eq!(args.resolve_config().unwrap().iterations(), 25);
    }

    #[test]
    fn test_optimal_conflicts_with_iterations() {
        let result = Args::try_parse_from(["qsearch", "--optimal", "-i", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_register_rejected() {
        assert!(Args::try_parse_from(["qsearch", "-n", "-1"]).is_err());
    }

    #[test]
    fn test_zero_repeats_rejected() {
        let err = parse(&["-r", "0"]).resolve_config().unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_invalid_confidence() {
        let args = parse(&["--confidence", "0.5"]);
        assert_eq!(
            args.validate_confidence(),
            Err(QsError::InvalidConfidence(0.5))
        );
    }

    #[test]
    fn test_config_file_with_override() {
        let path = std::env::temp_dir().join(format!("qsearch_cli_test_{}.json", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            write!(file, r#"{{"register_size": 4, "iterations": 2, "repeats": 50}}"#).unwrap();
        }

        let path_str = path.to_str().unwrap().to_string();
        let args = parse(&["--config", path_str.as_str(), "-r", "7"]);
        let config = args.resolve_config().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.register_size(), 4);
        assert_eq!(config.iterations(), 2);
        assert_eq!(config.repeats(), 7);
    }
}
