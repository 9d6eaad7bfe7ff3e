//! Command-line configuration

use clap::{Args, Parser};

use crate::amount;

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

/// Answers supplied up front instead of at the prompts.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionConfig {
    /// Purchase amount; skips the amount prompt
    #[arg(short, long, value_parser = amount::parse, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Discount option (no discount, 10%, 20%); skips the discount prompt
    #[arg(short, long)]
    pub discount: Option<String>,
}

/// Discount calculator configuration
#[derive(Debug, Parser)]
#[command(name = "rebate", about = "Apply a discount to a purchase amount", long_about = None)]
pub struct Config {
    /// Preset answers.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from command-line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed, or when help or
    /// version output was requested.
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_prompt_for_everything() -> TestResult {
        let config = Config::try_parse_from(["rebate"])?;

        assert_eq!(config.session.amount, None);
        assert_eq!(config.session.discount, None);
        assert_eq!(config.logging.log_level, "warn");
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn presets_are_parsed() -> TestResult {
        let config = Config::try_parse_from([
            "rebate",
            "--amount",
            "-12.5",
            "--discount",
            "No Discount",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.session.amount.map(f64::to_bits), Some((-12.5_f64).to_bits()));
        assert_eq!(config.session.discount.as_deref(), Some("No Discount"));
        assert_eq!(config.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn malformed_amount_flag_is_rejected() {
        assert!(Config::try_parse_from(["rebate", "--amount", "ten"]).is_err());
        assert!(Config::try_parse_from(["rebate", "--amount", "nan"]).is_err());
    }
}
