use clap::Parser;
use engine::{Appearance, ChartMode};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tracker.toml";
const ENV_PREFIX: &str = "EXPENSE_TRACKER";

/// Startup settings. The theme preference is absent: every run starts at
/// `System`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol printed before amounts.
    pub currency: String,
    /// Host light/dark signal used when the preference is `System`.
    pub appearance: Appearance,
    pub chart_mode: ChartMode,
    /// Log destination. Without one, nothing is logged.
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            appearance: Appearance::Light,
            chart_mode: ChartMode::Transaction,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version, about = "Personal expense tracker")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Host appearance used by the System theme (light or dark).
    #[arg(long)]
    appearance: Option<String>,
    /// Override the currency symbol.
    #[arg(long)]
    currency: Option<String>,
    /// Pie slicing: transaction (one slice per expense) or category.
    #[arg(long)]
    chart_mode: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<String>,
    /// Log level filter (e.g. info, debug).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

pub fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(appearance) = args.appearance {
        settings.appearance = appearance.parse()?;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(chart_mode) = args.chart_mode {
        settings.chart_mode = chart_mode.parse()?;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "expense_tracker",
            "--config",
            "config/does_not_exist_for_tests.toml",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_overrides_are_applied() {
        let config = load_from(args(&[
            "--appearance",
            "dark",
            "--currency",
            "€",
            "--chart-mode",
            "category",
            "--log-level",
            "debug",
        ]))
        .unwrap();

        assert_eq!(config.appearance, Appearance::Dark);
        assert_eq!(config.currency, "€");
        assert_eq!(config.chart_mode, ChartMode::Category);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn file_values_are_case_insensitive() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "appearance = \"Dark\"\nchart_mode = \"CATEGORY\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.appearance, Appearance::Dark);
        assert_eq!(config.chart_mode, ChartMode::Category);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn unknown_file_value_is_an_error() {
        let config = config::Config::builder()
            .add_source(config::File::from_str(
                "appearance = \"sepia\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        assert!(config.try_deserialize::<AppConfig>().is_err());
    }

    #[test]
    fn unknown_appearance_is_an_error() {
        assert!(load_from(args(&["--appearance", "sepia"])).is_err());
    }
}
