use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

/// Installs the global subscriber writing to `config.log_file`.
///
/// The terminal UI owns stdout, so without a log file no subscriber is
/// installed and events are dropped.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_new(filter_directive(&config.log_level))
        .map_err(|err| AppError::Log(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Log(err.to_string()))?;

    Ok(())
}

fn filter_directive(level: &str) -> String {
    format!("expense_tracker={level},engine={level}")
}
