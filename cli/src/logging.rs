// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

const DAYCAL_LOG_ENV: &str = "DAYCAL_LOG";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The terminal is owned by the calendar UI, so logs only go to the configured
/// file. Without `log.file` no subscriber is installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), Box<dyn Error>> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn env_filter(config: &LogConfig) -> Result<EnvFilter, Box<dyn Error>> {
    if let Ok(filter) = EnvFilter::try_from_env(DAYCAL_LOG_ENV) {
        return Ok(filter);
    }

    let level = config.level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{level}': {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_means_no_subscriber() {
        assert!(init_tracing(&LogConfig::default()).is_ok());
    }

    #[test]
    fn invalid_level_is_reported() {
        let config = LogConfig {
            file: None,
            level: Some("daycal=notalevel".to_string()),
        };
        if std::env::var(DAYCAL_LOG_ENV).is_err() {
            let err = env_filter(&config).unwrap_err();
            assert!(err.to_string().contains("Invalid log level"));
        }
    }

    #[test]
    fn level_from_config() {
        let config = LogConfig {
            file: None,
            level: Some("debug".to_string()),
        };
        if std::env::var(DAYCAL_LOG_ENV).is_err() {
            let filter = env_filter(&config).unwrap();
            assert_eq!(filter.to_string(), "debug");
        }
    }
}
