// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::Weekday;
use daycal_core::{APP_NAME, FilterMode};
use ratatui::style::Color;
use serde::de;
use tokio::fs;

const DAYCAL_CONFIG_ENV: &str = "DAYCAL_CONFIG";
const DAYCAL_DEV_ENV: &str = "DAYCAL_DEV";

const DAYCAL_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const DAYCAL_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration.
///
/// The file is looked up in this order: the `path` argument, the `DAYCAL_CONFIG`
/// environment variable, then `$XDG_CONFIG_HOME/daycal/config.toml`. A missing
/// default file is not an error, the built-in defaults are used instead.
///
/// This runs before logging is set up, so problems worth a warning are kept in
/// [`Config::warnings`] and emitted later by [`Config::report`].
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let mut warnings = Vec::new();
    let mut config = match find_config(path, &mut warnings)? {
        Some(path) => read_config(&path).await?,
        None => Config::default(),
    };
    config.warnings = warnings;
    Ok(config)
}

fn find_config(
    path: Option<PathBuf>,
    warnings: &mut Vec<String>,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    if let Some(path) = path {
        Ok(Some(path))
    } else if let Ok(env_path) = std::env::var(DAYCAL_CONFIG_ENV) {
        Ok(Some(PathBuf::from(env_path)))
    } else if let Some(true) = is_dev_mode(warnings) {
        let warning = format!("{DAYCAL_DEV_ENV} is set, skipping config discovery");
        warnings.push(warning);
        Ok(None)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        Ok(config.exists().then_some(config))
    }
}

async fn read_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let mut config = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()?;
    config.normalize()?;
    Ok(config)
}

/// Configuration for the daycal application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub filter: FilterConfig,
    pub style: StyleConfig,
    pub log: LogConfig,

    /// Warnings noticed while loading, not read from the file.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Config {
    /// Logs the loaded configuration and its warnings, once logging is initialized.
    pub fn report(&self) {
        tracing::debug!(config = ?self, "configuration loaded");
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(file) = &self.log.file {
            self.log.file = Some(
                expand_path(file).map_err(|e| format!("Failed to expand log file path: {e}"))?,
            );
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

/// Layout of the month grid.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// First day of the week in the grid.
    pub week_start: WeekStart,

    /// Event lines shown per day cell before collapsing into "+N more".
    pub max_events_per_day: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            max_events_per_day: 3,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Filter applied at startup.
    pub default: FilterMode,

    /// If true, adding, editing or deleting an event switches the filter back to all.
    pub reset_on_change: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            default: FilterMode::All,
            reset_on_change: true,
        }
    }
}

/// Colours of event entries on the month grid.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background of events dated before today.
    pub past: ConfigColor,

    /// Background of events dated today or later.
    pub upcoming: ConfigColor,

    /// Text colour of event entries.
    pub foreground: ConfigColor,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            past: ConfigColor(Color::Rgb(0xDE, 0x69, 0x86)),
            upcoming: ConfigColor(Color::Rgb(0x8C, 0xBC, 0x4C)),
            foreground: ConfigColor(Color::White),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Log file. Logging is disabled when unset.
    pub file: Option<PathBuf>,

    /// Filter directive, e.g. "debug" or "daycal_core=trace".
    pub level: Option<String>,
}

/// A colour given as a name ("white") or hex string ("#8CBC4C").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigColor(pub Color);

impl<'de> serde::Deserialize<'de> for ConfigColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl de::Visitor<'_> for ColorVisitor {
            type Value = ConfigColor;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a colour name or a #RRGGBB hex string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Color::from_str(value)
                    .map(ConfigColor)
                    .map_err(|_| de::Error::custom(format!("invalid colour: {value}")))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Handle tilde (~) and $HOME in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            let home = dirs::home_dir().ok_or("User-specific home directory not found")?;
            return Ok(home.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn is_dev_mode(warnings: &mut Vec<String>) -> Option<bool> {
    let val = std::env::var(DAYCAL_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if DAYCAL_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if DAYCAL_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        let expected = format!(
            "{} to enable or {} to disable",
            DAYCAL_DEV_VALID_TRUE.join("/"),
            DAYCAL_DEV_VALID_FALSE.join("/")
        );
        let warning = format!("Ignoring {DAYCAL_DEV_ENV}='{val}': expected {expected}");
        warnings.push(warning);
        None
    }
}
