//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Logger configuration

use crate::{LogError, LogLevel, LogResult};
use chrono::format::{Item, StrftimeItems};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use termilog_style::Sink;
use tracing::warn;

/// Environment variable that overrides the default minimum level.
pub const MIN_LEVEL_ENV: &str = "TERMILOG_MINLEVEL";

/// Default timestamp layout, e.g. `2006/01/02T15:04:05`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%dT%H:%M:%S";

/// Policy deciding whether level labels are colored.
///
/// | Mode     | Colored when                       |
/// |----------|------------------------------------|
/// | `Auto`   | the sink is an interactive terminal|
/// | `Always` | always                             |
/// | `Never`  | never                              |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    /// Color regardless of the sink.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Returns true if output to `sink` should be colored under this mode.
    pub fn enabled_for<S: Sink + ?Sized>(self, sink: &S) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sink.is_terminal(),
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl FromStr for ColorMode {
    type Err = LogError;

    fn from_str(text: &str) -> LogResult<Self> {
        [ColorMode::Auto, ColorMode::Always, ColorMode::Never]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| LogError::UnknownColorMode(text.to_string()))
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Logger configuration
///
/// Every option left as `None` (or set to an empty string) is filled in from
/// [`LoggerDefaults`] when the logger is built.
///
/// # Example
///
/// ```
/// use termilog_logger::{ColorMode, LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::default()
///     .with_name("worker: ")
///     .with_min_level(LogLevel::Debug)
///     .with_color_mode(ColorMode::Never);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Prefix written in front of every message
    pub name: Option<String>,

    /// Lowest level that is written
    pub min_level: Option<LogLevel>,

    /// chrono strftime layout for the timestamp
    pub time_format: Option<String>,

    /// Coloring policy
    pub color_mode: ColorMode,
}

impl LoggerConfig {
    /// Set the name prefix
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the minimum level
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Set the timestamp layout
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Set the coloring policy
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Validate the configuration
    ///
    /// Returns an error if the timestamp layout contains a specifier chrono
    /// cannot render.
    pub fn validate(&self) -> LogResult<()> {
        match self.time_format.as_deref() {
            Some(format) => validate_time_format(format),
            None => Ok(()),
        }
    }
}

fn validate_time_format(format: &str) -> LogResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LogError::InvalidTimeFormat(format.to_string()));
    }
    Ok(())
}

/// Values used for options a [`LoggerConfig`] leaves unset.
///
/// Build this once while the application starts and hand it to
/// [`Logger::with_defaults`](crate::Logger::with_defaults), or rely on
/// [`LoggerDefaults::global`], which reads the environment the first time it
/// is used and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerDefaults {
    /// Default name prefix
    pub name: Cow<'static, str>,

    /// Default minimum level
    pub min_level: LogLevel,

    /// Default timestamp layout
    pub time_format: Cow<'static, str>,
}

impl Default for LoggerDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LoggerDefaults {
    /// Empty name, `WARN`, and [`DEFAULT_TIME_FORMAT`].
    pub const fn builtin() -> Self {
        Self {
            name: Cow::Borrowed(""),
            min_level: LogLevel::Warn,
            time_format: Cow::Borrowed(DEFAULT_TIME_FORMAT),
        }
    }

    /// Built-in defaults with the minimum level taken from [`MIN_LEVEL_ENV`]
    /// when it holds a level name.
    pub fn from_env() -> Self {
        let value = std::env::var(MIN_LEVEL_ENV).ok();
        Self::builtin().with_min_level_override(value.as_deref())
    }

    /// Process wide defaults, read from the environment once.
    pub fn global() -> &'static LoggerDefaults {
        static DEFAULTS: OnceLock<LoggerDefaults> = OnceLock::new();
        DEFAULTS.get_or_init(LoggerDefaults::from_env)
    }

    /// Replaces the minimum level with the level named by `value`.
    ///
    /// `None` and empty text keep the current level. Text that is not a
    /// level name is logged and ignored.
    pub fn with_min_level_override(mut self, value: Option<&str>) -> Self {
        match value {
            None | Some("") => {}
            Some(text) => match LogLevel::parse(text) {
                Ok(level) => self.min_level = level,
                Err(error) => {
                    warn!(variable = MIN_LEVEL_ENV, %error, "ignoring default log level override");
                }
            },
        }
        self
    }

    /// Fills every unset or empty option of `config`.
    pub fn resolve(&self, config: LoggerConfig) -> LoggerConfig {
        LoggerConfig {
            name: Some(
                config
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| self.name.to_string()),
            ),
            min_level: Some(config.min_level.unwrap_or(self.min_level)),
            time_format: Some(
                config
                    .time_format
                    .filter(|format| !format.is_empty())
                    .unwrap_or_else(|| self.time_format.to_string()),
            ),
            color_mode: config.color_mode,
        }
    }
}
