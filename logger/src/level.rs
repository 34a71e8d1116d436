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

use crate::{LogError, LogResult};
use std::fmt;
use std::str::FromStr;
use termilog_style::Style;

/// Severity of a log line.
///
/// Levels are totally ordered, `Debug < Info < Warn < Error`. A logger drops
/// every line whose level is below its threshold.
///
/// | Level   | Label   | Style  |
/// |---------|---------|--------|
/// | `Debug` | `DEBUG` | bold   |
/// | `Info`  | `INFO`  | cyan   |
/// | `Warn`  | `WARN`  | yellow |
/// | `Error` | `ERROR` | red    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug = 1,
    /// Normal operation.
    Info = 2,
    /// Something unexpected that did not stop the program.
    Warn = 3,
    /// A failure.
    Error = 4,
}

impl LogLevel {
    /// All levels, lowest first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Parses a level name, ignoring ASCII case.
    ///
    /// Anything other than `DEBUG`, `INFO`, `WARN` or `ERROR` fails with
    /// [`LogError::UnrecognizedLevel`] carrying the rejected text.
    pub fn parse(text: &str) -> LogResult<LogLevel> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(text))
            .ok_or_else(|| LogError::UnrecognizedLevel(text.to_string()))
    }

    /// Canonical uppercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Style used for the level label when coloring is on.
    pub const fn style(self) -> Style {
        match self {
            LogLevel::Debug => Style::NORMAL.with_bold(true),
            LogLevel::Info => Style::NORMAL.with_foreground_color(Style::FG_CYAN),
            LogLevel::Warn => Style::NORMAL.with_foreground_color(Style::FG_YELLOW),
            LogLevel::Error => Style::NORMAL.with_foreground_color(Style::FG_RED),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(text: &str) -> LogResult<Self> {
        LogLevel::parse(text)
    }
}

/// Writes the canonical name, honouring width and alignment (`{:>5}`).
impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
