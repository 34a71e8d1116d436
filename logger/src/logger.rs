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

use crate::{
    ColorMode, ExitHandler, FATAL_EXIT_CODE, FATAL_MESSAGE, LogLevel, LogLineEncoder, LogRecord,
    LogResult, LoggerConfig, LoggerDefaults, ProcessExit,
};
use bytes::BytesMut;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io;
use termilog_style::Sink;
use tokio_util::codec::Encoder;
use tracing::debug;

/// Leveled, timestamped logger writing one line per call to a [`Sink`].
///
/// Lines below the minimum level are dropped before anything is formatted.
/// Written lines look like
///
/// ```text
///  WARN 2006/01/02T15:04:05 something happened
/// ```
///
/// with the level label colored when [`Logger::color`] is true.
///
/// The logger does no locking. Share it between threads behind a `Mutex`
/// if needed.
///
/// # Example
///
/// ```
/// use termilog_logger::{ColorMode, LogLevel, Logger, LoggerConfig};
///
/// let mut logger = Logger::new(
///     Vec::<u8>::new(),
///     LoggerConfig::default()
///         .with_min_level(LogLevel::Info)
///         .with_color_mode(ColorMode::Never),
/// );
/// logger.debug("dropped");
/// logger.info(format_args!("{} workers started", 4));
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.starts_with(" INFO "));
/// assert!(output.ends_with("4 workers started\n"));
/// ```
pub struct Logger<W> {
    out: W,
    name: Cow<'static, str>,
    min_level: LogLevel,
    time_format: Cow<'static, str>,
    color_mode: ColorMode,
    exit_handler: Box<dyn ExitHandler>,
    encoder: LogLineEncoder,
    buffer: BytesMut,
}

impl Logger<io::Sink> {
    /// A logger that discards everything.
    ///
    /// Building one allocates nothing, so it can stand in wherever a logger is
    /// required but output is unwanted.
    pub fn null() -> Self {
        let defaults = LoggerDefaults::builtin();
        Logger {
            out: io::sink(),
            name: defaults.name,
            min_level: defaults.min_level,
            time_format: defaults.time_format,
            color_mode: ColorMode::Never,
            exit_handler: Box::new(ProcessExit),
            encoder: LogLineEncoder::new(),
            buffer: BytesMut::new(),
        }
    }
}

impl Logger<io::Stdout> {
    /// A logger on standard output with default configuration.
    pub fn stdout() -> Self {
        Logger::new(io::stdout(), LoggerConfig::default())
    }
}

impl Logger<io::Stderr> {
    /// A logger on standard error with default configuration.
    pub fn stderr() -> Self {
        Logger::new(io::stderr(), LoggerConfig::default())
    }
}

impl<W: Sink> Logger<W> {
    /// Creates a logger, filling unset options from [`LoggerDefaults::global`].
    pub fn new(out: W, config: LoggerConfig) -> Self {
        Self::with_defaults(out, config, LoggerDefaults::global())
    }

    /// Creates a logger, filling unset options from `defaults`.
    pub fn with_defaults(out: W, config: LoggerConfig, defaults: &LoggerDefaults) -> Self {
        let resolved = defaults.resolve(config);
        Logger {
            out,
            name: Cow::Owned(resolved.name.unwrap_or_default()),
            min_level: resolved.min_level.unwrap_or(defaults.min_level),
            time_format: resolved
                .time_format
                .map(Cow::Owned)
                .unwrap_or_else(|| defaults.time_format.clone()),
            color_mode: resolved.color_mode,
            exit_handler: Box::new(ProcessExit),
            encoder: LogLineEncoder::new(),
            buffer: BytesMut::new(),
        }
    }

    /// Replaces the action run by [`Logger::fatal`].
    pub fn with_exit_handler(mut self, handler: impl ExitHandler + 'static) -> Self {
        self.exit_handler = Box::new(handler);
        self
    }

    /// Returns true if level labels are colored.
    ///
    /// `always` and `never` decide on their own; `auto` colors only when the
    /// sink is an interactive terminal.
    pub fn color(&self) -> bool {
        self.color_mode.enabled_for(&self.out)
    }

    /// The coloring policy.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// The minimum level that is written.
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Sets the minimum level. Applies from the next call on.
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Returns true if lines at `level` are written.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// The name prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chrono strftime layout used for timestamps.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// The underlying sink.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// The underlying sink, mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the logger, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `message` at `DEBUG`.
    pub fn debug<T: Display>(&mut self, message: T) {
        self.log_display(LogLevel::Debug, message);
    }

    /// Writes `message` at `INFO`.
    pub fn info<T: Display>(&mut self, message: T) {
        self.log_display(LogLevel::Info, message);
    }

    /// Writes `message` at `WARN`.
    pub fn warn<T: Display>(&mut self, message: T) {
        self.log_display(LogLevel::Warn, message);
    }

    /// Writes `message` at `ERROR`.
    pub fn error<T: Display>(&mut self, message: T) {
        self.log_display(LogLevel::Error, message);
    }

    /// Writes `message` at `ERROR`, announces the exit, then runs the exit
    /// handler with status code 1.
    ///
    /// With the default [`ProcessExit`] handler this does not return.
    pub fn fatal<T: Display>(&mut self, message: T) {
        self.error(message);
        self.error(FATAL_MESSAGE);
        self.exit_handler.exit(FATAL_EXIT_CODE);
    }

    /// Writes `message` at `level`.
    ///
    /// Write failures are dropped; use [`Logger::try_log`] to observe them.
    pub fn log(&mut self, level: LogLevel, message: &str) {
        if let Err(error) = self.try_log(level, message) {
            debug!(%level, %error, "dropped log line");
        }
    }

    /// Writes `message` at `level`, returning any write failure.
    ///
    /// Lines below the minimum level return `Ok(())` without touching the
    /// sink.
    pub fn try_log(&mut self, level: LogLevel, message: &str) -> LogResult<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let color = self.color();
        let record = LogRecord::now(level, &self.time_format, &self.name, message).with_color(color);

        self.buffer.clear();
        self.encoder.encode(record, &mut self.buffer)?;
        self.out.write_all(&self.buffer)?;
        self.out.flush()?;
        Ok(())
    }

    fn log_display<T: Display>(&mut self, level: LogLevel, message: T) {
        if !self.is_enabled(level) {
            return;
        }
        let message = message.to_string();
        self.log(level, &message);
    }
}

impl<W: fmt::Debug> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("out", &self.out)
            .field("name", &self.name)
            .field("min_level", &self.min_level)
            .field("time_format", &self.time_format)
            .field("color_mode", &self.color_mode)
            .finish_non_exhaustive()
    }
}
