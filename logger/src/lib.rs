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

//! Timestamped, level filtered logging with optional ANSI colored labels.
//!
//! ```
//! use termilog_logger::{ColorMode, LogLevel, Logger, LoggerConfig, log_warn};
//!
//! let mut logger = Logger::new(
//!     std::io::stderr(),
//!     LoggerConfig::default().with_name("app: ").with_color_mode(ColorMode::Auto),
//! );
//! log_warn!(logger, "disk {}% full", 91);
//! ```

mod codec;
mod config;
mod exit;
mod level;
mod logger;
mod result;

pub use self::codec::{LogLineEncoder, LogRecord};
pub use self::config::{
    ColorMode, DEFAULT_TIME_FORMAT, LoggerConfig, LoggerDefaults, MIN_LEVEL_ENV,
};
pub use self::exit::{ExitHandler, FATAL_EXIT_CODE, FATAL_MESSAGE, ProcessExit};
pub use self::level::LogLevel;
pub use self::logger::Logger;
pub use self::result::{LogError, LogResult};
pub use termilog_style::{Color, Sink, Style};

/// Logs a formatted message at `DEBUG`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at `INFO`.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at `WARN`.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at `ERROR`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message at `ERROR` and runs the logger's exit handler.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}
