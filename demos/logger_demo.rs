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


//! Logger Demonstration
//!
//! Builds a named logger from configuration, logs through the formatting
//! macros and ends with a fatal line whose exit is intercepted.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example logger_demo -- debug always
//! RUST_LOG=debug cargo run --example logger_demo -- verbose
//! ```
//!
//! The first argument is the minimum level and the second the color mode
//! (`auto`, `always` or `never`). Library diagnostics such as a rejected
//! level go to the `tracing` subscriber.

use termilog_logger::{
    ColorMode, LogLevel, LogResult, Logger, LoggerConfig, log_debug, log_error, log_fatal,
    log_info, log_warn,
};
use tracing::{info, warn};

fn main() -> LogResult<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let mut config = LoggerConfig::default().with_name("demo: ");
    if let Some(level) = args.next() {
        match level.parse::<LogLevel>() {
            Ok(level) => config = config.with_min_level(level),
            Err(error) => warn!(%error, "keeping the default level"),
        }
    }
    if let Some(mode) = args.next() {
        config = config.with_color_mode(mode.parse::<ColorMode>()?);
    }
    config.validate()?;

    let mut logger = Logger::new(std::io::stdout(), config).with_exit_handler(|status: i32| {
        info!(status, "fatal exit intercepted");
    });

    log_debug!(logger, "minimum level is {}", logger.min_level());
    log_info!(logger, "color mode is {} ({})", logger.color_mode(), logger.color());
    log_warn!(logger, "{} of {} replicas reachable", 2, 3);
    log_error!(logger, "lost connection to {:?}", "db-1");
    log_fatal!(logger, "giving up after {} retries", 5);

    logger.try_log(LogLevel::Error, "still running after the intercepted exit")?;
    Ok(())
}
