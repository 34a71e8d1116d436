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

use crate::{LogError, LogLevel};
use bytes::BytesMut;
use chrono::{DateTime, Local};
use std::fmt::Write;
use termilog_style::Style;
use tokio_util::codec::Encoder;
use tracing::instrument;

/// A single log line waiting to be encoded.
#[derive(Clone, Copy, Debug)]
pub struct LogRecord<'a> {
    /// Severity of the line
    pub level: LogLevel,
    /// When the line was logged
    pub timestamp: DateTime<Local>,
    /// chrono strftime layout for `timestamp`
    pub time_format: &'a str,
    /// Prefix written in front of the message
    pub name: &'a str,
    /// Message text, trimmed when encoded
    pub message: &'a str,
    /// Whether the level label is styled
    pub color: bool,
}

impl<'a> LogRecord<'a> {
    /// A record stamped with the current local time.
    pub fn now(level: LogLevel, time_format: &'a str, name: &'a str, message: &'a str) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            time_format,
            name,
            message,
            color: false,
        }
    }

    /// Sets whether the level label is styled.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Encodes [`LogRecord`]s as text lines.
///
/// Each record becomes
///
/// ```text
/// <level> <timestamp> <name><message>\n
/// ```
///
/// The level is right aligned in five columns and wrapped in its
/// [`LogLevel::style`] when the record asks for color. Only the message is
/// trimmed. A timestamp layout chrono rejects is written literally.
///
/// The encoder plugs into `tokio_util::codec::FramedWrite` for async sinks
/// and backs the synchronous [`Logger`](crate::Logger).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLineEncoder;

impl LogLineEncoder {
    /// Creates a new encoder
    pub fn new() -> Self {
        LogLineEncoder
    }
}

impl<'a> Encoder<LogRecord<'a>> for LogLineEncoder {
    type Error = LogError;

    #[instrument(level = "trace", skip_all)]
    fn encode(&mut self, record: LogRecord<'a>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let style = if record.color {
            record.level.style()
        } else {
            Style::NORMAL
        };

        let mut timestamp = String::new();
        if write!(timestamp, "{}", record.timestamp.format(record.time_format)).is_err() {
            timestamp.clear();
            timestamp.push_str(record.time_format);
        }

        dst.reserve(timestamp.len() + record.name.len() + record.message.len() + 24);
        style.write_styled(dst, format_args!("{:>5}", record.level))?;
        writeln!(
            dst,
            " {} {}{}",
            timestamp,
            record.name,
            record.message.trim()
        )?;
        Ok(())
    }
}
