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

//! Error types for the logger crate

use thiserror::Error;

/// Result type for logger operations
pub type LogResult<T> = std::result::Result<T, LogError>;

/// Logger error types
#[derive(Debug, Error)]
pub enum LogError {
    /// Text did not name one of DEBUG, INFO, WARN or ERROR
    #[error("unrecognized log level: {0:?}")]
    UnrecognizedLevel(String),

    /// Text did not name one of auto, always or never
    #[error("unknown color mode: {0:?}")]
    UnknownColorMode(String),

    /// Timestamp format contains a specifier chrono cannot render
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// A log line could not be formatted
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),

    /// I/O error from the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Check if the error came from parsing configuration text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LogError::UnrecognizedLevel(_)
                | LogError::UnknownColorMode(_)
                | LogError::InvalidTimeFormat(_)
        )
    }

    /// Check if the error came from writing to the sink
    pub fn is_write_error(&self) -> bool {
        matches!(self, LogError::Io(_))
    }
}
