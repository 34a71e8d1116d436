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

//! Tests for LogLineEncoder

use bytes::BytesMut;
use chrono::{Local, TimeZone};
use futures::SinkExt;
use termilog_logger::{DEFAULT_TIME_FORMAT, LogLevel, LogLineEncoder, LogRecord};
use tokio_util::codec::{Encoder, FramedWrite};

fn record<'a>(level: LogLevel, message: &'a str) -> LogRecord<'a> {
    LogRecord {
        level,
        timestamp: Local.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).single().unwrap(),
        time_format: DEFAULT_TIME_FORMAT,
        name: "",
        message,
        color: false,
    }
}

#[test]
fn test_encode_unstyled_line() {
    let mut encoder = LogLineEncoder::new();
    let mut buffer = BytesMut::new();

    encoder
        .encode(record(LogLevel::Warn, "something happened"), &mut buffer)
        .unwrap();
    assert_eq!(&buffer[..], b" WARN 2006/01/02T15:04:05 something happened\n");
}

#[test]
fn test_encode_styled_line() {
    let mut encoder = LogLineEncoder::new();
    let mut buffer = BytesMut::new();

    encoder
        .encode(record(LogLevel::Info, "ready").with_color(true), &mut buffer)
        .unwrap();
    assert_eq!(
        &buffer[..],
        b"\x1b[36m INFO\x1b[0m 2006/01/02T15:04:05 ready\n"
    );
}

#[test]
fn test_record_now_uses_current_time() {
    let before = Local::now();
    let record = LogRecord::now(LogLevel::Error, DEFAULT_TIME_FORMAT, "n ", "m");
    assert!(record.timestamp >= before);
    assert!(!record.color);
    assert_eq!(record.name, "n ");
}

#[tokio::test]
async fn test_framed_write_to_async_sink() {
    let mut framed = FramedWrite::new(Vec::<u8>::new(), LogLineEncoder::new());

    framed.send(record(LogLevel::Warn, "first")).await.unwrap();
    framed
        .send(record(LogLevel::Error, "second").with_color(true))
        .await
        .unwrap();

    let output = framed.into_inner();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        " WARN 2006/01/02T15:04:05 first\n\x1b[31mERROR\x1b[0m 2006/01/02T15:04:05 second\n"
    );
}
