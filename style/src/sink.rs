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

use std::fs::File;
use std::io::{self, IsTerminal, Write};

/// A byte sink that knows whether it is attached to an interactive terminal.
///
/// Handles backed by a file descriptor ask the operating system. In-memory
/// buffers and discarding writers are never terminals.
///
/// ```rust
/// use termilog_style::Sink;
///
/// let buffer: Vec<u8> = Vec::new();
/// assert!(!buffer.is_terminal());
/// ```
pub trait Sink: Write {
    /// Returns true if writes reach an interactive terminal.
    fn is_terminal(&self) -> bool;
}

/// Returns true if `sink` writes to a terminal.
pub fn is_terminal<S: Sink + ?Sized>(sink: &S) -> bool {
    sink.is_terminal()
}

macro_rules! terminal_sink {
    ($($sink:ty),* $(,)?) => {
        $(
            impl Sink for $sink {
                fn is_terminal(&self) -> bool {
                    IsTerminal::is_terminal(self)
                }
            }
        )*
    };
}

terminal_sink!(
    io::Stdout,
    io::StdoutLock<'_>,
    io::Stderr,
    io::StderrLock<'_>,
    File,
);

impl Sink for Vec<u8> {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl Sink for io::Sink {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<T> Sink for io::Cursor<T>
where
    io::Cursor<T>: Write,
{
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<B: bytes::BufMut> Sink for bytes::buf::Writer<B> {
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<S: Sink> Sink for io::BufWriter<S> {
    fn is_terminal(&self) -> bool {
        self.get_ref().is_terminal()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}
