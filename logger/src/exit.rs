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

/// Status code passed to the exit handler by [`Logger::fatal`](crate::Logger::fatal).
pub const FATAL_EXIT_CODE: i32 = 1;

/// Message logged at `ERROR` right before the exit handler runs.
pub const FATAL_MESSAGE: &str = "hit FATAL error: exiting with status code 1";

/// Action taken after a fatal log line.
///
/// Loggers terminate the process with [`ProcessExit`] unless another handler
/// is installed. Closures taking the status code are handlers too, which lets
/// tests observe a fatal exit instead of ending the test binary:
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use termilog_logger::{Logger, LoggerConfig};
///
/// let code = Arc::new(AtomicI32::new(0));
/// let seen = code.clone();
/// let mut logger = Logger::new(Vec::<u8>::new(), LoggerConfig::default())
///     .with_exit_handler(move |status: i32| seen.store(status, Ordering::SeqCst));
/// logger.fatal("boom");
/// assert_eq!(code.load(Ordering::SeqCst), 1);
/// ```
pub trait ExitHandler: Send + Sync {
    /// Called with the status code the process should exit with.
    fn exit(&self, code: i32);
}

/// Exits the process through [`std::process::exit`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}

impl<F> ExitHandler for F
where
    F: Fn(i32) + Send + Sync,
{
    fn exit(&self, code: i32) {
        self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_handler_receives_code() {
        let codes = Mutex::new(Vec::new());
        let handler = |code: i32| codes.lock().unwrap().push(code);
        handler.exit(FATAL_EXIT_CODE);
        handler.exit(7);
        assert_eq!(*codes.lock().unwrap(), vec![1, 7]);
    }

    #[test]
    fn test_boxed_handler() {
        let handler: Box<dyn ExitHandler> = Box::new(|code: i32| assert_eq!(code, 3));
        handler.exit(3);
    }

    #[test]
    fn test_fatal_message_names_exit_code() {
        assert!(FATAL_MESSAGE.ends_with(&FATAL_EXIT_CODE.to_string()));
    }
}
