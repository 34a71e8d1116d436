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

//! Select Graphic Rendition escape sequences.
//!
//! | Attribute | Sequence   |
//! |-----------|------------|
//! | Bold      | `ESC[1m`   |
//! | Underline | `ESC[4m`   |
//! | Red       | `ESC[31m`  |
//! | Green     | `ESC[32m`  |
//! | Yellow    | `ESC[33m`  |
//! | Blue      | `ESC[34m`  |
//! | Magenta   | `ESC[35m`  |
//! | Cyan      | `ESC[36m`  |
//! | Gray      | `ESC[37m`  |
//! | Reset     | `ESC[0m`   |
//!
//! Black has no sequence of its own and renders as plain text.

/// Bold or increased intensity.
pub const BOLD: &str = "\x1b[1m";
/// Single underline.
pub const UNDERLINE: &str = "\x1b[4m";
/// Red foreground.
pub const RED: &str = "\x1b[31m";
/// Green foreground.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground.
pub const BLUE: &str = "\x1b[34m";
/// Magenta foreground.
pub const MAGENTA: &str = "\x1b[35m";
/// Cyan foreground.
pub const CYAN: &str = "\x1b[36m";
/// Gray (white) foreground.
pub const GRAY: &str = "\x1b[37m";
/// Clears every attribute.
pub const RESET: &str = "\x1b[0m";
