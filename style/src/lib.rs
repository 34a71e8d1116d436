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

//! Bitfield text styles and the ANSI escape sequences they render to.
//!
//! A [`Style`] packs two decoration flags and a 3-bit foreground color into a
//! single `u16`, so styles are `Copy`, compare by value and combine with `|`.
//! Rendering is split in two: [`Style::render`] always styles, while
//! [`Style::render_to`] asks the destination [`Sink`] whether it is an
//! interactive terminal first.

mod consts;
mod sink;
mod style;

pub use self::consts::{
    BLUE, BOLD, CYAN, GRAY, GREEN, MAGENTA, RED, RESET, UNDERLINE, YELLOW,
};
pub use self::sink::{Sink, is_terminal};
pub use self::style::{Color, Style};
