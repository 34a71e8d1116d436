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

use crate::{Sink, consts};
use std::fmt::{self, Display};
use std::ops::{BitOr, BitOrAssign};

const BOLD_BIT: u16 = 1 << 0;
const UNDERLINE_BIT: u16 = 1 << 1;
const COLOR_SHIFT: u16 = 8;
const COLOR_MASK: u16 = 0b111 << COLOR_SHIFT;

/// Text decoration and foreground color packed into a single bitfield.
///
/// | Bits    | Field                                   |
/// |---------|-----------------------------------------|
/// | `0`     | Bold                                    |
/// | `1`     | Underline                               |
/// | `8..=10`| Foreground color selector, see [`Color`]|
///
/// The decoration bits and the color selector never overlap, so any of the
/// named constants can be combined with `|`:
///
/// ```rust
/// use termilog_style::Style;
///
/// let style = Style::BOLD | Style::FG_RED;
/// assert!(style.is_bold());
/// assert_eq!(style.foreground_color(), Style::FG_RED);
/// assert_eq!(style.render("x"), "\x1b[1m\x1b[31mx\x1b[0m");
/// ```
///
/// Styles are plain values. Every `with_*` method returns a new `Style` and
/// leaves the receiver untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style(u16);

impl Style {
    /// No decoration, default foreground.
    pub const NORMAL: Style = Style(0);
    /// Bold decoration.
    pub const BOLD: Style = Style(BOLD_BIT);
    /// Underline decoration.
    pub const UNDERLINE: Style = Style(UNDERLINE_BIT);

    /// Black (terminal default) foreground.
    pub const FG_BLACK: Style = Style::color_bits(Color::Black);
    /// Red foreground.
    pub const FG_RED: Style = Style::color_bits(Color::Red);
    /// Green foreground.
    pub const FG_GREEN: Style = Style::color_bits(Color::Green);
    /// Yellow foreground.
    pub const FG_YELLOW: Style = Style::color_bits(Color::Yellow);
    /// Blue foreground.
    pub const FG_BLUE: Style = Style::color_bits(Color::Blue);
    /// Magenta foreground.
    pub const FG_MAGENTA: Style = Style::color_bits(Color::Magenta);
    /// Cyan foreground.
    pub const FG_CYAN: Style = Style::color_bits(Color::Cyan);
    /// Gray foreground.
    pub const FG_GRAY: Style = Style::color_bits(Color::Gray);

    const fn color_bits(color: Color) -> Style {
        Style((color as u16) << COLOR_SHIFT)
    }

    /// Builds a style from its raw bit pattern.
    pub const fn from_bits(bits: u16) -> Style {
        Style(bits)
    }

    /// Raw bit pattern of this style.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns this style with bold set when `bold` is true, cleared otherwise.
    pub const fn with_bold(self, bold: bool) -> Style {
        if bold {
            Style(self.0 | BOLD_BIT)
        } else {
            Style(self.0 & !BOLD_BIT)
        }
    }

    /// Returns true for bold styles.
    pub const fn is_bold(self) -> bool {
        self.0 & BOLD_BIT != 0
    }

    /// Returns this style with underline set when `underline` is true, cleared otherwise.
    pub const fn with_underline(self, underline: bool) -> Style {
        if underline {
            Style(self.0 | UNDERLINE_BIT)
        } else {
            Style(self.0 & !UNDERLINE_BIT)
        }
    }

    /// Returns true for underlined styles.
    pub const fn is_underline(self) -> bool {
        self.0 & UNDERLINE_BIT != 0
    }

    /// The foreground color field alone, with every decoration bit cleared.
    pub const fn foreground_color(self) -> Style {
        Style(self.0 & COLOR_MASK)
    }

    /// Replaces the foreground color with the color field of `color`.
    ///
    /// Only the color bits of the argument are taken. Passing a style that
    /// carries no color bits (such as [`Style::BOLD`]) resets the foreground
    /// to black rather than failing, and decoration bits of the argument are
    /// ignored.
    pub const fn with_foreground_color(self, color: Style) -> Style {
        Style((self.0 & !COLOR_MASK) | (color.0 & COLOR_MASK))
    }

    /// The foreground color as a [`Color`].
    pub const fn color(self) -> Color {
        Color::from_index(((self.0 & COLOR_MASK) >> COLOR_SHIFT) as u8)
    }

    /// Returns true if rendering this style emits no escape sequence.
    pub const fn is_plain(self) -> bool {
        !self.is_bold() && !self.is_underline() && self.color().sequence().is_none()
    }

    /// Writes the opening escape sequences for this style.
    ///
    /// Sequences are emitted bold first, then underline, then the color.
    /// Returns whether anything was written.
    pub fn write_prefix<W: fmt::Write + ?Sized>(self, writer: &mut W) -> Result<bool, fmt::Error> {
        let mut written = false;
        if self.is_bold() {
            writer.write_str(consts::BOLD)?;
            written = true;
        }
        if self.is_underline() {
            writer.write_str(consts::UNDERLINE)?;
            written = true;
        }
        if let Some(sequence) = self.color().sequence() {
            writer.write_str(sequence)?;
            written = true;
        }
        Ok(written)
    }

    /// Writes `text` wrapped in this style's escape sequences.
    ///
    /// The reset sequence is appended once, and only when an opening sequence
    /// was written. A plain style writes `text` untouched.
    pub fn write_styled<W, T>(self, writer: &mut W, text: T) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
        T: Display,
    {
        let styled = self.write_prefix(writer)?;
        write!(writer, "{}", text)?;
        if styled {
            writer.write_str(consts::RESET)?;
        }
        Ok(())
    }

    /// Renders `text` with this style's escape sequences.
    ///
    /// Use `format_args!` for formatted text:
    ///
    /// ```rust
    /// use termilog_style::Style;
    ///
    /// let label = Style::FG_CYAN.render(format_args!("{:>5}", "INFO"));
    /// assert_eq!(label, "\x1b[36m INFO\x1b[0m");
    /// assert_eq!(Style::NORMAL.render("plain"), "plain");
    /// ```
    ///
    /// If `text`'s `Display` impl fails, the output written up to the failure
    /// is returned without the reset sequence. Use [`Style::write_styled`] to
    /// observe the error.
    pub fn render<T: Display>(self, text: T) -> String {
        let mut output = String::new();
        // Writing into a String only fails when `text` does.
        let _ = self.write_styled(&mut output, text);
        output
    }

    /// Writes `text` to `sink`, styled only when the sink is a terminal.
    ///
    /// Returns the number of bytes written. Write failures are returned to
    /// the caller.
    pub fn render_to<S, T>(self, sink: &mut S, text: T) -> std::io::Result<usize>
    where
        S: Sink + ?Sized,
        T: Display,
    {
        let rendered = if sink.is_terminal() {
            self.render(text)
        } else {
            text.to_string()
        };
        sink.write_all(rendered.as_bytes())?;
        Ok(rendered.len())
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::color_bits(color)
    }
}

impl BitOr for Style {
    type Output = Style;

    fn bitor(self, rhs: Style) -> Style {
        Style(self.0 | rhs.0)
    }
}

impl BitOrAssign for Style {
    fn bitor_assign(&mut self, rhs: Style) {
        self.0 |= rhs.0;
    }
}

/// Names the parts of the style, e.g. `bold+underline+red` or `normal`.
impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if self.is_bold() {
            parts.push("bold");
        }
        if self.is_underline() {
            parts.push("underline");
        }
        if self.color() != Color::Black {
            parts.push(self.color().name());
        }
        if parts.is_empty() {
            f.pad("normal")
        } else {
            f.pad(&parts.join("+"))
        }
    }
}

/// The eight basic foreground colors a [`Style`] can carry.
///
/// The discriminant is the value stored in the style's 3-bit color field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Terminal default. Renders without an escape sequence.
    #[default]
    Black = 0,
    /// Red (`31`).
    Red = 1,
    /// Green (`32`).
    Green = 2,
    /// Yellow (`33`).
    Yellow = 3,
    /// Blue (`34`).
    Blue = 4,
    /// Magenta (`35`).
    Magenta = 5,
    /// Cyan (`36`).
    Cyan = 6,
    /// Gray (`37`).
    Gray = 7,
}

impl Color {
    /// All colors in selector order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
    ];

    /// Maps the low three bits of `index` to a color.
    pub const fn from_index(index: u8) -> Color {
        match index & 0b111 {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::Gray,
        }
    }

    /// The foreground escape sequence, or `None` for black.
    pub const fn sequence(self) -> Option<&'static str> {
        match self {
            Color::Black => None,
            Color::Red => Some(consts::RED),
            Color::Green => Some(consts::GREEN),
            Color::Yellow => Some(consts::YELLOW),
            Color::Blue => Some(consts::BLUE),
            Color::Magenta => Some(consts::MAGENTA),
            Color::Cyan => Some(consts::CYAN),
            Color::Gray => Some(consts::GRAY),
        }
    }

    /// Lowercase color name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_has_no_decoration() {
        assert!(!Style::NORMAL.is_bold());
        assert!(!Style::NORMAL.is_underline());
        assert_eq!(Style::NORMAL.color(), Color::Black);
        assert!(Style::NORMAL.is_plain());
    }

    #[test]
    fn test_bold_toggle() {
        let style = Style::FG_RED.with_bold(true);
        assert!(style.is_bold());
        assert_eq!(style.foreground_color(), Style::FG_RED);

        let style = style.with_bold(false);
        assert!(!style.is_bold());
        assert_eq!(style, Style::FG_RED);
    }

    #[test]
    fn test_underline_toggle() {
        let style = Style::FG_BLUE.with_underline(true);
        assert!(style.is_underline());
        assert!(!style.is_bold());
        assert_eq!(style.with_underline(false), Style::FG_BLUE);
    }

    #[test]
    fn test_from_bits_preserves_pattern() {
        let style = Style::from_bits(0x0503);
        assert_eq!(style.bits(), 0x0503);
        assert!(style.is_bold());
        assert!(style.is_underline());
        assert_eq!(style.color(), Color::Magenta);
        assert_eq!(Style::from_bits(Style::FG_CYAN.bits()), Style::FG_CYAN);
    }

    #[test]
    fn test_render_keeps_partial_output_on_display_error() {
        struct Failing;

        impl Display for Failing {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("part")?;
                Err(fmt::Error)
            }
        }

        assert_eq!(Style::FG_RED.render(Failing), "\x1b[31mpart");
        assert_eq!(Style::NORMAL.render(Failing), "part");

        let mut output = String::new();
        assert!(Style::FG_RED.write_styled(&mut output, Failing).is_err());
    }

    #[test]
    fn test_color_constants_use_high_byte() {
        assert_eq!(Style::FG_BLACK.bits(), 0x000);
        assert_eq!(Style::FG_RED.bits(), 0x100);
        assert_eq!(Style::FG_GRAY.bits(), 0x700);
        assert_eq!(Style::BOLD.bits(), 0x001);
        assert_eq!(Style::UNDERLINE.bits(), 0x002);
    }

    #[test]
    fn test_foreground_color_masks_decoration() {
        let style = Style::BOLD | Style::UNDERLINE | Style::FG_CYAN;
        assert_eq!(style.foreground_color(), Style::FG_CYAN);
        assert_eq!(style.color(), Color::Cyan);
    }

    #[test]
    fn test_with_foreground_color_ignores_argument_decoration() {
        let style = Style::NORMAL.with_foreground_color(Style::FG_GREEN | Style::BOLD);
        assert_eq!(style, Style::FG_GREEN);
        assert!(!style.is_bold());
    }

    #[test]
    fn test_with_foreground_color_without_color_bits_resets_to_black() {
        let style = Style::FG_RED.with_underline(true).with_foreground_color(Style::BOLD);
        assert_eq!(style.color(), Color::Black);
        assert!(style.is_underline());
    }

    #[test]
    fn test_prefix_order() {
        let mut output = String::new();
        let written = (Style::FG_YELLOW | Style::UNDERLINE | Style::BOLD)
            .write_prefix(&mut output)
            .unwrap();
        assert!(written);
        assert_eq!(output, "\x1b[1m\x1b[4m\x1b[33m");
    }

    #[test]
    fn test_black_renders_plain() {
        assert!(!Style::FG_BLACK.write_prefix(&mut String::new()).unwrap());
        assert_eq!(Style::FG_BLACK.render("Hello with Black"), "Hello with Black");
    }

    #[test]
    fn test_render_formatted() {
        let rendered = Style::BOLD.render(format_args!("{:>5}", "DEBUG"));
        assert_eq!(rendered, "\x1b[1mDEBUG\x1b[0m");
        let rendered = Style::FG_RED.render(format_args!("{}-{}", 1, 2));
        assert_eq!(rendered, "\x1b[31m1-2\x1b[0m");
    }

    #[test]
    fn test_color_index_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Style::from(color).color(), color);
            assert_eq!(Color::from_index(color as u8), color);
        }
    }

    #[test]
    fn test_style_display() {
        assert_eq!(Style::NORMAL.to_string(), "normal");
        assert_eq!((Style::BOLD | Style::FG_RED).to_string(), "bold+red");
        assert_eq!(
            (Style::BOLD | Style::UNDERLINE | Style::FG_GRAY).to_string(),
            "bold+underline+gray"
        );
        assert_eq!(format!("{:>8}", Style::FG_CYAN), "    cyan");
    }

    #[test]
    fn test_bitor_assign() {
        let mut style = Style::NORMAL;
        style |= Style::UNDERLINE;
        style |= Style::FG_MAGENTA;
        assert_eq!(style.render("x"), "\x1b[4m\x1b[35mx\x1b[0m");
    }
}
