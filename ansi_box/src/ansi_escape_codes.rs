// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// The escape byte that starts every terminal escape sequence.
pub const ESC_CHAR: u8 = 0x1b;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR (set graphics mode) command.
pub const SGR: &str = "m";

/// Separator between SGR parameters inside a single sequence.
pub const SGR_SEPARATOR: char = ';';

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

/// The 16 named terminal colors. The first 8 are the normal intensity colors, the rest
/// are the bright (high intensity) variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// SGR parameter for this color used as a foreground. Backgrounds are offset by 10.
    #[must_use]
    pub const fn fg_param(self) -> u8 {
        match self {
            BasicColor::Black         => 30,
            BasicColor::Red           => 31,
            BasicColor::Green         => 32,
            BasicColor::Yellow        => 33,
            BasicColor::Blue          => 34,
            BasicColor::Magenta       => 35,
            BasicColor::Cyan          => 36,
            BasicColor::White         => 37,
            BasicColor::BrightBlack   => 90,
            BasicColor::BrightRed     => 91,
            BasicColor::BrightGreen   => 92,
            BasicColor::BrightYellow  => 93,
            BasicColor::BrightBlue    => 94,
            BasicColor::BrightMagenta => 95,
            BasicColor::BrightCyan    => 96,
            BasicColor::BrightWhite   => 97,
        }
    }

    #[must_use]
    pub const fn bg_param(self) -> u8 { self.fg_param() + 10 }
}

/// A single SGR parameter. Many of these are joined with [`SGR_SEPARATOR`] into one
/// escape sequence by [`crate::StyleCodes::wrap`].
///
/// The [Display] implementation writes only the parameter text (eg: `31` or
/// `38;5;208`), not the `CSI` prefix or the `m` suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount)]
pub enum SgrCode {
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Hidden,
    Strikethrough,
    Foreground(BasicColor),
    Background(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
}

impl Display for SgrCode {
    /// More info:
    /// - <https://www.asciitable.com/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Bold                     => write!(f, "1"),
            SgrCode::Dim                      => write!(f, "2"),
            SgrCode::Italic                   => write!(f, "3"),
            SgrCode::Underline                => write!(f, "4"),
            SgrCode::Invert                   => write!(f, "7"),
            SgrCode::Hidden                   => write!(f, "8"),
            SgrCode::Strikethrough            => write!(f, "9"),
            SgrCode::Foreground(color)        => write!(f, "{}", color.fg_param()),
            SgrCode::Background(color)        => write!(f, "{}", color.bg_param()),
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
            SgrCode::ForegroundRgb(r, g, b)   => write!(f, "38;2;{r};{g};{b}"),
            SgrCode::BackgroundRgb(r, g, b)   => write!(f, "48;2;{r};{g};{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;

    #[test_case(SgrCode::Bold, "1")]
    #[test_case(SgrCode::Dim, "2")]
    #[test_case(SgrCode::Italic, "3")]
    #[test_case(SgrCode::Underline, "4")]
    #[test_case(SgrCode::Invert, "7")]
    #[test_case(SgrCode::Hidden, "8")]
    #[test_case(SgrCode::Strikethrough, "9")]
    #[test_case(SgrCode::Foreground(BasicColor::Red), "31")]
    #[test_case(SgrCode::Background(BasicColor::White), "47")]
    #[test_case(SgrCode::Foreground(BasicColor::BrightBlack), "90")]
    #[test_case(SgrCode::Background(BasicColor::BrightWhite), "107")]
    #[test_case(SgrCode::ForegroundAnsi256(150), "38;5;150")]
    #[test_case(SgrCode::BackgroundAnsi256(150), "48;5;150")]
    #[test_case(SgrCode::ForegroundRgb(175, 215, 135), "38;2;175;215;135")]
    #[test_case(SgrCode::BackgroundRgb(175, 215, 135), "48;2;175;215;135")]
    fn test_sgr_code_param(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn test_background_is_foreground_plus_ten() {
        for color in BasicColor::iter() {
            assert_eq!(color.bg_param(), color.fg_param() + 10);
        }
    }

    #[test]
    fn test_reset() {
        assert_eq!(SGR_RESET, format!("{CSI}0{SGR}"));
    }
}
