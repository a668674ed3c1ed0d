// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Generates the fluent color methods shared by [`crate::TextStyle`] and
/// [`crate::BoxStyle`]: 16 foreground colors, 16 `on_*` background colors, plus the
/// 256-color and truecolor variants.
///
/// Use it inside an `impl` block of a type that has a
/// `fn with_code(&self, code: SgrCode) -> Self` method.
macro_rules! generate_color_chaining_methods {
    () => {
        $crate::decl_macros::generate_color_chaining_methods! {
            black, on_black => Black;
            red, on_red => Red;
            green, on_green => Green;
            yellow, on_yellow => Yellow;
            blue, on_blue => Blue;
            magenta, on_magenta => Magenta;
            cyan, on_cyan => Cyan;
            white, on_white => White;
            bright_black, on_bright_black => BrightBlack;
            bright_red, on_bright_red => BrightRed;
            bright_green, on_bright_green => BrightGreen;
            bright_yellow, on_bright_yellow => BrightYellow;
            bright_blue, on_bright_blue => BrightBlue;
            bright_magenta, on_bright_magenta => BrightMagenta;
            bright_cyan, on_bright_cyan => BrightCyan;
            bright_white, on_bright_white => BrightWhite;
        }

        /// More info: <https://www.ditig.com/256-colors-cheat-sheet>
        #[must_use]
        pub fn fg_ansi256(&self, index: u8) -> Self {
            self.with_code($crate::SgrCode::ForegroundAnsi256(index))
        }

        #[must_use]
        pub fn bg_ansi256(&self, index: u8) -> Self {
            self.with_code($crate::SgrCode::BackgroundAnsi256(index))
        }

        #[must_use]
        pub fn fg_rgb(&self, red: u8, green: u8, blue: u8) -> Self {
            self.with_code($crate::SgrCode::ForegroundRgb(red, green, blue))
        }

        #[must_use]
        pub fn bg_rgb(&self, red: u8, green: u8, blue: u8) -> Self {
            self.with_code($crate::SgrCode::BackgroundRgb(red, green, blue))
        }
    };

    ($($fg:ident, $bg:ident => $color:ident;)*) => {
        $(
            #[doc = concat!("Appends the `", stringify!($color), "` foreground color.")]
            #[must_use]
            pub fn $fg(&self) -> Self {
                self.with_code($crate::SgrCode::Foreground($crate::BasicColor::$color))
            }

            #[doc = concat!("Appends the `", stringify!($color), "` background color.")]
            #[must_use]
            pub fn $bg(&self) -> Self {
                self.with_code($crate::SgrCode::Background($crate::BasicColor::$color))
            }
        )*
    };
}

pub(crate) use generate_color_chaining_methods;
