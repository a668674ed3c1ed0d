// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SgrCode, StyleCodes, StyledOutput, decl_macros::generate_color_chaining_methods};

/// A chainable text style. Start with [`text()`], add colors and modifiers, then
/// render or print through [`StyledOutput`].
///
/// Every method takes `&self` and returns a new [`TextStyle`], so a base style can be
/// shared and branched freely, even across threads.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_box::{StyledOutput, text};
///
/// let error = text().red().bold();
/// let warning = error.on_yellow();
///
/// assert_eq!(error.render_with("hello", true), "\x1b[31;1mhello\x1b[0m");
/// assert_eq!(warning.render_with("hello", true), "\x1b[31;1;43mhello\x1b[0m");
/// assert_eq!(warning.render_with("hello", false), "hello");
///
/// // Prints to the default destination (stdout unless changed).
/// text().fg_rgb(175, 215, 135).println("lizard green");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub codes: StyleCodes,
}

/// Entry point for styling text. Same as [`TextStyle::default()`].
#[must_use]
pub fn text() -> TextStyle { TextStyle::default() }

impl TextStyle {
    #[must_use]
    pub fn with_code(&self, code: SgrCode) -> Self {
        Self {
            codes: self.codes.with(code),
        }
    }

    generate_color_chaining_methods!();

    #[must_use]
    pub fn bold(&self) -> Self { self.with_code(SgrCode::Bold) }

    #[must_use]
    pub fn dim(&self) -> Self { self.with_code(SgrCode::Dim) }

    #[must_use]
    pub fn italic(&self) -> Self { self.with_code(SgrCode::Italic) }

    #[must_use]
    pub fn underline(&self) -> Self { self.with_code(SgrCode::Underline) }

    /// Swaps foreground and background.
    #[must_use]
    pub fn invert(&self) -> Self { self.with_code(SgrCode::Invert) }

    #[must_use]
    pub fn hidden(&self) -> Self { self.with_code(SgrCode::Hidden) }

    #[must_use]
    pub fn strikethrough(&self) -> Self { self.with_code(SgrCode::Strikethrough) }
}

impl StyledOutput for TextStyle {
    fn render_with(&self, input: &str, colors_enabled: bool) -> String {
        self.codes.wrap(input, colors_enabled)
    }
}
