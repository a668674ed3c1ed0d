// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use rustc_hash::FxHashSet;

use crate::{BORDER_DOUBLE, BORDER_HEAVY, BORDER_ROUNDED, BORDER_SIMPLE, BasicColor,
            BorderGlyphs, SgrCode, ShadowGlyphs, ShadowPosition, StyleCodes,
            decl_macros::generate_color_chaining_methods};

/// Space around the four sides of something, in columns (left / right) and rows (top /
/// bottom). Used for both padding (inside the frame) and margin (outside the frame and
/// shadow).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    #[must_use]
    pub const fn all(n: usize) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }
}

/// Which content lines get centered. A line is centered if any of these selects it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Alignment {
    pub center_all: bool,
    /// Trim whitespace off both ends of every line before measuring. Implies centering.
    pub trim: bool,
    /// Explicit 0-based line indices. Indices outside the content (including negative
    /// ones) are ignored at render time.
    pub centered_lines: FxHashSet<isize>,
    pub first_line: bool,
    pub last_line: bool,
}

impl Alignment {
    /// Whether line `index` (of `line_count` lines) should be centered.
    #[must_use]
    pub fn should_center(&self, index: usize, line_count: usize) -> bool {
        self.center_all
            || self.trim
            || isize::try_from(index).is_ok_and(|it| self.centered_lines.contains(&it))
            || (self.first_line && index == 0)
            || (self.last_line && index + 1 == line_count)
    }
}

/// Frame sides that are hidden. A hidden side keeps its width (its glyphs are replaced
/// by spaces) so the content does not shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct HiddenSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// The drop shadow. Nothing is drawn while `glyphs` is [None]; `codes` can be set up
/// before the shadow itself is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShadowConfig {
    pub glyphs: Option<ShadowGlyphs>,
    pub position: ShadowPosition,
    pub codes: StyleCodes,
}

/// The color a shadow gets when none was chosen before [`BoxStyle::shadow`].
pub const DEFAULT_SHADOW_CODE: SgrCode = SgrCode::Foreground(BasicColor::BrightBlack);

/// A chainable box configuration. Start with [`boxed()`], configure the frame, then
/// render or print content inside it through [`crate::StyledOutput`].
///
/// Every method takes `&self` and returns a new [`BoxStyle`]; nothing is mutated in
/// place, so one configuration can be the base of many others.
///
/// ```rust
/// use r3bl_ansi_box::{StyledOutput, boxed};
///
/// let card = boxed().border_rounded().padding_x(1);
///
/// assert_eq!(
///     card.render_with("hi", false),
///     "╭────╮\n│ hi │\n╰────╯"
/// );
///
/// // Frame colors wrap only the chrome, never the content.
/// assert_eq!(
///     boxed().red().render_with("hi", true),
///     "\x1b[31m┌──┐\x1b[0m\n\x1b[31m│\x1b[0mhi\x1b[31m│\x1b[0m\n\x1b[31m└──┘\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub border: BorderGlyphs,
    /// Codes for the frame chrome (borders, padding, alignment fill).
    pub codes: StyleCodes,
    pub padding: Spacing,
    pub margin: Spacing,
    pub alignment: Alignment,
    pub hidden: HiddenSides,
    pub shadow: ShadowConfig,
}

/// Entry point for boxes: a simple border, no padding, no margin, no color.
#[must_use]
pub fn boxed() -> BoxStyle { BoxStyle::default() }

impl BoxStyle {
    /// Copy `self`, let `f` change the copy, and return it.
    fn with(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut it = self.clone();
        f(&mut it);
        it
    }

    #[must_use]
    pub fn with_code(&self, code: SgrCode) -> Self {
        self.with(|it| it.codes = it.codes.with(code))
    }
}

/// Border glyphs.
impl BoxStyle {
    #[must_use]
    pub fn border(&self, glyphs: BorderGlyphs) -> Self {
        self.with(|it| it.border = glyphs)
    }

    #[must_use]
    pub fn border_simple(&self) -> Self { self.border(BORDER_SIMPLE) }

    #[must_use]
    pub fn border_rounded(&self) -> Self { self.border(BORDER_ROUNDED) }

    #[must_use]
    pub fn border_double(&self) -> Self { self.border(BORDER_DOUBLE) }

    #[must_use]
    pub fn border_heavy(&self) -> Self { self.border(BORDER_HEAVY) }
}

/// Padding, inside the frame.
impl BoxStyle {
    #[must_use]
    pub fn padding(&self, n: usize) -> Self { self.with(|it| it.padding = Spacing::all(n)) }

    #[must_use]
    pub fn padding_top(&self, n: usize) -> Self { self.with(|it| it.padding.top = n) }

    #[must_use]
    pub fn padding_right(&self, n: usize) -> Self { self.with(|it| it.padding.right = n) }

    #[must_use]
    pub fn padding_bottom(&self, n: usize) -> Self {
        self.with(|it| it.padding.bottom = n)
    }

    #[must_use]
    pub fn padding_left(&self, n: usize) -> Self { self.with(|it| it.padding.left = n) }

    /// Left and right.
    #[must_use]
    pub fn padding_x(&self, n: usize) -> Self {
        self.with(|it| {
            it.padding.left = n;
            it.padding.right = n;
        })
    }

    /// Top and bottom.
    #[must_use]
    pub fn padding_y(&self, n: usize) -> Self {
        self.with(|it| {
            it.padding.top = n;
            it.padding.bottom = n;
        })
    }
}

/// Margin, outside the frame and the shadow.
impl BoxStyle {
    #[must_use]
    pub fn margin(&self, n: usize) -> Self { self.with(|it| it.margin = Spacing::all(n)) }

    #[must_use]
    pub fn margin_top(&self, n: usize) -> Self { self.with(|it| it.margin.top = n) }

    #[must_use]
    pub fn margin_right(&self, n: usize) -> Self { self.with(|it| it.margin.right = n) }

    #[must_use]
    pub fn margin_bottom(&self, n: usize) -> Self { self.with(|it| it.margin.bottom = n) }

    #[must_use]
    pub fn margin_left(&self, n: usize) -> Self { self.with(|it| it.margin.left = n) }

    /// Left and right.
    #[must_use]
    pub fn margin_x(&self, n: usize) -> Self {
        self.with(|it| {
            it.margin.left = n;
            it.margin.right = n;
        })
    }

    /// Top and bottom.
    #[must_use]
    pub fn margin_y(&self, n: usize) -> Self {
        self.with(|it| {
            it.margin.top = n;
            it.margin.bottom = n;
        })
    }
}

/// Content alignment. Lines are left aligned unless one of these selects them. When
/// the remaining space is odd, the extra column goes to the right.
impl BoxStyle {
    #[must_use]
    pub fn center(&self) -> Self { self.with(|it| it.alignment.center_all = true) }

    /// Trim whitespace off every line, then center it.
    #[must_use]
    pub fn center_trim(&self) -> Self {
        self.with(|it| {
            it.alignment.center_all = true;
            it.alignment.trim = true;
        })
    }

    /// Center the line at 0-based `index`. Can be called many times. An index outside
    /// the content is silently ignored.
    #[must_use]
    pub fn center_line(&self, index: isize) -> Self {
        self.with(|it| {
            it.alignment.centered_lines.insert(index);
        })
    }

    /// Handy for titles.
    #[must_use]
    pub fn center_first_line(&self) -> Self {
        self.with(|it| it.alignment.first_line = true)
    }

    #[must_use]
    pub fn center_last_line(&self) -> Self { self.with(|it| it.alignment.last_line = true) }
}

/// Side visibility.
impl BoxStyle {
    /// Drops the top border row.
    #[must_use]
    pub fn disable_top(&self) -> Self { self.with(|it| it.hidden.top = true) }

    /// Drops the bottom border row.
    #[must_use]
    pub fn disable_bottom(&self) -> Self { self.with(|it| it.hidden.bottom = true) }

    /// Blanks the left vertical and the left corners on every row.
    #[must_use]
    pub fn disable_left(&self) -> Self { self.with(|it| it.hidden.left = true) }

    /// Blanks the right vertical and the right corners on every row.
    #[must_use]
    pub fn disable_right(&self) -> Self { self.with(|it| it.hidden.right = true) }
}

/// Drop shadow.
impl BoxStyle {
    /// Cast a shadow towards `position`. Shadow glyphs are drawn in bright black,
    /// unless a shadow color was already chosen with [`Self::shadow_dim`],
    /// [`Self::shadow_black`] or [`Self::shadow_bright_black`].
    #[must_use]
    pub fn shadow(&self, position: ShadowPosition, glyphs: ShadowGlyphs) -> Self {
        self.with(|it| {
            it.shadow.glyphs = Some(glyphs);
            it.shadow.position = position;
            if it.shadow.codes.is_empty() {
                it.shadow.codes = it.shadow.codes.with(DEFAULT_SHADOW_CODE);
            }
        })
    }

    fn with_shadow_code(&self, code: SgrCode) -> Self {
        self.with(|it| it.shadow.codes = it.shadow.codes.with(code))
    }

    #[must_use]
    pub fn shadow_dim(&self) -> Self { self.with_shadow_code(SgrCode::Dim) }

    #[must_use]
    pub fn shadow_black(&self) -> Self {
        self.with_shadow_code(SgrCode::Foreground(BasicColor::Black))
    }

    #[must_use]
    pub fn shadow_bright_black(&self) -> Self { self.with_shadow_code(DEFAULT_SHADOW_CODE) }
}

/// Frame colors and modifiers. These apply to the chrome only.
impl BoxStyle {
    generate_color_chaining_methods!();

    #[must_use]
    pub fn bold(&self) -> Self { self.with_code(SgrCode::Bold) }

    #[must_use]
    pub fn dim(&self) -> Self { self.with_code(SgrCode::Dim) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SHADOW_LIGHT;

    #[test]
    fn test_boxed_defaults() {
        let it = boxed();
        assert_eq!(it.border, BORDER_SIMPLE);
        assert!(it.codes.is_empty());
        assert_eq!(it.padding, Spacing::default());
        assert_eq!(it.margin, Spacing::default());
        assert_eq!(it.hidden, HiddenSides::default());
        assert_eq!(it.shadow.glyphs, None);
    }

    #[test]
    fn test_chaining_never_mutates_the_receiver() {
        let base = boxed().padding(1);
        let derived = base.red().margin_left(3).center().disable_top();

        assert_eq!(base, boxed().padding(1));
        assert_eq!(derived.padding, Spacing::all(1));
        assert_eq!(derived.margin.left, 3);
        assert!(derived.alignment.center_all);
        assert!(derived.hidden.top);
    }

    #[test]
    fn test_padding_and_margin_setters() {
        let it = boxed().padding_x(2).padding_top(1).margin_y(4).margin_right(5);
        assert_eq!(
            it.padding,
            Spacing {
                top: 1,
                right: 2,
                bottom: 0,
                left: 2
            }
        );
        assert_eq!(
            it.margin,
            Spacing {
                top: 4,
                right: 5,
                bottom: 4,
                left: 0
            }
        );
    }

    #[test]
    fn test_center_trim_sets_both_flags() {
        let it = boxed().center_trim();
        assert!(it.alignment.center_all);
        assert!(it.alignment.trim);
    }

    #[test]
    fn test_should_center() {
        let it = boxed().center_line(1).center_line(-1).center_last_line().alignment;
        assert!(!it.should_center(0, 4));
        assert!(it.should_center(1, 4));
        assert!(!it.should_center(2, 4));
        assert!(it.should_center(3, 4));

        let it = boxed().center_first_line().alignment;
        assert!(it.should_center(0, 1));
        assert!(!it.should_center(1, 2));
    }

    #[test]
    fn test_shadow_installs_default_color_once() {
        let it = boxed().shadow(ShadowPosition::TopLeft, SHADOW_LIGHT);
        assert_eq!(it.shadow.codes.as_slice(), &[DEFAULT_SHADOW_CODE]);
        assert_eq!(it.shadow.position, ShadowPosition::TopLeft);

        // Re-enabling does not stack another default.
        let it = it.shadow(ShadowPosition::BottomRight, SHADOW_LIGHT);
        assert_eq!(it.shadow.codes.as_slice(), &[DEFAULT_SHADOW_CODE]);
    }

    #[test]
    fn test_shadow_color_chosen_first_wins() {
        let it = boxed()
            .shadow_black()
            .shadow_dim()
            .shadow(ShadowPosition::BottomRight, SHADOW_LIGHT);
        assert_eq!(
            it.shadow.codes.as_slice(),
            &[SgrCode::Foreground(BasicColor::Black), SgrCode::Dim]
        );
    }

    #[test]
    fn test_frame_codes_append_in_order() {
        let it = boxed().on_blue().bright_white().bold().fg_ansi256(42);
        assert_eq!(
            it.codes.as_slice(),
            &[
                SgrCode::Background(BasicColor::Blue),
                SgrCode::Foreground(BasicColor::BrightWhite),
                SgrCode::Bold,
                SgrCode::ForegroundAnsi256(42),
            ]
        );
    }
}
