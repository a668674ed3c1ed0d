// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glyph sets for box frames and drop shadows.
//!
//! You can get the unicode symbols for the drawings here:
//! - <https://symbl.cc/en/unicode/blocks/box-drawing/>
//! - <https://symbl.cc/en/unicode/blocks/block-elements/>

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use std::borrow::Cow;

use strum_macros::{EnumCount, EnumIter};

/// Six glyphs: four corners, one horizontal fill and one vertical fill. Used both for
/// the frame of a box ([`BorderGlyphs`]) and for its drop shadow ([`ShadowGlyphs`]).
///
/// Glyphs are strings, not chars, so a custom set may use multi code point glyphs, or
/// glyphs that carry their own escape sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlyphSet {
    pub top_left: Cow<'static, str>,
    pub top_right: Cow<'static, str>,
    pub bottom_left: Cow<'static, str>,
    pub bottom_right: Cow<'static, str>,
    pub horizontal: Cow<'static, str>,
    pub vertical: Cow<'static, str>,
}

pub type BorderGlyphs = GlyphSet;
pub type ShadowGlyphs = GlyphSet;

impl GlyphSet {
    #[must_use]
    pub fn new(
        top_left: impl Into<Cow<'static, str>>,
        top_right: impl Into<Cow<'static, str>>,
        bottom_left: impl Into<Cow<'static, str>>,
        bottom_right: impl Into<Cow<'static, str>>,
        horizontal: impl Into<Cow<'static, str>>,
        vertical: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        }
    }

    /// All six slots hold the same glyph, which is what every shade preset does.
    #[must_use]
    pub const fn uniform(glyph: &'static str) -> Self {
        Self::from_static([glyph, glyph, glyph, glyph, glyph, glyph])
    }

    /// Order: top left, top right, bottom left, bottom right, horizontal, vertical.
    const fn from_static(glyphs: [&'static str; 6]) -> Self {
        let [top_left, top_right, bottom_left, bottom_right, horizontal, vertical] = glyphs;
        Self {
            top_left: Cow::Borrowed(top_left),
            top_right: Cow::Borrowed(top_right),
            bottom_left: Cow::Borrowed(bottom_left),
            bottom_right: Cow::Borrowed(bottom_right),
            horizontal: Cow::Borrowed(horizontal),
            vertical: Cow::Borrowed(vertical),
        }
    }
}

impl Default for GlyphSet {
    fn default() -> Self { BORDER_SIMPLE }
}

pub const BORDER_SIMPLE: BorderGlyphs  = GlyphSet::from_static(["┌", "┐", "└", "┘", "─", "│"]);
pub const BORDER_ROUNDED: BorderGlyphs = GlyphSet::from_static(["╭", "╮", "╰", "╯", "─", "│"]);
pub const BORDER_DOUBLE: BorderGlyphs  = GlyphSet::from_static(["╔", "╗", "╚", "╝", "═", "║"]);
pub const BORDER_HEAVY: BorderGlyphs   = GlyphSet::from_static(["┏", "┓", "┗", "┛", "━", "┃"]);

/// Light shade `░`.
pub const SHADOW_LIGHT: ShadowGlyphs  = GlyphSet::uniform("░");
/// Medium shade `▒`.
pub const SHADOW_MEDIUM: ShadowGlyphs = GlyphSet::uniform("▒");
/// Dark shade `▓`.
pub const SHADOW_DARK: ShadowGlyphs   = GlyphSet::uniform("▓");
/// Full block `█`.
pub const SHADOW_BLOCK: ShadowGlyphs  = GlyphSet::uniform("█");

/// Named frame styles, so callers can pick one from config or iterate over all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCount, EnumIter)]
pub enum BorderPreset {
    #[default]
    Simple,
    Rounded,
    Double,
    Heavy,
}

impl BorderPreset {
    #[must_use]
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderPreset::Simple  => BORDER_SIMPLE,
            BorderPreset::Rounded => BORDER_ROUNDED,
            BorderPreset::Double  => BORDER_DOUBLE,
            BorderPreset::Heavy   => BORDER_HEAVY,
        }
    }
}

/// Named shadow styles, from faintest to solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCount, EnumIter)]
pub enum ShadowPreset {
    #[default]
    Light,
    Medium,
    Dark,
    Block,
}

impl ShadowPreset {
    #[must_use]
    pub const fn glyphs(self) -> ShadowGlyphs {
        match self {
            ShadowPreset::Light  => SHADOW_LIGHT,
            ShadowPreset::Medium => SHADOW_MEDIUM,
            ShadowPreset::Dark   => SHADOW_DARK,
            ShadowPreset::Block  => SHADOW_BLOCK,
        }
    }
}

/// Direction the shadow is cast in. The box corner opposite to it (the anchor corner)
/// stays unshadowed; the shadow runs along the two edges adjacent to the named corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCount, EnumIter)]
pub enum ShadowPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;
    use crate::visible_width;

    #[test]
    fn test_presets_are_single_column_glyphs() {
        let all = BorderPreset::iter()
            .map(BorderPreset::glyphs)
            .chain(ShadowPreset::iter().map(ShadowPreset::glyphs));
        for glyphs in all {
            for glyph in [
                &glyphs.top_left, &glyphs.top_right, &glyphs.bottom_left,
                &glyphs.bottom_right, &glyphs.horizontal, &glyphs.vertical,
            ] {
                assert_eq!(visible_width(glyph), 1, "{glyphs:?}");
            }
        }
    }

    #[test]
    fn test_preset_counts() {
        assert_eq!(BorderPreset::COUNT, 4);
        assert_eq!(ShadowPreset::COUNT, 4);
        assert_eq!(ShadowPosition::COUNT, 4);
    }

    #[test]
    fn test_custom_glyph_set_owns_strings() {
        let glyphs = GlyphSet::new("+", "+", "+", "+", String::from("-"), "|");
        assert_eq!(glyphs.horizontal, "-");
        assert_eq!(glyphs.vertical, "|");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GlyphSet::default(), BORDER_SIMPLE);
        assert_eq!(ShadowPosition::default(), ShadowPosition::BottomRight);
        assert_eq!(SHADOW_DARK.top_left, "▓");
    }
}
