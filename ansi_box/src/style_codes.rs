// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{CSI, SGR, SGR_RESET, SGR_SEPARATOR, SgrCode};

pub mod sizing {
    use super::{SgrCode, SmallString, SmallVec};

    /// Attributes are: `color_fg`, `color_bg`, bold, dim, italic, underline, etc.
    /// which are in [`crate::SgrCode`]. Longer chains spill to the heap.
    pub const MAX_STYLE_CODES_SIZE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_STYLE_CODES_SIZE]>;

    /// Holds the joined SGR parameters, eg: `47;31;1`.
    pub const DEFAULT_PARAMS_STORAGE_SIZE: usize = 16;
    pub type InlineParamsString = SmallString<[u8; DEFAULT_PARAMS_STORAGE_SIZE]>;
}

/// An immutable, append-only, ordered list of [`SgrCode`]s.
///
/// [`Self::with`] never mutates `self`; it returns a fresh copy with one more code at
/// the end. This is what makes it safe to branch many styles off one shared ancestor,
/// and to render any of them from any thread.
///
/// ```
/// use r3bl_ansi_box::{BasicColor, SgrCode, StyleCodes};
///
/// let base = StyleCodes::new().with(SgrCode::Foreground(BasicColor::Red));
/// let bold = base.with(SgrCode::Bold);
///
/// assert_eq!(base.wrap("hi", true), "\x1b[31mhi\x1b[0m");
/// assert_eq!(bold.wrap("hi", true), "\x1b[31;1mhi\x1b[0m");
/// assert_eq!(bold.wrap("hi", false), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleCodes {
    codes: sizing::InlineVecSgrCodes,
}

impl StyleCodes {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns a new [`StyleCodes`] holding all of `self`'s codes followed by `code`.
    #[must_use]
    pub fn with(&self, code: SgrCode) -> Self {
        let mut codes = self.codes.clone();
        codes.push(code);
        Self { codes }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.codes.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.codes.len() }

    #[must_use]
    pub fn as_slice(&self) -> &[SgrCode] { &self.codes }

    /// Wraps `text` in one escape sequence holding all the codes (in append order) and
    /// a trailing reset. See [`wrap_codes`].
    #[must_use]
    pub fn wrap(&self, text: &str, colors_enabled: bool) -> String {
        wrap_codes(text, &self.codes, colors_enabled)
    }
}

impl From<&[SgrCode]> for StyleCodes {
    fn from(codes: &[SgrCode]) -> Self {
        Self {
            codes: codes.iter().copied().collect(),
        }
    }
}

/// The one wrap primitive used for text, box chrome, and shadow glyphs.
///
/// - If colors are disabled, or `codes` is empty, `text` is returned unchanged. Not
///   even an empty `ESC[m ... ESC[0m` wrapper is emitted.
/// - Otherwise the result is `ESC[` + codes joined by `;` + `m` + `text` + `ESC[0m`.
#[must_use]
pub fn wrap_codes(text: &str, codes: &[SgrCode], colors_enabled: bool) -> String {
    if !colors_enabled || codes.is_empty() {
        return text.to_owned();
    }

    let mut params = sizing::InlineParamsString::new();
    for (index, code) in codes.iter().enumerate() {
        if index > 0 {
            params.push(SGR_SEPARATOR);
        }
        // Writing to an in memory buffer can't fail.
        let _unused = write!(params, "{code}");
    }

    let size = CSI.len() + params.len() + SGR.len() + text.len() + SGR_RESET.len();
    let mut acc = String::with_capacity(size);
    acc.push_str(CSI);
    acc.push_str(&params);
    acc.push_str(SGR);
    acc.push_str(text);
    acc.push_str(SGR_RESET);
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::BasicColor;

    const RED: SgrCode = SgrCode::Foreground(BasicColor::Red);
    const ON_WHITE: SgrCode = SgrCode::Background(BasicColor::White);

    #[test]
    fn test_empty_codes_is_identity() {
        let codes = StyleCodes::new();
        assert_eq!(codes.wrap("hello", true), "hello");
        assert_eq!(codes.wrap("", true), "");
    }

    #[test]
    fn test_disabled_is_identity() {
        let codes = StyleCodes::new().with(RED).with(SgrCode::Bold);
        assert_eq!(codes.wrap("hello", false), "hello");
        assert_eq!(codes.wrap("", false), "");
    }

    #[test]
    fn test_codes_joined_in_append_order() {
        let codes = StyleCodes::new().with(ON_WHITE).with(RED).with(SgrCode::Bold);
        assert_eq!(codes.wrap("x", true), "\x1b[47;31;1mx\x1b[0m");

        let codes = StyleCodes::new().with(SgrCode::Bold).with(RED);
        assert_eq!(codes.wrap("x", true), "\x1b[1;31mx\x1b[0m");
    }

    #[test]
    fn test_empty_text_is_still_wrapped_when_enabled() {
        let codes = StyleCodes::new().with(RED);
        assert_eq!(codes.wrap("", true), "\x1b[31m\x1b[0m");
    }

    #[test]
    fn test_with_does_not_mutate_original() {
        let base = StyleCodes::new().with(RED);
        let before = base.wrap("x", true);
        let derived = base.with(SgrCode::Bold);
        let after = base.wrap("x", true);

        assert_eq!(before, after);
        assert_eq!(base.len(), 1);
        assert_eq!(derived.len(), 2);
    }

    #[test]
    fn test_long_chain_spills_to_heap() {
        let mut codes = StyleCodes::new();
        for _ in 0..sizing::MAX_STYLE_CODES_SIZE * 2 {
            codes = codes.with(SgrCode::Bold);
        }
        let expected_params = vec!["1"; sizing::MAX_STYLE_CODES_SIZE * 2].join(";");
        assert_eq!(
            codes.wrap("x", true),
            format!("\x1b[{expected_params}mx\x1b[0m")
        );
    }

    #[test]
    fn test_from_slice() {
        let codes = StyleCodes::from([RED, SgrCode::Underline].as_slice());
        assert_eq!(codes.as_slice(), &[RED, SgrCode::Underline]);
    }
}
