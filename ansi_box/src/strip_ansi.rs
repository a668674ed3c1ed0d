// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence aware width measurement.
//!
//! Box layout has to measure lines that may already carry SGR sequences (nested styled
//! text, or a whole rendered box). The escape bytes take up no columns on the screen,
//! so they are removed before counting. Two classes of sequences are recognized:
//!
//! ```text
//! CSI: ESC [ <params/intermediates> <final byte in 0x40..=0x7E>
//! OSC: ESC ] <payload> ( BEL | ESC \ )
//! ```
//!
//! Any other `ESC x` pair is treated as a two unit escape and skipped.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#OSC_(Operating_System_Command)_sequences>

use std::borrow::Cow;

use crate::ESC_CHAR;

const CSI_INTRODUCER: u8 = b'[';
const OSC_INTRODUCER: u8 = b']';
const CSI_FINAL_BYTE_RANGE: std::ops::RangeInclusive<u8> = 0x40..=0x7E;
const BEL: u8 = 0x07;
const ST_FINAL_BYTE: u8 = b'\\';

/// Removes every terminal escape sequence from `input`.
///
/// When `input` contains no `ESC` byte at all, it is returned borrowed and untouched.
///
/// ```
/// use r3bl_ansi_box::strip_escapes;
///
/// assert_eq!(strip_escapes("\x1b[31mhello\x1b[0m"), "hello");
/// assert_eq!(strip_escapes("\x1b]8;;https://r3bl.com\x07link\x1b]8;;\x07"), "link");
/// ```
#[must_use]
pub fn strip_escapes(input: &str) -> Cow<'_, str> {
    if !input.as_bytes().contains(&ESC_CHAR) {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut acc = String::with_capacity(input.len());
    let mut index = 0;

    while index < bytes.len() {
        let Some(offset) = bytes[index..].iter().position(|&byte| byte == ESC_CHAR) else {
            acc.push_str(&input[index..]);
            break;
        };

        // Copy the plain run before the escape. `ESC` is ASCII, so this slice is always
        // on a char boundary.
        let esc_index = index + offset;
        acc.push_str(&input[index..esc_index]);
        index = skip_escape_sequence(input, esc_index);
    }

    Cow::Owned(acc)
}

/// Returns the byte index just past the escape sequence that starts at `esc_index`.
fn skip_escape_sequence(input: &str, esc_index: usize) -> usize {
    let bytes = input.as_bytes();
    let body_start = esc_index + 1;

    match bytes.get(body_start) {
        // Lone ESC at the very end of the input.
        None => bytes.len(),

        Some(&CSI_INTRODUCER) => bytes[body_start + 1..]
            .iter()
            .position(|byte| CSI_FINAL_BYTE_RANGE.contains(byte))
            .map_or(bytes.len(), |offset| body_start + 1 + offset + 1),

        Some(&OSC_INTRODUCER) => {
            let mut index = body_start + 1;
            while index < bytes.len() {
                match bytes[index] {
                    BEL => return index + 1,
                    ESC_CHAR if bytes.get(index + 1) == Some(&ST_FINAL_BYTE) => {
                        return index + 2;
                    }
                    _ => index += 1,
                }
            }
            bytes.len()
        }

        // Two unit escape, eg: `ESC M`. The second unit is a whole char so that a
        // non-ASCII byte after `ESC` never leaves a split code point behind.
        Some(_) => {
            let next_char_len = input[body_start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            body_start + next_char_len
        }
    }
}

/// Returns the number of Unicode code points left in `input` after all escape
/// sequences are removed. This is the unit of measure for box layout; it does not
/// account for wide (CJK, emoji) display cells.
///
/// ```
/// use r3bl_ansi_box::visible_width;
///
/// assert_eq!(visible_width("\x1b[31mhello\x1b[0m"), 5);
/// assert_eq!(visible_width("┌──┐"), 4);
/// ```
#[must_use]
pub fn visible_width(input: &str) -> usize { strip_escapes(input).chars().count() }

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("hello", "hello" ; "plain text unchanged")]
    #[test_case("\x1b[31mhello\x1b[0m", "hello" ; "single color")]
    #[test_case("\x1b[37;44;1mhello\x1b[0m", "hello" ; "multiple codes")]
    #[test_case("", "" ; "empty string")]
    #[test_case("\x1b[31m\x1b[0m", "" ; "only escape sequences")]
    #[test_case("\x1b[31ma\x1b[0m\x1b[32mb\x1b[0m", "ab" ; "mixed text and escapes")]
    #[test_case("a\x1b[2Kb", "ab" ; "non sgr csi")]
    #[test_case("a\x1b[38;5;208mb", "ab" ; "ansi256 csi")]
    #[test_case("a\x1b]0;title\x07b", "ab" ; "osc terminated by bel")]
    #[test_case("a\x1b]8;;https://r3bl.com\x1b\\b", "ab" ; "osc terminated by st")]
    #[test_case("a\x1bMb", "ab" ; "two byte escape")]
    #[test_case("a\x1b", "a" ; "lone trailing esc")]
    #[test_case("a\x1b[31", "a" ; "unterminated csi")]
    #[test_case("a\x1b]0;title", "a" ; "unterminated osc")]
    #[test_case("\x1b[1m╭─╮\x1b[0m", "╭─╮" ; "box drawing chars survive")]
    #[test_case("a\x1béb", "ab" ; "escape followed by multibyte char")]
    fn test_strip_escapes(input: &str, expected: &str) {
        assert_eq!(strip_escapes(input), expected);
    }

    #[test]
    fn test_strip_escapes_fast_path_borrows() {
        let input = "no escapes here";
        assert!(matches!(strip_escapes(input), Cow::Borrowed(it) if it == input));
    }

    #[test_case("hello", 5 ; "plain")]
    #[test_case("\x1b[31mhello\x1b[0m", 5 ; "colored")]
    #[test_case("", 0 ; "empty")]
    #[test_case("hola", 4 ; "short")]
    #[test_case("héllo", 5 ; "multibyte")]
    #[test_case("░░", 2 ; "shade glyphs")]
    fn test_visible_width(input: &str, expected: usize) {
        assert_eq!(visible_width(input), expected);
    }

    #[test]
    fn test_visible_width_is_idempotent_over_strip() {
        let inputs = [
            "plain",
            "\x1b[31;1mred bold\x1b[0m",
            "\x1b]8;;url\x07x\x1b]8;;\x07",
            "\x1bMx\x1b",
            "┌──┐\x1b[0m",
        ];
        for input in inputs {
            assert_eq!(visible_width(&strip_escapes(input)), visible_width(input));
        }
    }
}
