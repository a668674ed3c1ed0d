// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns content and a [`BoxStyle`] into the rows of a framed box.
//!
//! ```text
//! ┌──────────┐  <- top border (dropped by disable_top)
//! │          │  <- padding_top rows
//! │  title   │  <- content rows: chrome | raw line | chrome
//! │ longest  │
//! │          │  <- padding_bottom rows
//! └──────────┘  <- bottom border (dropped by disable_bottom)
//! ```
//!
//! On content rows, the chrome to the left and to the right of the line is wrapped in
//! the frame codes separately, and the line is copied in as is. So a line that carries
//! its own escape sequences (and its own reset) can never end the frame's color early.
//!
//! The shadow is laid over these rows by [`crate::apply_shadow`], then
//! [`render_box`] adds the margin and joins everything with `\n`.

use std::borrow::Cow;

use crate::{BoxStyle, Spacing, apply_shadow, visible_width};

/// The framed rows, each already wrapped in the frame codes, plus the visible width
/// shared by every row (before any shadow is added).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxRows {
    pub rows: Vec<String>,
    pub width: usize,
}

/// Full pipeline: layout, shadow, margin. The last row never has a trailing `\n`;
/// bottom margin rows come after it.
#[must_use]
pub fn render_box(content: &str, style: &BoxStyle, colors_enabled: bool) -> String {
    let BoxRows { rows, width } = layout_rows(content, style, colors_enabled);
    let rows = apply_shadow(rows, width, &style.shadow, colors_enabled);
    join_with_margin(&rows, style.margin)
}

/// Lays out `content` inside the frame described by `style`. Always returns at least
/// one row, since empty content is a single zero width line.
#[must_use]
pub fn layout_rows(content: &str, style: &BoxStyle, colors_enabled: bool) -> BoxRows {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| if style.alignment.trim { line.trim() } else { line })
        .collect();

    let max_width = lines.iter().map(|line| visible_width(line)).max().unwrap_or(0);
    let inner_width = max_width + style.padding.left + style.padding.right;

    let wrap = |chrome: &str| style.codes.wrap(chrome, colors_enabled);
    let glyphs = &style.border;
    let hidden = style.hidden;
    let left_vertical = blank_if(hidden.left, &glyphs.vertical);
    let right_vertical = blank_if(hidden.right, &glyphs.vertical);

    let capacity = lines.len()
        + style.padding.top
        + style.padding.bottom
        + usize::from(!hidden.top)
        + usize::from(!hidden.bottom);
    let mut rows = Vec::with_capacity(capacity);

    if !hidden.top {
        rows.push(wrap(&horizontal_bar(
            &blank_if(hidden.left, &glyphs.top_left),
            &glyphs.horizontal,
            inner_width,
            &blank_if(hidden.right, &glyphs.top_right),
        )));
    }

    let padding_row = wrap(&format!(
        "{left_vertical}{}{right_vertical}",
        spaces(inner_width)
    ));
    rows.extend(std::iter::repeat_n(padding_row.clone(), style.padding.top));

    let padding = style.padding;
    for (index, line) in lines.iter().enumerate() {
        let should_center = style.alignment.should_center(index, lines.len());
        let ContentGap { left, right } =
            content_gap(should_center, visible_width(line), max_width);
        rows.push(format!(
            "{}{line}{}",
            wrap(&format!("{left_vertical}{}", spaces(padding.left + left))),
            wrap(&format!("{}{right_vertical}", spaces(right + padding.right))),
        ));
    }

    rows.extend(std::iter::repeat_n(padding_row, style.padding.bottom));

    if !hidden.bottom {
        rows.push(wrap(&horizontal_bar(
            &blank_if(hidden.left, &glyphs.bottom_left),
            &glyphs.horizontal,
            inner_width,
            &blank_if(hidden.right, &glyphs.bottom_right),
        )));
    }

    let width = rows.first().map_or(0, |row| visible_width(row));
    BoxRows { rows, width }
}

/// Extra spaces to the left and right of a content line, on top of the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContentGap {
    left: usize,
    right: usize,
}

/// Lines narrower than the widest one are filled up to it. Centered lines split the
/// fill, and an odd column goes to the right. Wider lines are never truncated.
fn content_gap(should_center: bool, width: usize, available: usize) -> ContentGap {
    if should_center && width < available {
        let total = available - width;
        let left = total / 2;
        ContentGap {
            left,
            right: total - left,
        }
    } else {
        ContentGap {
            left: 0,
            right: available.saturating_sub(width),
        }
    }
}

fn horizontal_bar(left: &str, horizontal: &str, count: usize, right: &str) -> String {
    format!("{left}{}{right}", horizontal.repeat(count))
}

/// A glyph on a hidden side is swapped for blanks of the same visible width.
fn blank_if(hidden: bool, glyph: &str) -> Cow<'_, str> {
    if hidden {
        Cow::Owned(spaces(visible_width(glyph)))
    } else {
        Cow::Borrowed(glyph)
    }
}

fn spaces(count: usize) -> String { " ".repeat(count) }

fn join_with_margin(rows: &[String], margin: Spacing) -> String {
    let left = spaces(margin.left);
    let right = spaces(margin.right);

    let size = margin.top
        + margin.bottom
        + rows
            .iter()
            .map(|row| left.len() + row.len() + right.len() + 1)
            .sum::<usize>();
    let mut acc = String::with_capacity(size);

    acc.push_str(&"\n".repeat(margin.top));
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            acc.push('\n');
        }
        acc.push_str(&left);
        acc.push_str(row);
        acc.push_str(&right);
    }
    acc.push_str(&"\n".repeat(margin.bottom));

    acc
}
