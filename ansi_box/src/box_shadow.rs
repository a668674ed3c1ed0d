// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lays an L shaped drop shadow over already framed rows. The shadow adds exactly one
//! row (above or below) and one column (left or right), and leaves the anchor corner
//! (the one opposite to the [`ShadowPosition`]) blank. For example,
//! [`ShadowPosition::BottomRight`] with [`crate::SHADOW_LIGHT`]:
//!
//! ```text
//! ┌──┐
//! │hi│░   <- top right shadow corner
//! └──┘░   <- shadow vertical
//!  ░░░░   <- bottom left corner, horizontal fill, bottom right corner
//! ```

use crate::{ShadowConfig, ShadowPosition, visible_width};

/// Returns `rows` with the shadow from `shadow` laid over them. `box_width` is the
/// visible width of one row. Rows come back unchanged when the shadow is not enabled,
/// or when there are no rows.
#[must_use]
pub fn apply_shadow(
    rows: Vec<String>,
    box_width: usize,
    shadow: &ShadowConfig,
    colors_enabled: bool,
) -> Vec<String> {
    let Some(glyphs) = &shadow.glyphs else {
        return rows;
    };
    let Some(last_index) = rows.len().checked_sub(1) else {
        return rows;
    };

    let wrap = |glyph: &str| shadow.codes.wrap(glyph, colors_enabled);

    let vertical_width = visible_width(&glyphs.vertical);
    let spacer = " ".repeat(vertical_width);
    let vertical = wrap(&glyphs.vertical);

    // The bar spans the box: two corners, each one vertical glyph wide, with the
    // horizontal fill in between.
    let fill = box_width
        .saturating_sub(2 * vertical_width)
        .checked_div(visible_width(&glyphs.horizontal))
        .unwrap_or(0);
    let bar = |left: &str, right: &str| {
        wrap(&format!("{left}{}{right}", glyphs.horizontal.repeat(fill)))
    };

    let mut acc = Vec::with_capacity(rows.len() + 1);

    match shadow.position {
        ShadowPosition::BottomRight => {
            let corner = wrap(&glyphs.top_right);
            for (index, row) in rows.into_iter().enumerate() {
                let edge = match index {
                    0 => &spacer,
                    1 => &corner,
                    _ => &vertical,
                };
                acc.push(row + edge);
            }
            acc.push(spacer.clone() + &bar(&glyphs.bottom_left, &glyphs.bottom_right));
        }
        ShadowPosition::BottomLeft => {
            let corner = wrap(&glyphs.top_left);
            for (index, row) in rows.into_iter().enumerate() {
                let edge = match index {
                    0 => &spacer,
                    1 => &corner,
                    _ => &vertical,
                };
                acc.push(format!("{edge}{row}"));
            }
            acc.push(bar(&glyphs.bottom_left, &glyphs.bottom_right) + &spacer);
        }
        ShadowPosition::TopRight => {
            let corner = wrap(&glyphs.bottom_right);
            acc.push(spacer.clone() + &bar(&glyphs.top_left, &glyphs.top_right));
            for (index, row) in rows.into_iter().enumerate() {
                let edge = if index == last_index { &corner } else { &vertical };
                acc.push(row + edge);
            }
        }
        ShadowPosition::TopLeft => {
            let corner = wrap(&glyphs.bottom_left);
            acc.push(bar(&glyphs.top_left, &glyphs.top_right) + &spacer);
            for (index, row) in rows.into_iter().enumerate() {
                let edge = if index == last_index { &corner } else { &vertical };
                acc.push(format!("{edge}{row}"));
            }
        }
    }

    acc
}
