// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_ansi_box`
//!
//! Chainable ANSI styled text and bordered boxes for terminal output.
//!
//! There are two entry points:
//! - [`text()`] returns a [`TextStyle`]. Chain foreground colors (`red()`,
//!   `bright_cyan()`, `fg_ansi256(208)`, `fg_rgb(..)`), background colors
//!   (`on_blue()`, `bg_rgb(..)`) and modifiers (`bold()`, `italic()`, ...).
//! - [`boxed()`] returns a [`BoxStyle`]. Chain border glyphs, padding, margin,
//!   alignment, hidden sides, a drop shadow, and frame colors.
//!
//! Both implement [`StyledOutput`], which renders to a [String], prints to the
//! default output, or writes to any [`std::io::Write`].
//!
//! ```rust
//! use r3bl_ansi_box::{SHADOW_LIGHT, ShadowPosition, StyledOutput, boxed, text};
//!
//! let title = text().bold().render_with("Hello", false);
//! let card = boxed()
//!     .border_rounded()
//!     .padding_x(1)
//!     .center_first_line()
//!     .shadow(ShadowPosition::BottomRight, SHADOW_LIGHT);
//!
//! assert_eq!(
//!     card.render_with(&format!("{title}\nfrom r3bl"), false),
//!     "╭───────────╮ \n\
//!      │   Hello   │░\n\
//!      │ from r3bl │░\n\
//!      ╰───────────╯░\n \
//!      ░░░░░░░░░░░░░"
//! );
//! ```
//!
//! # Immutability
//!
//! Every chaining method takes `&self` and returns a new value. One base style can be
//! branched into many, and any of them can be rendered from any thread:
//!
//! ```rust
//! use r3bl_ansi_box::{StyledOutput, text};
//!
//! let base = text().red();
//! let loud = base.bold();
//!
//! assert_eq!(base.render_with("x", true), "\x1b[31mx\x1b[0m");
//! assert_eq!(loud.render_with("x", true), "\x1b[31;1mx\x1b[0m");
//! ```
//!
//! # Nesting
//!
//! Styled text (or a whole rendered box) can be placed inside a box. Widths are
//! measured with escape sequences stripped ([`visible_width`]), and the frame color is
//! wrapped around the chrome on each side of the content separately. So the inner
//! text's reset never bleeds into the frame.
//!
//! # Colors on or off
//!
//! Whether [`StyledOutput::render`] emits escape sequences is decided once per process
//! by [`detect_color_enabled`] (`NO_COLOR`, `FORCE_COLOR`, `CLICOLOR`, `TERM=dumb`, and
//! whether stdout is a terminal). Override it with [`force_colors`]. When colors are
//! off, text and chrome are emitted without any escape sequences, and the layout is
//! the same.
//!
//! # Width
//!
//! Visible width is the number of code points after escape sequences are removed.
//! East Asian wide characters and emoji are counted as one column.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod ansi_escape_codes;
mod border_glyphs;
mod box_layout;
mod box_shadow;
mod box_style;
mod decl_macros;
mod detect_color_support;
mod error;
mod output_settings;
mod strip_ansi;
mod style_codes;
mod styled_output;
mod styled_text;

// Re-export.
pub use ansi_escape_codes::*;
pub use border_glyphs::*;
pub use box_layout::*;
pub use box_shadow::*;
pub use box_style::*;
pub use detect_color_support::*;
pub use error::*;
pub use output_settings::*;
pub use strip_ansi::*;
pub use style_codes::*;
pub use styled_output::*;
pub use styled_text::*;
