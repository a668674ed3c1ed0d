// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example demo`. Set `NO_COLOR=1` to see the same layout
//! without any escape sequences.

use r3bl_ansi_box::{BorderPreset, SHADOW_LIGHT, SHADOW_MEDIUM, ShadowPosition,
                    ShadowPreset, StyledOutput, boxed, text};
use strum::IntoEnumIterator;

fn main() {
    // Styled text.
    {
        text()
            .bold()
            .italic()
            .underline()
            .fg_rgb(50, 50, 50)
            .bg_rgb(100, 200, 1)
            .println("Print a formatted (bold, italic, underline) string w/ ANSI color codes.");

        text()
            .dim()
            .strikethrough()
            .fg_rgb(200, 50, 50)
            .bg_rgb(200, 200, 1)
            .println("Dim and strikethrough line.");

        let base = text().fg_ansi256(150);
        base.on_blue().print("Hello");
        text().print(" ");
        base.invert().println("World");
    }

    // Every border preset.
    {
        for preset in BorderPreset::iter() {
            boxed()
                .border(preset.glyphs())
                .padding_x(2)
                .bright_cyan()
                .print_fmt(format_args!("{preset:?}"));
            text().println("");
        }
    }

    // Alignment.
    {
        boxed()
            .border_rounded()
            .padding(1)
            .center_first_line()
            .center_last_line()
            .yellow()
            .println("Title\nthe body is left aligned\n(centered footer)");
    }

    // Every shadow direction.
    {
        for position in [
            ShadowPosition::TopLeft,
            ShadowPosition::TopRight,
            ShadowPosition::BottomLeft,
            ShadowPosition::BottomRight,
        ] {
            boxed()
                .shadow(position, SHADOW_MEDIUM)
                .margin_left(2)
                .println(&format!("{position:?}"));
        }

        for preset in ShadowPreset::iter() {
            boxed()
                .border_heavy()
                .shadow_dim()
                .shadow(ShadowPosition::BottomRight, preset.glyphs())
                .println(&format!("{preset:?}"));
        }
    }

    // Nesting: a colored box, inside a colored box.
    {
        let inner = boxed()
            .green()
            .border_double()
            .render(&text().bold().render("inner"));
        boxed()
            .red()
            .padding(1)
            .disable_bottom()
            .shadow(ShadowPosition::BottomRight, SHADOW_LIGHT)
            .println(&inner);
    }
}
