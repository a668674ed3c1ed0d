// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{sync::Arc, thread};

use pretty_assertions::assert_eq;
use r3bl_ansi_box::*;
use r3bl_test_fixtures::{BrokenPipeWriter, StdoutMock};
use serial_test::serial;

#[test]
#[serial]
fn test_disabling_colors_returns_input_unchanged() {
    force_colors(false);

    let style = text().red().on_bright_white().bold().fg_rgb(1, 2, 3);
    for input in ["", "hello", "multi\nline"] {
        assert_eq!(style.render(input), input);
    }

    force_colors(true);
    assert_eq!(style.render(""), "\x1b[31;107;1;38;2;1;2;3m\x1b[0m");
}

#[test]
#[serial]
fn test_print_family_goes_to_redirected_output() {
    force_colors(true);
    let stdout_mock = StdoutMock::new();
    set_output(stdout_mock.clone());

    text().magenta().println("one");
    boxed().cyan().print_fmt(format_args!("{}", 2));

    reset_output();
    assert_eq!(
        stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
        "one\n┌─┐\n│2│\n└─┘"
    );
}

#[test]
#[serial]
fn test_shared_styles_render_the_same_on_every_thread() {
    force_colors(true);
    let base = Arc::new(boxed().red().padding_x(1));
    let expected = base.render_with("hi", true);

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let base = Arc::clone(&base);
            thread::spawn(move || {
                let branch = base.center_line(0).margin_left(index);
                let own = branch.render_with("hi", true);
                (base.render_with("hi", true), own, index)
            })
        })
        .collect();

    for handle in handles {
        let (shared, own, index) = handle.join().unwrap();
        assert_eq!(shared, expected);
        assert!(own.starts_with(&" ".repeat(index)));
    }
}

#[test]
#[serial]
fn test_write_to_failing_writer_is_an_error() {
    let result = boxed().writeln_to(&mut BrokenPipeWriter, "hi");
    assert!(matches!(result, Err(AnsiBoxError::WriteFailed { .. })));
}

#[test]
#[serial]
fn test_print_to_failing_default_output_is_quiet() {
    set_output(BrokenPipeWriter);
    text().println("dropped");
    boxed().print("dropped");
    reset_output();
}
