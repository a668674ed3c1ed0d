// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Arguments, io::Write};

use crate::{AnsiBoxError, BoxStyle, colors_enabled, render_box, with_output};

/// The print family, shared by [`crate::TextStyle`] and [`BoxStyle`]. Implementors
/// only provide [`Self::render_with`]; everything else is built on it.
///
/// | Method                 | Destination       | Errors    |
/// | ---------------------- | ----------------- | --------- |
/// | [`Self::render`]       | returned [String] | none      |
/// | [`Self::render_fmt`]   | returned [String] | none      |
/// | [`Self::print`]        | default output    | swallowed |
/// | [`Self::println`]      | default output    | swallowed |
/// | [`Self::print_fmt`]    | default output    | swallowed |
/// | [`Self::write_to`]     | any [Write]       | returned  |
/// | [`Self::writeln_to`]   | any [Write]       | returned  |
/// | [`Self::write_fmt_to`] | any [Write]       | returned  |
///
/// The default output is stdout, unless changed with [`crate::set_output`].
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_box::{StyledOutput, boxed, text};
///
/// let mut acc: Vec<u8> = Vec::new();
/// let bytes = boxed().write_fmt_to(&mut acc, format_args!("{} + {}", 1, 2)).unwrap();
/// assert_eq!(bytes, acc.len());
///
/// text().green().println("done");
/// ```
pub trait StyledOutput {
    /// Render `input` with colors on or off, ignoring the process wide setting.
    fn render_with(&self, input: &str, colors_enabled: bool) -> String;

    /// Render `input`, reading [`crate::colors_enabled`] exactly once.
    #[must_use]
    fn render(&self, input: &str) -> String { self.render_with(input, colors_enabled()) }

    /// Render the result of `format_args!(...)`. Same as formatting first and calling
    /// [`Self::render`].
    #[must_use]
    fn render_fmt(&self, args: Arguments<'_>) -> String {
        self.render(&std::fmt::format(args))
    }

    fn print(&self, input: &str) { write_to_default_output(&self.render(input)); }

    fn println(&self, input: &str) {
        let mut acc = self.render(input);
        acc.push('\n');
        write_to_default_output(&acc);
    }

    fn print_fmt(&self, args: Arguments<'_>) {
        write_to_default_output(&self.render_fmt(args));
    }

    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`AnsiBoxError::WriteFailed`] if `writer` rejects the bytes. Nothing is retried.
    fn write_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        input: &str,
    ) -> Result<usize, AnsiBoxError> {
        write_all(writer, &self.render(input))
    }

    /// Like [`Self::write_to`], followed by a `\n`.
    ///
    /// # Errors
    ///
    /// [`AnsiBoxError::WriteFailed`] if `writer` rejects the bytes.
    fn writeln_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        input: &str,
    ) -> Result<usize, AnsiBoxError> {
        let mut acc = self.render(input);
        acc.push('\n');
        write_all(writer, &acc)
    }

    /// Like [`Self::write_to`], for the result of `format_args!(...)`.
    ///
    /// # Errors
    ///
    /// [`AnsiBoxError::WriteFailed`] if `writer` rejects the bytes.
    fn write_fmt_to<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        args: Arguments<'_>,
    ) -> Result<usize, AnsiBoxError> {
        write_all(writer, &self.render_fmt(args))
    }
}

impl StyledOutput for BoxStyle {
    fn render_with(&self, input: &str, colors_enabled: bool) -> String {
        render_box(input, self, colors_enabled)
    }
}

fn write_all<W: Write + ?Sized>(writer: &mut W, output: &str) -> Result<usize, AnsiBoxError> {
    writer.write_all(output.as_bytes())?;
    Ok(output.len())
}

/// Errors are logged at `debug` level and dropped.
fn write_to_default_output(output: &str) {
    let result = with_output(|writer| -> std::io::Result<()> {
        writer.write_all(output.as_bytes())?;
        writer.flush()
    });

    if let Err(error) = result {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "Could not write to the default output, dropping it.",
            error = ?error
        );
    }
}
