// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors from the direct write operations of [`crate::StyledOutput`], like
/// [`crate::StyledOutput::write_to`].
///
/// Rendering itself never fails. Every style and box configuration, however extreme,
/// produces a well defined string. The only thing that can go wrong is handing the
/// rendered bytes to the destination.
///
/// The default destination operations ([`crate::StyledOutput::print`] and friends)
/// swallow this error instead of returning it.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiBoxError {
    /// The destination writer rejected the rendered output.
    #[error("Could not write rendered output to the destination")]
    #[diagnostic(
        code(r3bl_ansi_box::write_failed),
        help("Check that the destination (terminal, pipe, or file) is still open")
    )]
    WriteFailed {
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for AnsiBoxError {
    fn from(source: std::io::Error) -> Self { AnsiBoxError::WriteFailed { source } }
}
