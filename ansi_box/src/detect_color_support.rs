// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::env;

/// Environment variables that turn colors off. These win over everything else.
pub const ENV_VARS_DISABLE_COLOR: [&str; 3] = ["NO_COLOR", "NO_COLORS", "DISABLE_COLORS"];

/// Environment variables that force colors on, regardless of the terminal check.
pub const ENV_VARS_FORCE_COLOR: [&str; 2] = ["FORCE_COLOR", "CLICOLOR_FORCE"];

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Determine whether colors should be emitted, based on the process environment and
/// whether `stdout` is a terminal. This is what seeds [`crate::colors_enabled`] the
/// first time the output settings are touched; after that, use
/// [`crate::force_colors`] to override it.
#[must_use]
pub fn detect_color_enabled() -> bool {
    let is_tty = is_a_tty(Stream::Stdout);
    let it = color_enabled_from_env(|key| env::var(key).ok(), is_tty);
    tracing::trace!(
        message = "Detected color support.",
        colors_enabled = it,
        is_tty = is_tty
    );
    it
}

/// Decide color support heuristically from environment variables. The lookup is
/// injected so the decision table can be tested without touching the real
/// environment.
///
/// 1. Any non-empty [`ENV_VARS_DISABLE_COLOR`] variable disables colors.
/// 2. Any non-empty [`ENV_VARS_FORCE_COLOR`] variable enables colors, whatever its
///    value (even `0`).
/// 3. `CLICOLOR=0` disables colors.
/// 4. `TERM=dumb` (case insensitive) disables colors.
/// 5. Otherwise `is_tty` decides.
#[must_use]
pub fn color_enabled_from_env(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> bool {
    let is_set = |key: &str| get_env(key).is_some_and(|value| !value.is_empty());

    if ENV_VARS_DISABLE_COLOR.into_iter().any(&is_set) {
        return false;
    }

    if ENV_VARS_FORCE_COLOR.into_iter().any(&is_set) {
        return true;
    }

    if get_env("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    if get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb")) {
        return false;
    }

    is_tty
}

#[must_use]
pub fn is_a_tty(stream: Stream) -> bool {
    use std::io::IsTerminal;
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}
