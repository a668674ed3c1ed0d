// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process wide output settings: whether colors are emitted, and where the default
//! destination print operations write to.
//!
//! Both live in one struct behind one [Mutex], lazily initialized on first use:
//! - `colors_enabled` is seeded by [`detect_color_enabled`].
//! - `output` starts as [`std::io::stdout`].
//!
//! Render calls read `colors_enabled` once and pass the snapshot down as a plain
//! `bool`, so a concurrent [`force_colors`] never changes the outcome halfway through
//! a render.
//!
//! The writer sits behind its own [Mutex]. Writing to it never holds the settings lock,
//! so a slow destination never stalls a render on another thread, and a writer may
//! itself render styled text.
//!
//! # Testing support
//!
//! Tests that call [`force_colors`] or [`set_output`] must be annotated with
//! [`#[serial]`](https://crates.io/crates/serial_test), since this state is shared by
//! every test thread in the process.

use std::{io::Write,
          sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError}};

use crate::detect_color_enabled;

pub type SendWriter = Box<dyn Write + Send>;
pub type SharedWriter = Arc<Mutex<SendWriter>>;

struct OutputSettings {
    colors_enabled: bool,
    output: SharedWriter,
}

fn shared_writer(writer: impl Write + Send + 'static) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

static OUTPUT_SETTINGS: LazyLock<Mutex<OutputSettings>> = LazyLock::new(|| {
    Mutex::new(OutputSettings {
        colors_enabled: detect_color_enabled(),
        output: shared_writer(std::io::stdout()),
    })
});

/// A panic while holding the lock can't leave either field half written (a `bool` and
/// an [Arc] swap), so a poisoned lock is simply recovered.
fn lock_output_settings() -> MutexGuard<'static, OutputSettings> {
    OUTPUT_SETTINGS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Override automatic color detection.
pub fn force_colors(on: bool) { lock_output_settings().colors_enabled = on; }

/// Snapshot of the process wide color flag.
#[must_use]
pub fn colors_enabled() -> bool { lock_output_settings().colors_enabled }

/// Change the destination used by [`crate::StyledOutput::print`],
/// [`crate::StyledOutput::println`] and [`crate::StyledOutput::print_fmt`]. A print
/// already in flight finishes on the old destination.
pub fn set_output(writer: impl Write + Send + 'static) {
    lock_output_settings().output = shared_writer(writer);
}

/// Point the default destination back at [`std::io::stdout`].
pub fn reset_output() { set_output(std::io::stdout()); }

/// Runs `f` against the default destination. The settings lock is only held long
/// enough to clone the [Arc]. The writer's own lock is held while `f` runs, so output
/// from concurrent print calls is never interleaved mid row.
///
/// `f` must not print through the default destination itself; rendering is fine.
pub(crate) fn with_output<R>(f: impl FnOnce(&mut dyn Write) -> R) -> R {
    let output = Arc::clone(&lock_output_settings().output);
    let mut writer = output.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *writer)
}
