// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod broken_pipe_writer;
mod stdout_mock;

// Re-export.
pub use broken_pipe_writer::*;
pub use stdout_mock::*;
