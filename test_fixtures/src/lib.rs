// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Writers used to test the print family of `r3bl_ansi_box` without a real terminal.
//! Only meant to be used as a dev dependency.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
