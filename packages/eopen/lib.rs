// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

mod launch;
mod render;

pub use launch::{ELECTRON_BIN_ENV, launch, resolve_runtime, runtime_version};
pub use render::{SCRIPT_NAME, render};

/// Launch parameters, built once per invocation from the command line
/// and read-only afterwards.
pub struct Launch {
    /// The html file the window loads
    pub index: String,
    /// Window icon path, if any
    pub icon: Option<String>,
    /// Zoom ratio, only applied when greater than zero
    pub zoom: f64,
    /// Open developer tools after the window is created
    pub debug: bool,
    /// Remove the default menu bar
    pub disable_menu: bool,
    /// Resolved Electron binary path
    pub electron: String,
}
