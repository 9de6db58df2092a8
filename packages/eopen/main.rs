// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use cu::pre::*;
use eopen::ELECTRON_BIN_ENV;

/// Open a local html file in an Electron window
///
/// Renders an Electron main script next to the html file, then starts
/// the Electron binary on it and waits until the window is closed.
#[derive(clap::Parser)]
struct Cli {
    /// The html file to open
    #[clap(short, long)]
    index: Option<String>,

    /// Window icon path
    ///
    /// A warning is printed if the file does not exist, the launch
    /// continues without it
    #[clap(long)]
    icon: Option<String>,

    /// Remove the default menu bar
    #[clap(long)]
    disable_menu: bool,

    /// Zoom ratio applied once the content is ready (e.g. 0.8 for 80%)
    #[clap(short, long, default_value_t = 0.0)]
    zoom: f64,

    /// Open developer tools after the window is created
    #[clap(short, long)]
    debug: bool,

    /// Electron binary path
    ///
    /// Can also be set with the ELECTRON_BIN_PATH environment variable
    #[clap(short, long)]
    electron: Option<String>,

    /// Print version information, including the Electron version if it
    /// can be queried
    #[clap(short = 'V', long)]
    version: bool,

    #[clap(flatten)]
    flags: cu::cli::Flags,
}

#[cu::cli(flags = "flags")]
fn main(cli: Cli) -> cu::Result<()> {
    if cli.version {
        print_version(eopen::resolve_runtime(cli.electron));
        return Ok(());
    }

    let index = cu::check!(cli.index, "need an html file to open (--index)")?;
    let electron = cu::check!(
        eopen::resolve_runtime(cli.electron),
        "need --electron or the {ELECTRON_BIN_ENV} environment variable"
    )?;

    eopen::launch(&eopen::Launch {
        index,
        icon: cli.icon.filter(|x| !x.is_empty()),
        zoom: cli.zoom,
        debug: cli.debug,
        disable_menu: cli.disable_menu,
        electron,
    })
}

fn print_version(electron: Option<String>) {
    let version = env!("CARGO_PKG_VERSION");
    match electron.as_deref().and_then(eopen::runtime_version) {
        Some(v) => println!("eopen version {version} (Electron {v})"),
        None => println!("eopen version {version}"),
    }
}
