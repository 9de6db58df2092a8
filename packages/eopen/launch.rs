// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::path::{Path, PathBuf};

use cu::pre::*;

use crate::Launch;
use crate::render::{SCRIPT_NAME, render};

/// Environment fallback for the Electron binary when --electron is absent.
pub const ELECTRON_BIN_ENV: &str = "ELECTRON_BIN_PATH";

/// Write the launcher script next to the entry file, then run Electron
/// on it with inherited stdio, blocking until the window is closed.
pub fn launch(cfg: &Launch) -> cu::Result<()> {
    let index = Path::new(&cfg.index);
    if !index.exists() {
        let index = &cfg.index;
        cu::bail!("index file does not exist: {index}");
    }
    if let Some(icon) = &cfg.icon {
        if !Path::new(icon).exists() {
            cu::warn!("icon file does not exist: {icon}");
        }
    }
    let electron = checked_runtime(&cfg.electron)?;

    let script = script_path(index).into_utf8()?;
    cu::check!(
        std::fs::write(&script, render(cfg)),
        "failed to write the launcher script '{script}'"
    )?;
    cu::info!("generated {SCRIPT_NAME}: {script}");

    cu::info!("starting electron: {electron}");
    let result = Path::new(&electron)
        .command()
        .args([script])
        .name("eopen")
        .all_inherit()
        .wait_nz();
    cu::check!(result, "failed to run electron '{electron}'")
}

/// Pick the runtime path from the explicit flag, falling back to the
/// ELECTRON_BIN_PATH environment variable. Empty values count as unset.
pub fn resolve_runtime(flag: Option<String>) -> Option<String> {
    pick_runtime(flag, cu::env_var(ELECTRON_BIN_ENV).unwrap_or_default())
}

fn pick_runtime(flag: Option<String>, env: String) -> Option<String> {
    match flag {
        Some(x) if !x.is_empty() => Some(x),
        _ if !env.is_empty() => Some(env),
        _ => None,
    }
}

/// The resolved runtime must exist on disk. A bare command name that is
/// not a file in the current directory is still looked up on PATH.
fn checked_runtime(electron: &str) -> cu::Result<String> {
    if Path::new(electron).exists() {
        return Ok(electron.to_string());
    }
    if !electron.contains(['/', '\\']) {
        if let Ok(found) = cu::which(electron) {
            return found.into_utf8();
        }
    }
    cu::bail!("electron binary does not exist: {electron}");
}

fn script_path(index: &Path) -> PathBuf {
    match index.parent() {
        Some(dir) => dir.join(SCRIPT_NAME),
        None => PathBuf::from(SCRIPT_NAME),
    }
}

/// Query the runtime's `--version` output, trimmed. Any failure (cannot
/// spawn, abnormal exit, empty output) degrades to None.
pub fn runtime_version(electron: &str) -> Option<String> {
    let output = std::process::Command::new(electron)
        .arg("--version")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() { None } else { Some(version) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let flag = Some("/opt/electron".to_string());
        let env = "/usr/bin/electron".to_string();
        assert_eq!(
            pick_runtime(flag, env.clone()).as_deref(),
            Some("/opt/electron")
        );
        assert_eq!(pick_runtime(None, env).as_deref(), Some("/usr/bin/electron"));
        assert_eq!(pick_runtime(Some(String::new()), String::new()), None);
        assert_eq!(pick_runtime(None, String::new()), None);
    }

    #[test]
    fn script_lands_next_to_the_index_file() {
        assert_eq!(
            script_path(Path::new("app/index.html")),
            Path::new("app/eopen.cjs")
        );
        assert_eq!(script_path(Path::new("index.html")), Path::new("eopen.cjs"));
        assert_eq!(
            script_path(Path::new("/srv/site/index.html")),
            Path::new("/srv/site/eopen.cjs")
        );
    }

    #[test]
    fn missing_index_fails_before_writing() {
        let cfg = Launch {
            index: "no/such/index.html".to_string(),
            icon: None,
            zoom: 0.0,
            debug: false,
            disable_menu: false,
            electron: "electron".to_string(),
        };
        assert!(launch(&cfg).is_err());
        assert!(!Path::new("no/such/eopen.cjs").exists());
    }

    #[test]
    fn missing_runtime_path_is_an_error() {
        assert!(checked_runtime("definitely/not/here/electron").is_err());
    }
}
