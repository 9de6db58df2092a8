// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use crate::Launch;

/// File name of the generated script, written next to the entry file
/// and overwritten on every invocation.
pub const SCRIPT_NAME: &str = "eopen.cjs";

/// Render the Electron main script for the given launch parameters.
///
/// Plain string building with conditional blocks. Paths are inserted
/// verbatim, so a path containing a quote character would corrupt the
/// script. The operator supplies their own paths.
pub fn render(cfg: &Launch) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("const { app, BrowserWindow } = require('electron')\n");
    out.push_str("\n");
    out.push_str("function createWindow () {\n");
    out.push_str("    const win = new BrowserWindow({\n");
    out.push_str("        width: 1400,\n");
    out.push_str("        height: 900,\n");
    if let Some(icon) = &cfg.icon {
        out.push_str(&format!("        icon: \"{icon}\",\n"));
    }
    out.push_str("        webPreferences: {\n");
    out.push_str("            nodeIntegration: true,\n");
    out.push_str("            contextIsolation: false\n");
    out.push_str("        }\n");
    out.push_str("    })\n");
    out.push_str("\n");
    out.push_str(&format!("    win.loadFile('{}')\n", cfg.index));
    if cfg.debug {
        out.push_str("\n");
        out.push_str("    // open developer tools once the window exists\n");
        out.push_str("    win.webContents.openDevTools()\n");
    }
    if cfg.disable_menu {
        out.push_str("\n");
        out.push_str("    // drop the default menu bar\n");
        out.push_str("    win.setMenu(null)\n");
    }
    if cfg.zoom > 0.0 {
        let percentage = format!("{:.0}", cfg.zoom * 100.0);
        out.push_str("\n");
        out.push_str("    // zoom only takes effect reliably after 'dom-ready'\n");
        out.push_str("    win.webContents.on('dom-ready', () => {\n");
        out.push_str(&format!(
            "        win.webContents.setZoomFactor({}) // set to {percentage}%\n",
            cfg.zoom
        ));
        out.push_str("    })\n");
    }
    out.push_str("}\n");
    out.push_str("\n");
    out.push_str("app.whenReady().then(() => {\n");
    out.push_str("    createWindow()\n");
    out.push_str("\n");
    out.push_str("    app.on('activate', () => {\n");
    out.push_str("        if (BrowserWindow.getAllWindows().length === 0) {\n");
    out.push_str("            createWindow()\n");
    out.push_str("        }\n");
    out.push_str("    })\n");
    out.push_str("})\n");
    out.push_str("\n");
    out.push_str("app.on('window-all-closed', () => {\n");
    out.push_str("    if (process.platform !== 'darwin') {\n");
    out.push_str("        app.quit()\n");
    out.push_str("    }\n");
    out.push_str("})\n");
    out
}
