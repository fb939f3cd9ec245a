// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Scadgen Contributors

//! Script persistence
//!
//! Writes compiled scripts atomically: lines land in a temporary file in
//! the destination directory, are flushed to disk, and the temporary file
//! is renamed over the target. A crash mid-write leaves the previous
//! script intact, and a viewer polling the file never observes a half
//! written one.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::compile::Compiled;

/// Replaces the file at `path` with the compiled script.
pub fn write_scad(compiled: &Compiled, path: &Path) -> Result<()> {
    let dir = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    // The temporary file must live on the same filesystem as the target
    // for the final rename to stay atomic.
    let mut file = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
        .context("creating temporary script file")?;
    for line in &compiled.lines {
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    file.as_file().sync_all()?;
    file.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// The `.scad` path for a part named `name` under `dir`.
pub fn scad_path_for(dir: &Path, name: &str) -> PathBuf {
    dir.join(name).with_extension("scad")
}
