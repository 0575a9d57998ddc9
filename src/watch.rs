// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Polls a stats file and triggers a re-render whenever the compiler rewrites it.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
}

/// Detects changes to a stats file between polls.
#[derive(Debug)]
pub struct StatsWatcher {
    path: PathBuf,
    last: Option<Fingerprint>,
}

impl StatsWatcher {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            last: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the file changed since the previous poll.
    ///
    /// The first poll that finds the file reports a change. A missing file is
    /// not a change: the compiler may not have written it yet.
    ///
    /// # Errors
    /// Returns an error if the file metadata cannot be read for a reason other than absence.
    pub fn poll(&mut self) -> Result<bool> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to stat file: {}", self.path.display()))
            }
        };
        let current = Fingerprint {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        };
        if self.last == Some(current) {
            return Ok(false);
        }
        debug!(stats = %self.path.display(), len = current.len, "Stats file changed");
        self.last = Some(current);
        Ok(true)
    }
}

/// Poll `watcher` forever, calling `on_change` after every detected change.
///
/// # Errors
/// Returns the first error from polling or from `on_change`.
pub fn watch<F>(mut watcher: StatsWatcher, interval: Duration, mut on_change: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    info!(stats = %watcher.path().display(), ?interval, "Watching stats file");
    loop {
        if watcher.poll()? {
            on_change()?;
        }
        thread::sleep(interval);
    }
}
