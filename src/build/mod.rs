// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Build result data model as emitted by the compiler's stats output.

mod config;

pub use config::OutputConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A single output file produced by a build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub name: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

/// A named grouping of output bundles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub names: Vec<String>,
}

/// The result of one compilation, read-only for the reporter.
///
/// Every field is optional in the stats document so partially written or
/// trimmed stats still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildResult {
    pub hash: String,
    /// Compiler version, when the stats document carries one.
    pub version: Option<String>,
    pub assets: Vec<Asset>,
    pub chunks: Vec<Chunk>,
    #[serde(deserialize_with = "deserialize_messages")]
    pub errors: Vec<String>,
    #[serde(deserialize_with = "deserialize_messages")]
    pub warnings: Vec<String>,
}

impl BuildResult {
    /// Load a build result from a stats JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid stats document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stats file: {}", path.display()))?;
        let result: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse stats file: {}", path.display()))?;
        debug!(
            stats = %path.display(),
            assets = result.assets.len(),
            chunks = result.chunks.len(),
            "Loaded build result"
        );
        Ok(result)
    }
}

/// Errors and warnings are plain strings in older stats formats and objects
/// with a `message` field in newer ones.
#[derive(Deserialize)]
#[serde(untagged)]
enum BuildMessage {
    Text(String),
    Detailed { message: String },
}

impl From<BuildMessage> for String {
    fn from(message: BuildMessage) -> Self {
        match message {
            BuildMessage::Text(text) | BuildMessage::Detailed { message: text } => text,
        }
    }
}

fn deserialize_messages<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let messages = Vec::<BuildMessage>::deserialize(deserializer)?;
    Ok(messages.into_iter().map(String::from).collect())
}
