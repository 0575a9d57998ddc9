// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Builds the chunk and asset manifest for assets present in the output directory.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

use super::errors::{ReportError, ReportResult};
use super::probe::FileProbe;
use super::utils::{bytes_to_kb, round2};
use crate::build::BuildResult;

/// Estimated gzip size as a fixed fraction of the raw size.
///
/// This is not a measurement; no asset is compressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GzipEstimate {
    ratio: f64,
}

impl GzipEstimate {
    pub const DEFAULT_RATIO: f64 = 0.3;

    #[must_use]
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Scale an already rounded kilobyte size, rounded again to two decimals.
    #[must_use]
    pub fn estimate_kb(&self, size_kb: f64) -> f64 {
        round2(size_kb * self.ratio)
    }
}

impl Default for GzipEstimate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO)
    }
}

/// An asset found on disk, sized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetEntry {
    pub name: String,
    pub size_kb: f64,
    pub gzip_kb: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Manifest {
    /// Chunk names flattened across chunks, in order, duplicates kept.
    pub chunks: Vec<String>,
    pub assets: Vec<AssetEntry>,
}

impl Manifest {
    /// Build the manifest for `result` against `output_dir`.
    ///
    /// Returns `None` when the output directory does not exist. Otherwise each
    /// asset is checked on its own and dropped when its file is missing, so the
    /// asset list may end up empty.
    ///
    /// # Errors
    /// Returns an error if the probe fails for a reason other than absence.
    pub fn build(
        result: &BuildResult,
        output_dir: &Path,
        probe: &dyn FileProbe,
        gzip: GzipEstimate,
    ) -> ReportResult<Option<Self>> {
        if !probe_exists(probe, output_dir)? {
            return Ok(None);
        }

        let chunks = result
            .chunks
            .iter()
            .flat_map(|chunk| chunk.names.iter().cloned())
            .collect();

        let mut assets = Vec::with_capacity(result.assets.len());
        for asset in &result.assets {
            if !probe_exists(probe, &asset_path(output_dir, &asset.name))? {
                continue;
            }
            let size_kb = bytes_to_kb(asset.size);
            assets.push(AssetEntry {
                name: asset.name.clone(),
                size_kb,
                gzip_kb: gzip.estimate_kb(size_kb),
            });
        }

        Ok(Some(Self { chunks, assets }))
    }
}

/// Path of an asset inside the output directory.
///
/// Root and prefix components of the name are dropped, so an absolute name
/// still resolves below `output_dir`.
fn asset_path(output_dir: &Path, name: &str) -> PathBuf {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect();
    output_dir.join(relative)
}

fn probe_exists(probe: &dyn FileProbe, path: &Path) -> ReportResult<bool> {
    probe
        .exists(path)
        .map_err(|e| ReportError::ProbeFailed {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Asset, Chunk};
    use std::collections::HashSet;
    use std::io;
    use std::path::PathBuf;

    /// Probe that reports only the listed paths as existing.
    struct FakeProbe {
        existing: HashSet<PathBuf>,
    }

    impl FakeProbe {
        fn new(paths: &[&str]) -> Self {
            Self {
                existing: paths.iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl FileProbe for FakeProbe {
        fn exists(&self, path: &Path) -> io::Result<bool> {
            Ok(self.existing.contains(path))
        }
    }

    struct FailingProbe;

    impl FileProbe for FailingProbe {
        fn exists(&self, _path: &Path) -> io::Result<bool> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    fn asset(name: &str, size: u64) -> Asset {
        Asset {
            name: name.to_string(),
            size,
        }
    }

    fn chunk(names: &[&str]) -> Chunk {
        Chunk {
            names: names.iter().map(ToString::to_string).collect(),
        }
    }

    fn result(assets: Vec<Asset>, chunks: Vec<Chunk>) -> BuildResult {
        BuildResult {
            hash: "hash".to_string(),
            assets,
            chunks,
            ..BuildResult::default()
        }
    }

    #[test]
    fn test_missing_output_dir_omits_manifest() {
        let probe = FakeProbe::new(&["/dist/main.js"]);
        let result = result(vec![asset("main.js", 1000)], vec![chunk(&["main"])]);

        let manifest =
            Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default()).unwrap();
        assert!(manifest.is_none());
    }

    #[test]
    fn test_sizes_are_rounded_kilobytes() {
        let probe = FakeProbe::new(&["/dist", "/dist/assetOne.js"]);
        let result = result(vec![asset("assetOne.js", 1000)], vec![chunk(&["chunkOne"])]);

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        assert_eq!(manifest.chunks, vec!["chunkOne"]);
        assert_eq!(
            manifest.assets,
            vec![AssetEntry {
                name: "assetOne.js".to_string(),
                size_kb: 0.98,
                gzip_kb: 0.29,
            }]
        );
    }

    #[test]
    fn test_missing_asset_is_dropped() {
        let probe = FakeProbe::new(&["/dist", "/dist/assetOne.js"]);
        let result = result(
            vec![asset("assetOne.js", 1000), asset("assetTwo.js", 1000)],
            vec![],
        );

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        let names: Vec<&str> = manifest.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["assetOne.js"]);
    }

    #[test]
    fn test_duplicate_asset_names_are_kept() {
        let probe = FakeProbe::new(&["/dist", "/dist/assetOne.js"]);
        let result = result(
            vec![asset("assetOne.js", 1000), asset("assetOne.js", 1000)],
            vec![],
        );

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        assert_eq!(manifest.assets.len(), 2);
        assert_eq!(manifest.assets[0], manifest.assets[1]);
    }

    #[test]
    fn test_all_assets_missing_keeps_empty_section() {
        let probe = FakeProbe::new(&["/dist"]);
        let result = result(vec![asset("gone.js", 10)], vec![chunk(&["main"])]);

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        assert!(manifest.assets.is_empty());
        assert_eq!(manifest.chunks, vec!["main"]);
    }

    #[test]
    fn test_chunk_names_flattened_in_order_with_duplicates() {
        let probe = FakeProbe::new(&["/dist"]);
        let result = result(
            vec![],
            vec![chunk(&["main", "runtime"]), chunk(&[]), chunk(&["vendor", "main"])],
        );

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        assert_eq!(manifest.chunks, vec!["main", "runtime", "vendor", "main"]);
    }

    #[test]
    fn test_absolute_asset_name_stays_in_output_dir() {
        let probe = FakeProbe::new(&["/dist", "/dist/main.js", "/elsewhere/leak.js"]);
        let result = result(
            vec![asset("/main.js", 1000), asset("/elsewhere/leak.js", 1000)],
            vec![],
        );

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::default())
            .unwrap()
            .unwrap();
        let names: Vec<&str> = manifest.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["/main.js"]);
    }

    #[test]
    fn test_asset_path_nests_names() {
        assert_eq!(asset_path(Path::new("/dist"), "/main.js"), PathBuf::from("/dist/main.js"));
        assert_eq!(
            asset_path(Path::new("/dist"), "js/app.js"),
            PathBuf::from("/dist/js/app.js")
        );
    }

    #[test]
    fn test_custom_gzip_ratio() {
        let probe = FakeProbe::new(&["/dist", "/dist/big.js"]);
        let result = result(vec![asset("big.js", 10 * 1024)], vec![]);

        let manifest = Manifest::build(&result, Path::new("/dist"), &probe, GzipEstimate::new(0.25))
            .unwrap()
            .unwrap();
        assert_eq!(manifest.assets[0].size_kb, 10.0);
        assert_eq!(manifest.assets[0].gzip_kb, 2.5);
    }

    #[test]
    fn test_probe_failure_propagates() {
        let result = result(vec![asset("main.js", 1)], vec![]);
        let error = Manifest::build(
            &result,
            Path::new("/dist"),
            &FailingProbe,
            GzipEstimate::default(),
        )
        .unwrap_err();
        assert!(matches!(error, ReportError::ProbeFailed { path, .. } if path == Path::new("/dist")));
    }
}
