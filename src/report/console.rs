// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Composes the terminal status block from the stage outputs.

use super::columns::ColumnLayout;
use super::manifest::{AssetEntry, Manifest};
use super::metadata::{Tool, ToolVersions};
use super::theme::{Symbol, Theme, Tone};
use super::totals::BuildTotals;
use super::utils::format_kb;
use crate::build::BuildResult;

pub(crate) const SUCCESS_BANNER: &str = "The build completed successfully.";
pub(crate) const FAILURE_BANNER: &str = "The build completed with errors.";

/// Everything the template needs, already resolved.
pub(crate) struct ReportParts<'a> {
    pub(crate) versions: &'a ToolVersions,
    pub(crate) result: &'a BuildResult,
    pub(crate) totals: BuildTotals,
    pub(crate) manifest: Option<&'a Manifest>,
    pub(crate) output_uri: &'a str,
    pub(crate) status: Option<&'a str>,
}

/// Compose the full report text.
///
/// The layout is fixed: a leading blank line, the header, the optional error
/// and warning details, the optional manifest, the output location and the
/// closing banner, followed by the status message when one is given.
pub(crate) fn compose(theme: &dyn Theme, layout: &dyn ColumnLayout, parts: &ReportParts<'_>) -> String {
    let header = header(theme, parts);
    let errors = detail_block(theme, "errors:", Tone::Alert, &parts.result.errors);
    let warnings = detail_block(theme, "warnings:", Tone::Caution, &parts.result.warnings);
    let manifest = parts
        .manifest
        .map(|manifest| manifest_block(theme, layout, manifest))
        .unwrap_or_default();
    let output = theme.paint(
        Tone::Label,
        &format!("output at: {}", theme.paint(Tone::Link, parts.output_uri)),
    );
    let banner = banner(theme, parts.totals.failed, parts.status);

    format!("\n{header}{errors}{warnings}\n{manifest}\n{output}\n\n{banner}\n")
}

fn header(theme: &dyn Theme, parts: &ReportParts<'_>) -> String {
    let tool_line = |tool: &Tool| {
        format!(
            "{} {}: {}\n",
            theme.symbol(Symbol::Info),
            tool.name,
            tool.display_version()
        )
    };
    format!(
        "{}{}{} hash: {}\n{} errors: {}\n{} warnings: {}\n",
        tool_line(&parts.versions.reporter),
        tool_line(&parts.versions.compiler),
        theme.symbol(Symbol::Success),
        parts.result.hash,
        theme.symbol(Symbol::Error),
        parts.totals.errors,
        theme.symbol(Symbol::Warning),
        parts.totals.warnings,
    )
}

/// Label followed by one message per line; empty when there are no messages.
fn detail_block(theme: &dyn Theme, label: &str, tone: Tone, messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    format!(
        "\n{}{}\n",
        theme.paint(Tone::Label, label),
        theme.paint(tone, &format!("\n{}", messages.join("\n")))
    )
}

fn manifest_block(theme: &dyn Theme, layout: &dyn ColumnLayout, manifest: &Manifest) -> String {
    let assets: Vec<String> = manifest
        .assets
        .iter()
        .map(|asset| asset_line(theme, asset))
        .collect();
    format!(
        "{}\n{}\n{}\n{}",
        theme.paint(Tone::Label, "chunks:"),
        layout.layout(&manifest.chunks),
        theme.paint(Tone::Label, "assets:"),
        layout.layout(&assets)
    )
}

pub(crate) fn asset_line(theme: &dyn Theme, asset: &AssetEntry) -> String {
    format!(
        "{} {} / {}",
        asset.name,
        theme.paint(Tone::Size, &format!("({}kb)", format_kb(asset.size_kb))),
        theme.paint(
            Tone::Compressed,
            &format!("({}kb gz)", format_kb(asset.gzip_kb))
        )
    )
}

fn banner(theme: &dyn Theme, failed: bool, status: Option<&str>) -> String {
    let banner = if failed {
        theme.paint(Tone::Alert, FAILURE_BANNER)
    } else {
        theme.paint(Tone::Success, SUCCESS_BANNER)
    };
    match status {
        Some(status) => format!("{banner}\n\n{status}"),
        None => banner,
    }
}
