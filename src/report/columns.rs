// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Arranges a list of entries into aligned columns.

use comfy_table::{presets, Cell, ContentArrangement, Table};
use console::{measure_text_width, Term};

/// Arranges entries left-to-right into a multi-line block.
pub trait ColumnLayout {
    fn layout(&self, items: &[String]) -> String;
}

/// Borderless grid that fills rows left-to-right and wraps to a fixed width.
///
/// Each column is as wide as its longest entry; widths ignore ANSI styling.
#[derive(Debug, Clone, Copy)]
pub struct TableColumns {
    width: usize,
}

impl TableColumns {
    pub const DEFAULT_WIDTH: usize = 80;
    const GAP: u16 = 2;

    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Use the width of the attached terminal, or the default when detached.
    #[must_use]
    pub fn for_terminal() -> Self {
        let width = Term::stdout()
            .size_checked()
            .map_or(Self::DEFAULT_WIDTH, |(_, columns)| usize::from(columns));
        Self::new(width)
    }

    fn column_count(&self, items: &[String]) -> usize {
        let gap = usize::from(Self::GAP);
        let widest = items
            .iter()
            .map(|item| measure_text_width(item))
            .max()
            .unwrap_or_default();
        ((self.width + gap) / (widest + gap)).clamp(1, items.len().max(1))
    }
}

impl Default for TableColumns {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

impl ColumnLayout for TableColumns {
    fn layout(&self, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled);
        for row in items.chunks(self.column_count(items)) {
            table.add_row(row.iter().map(Cell::new));
        }
        for column in table.column_iter_mut() {
            column.set_padding((0, Self::GAP));
        }

        table
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
