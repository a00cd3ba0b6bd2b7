pub mod theme;

pub use theme::{Icon, Theme};

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use toolbox_catalog::{ToolRecord, ToolStatus};

use crate::core::prefs::Preferences;

/// Render a set of tool records as a table, marking favorites with a star.
pub fn tool_table(tools: &[&ToolRecord], prefs: &Preferences) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["", "ID", "Name", "Category", "Status"]);

    for tool in tools {
        let marker = if prefs.is_favorite(&tool.id) {
            Icon::Star.to_string()
        } else {
            String::new()
        };
        let status = match tool.status {
            ToolStatus::Active => Theme::success(tool.status),
            ToolStatus::ComingSoon => Theme::warning(tool.status),
        };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(&tool.id),
            Cell::new(&tool.name),
            Cell::new(tool.category.label()),
            Cell::new(status),
        ]);
    }

    table
}
