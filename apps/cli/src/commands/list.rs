use anyhow::Result;
use clap::Parser;
use toolbox_catalog::{Catalog, Category, ToolRecord, ToolStatus};

use crate::core::prefs::PrefsStore;
use crate::ui::{self, Theme};

#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Only show tools in this category (e.g. dev-tools)
    #[arg(long)]
    pub category: Option<Category>,

    /// Only show tools with this status (active or coming-soon)
    #[arg(long)]
    pub status: Option<ToolStatus>,
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();
        let prefs = PrefsStore::new()?.load()?;

        let tools: Vec<&ToolRecord> = catalog
            .tools
            .iter()
            .filter(|t| self.category.map_or(true, |c| t.category == c))
            .filter(|t| self.status.map_or(true, |s| t.status == s))
            .collect();

        if tools.is_empty() {
            println!("{}", Theme::muted("No tools match the given filters."));
            return Ok(());
        }

        println!("{}", ui::tool_table(&tools, &prefs));

        let active = tools.iter().filter(|t| t.is_active()).count();
        println!(
            "{}",
            Theme::muted(format!(
                "{} tools ({} active, {} coming soon)",
                tools.len(),
                active,
                tools.len() - active
            ))
        );
        Ok(())
    }
}
