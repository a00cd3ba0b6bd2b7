use anyhow::Result;
use clap::Parser;
use toolbox_catalog::{search, suggestions, Catalog};

use crate::core::prefs::PrefsStore;
use crate::ui::{self, Icon, Theme};

#[derive(Parser, Debug)]
pub struct SearchCommand {
    /// Query string; matches name, description and category
    pub query: String,

    /// Show the capped autocomplete suggestions instead of all results
    #[arg(long)]
    pub suggest: bool,
}

impl SearchCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();
        let prefs = PrefsStore::new()?.load()?;

        let hits = if self.suggest {
            suggestions(&catalog.tools, &self.query)
        } else {
            search(&catalog.tools, &self.query)
        };

        if hits.is_empty() {
            println!(
                "{} No tools match '{}'. Try another keyword or `toolbox list`.",
                Icon::Search,
                Theme::bold(&self.query)
            );
            return Ok(());
        }

        println!(
            "{} Found {} matching tools",
            Icon::Search,
            Theme::secondary(hits.len())
        );
        println!("{}", ui::tool_table(&hits, &prefs));
        Ok(())
    }
}
