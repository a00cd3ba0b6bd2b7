use anyhow::Result;
use clap::Parser;
use toolbox_catalog::Catalog;

use crate::core::prefs::PrefsStore;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct RecentCommand {
    /// Show aggregate usage statistics
    #[arg(long)]
    pub stats: bool,

    /// Forget the recently-used history
    #[arg(long)]
    pub clear: bool,
}

impl RecentCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();
        let store = PrefsStore::new()?;
        let mut prefs = store.load()?;

        if self.clear {
            prefs.recent.clear();
            store.save(&prefs)?;
            println!("{} Recently-used history cleared.", Icon::Check);
            return Ok(());
        }

        if prefs.recent.is_empty() {
            println!(
                "{}",
                Theme::muted("Nothing here yet. Open a tool with `toolbox open <id>`.")
            );
            return Ok(());
        }

        if self.stats {
            println!(
                "{} {} launches across {} tools",
                Icon::Clock,
                Theme::secondary(prefs.total_launches()),
                Theme::secondary(prefs.recent.len())
            );
            let mut by_count = prefs.recent.clone();
            by_count.sort_by(|a, b| b.count.cmp(&a.count));
            for entry in &by_count {
                let name = catalog
                    .tool(&entry.id)
                    .map(|t| t.name.as_str())
                    .unwrap_or(entry.id.as_str());
                println!(
                    "  {} {}",
                    Theme::bold(name),
                    Theme::muted(format!("× {}", entry.count))
                );
            }
            return Ok(());
        }

        println!("{} Recently used:", Icon::Clock);
        for entry in &prefs.recent {
            let name = catalog
                .tool(&entry.id)
                .map(|t| t.name.as_str())
                .unwrap_or(entry.id.as_str());
            println!(
                "  {} {}",
                Theme::bold(name),
                Theme::muted(entry.last_used.format("%Y-%m-%d %H:%M"))
            );
        }
        Ok(())
    }
}
