use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use toolbox_catalog::{Catalog, ToolRecord};

use crate::core::prefs::PrefsStore;
use crate::ui::{self, Icon, Theme};

#[derive(Parser, Debug)]
pub struct FavoriteCommand {
    #[command(subcommand)]
    action: FavoriteAction,
}

#[derive(Subcommand, Debug)]
enum FavoriteAction {
    /// Pin a tool to your favorites
    Add { id: String },
    /// Remove a tool from your favorites
    Remove { id: String },
    /// Show your favorite tools
    List,
}

impl FavoriteCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();
        let store = PrefsStore::new()?;
        let mut prefs = store.load()?;

        match self.action {
            FavoriteAction::Add { id } => {
                let Some(tool) = catalog.tool(&id) else {
                    bail!("unknown tool id '{}'. See `toolbox list`.", id);
                };
                if prefs.is_favorite(&id) {
                    println!("{} already a favorite.", Theme::bold(&tool.name));
                    return Ok(());
                }
                prefs.toggle_favorite(&id);
                store.save(&prefs)?;
                println!("{} Added {} to favorites.", Icon::Star, Theme::primary(&tool.name));
            }
            FavoriteAction::Remove { id } => {
                if !prefs.is_favorite(&id) {
                    println!("{}", Theme::muted(format!("'{}' is not a favorite.", id)));
                    return Ok(());
                }
                prefs.toggle_favorite(&id);
                store.save(&prefs)?;
                println!("{} Removed '{}' from favorites.", Icon::Cross, id);
            }
            FavoriteAction::List => {
                // Ids whose tool disappeared from the catalog are skipped.
                let favorites: Vec<&ToolRecord> = prefs
                    .favorites
                    .iter()
                    .filter_map(|id| catalog.tool(id))
                    .collect();

                if favorites.is_empty() {
                    println!(
                        "{}",
                        Theme::muted("No favorites yet. Add one with `toolbox favorite add <id>`.")
                    );
                    return Ok(());
                }
                println!("{}", ui::tool_table(&favorites, &prefs));
            }
        }
        Ok(())
    }
}
