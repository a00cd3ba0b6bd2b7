use anyhow::Result;
use clap::Parser;

use crate::core::prefs::PrefsStore;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct StorageCommand {
    /// Reset all stored preferences
    #[arg(long)]
    pub clear: bool,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl StorageCommand {
    pub fn execute(self) -> Result<()> {
        let store = PrefsStore::new()?;

        if self.clear {
            cliclack::intro(console::style("Storage Manager").bold())?;
            if !self.yes {
                let confirmed =
                    cliclack::confirm("Reset favorites, recents and layout settings?").interact()?;
                if !confirmed {
                    cliclack::outro("Nothing was changed.")?;
                    return Ok(());
                }
            }
            store.clear()?;
            cliclack::outro(format!("{} Preferences reset to defaults.", Icon::Check))?;
            return Ok(());
        }

        let prefs = store.load()?;
        println!("{} Preference store", Icon::Database);
        println!("  path: {}", Theme::muted(store.path().display()));
        match store.file_size() {
            Some(bytes) => println!("  size: {}", Theme::muted(format!("{} bytes", bytes))),
            None => println!("  size: {}", Theme::muted("not created yet")),
        }
        println!("  favorites: {}", Theme::bold(prefs.favorites.len()));
        println!("  recent entries: {}", Theme::bold(prefs.recent.len()));
        println!("  layout: {}", Theme::bold(format!(
            "{} / {} columns",
            prefs.layout.density, prefs.layout.grid_columns
        )));
        println!("  translation: {}", Theme::bold(format!(
            "{} ({})",
            if prefs.translation.auto_translate { "auto" } else { "off" },
            prefs.translation.target_language
        )));
        Ok(())
    }
}
