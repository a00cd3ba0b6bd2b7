use anyhow::Result;
use clap::Parser;

use crate::core::prefs::{Density, GridColumns, PrefsStore};
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct LayoutCommand {
    /// Card density: compact, comfortable or spacious
    #[arg(long)]
    pub density: Option<Density>,

    /// Grid columns: auto or 1-6
    #[arg(long)]
    pub columns: Option<GridColumns>,
}

impl LayoutCommand {
    pub fn execute(self) -> Result<()> {
        let store = PrefsStore::new()?;
        let mut prefs = store.load()?;

        if self.density.is_none() && self.columns.is_none() {
            println!("{} Layout settings", Icon::Gear);
            println!("  density: {}", Theme::bold(prefs.layout.density));
            println!("  columns: {}", Theme::bold(prefs.layout.grid_columns));
            return Ok(());
        }

        if let Some(density) = self.density {
            prefs.layout.density = density;
        }
        if let Some(columns) = self.columns {
            prefs.layout.grid_columns = columns;
        }
        store.save(&prefs)?;

        println!(
            "{} Layout updated: density={}, columns={}",
            Icon::Check,
            Theme::bold(prefs.layout.density),
            Theme::bold(prefs.layout.grid_columns)
        );
        Ok(())
    }
}
