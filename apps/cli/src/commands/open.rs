use anyhow::{bail, Result};
use clap::Parser;
use toolbox_catalog::{suggestions, Catalog};

use crate::core::prefs::PrefsStore;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct OpenCommand {
    /// Tool id (see `toolbox list`)
    pub id: String,

    /// Print the URL instead of launching the browser
    #[arg(long)]
    pub print: bool,
}

impl OpenCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();

        let Some(tool) = catalog.tool(&self.id) else {
            let candidates = suggestions(&catalog.tools, &self.id);
            if !candidates.is_empty() {
                let ids: Vec<&str> = candidates.iter().map(|t| t.id.as_str()).collect();
                bail!("unknown tool id '{}'. Did you mean: {}?", self.id, ids.join(", "));
            }
            bail!("unknown tool id '{}'. See `toolbox list`.", self.id);
        };

        if !tool.is_active() {
            println!(
                "{} {} is not available yet ({}).",
                Icon::Cross,
                Theme::bold(&tool.name),
                Theme::warning(tool.status)
            );
            return Ok(());
        }

        let store = PrefsStore::new()?;
        let mut prefs = store.load()?;
        prefs.record_usage(&tool.id);
        store.save(&prefs)?;

        if self.print {
            println!("{}", tool.href);
            return Ok(());
        }

        // Browser launch is best-effort; a failure is reported, not fatal.
        match open::that(tool.href.as_str()) {
            Ok(()) => println!(
                "{} Opened {} {}",
                Icon::Link,
                Theme::primary(&tool.name),
                Theme::muted(&tool.href)
            ),
            Err(err) => {
                println!(
                    "{} Could not launch a browser ({}). URL: {}",
                    Theme::warning("!"),
                    err,
                    tool.href
                );
            }
        }
        Ok(())
    }
}
