use anyhow::Result;
use clap::Parser;

use crate::core::prefs::PrefsStore;
use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct TranslateCommand {
    /// Enable or disable automatic translation (true/false)
    #[arg(long)]
    pub auto: Option<bool>,

    /// Target language code (e.g. zh-CN, en-US)
    #[arg(long)]
    pub target: Option<String>,
}

impl TranslateCommand {
    pub fn execute(self) -> Result<()> {
        let store = PrefsStore::new()?;
        let mut prefs = store.load()?;

        if self.auto.is_none() && self.target.is_none() {
            println!("{} Translation settings", Icon::Gear);
            println!(
                "  auto-translate: {}",
                Theme::bold(prefs.translation.auto_translate)
            );
            println!(
                "  target language: {}",
                Theme::bold(&prefs.translation.target_language)
            );
            return Ok(());
        }

        if let Some(auto) = self.auto {
            prefs.translation.auto_translate = auto;
        }
        if let Some(target) = self.target {
            prefs.translation.target_language = target;
        }
        store.save(&prefs)?;

        println!(
            "{} Translation updated: auto={}, target={}",
            Icon::Check,
            Theme::bold(prefs.translation.auto_translate),
            Theme::bold(&prefs.translation.target_language)
        );
        Ok(())
    }
}
