use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use toolbox_catalog::{generate, Catalog, Platform};

use crate::ui::{Icon, Theme};

#[derive(Parser, Debug)]
pub struct MirrorCommand {
    #[command(subcommand)]
    action: MirrorAction,
}

#[derive(Subcommand, Debug)]
enum MirrorAction {
    /// Show the known registry mirror presets
    List,
    /// Render a daemon.json for the chosen platform and mirror
    Config {
        /// Target operating system
        #[arg(long, default_value = "linux")]
        platform: Platform,

        /// Use a preset mirror by id (see `toolbox mirror list`)
        #[arg(long, conflicts_with = "url")]
        preset: Option<String>,

        /// Use a custom mirror URL (passed through verbatim, not validated)
        #[arg(long)]
        url: Option<String>,

        /// Write the rendered config to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

impl MirrorCommand {
    pub fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();

        match self.action {
            MirrorAction::List => {
                println!("{} Known registry mirrors:", Icon::Whale);
                for mirror in &catalog.mirrors {
                    println!(
                        "  {} {} {}",
                        Theme::secondary(&mirror.id),
                        Theme::bold(&mirror.name),
                        Theme::muted(&mirror.url)
                    );
                    if !mirror.description.is_empty() {
                        println!("      {}", Theme::muted(&mirror.description));
                    }
                }
                Ok(())
            }
            MirrorAction::Config {
                platform,
                preset,
                url,
                output,
            } => {
                let mirror_url = match (url, preset) {
                    (Some(url), _) => url,
                    (None, Some(id)) => match catalog.mirror(&id) {
                        Some(m) => m.url.to_string(),
                        None => bail!(
                            "unknown mirror preset '{}'. See `toolbox mirror list`.",
                            id
                        ),
                    },
                    (None, None) => bail!("provide a mirror with --preset <id> or --url <url>"),
                };

                let template = catalog
                    .template_for(platform)
                    .with_context(|| format!("no config template for platform '{}'", platform))?;

                let bindings = HashMap::from([("MIRROR_URL".to_string(), mirror_url)]);
                let rendered = generate(template, &bindings);

                match output {
                    Some(path) => {
                        std::fs::write(&path, &rendered)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        println!(
                            "{} Wrote {} for {}.",
                            Icon::File,
                            Theme::primary(path.display()),
                            Theme::bold(platform)
                        );
                    }
                    None => print!("{}", rendered),
                }

                if !template.description.is_empty() {
                    eprintln!("{}", Theme::muted(&template.description));
                }
                eprintln!(
                    "{}",
                    Theme::muted("验证: docker info 查看 Registry Mirrors 是否生效")
                );
                Ok(())
            }
        }
    }
}
