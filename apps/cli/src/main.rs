mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toolbox")]
#[command(version)]
#[command(about = "Your developer tools directory, in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tool catalog
    List(commands::list::ListCommand),
    /// Search tools by name, description or category
    Search(commands::search::SearchCommand),
    /// Open a tool in the browser and record its usage
    Open(commands::open::OpenCommand),
    /// Manage favorite tools
    Favorite(commands::favorite::FavoriteCommand),
    /// Show recently used tools and usage stats
    Recent(commands::recent::RecentCommand),
    /// Inspect or change layout settings
    Layout(commands::layout::LayoutCommand),
    /// Inspect or reset the local preference store
    Storage(commands::storage::StorageCommand),
    /// Inspect or change translation settings
    Translate(commands::translate::TranslateCommand),
    /// Docker registry mirror helpers
    Mirror(commands::mirror::MirrorCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(cmd) => cmd.execute(),
        Commands::Search(cmd) => cmd.execute(),
        Commands::Open(cmd) => cmd.execute(),
        Commands::Favorite(cmd) => cmd.execute(),
        Commands::Recent(cmd) => cmd.execute(),
        Commands::Layout(cmd) => cmd.execute(),
        Commands::Storage(cmd) => cmd.execute(),
        Commands::Translate(cmd) => cmd.execute(),
        Commands::Mirror(cmd) => cmd.execute(),
    }
}
