use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use hava_core::Config;

use crate::screen;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "hava", version, about = "Hava Durumu — city weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store your own weatherapi.com API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            // No subcommand: open the search screen.
            None => screen::run().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Text::new("weatherapi.com API key:")
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if key.is_empty() {
        bail!("API key cannot be empty");
    }

    config.set_api_key(key.to_string());
    config.save()?;

    println!("Kaydedildi: {}", Config::config_file_path()?.display());

    Ok(())
}
