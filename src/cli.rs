use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::engine::GameEngine;
use crate::core::words::WordBank;
use crate::ui::App;

#[derive(Parser)]
#[command(name = "gallows")]
#[command(about = "🎩 Single-player hangman for the terminal")]
#[command(version)]
pub struct Cli {
    /// Seed the word picker for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in word categories
    Categories,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Categories) => {
            let bank = WordBank::builtin();
            println!("🎮 Word categories:");
            println!();
            for category in bank.categories() {
                println!("📦 {} ({} words)", category.name, category.words.len());
            }
            Ok(())
        }
        None => play(cli.seed).await,
    }
}

async fn play(seed: Option<u64>) -> Result<()> {
    let bank = WordBank::builtin();
    let engine = match seed {
        Some(seed) => GameEngine::seeded(bank, seed),
        None => GameEngine::new(bank),
    };

    let terminal = ratatui::init();
    let result = App::new(engine).run(terminal).await;
    ratatui::restore();
    result
}
