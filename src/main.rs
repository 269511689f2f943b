use std::process;

use clap::Parser;

use lingva_cli::cli::commands::{languages, translate};
use lingva_cli::cli::{Args, Mode};
use lingva_cli::config::Config;
use lingva_cli::translation::Direction;
use lingva_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{} {err}", Style::error("Error:"));
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    match args.into_mode() {
        Mode::ListSource => languages::run_languages(&config, Direction::Source).await,
        Mode::ListTarget => languages::run_languages(&config, Direction::Target).await,
        Mode::Translate(options) => translate::run_translate(&config, options).await,
    }
}
