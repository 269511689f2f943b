use std::io::{self, Write};

use anyhow::Result;

use crate::config::Config;
use crate::translation::{Direction, LingvaClient, render_language_table};
use crate::ui::Spinner;

/// Fetches and prints the language codes the instance accepts for one side
/// of a translation.
pub async fn run_languages(config: &Config, direction: Direction) -> Result<()> {
    let client = LingvaClient::new(&config.instance);

    let spinner = Spinner::new("Fetching languages...");
    let languages = client.languages(direction).await;
    spinner.stop();
    let languages = languages?;

    print!("{}", render_language_table(&languages));
    io::stdout().flush()?;

    Ok(())
}
