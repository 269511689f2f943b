use std::io::{self, Write};

use anyhow::Result;

use crate::cli::args::TranslateOptions;
use crate::config::Config;
use crate::fs;
use crate::input::{InputReader, TextSource};
use crate::translation::{LingvaClient, TranslationRequest, render_translation};
use crate::ui::Spinner;

/// Runs a translation: resolve the input text, query the instance, print
/// the rendered result, and optionally persist the translated text.
pub async fn run_translate(config: &Config, options: TranslateOptions) -> Result<()> {
    let TranslateOptions {
        source,
        target,
        input_file,
        output_file,
        text,
    } = options;

    let text_source = match (input_file, text) {
        (Some(path), _) => TextSource::File(path),
        (None, Some(text)) => TextSource::Inline(text),
        (None, None) => TextSource::Stdin,
    };
    let text = InputReader::resolve(&text_source)?;

    let request = TranslationRequest {
        source: source.unwrap_or_else(|| config.default_source_language.clone()),
        target: target.unwrap_or_else(|| config.default_target_language.clone()),
        text,
    };

    let client = LingvaClient::new(&config.instance);

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();
    let result = result?;

    print!("{}", render_translation(&request, &result));
    io::stdout().flush()?;

    if let Some(path) = output_file {
        let mut content = result.translated_text;
        content.push('\n');
        fs::write_output(&path, &content)?;
    }

    Ok(())
}
