use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(name = "lingva")]
#[command(about = "CLI client for Lingva Translate, a Google Translate front-end")]
#[command(version)]
#[command(group(
    ArgGroup::new("listing")
        .args(["list_source_languages", "list_target_languages"])
        .conflicts_with("translation")
))]
#[command(group(
    ArgGroup::new("translation")
        .args(["source_language", "target_language", "input_file", "output_file", "text"])
        .multiple(true)
))]
pub struct Args {
    /// List available source languages and their codes
    #[arg(short = 'l', long)]
    pub list_source_languages: bool,

    /// List available target languages and their codes
    #[arg(short = 'L', long)]
    pub list_target_languages: bool,

    /// Source language code ("auto" lets the instance detect it)
    #[arg(short = 's', long, value_name = "CODE")]
    pub source_language: Option<String>,

    /// Target language code
    #[arg(short = 't', long, value_name = "CODE")]
    pub target_language: Option<String>,

    /// Read the text to translate from a file
    #[arg(short = 'i', long, value_name = "FILE", conflicts_with = "text")]
    pub input_file: Option<PathBuf>,

    /// Write the translated text to a file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Settings file (defaults to config.json next to the executable)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text to translate (reads stdin or prompts if omitted)
    pub text: Option<String>,
}

/// The requested mode, resolved once from the parsed arguments. Invalid
/// flag combinations are rejected by clap before this is built.
#[derive(Debug)]
pub enum Mode {
    ListSource,
    ListTarget,
    Translate(TranslateOptions),
}

/// Arguments relevant to a translation run.
#[derive(Debug, Default)]
pub struct TranslateOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub text: Option<String>,
}

impl Args {
    pub fn into_mode(self) -> Mode {
        if self.list_source_languages {
            Mode::ListSource
        } else if self.list_target_languages {
            Mode::ListTarget
        } else {
            Mode::Translate(TranslateOptions {
                source: self.source_language,
                target: self.target_language,
                input_file: self.input_file,
                output_file: self.output_file,
                text: self.text,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("lingva").chain(args.iter().copied()))
    }

    #[test]
    fn listing_flags_are_mutually_exclusive() {
        assert!(parse(&["-l", "-L"]).is_err());
    }

    #[test]
    fn listing_conflicts_with_translation_options() {
        assert!(parse(&["-l", "-t", "es"]).is_err());
        assert!(parse(&["-L", "hello"]).is_err());
        assert!(parse(&["-l", "-i", "input.txt"]).is_err());
    }

    #[test]
    fn input_file_conflicts_with_positional_text() {
        assert!(parse(&["-i", "input.txt", "hello"]).is_err());
    }

    #[test]
    fn listing_allows_config_override() {
        let args = parse(&["-l", "-c", "other.json"]).unwrap();
        assert!(matches!(args.into_mode(), Mode::ListSource));
    }

    #[test]
    fn bare_invocation_translates_from_stdin() {
        let args = parse(&[]).unwrap();
        let Mode::Translate(options) = args.into_mode() else {
            panic!("expected translate mode");
        };
        assert_eq!(options.text, None);
        assert_eq!(options.input_file, None);
    }

    #[test]
    fn translate_mode_carries_all_options() {
        let args = parse(&["-s", "en", "-t", "es", "-o", "out.txt", "hello"]).unwrap();
        let Mode::Translate(options) = args.into_mode() else {
            panic!("expected translate mode");
        };
        assert_eq!(options.source.as_deref(), Some("en"));
        assert_eq!(options.target.as_deref(), Some("es"));
        assert_eq!(options.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(options.text.as_deref(), Some("hello"));
    }

    #[test]
    fn capital_l_lists_target_languages() {
        let args = parse(&["-L"]).unwrap();
        assert!(matches!(args.into_mode(), Mode::ListTarget));
    }
}
