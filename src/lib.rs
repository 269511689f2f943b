//! # lingva - Lingva Translate CLI client
//!
//! `lingva` is a command-line client for [Lingva Translate] instances, an
//! alternative front-end to Google Translate. It translates text taken from
//! an argument, a file, standard input, or an interactive prompt, and can
//! list the language codes an instance accepts.
//!
//! [Lingva Translate]: https://github.com/thedaviddelta/lingva-translate
//!
//! ## Quick start
//!
//! ```bash
//! # Translate a string using the configured defaults
//! lingva "good morning"
//!
//! # Pick the language pair explicitly
//! lingva -s en -t es "good morning"
//!
//! # Translate a file and keep the result
//! lingva -i notes.txt -o notes.es.txt
//!
//! # List the codes the instance accepts
//! lingva --list-source-languages
//! ```
//!
//! ## Configuration
//!
//! Settings live in a `config.json` next to the executable (override with
//! `-c/--config`):
//!
//! ```json
//! {
//!     "instance": "https://lingva.ml",
//!     "default_source_language": "auto",
//!     "default_target_language": "en"
//! }
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading.
pub mod config;

/// Closed error kinds, one enumeration per operation.
pub mod error;

/// File output adapter.
pub mod fs;

/// Input reading from arguments, files, stdin, and the interactive prompt.
pub mod input;

/// Lingva API client and response rendering.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
