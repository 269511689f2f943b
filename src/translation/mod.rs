mod client;
mod render;

pub use client::{
    AlternateGroup, Direction, LanguageEntry, LingvaClient, TranslationRequest, TranslationResult,
};
pub use render::{render_language_table, render_translation};
