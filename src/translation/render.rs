//! Rendering of decoded responses into terminal text.

use std::fmt::Write;

use super::{LanguageEntry, TranslationRequest, TranslationResult};

/// Renders a translation result.
///
/// Line order: source pronunciation, language-pair header, translated text,
/// target pronunciation, alternate translations. Optional parts are skipped
/// when the instance did not supply them.
pub fn render_translation(request: &TranslationRequest, result: &TranslationResult) -> String {
    let mut out = String::new();

    if let Some(pronunciation) = &result.source_pronunciation {
        let _ = writeln!(out, "[{pronunciation}]");
    }

    if request.source == "auto"
        && let Some(detected) = &result.detected_source
    {
        let _ = writeln!(out, "auto ({detected}) >> {}", request.target);
    } else {
        let _ = writeln!(out, "{} >> {}", request.source, request.target);
    }

    let _ = writeln!(out, "\n{}\n", result.translated_text);

    if let Some(pronunciation) = &result.target_pronunciation {
        let _ = writeln!(out, "[{pronunciation}]");
    }

    if !result.alternate_translations.is_empty() {
        let _ = writeln!(out, "Other translations:");
        for group in &result.alternate_translations {
            let _ = writeln!(out, "\t{}", group.part_of_speech);
            for word in &group.words {
                let _ = writeln!(out, "\t  - {word}");
            }
        }
    }

    out
}

/// Renders a language listing as a two-column code/name table, in response
/// order.
pub fn render_language_table(languages: &[LanguageEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Code\t\tName");
    let _ = writeln!(out, "--------------------");
    for language in languages {
        let _ = writeln!(out, "{}\t\t{}", language.code, language.name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::AlternateGroup;

    fn request(source: &str, target: &str, text: &str) -> TranslationRequest {
        TranslationRequest {
            source: source.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }

    fn bare_result(text: &str) -> TranslationResult {
        TranslationResult {
            translated_text: text.to_string(),
            detected_source: None,
            source_pronunciation: None,
            target_pronunciation: None,
            alternate_translations: Vec::new(),
        }
    }

    #[test]
    fn auto_source_header_shows_detected_language() {
        let mut result = bare_result("Hola");
        result.detected_source = Some("en".to_string());

        let rendered = render_translation(&request("auto", "es", "Hello"), &result);
        assert_eq!(rendered, "auto (en) >> es\n\nHola\n\n");
    }

    #[test]
    fn explicit_source_header_has_no_detection() {
        let rendered = render_translation(&request("en", "es", "Hello"), &bare_result("Hola"));
        assert_eq!(rendered, "en >> es\n\nHola\n\n");
    }

    #[test]
    fn auto_source_without_detection_falls_back_to_plain_header() {
        let rendered = render_translation(&request("auto", "es", "Hello"), &bare_result("Hola"));
        assert!(rendered.starts_with("auto >> es\n"));
    }

    #[test]
    fn pronunciations_wrap_the_translated_text() {
        let mut result = bare_result("Katze");
        result.source_pronunciation = Some("kat".to_string());
        result.target_pronunciation = Some("KAHT-tse".to_string());

        let rendered = render_translation(&request("en", "de", "cat"), &result);
        assert_eq!(rendered, "[kat]\nen >> de\n\nKatze\n\n[KAHT-tse]\n");
    }

    #[test]
    fn alternates_are_enumerated_in_order() {
        let mut result = bare_result("correr");
        result.alternate_translations = vec![
            AlternateGroup {
                part_of_speech: "verb".to_string(),
                words: vec!["correr".to_string(), "funcionar".to_string()],
            },
            AlternateGroup {
                part_of_speech: "noun".to_string(),
                words: vec!["carrera".to_string()],
            },
        ];

        let rendered = render_translation(&request("en", "es", "run"), &result);
        let expected = "en >> es\n\ncorrer\n\nOther translations:\n\
                        \tverb\n\t  - correr\n\t  - funcionar\n\
                        \tnoun\n\t  - carrera\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_alternates_render_no_section() {
        let rendered = render_translation(&request("en", "es", "Hello"), &bare_result("Hola"));
        assert!(!rendered.contains("Other translations"));
    }

    #[test]
    fn language_table_rows_are_tab_separated_and_ordered() {
        let languages = vec![
            LanguageEntry {
                code: "en".to_string(),
                name: "English".to_string(),
            },
            LanguageEntry {
                code: "es".to_string(),
                name: "Spanish".to_string(),
            },
        ];

        let rendered = render_language_table(&languages);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(
            lines,
            [
                "Code\t\tName",
                "--------------------",
                "en\t\tEnglish",
                "es\t\tSpanish",
            ]
        );
    }

    #[test]
    fn empty_language_listing_renders_only_the_header() {
        let rendered = render_language_table(&[]);
        assert_eq!(rendered.lines().count(), 2);
    }
}
