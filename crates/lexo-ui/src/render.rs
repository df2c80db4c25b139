//! Text rendering of the view: one card per entry plus the related-words panel.

use std::fmt::{self, Write};

use lexo_config::ui::UiConfig;
use lexo_core::normalizer::extract_fields;
use lexo_types::{PrimaryEntry, SearchMode, SecondaryEntry};

use crate::state::ViewState;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to format view: {0}")]
    Format(#[from] fmt::Error),
}

pub const SEARCHING: &str = "Searching...";

pub fn render(state: &ViewState, config: &UiConfig) -> Result<String, RenderError> {
    let mut out = String::new();

    if let Some(notice) = &state.notice {
        writeln!(out, "! {notice}")?;
        writeln!(out, "  Type :reload to start over.")?;
        writeln!(out)?;
    }

    if let Some(similar) = state.similar_panel() {
        title(&mut out, &similar.word, "PT")?;
        writeln!(out, "Related words: {}", similar.related.join(", "))?;
        writeln!(out)?;
    }

    for entry in &state.secondary {
        let related = if config.show_related_words && state.mode != SearchMode::Similar {
            state.related_for(&entry.word)
        } else {
            None
        };
        secondary_card(&mut out, entry, related)?;
    }

    for entry in &state.primary {
        primary_card(&mut out, entry)?;
    }

    if state.is_empty() && state.notice.is_none() {
        if state.word.is_empty() {
            writeln!(out, "No results.")?;
        } else {
            writeln!(out, "No results for '{}'.", state.word)?;
        }
    }

    Ok(out)
}

fn title(out: &mut String, word: &str, language: &str) -> fmt::Result {
    writeln!(out, "── {word} [{language}] ──")
}

fn secondary_card(
    out: &mut String,
    entry: &SecondaryEntry,
    related: Option<&[String]>,
) -> fmt::Result {
    let fields = extract_fields(&entry.xml);
    let grammar_class = entry
        .grammar_class
        .as_deref()
        .unwrap_or(fields.grammar_class.as_str());
    let definition = entry.preview.as_deref().unwrap_or(fields.definition.as_str());

    title(out, &entry.word, "PT")?;
    if !grammar_class.is_empty() {
        writeln!(out, "{grammar_class}")?;
    }
    writeln!(out, "Definition {}: {}", entry.sense, definition)?;

    if let Some(related) = related {
        writeln!(out, "Related words: {}", related.join(", "))?;
    }

    writeln!(out)
}

fn primary_card(out: &mut String, entry: &PrimaryEntry) -> fmt::Result {
    title(out, &entry.word, "EN")?;

    let phonetic = entry
        .phonetic
        .as_deref()
        .or_else(|| entry.phonetics.iter().find_map(|p| p.text.as_deref()));
    if let Some(phonetic) = phonetic {
        writeln!(out, "Phonetic: {phonetic}")?;
    }

    for meaning in &entry.meanings {
        writeln!(out, "{}", meaning.part_of_speech)?;
        for (i, definition) in meaning.definitions.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, definition.text)?;
            if let Some(example) = &definition.example {
                writeln!(out, "     Example: \"{example}\"")?;
            }
        }
    }

    writeln!(out)
}

#[cfg(test)]
mod tests {
    use lexo_types::{Definition, Meaning, Phonetic, ResultEvent, SimilarWordsResult};

    use super::*;

    fn pt(word: &str, sense: u32, xml: &str) -> SecondaryEntry {
        SecondaryEntry {
            word: word.to_string(),
            sense,
            xml: xml.to_string(),
            preview: None,
            grammar_class: None,
        }
    }

    fn settled(mode: SearchMode, word: &str, events: Vec<ResultEvent>) -> ViewState {
        let mut state = ViewState::new(mode);
        state.word = word.to_string();
        for event in events {
            state.apply(event);
        }
        state
    }

    #[test]
    fn test_secondary_card_uses_markup() {
        let state = settled(
            SearchMode::Exact,
            "casa",
            vec![ResultEvent::Secondary(vec![pt(
                "casa",
                2,
                "<gramGrp>f.</gramGrp><def>Moradia\nfamiliar</def>",
            )])],
        );

        let view = render(&state, &UiConfig::default()).unwrap();
        assert_eq!(view, "── casa [PT] ──\nf.\nDefinition 2: Moradia familiar\n\n");
    }

    #[test]
    fn test_preview_wins_over_markup() {
        let mut entry = pt("cat", 1, "<def>ignored</def>");
        entry.preview = Some("cat-like".to_string());
        let state = settled(SearchMode::Prefix, "cat", vec![ResultEvent::Secondary(vec![entry])]);

        let view = render(&state, &UiConfig::default()).unwrap();
        assert!(view.contains("Definition 1: cat-like"));
        assert!(!view.contains("ignored"));
    }

    #[test]
    fn test_similar_panel() {
        let state = settled(
            SearchMode::Similar,
            "casa",
            vec![
                ResultEvent::Similar(SimilarWordsResult {
                    word: "casa".to_string(),
                    related: vec!["caso".to_string(), "cama".to_string()],
                }),
                ResultEvent::Secondary(vec![]),
                ResultEvent::Primary(vec![]),
            ],
        );

        let view = render(&state, &UiConfig::default()).unwrap();
        assert_eq!(view, "── casa [PT] ──\nRelated words: caso, cama\n\n");
    }

    #[test]
    fn test_similar_panel_for_capitalised_query() {
        let mut state = ViewState::new(SearchMode::Similar);
        state.begin(&crate::input::SearchRequest::new("Casa", SearchMode::Similar).unwrap());
        for event in [
            ResultEvent::Loading(true),
            ResultEvent::Similar(SimilarWordsResult {
                word: "casa".to_string(),
                related: vec!["caso".to_string(), "cama".to_string()],
            }),
            ResultEvent::Secondary(vec![]),
            ResultEvent::Primary(vec![]),
            ResultEvent::Loading(false),
        ] {
            state.apply(event);
        }

        let view = render(&state, &UiConfig::default()).unwrap();
        assert_eq!(view, "── casa [PT] ──\nRelated words: caso, cama\n\n");
    }

    #[test]
    fn test_no_results_after_similar_search() {
        let mut state = settled(
            SearchMode::Similar,
            "casa",
            vec![ResultEvent::Similar(SimilarWordsResult {
                word: "casa".to_string(),
                related: vec!["caso".to_string()],
            })],
        );
        state.begin(&crate::input::SearchRequest::new("xyzzy", SearchMode::Exact).unwrap());
        state.apply(ResultEvent::Secondary(vec![]));
        state.apply(ResultEvent::Primary(vec![]));

        let view = render(&state, &UiConfig::default()).unwrap();
        assert_eq!(view, "No results for 'xyzzy'.\n");
    }

    #[test]
    fn test_related_words_under_matching_card() {
        let mut state = settled(
            SearchMode::Similar,
            "casa",
            vec![ResultEvent::Similar(SimilarWordsResult {
                word: "casa".to_string(),
                related: vec!["caso".to_string()],
            })],
        );
        state.select_mode(SearchMode::Exact);
        state.apply(ResultEvent::Secondary(vec![pt("casa", 1, "<def>Moradia</def>")]));

        let view = render(&state, &UiConfig::default()).unwrap();
        assert!(view.contains("Related words: caso"));

        let hidden = UiConfig {
            show_related_words: false,
            ..UiConfig::default()
        };
        assert!(!render(&state, &hidden).unwrap().contains("Related words"));
    }

    #[test]
    fn test_primary_card() {
        let entry = PrimaryEntry {
            word: "hello".to_string(),
            phonetic: None,
            phonetics: vec![Phonetic {
                text: Some("/həˈləʊ/".to_string()),
                audio: None,
            }],
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![
                    Definition {
                        text: "\"Hello!\" or an equivalent greeting.".to_string(),
                        example: None,
                        ..Default::default()
                    },
                    Definition {
                        text: "A greeting.".to_string(),
                        example: Some("She gave me a warm hello.".to_string()),
                        ..Default::default()
                    },
                ],
            }],
            ..Default::default()
        };
        let state = settled(SearchMode::Exact, "hello", vec![ResultEvent::Primary(vec![entry])]);

        let view = render(&state, &UiConfig::default()).unwrap();
        assert!(view.starts_with("── hello [EN] ──\nPhonetic: /həˈləʊ/\nnoun\n"));
        assert!(view.contains("  2. A greeting.\n     Example: \"She gave me a warm hello.\"\n"));
    }

    #[test]
    fn test_empty_and_notice() {
        let state = settled(SearchMode::Exact, "xyzzy", vec![]);
        assert_eq!(render(&state, &UiConfig::default()).unwrap(), "No results for 'xyzzy'.\n");

        let state = settled(
            SearchMode::Exact,
            "casa",
            vec![ResultEvent::Error("Search aborted: boom".to_string())],
        );
        let view = render(&state, &UiConfig::default()).unwrap();
        assert!(view.starts_with("! Search aborted: boom\n"));
        assert!(!view.contains("No results"));
    }
}
