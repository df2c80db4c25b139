//! Reshapes secondary-service payloads into uniform [`SecondaryEntry`] records.

use std::sync::LazyLock;

use lexo_types::{ListItem, SearchMode, SecondaryEntry, WordOfTheDay};
use regex::Regex;

static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<def>(.*?)</def>").expect("definition pattern"));

static GRAMMAR_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<gramGrp>(.*?)</gramGrp>").expect("grammar group pattern"));

/// Human-readable parts of a markup fragment. Missing tags give empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupFields {
    pub definition: String,
    pub grammar_class: String,
}

/// Pull the first `<def>` and `<gramGrp>` out of a markup fragment
pub fn extract_fields(markup: &str) -> MarkupFields {
    let definition = first_capture(&DEFINITION, markup)
        .map(|def| collapse_newlines(def.trim()))
        .unwrap_or_default();

    let grammar_class = first_capture(&GRAMMAR_GROUP, markup)
        .map(|class| class.trim().to_string())
        .unwrap_or_default();

    MarkupFields {
        definition,
        grammar_class,
    }
}

/// Wrap prefix/suffix/contains listing items so they render like real entries.
/// The preview goes into the synthesized markup verbatim.
pub fn normalize_list_result(mode: SearchMode, items: Vec<ListItem>) -> Vec<SecondaryEntry> {
    tracing::debug!("Normalizing {} {} results", items.len(), mode);

    items
        .into_iter()
        .map(|item| SecondaryEntry {
            xml: format!("<def>{}</def>", item.preview),
            word: item.word,
            sense: item.sense,
            preview: Some(item.preview),
            grammar_class: None,
        })
        .collect()
}

/// Word of the day always has exactly one sense
pub fn daily_entry(record: WordOfTheDay) -> SecondaryEntry {
    let fields = extract_fields(&record.xml);
    tracing::debug!("Word of the day: {} (id {:?})", record.word, record.id);

    SecondaryEntry {
        word: record.word,
        sense: 1,
        xml: record.xml,
        preview: None,
        grammar_class: Some(fields.grammar_class).filter(|class| !class.is_empty()),
    }
}

fn first_capture<'a>(pattern: &Regex, markup: &'a str) -> Option<&'a str> {
    pattern
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_both_fields() {
        let fields = extract_fields("<gramGrp>noun</gramGrp><def>a thing</def>");
        assert_eq!(fields.definition, "a thing");
        assert_eq!(fields.grammar_class, "noun");
    }

    #[test]
    fn test_missing_definition_is_empty() {
        let fields = extract_fields("<gramGrp>adj.</gramGrp><etym>lat.</etym>");
        assert_eq!(fields.definition, "");
        assert_eq!(fields.grammar_class, "adj.");
    }

    #[test]
    fn test_no_tags_at_all() {
        assert_eq!(extract_fields(""), MarkupFields::default());
        assert_eq!(extract_fields("plain text"), MarkupFields::default());
    }

    #[test]
    fn test_multiline_definition_collapsed_and_trimmed() {
        let markup = "<entry>\n<def>\n  Edifício destinado\nà habitação\n</def>\n</entry>";
        assert_eq!(extract_fields(markup).definition, "Edifício destinado à habitação");
    }

    #[test]
    fn test_crlf_collapses_to_one_space() {
        let markup = "<def>primeira\r\nsegunda</def>";
        assert_eq!(extract_fields(markup).definition, "primeira segunda");
    }

    #[test]
    fn test_first_definition_wins() {
        let markup = "<def>um</def><def>dois</def>";
        assert_eq!(extract_fields(markup).definition, "um");
    }

    #[test]
    fn test_grammar_group_spans_lines() {
        let markup = "<gramGrp>\n  s. f.\n</gramGrp>";
        assert_eq!(extract_fields(markup).grammar_class, "s. f.");
    }

    #[test]
    fn test_listing_preview_round_trips_through_markup() {
        let entries = normalize_list_result(
            SearchMode::Prefix,
            vec![ListItem {
                word: "cat".to_string(),
                sense: 1,
                preview: "cat-like".to_string(),
            }],
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[0].sense, 1);
        assert_eq!(entries[0].preview.as_deref(), Some("cat-like"));
        assert_eq!(extract_fields(&entries[0].xml).definition, "cat-like");
    }

    #[test]
    fn test_listing_keeps_order_and_senses() {
        let items = vec![
            ListItem {
                word: "casa".to_string(),
                sense: 1,
                preview: "moradia".to_string(),
            },
            ListItem {
                word: "casa".to_string(),
                sense: 2,
                preview: "abertura para botão".to_string(),
            },
        ];

        let entries = normalize_list_result(SearchMode::Contains, items);
        let senses: Vec<u32> = entries.iter().map(|e| e.sense).collect();
        assert_eq!(senses, vec![1, 2]);
        assert_eq!(entries[1].xml, "<def>abertura para botão</def>");
    }

    #[test]
    fn test_daily_entry() {
        let entry = daily_entry(WordOfTheDay {
            id: Some(42),
            word: "saudade".to_string(),
            xml: "<gramGrp>f.</gramGrp><def>Lembrança grata</def>".to_string(),
        });

        assert_eq!(entry.sense, 1);
        assert_eq!(entry.word, "saudade");
        assert_eq!(entry.grammar_class.as_deref(), Some("f."));
        assert!(entry.xml.contains("Lembrança grata"));
    }

    #[test]
    fn test_daily_entry_without_grammar() {
        let entry = daily_entry(WordOfTheDay {
            id: None,
            word: "sol".to_string(),
            xml: "<def>Astro</def>".to_string(),
        });
        assert_eq!(entry.grammar_class, None);
    }
}
