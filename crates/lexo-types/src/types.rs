use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a query word is matched against the secondary service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    #[default]
    Exact,
    Prefix,
    Suffix,
    Contains,
    Similar,
    Random,
    WordOfTheDay,
}

impl SearchMode {
    pub const ALL: [SearchMode; 7] = [
        SearchMode::Exact,
        SearchMode::Prefix,
        SearchMode::Suffix,
        SearchMode::Contains,
        SearchMode::Similar,
        SearchMode::Random,
        SearchMode::WordOfTheDay,
    ];

    /// Random and word-of-the-day ignore the word argument entirely
    pub fn takes_word(self) -> bool {
        !matches!(self, SearchMode::Random | SearchMode::WordOfTheDay)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Exact => "exact",
            SearchMode::Prefix => "prefix",
            SearchMode::Suffix => "suffix",
            SearchMode::Contains => "contains",
            SearchMode::Similar => "similar",
            SearchMode::Random => "random",
            SearchMode::WordOfTheDay => "word-of-the-day",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown search mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for SearchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" | "normal" | "word" => Ok(SearchMode::Exact),
            "prefix" => Ok(SearchMode::Prefix),
            "suffix" => Ok(SearchMode::Suffix),
            "contains" | "infix" => Ok(SearchMode::Contains),
            "similar" | "near" => Ok(SearchMode::Similar),
            "random" => Ok(SearchMode::Random),
            "word-of-the-day" | "wotd" => Ok(SearchMode::WordOfTheDay),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// English-style entry as returned by the primary service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

fn first_sense() -> u32 {
    1
}

/// Portuguese-style entry as returned by the secondary service.
/// A word with several senses comes back as several entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryEntry {
    pub word: String,
    /// 1-based, stable within one response
    #[serde(default = "first_sense")]
    pub sense: u32,
    #[serde(default)]
    pub xml: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_class: Option<String>,
}

/// Related words for one query, only produced in similar mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimilarWordsResult {
    pub word: String,
    pub related: Vec<String>,
}

/// Item of a prefix/suffix/contains listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub word: String,
    #[serde(default = "first_sense")]
    pub sense: u32,
    #[serde(default)]
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomWord {
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    #[serde(default)]
    pub id: Option<u64>,
    pub word: String,
    #[serde(default)]
    pub xml: String,
}

/// Everything a search publishes to its subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEvent {
    Loading(bool),
    Primary(Vec<PrimaryEntry>),
    Secondary(Vec<SecondaryEntry>),
    Similar(SimilarWordsResult),
    Error(String),
}

impl ResultEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ResultEvent::Loading(_) => "loading",
            ResultEvent::Primary(_) => "primary",
            ResultEvent::Secondary(_) => "secondary",
            ResultEvent::Similar(_) => "similar",
            ResultEvent::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_aliases() {
        assert_eq!("normal".parse::<SearchMode>(), Ok(SearchMode::Exact));
        assert_eq!("infix".parse::<SearchMode>(), Ok(SearchMode::Contains));
        assert_eq!("near".parse::<SearchMode>(), Ok(SearchMode::Similar));
        assert_eq!("WOTD".parse::<SearchMode>(), Ok(SearchMode::WordOfTheDay));
        assert!("sideways".parse::<SearchMode>().is_err());
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.to_string().parse::<SearchMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_takes_word() {
        assert!(SearchMode::Similar.takes_word());
        assert!(!SearchMode::Random.takes_word());
        assert!(!SearchMode::WordOfTheDay.takes_word());
    }

    #[test]
    fn test_primary_entry_from_wire() {
        let json = r#"{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [{"text": "həˈləʊ", "audio": "https://example.org/hello.mp3"}],
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{"definition": "used as a greeting", "example": "hello there!", "synonyms": [], "antonyms": []}]
            }]
        }"#;

        let entry: PrimaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic.as_deref(), Some("həˈləʊ"));
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(entry.meanings[0].definitions[0].text, "used as a greeting");
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("hello there!")
        );
    }

    #[test]
    fn test_secondary_entry_defaults() {
        let entry: SecondaryEntry =
            serde_json::from_str(r#"{"word": "casa", "xml": "<def>moradia</def>"}"#).unwrap();
        assert_eq!(entry.sense, 1);
        assert_eq!(entry.preview, None);
        assert_eq!(entry.grammar_class, None);
    }
}
