use serde::{Deserialize, Serialize};

fn default_show_related_words() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Append related words from the last similar search to matching cards
    #[serde(default = "default_show_related_words")]
    pub show_related_words: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_related_words: default_show_related_words(),
            prompt: default_prompt(),
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
