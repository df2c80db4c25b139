use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default query normalization: trimmed, NFC, lower-case
    fn process(&self, word: &str) -> String {
        let word = word.trim();

        if word.is_empty() {
            return String::new();
        }

        // Composed form so "c\u{327}" and "ç" hit the same path
        word.nfc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(DefaultPreprocessor.process("  Casa \n"), "casa");
    }

    #[test]
    fn test_composes_accents() {
        let decomposed = "Ac\u{327}a\u{303}o";
        assert_eq!(DefaultPreprocessor.process(decomposed), "ação");
    }

    #[test]
    fn test_blank() {
        assert_eq!(DefaultPreprocessor.process(" \t "), "");
    }
}
