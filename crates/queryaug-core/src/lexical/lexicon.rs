//! Lemma and part-of-speech lexicon

use crate::error::{AugmentError, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct LexEntry {
    lemma: String,
    tag: String,
}

/// Lookup table from surface form to lemma and tag
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, LexEntry>,
    default_tag: String,
}

impl Lexicon {
    /// Empty lexicon; every word falls back to heuristics
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            default_tag: default_tag.into(),
        }
    }

    /// Load a TSV lexicon file
    pub fn load(path: &Path, default_tag: impl Into<String>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, default_tag)
    }

    /// Parse `form<TAB>lemma[<TAB>tag]` lines; `#` starts a comment line
    pub fn parse(content: &str, default_tag: impl Into<String>) -> Result<Self> {
        let mut lexicon = Self::new(default_tag);

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            match fields.as_slice() {
                [form, lemma] => {
                    let tag = lexicon.default_tag.clone();
                    lexicon.insert(*form, *lemma, tag);
                }
                [form, lemma, tag, ..] => lexicon.insert(*form, *lemma, *tag),
                _ => {
                    return Err(AugmentError::InvalidInput(format!(
                        "lexicon line {}: expected form<TAB>lemma<TAB>tag",
                        line_no + 1
                    )))
                }
            }
        }

        Ok(lexicon)
    }

    pub fn insert(&mut self, form: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) {
        self.entries.insert(
            form.into(),
            LexEntry {
                lemma: lemma.into(),
                tag: tag.into(),
            },
        );
    }

    /// Lemma and tag for a surface form.
    ///
    /// Exact form first, then its lowercase. Unknown words lemmatize to
    /// their lowercase form and get a tag guessed from their characters.
    pub fn analyze(&self, form: &str) -> (String, String) {
        let lower = form.to_lowercase();
        if let Some(entry) = self.entries.get(form).or_else(|| self.entries.get(&lower)) {
            return (entry.lemma.clone(), entry.tag.clone());
        }
        let tag = guess_tag(form).unwrap_or(self.default_tag.as_str()).to_string();
        (lower, tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn guess_tag(form: &str) -> Option<&'static str> {
    if form.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
        && form.chars().any(char::is_numeric)
    {
        Some("CD")
    } else if form.chars().all(is_punctuation) {
        Some("PUNCT")
    } else if !form.chars().any(char::is_alphanumeric) {
        Some("SYM")
    } else {
        None
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '«' | '»' | '“' | '”' | '‘' | '’' | '…' | '¿' | '¡' | '、' | '。' | '，' | '！' | '？'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_analyze() {
        let lexicon = Lexicon::parse(
            "# english\ngifts\tgift\tNNS\nfor\tfor\tIN\nbest\tgood\tJJS\nkids\tkid\n",
            "NN",
        )
        .unwrap();
        assert_eq!(lexicon.len(), 4);
        assert_eq!(lexicon.analyze("gifts"), ("gift".to_string(), "NNS".to_string()));
        assert_eq!(lexicon.analyze("For"), ("for".to_string(), "IN".to_string()));
        assert_eq!(lexicon.analyze("kids"), ("kid".to_string(), "NN".to_string()));
    }

    #[test]
    fn test_unknown_word_fallbacks() {
        let lexicon = Lexicon::new("NN");
        assert_eq!(lexicon.analyze("Toys"), ("toys".to_string(), "NN".to_string()));
        assert_eq!(lexicon.analyze("2024").1, "CD");
        assert_eq!(lexicon.analyze("?").1, "PUNCT");
        assert_eq!(lexicon.analyze("€").1, "SYM");
    }

    #[test]
    fn test_parse_rejects_single_column() {
        assert!(Lexicon::parse("lonely\n", "NN").is_err());
    }
}
