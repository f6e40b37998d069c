//! Synonym replacement against a hand-built embedding space

use queryaug_core::lexical::{is_substitutable, synonym_replace};
use queryaug_core::{Pipeline, Result, Token, VariantType};
use std::collections::{BTreeSet, HashMap};

/// Whitespace tokenizer with fixed tags and a scripted neighbour table.
///
/// Each vocabulary word embeds to a one-hot marker of its index; `nearest`
/// answers from `neighbours` instead of doing any geometry.
struct StubPipeline {
    vocab: Vec<&'static str>,
    tags: HashMap<&'static str, &'static str>,
    lemmas: HashMap<&'static str, &'static str>,
    neighbours: HashMap<&'static str, Vec<&'static str>>,
}

impl StubPipeline {
    fn christmas() -> Self {
        let vocab = vec!["best", "Best", "most", "great", "good", "for", "gift", "kid"];
        let tags = HashMap::from([
            ("best", "JJS"),
            ("christmas", "NNP"),
            ("gifts", "NNS"),
            ("for", "IN"),
            ("kids", "NNS"),
        ]);
        let lemmas = HashMap::from([("gifts", "gift"), ("kids", "kid")]);
        let neighbours = HashMap::from([
            ("best", vec!["Best", "most", "great", "good"]),
            ("for", vec!["for"]),
        ]);
        Self {
            vocab,
            tags,
            lemmas,
            neighbours,
        }
    }

    fn index_of(&self, word: &str) -> Option<usize> {
        self.vocab.iter().position(|w| *w == word)
    }
}

impl Pipeline for StubPipeline {
    fn lang(&self) -> &str {
        "en"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        Ok(text
            .split_whitespace()
            .map(|w| {
                let lemma = self.lemmas.get(w).copied().unwrap_or(w).to_lowercase();
                let tag = self.tags.get(w).copied().unwrap_or("NN");
                Token::new(w, lemma, tag)
            })
            .collect())
    }

    fn embed(&self, token_text: &str) -> Option<Vec<f32>> {
        if !self.neighbours.contains_key(token_text) {
            return None;
        }
        self.index_of(token_text).map(|i| vec![i as f32])
    }

    fn nearest(&self, vectors: &[Vec<f32>], k: usize) -> Vec<Vec<(usize, f32)>> {
        vectors
            .iter()
            .map(|v| {
                let word = self.vocab[v[0] as usize];
                self.neighbours[word]
                    .iter()
                    .take(k)
                    .filter_map(|n| self.index_of(n))
                    .map(|i| (i, 1.0))
                    .collect()
            })
            .collect()
    }

    fn word(&self, index: usize) -> Option<&str> {
        self.vocab.get(index).copied()
    }
}

const INPUT: &str = "best christmas gifts for kids";

#[test]
fn test_christmas_scenario_yields_three_variants() {
    let pipeline = StubPipeline::christmas();
    let variants = synonym_replace(&pipeline, "en", INPUT, 4).unwrap();

    assert_eq!(variants.len(), 3);

    let texts: BTreeSet<&str> = variants.iter().map(|v| v.text.as_str()).collect();
    let expected: BTreeSet<&str> = [
        "most christmas gifts for kids",
        "great christmas gifts for kids",
        "good christmas gifts for kids",
    ]
    .into_iter()
    .collect();
    assert_eq!(texts, expected);

    for v in &variants {
        assert_eq!(v.variant_type, VariantType::SynRepl);
        assert_eq!(v.lang, "en");
    }
}

#[test]
fn test_replaced_positions_pass_pos_filter() {
    let pipeline = StubPipeline::christmas();
    let original: Vec<&str> = INPUT.split_whitespace().collect();
    let tokens = pipeline.tokenize(INPUT).unwrap();

    for variant in synonym_replace(&pipeline, "en", INPUT, 4).unwrap() {
        assert_ne!(variant.text, INPUT);

        let words: Vec<&str> = variant.text.split_whitespace().collect();
        assert_eq!(words.len(), original.len());
        let changed: Vec<usize> = (0..words.len())
            .filter(|&i| words[i] != original[i])
            .collect();
        assert_eq!(changed.len(), 1);
        assert!(is_substitutable(&tokens[changed[0]].tag));
    }
}

#[test]
fn test_blocked_tag_produces_nothing() {
    let mut pipeline = StubPipeline::christmas();
    pipeline.tags.insert("best", "CD");
    let variants = synonym_replace(&pipeline, "en", INPUT, 4).unwrap();
    assert!(variants.is_empty());
}

#[test]
fn test_neighbour_count_limits_candidates() {
    let pipeline = StubPipeline::christmas();
    // "Best" lowercases to the token itself, leaving only "most"
    let variants = synonym_replace(&pipeline, "en", INPUT, 2).unwrap();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].text, "most christmas gifts for kids");
}
