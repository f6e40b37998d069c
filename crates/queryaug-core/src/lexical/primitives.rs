//! Lemmatization and synonym replacement over a [`Pipeline`]

use super::Pipeline;
use crate::error::Result;
use crate::query::{VariantElement, VariantType};
use lazy_static::lazy_static;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Default number of neighbours requested per token
pub const DEFAULT_NEIGHBORS: usize = 4;

lazy_static! {
    /// Tags whose tokens may be substituted: determiners, conjunctions,
    /// prepositions, adjectives, nouns, pronouns, adverbs, interjections, verbs.
    static ref SUBSTITUTABLE_TAGS: HashSet<&'static str> = [
        // Penn Treebank
        "DT", "PDT", "WDT", "CC", "IN", "JJ", "JJR", "JJS", "NN", "NNS", "NNP", "NNPS",
        "PRP", "PRP$", "WP", "WP$", "RB", "RBR", "RBS", "WRB", "UH",
        "VB", "VBD", "VBG", "VBN", "VBP", "VBZ",
        // Universal Dependencies
        "DET", "CCONJ", "SCONJ", "CONJ", "ADP", "ADJ", "NOUN", "PROPN", "PRON", "ADV",
        "INTJ", "VERB",
    ]
    .into_iter()
    .collect();
}

/// Whether a token with this tag may be replaced by a synonym
pub fn is_substitutable(tag: &str) -> bool {
    SUBSTITUTABLE_TAGS.contains(tag)
}

/// Separator between words: empty for scripts written without spaces
pub fn word_joiner(lang: &str) -> &'static str {
    let lang = lang.to_lowercase();
    let primary = lang.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
    match primary {
        "zh" | "ja" | "ko" | "chinese" | "japanese" | "korean" => "",
        _ => " ",
    }
}

/// Lemmatize `text`, yielding exactly one LEMMA variant
pub fn lemmatize(pipeline: &dyn Pipeline, lang: &str, text: &str) -> Result<Vec<VariantElement>> {
    let lemmas: Vec<String> = pipeline
        .tokenize(text)?
        .into_iter()
        .map(|t| t.lemma)
        .collect();

    Ok(vec![VariantElement::new(
        lemmas.join(word_joiner(lang)),
        lang,
        VariantType::Lemma,
    )])
}

/// Raw nearest-neighbour words (lowercased) for each embeddable token.
///
/// Tokens without a vector are absent from the result.
pub fn similar_of(
    pipeline: &dyn Pipeline,
    tokens: &BTreeSet<String>,
    k: usize,
) -> BTreeMap<String, BTreeSet<String>> {
    let (words, vectors): (Vec<&String>, Vec<Vec<f32>>) = tokens
        .iter()
        .filter_map(|t| pipeline.embed(t).map(|v| (t, v)))
        .unzip();

    if vectors.is_empty() {
        return BTreeMap::new();
    }

    words
        .into_iter()
        .zip(pipeline.nearest(&vectors, k))
        .map(|(word, neighbours)| {
            let similar = neighbours
                .into_iter()
                .filter_map(|(idx, _score)| pipeline.word(idx))
                .map(str::to_lowercase)
                .collect();
            (word.clone(), similar)
        })
        .collect()
}

/// Lemmatize and dedup neighbours, dropping those that lemmatize back to `token`
fn clean_neighbours(
    pipeline: &dyn Pipeline,
    token: &str,
    neighbours: &BTreeSet<String>,
) -> Result<BTreeSet<String>> {
    if neighbours.is_empty() {
        return Ok(BTreeSet::new());
    }

    let joined = neighbours.iter().cloned().collect::<Vec<_>>().join(" ");
    let token_lower = token.to_lowercase();

    Ok(pipeline
        .tokenize(&joined)?
        .into_iter()
        .map(|t| t.lemma)
        .filter(|lemma| lemma.chars().any(char::is_alphanumeric))
        .filter(|lemma| lemma.to_lowercase() != token_lower)
        .collect())
}

/// Replace one substitutable token at a time with each of its cleaned neighbours.
///
/// Emits one SYN_REPL variant per (position, neighbour) pair. No cap is
/// applied; callers wanting fewer variants truncate the result.
pub fn synonym_replace(
    pipeline: &dyn Pipeline,
    lang: &str,
    text: &str,
    k: usize,
) -> Result<Vec<VariantElement>> {
    let tokens = pipeline.tokenize(text)?;
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let distinct: BTreeSet<String> = texts.iter().map(|t| t.to_string()).collect();

    let similar = similar_of(pipeline, &distinct, k);
    if similar.is_empty() {
        tracing::debug!("No embeddable tokens in '{}'", text);
        return Ok(vec![]);
    }

    let mut cleaned: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for (token, neighbours) in &similar {
        cleaned.insert(token.as_str(), clean_neighbours(pipeline, token, neighbours)?);
    }

    let joiner = word_joiner(lang);
    let mut variants = Vec::new();

    for (pos, token) in tokens.iter().enumerate() {
        if !is_substitutable(&token.tag) {
            continue;
        }
        let Some(synonyms) = cleaned.get(token.text.as_str()) else {
            continue;
        };

        for synonym in synonyms {
            let replaced = texts
                .iter()
                .enumerate()
                .map(|(i, t)| if i == pos { synonym.as_str() } else { *t })
                .collect::<Vec<_>>()
                .join(joiner);

            if replaced != text {
                variants.push(VariantElement::new(replaced, lang, VariantType::SynRepl));
            }
        }
    }

    tracing::debug!("{} synonym variants for '{}'", variants.len(), text);
    Ok(variants)
}
