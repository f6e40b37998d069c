//! Variant taxonomy

use crate::error::{AugmentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of rewrite applied to a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantType {
    #[serde(alias = "Original query")]
    Original,
    #[serde(alias = "Lemmatization or word stemming")]
    Lemma,
    #[serde(alias = "Synonym replacement")]
    SynRepl,
    #[serde(alias = "Spelling or Misspelling variants")]
    Spelling,
    #[serde(alias = "Hypernym")]
    Hypernym,
    #[serde(alias = "Hyponym")]
    Hyponym,
    #[serde(alias = "Acronym expansion or collapse")]
    Acronym,
    #[serde(alias = "Synonym or similar term with Named-entity-recognition")]
    NerSyn,
    #[serde(alias = "Language translation")]
    Transl,
    #[serde(alias = "Adding or replacement of common modifiers")]
    Modif,
}

impl VariantType {
    /// Every registered kind, in declaration order
    pub const ALL: [VariantType; 10] = [
        VariantType::Original,
        VariantType::Lemma,
        VariantType::SynRepl,
        VariantType::Spelling,
        VariantType::Hypernym,
        VariantType::Hyponym,
        VariantType::Acronym,
        VariantType::NerSyn,
        VariantType::Transl,
        VariantType::Modif,
    ];

    /// Human-readable description used in prompts
    pub fn description(&self) -> &'static str {
        match self {
            Self::Original => "Original query",
            Self::Lemma => "Lemmatization or word stemming",
            Self::SynRepl => "Synonym replacement",
            Self::Spelling => "Spelling or Misspelling variants",
            Self::Hypernym => "Hypernym",
            Self::Hyponym => "Hyponym",
            Self::Acronym => "Acronym expansion or collapse",
            Self::NerSyn => "Synonym or similar term with Named-entity-recognition",
            Self::Transl => "Language translation",
            Self::Modif => "Adding or replacement of common modifiers",
        }
    }

    /// Command-line token
    pub fn token(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Lemma => "lemma",
            Self::SynRepl => "syn-repl",
            Self::Spelling => "spelling",
            Self::Hypernym => "hypernym",
            Self::Hyponym => "hyponym",
            Self::Acronym => "acronym",
            Self::NerSyn => "ner-syn",
            Self::Transl => "transl",
            Self::Modif => "modif",
        }
    }

    /// Serialized tag name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Original => "ORIGINAL",
            Self::Lemma => "LEMMA",
            Self::SynRepl => "SYN_REPL",
            Self::Spelling => "SPELLING",
            Self::Hypernym => "HYPERNYM",
            Self::Hyponym => "HYPONYM",
            Self::Acronym => "ACRONYM",
            Self::NerSyn => "NER_SYN",
            Self::Transl => "TRANSL",
            Self::Modif => "MODIF",
        }
    }

    /// Prompt descriptions for this kind.
    ///
    /// Translation yields one entry per target language and nothing when no
    /// targets are given. Every other kind yields its single description.
    pub fn describe(&self, target_languages: Option<&[String]>) -> Vec<String> {
        match self {
            Self::Transl => target_languages
                .unwrap_or_default()
                .iter()
                .map(|lang| format!("translate to {}", lang))
                .collect(),
            _ => vec![self.description().to_string()],
        }
    }

    /// Parse a command-line token
    pub fn parse(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.token() == token)
            .ok_or_else(|| AugmentError::UnknownVariantKind(token.to_string()))
    }

    /// All registered command-line tokens
    pub fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.token()).collect()
    }
}

impl FromStr for VariantType {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
