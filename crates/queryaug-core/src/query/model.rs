//! Query and variant containers

use super::VariantType;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A seed search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub original: String,
    pub lang: String,
}

impl Query {
    pub fn new(original: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            lang: lang.into(),
        }
    }
}

/// Ordered set of seed queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySet {
    pub queries: Vec<Query>,
}

/// One rewritten query string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantElement {
    pub text: String,
    pub lang: String,
    pub variant_type: VariantType,
}

impl VariantElement {
    pub fn new(text: impl Into<String>, lang: impl Into<String>, variant_type: VariantType) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
            variant_type,
        }
    }
}

/// A query together with the variants produced for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariant {
    pub original: String,
    pub lang: String,
    #[serde(default)]
    pub variants: Vec<VariantElement>,
}

impl QueryVariant {
    /// Start an empty variant list for a query
    pub fn from_query(query: &Query) -> Self {
        Self {
            original: query.original.clone(),
            lang: query.lang.clone(),
            variants: Vec::new(),
        }
    }

    /// Append variants, keeping their order
    pub fn extend_variants(&mut self, variants: impl IntoIterator<Item = VariantElement>) {
        self.variants.extend(variants);
    }

    /// Variants tagged with the given kind
    pub fn variants_of(&self, kind: VariantType) -> impl Iterator<Item = &VariantElement> {
        self.variants.iter().filter(move |v| v.variant_type == kind)
    }
}

/// Ordered set of query variants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariantSet {
    pub queries: Vec<QueryVariant>,
}

impl QueryVariantSet {
    pub fn single(variant: QueryVariant) -> Self {
        Self {
            queries: vec![variant],
        }
    }

    /// Total number of variant elements across all queries
    pub fn variant_count(&self) -> usize {
        self.queries.iter().map(|q| q.variants.len()).sum()
    }
}

/// Sets that support append-merge
pub trait Mergeable: Sized {
    /// Concatenate another set onto this one
    fn append(&mut self, other: Self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Mergeable for QuerySet {
    fn append(&mut self, mut other: Self) {
        self.queries.append(&mut other.queries);
    }

    fn len(&self) -> usize {
        self.queries.len()
    }
}

impl Mergeable for QueryVariantSet {
    fn append(&mut self, mut other: Self) {
        self.queries.append(&mut other.queries);
    }

    fn len(&self) -> usize {
        self.queries.len()
    }
}

/// JSON (de)serialization at the persisted-file boundary
pub trait JsonDocument: Serialize + for<'de> Deserialize<'de> {
    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)? + "\n")
    }
}

impl JsonDocument for QuerySet {}
impl JsonDocument for QueryVariantSet {}
