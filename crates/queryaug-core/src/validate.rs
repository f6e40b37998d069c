//! Consistency checks for variant sets

use crate::query::{QueryVariantSet, VariantType};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// What is wrong with a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyText,
    LanguageMismatch,
    Unchanged,
    Duplicate,
}

/// A problem found in one variant of one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub query_index: usize,
    pub variant_index: usize,
    pub kind: IssueKind,
    pub detail: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "query #{} variant #{}: {}",
            self.query_index, self.variant_index, self.detail
        )
    }
}

/// Report every issue in `set`, in query then variant order
pub fn validate_variants(set: &QueryVariantSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (qi, query) in set.queries.iter().enumerate() {
        let mut seen = HashSet::new();

        for (vi, variant) in query.variants.iter().enumerate() {
            let mut report = |kind, detail: String| {
                issues.push(ValidationIssue {
                    query_index: qi,
                    variant_index: vi,
                    kind,
                    detail,
                })
            };

            if variant.text.trim().is_empty() {
                report(IssueKind::EmptyText, "variant text is empty".to_string());
                continue;
            }
            if variant.lang != query.lang && variant.variant_type != VariantType::Transl {
                report(
                    IssueKind::LanguageMismatch,
                    format!(
                        "{} variant in '{}' for a '{}' query",
                        variant.variant_type, variant.lang, query.lang
                    ),
                );
            }
            if variant.text == query.original && variant.variant_type != VariantType::Original {
                report(
                    IssueKind::Unchanged,
                    format!("{} variant equals the original", variant.variant_type),
                );
            }
            if !seen.insert(variant.text.as_str()) {
                report(
                    IssueKind::Duplicate,
                    format!("duplicate variant '{}'", variant.text),
                );
            }
        }
    }

    issues
}
