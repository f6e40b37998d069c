//! Merge command

use super::{read_document, write_document};
use crate::app::MergeArgs;
use anyhow::{bail, Context, Result};
use queryaug_core::{merge, JsonDocument, Mergeable, QuerySet, QueryVariantSet};
use std::path::{Path, PathBuf};

/// What an input file holds, judged from its queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Variants,
    Queries,
    /// No queries at all; fits either kind
    Empty,
}

pub async fn run(args: MergeArgs) -> Result<()> {
    let mut kinds = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        kinds.push(file_kind(path)?);
    }

    match settle(&kinds) {
        Some(FileKind::Queries) => merge_files::<QuerySet>(&args.inputs, args.output.as_deref()),
        Some(_) => merge_files::<QueryVariantSet>(&args.inputs, args.output.as_deref()),
        None => bail!("Cannot merge query files with variant files"),
    }
}

/// Common kind of all inputs; empty files take the kind of the others.
/// `None` when variant and query files are mixed.
fn settle(kinds: &[FileKind]) -> Option<FileKind> {
    let has_variants = kinds.contains(&FileKind::Variants);
    let has_queries = kinds.contains(&FileKind::Queries);
    match (has_variants, has_queries) {
        (true, true) => None,
        (true, false) => Some(FileKind::Variants),
        (false, true) => Some(FileKind::Queries),
        (false, false) => Some(FileKind::Empty),
    }
}

fn merge_files<T>(inputs: &[PathBuf], output: Option<&Path>) -> Result<()>
where
    T: JsonDocument + Mergeable,
{
    let sets = inputs
        .iter()
        .map(|path| read_document::<T>(path))
        .collect::<Result<Vec<_>>>()?;
    let merged = merge(sets)?;
    eprintln!(
        "Merged {} files into {} queries",
        inputs.len(),
        merged.len()
    );
    write_document(&merged, output)
}

fn file_kind(path: &Path) -> Result<FileKind> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let queries = value
        .get("queries")
        .and_then(|q| q.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(if queries.is_empty() {
        FileKind::Empty
    } else if queries.iter().any(|q| q.get("variants").is_some()) {
        FileKind::Variants
    } else {
        FileKind::Queries
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_files_take_the_other_kind() {
        use FileKind::*;
        assert_eq!(settle(&[Variants, Empty]), Some(Variants));
        assert_eq!(settle(&[Empty, Queries]), Some(Queries));
        assert_eq!(settle(&[Empty, Empty]), Some(Empty));
        assert_eq!(settle(&[Variants, Queries, Empty]), None);
    }
}
