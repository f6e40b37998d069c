//! Batch augmentation and merging

use crate::error::{AugmentError, Result};
use crate::producer::Producer;
use crate::query::{Mergeable, Query, QuerySet, QueryVariantSet};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Progress information during augmentation
#[derive(Debug, Clone)]
pub struct AugmentProgress {
    pub processed: usize,
    pub total: usize,
    pub variants: usize,
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(AugmentProgress) + Send + Sync>;

/// Run `producer` over every query in order and collect the results.
///
/// The first failure is returned as-is; no partial result is produced.
pub async fn augment(
    input: &QuerySet,
    producer: &dyn Producer,
    count_per_query: usize,
) -> Result<QueryVariantSet> {
    augment_with_progress(input, producer, count_per_query, None).await
}

/// Like [`augment`], reporting progress after each query
pub async fn augment_with_progress(
    input: &QuerySet,
    producer: &dyn Producer,
    count_per_query: usize,
    progress: Option<ProgressCallback>,
) -> Result<QueryVariantSet> {
    let total = input.queries.len();
    let mut output = QueryVariantSet::default();

    tracing::info!(
        "Augmenting {} queries with {} backend",
        total,
        producer.name()
    );

    for (idx, query) in input.queries.iter().enumerate() {
        let produced = augment_one(producer, query, count_per_query).await?;
        output.append(produced);

        if let Some(ref callback) = progress {
            callback(AugmentProgress {
                processed: idx + 1,
                total,
                variants: output.variant_count(),
            });
        }
    }

    tracing::info!(
        "Produced {} variants for {} queries",
        output.variant_count(),
        total
    );
    Ok(output)
}

/// Augment queries concurrently, keeping input order in the output.
///
/// On the first failure the remaining in-flight work is dropped and that
/// error is returned.
pub async fn augment_concurrent(
    input: &QuerySet,
    producer: &dyn Producer,
    count_per_query: usize,
    max_concurrent: usize,
) -> Result<QueryVariantSet> {
    const DEFAULT_CONCURRENT: usize = 4;
    let concurrent = if max_concurrent > 0 {
        max_concurrent
    } else {
        DEFAULT_CONCURRENT
    };

    tracing::info!(
        "Augmenting {} queries with {} backend ({} concurrent)",
        input.queries.len(),
        producer.name(),
        concurrent
    );

    let mut results: Vec<(usize, QueryVariantSet)> = stream::iter(input.queries.iter().enumerate())
        .map(|(idx, query)| async move {
            augment_one(producer, query, count_per_query)
                .await
                .map(|set| (idx, set))
        })
        .buffer_unordered(concurrent)
        .try_collect()
        .await?;

    // Sort results by original order
    results.sort_by_key(|(idx, _)| *idx);

    let mut output = QueryVariantSet::default();
    for (_, set) in results {
        output.append(set);
    }
    Ok(output)
}

async fn augment_one(
    producer: &dyn Producer,
    query: &Query,
    count_per_query: usize,
) -> Result<QueryVariantSet> {
    tracing::debug!("Processing [{}] {}", query.lang, query.original);
    let raw = producer.process(query, count_per_query, None).await?;
    producer.parse_output(raw)
}

/// Concatenate at least two sets in the order given, keeping duplicates
pub fn merge<T: Mergeable>(sets: Vec<T>) -> Result<T> {
    let given = sets.len();
    let mut iter = sets.into_iter();
    let (Some(mut merged), true) = (iter.next(), given >= 2) else {
        return Err(AugmentError::InvalidInput(format!(
            "merge needs at least two inputs, got {}",
            given
        )));
    };
    for set in iter {
        merged.append(set);
    }
    tracing::debug!("Merged into {} entries", merged.len());
    Ok(merged)
}
