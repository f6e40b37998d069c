//! Augment command

use super::{read_document, write_document};
use crate::app::AugmentArgs;
use crate::progress::AugmentReporter;
use anyhow::Result;
use queryaug_core::augment::ProgressCallback;
use queryaug_core::{
    augment_concurrent, augment_with_progress, AugmentProgress, Backend, Config, PipelineCache,
    ProducerFactory, QuerySet,
};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

pub async fn run(args: AugmentArgs, config: Config, verbose: bool) -> Result<()> {
    let input: QuerySet = read_document(&args.input)?;

    // Lexical pipelines follow the input; generative targets follow --lang
    let languages: BTreeSet<String> = match args.backend {
        Backend::Lexical => input.queries.iter().map(|q| q.lang.clone()).collect(),
        Backend::Generative => args.langs.iter().cloned().collect(),
    };

    let factory = ProducerFactory::new(config, Arc::new(PipelineCache::new()));
    let producer = factory.select_backend(args.backend, &args.kinds, &languages)?;

    let output = if args.concurrency > 1 {
        augment_concurrent(&input, producer.as_ref(), args.count, args.concurrency).await?
    } else {
        let reporter = verbose.then(|| Arc::new(Mutex::new(AugmentReporter::new())));
        let callback = reporter.clone().map(progress_callback);

        let output =
            augment_with_progress(&input, producer.as_ref(), args.count, callback).await?;
        if let Some(reporter) = reporter {
            if let Ok(reporter) = reporter.lock() {
                reporter.finish();
            }
        }
        output
    };

    eprintln!(
        "Augmented {} queries into {} variants",
        output.queries.len(),
        output.variant_count()
    );
    write_document(&output, args.output.as_deref())
}

fn progress_callback(reporter: Arc<Mutex<AugmentReporter>>) -> ProgressCallback {
    Box::new(move |p: AugmentProgress| {
        if let Ok(mut reporter) = reporter.lock() {
            reporter.update(p);
        }
    })
}
