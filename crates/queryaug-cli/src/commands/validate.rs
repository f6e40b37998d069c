//! Validate command

use super::read_document;
use crate::app::ValidateArgs;
use anyhow::Result;
use queryaug_core::error::exit_codes;
use queryaug_core::{validate_variants, QueryVariantSet};

pub async fn run(args: ValidateArgs) -> Result<()> {
    let set: QueryVariantSet = read_document(&args.input)?;
    let issues = validate_variants(&set);

    if issues.is_empty() {
        println!(
            "OK: {} queries, {} variants",
            set.queries.len(),
            set.variant_count()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{}", issue);
    }
    eprintln!("{} issue(s) found", issues.len());
    std::process::exit(exit_codes::VALIDATION_FAILED);
}
