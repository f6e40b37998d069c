//! Per-query augmentation progress on stderr

use queryaug_core::AugmentProgress;
use std::io::{self, Write};

/// Tracks the latest [`AugmentProgress`] and redraws a single stderr line
#[derive(Debug, Default)]
pub struct AugmentReporter {
    last: Option<AugmentProgress>,
}

impl AugmentReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a progress event and redraw the line
    pub fn update(&mut self, progress: AugmentProgress) {
        eprint!("\r{:<50}", Self::line(&progress));
        io::stderr().flush().ok();
        self.last = Some(progress);
    }

    /// Final summary; prints nothing if no query was processed
    pub fn finish(&self) {
        if let Some(p) = &self.last {
            eprintln!(
                "\r{:<50}",
                format!("Done: {} variants from {} queries", p.variants, p.processed)
            );
        }
    }

    fn line(p: &AugmentProgress) -> String {
        format!("[{}/{}] {} variants so far", p.processed, p.total, p.variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(processed: usize, variants: usize) -> AugmentProgress {
        AugmentProgress {
            processed,
            total: 3,
            variants,
        }
    }

    #[test]
    fn test_reporter_keeps_latest_progress() {
        let mut reporter = AugmentReporter::new();
        reporter.update(progress(1, 4));
        reporter.update(progress(2, 9));
        let last = reporter.last.as_ref().unwrap();
        assert_eq!((last.processed, last.variants), (2, 9));
        assert_eq!(AugmentReporter::line(last), "[2/3] 9 variants so far");
    }
}
