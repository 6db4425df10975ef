//! Scanning a tree end to end.
//!
//! The walk runs on one thread and hands each matching file to a rayon
//! pool. `ThreadPool::scope` does not return until every spawned count has
//! finished, so the summary read afterwards includes all of them.

use std::path::Path;
use std::time::{Duration, Instant};

use rayon::ThreadPoolBuilder;
use tracing::{debug, info, warn};

use crate::aggregator::{Aggregator, TallySender};
use crate::classify::Markers;
use crate::counter::count_file;
use crate::error::TallyError;
use crate::options::CountOptions;
use crate::stats::Summary;
use crate::walker::walk;
use crate::Result;

/// Outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Accumulated counts
    pub summary: Summary,
    /// Wall-clock time from start of the scan until all files were counted
    pub elapsed: Duration,
    /// Directory entries that could not be read and were skipped
    pub skipped_entries: usize,
}

/// Scan a file or directory and count every matching file.
///
/// Unreadable files and directories are logged and skipped. Only a missing
/// root or a failure to start the worker pool is an error.
///
/// # Example
///
/// ```rust
/// use tallyloclib::{scan, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("A.java"), "\n// comment\nint x = 1;\n").unwrap();
/// fs::write(dir.path().join("notes.txt"), "ignored\n").unwrap();
///
/// let report = scan(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(report.summary.file_count, 1);
/// assert_eq!(report.summary.total(), 3);
/// assert_eq!(report.summary.code(), 1);
/// ```
pub fn scan(root: impl AsRef<Path>, options: &CountOptions) -> Result<ScanReport> {
    let root = root.as_ref();
    let start = Instant::now();

    if !root.exists() {
        return Err(TallyError::PathNotFound(root.to_path_buf()));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .thread_name(|i| format!("tallyloc-worker-{i}"))
        .build()
        .map_err(|e| TallyError::ThreadPool(e.to_string()))?;

    let aggregator = Aggregator::spawn();
    let sender = aggregator.sender();
    let markers = &options.markers;

    let skipped_entries = pool.scope(move |s| {
        walk(root, &options.filter, |path| {
            // Counted at dispatch, before the file is read
            sender.dispatched();
            let sender = sender.clone();
            let path = path.to_path_buf();
            s.spawn(move |_| count_and_report(&path, markers, &sender));
        })
    });

    let summary = aggregator.finish();
    let elapsed = start.elapsed();

    info!(
        files = summary.file_count,
        failed = summary.failed,
        lines = summary.total(),
        elapsed_ms = elapsed.as_millis() as u64,
        "scan complete"
    );

    Ok(ScanReport {
        summary,
        elapsed,
        skipped_entries,
    })
}

fn count_and_report(path: &Path, markers: &Markers, sender: &TallySender) {
    match count_file(path, markers) {
        Ok(tally) => {
            debug!(
                path = %path.display(),
                total = tally.total,
                blank = tally.blank,
                comment = tally.comment,
                code = tally.code,
                "counted"
            );
            sender.counted(tally);
        }
        Err(e) => {
            warn!("{e}");
            sender.failed();
        }
    }
}
