//! Input options for a scan.

use crate::classify::Markers;
use crate::filter::FilterConfig;

/// Options for counting lines in a tree.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Which files are counted
    pub filter: FilterConfig,
    /// How lines are classified
    pub markers: Markers,
    /// Worker threads for per-file counting (0 = one per CPU)
    pub jobs: usize,
}

impl CountOptions {
    /// Create new default options: `*java` files, C-family markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set line markers.
    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Set the number of worker threads.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }
}
