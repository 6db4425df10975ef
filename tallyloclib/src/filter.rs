//! Deciding which files get counted.
//!
//! A file matches when its file name ends with the configured suffix and its
//! path matches none of the exclude glob patterns. The suffix test is a plain
//! string suffix, not an extension comparison: with the default `java`
//! suffix, `Main.java` and `xjava` both match.

use std::path::Path;

use glob::Pattern;

use crate::error::TallyError;
use crate::Result;

/// Default file-name suffix.
pub const DEFAULT_SUFFIX: &str = "java";

/// Configuration for file filtering.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Case-sensitive suffix the file name must end with
    pub suffix: String,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
    /// Maximum directory depth below the root (None = unbounded)
    pub max_depth: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            exclude: Vec::new(),
            max_depth: None,
        }
    }
}

impl FilterConfig {
    /// Create a filter matching `*java` files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file-name suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| TallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Limit how deep the walk descends.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Check if a file path matches the filter criteria.
    ///
    /// Only the path is inspected; the caller decides whether it is a file.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if !name.to_string_lossy().ends_with(self.suffix.as_str()) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }
}
