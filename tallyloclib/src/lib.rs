//! # tallyloclib
//!
//! A concurrent lines of code counter that sorts every line of a source tree
//! into blank, comment or code.
//!
//! ## Overview
//!
//! A scan walks a directory tree on one thread, hands each file whose name
//! ends with a configured suffix to a worker pool, and folds the per-file
//! results into a single [`Summary`]:
//!
//! - **Blank**: the trimmed line equals a blank marker (default `""`)
//! - **Comment**: the trimmed line starts with a comment marker
//!   (default `//`, `/*`, `*`, `*/`)
//! - **Code**: everything else
//!
//! Classification is per line. There is no tracking of open block comments,
//! so a line inside `/* ... */` that does not start with a marker is code.
//!
//! ## Example
//!
//! ```rust
//! use tallyloclib::{count_file, scan, CountOptions, FilterConfig, Markers};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! let file_path = dir.path().join("src/Hello.java");
//! fs::write(&file_path, "// greet\nclass Hello {\n\n}\n").unwrap();
//!
//! // Count a single file
//! let tally = count_file(&file_path, &Markers::default()).unwrap();
//! assert_eq!(tally.code, 2);
//!
//! // Count a whole tree
//! let report = scan(dir.path(), &CountOptions::new()).unwrap();
//! assert_eq!(report.summary.file_count, 1);
//! assert_eq!(report.summary.comment(), 1);
//!
//! // Count something other than Java
//! let options = CountOptions::new()
//!     .filter(FilterConfig::new().suffix(".py"))
//!     .markers(Markers::default().with_comment(["#"]));
//! let report = scan(dir.path(), &options).unwrap();
//! assert_eq!(report.summary.file_count, 0);
//! ```

pub mod aggregator;
pub mod classify;
pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod scan;
pub mod stats;
pub mod walker;

pub use aggregator::{Aggregator, TallySender};
pub use classify::{LineKind, Markers};
pub use counter::{count_file, count_reader};
pub use error::TallyError;
pub use filter::{FilterConfig, DEFAULT_SUFFIX};
pub use options::CountOptions;
pub use scan::{scan, ScanReport};
pub use stats::{Summary, Tally};
pub use walker::walk;

/// Result type for tallyloclib operations
pub type Result<T> = std::result::Result<T, TallyError>;
