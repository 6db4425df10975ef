//! Directory traversal.
//!
//! The walk is synchronous and depth-first. Children are visited in the
//! order the filesystem returns them. Symlinks are followed, and a link
//! pointing back at one of its ancestors is reported as a listing failure
//! instead of being descended into. A dangling link is neither a file nor a
//! directory, so it is ignored.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::TallyError;
use crate::filter::FilterConfig;

/// Walk `root`, calling `on_match` for every matching regular file.
///
/// Entries that cannot be read are logged and skipped; the walk itself
/// never fails. Returns the number of entries that were skipped this way.
pub fn walk<F>(root: &Path, filter: &FilterConfig, mut on_match: F) -> usize
where
    F: FnMut(&Path),
{
    let mut walker = WalkDir::new(root).follow_links(true);
    if let Some(depth) = filter.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut skipped = 0;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if is_dangling_link(&e) => {
                debug!(path = ?e.path(), "skipping dangling symlink");
                continue;
            }
            Err(e) => {
                let err = listing_error(root, &e);
                warn!("{err}");
                skipped += 1;
                continue;
            }
        };

        if entry.file_type().is_file() && filter.matches(entry.path()) {
            debug!(path = %entry.path().display(), "matched");
            on_match(entry.path());
        }
    }

    skipped
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_none()
        && err
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
        && err
            .path()
            .is_some_and(|p| p.symlink_metadata().is_ok_and(|m| m.file_type().is_symlink()))
}

fn listing_error(root: &Path, err: &walkdir::Error) -> TallyError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = match err.loop_ancestor() {
        Some(ancestor) => format!("symlink loop back to '{}'", ancestor.display()),
        None => err
            .io_error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string()),
    };
    TallyError::DirectoryListing { path, message }
}
