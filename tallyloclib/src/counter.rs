//! Per-file line counting.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`. Trimming strips every
//! character up to and including U+0020 (ASCII controls and space) and
//! nothing else, so Unicode spaces such as U+3000 are kept. Bytes that are
//! not valid UTF-8 are replaced rather than rejected, so files in other
//! encodings still produce a count.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::Markers;
use crate::error::TallyError;
use crate::stats::Tally;
use crate::Result;

/// Count the lines of a single file.
///
/// # Example
///
/// ```rust
/// use tallyloclib::{count_file, Markers};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("A.java");
/// fs::write(&path, "\n// comment\nint x = 1;\n").unwrap();
///
/// let tally = count_file(&path, &Markers::default()).unwrap();
/// assert_eq!(tally.total, 3);
/// assert_eq!(tally.blank, 1);
/// assert_eq!(tally.comment, 1);
/// assert_eq!(tally.code, 1);
/// ```
pub fn count_file(path: impl AsRef<Path>, markers: &Markers) -> Result<Tally> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TallyError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    count_reader(BufReader::new(file), markers).map_err(|e| TallyError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Count the lines produced by a reader.
pub fn count_reader<R: BufRead>(mut reader: R, markers: &Markers) -> std::io::Result<Tally> {
    let mut tally = Tally::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let chunk = buf.strip_suffix(b"\n".as_slice()).unwrap_or(buf.as_slice());
        let chunk = chunk.strip_suffix(b"\r".as_slice()).unwrap_or(chunk);
        for raw in chunk.split(|b| *b == b'\r') {
            let line = String::from_utf8_lossy(raw);
            tally.record(markers.classify(trim_line(&line)));
        }
    }

    Ok(tally)
}

/// Strip leading and trailing characters at or below U+0020.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}
