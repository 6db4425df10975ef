//! Line classification.
//!
//! Every line is classified on its own, from its trimmed text alone:
//!
//! - **Blank**: equals one of the blank markers (by default only `""`)
//! - **Comment**: starts with one of the comment markers
//!   (by default `//`, `/*`, `*`, `*/`)
//! - **Code**: anything else
//!
//! There is no block-comment state. A line sitting inside `/* ... */` that
//! does not itself start with a marker counts as code.

/// The category a single line falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Marker strings used to classify lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Exact-match strings identifying a blank line
    pub blank: Vec<String>,
    /// Prefixes identifying a comment line
    pub comment: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self::c_family()
    }
}

impl Markers {
    /// Markers for C-family languages (Java, C, C++, JavaScript, ...).
    pub fn c_family() -> Self {
        Self {
            blank: vec![String::new()],
            comment: ["//", "/*", "*", "*/"].iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builder: replace the blank markers.
    pub fn with_blank<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blank = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: replace the comment markers.
    pub fn with_comment<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_blank(&self, line: &str) -> bool {
        self.blank.iter().any(|m| line == m)
    }

    pub fn is_comment(&self, line: &str) -> bool {
        self.comment.iter().any(|m| line.starts_with(m.as_str()))
    }

    /// Classify a line already passed through [`crate::counter::trim_line`].
    ///
    /// Blank markers are checked before comment markers, so an empty
    /// comment marker never swallows blank lines.
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_blank(line) {
            LineKind::Blank
        } else if self.is_comment(line) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        let markers = Markers::default();
        assert_eq!(markers.classify(""), LineKind::Blank);
    }

    #[test]
    fn test_trimmed_whitespace_is_blank() {
        let markers = Markers::default();
        let trimmed = crate::counter::trim_line(" \t \r");
        assert_eq!(markers.classify(trimmed), LineKind::Blank);
        // Untrimmed whitespace is not an exact match
        assert_eq!(markers.classify("\t"), LineKind::Code);
    }

    #[test]
    fn test_comment_prefixes() {
        let markers = Markers::default();
        assert_eq!(markers.classify("// line"), LineKind::Comment);
        assert_eq!(markers.classify("/* block"), LineKind::Comment);
        assert_eq!(markers.classify("* javadoc body"), LineKind::Comment);
        assert_eq!(markers.classify("*/"), LineKind::Comment);
        assert_eq!(markers.classify("/** doc */"), LineKind::Comment);
    }

    #[test]
    fn test_code_lines() {
        let markers = Markers::default();
        assert_eq!(markers.classify("int x = 1;"), LineKind::Code);
        assert_eq!(markers.classify("x = 1; // trailing"), LineKind::Code);
        assert_eq!(markers.classify("}"), LineKind::Code);
    }

    #[test]
    fn test_no_block_comment_state() {
        let markers = Markers::default();
        // Inside an open block comment, but classified on its own text
        assert_eq!(markers.classify("still inside the block"), LineKind::Code);
    }

    #[test]
    fn test_exactly_one_kind() {
        let markers = Markers::default();
        for line in ["", "//", "*", "a", "a // b", "/", "**/", "#"] {
            let hits = [
                markers.is_blank(line),
                !markers.is_blank(line) && markers.is_comment(line),
                !markers.is_blank(line) && !markers.is_comment(line),
            ];
            assert_eq!(hits.iter().filter(|h| **h).count(), 1, "line {line:?}");
        }
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers::default()
            .with_comment(["#"])
            .with_blank(["", "pass"]);

        assert_eq!(markers.classify("# note"), LineKind::Comment);
        assert_eq!(markers.classify("// not a comment here"), LineKind::Code);
        assert_eq!(markers.classify("pass"), LineKind::Blank);
        assert_eq!(markers.classify("passed = True"), LineKind::Code);
    }

    #[test]
    fn test_empty_comment_marker_does_not_steal_blanks() {
        let markers = Markers::default().with_comment([""]);
        assert_eq!(markers.classify(""), LineKind::Blank);
        assert_eq!(markers.classify("anything"), LineKind::Comment);
    }
}
