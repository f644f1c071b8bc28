//! Region marker scanning and snippet extraction.
//!
//! Documentation tooling pulls snippets out of sample files using paired
//! comment markers:
//!
//! ```text
//! // [START sample]
//! ...
//!     // [START sample_core]
//!     ...
//!     // [END sample_core]
//! ...
//! // [END sample]
//! ```
//!
//! Markers must be paired, each name may open only once, and pairs nest
//! strictly (no overlap).
//!
//! ## Examples
//!
//! ```
//! use kiosk_gen::regions::{extract, validate};
//!
//! let source = "\
//! // [START sample]
//! fn run() {
//!     // [START sample_core]
//!     call();
//!     // [END sample_core]
//! }
//! // [END sample]
//! ";
//!
//! validate(source, "sample").unwrap();
//! assert_eq!(extract(source, "sample_core").unwrap(), "call();");
//! ```

use thiserror::Error;

/// Errors found while scanning region markers.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("region '{name}' opened on line {line} is never closed")]
    UnmatchedStart { name: String, line: usize },

    #[error("region '{name}' closed on line {line} was never opened")]
    UnmatchedEnd { name: String, line: usize },

    #[error("region '{name}' opened again on line {line}")]
    DuplicateStart { name: String, line: usize },

    #[error("region '{inner}' is not nested inside region '{outer}'")]
    Misnested { outer: String, inner: String },

    #[error("region '{0}' not found")]
    MissingRegion(String),
}

/// A matched `[START name]` / `[END name]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    /// Line of the START marker.
    pub start_line: usize,
    /// Line of the END marker.
    pub end_line: usize,
}

impl Region {
    /// Returns `true` if `other` lies strictly inside this region.
    pub fn contains(&self, other: &Region) -> bool {
        self.start_line < other.start_line && other.end_line < self.end_line
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Start,
    End,
}

/// Parses a region marker out of a single line, if it is one.
fn parse_marker(line: &str) -> Option<(MarkerKind, &str)> {
    let comment = line.trim().strip_prefix("//")?.trim();
    let inner = comment.strip_prefix('[')?.strip_suffix(']')?;

    if let Some(name) = inner.strip_prefix("START ") {
        Some((MarkerKind::Start, name.trim()))
    } else {
        inner
            .strip_prefix("END ")
            .map(|name| (MarkerKind::End, name.trim()))
    }
}

fn is_marker(line: &str) -> bool {
    parse_marker(line).is_some()
}

/// Scans `source` and returns every region ordered by start line.
///
/// ## Errors
///
/// Returns an error for unmatched or duplicate markers and for pairs that
/// overlap instead of nesting.
pub fn scan(source: &str) -> Result<Vec<Region>, RegionError> {
    let mut open: Vec<(&str, usize)> = Vec::new();
    let mut regions = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let Some((kind, name)) = parse_marker(line) else {
            continue;
        };

        match kind {
            MarkerKind::Start => {
                let seen = open.iter().any(|(n, _)| *n == name)
                    || regions.iter().any(|r: &Region| r.name == name);
                if seen {
                    return Err(RegionError::DuplicateStart {
                        name: name.to_string(),
                        line: line_no,
                    });
                }
                open.push((name, line_no));
            }
            MarkerKind::End => match open.last() {
                Some((top, start)) if *top == name => {
                    regions.push(Region {
                        name: name.to_string(),
                        start_line: *start,
                        end_line: line_no,
                    });
                    open.pop();
                }
                Some((top, _)) if open.iter().any(|(n, _)| *n == name) => {
                    return Err(RegionError::Misnested {
                        outer: name.to_string(),
                        inner: top.to_string(),
                    });
                }
                _ => {
                    return Err(RegionError::UnmatchedEnd {
                        name: name.to_string(),
                        line: line_no,
                    });
                }
            },
        }
    }

    if let Some((name, line)) = open.first() {
        return Err(RegionError::UnmatchedStart {
            name: name.to_string(),
            line: *line,
        });
    }

    regions.sort_by_key(|r| r.start_line);
    Ok(regions)
}

/// Checks the marker layout of a sample file with region tag `tag`.
///
/// Both `tag` and `{tag}_core` must be present exactly once, with the core
/// region nested strictly inside the outer one.
pub fn validate(source: &str, tag: &str) -> Result<(), RegionError> {
    let regions = scan(source)?;
    let core_tag = format!("{}_core", tag);

    let find = |name: &str| {
        regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RegionError::MissingRegion(name.to_string()))
    };
    let outer = find(tag)?;
    let core = find(&core_tag)?;

    if !outer.contains(core) {
        return Err(RegionError::Misnested {
            outer: outer.name.clone(),
            inner: core.name.clone(),
        });
    }

    Ok(())
}

/// Returns the text strictly between the markers of region `name`.
///
/// Marker lines of nested regions are dropped, the common indentation is
/// removed, and leading/trailing blank lines are trimmed.
pub fn extract(source: &str, name: &str) -> Result<String, RegionError> {
    let regions = scan(source)?;
    let region = regions
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| RegionError::MissingRegion(name.to_string()))?;

    let body: Vec<&str> = source
        .lines()
        .skip(region.start_line)
        .take(region.end_line - region.start_line - 1)
        .filter(|line| !is_marker(line))
        .collect();

    let indent = body
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = body
        .iter()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect();

    let first = dedented.iter().position(|l| !l.is_empty());
    let last = dedented.iter().rposition(|l| !l.is_empty());
    Ok(match (first, last) {
        (Some(first), Some(last)) => dedented[first..=last].join("\n"),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
// header
// [START sample]
use foo;

pub async fn run() {
    // [START sample_core]
    let a = 1;

    // Do something

    let b = a;
    // [END sample_core]
    Ok(())
}
// [END sample]
";

    #[test]
    fn scan_finds_nested_regions() {
        let regions = scan(SAMPLE).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "sample");
        assert_eq!(regions[0].start_line, 2);
        assert_eq!(regions[0].end_line, 15);
        assert_eq!(regions[1].name, "sample_core");
        assert!(regions[0].contains(&regions[1]));
    }

    #[test]
    fn validate_accepts_well_formed_file() {
        assert_eq!(validate(SAMPLE, "sample"), Ok(()));
    }

    #[test]
    fn extract_core_is_dedented() {
        let core = extract(SAMPLE, "sample_core").unwrap();
        assert_eq!(core, "let a = 1;\n\n// Do something\n\nlet b = a;");
    }

    #[test]
    fn extract_outer_drops_nested_markers() {
        let outer = extract(SAMPLE, "sample").unwrap();
        assert!(outer.starts_with("use foo;"));
        assert!(!outer.contains("[START"));
        assert!(!outer.contains("[END"));
        assert!(outer.contains("    let a = 1;"));
    }

    #[test]
    fn unmatched_start_is_reported() {
        let err = scan("// [START sample]\nfoo();\n").unwrap_err();
        assert_eq!(
            err,
            RegionError::UnmatchedStart {
                name: "sample".into(),
                line: 1
            }
        );
    }

    #[test]
    fn unmatched_end_is_reported() {
        let err = scan("foo();\n// [END sample]\n").unwrap_err();
        assert_eq!(
            err,
            RegionError::UnmatchedEnd {
                name: "sample".into(),
                line: 2
            }
        );
    }

    #[test]
    fn duplicate_region_is_reported() {
        let source = "// [START a]\n// [END a]\n// [START a]\n// [END a]\n";
        assert!(matches!(
            scan(source),
            Err(RegionError::DuplicateStart { line: 3, .. })
        ));
    }

    #[test]
    fn overlapping_regions_are_misnested() {
        let source = "// [START a]\n// [START b]\n// [END a]\n// [END b]\n";
        assert_eq!(
            scan(source),
            Err(RegionError::Misnested {
                outer: "a".into(),
                inner: "b".into()
            })
        );
    }

    #[test]
    fn core_outside_outer_is_misnested() {
        let source = "\
// [START sample_core]
// [END sample_core]
// [START sample]
// [END sample]
";
        assert!(matches!(
            validate(source, "sample"),
            Err(RegionError::Misnested { .. })
        ));
    }

    #[test]
    fn missing_core_is_reported() {
        let source = "// [START sample]\n// [END sample]\n";
        assert_eq!(
            validate(source, "sample"),
            Err(RegionError::MissingRegion("sample_core".into()))
        );
    }

    #[test]
    fn non_marker_brackets_are_ignored() {
        let source = "//        [id=1024]\n// [START x]\n// [END x]\n";
        assert_eq!(scan(source).unwrap().len(), 1);
    }
}
