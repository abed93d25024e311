//! Hunk model and patch-text parsing.

use regex::Regex;
use std::sync::OnceLock;

/// One body line of a hunk, tagged with its change kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunkLine {
    /// Line present in both file versions.
    Context(String),
    /// Line removed from the old file version.
    Removed(String),
    /// Line added to the new file version.
    Added(String),
}

/// One contiguous diff block bounded by an `@@ ... @@` header.
///
/// `old_start`/`new_start` are 1-based except the zero-count special cases:
/// `-0,0` marks a brand-new file and `+0,0` a full deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// First line of the hunk in the old file.
    pub old_start: u32,
    /// Number of old-file lines the hunk covers.
    pub old_count: u32,
    /// First line of the hunk in the new file.
    pub new_start: u32,
    /// Number of new-file lines the hunk covers.
    pub new_count: u32,
    /// Ordered body lines.
    pub lines: Vec<HunkLine>,
}

/// The hunk header grammar: `@@ -<oldStart>[,<oldCount>] +<newStart>[,<newCount>] @@`.
fn header_regex() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| {
        Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@")
            .expect("hunk header pattern is valid")
    })
}

/// An elided count defaults to 1 for a nonzero start and 0 for a zero start.
fn default_count(start: u32) -> u32 {
    if start == 0 { 0 } else { 1 }
}

/// Parse a hunk header line into `(old_start, old_count, new_start, new_count)`.
///
/// Returns `None` if the line does not match the header grammar or a field
/// overflows. Content after the closing `@@` (the section heading git adds)
/// is ignored.
pub(super) fn parse_header(line: &str) -> Option<(u32, u32, u32, u32)> {
    let caps = header_regex().captures(line)?;

    let old_start: u32 = caps[1].parse().ok()?;
    let new_start: u32 = caps[3].parse().ok()?;
    let old_count: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => default_count(old_start),
    };
    let new_count: u32 = match caps.get(4) {
        Some(m) => m.as_str().parse().ok()?,
        None => default_count(new_start),
    };

    Some((old_start, old_count, new_start, new_count))
}

/// Parse the patch text of one file into its hunks.
///
/// Never fails for any string input. A header that does not match the
/// grammar is skipped; a body line whose prefix is not one of ' ', '-', '+'
/// discards that hunk's contribution and scanning resumes at the next
/// header. Absence of valid hunks yields an empty vector.
pub fn parse_patch(patch: &str) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut lines = patch.lines().peekable();

    while let Some(line) = lines.next() {
        if !line.starts_with("@@") {
            continue;
        }

        let Some((old_start, old_count, new_start, new_count)) = parse_header(line) else {
            tracing::debug!(header = line, "skipping malformed hunk header");
            continue;
        };

        let mut body = Vec::new();
        let mut old_seen = 0u32;
        let mut new_seen = 0u32;
        let mut malformed = false;

        while old_seen < old_count || new_seen < new_count {
            let Some(&next) = lines.peek() else {
                break;
            };
            if next.starts_with("@@") {
                // Short hunk; let the outer loop pick up the next header.
                break;
            }
            lines.next();

            if let Some(text) = next.strip_prefix(' ') {
                body.push(HunkLine::Context(text.to_string()));
                old_seen += 1;
                new_seen += 1;
            } else if let Some(text) = next.strip_prefix('-') {
                body.push(HunkLine::Removed(text.to_string()));
                old_seen += 1;
            } else if let Some(text) = next.strip_prefix('+') {
                body.push(HunkLine::Added(text.to_string()));
                new_seen += 1;
            } else if next.starts_with('\\') {
                // "\ No newline at end of file" marker; consumes no position.
            } else if next.is_empty() {
                // Context line whose trailing space was stripped in transit.
                body.push(HunkLine::Context(String::new()));
                old_seen += 1;
                new_seen += 1;
            } else {
                tracing::debug!(line = next, "discarding hunk with malformed body line");
                malformed = true;
                break;
            }
        }

        if !malformed {
            hunks.push(Hunk {
                old_start,
                old_count,
                new_start,
                new_count,
                lines: body,
            });
        }
    }

    hunks
}
