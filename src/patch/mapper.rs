//! Touched-line mapping over parsed hunks.
//!
//! The mapper walks each hunk body with two independent cursors, one per
//! line-numbering space (old file, new file), and records the new-file
//! position of every added line. Removed lines open a removal run; an
//! addition that consumes an entry of the current run is a replacement, an
//! addition past the run is an insertion. Removals never consumed by an
//! addition are pure deletions and have no new-file coordinate, so they
//! contribute nothing to the touched set.

use super::hunk::{parse_patch, Hunk, HunkLine};
use crate::changeset::ChangedFile;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// How an added line relates to the old file version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line is new; no old-file line was removed in its place.
    Insertion,
    /// The line replaces a removed line from the same hunk's removal run.
    Replacement,
}

/// One touched position in new-file coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchedLine {
    /// 1-based line number in the new file.
    pub line: u32,
    /// Insertion or replacement classification.
    pub change: LineChange,
}

/// All position changes described by one hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkChanges {
    /// Touched new-file positions, in body order.
    pub touched: Vec<TouchedLine>,
    /// Old-file positions of pure deletions (no new-file counterpart).
    pub deleted: Vec<u32>,
}

/// Map one hunk to its touched and deleted positions.
pub fn map_hunk(hunk: &Hunk) -> HunkChanges {
    let mut touched = Vec::new();
    let mut deleted = Vec::new();
    let mut removal_run: VecDeque<u32> = VecDeque::new();
    let mut old_line = hunk.old_start;
    let mut new_line = hunk.new_start;

    for line in &hunk.lines {
        match line {
            HunkLine::Context(_) => {
                // A context line closes the current removal run; whatever was
                // not paired with an addition is a pure deletion.
                deleted.extend(removal_run.drain(..));
                old_line += 1;
                new_line += 1;
            }
            HunkLine::Removed(_) => {
                removal_run.push_back(old_line);
                old_line += 1;
            }
            HunkLine::Added(_) => {
                let change = if removal_run.pop_front().is_some() {
                    LineChange::Replacement
                } else {
                    LineChange::Insertion
                };
                touched.push(TouchedLine {
                    line: new_line,
                    change,
                });
                new_line += 1;
            }
        }
    }
    deleted.extend(removal_run.drain(..));

    HunkChanges { touched, deleted }
}

/// Map a file's patch text to its touched new-file line numbers.
///
/// The result is the union across all hunks, sorted and de-duplicated by
/// construction. Never fails for any string input: malformed hunks are
/// skipped during parsing and a patch without valid hunks yields an empty
/// set. Pure function; same input, same output.
pub fn touched_lines(patch: &str) -> BTreeSet<u32> {
    let mut result = BTreeSet::new();
    for hunk in parse_patch(patch) {
        for touched in map_hunk(&hunk).touched {
            result.insert(touched.line);
        }
    }
    result
}

/// Build the per-file touched-line table for a filtered change set.
///
/// Files without a patch contribute an empty set. Filenames are unique
/// within one change set, so each key is written exactly once.
pub fn touched_table(files: &[ChangedFile]) -> BTreeMap<String, BTreeSet<u32>> {
    let mut table = BTreeMap::new();
    for file in files {
        let lines = match &file.patch {
            Some(patch) => touched_lines(patch),
            None => BTreeSet::new(),
        };
        tracing::debug!(file = %file.filename, touched = lines.len(), "mapped patch");
        table.insert(file.filename.clone(), lines);
    }
    table
}
