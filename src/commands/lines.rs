//! The `lines` command: touched-line inspection for one patch.

use super::read_input;
use crate::cli::LinesArgs;
use crate::error::Result;
use crate::patch::{map_hunk, parse_patch, LineChange};

/// Print the touched lines of a patch, one per line with classification.
pub fn cmd_lines(args: LinesArgs) -> Result<()> {
    let patch = read_input(&args.patch_file)?;
    let hunks = parse_patch(&patch);

    if hunks.is_empty() {
        println!("No hunks found.");
        return Ok(());
    }

    let mut touched_total = 0usize;
    for hunk in &hunks {
        for touched in map_hunk(hunk).touched {
            let kind = match touched.change {
                LineChange::Insertion => "insertion",
                LineChange::Replacement => "replacement",
            };
            println!("{}\t{}", touched.line, kind);
            touched_total += 1;
        }
    }

    println!();
    println!(
        "{} touched line(s) across {} hunk(s).",
        touched_total,
        hunks.len()
    );

    Ok(())
}
