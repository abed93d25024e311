//! The `annotate` command: publish annotations from saved clang-tidy output.

use super::{finish, read_input, split_extension_list};
use crate::annotations;
use crate::changeset::ChangeSetFilter;
use crate::cli::AnnotateArgs;
use crate::config::Config;
use crate::error::{Result, TidygateError};
use crate::findings;
use crate::github;
use crate::patch;
use crate::report::{write_report, RunReport};
use std::collections::BTreeMap;

/// Emit annotations for a saved clang-tidy output file.
///
/// With `--repo`/`--pr`, the change set is fetched and the touched-line
/// restriction applies exactly as in `review`. Without PR context the
/// restriction must be disabled explicitly; annotating "only touched lines"
/// is meaningless when there is no change set to compare against.
pub fn cmd_annotate(args: AnnotateArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;

    let only_touched_lines = args.only_touched_lines.unwrap_or(config.only_touched_lines);
    let fail_on_findings = args.fail_on_findings.unwrap_or(config.fail_on_findings);
    let extensions = match &args.extensions {
        Some(raw) => split_extension_list(raw),
        None => config.extensions.clone(),
    };
    let workspace_root = match &args.workspace_root {
        Some(root) => root.clone(),
        None => config.resolved_workspace_root(),
    };

    let tidy_output = read_input(&args.tidy_output)?;
    let parsed = findings::parse_tidy_output(&tidy_output);

    let (touched, files_checked) = match (&args.repo, args.pr) {
        (Some(repo), Some(pr)) => {
            let all_files = github::fetch_pull_request_files(repo, pr, args.token.as_deref())?;
            let filter = ChangeSetFilter::new(&extensions, &config.ignore)?;
            let files = filter.select(&all_files);
            (patch::touched_table(&files), files.len())
        }
        _ if only_touched_lines => {
            return Err(TidygateError::UserError(
                "only_touched_lines requires a pull request to compare against.\n\n\
                 Fix: pass --repo and --pr, or disable with --only-touched-lines false."
                    .to_string(),
            ));
        }
        _ => (BTreeMap::new(), 0),
    };

    let selected = findings::select(&parsed, &touched, only_touched_lines, &workspace_root);
    annotations::emit(&selected);

    if let Some(path) = &args.report {
        let report = RunReport::new(
            args.repo.clone(),
            args.pr,
            files_checked,
            parsed.len(),
            selected.clone(),
        );
        write_report(path, &report)?;
    }

    finish(selected.len(), fail_on_findings)
}
