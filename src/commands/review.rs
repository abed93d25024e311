//! The `review` command: the full pull-request pipeline.

use super::{finish, split_extension_list};
use crate::annotations;
use crate::changeset::ChangeSetFilter;
use crate::cli::ReviewArgs;
use crate::config::Config;
use crate::error::Result;
use crate::findings;
use crate::github;
use crate::patch;
use crate::report::{write_report, RunReport};
use crate::tool;

/// Effective settings for a review run: config file values with CLI
/// overrides applied field by field.
#[derive(Debug)]
struct ReviewSettings {
    extensions: Vec<String>,
    ignore: Vec<String>,
    source_dir: String,
    build_dir: String,
    cmake_args: String,
    clang_tidy_args: String,
    clang_tidy_file: String,
    warnings_as_errors: bool,
    only_touched_lines: bool,
    fail_on_findings: bool,
    workspace_root: String,
}

impl ReviewSettings {
    fn from_config(config: Config, args: &ReviewArgs) -> Self {
        Self {
            extensions: match &args.extensions {
                Some(raw) => split_extension_list(raw),
                None => config.extensions.clone(),
            },
            ignore: config.ignore.clone(),
            source_dir: args
                .source_dir
                .clone()
                .unwrap_or_else(|| config.source_dir.clone()),
            build_dir: args
                .build_dir
                .clone()
                .unwrap_or_else(|| config.build_dir.clone()),
            cmake_args: args
                .cmake_args
                .clone()
                .unwrap_or_else(|| config.cmake_args.clone()),
            clang_tidy_args: args
                .clang_tidy_args
                .clone()
                .unwrap_or_else(|| config.clang_tidy_args.clone()),
            clang_tidy_file: args
                .clang_tidy_file
                .clone()
                .unwrap_or_else(|| config.clang_tidy_file.clone()),
            warnings_as_errors: args.warnings_as_errors.unwrap_or(config.warnings_as_errors),
            only_touched_lines: args.only_touched_lines.unwrap_or(config.only_touched_lines),
            fail_on_findings: args.fail_on_findings.unwrap_or(config.fail_on_findings),
            workspace_root: match &args.workspace_root {
                Some(root) => root.clone(),
                None => config.resolved_workspace_root(),
            },
        }
    }
}

/// Run the full review pipeline for a pull request.
pub fn cmd_review(args: ReviewArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let settings = ReviewSettings::from_config(config, &args);
    tracing::debug!(?settings, "effective review settings");

    // Change set: fetch, filter, map.
    let all_files = github::fetch_pull_request_files(&args.repo, args.pr, args.token.as_deref())?;
    let filter = ChangeSetFilter::new(&settings.extensions, &settings.ignore)?;
    let files = filter.select(&all_files);

    if files.is_empty() {
        println!("No files to check.");
        if let Some(path) = &args.report {
            let report = RunReport::new(Some(args.repo), Some(args.pr), 0, 0, Vec::new());
            write_report(path, &report)?;
        }
        return Ok(());
    }

    let touched = patch::touched_table(&files);

    // External tools: configure, analyze, parse.
    tool::configure_build(&settings.source_dir, &settings.build_dir, &settings.cmake_args)?;

    let filenames: Vec<String> = files.iter().map(|f| f.filename.clone()).collect();
    let tidy_output = tool::run_clang_tidy(
        &settings.build_dir,
        &filenames,
        &settings.clang_tidy_file,
        &settings.clang_tidy_args,
        settings.warnings_as_errors,
    )?;

    let parsed = findings::parse_tidy_output(&tidy_output);

    // Selection and publication.
    let selected = findings::select(
        &parsed,
        &touched,
        settings.only_touched_lines,
        &settings.workspace_root,
    );
    annotations::emit(&selected);

    if let Some(path) = &args.report {
        let report = RunReport::new(
            Some(args.repo.clone()),
            Some(args.pr),
            files.len(),
            parsed.len(),
            selected.clone(),
        );
        write_report(path, &report)?;
    }

    finish(selected.len(), settings.fail_on_findings)
}
