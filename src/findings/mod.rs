//! clang-tidy diagnostics: parsing and selection for tidygate.
//!
//! clang-tidy's textual output interleaves diagnostics with code excerpts,
//! caret markers, and summary lines. The parser here keeps only the lines
//! matching the diagnostic grammar `<path>:<line>:<column>: <severity>:
//! <message>` and discards everything else. The selector then maps the
//! surviving findings into review annotations, optionally suppressing any
//! finding that does not land on a touched line of the change set.

mod parser;
mod selector;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::parse_tidy_output;
pub use selector::select;
pub use types::{Annotation, AnnotationLevel, Finding, Severity};
