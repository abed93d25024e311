//! Workflow-command annotation output.
//!
//! GitHub Actions picks up annotations from specially formatted lines on
//! stdout: `::error file=src/a.cpp,line=5,col=3,title=...::message`. This
//! module renders [`Annotation`] records into that format, with the escaping
//! the workflow-command grammar requires. Only annotations go to stdout;
//! diagnostics are traced to stderr elsewhere.

use crate::findings::{Annotation, AnnotationLevel};

/// Workflow-command keyword for an annotation level.
fn level_command(level: AnnotationLevel) -> &'static str {
    match level {
        AnnotationLevel::Failure => "error",
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Notice => "notice",
    }
}

/// Escape message data: `%`, `\r`, `\n`.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a property value: message escapes plus `:` and `,`, which would
/// otherwise terminate the property list.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Render one annotation as a workflow-command line.
pub fn format_command(annotation: &Annotation) -> String {
    format!(
        "::{command} file={file},line={line},endLine={end_line},col={col},endColumn={end_col},title={title}::{message}",
        command = level_command(annotation.level),
        file = escape_property(&annotation.path),
        line = annotation.start_line,
        end_line = annotation.end_line,
        col = annotation.start_column,
        end_col = annotation.end_column,
        title = escape_property(&annotation.title),
        message = escape_data(&annotation.message),
    )
}

/// Emit all annotations to stdout, preserving order.
pub fn emit(annotations: &[Annotation]) {
    for annotation in annotations {
        println!("{}", format_command(annotation));
    }
}
