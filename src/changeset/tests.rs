use super::*;

fn file(name: &str, status: FileStatus, patch: Option<&str>) -> ChangedFile {
    ChangedFile {
        filename: name.to_string(),
        status,
        patch: patch.map(String::from),
    }
}

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Extension handling
// ============================================================================

#[test]
fn test_normalize_extensions() {
    let normalized = normalize_extensions(&exts(&[" .CPP ", "h", ".Hpp", ""]));
    assert_eq!(normalized, vec!["cpp", "h", "hpp"]);
}

#[test]
fn test_normalize_drops_dot_only_entry() {
    // "." trims to nothing; keeping it would match extensionless files.
    assert!(normalize_extensions(&exts(&["."])).is_empty());
}

#[test]
fn test_file_extension() {
    assert_eq!(file_extension("src/main.CPP"), Some("cpp".to_string()));
    assert_eq!(file_extension("a/b/c.tar.gz"), Some("gz".to_string()));
    assert_eq!(file_extension("Makefile"), None);
    assert_eq!(file_extension(".clang-tidy"), None);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_by_extension() {
    let filter = ChangeSetFilter::new(&exts(&["cpp", "h"]), &[]).unwrap();
    let files = vec![
        file("src/a.cpp", FileStatus::Modified, Some("@@ -1,0 +1,1 @@\n+x")),
        file("assets/b.png", FileStatus::Modified, Some("@@ -1,0 +1,1 @@\n+x")),
    ];

    let selected = filter.select(&files);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].filename, "src/a.cpp");
}

#[test]
fn test_select_extension_is_case_insensitive() {
    let filter = ChangeSetFilter::new(&exts(&["CPP"]), &[]).unwrap();
    let files = vec![file(
        "src/a.CpP",
        FileStatus::Added,
        Some("@@ -0,0 +1,1 @@\n+x"),
    )];

    assert_eq!(filter.select(&files).len(), 1);
}

#[test]
fn test_select_by_status() {
    let filter = ChangeSetFilter::new(&exts(&["cpp"]), &[]).unwrap();
    let patch = Some("@@ -1,1 +1,1 @@\n-a\n+b");
    let files = vec![
        file("added.cpp", FileStatus::Added, patch),
        file("modified.cpp", FileStatus::Modified, patch),
        file("removed.cpp", FileStatus::Removed, patch),
        file("renamed.cpp", FileStatus::Renamed, patch),
        file("other.cpp", FileStatus::Other, patch),
    ];

    let selected = filter.select(&files);
    let names: Vec<&str> = selected.iter().map(|f| f.filename.as_str()).collect();

    assert_eq!(names, vec!["added.cpp", "modified.cpp"]);
}

#[test]
fn test_select_requires_patch() {
    let filter = ChangeSetFilter::new(&exts(&["cpp"]), &[]).unwrap();
    let files = vec![
        file("no_patch.cpp", FileStatus::Modified, None),
        file("empty_patch.cpp", FileStatus::Modified, Some("")),
        file("with_patch.cpp", FileStatus::Modified, Some("@@ -1,0 +1,1 @@\n+x")),
    ];

    let selected = filter.select(&files);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].filename, "with_patch.cpp");
}

#[test]
fn test_select_never_matches_extensionless_file() {
    let filter = ChangeSetFilter::new(&exts(&["cpp", ""]), &[]).unwrap();
    let files = vec![file(
        "Makefile",
        FileStatus::Modified,
        Some("@@ -1,0 +1,1 @@\n+x"),
    )];

    assert!(filter.select(&files).is_empty());
}

#[test]
fn test_select_preserves_input_order() {
    let filter = ChangeSetFilter::new(&exts(&["cpp"]), &[]).unwrap();
    let patch = Some("@@ -1,0 +1,1 @@\n+x");
    let files = vec![
        file("z.cpp", FileStatus::Modified, patch),
        file("a.cpp", FileStatus::Modified, patch),
        file("m.cpp", FileStatus::Added, patch),
    ];

    let names: Vec<String> = filter
        .select(&files)
        .into_iter()
        .map(|f| f.filename)
        .collect();

    assert_eq!(names, vec!["z.cpp", "a.cpp", "m.cpp"]);
}

#[test]
fn test_select_honors_ignore_globs() {
    let filter = ChangeSetFilter::new(
        &exts(&["cpp"]),
        &["third_party/**".to_string(), "**/generated_*.cpp".to_string()],
    )
    .unwrap();
    let patch = Some("@@ -1,0 +1,1 @@\n+x");
    let files = vec![
        file("src/a.cpp", FileStatus::Modified, patch),
        file("third_party/vendored.cpp", FileStatus::Modified, patch),
        file("src/generated_pb.cpp", FileStatus::Modified, patch),
    ];

    let selected = filter.select(&files);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].filename, "src/a.cpp");
}

#[test]
fn test_invalid_ignore_glob_is_a_user_error() {
    let result = ChangeSetFilter::new(&exts(&["cpp"]), &["src/[".to_string()]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid ignore glob"));
}

// ============================================================================
// Deserialization
// ============================================================================

#[test]
fn test_changed_file_from_api_json() {
    let json = r#"{
        "filename": "src/scene.cpp",
        "status": "modified",
        "patch": "@@ -1,1 +1,1 @@\n-a\n+b",
        "additions": 1,
        "deletions": 1
    }"#;

    let parsed: ChangedFile = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.filename, "src/scene.cpp");
    assert_eq!(parsed.status, FileStatus::Modified);
    assert!(parsed.patch.is_some());
}

#[test]
fn test_changed_file_without_patch_field() {
    // Binary files come back with no patch at all.
    let json = r#"{"filename": "assets/icon.png", "status": "added"}"#;
    let parsed: ChangedFile = serde_json::from_str(json).unwrap();
    assert!(parsed.patch.is_none());
}

#[test]
fn test_unknown_status_maps_to_other() {
    let json = r#"{"filename": "src/a.cpp", "status": "copied"}"#;
    let parsed: ChangedFile = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.status, FileStatus::Other);
}
