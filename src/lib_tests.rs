//! Crate-wide source checks

use std::fs;
use std::path::{Path, PathBuf};

const MAX_LINE_WIDTH: usize = 100;

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn test_source_lines_fit_max_width() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_files(&src, &mut files);
    assert!(!files.is_empty());

    let mut too_long = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file).unwrap();
        for (i, line) in text.lines().enumerate() {
            if line.chars().count() > MAX_LINE_WIDTH {
                too_long.push(format!("{}:{}", file.display(), i + 1));
            }
        }
    }

    assert!(too_long.is_empty(), "lines over {MAX_LINE_WIDTH} columns: {too_long:?}");
}
