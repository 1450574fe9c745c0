//! Hygiene for the wire types.
//!
//! Every row the backend sends passes through these types on both the server
//! and the client, so decoding must never panic and the crate never prints.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it costs)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "aborts the caller"),
    ("unreachable!(", 0, "aborts the caller"),
    ("todo!(", 0, "unfinished stub"),
    ("let _ =", 0, "drops a Result unseen"),
    (".ok()", 0, "drops an error unseen"),
    ("println!", 0, "writes past the caller's logger"),
    ("dbg!(", 0, "debug leftover"),
    // Cent rounding in `money`.
    (" as u64", 1, "truncating cast"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

fn collect(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "no sources under src/");

    let mut failures = Vec::new();
    for &(pattern, budget, cost) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({cost}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
