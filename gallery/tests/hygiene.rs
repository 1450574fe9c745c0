//! Hygiene for the motion engine.
//!
//! The engine runs inside animation frames, so it must not panic. It is also
//! host-agnostic: time arrives as `dt` from the caller and nothing here may
//! reach for a clock or the browser.

use std::fs;
use std::path::Path;

// Panics: a panic inside a frame callback kills the page.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;

// Silent loss.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Host coupling.
const MAX_CLOCK: usize = 0;
const MAX_BROWSER: usize = 0;
const MAX_PRINT: usize = 0;

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

fn sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn check(files: &[(String, String)], patterns: &[&str], max: usize, label: &str) {
    let found: Vec<_> = patterns.iter().flat_map(|p| hits(files, p)).collect();
    let count: usize = found.iter().map(|(_, c)| c).sum();
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{found:?}");
}

#[test]
fn engine_sources_are_scanned() {
    let files = sources();
    assert!(files.iter().any(|(path, _)| path.ends_with("overlay.rs")));
}

#[test]
fn panic_budget() {
    let files = sources();
    check(&files, &[".unwrap()"], MAX_UNWRAP, ".unwrap()");
    check(&files, &[".expect("], MAX_EXPECT, ".expect()");
    check(&files, &["panic!(", "unreachable!(", "todo!(", "unimplemented!("], MAX_PANIC, "panic macros");
}

#[test]
fn silent_discard_budget() {
    let files = sources();
    check(&files, &["let _ ="], MAX_SILENT_DISCARD, "let _ =");
    check(&files, &[".ok()"], MAX_DOT_OK, ".ok()");
}

#[test]
fn engine_stays_host_agnostic() {
    let files = sources();
    check(&files, &["Instant::now", "SystemTime::now"], MAX_CLOCK, "wall clock");
    check(&files, &["web_sys", "js_sys", "wasm_bindgen"], MAX_BROWSER, "browser binding");
    check(&files, &["println!", "eprintln!", "dbg!("], MAX_PRINT, "print (use `log`)");
}
