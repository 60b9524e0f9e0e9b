//! Click feedback listens on `window` in the bubble phase, so any component
//! handler that stops propagation would silence the click sound.

use std::fs;
use std::path::Path;

fn handlers_stopping_propagation(dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            handlers_stopping_propagation(&path, out);
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (n, line) in content.lines().enumerate() {
            if line.contains("stop_propagation") || line.contains("stop_immediate_propagation") {
                out.push(format!("  {}:{}", path.display(), n + 1));
            }
        }
    }
}

#[test]
fn no_view_handler_stops_propagation() {
    assert!(Path::new("src/components").is_dir(), "run from the kiosk crate root");
    let mut hits = Vec::new();
    handlers_stopping_propagation(Path::new("src/components"), &mut hits);
    handlers_stopping_propagation(Path::new("src/pages"), &mut hits);
    assert!(hits.is_empty(), "stopping propagation silences click feedback:\n{}", hits.join("\n"));
}
