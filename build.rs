//! Bundles assets/css/main.css and its @imports into assets/dist/bundle.css,
//! which the layout links through `asset!`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    watch_stylesheets(Path::new(CSS_DIR));

    if let Err(e) = bundle_css(Path::new(CSS_ENTRY), Path::new(CSS_BUNDLE)) {
        panic!("farm-hub stylesheet bundling failed: {e}");
    }
}

/// Rebuild when any stylesheet is edited, added or removed
fn watch_stylesheets(dir: &Path) {
    println!("cargo:rerun-if-changed={}", dir.display());

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn bundle_css(entry: &Path, output: &Path) -> Result<(), String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(entry)
        .map_err(|e| format!("{}: {e}", entry.display()))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {e}"))?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| format!("print: {e}"))?;

    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    }
    fs::write(output, printed.code).map_err(|e| format!("{}: {e}", output.display()))
}
