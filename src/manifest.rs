use colored::Colorize;
use std::path::Path;

/// Fixed manifest filename whose presence marks a valid project root.
pub const PROJECT_MANIFEST: &str = "elm-package.json";

/// Whether the current working directory is a project root. Existence check
/// only; the manifest's contents are never inspected here.
pub fn project_manifest_exists() -> bool {
    manifest_exists_in(Path::new("."))
}

fn manifest_exists_in(directory: &Path) -> bool {
    directory.join(PROJECT_MANIFEST).exists()
}

/// The single diagnostic emitted when dispatch is skipped.
pub fn report_missing_manifest() {
    println!(
        "{}: There is no {PROJECT_MANIFEST} file in this directory. \
         elm-analyse will only work in directories where such a file is located.",
        "Warning".yellow().bold(),
    );
}
