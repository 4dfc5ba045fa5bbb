//! Finds the `data/` directory holding `world.ron` and the help files.
//!
//! `cargo run` from the workspace root, `cargo test` from the engine crate and an
//! installed binary each see the data from a different working directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Resolved once, on first use.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Path to a file in the data directory, e.g. `data_path("world.ron")`.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// First candidate directory that contains `world.ron`, checked relative to the working
/// directory and then to the executable. Falls back to the workspace layout.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("labyrinth_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("data"));
        // target/{debug,release}/ sits two levels below the workspace root
        for ancestor in dir.ancestors().skip(1).take(2) {
            candidates.push(ancestor.join("labyrinth_engine/data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.join("world.ron").is_file())
        .unwrap_or_else(|| PathBuf::from("labyrinth_engine/data"))
}
