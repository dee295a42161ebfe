// src/discovery.rs

//! Selection of the checks to run from the checks directory.

use tracing::{debug, info};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::layout::Layout;
use crate::types::Check;

/// Documentation file kept next to the checks.
pub const README_NAME: &str = "README.md";

/// Names that are never executed, in addition to the runner's own name.
pub const RESERVED_NAMES: &[&str] = &[README_NAME];

/// List the checks in `layout.checks_dir`.
///
/// Only direct entries are considered. An entry is skipped when its name is
/// reserved (see [`is_reserved`]) or when it is not executable. The result
/// keeps the order in which the filesystem listed the entries.
pub fn discover_checks(fs: &dyn FileSystem, layout: &Layout) -> Result<Vec<Check>> {
    let mut checks = Vec::new();

    for path in fs.read_dir(&layout.checks_dir)? {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        if is_reserved(&name, layout) {
            debug!(entry = %name, "skipping reserved entry");
            continue;
        }
        if !fs.is_executable(&path) {
            debug!(entry = %name, "skipping non-executable entry");
            continue;
        }

        checks.push(Check::new(name, path));
    }

    info!(
        count = checks.len(),
        dir = %layout.checks_dir.display(),
        "discovered checks"
    );
    Ok(checks)
}

/// Exact-name match against [`RESERVED_NAMES`] and the runner's own name.
pub fn is_reserved(name: &str, layout: &Layout) -> bool {
    name == layout.runner_name || RESERVED_NAMES.contains(&name)
}
