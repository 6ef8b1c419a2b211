//! Call-site capture for the `source` field.

use std::panic::Location;
use std::path::Path;

/// "absolute-file-path:line" of the code that called the public entry point.
///
/// Entry points carry `#[track_caller]` so that the location reported here is
/// the application's, not Lighthouse's. Best-effort: a path that cannot be made
/// absolute is reported as compiled.
#[track_caller]
pub(crate) fn caller() -> String {
    format_location(Location::caller())
}

fn format_location(location: &Location<'_>) -> String {
    let file = Path::new(location.file());
    let file = if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|dir| dir.join(file))
            .unwrap_or_else(|_| file.to_path_buf())
    };
    format!("{}:{}", file.display(), location.line())
}
