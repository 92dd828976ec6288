//! Operations shared by the command line modes.

use std::path::Path;

use enumerate_codegen::Enum;
use enumerate_core::find_package_name;
use tracing::debug;

/// Split a comma-separated `--values` argument, dropping empty segments.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fill in the descriptor's package if it has none.
///
/// The explicit `package` wins; otherwise the Cargo package owning the output
/// directory is used. When neither is available the package stays empty and
/// validation reports it.
pub fn resolve_package(descriptor: &mut Enum, package: Option<&str>) {
    if !descriptor.package.is_empty() {
        return;
    }

    if let Some(package) = package {
        descriptor.package = package.to_string();
        return;
    }

    let path = descriptor.file_name();
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    match find_package_name(dir) {
        Ok(name) => {
            debug!(package = %name, dir = %dir.display(), "discovered package");
            descriptor.package = name;
        }
        Err(err) => debug!("package discovery failed: {err:#}"),
    }
}
