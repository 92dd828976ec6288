//! Cargo package discovery.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    name: String,
}

/// Find the name of the Cargo package that owns `dir`.
///
/// Walks from `dir` towards the filesystem root and returns the name of the
/// first `Cargo.toml` with a `[package]` table, converted to its crate
/// identifier form (`my-models` -> `my_models`). Workspace manifests without
/// a package are skipped.
pub fn find_package_name(dir: &Path) -> Result<String> {
    let start = absolute(dir)?;

    for candidate in start.ancestors() {
        let manifest_path = candidate.join("Cargo.toml");
        if !manifest_path.is_file() {
            continue;
        }

        let content = std::fs::read_to_string(&manifest_path)
            .wrap_err_with(|| format!("failed to read '{}'", manifest_path.display()))?;
        let manifest: CargoManifest = toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse '{}'", manifest_path.display()))?;

        if let Some(package) = manifest.package {
            return Ok(package.name.replace('-', "_"));
        }
    }

    bail!(
        "no Cargo package found in '{}' or any of its parents",
        start.display()
    )
}

fn absolute(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().wrap_err("failed to read the current directory")?;
    Ok(cwd.join(dir))
}
