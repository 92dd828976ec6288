//! Batch descriptors loaded from a TOML manifest.
//!
//! ```toml
//! package = "models"
//!
//! [[enum]]
//! type = "UserType"
//! values = ["Admin", "CustomerSupport"]
//! prefix = "UserType"
//! json = "string"
//! sql = "string"
//! out = "src/user_type.rs"
//! ```

use std::{
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Enum, Error, Result};

/// Default filename used in error reports when parsing from a string.
pub const MANIFEST_FILE_NAME: &str = "enumerate.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Package inherited by every enum that does not set its own.
    #[serde(default)]
    pub package: Option<String>,

    #[serde(default, rename = "enum")]
    pub enums: Vec<Enum>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE_NAME)
    }
}

impl Manifest {
    /// Load a manifest file.
    ///
    /// Relative output paths, and the default output paths of enums without
    /// one, are resolved against the manifest's directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let manifest = Self::from_str_with_filename(&content, &path.display().to_string())?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.resolve_paths(base))
    }

    /// Parse a manifest with a custom filename for error reporting.
    ///
    /// Two enums may not write to the same file.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let mut manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        if let Some(package) = &manifest.package {
            for descriptor in &mut manifest.enums {
                if descriptor.package.is_empty() {
                    descriptor.package = package.clone();
                }
            }
        }

        manifest.check_outputs()?;
        Ok(manifest)
    }

    fn check_outputs(&self) -> Result<()> {
        let mut outputs: IndexMap<PathBuf, &str> = IndexMap::new();
        for descriptor in &self.enums {
            let path: PathBuf = descriptor
                .file_name()
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            if let Some(first) = outputs.insert(path.clone(), descriptor.type_name.as_str()) {
                return Err(Box::new(Error::DuplicateOutput {
                    path,
                    first: first.to_string(),
                    second: descriptor.type_name.clone(),
                }));
            }
        }
        Ok(())
    }

    /// Anchor every enum's output path at `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for descriptor in &mut self.enums {
            let path: PathBuf = base.join(descriptor.file_name());
            descriptor.out_file = Some(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Encoding;

    const MANIFEST: &str = r#"
package = "models"

[[enum]]
type = "UserType"
values = ["Admin", "CustomerSupport"]
prefix = "UserType"
json = "string"

[[enum]]
package = "billing"
type = "Plan"
values = ["free", "pro"]
sql = "int"
out = "src/plan.rs"
"#;

    #[test]
    fn test_parse_inherits_package() {
        let manifest: Manifest = MANIFEST.parse().unwrap();

        assert_eq!(manifest.enums.len(), 2);
        assert_eq!(manifest.enums[0].package, "models");
        assert_eq!(manifest.enums[0].json_encoding, Encoding::String);
        assert_eq!(manifest.enums[1].package, "billing");
        assert_eq!(manifest.enums[1].sql_encoding, Encoding::Int);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.enums.is_empty());
        assert!(manifest.package.is_none());
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "[[enum]]\ntype = \"Kind\"\njson = \"float\"\n";
        let err = src.parse::<Manifest>().unwrap_err();

        match *err {
            Error::Parse { filename, span, .. } => {
                assert_eq!(filename, MANIFEST_FILE_NAME);
                let span = span.unwrap();
                assert!(src[span.offset()..span.offset() + span.len()].contains("float"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "[[enum]]\ntype = \"Kind\"\nvalue = [\"a\"]\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_shared_output_is_rejected() {
        let src = r#"
[[enum]]
type = "UserType"

[[enum]]
type = "Role"
out = "./user_type.rs"
"#;
        let err = src.parse::<Manifest>().unwrap_err();

        match *err {
            Error::DuplicateOutput {
                ref path,
                ref first,
                ref second,
            } => {
                assert_eq!(path, Path::new("user_type.rs"));
                assert_eq!(first, "UserType");
                assert_eq!(second, "Role");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "'UserType' and 'Role' are both written to 'user_type.rs'"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_open_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("enumerate.toml");
        fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::open(&path).unwrap();

        assert_eq!(
            manifest.enums[0].file_name(),
            temp.path().join("user_type.rs")
        );
        assert_eq!(
            manifest.enums[1].file_name(),
            temp.path().join("src").join("plan.rs")
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
