use std::io::Write;

use enumerate_core::File;

use crate::{Enum, Error, Result, format_source, render, validate};

/// Drives a descriptor through validation, rendering and formatting.
///
/// Nothing is written until the whole output exists in memory, so a failure
/// at any stage leaves no artifact behind.
pub struct Generator<'a> {
    descriptor: &'a Enum,
}

impl<'a> Generator<'a> {
    pub fn new(descriptor: &'a Enum) -> Self {
        Self { descriptor }
    }

    /// The formatted source for the descriptor.
    pub fn source(&self) -> Result<String> {
        validate(self.descriptor)?;
        let raw = render(self.descriptor)?;
        format_source(&raw)
    }

    /// The formatted source paired with its output path.
    pub fn generate(&self) -> Result<File> {
        Ok(File::new(self.descriptor.file_name(), self.source()?))
    }

    /// Generate and write the source to an arbitrary sink.
    pub fn write_to(&self, mut sink: impl Write) -> Result<()> {
        let code = self.source()?;
        sink.write_all(code.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|source| Box::new(Error::Write { source }))
    }
}

/// Shorthand for [`Generator::source`].
pub fn generate(descriptor: &Enum) -> Result<String> {
    Generator::new(descriptor).source()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::Encoding;

    #[test]
    fn test_generate_pairs_path_and_source() {
        let descriptor = Enum::new("models", "UserType").values(["Admin"]);
        let file = Generator::new(&descriptor).generate().unwrap();

        assert_eq!(file.path(), Path::new("user_type.rs"));
        assert!(file.content().contains("pub const Admin: UserType = UserType(1);"));
    }

    #[test]
    fn test_write_to_sink() {
        let descriptor = Enum::new("models", "Kind")
            .values(["a", "b"])
            .sql(Encoding::Int);
        let mut buffer = Vec::new();
        Generator::new(&descriptor).write_to(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), generate(&descriptor).unwrap());
    }

    #[test]
    fn test_invalid_descriptor_writes_nothing() {
        let descriptor = Enum::new("", "Kind");
        let mut buffer = Vec::new();
        let err = Generator::new(&descriptor).write_to(&mut buffer).unwrap_err();

        assert!(matches!(*err, Error::PackageRequired));
        assert!(buffer.is_empty());
    }
}
