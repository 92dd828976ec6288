use std::path::PathBuf;

use clap::Parser;
use enumerate_codegen::{Encoding, Enum, Generator, Manifest};
use enumerate_core::File;
use eyre::Result;
use tracing::{debug, error, warn};

use crate::ops::{resolve_package, split_values};

/// Extension trait for exiting on input errors with pretty formatting.
///
/// Errors caused by the user's input are rendered as miette diagnostics and
/// terminate the process; anything else is handed to eyre.
pub(crate) trait OrExit<T> {
    fn or_exit(self) -> Result<T>;
}

impl<T> OrExit<T> for enumerate_codegen::Result<T> {
    fn or_exit(self) -> Result<T> {
        match self {
            Ok(v) => Ok(v),
            Err(e) if e.is_configuration() => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
            Err(e) => Err(eyre::Report::new(*e)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "enumerate")]
#[command(version)]
#[command(about = "Generate integer-backed Rust enumerations")]
pub(crate) struct Cli {
    /// The enum type name
    #[arg(long = "type", value_name = "NAME", required_unless_present = "manifest")]
    pub type_name: Option<String>,

    /// Doc comment for the type; must start with "<NAME> is"
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated enum values
    #[arg(long, value_name = "A,B,...")]
    pub values: Option<String>,

    /// Prefix applied to each enum value
    #[arg(long)]
    pub prefix: Option<String>,

    /// JSON encoding {string, int}
    #[arg(long, value_name = "ENCODING")]
    pub json: Option<String>,

    /// SQL encoding {string, int}
    #[arg(long, value_name = "ENCODING")]
    pub sql: Option<String>,

    /// Output file (defaults to <snake_case_type>.rs)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Crate name for the generated header (defaults to the enclosing Cargo package)
    #[arg(long)]
    pub package: Option<String>,

    /// Generate every enum listed in a TOML manifest
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["type_name", "description", "values", "prefix", "json", "sql", "output"]
    )]
    pub manifest: Option<PathBuf>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let mut descriptors = match &self.manifest {
            Some(path) => {
                debug!(manifest = %path.display(), "loading manifest");
                Manifest::open(path).or_exit()?.enums
            }
            None => vec![self.descriptor().or_exit()?],
        };

        if descriptors.is_empty() {
            warn!("manifest defines no enums, nothing to generate");
            return Ok(());
        }

        // Generate everything before touching the disk.
        let mut files = Vec::with_capacity(descriptors.len());
        for descriptor in &mut descriptors {
            resolve_package(descriptor, self.package.as_deref());
            let result = Generator::new(descriptor).generate();
            if result.is_err() {
                error!(ty = %descriptor.type_name, "failed to generate enum");
            }
            files.push(result.or_exit()?);
        }

        if self.dry_run {
            Self::preview(&files);
            return Ok(());
        }

        for file in &files {
            file.write()?;
            println!("Generated {}", file.path().display());
        }

        Ok(())
    }

    /// Build the single descriptor described by the flags.
    fn descriptor(&self) -> enumerate_codegen::Result<Enum> {
        let mut descriptor = Enum::new("", self.type_name.clone().unwrap_or_default())
            .description(self.description.clone().unwrap_or_default())
            .values(split_values(self.values.as_deref().unwrap_or_default()))
            .prefix(self.prefix.clone().unwrap_or_default())
            .json(Encoding::from_token("json", self.json.as_deref().unwrap_or_default())?)
            .sql(Encoding::from_token("sql", self.sql.as_deref().unwrap_or_default())?);

        if let Some(output) = &self.output {
            descriptor = descriptor.out_file(output);
        }

        Ok(descriptor)
    }

    fn preview(files: &[File]) {
        for file in files {
            println!("── {} ──", file.path().display());
            println!("{}", file.content());
        }
    }
}
