use super::CommandHandler;
use crate::catalog::load_path;
use crate::render::render;
use crate::Result;
use std::io::Write;
use std::path::PathBuf;

/// Handler for the `tree` command
pub struct TreeCommand {
    pub source: PathBuf,
    pub name: String,
    pub verbosity: u32,
}

impl CommandHandler for TreeCommand {
    fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}

impl TreeCommand {
    /// Create new tree command
    pub fn new(source: PathBuf, name: String, verbosity: u32) -> Self {
        Self {
            source,
            name,
            verbosity,
        }
    }

    /// Load the source once and write the rendered tree to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let library = load_path(&self.source)?;
        tracing::debug!(
            path = %self.source.display(),
            packages = library.package_count(),
            verbosity = self.verbosity,
            "rendering catalog tree"
        );
        for line in render(&library, &self.name, self.verbosity) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}
