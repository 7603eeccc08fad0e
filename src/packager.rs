//! End-to-end generation: render, stage, compile.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::compiler::IconCompiler;
use crate::error::{Error, Result};
use crate::iconset::{ICONSET_DIR_NAME, IconsetBuilder};
use crate::manifest::IconsetManifest;

/// Renders the iconset and packages it with an [`IconCompiler`].
///
/// # Example
///
/// ```no_run
/// use pulse_icon_renderer::{IconPackager, Iconutil};
///
/// let packager = IconPackager::new(Iconutil::new());
/// packager.run("/tmp/out.icns".as_ref(), "/tmp/work".as_ref())?;
/// # Ok::<(), pulse_icon_renderer::Error>(())
/// ```
pub struct IconPackager<C: IconCompiler> {
    compiler: C,
    builder: IconsetBuilder,
}

impl<C: IconCompiler> IconPackager<C> {
    /// A packager for the standard iconset.
    pub fn new(compiler: C) -> Self {
        Self {
            compiler,
            builder: IconsetBuilder::new(),
        }
    }

    /// Replaces the iconset builder.
    pub fn with_builder(mut self, builder: IconsetBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Returns the compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Writes `<workdir>/app.iconset` and compiles it into `output`.
    ///
    /// The compiler's availability is checked first; if it is missing,
    /// nothing is rendered or written. The output's parent directory is
    /// created if needed.
    pub fn run(&self, output: &Path, workdir: &Path) -> Result<IconsetManifest> {
        self.compiler.ensure_available()?;

        let output = absolute(output)?;
        let iconset_dir = absolute(workdir)?.join(ICONSET_DIR_NAME);

        let manifest = self.builder.build(&iconset_dir)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
        }
        self.compiler.compile(&iconset_dir, &output)?;

        info!(output = %output.display(), "icon written");
        Ok(manifest)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| Error::io("resolve path", path, e))
}
