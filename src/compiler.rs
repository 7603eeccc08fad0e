//! Compiling an iconset into an icon container file.
//!
//! Packaging is delegated to a platform tool. [`IconCompiler`] abstracts it so
//! the rendering side stays portable and testable without that tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// A tool that turns an iconset directory into a single icon file.
pub trait IconCompiler {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Fails with [`Error::ToolNotFound`] if the tool cannot be run here.
    ///
    /// Called before anything is rendered or written.
    fn ensure_available(&self) -> Result<()>;

    /// Compiles `iconset_dir` into `output`.
    fn compile(&self, iconset_dir: &Path, output: &Path) -> Result<()>;
}

/// macOS `iconutil`, producing `.icns` files.
#[derive(Debug, Clone)]
pub struct Iconutil {
    program: PathBuf,
}

impl Default for Iconutil {
    fn default() -> Self {
        Self {
            program: PathBuf::from("iconutil"),
        }
    }
}

impl Iconutil {
    /// Uses `iconutil` from the executable search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given program instead of `iconutil`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolves the program to an executable file, searching `PATH` for bare names.
    fn locate(&self) -> Option<PathBuf> {
        which::which(&self.program)
            .inspect_err(|err| {
                debug!(tool = %self.program.display(), %err, "icon compiler lookup failed");
            })
            .ok()
    }
}

impl IconCompiler for Iconutil {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("iconutil")
    }

    fn ensure_available(&self) -> Result<()> {
        match self.locate() {
            Some(path) => {
                debug!(tool = %path.display(), "found icon compiler");
                Ok(())
            }
            None => Err(Error::ToolNotFound {
                tool: self.name().to_string(),
            }),
        }
    }

    fn compile(&self, iconset_dir: &Path, output: &Path) -> Result<()> {
        info!(
            tool = self.name(),
            iconset = %iconset_dir.display(),
            output = %output.display(),
            "compiling iconset"
        );

        let result = Command::new(&self.program)
            .arg("-c")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|source| Error::ToolLaunch {
                tool: self.name().to_string(),
                source,
            })?;

        if !result.status.success() {
            return Err(Error::ToolFailed {
                tool: self.name().to_string(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_reported() {
        let tool = Iconutil::with_program("definitely-not-an-icon-compiler-7f3a");
        let err = tool.ensure_available().unwrap_err();
        assert!(matches!(
            err,
            Error::ToolNotFound { ref tool } if tool == "definitely-not-an-icon-compiler-7f3a"
        ));
    }

    #[test]
    fn missing_explicit_path_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let tool = Iconutil::with_program(tmp.path().join("iconutil"));
        assert_eq!(tool.name(), "iconutil");
        assert!(matches!(
            tool.ensure_available(),
            Err(Error::ToolNotFound { .. })
        ));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        fn script(dir: &Path, body: &str) -> PathBuf {
            let path = dir.join("fake-iconutil");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn non_executable_file_is_not_found() {
            let tmp = tempfile::tempdir().unwrap();
            let path = tmp.path().join("iconutil");
            fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

            let tool = Iconutil::with_program(&path);
            assert!(matches!(
                tool.ensure_available(),
                Err(Error::ToolNotFound { ref tool }) if tool == "iconutil"
            ));
        }

        #[test]
        fn compile_passes_iconutil_arguments() {
            let tmp = tempfile::tempdir().unwrap();
            // Writes its arguments into the -o target
            let tool = Iconutil::with_program(script(tmp.path(), r#"echo "$@" > "$5""#));
            tool.ensure_available().unwrap();

            let iconset = tmp.path().join("app.iconset");
            let output = tmp.path().join("out.icns");
            tool.compile(&iconset, &output).unwrap();

            let args = fs::read_to_string(&output).unwrap();
            assert_eq!(
                args.trim(),
                format!("-c icns {} -o {}", iconset.display(), output.display())
            );
        }

        #[test]
        fn non_zero_exit_is_fatal() {
            let tmp = tempfile::tempdir().unwrap();
            let tool = Iconutil::with_program(script(tmp.path(), "echo 'bad iconset' >&2; exit 3"));

            let err = tool
                .compile(&tmp.path().join("app.iconset"), &tmp.path().join("out.icns"))
                .unwrap_err();
            match err {
                Error::ToolFailed { status, stderr, .. } => {
                    assert_eq!(status.code(), Some(3));
                    assert_eq!(stderr, "bad iconset");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
