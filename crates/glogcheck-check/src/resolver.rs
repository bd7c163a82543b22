//! Call-site resolution
//!
//! The compiler records where each `#[track_caller]` chain started; this
//! module turns that location into the raw text of the source line.
//! Nothing is cached: the same location may be resolved many times and the
//! file is re-read on each failure.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glogcheck_core::{CallSite, Error, Result, SourceLocation};

#[derive(Clone, Debug, Default)]
pub struct CallSiteResolver {
    roots: Vec<PathBuf>,
}

impl CallSiteResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Read the source line at `at`.
    ///
    /// Paths recorded by the compiler are relative to the workspace root, so
    /// besides the configured roots every ancestor of the working directory
    /// is tried.
    pub fn resolve(&self, at: &SourceLocation) -> Result<CallSite> {
        if at.line == 0 {
            return Err(Error::resolution(at.file, at.line, "line numbers start at 1"));
        }
        let path = self
            .locate(at.file)
            .ok_or_else(|| Error::resolution(at.file, at.line, "source file not found"))?;
        let reader = BufReader::new(File::open(&path)?);
        let source_text = match reader.lines().nth(at.line as usize - 1) {
            Some(line) => line?,
            None => {
                return Err(Error::resolution(at.file, at.line, "line is past end of file"));
            }
        };
        Ok(CallSite {
            file: at.file.to_string(),
            line: at.line,
            source_text,
        })
    }

    fn locate(&self, file: &str) -> Option<PathBuf> {
        let recorded = Path::new(file);
        if recorded.is_absolute() {
            return recorded.is_file().then(|| recorded.to_path_buf());
        }
        let cwd = std::env::current_dir().ok();
        std::iter::once(PathBuf::new())
            .chain(self.roots.iter().cloned())
            .chain(cwd.iter().flat_map(|d| d.ancestors().map(Path::to_path_buf)))
            .map(|base| base.join(recorded))
            .find(|candidate| candidate.is_file())
    }
}
