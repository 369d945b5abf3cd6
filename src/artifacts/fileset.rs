use std::path::{Path, PathBuf};

/// The working set an operation applies to: a working-directory root and an
/// optional restriction to specific paths beneath it. Owned by the caller,
/// read-only to the dispatch core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    basedir: PathBuf,
    files: Vec<PathBuf>,
}

impl FileSet {
    /// Working set covering everything under `basedir`.
    pub fn new(basedir: PathBuf) -> Self {
        FileSet {
            basedir,
            files: Vec::new(),
        }
    }

    /// Working set restricted to `files`, given relative to `basedir`.
    pub fn with_files(basedir: PathBuf, files: Vec<PathBuf>) -> Self {
        FileSet { basedir, files }
    }

    pub fn basedir(&self) -> &Path {
        &self.basedir
    }

    /// The restricted path list; empty means the whole tree.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
