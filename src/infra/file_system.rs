use anyhow::{Context, anyhow};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Read access to the files named by the git listing.
///
/// Paths are repository-relative strings exactly as git reports them.
pub trait FileSource {
    fn read_sample(&self, path: &str, limit: usize) -> io::Result<Vec<u8>>;

    fn read_all(&self, path: &str) -> io::Result<Vec<u8>>;

    fn size(&self, path: &str) -> io::Result<u64>;
}

/// The checked-out working tree of a repository.
pub struct WorkTree {
    root: PathBuf,
}

impl WorkTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSource for WorkTree {
    fn read_sample(&self, path: &str, limit: usize) -> io::Result<Vec<u8>> {
        let file = fs::File::open(self.resolve(path))?;
        let mut sample = Vec::with_capacity(limit);
        file.take(limit as u64).read_to_end(&mut sample)?;
        Ok(sample)
    }

    fn read_all(&self, path: &str) -> io::Result<Vec<u8>> {
        debug!("Reading file contents: {}", path);
        let contents = fs::read(self.resolve(path))?;
        debug!("Read {} bytes from file", contents.len());
        Ok(contents)
    }

    fn size(&self, path: &str) -> io::Result<u64> {
        Ok(fs::metadata(self.resolve(path))?.len())
    }
}

/// Lists the files tracked by git under `root`, in git's own order.
pub fn list_tracked_files(root: &Path) -> anyhow::Result<Vec<String>> {
    info!("Listing tracked files in: {}", root.display());

    let output = Command::new("git")
        .args(["ls-files", "--cached", "-z"])
        .current_dir(root)
        .output()
        .context("Failed to run git; is it installed?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "Failed to list Git files in {}; possibly not a Git repository: {}",
            root.display(),
            stderr.trim()
        ));
    }

    let files = parse_ls_files(&output.stdout);
    info!("Found {} tracked files", files.len());
    Ok(files)
}

/// Splits NUL-separated `git ls-files -z` output into paths.
pub fn parse_ls_files(output: &[u8]) -> Vec<String> {
    output
        .split(|&b| b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect()
}
