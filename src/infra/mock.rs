use crate::infra::file_system::FileSource;
use std::collections::HashMap;
use std::io;

/// In-memory `FileSource` for unit tests.
pub struct MockFileSystem {
    files: HashMap<String, Vec<u8>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn add_file(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files.insert(path.to_string(), content.into());
    }

    pub fn remove_file(&mut self, path: &str) {
        self.files.remove(path);
    }

    fn get(&self, path: &str) -> io::Result<&Vec<u8>> {
        self.files
            .get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }
}

impl FileSource for MockFileSystem {
    fn read_sample(&self, path: &str, limit: usize) -> io::Result<Vec<u8>> {
        let content = self.get(path)?;
        Ok(content[..content.len().min(limit)].to_vec())
    }

    fn read_all(&self, path: &str) -> io::Result<Vec<u8>> {
        self.get(path).cloned()
    }

    fn size(&self, path: &str) -> io::Result<u64> {
        Ok(self.get(path)?.len() as u64)
    }
}
