use crate::infra::file_system::FileSource;
use log::debug;

/// Roughly 3.5 bytes of source text per token.
pub fn estimate_tokens(size: u64) -> u64 {
    size * 10 / 35
}

/// Token estimate for the file at `path`, or 0 when it cannot be stat'ed.
pub fn estimate(source: &impl FileSource, path: &str) -> u64 {
    match source.size(path) {
        Ok(size) => estimate_tokens(size),
        Err(e) => {
            debug!("Cannot stat {}: {}", path, e);
            0
        }
    }
}
