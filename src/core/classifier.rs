use crate::domain::models::Classification;
use crate::infra::file_system::FileSource;
use log::debug;

/// Number of leading bytes inspected by the text heuristic.
pub const SAMPLE_SIZE: usize = 512;

/// True when any `/`-separated segment of `path` starts with a dot.
///
/// Backslashes are separators only on Windows; elsewhere they are legal
/// filename characters.
pub fn is_hidden(path: &str) -> bool {
    let is_separator = |c: char| c == '/' || (cfg!(windows) && c == '\\');
    path.split(is_separator)
        .any(|segment| segment.starts_with('.'))
}

/// Heuristic text check over a leading sample of a file.
///
/// The sample must be valid UTF-8 and at most 10% control bytes.
pub fn is_text_sample(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }

    if std::str::from_utf8(sample).is_err() {
        return false;
    }

    let control_bytes = sample
        .iter()
        .filter(|&&b| b < 32 && !matches!(b, b'\n' | b'\r' | b'\t'))
        .count();

    control_bytes * 10 <= sample.len()
}

/// Samples `path` and decides text or binary. Unreadable files are binary.
pub fn is_text_file(source: &impl FileSource, path: &str) -> bool {
    match source.read_sample(path, SAMPLE_SIZE) {
        Ok(sample) => is_text_sample(&sample),
        Err(e) => {
            debug!("Cannot sample {}: {}", path, e);
            false
        }
    }
}

pub fn classify(source: &impl FileSource, path: &str) -> Classification {
    if is_hidden(path) {
        Classification::Hidden
    } else if is_text_file(source, path) {
        Classification::Text
    } else {
        Classification::Binary
    }
}
