use crate::core::estimator::estimate;
use crate::domain::models::Rendered;
use crate::infra::file_system::FileSource;
use log::{debug, warn};

pub const PREAMBLE: &str = "Format description: The following are files in the Git repository \
of the project. The files are separated using {{File: filename.txt}}.\n\n";

fn push_numbered_lines(out: &mut Vec<u8>, content: &[u8]) {
    for (idx, line) in content.split(|&b| b == b'\n').enumerate() {
        out.extend_from_slice(format!("{}: ", idx + 1).as_bytes());
        out.extend_from_slice(line);
        out.push(b'\n');
    }
}

/// Concatenates the eligible files into one stream of `{{File: path}}` blocks.
///
/// A file that can no longer be read is logged and left out of both the
/// stream and the statistics.
pub fn render_files<S: AsRef<str>>(
    files: &[S],
    include_line_numbers: bool,
    source: &impl FileSource,
) -> Rendered {
    debug!("Rendering {} files", files.len());
    let mut rendered = Rendered::default();
    rendered.content.extend_from_slice(PREAMBLE.as_bytes());

    for path in files.iter().map(AsRef::as_ref) {
        let content = match source.read_all(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read file {}: {}", path, e);
                rendered.failed.push(path.to_string());
                continue;
            }
        };

        let out = &mut rendered.content;
        out.extend_from_slice(format!("{{{{File: {}}}}}\n", path).as_bytes());
        if include_line_numbers {
            push_numbered_lines(out, &content);
        } else {
            out.extend_from_slice(&content);
        }
        out.push(b'\n');

        let tokens = estimate(source, path);
        debug!("Added file {} (~{} tokens)", path, tokens);
        rendered.stats.file_count += 1;
        rendered.stats.estimated_tokens += tokens;
    }

    rendered
}
