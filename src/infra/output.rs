use crate::domain::models::{Destination, Options};
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const PREVIEW_LENGTH: usize = 200;

pub trait OutputWriter {
    fn write(&self, content: &[u8]) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &[u8]) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path);
        fs::write(Path::new(&self.path), content)?;
        info!("Output written to file: {}", self.path);
        Ok(())
    }
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &[u8]) -> anyhow::Result<()> {
        debug!("Writing output to console");
        let mut stdout = io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }
}

pub struct ClipboardWriter;

#[cfg(feature = "clipboard-support")]
impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &[u8]) -> anyhow::Result<()> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        debug!("Writing output to clipboard");

        let mut ctx = ClipboardContext::new()
            .map_err(|e| anyhow::anyhow!("Failed to access clipboard: {}", e))?;

        let text = String::from_utf8_lossy(content).into_owned();
        ctx.set_contents(text)
            .map_err(|e| anyhow::anyhow!("Failed to copy to clipboard: {}", e))?;

        info!("Output copied to clipboard (size: {} bytes)", content.len());
        Ok(())
    }
}

#[cfg(not(feature = "clipboard-support"))]
impl OutputWriter for ClipboardWriter {
    fn write(&self, _content: &[u8]) -> anyhow::Result<()> {
        Err(anyhow::anyhow!(
            "Clipboard support is not available in this build"
        ))
    }
}

pub fn create_writer(destination: &Destination) -> Box<dyn OutputWriter> {
    match destination {
        Destination::Clipboard => Box::new(ClipboardWriter),
        Destination::File(path) => Box::new(FileWriter::new(path.clone())),
        Destination::Stdout => Box::new(ConsoleWriter),
    }
}

fn preview(content: &[u8], length: usize) -> String {
    let text = String::from_utf8_lossy(content);
    if text.chars().count() > length {
        let safe_substring: String = text.chars().take(length).collect();
        format!("{}...", safe_substring)
    } else {
        text.into_owned()
    }
}

fn write_clipboard_notice(out: &mut impl Write, content: &[u8]) -> io::Result<()> {
    out.execute(SetForegroundColor(Color::Green))?;
    writeln!(out, "\n📋 Content copied to clipboard!")?;
    out.execute(ResetColor)?;

    writeln!(out, "\nPreview of copied content:\n")?;
    writeln!(out, "{}", preview(content, PREVIEW_LENGTH))?;
    out.flush()
}

/// Best-effort confirmation after a clipboard copy; the copy already succeeded.
fn announce_clipboard_copy(out: &mut impl Write, content: &[u8]) {
    if let Err(e) = write_clipboard_notice(out, content) {
        warn!("Could not print clipboard confirmation: {}", e);
    }
}

/// Sends the finished stream to the single destination chosen by `options`.
pub fn dispatch(content: &[u8], options: &Options) -> anyhow::Result<()> {
    let destination = options.destination();
    let writer = create_writer(&destination);
    writer.write(content)?;

    if destination == Destination::Clipboard {
        announce_clipboard_copy(&mut io::stderr(), content);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_file_writer() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();
        let writer = FileWriter::new(path.clone());

        writer.write(b"Test output").unwrap();

        let read_content = fs::read_to_string(path).unwrap();
        assert_eq!(read_content, "Test output");
    }

    #[test]
    fn test_file_writer_overwrites() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "a much longer previous content").unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        FileWriter::new(path.clone()).write(b"new").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_dispatch_to_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output_test.txt");
        let options = Options {
            output: Some(path.to_string_lossy().to_string()),
            ..Options::default()
        };

        dispatch(b"Test output content", &options).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Test output content");
    }

    #[test]
    fn test_dispatch_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("out.txt");
        let options = Options {
            output: Some(path.to_string_lossy().to_string()),
            ..Options::default()
        };

        assert!(dispatch(b"data", &options).is_err());
        assert!(!path.exists());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_clipboard_notice_contains_preview() {
        let mut out = Vec::new();

        announce_clipboard_copy(&mut out, b"{{File: a.txt}}\nhello\n");

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Content copied to clipboard!"));
        assert!(text.contains("{{File: a.txt}}\nhello"));
    }

    #[test]
    fn test_clipboard_notice_failure_is_not_fatal() {
        let mut out = BrokenPipe;

        assert!(write_clipboard_notice(&mut out, b"data").is_err());
        // Only logged; nothing to propagate.
        announce_clipboard_copy(&mut out, b"data");
    }

    #[test]
    fn test_utf8_safe_preview() {
        let content =
            "اهلا مرحب عبدالله 🚀 This string has UTF-8 characters like: ├── ./src/file.rs";

        let short = preview(content.as_bytes(), 20);
        assert_eq!(short.chars().count(), 23);
        assert!(short.ends_with("..."));

        assert_eq!(preview(b"tiny", 20), "tiny");
    }
}
