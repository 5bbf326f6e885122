use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Hidden,
    Binary,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Hidden,
    Binary,
    ExtensionExcluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Hidden => "hidden",
            SkipReason::Binary => "binary",
            SkipReason::ExtensionExcluded => "extension-excluded",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct Selection {
    pub eligible: Vec<String>,
    pub skipped: Vec<Skipped>,
}

/// Accepted file extensions, stored with their leading dot.
///
/// The empty string stands for "files without an extension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: HashSet<String>,
}

impl ExtensionFilter {
    /// Parses a comma-separated list such as `"go, rs,"`.
    ///
    /// A blank entry selects extensionless files. Every other entry is
    /// normalized to exactly one leading dot: `go`, `.go` and `..go` all
    /// become `.go`.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .map(|entry| {
                if entry.is_empty() {
                    String::new()
                } else {
                    format!(".{}", entry.trim_start_matches('.'))
                }
            })
            .collect()
    }

    pub fn matches(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }
}

impl FromIterator<String> for ExtensionFilter {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            extensions: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub file_count: usize,
    pub estimated_tokens: u64,
}

#[derive(Debug, Default)]
pub struct Rendered {
    pub content: Vec<u8>,
    pub stats: RunStats,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Clipboard,
    File(String),
    Stdout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub copy_to_clipboard: bool,
    pub extensions: Option<String>,
    pub include_line_numbers: bool,
    pub output: Option<String>,
}

impl Options {
    pub fn extension_filter(&self) -> Option<ExtensionFilter> {
        self.extensions.as_deref().map(ExtensionFilter::parse)
    }

    pub fn destination(&self) -> Destination {
        if self.copy_to_clipboard {
            return Destination::Clipboard;
        }

        match self.output.as_deref() {
            Some("clipboard") => Destination::Clipboard,
            Some("stdout") | Some("-") | None => Destination::Stdout,
            Some(path) => Destination::File(path.to_string()),
        }
    }
}
