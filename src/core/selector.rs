use crate::core::classifier::classify;
use crate::domain::models::{Classification, ExtensionFilter, Selection, SkipReason, Skipped};
use crate::infra::file_system::FileSource;
use log::debug;

/// Extension of the last path segment including its dot, or `""`.
pub fn extension_of(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Filters `candidates` down to eligible text files, preserving their order.
///
/// Every rejected path is reported in `Selection::skipped` with the reason;
/// logging is left to the caller.
pub fn select_files<S: AsRef<str>>(
    candidates: &[S],
    filter: Option<&ExtensionFilter>,
    source: &impl FileSource,
) -> Selection {
    debug!("Selecting from {} candidate files", candidates.len());
    let mut selection = Selection::default();

    for path in candidates.iter().map(AsRef::as_ref) {
        if path.is_empty() {
            continue;
        }

        let reason = match classify(source, path) {
            Classification::Hidden => Some(SkipReason::Hidden),
            Classification::Binary => Some(SkipReason::Binary),
            Classification::Text => match filter {
                Some(filter) if !filter.matches(extension_of(path)) => {
                    Some(SkipReason::ExtensionExcluded)
                }
                _ => None,
            },
        };

        match reason {
            Some(reason) => selection.skipped.push(Skipped {
                path: path.to_string(),
                reason,
            }),
            None => selection.eligible.push(path.to_string()),
        }
    }

    debug!(
        "Selected {} files, skipped {}",
        selection.eligible.len(),
        selection.skipped.len()
    );
    selection
}
