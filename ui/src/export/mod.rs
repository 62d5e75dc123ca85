//! Publication export: CSV encoding plus hand-off to a [`SaveTarget`].

mod csv;
pub use csv::{artifact_name, encode_publications, HEADER};

mod target;
#[cfg(target_arch = "wasm32")]
pub use target::BrowserDownload;
#[cfg(not(target_arch = "wasm32"))]
pub use target::ExportDirectory;
pub use target::{host_target, MemoryTarget, SaveTarget, SavedArtifact};

use thiserror::Error;

use crate::core::sample::PublicationRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Download unavailable: {0}")]
    Host(&'static str),

    #[error("Unable to determine export directory")]
    NoExportDirectory,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `records`, name the artifact after `author` and hand it to `target`.
/// Returns the artifact name on success.
pub fn export_publications(
    author: &str,
    records: &[PublicationRecord],
    target: &dyn SaveTarget,
) -> Result<String, ExportError> {
    let filename = artifact_name(author);
    let content = encode_publications(records);
    target.save(&filename, &content)?;
    tracing::info!(%filename, rows = records.len(), "publications exported");
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample;

    struct Refusing;

    impl SaveTarget for Refusing {
        fn save(&self, _filename: &str, _content: &str) -> Result<(), ExportError> {
            Err(ExportError::Host("blocked"))
        }
    }

    #[test]
    fn export_hands_named_artifact_to_target() {
        let target = MemoryTarget::new();
        let name = export_publications("Jone Mickel", &sample::publications(), &target).unwrap();
        assert_eq!(name, "Jone Mickel_publications.csv");

        let saved = target.last().unwrap();
        assert_eq!(saved.filename, name);
        assert_eq!(saved.content.lines().count(), 4);
    }

    #[test]
    fn refused_save_surfaces_error() {
        let err = export_publications("Ada", &[], &Refusing).unwrap_err();
        assert_eq!(err.to_string(), "Download unavailable: blocked");
    }
}
