//! Destinations for exported artifacts.

use std::cell::RefCell;

use super::ExportError;

/// Host capability that materializes a named text artifact for the user.
pub trait SaveTarget {
    fn save(&self, filename: &str, content: &str) -> Result<(), ExportError>;
}

/// Browser download: stages a Blob, clicks a hidden `download` anchor, then
/// removes the anchor and revokes the object URL.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownload;

#[cfg(target_arch = "wasm32")]
impl SaveTarget for BrowserDownload {
    fn save(&self, filename: &str, content: &str) -> Result<(), ExportError> {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        use crate::core::config::CSV_MIME;

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(content));

        let mut opts = BlobPropertyBag::new();
        opts.type_(CSV_MIME);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| ExportError::Host("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| ExportError::Host("unable to create download URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::Host("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| ExportError::Host("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| ExportError::Host("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("visibility", "hidden").ok();

        document
            .body()
            .ok_or(ExportError::Host("missing body"))?
            .append_child(&anchor)
            .map_err(|_| ExportError::Host("unable to attach anchor"))?;
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(())
    }
}

/// Writes artifacts as files under a directory, creating it on demand.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct ExportDirectory {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl ExportDirectory {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<platform data dir>/exports`.
    pub fn default_location() -> Result<Self, ExportError> {
        use crate::core::config::{PROJECT_APPLICATION, PROJECT_ORGANIZATION, PROJECT_QUALIFIER};

        let dirs = directories::ProjectDirs::from(
            PROJECT_QUALIFIER,
            PROJECT_ORGANIZATION,
            PROJECT_APPLICATION,
        )
        .ok_or(ExportError::NoExportDirectory)?;
        Ok(Self::new(dirs.data_dir().join("exports")))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SaveTarget for ExportDirectory {
    fn save(&self, filename: &str, content: &str) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(filename);
        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "export written");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub filename: String,
    pub content: String,
}

/// Keeps every saved artifact in memory.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    saved: RefCell<Vec<SavedArtifact>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Vec<SavedArtifact> {
        self.saved.borrow().clone()
    }

    pub fn last(&self) -> Option<SavedArtifact> {
        self.saved.borrow().last().cloned()
    }
}

impl SaveTarget for MemoryTarget {
    fn save(&self, filename: &str, content: &str) -> Result<(), ExportError> {
        self.saved.borrow_mut().push(SavedArtifact {
            filename: filename.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

/// The download mechanism of the platform this build targets.
pub fn host_target() -> Result<Box<dyn SaveTarget>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        Ok(Box::new(BrowserDownload))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(Box::new(ExportDirectory::default_location()?))
    }
}
