use serde::Deserialize;
use std::path::PathBuf;

/// Pre-built single-page frontend served in production
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Directory holding the bundle and its `index.html`
    pub dist_dir: PathBuf,
}

impl FrontendConfig {
    /// Entry document that client-side routes fall back to
    pub fn entry_document(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
