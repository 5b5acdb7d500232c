//! Download, decode and display of generated images.

mod fetcher;
mod renderer;

pub use fetcher::{image_file_name, FetchedImage, ImageFetcher};
pub use renderer::{NullRenderer, Renderer, TerminalRenderer, FALLBACK_COLUMNS};

use crate::errors::{ConfigurationError, ImageGenError, ImageGenResult};
use crate::transport::HttpTransport;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Rejects an output path that exists but is not a directory.
///
/// A missing directory is fine; the fetcher creates it on first write.
pub fn ensure_output_dir(dir: &Path) -> ImageGenResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ImageGenError::Configuration(
            ConfigurationError::InvalidOutputDir(dir.display().to_string()),
        ));
    }
    Ok(())
}

/// Sequential fetch-then-render over the URLs of one generation.
pub struct FetchAndRender {
    fetcher: ImageFetcher,
}

impl FetchAndRender {
    pub fn new(transport: Arc<dyn HttpTransport>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher: ImageFetcher::new(transport, output_dir),
        }
    }

    /// Fetches and renders each URL in order, numbering files from 1.
    ///
    /// The first failure stops the loop; URLs after it are never requested.
    #[instrument(skip(self, urls, renderer), fields(count = urls.len()))]
    pub async fn run(
        &self,
        urls: &[String],
        renderer: &mut dyn Renderer,
    ) -> ImageGenResult<Vec<PathBuf>> {
        let mut saved = Vec::with_capacity(urls.len());

        for (offset, url) in urls.iter().enumerate() {
            let image = self.fetcher.fetch(offset + 1, url).await?;
            renderer.render(&image)?;
            info!(index = image.index, path = %image.path.display(), "Image ready");
            saved.push(image.path);
        }

        Ok(saved)
    }
}
