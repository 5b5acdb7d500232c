use crate::errors::{DecodeError, DownloadError, ImageGenError, ImageGenResult};
use crate::transport::HttpTransport;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

/// A downloaded, decoded image ready for display.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// 1-based position in the generation response.
    pub index: usize,
    pub url: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Packed 8-bit RGB, row-major.
    pub pixels: RgbImage,
}

/// File name used for the image at `index`.
pub fn image_file_name(index: usize) -> String {
    format!("image_{}.png", index)
}

pub struct ImageFetcher {
    transport: Arc<dyn HttpTransport>,
    output_dir: PathBuf,
}

impl ImageFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.output_dir.join(image_file_name(index))
    }

    /// Downloads `url`, stores it as `image_<index>.png` and decodes it.
    ///
    /// An existing file at the target path is overwritten.
    #[instrument(skip(self), fields(path = tracing::field::Empty))]
    pub async fn fetch(&self, index: usize, url: &str) -> ImageGenResult<FetchedImage> {
        let bytes = self.transport.download(url).await?;
        let path = self.path_for(index);
        tracing::Span::current().record("path", tracing::field::display(path.display()));

        self.write(&path, &bytes)?;
        debug!(bytes = bytes.len(), "Image saved");

        let pixels = decode(&path, &bytes)?;
        let (width, height) = pixels.dimensions();

        Ok(FetchedImage {
            index,
            url: url.to_string(),
            path,
            width,
            height,
            pixels,
        })
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> ImageGenResult<()> {
        let write_failed = |e: std::io::Error| {
            ImageGenError::Download(DownloadError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        };

        std::fs::create_dir_all(&self.output_dir).map_err(write_failed)?;
        std::fs::write(path, bytes).map_err(write_failed)
    }
}

fn decode(path: &Path, bytes: &[u8]) -> ImageGenResult<RgbImage> {
    if bytes.is_empty() {
        return Err(ImageGenError::Decode(DecodeError::Empty {
            path: path.display().to_string(),
        }));
    }

    let image = image::load_from_memory(bytes).map_err(|e| {
        ImageGenError::Decode(DecodeError::InvalidImage {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    Ok(image.to_rgb8())
}
