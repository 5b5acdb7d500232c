use crate::errors::{ImageGenError, ImageGenResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "dall-e-2";
pub const MIN_IMAGES: u32 = 1;
pub const MAX_IMAGES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Size256,
    #[default]
    #[serde(rename = "512x512")]
    Size512,
    #[serde(rename = "1024x1024")]
    Size1024,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::Size256, ImageSize::Size512, ImageSize::Size1024];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
        }
    }

    /// Comma-separated list of the accepted size strings.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(ImageSize::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = ValidationError;

    /// Exact match only; input clean-up is the caller's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedValue {
                field: "size".to_string(),
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
    B64Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: Some(DEFAULT_MODEL.to_string()),
            n: None,
            response_format: Some(ImageResponseFormat::Url),
            size: None,
        }
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageResponse {
    pub created: i64,
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub b64_json: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

impl ImageResponse {
    /// Image URLs in response order. Every entry must carry a URL.
    pub fn urls(&self) -> ImageGenResult<Vec<String>> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, image)| {
                image.url.clone().ok_or_else(|| {
                    ImageGenError::Deserialization(format!(
                        "image {} in response has no url",
                        i + 1
                    ))
                })
            })
            .collect()
    }
}
