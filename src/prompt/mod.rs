//! Collecting the generation parameters from the user.

mod collector;

pub use collector::{
    parse_count, parse_size, ParameterCollector, DESCRIPTION_PROMPT, QUIT_COMMANDS,
};

use crate::errors::{ImageGenError, ImageGenResult, ValidationError};
use crate::services::images::{ImageGenerationRequest, ImageRequestValidator, ImageSize};
use std::io::{BufRead, Write};

/// Validated answers for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParameters {
    pub prompt: String,
    pub count: u32,
    pub size: ImageSize,
}

impl GenerationParameters {
    pub fn into_request(self) -> ImageGenerationRequest {
        ImageGenerationRequest::new(self.prompt)
            .with_n(self.count)
            .with_size(self.size)
    }
}

/// Values supplied up front (CLI flags). Present values skip their prompt.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub prompt: Option<String>,
    pub count: Option<u32>,
    pub size: Option<String>,
}

impl<R: BufRead, W: Write> ParameterCollector<R, W> {
    /// Asks for whatever `presets` leaves open, in prompt, count, size order.
    ///
    /// Preset values get the same validation as typed answers but, with nobody
    /// to ask again, an invalid one is returned as an error.
    pub fn collect(&mut self, presets: &Presets) -> ImageGenResult<GenerationParameters> {
        let prompt = match &presets.prompt {
            Some(prompt) if prompt.trim().is_empty() => {
                return Err(ImageGenError::Validation(
                    ValidationError::MissingRequiredField("prompt".to_string()),
                ))
            }
            Some(prompt) => prompt.trim().to_string(),
            None => self.collect_prompt()?,
        };

        let count = match presets.count {
            Some(count) => {
                ImageRequestValidator::validate_count(count)?;
                count
            }
            None => self.collect_count()?,
        };

        let size = match &presets.size {
            Some(size) => parse_size(size)?,
            None => self.collect_size()?,
        };

        Ok(GenerationParameters {
            prompt,
            count,
            size,
        })
    }
}
