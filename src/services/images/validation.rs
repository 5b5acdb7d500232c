use crate::errors::{ImageGenError, ImageGenResult, ValidationError};
use crate::services::images::{ImageGenerationRequest, MAX_IMAGES, MIN_IMAGES};

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate(request: &ImageGenerationRequest) -> ImageGenResult<()> {
        if request.prompt.trim().is_empty() {
            return Err(ImageGenError::Validation(
                ValidationError::MissingRequiredField("prompt".to_string()),
            ));
        }

        if let Some(n) = request.n {
            Self::validate_count(n)?;
        }

        Ok(())
    }

    pub fn validate_count(n: u32) -> ImageGenResult<()> {
        if !(MIN_IMAGES..=MAX_IMAGES).contains(&n) {
            return Err(ImageGenError::Validation(ValidationError::ValueOutOfRange {
                field: "n".to_string(),
                min: MIN_IMAGES.to_string(),
                max: MAX_IMAGES.to_string(),
                value: n.to_string(),
            }));
        }
        Ok(())
    }
}
