use crate::errors::{ImageGenError, ImageGenResult, ValidationError};
use crate::services::images::{ImageRequestValidator, ImageSize, MAX_IMAGES, MIN_IMAGES};
use std::io::{BufRead, Write};

/// Inputs that cancel the run at any prompt.
pub const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

pub const DESCRIPTION_PROMPT: &str = "Input the image description: ";

/// Parses a count answer. Surrounding whitespace is ignored.
pub fn parse_count(raw: &str) -> ImageGenResult<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        ImageGenError::Validation(ValidationError::InvalidRequest(format!(
            "'{}' is not a whole number",
            trimmed
        )))
    })?;

    let n = u32::try_from(value).map_err(|_| {
        ImageGenError::Validation(ValidationError::ValueOutOfRange {
            field: "n".to_string(),
            min: MIN_IMAGES.to_string(),
            max: MAX_IMAGES.to_string(),
            value: value.to_string(),
        })
    })?;

    ImageRequestValidator::validate_count(n)?;
    Ok(n)
}

/// Parses a size answer.
///
/// Empty input selects [`ImageSize::default`]. Otherwise all spaces and any
/// surrounding brackets are dropped, so `[ 256x256 ]` is accepted, and the
/// remainder must name a supported size exactly. Input made only of spaces
/// is not empty and is rejected like `[ ]`.
pub fn parse_size(raw: &str) -> ImageGenResult<ImageSize> {
    if raw.is_empty() {
        return Ok(ImageSize::default());
    }

    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized = compact.trim_start_matches('[').trim_end_matches(']');

    normalized.parse().map_err(ImageGenError::Validation)
}

/// Interactive collector for the generation parameters.
///
/// Invalid answers are explained and asked again. Loops are unbounded unless
/// `max_attempts` is set; `quit`/`exit` or end of input cancels.
pub struct ParameterCollector<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> ParameterCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Bounds each question to `max_attempts` answers. `Some(0)` counts as no bound.
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts.filter(|n| *n > 0);
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn collect_prompt(&mut self) -> ImageGenResult<String> {
        self.ask(
            "prompt",
            DESCRIPTION_PROMPT,
            "Please describe the image you want to generate.",
            |raw| {
                let prompt = raw.trim();
                if prompt.is_empty() {
                    Err(ImageGenError::Validation(
                        ValidationError::MissingRequiredField("prompt".to_string()),
                    ))
                } else {
                    Ok(prompt.to_string())
                }
            },
        )
    }

    pub fn collect_count(&mut self) -> ImageGenResult<u32> {
        let question = format!(
            "How many images do you want to generate? (Enter a number between {} and {}): ",
            MIN_IMAGES, MAX_IMAGES
        );
        let invalid = format!(
            "Invalid input. Please enter a number between {} and {}.",
            MIN_IMAGES, MAX_IMAGES
        );
        self.ask("n", &question, &invalid, parse_count)
    }

    pub fn collect_size(&mut self) -> ImageGenResult<ImageSize> {
        let question = format!(
            "What size do you want the image(s) to be? ({}) [default: {}] ",
            ImageSize::allowed(),
            ImageSize::default()
        );
        let invalid = format!(
            "Invalid input. Please enter one of the following sizes: {}",
            ImageSize::allowed()
        );
        self.ask("size", &question, &invalid, parse_size)
    }

    fn ask<T>(
        &mut self,
        field: &str,
        question: &str,
        invalid: &str,
        parse: impl Fn(&str) -> ImageGenResult<T>,
    ) -> ImageGenResult<T> {
        let mut attempts = 0u32;

        loop {
            let line = self.read_line(question)?;
            attempts += 1;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(ImageGenError::Validation(reason)) => {
                    tracing::debug!(field, attempts, %reason, "Rejected input");
                    self.say(invalid)?;

                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(ImageGenError::Validation(
                            ValidationError::AttemptsExhausted {
                                field: field.to_string(),
                                attempts,
                            },
                        ));
                    }
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn read_line(&mut self, question: &str) -> ImageGenResult<String> {
        write!(self.output, "{}", question).map_err(|e| ImageGenError::io("<stdout>", e))?;
        self.output
            .flush()
            .map_err(|e| ImageGenError::io("<stdout>", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| ImageGenError::io("<stdin>", e))?;

        if read == 0 {
            self.say("")?;
            return Err(ImageGenError::Cancelled);
        }

        let line = line.trim_end_matches(&['\n', '\r'][..]).to_string();
        if QUIT_COMMANDS
            .iter()
            .any(|quit| line.trim().eq_ignore_ascii_case(quit))
        {
            return Err(ImageGenError::Cancelled);
        }

        Ok(line)
    }

    fn say(&mut self, message: &str) -> ImageGenResult<()> {
        writeln!(self.output, "{}", message).map_err(|e| ImageGenError::io("<stdout>", e))
    }
}
