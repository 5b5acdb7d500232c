//! Loading the API credential from a plain-text key file.

use crate::errors::{ConfigurationError, ImageGenError, ImageGenResult};
use secrecy::SecretString;
use std::path::Path;

/// Default key file, resolved against the working directory.
pub const DEFAULT_KEY_FILE: &str = "api_key.txt";

/// Reads the API key from `path`, trimming surrounding whitespace.
///
/// A missing or unreadable file is an [`ImageGenError::Io`]; a file holding
/// only whitespace is a missing-key configuration error.
pub fn load_api_key(path: impl AsRef<Path>) -> ImageGenResult<SecretString> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|source| ImageGenError::io(path, source))?;

    let key = contents.trim();
    if key.is_empty() {
        return Err(ImageGenError::Configuration(
            ConfigurationError::MissingApiKey(format!("{} is empty", path.display())),
        ));
    }

    tracing::debug!(path = %path.display(), "Loaded API key");
    Ok(SecretString::new(key.to_string()))
}
