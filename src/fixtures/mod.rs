//! Test fixtures and sample data
//!
//! Sample API responses, error bodies and image bytes shared by the unit tests.

mod error_fixtures;
mod image_fixtures;

pub use error_fixtures::*;
pub use image_fixtures::*;
