//! Image generation fixtures

use image::{ImageFormat, Rgb, RgbImage};
use serde_json::json;
use std::io::Cursor;

/// Sample image generation response with one URL
pub fn image_generation_response() -> serde_json::Value {
    image_generation_response_with_urls(&["https://example.com/image1.png"])
}

/// Image generation response carrying the given URLs, in order
pub fn image_generation_response_with_urls(urls: &[&str]) -> serde_json::Value {
    json!({
        "created": 1677610602,
        "data": urls.iter().map(|url| json!({ "url": url })).collect::<Vec<_>>()
    })
}

/// Sample image generation response with base64 data only
pub fn image_generation_response_b64() -> serde_json::Value {
    json!({
        "created": 1677610602,
        "data": [{
            "b64_json": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg=="
        }]
    })
}

/// A small PNG with a red top row and a blue bottom row
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |_, y| {
        if y < height / 2 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 0, 255])
        }
    });

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}
