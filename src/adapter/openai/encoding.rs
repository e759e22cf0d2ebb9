//! Image Encoding
//!
//! 画像をリクエストJSONに埋め込める data URI に変換する

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::domain::entities::image_entry::ImageFile;

/// `data:<mime>;base64,<data>` 形式に変換
pub fn to_data_uri(image: &ImageFile) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type(),
        BASE64.encode(image.data())
    )
}

/// Detect image MIME type from magic bytes
pub fn detect_image_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else {
        None
    }
}
