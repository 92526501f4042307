use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ColorType;

/// Profile pictures are stretched to a fixed square, no aspect preservation
pub const PROFILE_IMAGE_SIZE: u32 = 200;
/// JPEG quality on the 1-100 scale (0.7)
pub const PROFILE_IMAGE_QUALITY: u8 = 70;

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Upload is not valid base64: {0}")]
    Upload(String),
    #[error("Could not decode image: {0}")]
    Decode(String),
    #[error("Could not encode image: {0}")]
    Encode(String),
    #[error("Image worker failed: {0}")]
    Worker(String),
}

/// Decode a base64 upload. Accepts a bare payload or a full data URL.
pub fn decode_upload(raw: &str) -> Result<Vec<u8>, MediaError> {
    let payload = match raw.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => raw,
    };
    STANDARD
        .decode(payload.trim())
        .map_err(|e| MediaError::Upload(e.to_string()))
}

/// Resize an uploaded picture to 200x200 and encode it as a JPEG data URL.
///
/// Pixel work runs on the blocking pool.
/// No upload (or an empty one) yields an empty string.
pub async fn normalize_profile_image(upload: Option<Vec<u8>>) -> Result<String, MediaError> {
    let bytes = match upload {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Ok(String::new()),
    };

    tokio::task::spawn_blocking(move || normalize_blocking(&bytes))
        .await
        .map_err(|e| MediaError::Worker(e.to_string()))?
}

fn normalize_blocking(bytes: &[u8]) -> Result<String, MediaError> {
    let original = image::load_from_memory(bytes).map_err(|e| MediaError::Decode(e.to_string()))?;

    tracing::debug!(
        "Normalizing profile image {}x{} -> {}x{}",
        original.width(),
        original.height(),
        PROFILE_IMAGE_SIZE,
        PROFILE_IMAGE_SIZE
    );

    let resized = original
        .resize_exact(PROFILE_IMAGE_SIZE, PROFILE_IMAGE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, PROFILE_IMAGE_QUALITY)
        .encode(resized.as_raw(), PROFILE_IMAGE_SIZE, PROFILE_IMAGE_SIZE, ColorType::Rgb8)
        .map_err(|e| MediaError::Encode(e.to_string()))?;

    Ok(format!("{}{}", JPEG_DATA_URL_PREFIX, STANDARD.encode(&jpeg)))
}

/// Embed a document (identity proof) as-is, without resizing
pub fn encode_document(bytes: &[u8], content_type: &str) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 120]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn stretches_to_fixed_square_jpeg() {
        let encoded = normalize_profile_image(Some(png_bytes(640, 120))).await.unwrap();
        assert!(encoded.starts_with("data:image/jpeg;base64,"));

        let jpeg = decode_upload(&encoded).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 200);
    }

    #[tokio::test]
    async fn no_file_gives_empty_string() {
        assert_eq!(normalize_profile_image(None).await.unwrap(), "");
        assert_eq!(normalize_profile_image(Some(vec![])).await.unwrap(), "");
    }

    #[tokio::test]
    async fn garbage_bytes_fail_to_decode() {
        let err = normalize_profile_image(Some(b"not an image".to_vec())).await.unwrap_err();
        assert!(matches!(err, MediaError::Decode(_)));
    }

    #[test]
    fn decode_upload_accepts_data_urls() {
        assert_eq!(decode_upload("aGk=").unwrap(), b"hi");
        assert_eq!(decode_upload("data:text/plain;base64,aGk=").unwrap(), b"hi");
        assert!(matches!(decode_upload("@@@"), Err(MediaError::Upload(_))));
    }

    #[test]
    fn documents_are_embedded_verbatim() {
        assert_eq!(encode_document(b"hi", "application/pdf"), "data:application/pdf;base64,aGk=");
        assert_eq!(encode_document(b"", "application/pdf"), "");
    }
}
