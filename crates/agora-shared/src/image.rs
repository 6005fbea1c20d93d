//! Image intake validation and inline encoding.
//!
//! Accepted payloads are sniffed from their magic bytes rather than trusted
//! from a file extension, then carried inline as `data:` URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

use crate::error::{FeedError, Result};
use crate::models::InlineImage;

/// Reject a payload whose reported size exceeds `max` bytes.
///
/// Runs before any bytes are read so oversized files are never loaded.
pub fn check_size(size: u64, max: usize) -> Result<()> {
    let max = max as u64;
    if size > max {
        return Err(FeedError::ImageTooLarge { size, max });
    }
    Ok(())
}

/// MIME type of an image payload, or `NotAnImage`.
pub fn sniff_mime(data: &[u8]) -> Result<&'static str> {
    image::guess_format(data)
        .map(|format| format.to_mime_type())
        .map_err(|_| FeedError::NotAnImage)
}

/// Validate raw file bytes and wrap them as an [`InlineImage`].
pub fn inline_image(data: Bytes, max: usize) -> Result<InlineImage> {
    check_size(data.len() as u64, max)?;
    let mime = sniff_mime(&data)?;
    Ok(InlineImage::new(mime, data))
}

pub(crate) fn encode_data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(data))
}

/// Parse a `data:<mime>;base64,<payload>` URL back into an image.
pub fn decode_data_url(url: &str) -> Result<InlineImage> {
    let rest = url.strip_prefix("data:").ok_or(FeedError::NotAnImage)?;
    let (header, payload) = rest.split_once(',').ok_or(FeedError::NotAnImage)?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or(FeedError::NotAnImage)?;
    if !mime.starts_with("image/") {
        return Err(FeedError::NotAnImage);
    }
    let data = STANDARD
        .decode(payload.trim())
        .map_err(|_| FeedError::NotAnImage)?;
    Ok(InlineImage::new(mime, Bytes::from(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIF_HEADER: &[u8] = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";

    #[test]
    fn test_check_size_boundary() {
        assert!(check_size(5 * 1024 * 1024, 5 * 1024 * 1024).is_ok());
        let err = check_size(5 * 1024 * 1024 + 1, 5 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, FeedError::ImageTooLarge { size, .. } if size == 5 * 1024 * 1024 + 1));
    }

    #[test]
    fn test_sniff_gif() {
        assert_eq!(sniff_mime(GIF_HEADER).unwrap(), "image/gif");
    }

    #[test]
    fn test_rejects_non_image() {
        let err = inline_image(Bytes::from_static(b"hello, world"), 1024).unwrap_err();
        assert!(matches!(err, FeedError::NotAnImage));
    }

    #[test]
    fn test_inline_image_too_large() {
        let err = inline_image(Bytes::from_static(GIF_HEADER), 4).unwrap_err();
        assert!(matches!(err, FeedError::ImageTooLarge { .. }));
    }

    #[test]
    fn test_data_url_decode() {
        let image = inline_image(Bytes::from_static(GIF_HEADER), 1024).unwrap();
        let url = image.to_data_url();
        assert!(url.starts_with("data:image/gif;base64,"));

        let decoded = decode_data_url(&url).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_data_url_requires_image_mime() {
        assert!(decode_data_url("data:text/plain;base64,aGk=").is_err());
        assert!(decode_data_url("https://example.com/cat.png").is_err());
    }
}
