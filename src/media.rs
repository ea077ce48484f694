//! Decoding fetched media bytes for display.

use iced::widget::image::Handle;

use crate::error::Error;

/// Decode the first frame of fetched media into RGBA pixels.
///
/// Grid cells show a static first frame rather than the full animation;
/// `image::load_from_memory` yields exactly that for an animated GIF.
pub fn decode_first_frame(bytes: &[u8]) -> Result<image::RgbaImage, Error> {
    let decoded = image::load_from_memory(bytes).map_err(|err| Error::Decode(err.to_string()))?;
    Ok(decoded.to_rgba8())
}

/// Decode media bytes into a handle for the image widget.
pub fn display_handle(bytes: &[u8]) -> Result<Handle, Error> {
    let frame = decode_first_frame(bytes)?;
    let (width, height) = frame.dimensions();
    Ok(Handle::from_rgba(width, height, frame.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest well-formed GIF: 1×1, two-color palette, one frame.
    const MINIMAL_GIF: &[u8] = &[
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, // GIF89a
        0x01, 0x00, 0x01, 0x00, // 1x1 logical screen
        0x80, 0x00, 0x00, // global color table, 2 entries
        0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, // palette
        0x2C, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, // image descriptor
        0x02, 0x02, 0x44, 0x01, 0x00, // image data
        0x3B, // trailer
    ];

    #[test]
    fn test_decodes_minimal_gif_first_frame() {
        let frame = decode_first_frame(MINIMAL_GIF).unwrap();
        assert_eq!(frame.dimensions(), (1, 1));
    }

    #[test]
    fn test_garbage_bytes_are_a_decode_error() {
        let result = decode_first_frame(b"not an image");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_display_handle_from_gif() {
        assert!(display_handle(MINIMAL_GIF).is_ok());
    }
}
