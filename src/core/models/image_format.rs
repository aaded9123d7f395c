use std::fmt;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    PNG,
    JPEG,
    GIF,
    WEBP,
    BMP,
    TIFF,
}

impl ImageFormat {
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Png => Some(Self::PNG),
            image::ImageFormat::Jpeg => Some(Self::JPEG),
            image::ImageFormat::Gif => Some(Self::GIF),
            image::ImageFormat::WebP => Some(Self::WEBP),
            image::ImageFormat::Bmp => Some(Self::BMP),
            image::ImageFormat::Tiff => Some(Self::TIFF),
            _ => None,
        }
    }

    pub fn detect_from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(Self::PNG),
            "jpg" | "jpeg" => Some(Self::JPEG),
            "gif" => Some(Self::GIF),
            "webp" => Some(Self::WEBP),
            "bmp" => Some(Self::BMP),
            "tif" | "tiff" => Some(Self::TIFF),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "image/png",
            ImageFormat::JPEG => "image/jpeg",
            ImageFormat::GIF => "image/gif",
            ImageFormat::WEBP => "image/webp",
            ImageFormat::BMP => "image/bmp",
            ImageFormat::TIFF => "image/tiff",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpg",
            ImageFormat::GIF => "gif",
            ImageFormat::WEBP => "webp",
            ImageFormat::BMP => "bmp",
            ImageFormat::TIFF => "tiff",
        }
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        ImageFormat::PNG
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn test_detect_from_bytes_recognizes_png_signature() {
        assert_eq!(ImageFormat::detect_from_bytes(PNG_SIGNATURE), Some(ImageFormat::PNG));
    }

    #[test]
    fn test_detect_from_bytes_recognizes_jpeg_signature() {
        assert_eq!(ImageFormat::detect_from_bytes(JPEG_SIGNATURE), Some(ImageFormat::JPEG));
    }

    #[test]
    fn test_detect_from_bytes_returns_none_for_unknown_data() {
        assert_eq!(ImageFormat::detect_from_bytes(b"plain text"), None);
    }

    #[test]
    fn test_detect_from_extension_is_case_insensitive() {
        assert_eq!(
            ImageFormat::detect_from_extension(Path::new("scan.JPEG")),
            Some(ImageFormat::JPEG)
        );
        assert_eq!(
            ImageFormat::detect_from_extension(Path::new("shot.webp")),
            Some(ImageFormat::WEBP)
        );
        assert_eq!(ImageFormat::detect_from_extension(Path::new("notes")), None);
    }

    #[test]
    fn test_display_uses_mime_type() {
        assert_eq!(format!("{}", ImageFormat::PNG), "image/png");
        assert_eq!(format!("{}", ImageFormat::TIFF), "image/tiff");
    }
}
