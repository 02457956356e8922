use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodings the drawing surface can export to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// An exported drawing, already encoded
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: ImageFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("format", &self.format)
            .field("size", &[self.width, self.height])
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl EncodedImage {
    pub fn new(format: ImageFormat, [width, height]: [u32; 2], bytes: Vec<u8>) -> Self {
        Self {
            format,
            width,
            height,
            bytes,
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `data:<mime>;base64,<payload>`, usable anywhere a URL is
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }

    /// Name the in-panel download saves this image under
    pub fn download_file_name(&self, unix_millis: u64) -> String {
        format!("my-sketch-{}.{}", unix_millis, self.format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let image = EncodedImage::new(ImageFormat::Png, [1, 1], vec![1, 2, 3]);
        assert_eq!(image.data_uri(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_download_file_name() {
        let image = EncodedImage::new(ImageFormat::Png, [1, 1], vec![0]);
        assert_eq!(
            image.download_file_name(1_700_000_000_123),
            "my-sketch-1700000000123.png"
        );
    }
}
