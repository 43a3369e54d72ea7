//! PNG export of rendered frames

use std::path::Path;
use crate::rasterizer::Frame;

/// Error type for image export
#[derive(Debug)]
pub enum ExportError {
    IoError(std::io::Error),
    ImageError(image::ImageError),
    /// Nothing has been rendered yet
    NoFrame,
    /// Pixel data doesn't match the frame dimensions
    BufferSize { width: usize, height: usize, len: usize },
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::IoError(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::ImageError(e)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
            ExportError::ImageError(e) => write!(f, "Image error: {}", e),
            ExportError::NoFrame => write!(f, "No frame rendered yet"),
            ExportError::BufferSize { width, height, len } => {
                write!(f, "Buffer of {} bytes does not fit {}x{} RGBA", len, width, height)
            }
        }
    }
}

impl std::error::Error for ExportError {}

/// Wrap a frame as an `image` buffer
pub fn frame_to_image(frame: &Frame) -> Result<image::RgbaImage, ExportError> {
    let size_err = || ExportError::BufferSize {
        width: frame.width,
        height: frame.height,
        len: frame.pixels.len(),
    };
    let width = u32::try_from(frame.width).map_err(|_| size_err())?;
    let height = u32::try_from(frame.height).map_err(|_| size_err())?;
    image::RgbaImage::from_raw(width, height, frame.pixels.clone()).ok_or_else(size_err)
}

/// Encode a frame as PNG and write it to `path`
pub fn export_png<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let img = frame_to_image(frame)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("exported {}x{} frame to {}", frame.width, frame.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{render_frame, Color, ViewState};
    use crate::scene::create_triangles;

    #[test]
    fn test_export_writes_matching_png() {
        let frame = render_frame(&create_triangles(), &ViewState::new(), 40, 30, Color::BLACK);
        let path = std::env::temp_dir()
            .join(format!("tetra-viewer-{}", std::process::id()))
            .join("frame.png");

        export_png(&frame, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (40, 30));
        assert_eq!(decoded.as_raw(), &frame.pixels);
    }

    #[test]
    fn test_bad_buffer_rejected() {
        let frame = Frame { width: 4, height: 4, pixels: vec![0; 10] };
        let err = frame_to_image(&frame).unwrap_err();
        assert!(matches!(err, ExportError::BufferSize { len: 10, .. }));
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let frame = Frame { width: 1, height: 1, pixels: vec![255; 4] };
        // A directory can't be overwritten by a file
        let dir = std::env::temp_dir();
        assert!(export_png(&frame, &dir).is_err());
    }
}
