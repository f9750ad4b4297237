use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::core::grid::GridSize;
use crate::format::error::{FormatError, Result};

/// Cells with alpha at or below this are left empty.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Converts a decoded RGBA8 raster into a buffer. Opaque enough pixels are
/// snapped to the 15-bit palette the editor exports to.
pub fn rgba_to_buffer(rgba: &[u8], width: usize, height: usize) -> Result<PixelBuffer> {
    GridSize::new(width, height)?;
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(FormatError::InvalidData(format!(
            "expected {} RGBA bytes for {}x{}, got {}",
            expected,
            width,
            height,
            rgba.len()
        )));
    }
    let cells = rgba
        .chunks_exact(4)
        .map(|px| (px[3] > ALPHA_THRESHOLD).then(|| Color::new(px[0], px[1], px[2]).quantized_15bit()))
        .collect();
    Ok(PixelBuffer::from_cells(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_alpha_threshold() {
        let rgba = [255, 0, 0, 255, 0, 255, 0, 128, 10, 20, 30, 129];
        let b = rgba_to_buffer(&rgba, 3, 1).unwrap();
        assert_eq!(b.get(0), Some(Color::new(255, 0, 0)));
        assert_eq!(b.get(1), None);
        // 10 -> 1 -> 8, 20 -> 2 -> 16, 30 -> 3 -> 24
        assert_eq!(b.get(2), Some(Color::new(8, 16, 24)));
    }

    #[test]
    fn test_rgba_rejects_bad_input() {
        assert!(matches!(rgba_to_buffer(&[0; 8], 1, 1), Err(FormatError::InvalidData(_))));
        assert!(matches!(rgba_to_buffer(&[], 257, 1), Err(FormatError::Core(_))));
    }
}
