use crate::core::buffer::PixelBuffer;
use crate::core::color::Color;
use crate::render::compositor::Compositor;
use crate::core::store::PixelStore;

pub const TILE_SIZE: usize = 8;
pub const GBC_PALETTE_SIZE: usize = 4;

/// A composited frame trimmed to its painted bounds. `offset_x`/`offset_y`
/// locate the crop inside the source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedFrame {
    pub pixels: PixelBuffer,
    pub width: usize,
    pub height: usize,
    pub offset_x: usize,
    pub offset_y: usize,
}

/// Trims to the bounding box of painted cells. A blank buffer yields a
/// single empty cell rather than the full grid.
pub fn auto_crop(pixels: &PixelBuffer, width: usize, height: usize) -> CroppedFrame {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for row in 0..height {
        for col in 0..width {
            if pixels.get(row * width + col).is_none() {
                continue;
            }
            bounds = Some(match bounds {
                None => (row, row, col, col),
                Some((r0, r1, c0, c1)) => (r0.min(row), r1.max(row), c0.min(col), c1.max(col)),
            });
        }
    }

    let Some((min_row, max_row, min_col, max_col)) = bounds else {
        return CroppedFrame { pixels: PixelBuffer::empty(1), width: 1, height: 1, offset_x: 0, offset_y: 0 };
    };

    let w = max_col - min_col + 1;
    let h = max_row - min_row + 1;
    let mut out = PixelBuffer::empty(w * h);
    for row in 0..h {
        for col in 0..w {
            out.set(row * w + col, pixels.get((min_row + row) * width + min_col + col));
        }
    }
    CroppedFrame { pixels: out, width: w, height: h, offset_x: min_col, offset_y: min_row }
}

/// Grows a frame to `width`×`height`, keeping its content at the top left.
pub fn pad_to_size(frame: &CroppedFrame, width: usize, height: usize) -> CroppedFrame {
    if frame.width == width && frame.height == height {
        return frame.clone();
    }
    let mut out = PixelBuffer::empty(width * height);
    for row in 0..frame.height.min(height) {
        for col in 0..frame.width.min(width) {
            out.set(row * width + col, frame.pixels.get(row * frame.width + col));
        }
    }
    CroppedFrame { pixels: out, width, height, offset_x: frame.offset_x, offset_y: frame.offset_y }
}

pub fn normalize_frames_to_largest(frames: &[CroppedFrame]) -> Vec<CroppedFrame> {
    let width = frames.iter().map(|f| f.width).max().unwrap_or(0);
    let height = frames.iter().map(|f| f.height).max().unwrap_or(0);
    frames.iter().map(|f| pad_to_size(f, width, height)).collect()
}

/// Composites and crops every exported frame, then pads them to a common size.
pub fn export_frames(store: &PixelStore) -> Vec<CroppedFrame> {
    let cropped: Vec<CroppedFrame> = Compositor::composite_frames(store)
        .iter()
        .map(|f| auto_crop(f, store.size.width, store.size.height))
        .collect();
    normalize_frames_to_largest(&cropped)
}

/// BGR555 word as used by Game Boy Color palettes.
pub fn gbc_word(color: Color) -> u16 {
    let (r, g, b) = color.rgb15();
    ((b as u16) << 10) | ((g as u16) << 5) | r as u16
}

/// Distinct colors in first-seen order, quantized to 15 bits, padded with
/// black and truncated to four entries.
pub fn extract_palette(pixels: &PixelBuffer) -> [(u8, u8, u8); GBC_PALETTE_SIZE] {
    let mut seen: Vec<Color> = Vec::new();
    for color in pixels.cells().iter().flatten() {
        if !seen.contains(color) {
            seen.push(*color);
        }
    }
    let mut palette = [(0, 0, 0); GBC_PALETTE_SIZE];
    for (slot, color) in palette.iter_mut().zip(seen.iter()) {
        *slot = color.rgb15();
    }
    palette
}

/// Little-endian color words laid out tile by tile (8×8, row-major inside a
/// tile). Cells past the image edge or empty encode as 0.
pub fn tile_data(pixels: &PixelBuffer, width: usize, height: usize) -> Vec<u8> {
    let tiles_wide = width.div_ceil(TILE_SIZE);
    let tiles_high = height.div_ceil(TILE_SIZE);
    let mut bytes = Vec::with_capacity(tiles_wide * tiles_high * TILE_SIZE * TILE_SIZE * 2);
    for tile_y in 0..tiles_high {
        for tile_x in 0..tiles_wide {
            for py in 0..TILE_SIZE {
                for px in 0..TILE_SIZE {
                    let x = tile_x * TILE_SIZE + px;
                    let y = tile_y * TILE_SIZE + py;
                    let word = if x < width && y < height {
                        pixels.get(y * width + x).map(gbc_word).unwrap_or(0)
                    } else {
                        0
                    };
                    bytes.extend_from_slice(&word.to_le_bytes());
                }
            }
        }
    }
    bytes
}
