use super::color::Color;

pub const MIN_OPACITY: u8 = 1;
pub const FULL_OPACITY: u8 = 10;

fn lerp_channel(from: u8, to: u8, a: f64) -> u8 {
    let v = f64::from(from) * (1.0 - a) + f64::from(to) * a;
    v.round().clamp(0.0, 255.0) as u8
}

fn lerp(from: Color, to: Color, opacity: u8) -> Color {
    let a = f64::from(opacity.clamp(MIN_OPACITY, FULL_OPACITY)) / f64::from(FULL_OPACITY);
    Color::new(
        lerp_channel(from.r, to.r, a),
        lerp_channel(from.g, to.g, a),
        lerp_channel(from.b, to.b, a),
    )
}

/// Paints `incoming` over `existing` at `opacity` tenths.
pub fn blend_paint(existing: Option<Color>, incoming: Color, opacity: u8) -> Color {
    match existing {
        Some(base) if opacity < FULL_OPACITY => lerp(base, incoming, opacity),
        _ => incoming,
    }
}

/// Partial erase lightens toward white, only full opacity empties the cell.
pub fn blend_erase(existing: Option<Color>, opacity: u8) -> Option<Color> {
    let base = existing?;
    if opacity >= FULL_OPACITY {
        return None;
    }
    Some(lerp(base, Color::WHITE, opacity))
}
