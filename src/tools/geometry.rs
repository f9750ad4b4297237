pub struct Geometry;

impl Geometry {
    /// Integer Bresenham from `(x1, y1)` to `(x2, y2)`, both endpoints
    /// included.
    pub fn bresenham_line<F>(mut x1: i64, mut y1: i64, x2: i64, y2: i64, mut callback: F)
    where
        F: FnMut(i64, i64),
    {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            callback(x1, y1);
            if x1 == x2 && y1 == y2 { break; }
            let e2 = 2 * err;
            if e2 > -dy { err -= dy; x1 += sx; }
            if e2 < dx { err += dx; y1 += sy; }
        }
    }

    /// Midpoint circle outline around `(cx, cy)`. Points may fall outside
    /// any grid and can repeat where octants meet.
    pub fn midpoint_circle<F>(cx: i64, cy: i64, radius: f64, mut callback: F)
    where
        F: FnMut(i64, i64),
    {
        let r = radius.round() as i64;
        let mut x = 0i64;
        let mut y = r;
        let mut d = 1 - r;

        let mut plot = |x: i64, y: i64| {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                callback(px, py);
            }
        };

        plot(x, y);
        while y > x {
            if d < 0 {
                d += 2 * x + 3;
            } else {
                d += 2 * (x - y) + 5;
                y -= 1;
            }
            x += 1;
            plot(x, y);
        }
    }

    pub fn distance(r1: i64, c1: i64, r2: i64, c2: i64) -> f64 {
        let dr = (r1 - r2) as f64;
        let dc = (c1 - c2) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

#[cfg(test)]
mod tests;
