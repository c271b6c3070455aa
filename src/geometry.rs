use egui::Pos2;

/// An integer pixel position on the canvas.
///
/// Pointer events can report positions outside the canvas, so both
/// coordinates are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a canvas-local egui position, rounding to the nearest pixel.
    pub fn from_pos(pos: Pos2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
        }
    }

    pub fn to_pos(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Every pixel on the 8-connected line from `from` to `to`, both ends included.
pub fn line_points(from: Point, to: Point) -> Vec<Point> {
    let dx = (to.x as i64 - from.x as i64).abs();
    let dy = -(to.y as i64 - from.y as i64).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = from;
    let mut err = dx + dy;

    loop {
        points.push(current);
        if current == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += sx;
        }
        if e2 <= dx {
            err += dx;
            current.y += sy;
        }
    }

    points
}

/// Cut the segment down to the part inside the rectangle `min..=max`
/// (Liang-Barsky). `None` when the segment misses the rectangle entirely.
pub fn clip_segment(
    from: Point,
    to: Point,
    min: (i64, i64),
    max: (i64, i64),
) -> Option<(Point, Point)> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let dx = to.x as f64 - x0;
    let dy = to.y as f64 - y0;

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let edges = [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64, end: Point| {
        if t == 0.0 {
            from
        } else if t == 1.0 {
            end
        } else {
            Point::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32)
        }
    };
    Some((at(t0, to), at(t1, to)))
}

/// Offsets of the pixels covered by a round brush of the given diameter.
///
/// Odd widths are centred on the pixel; even widths are centred half a pixel
/// up and to the left, so a width-`w` brush always spans exactly `w` pixels
/// across its horizontal and vertical diameters.
pub fn brush_footprint(width: u32) -> Vec<(i32, i32)> {
    let width = width.max(1) as i32;
    let lo = -(width / 2);
    let hi = lo + width - 1;
    let center = (lo + hi) as f32 / 2.0;
    let radius_sq = (width as f32 / 2.0).powi(2);

    let mut offsets = Vec::new();
    for dy in lo..=hi {
        for dx in lo..=hi {
            let fx = dx as f32 - center;
            let fy = dy as f32 - center;
            if fx * fx + fy * fy <= radius_sq {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}
