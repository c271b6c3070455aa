use std::path::Path;

use egui::Color32;
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{self, Point};

/// Opaque white, the color of an empty canvas.
pub const BACKGROUND: Color32 = Color32::WHITE;

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

fn to_color32(pixel: &Rgb<u8>) -> Color32 {
    Color32::from_rgb(pixel[0], pixel[1], pixel[2])
}

/// Largest canvas, in pixels, that a surface may hold (8192x8192).
pub const MAX_PIXELS: u64 = 1 << 26;

/// Check a requested canvas size before anything is allocated.
///
/// Both sides must be positive and the total pixel count at most
/// [`MAX_PIXELS`].
pub fn check_dimensions(width: i64, height: i64) -> CanvasResult<(u32, u32)> {
    let invalid = CanvasError::InvalidDimension { width, height };
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(invalid);
    };
    if w == 0 || h == 0 {
        return Err(invalid);
    }
    match (w as u64).checked_mul(h as u64) {
        Some(pixels) if pixels <= MAX_PIXELS => Ok((w, h)),
        _ => Err(invalid),
    }
}

/// The persistent raster image: the thing that gets saved.
///
/// The buffer always holds exactly `width * height` RGB pixels in row-major
/// order. Resizing throws the old content away.
#[derive(Clone)]
pub struct RasterSurface {
    buffer: RgbImage,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl RasterSurface {
    /// Create a white surface
    pub fn new(width: i64, height: i64) -> CanvasResult<Self> {
        let (width, height) = check_dimensions(width, height)?;
        Ok(Self {
            buffer: RgbImage::from_pixel(width, height, to_rgb(BACKGROUND)),
        })
    }

    /// Wrap an existing buffer, e.g. one decoded from a PNG file
    pub fn from_image(buffer: RgbImage) -> CanvasResult<Self> {
        check_dimensions(buffer.width() as i64, buffer.height() as i64)?;
        Ok(Self { buffer })
    }

    /// Read a PNG file back into a surface. Alpha, if any, is dropped.
    pub fn load_png(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let decoded = image::open(path.as_ref())?;
        Self::from_image(decoded.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height()
    }

    /// Replace the buffer with a fresh white one of the new size.
    ///
    /// On error the current buffer is left untouched.
    pub fn resize(&mut self, width: i64, height: i64) -> CanvasResult<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.buffer = RgbImage::from_pixel(self.width(), self.height(), to_rgb(BACKGROUND));
    }

    pub fn get_pixel(&self, p: Point) -> CanvasResult<Color32> {
        if !self.contains(p) {
            return Err(self.out_of_bounds(p));
        }
        Ok(to_color32(self.buffer.get_pixel(p.x as u32, p.y as u32)))
    }

    pub fn set_pixel(&mut self, p: Point, color: Color32) -> CanvasResult<()> {
        if !self.contains(p) {
            return Err(self.out_of_bounds(p));
        }
        self.buffer.put_pixel(p.x as u32, p.y as u32, to_rgb(color));
        Ok(())
    }

    /// Rasterize a segment with a round brush of `width` pixels.
    ///
    /// The brush footprint is stamped at every pixel of the 8-connected line,
    /// which gives round caps and round joins between consecutive segments.
    /// No anti-aliasing; anything falling outside the surface is clipped.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color32, width: u32) {
        // Only the part of the segment whose footprint can touch the surface
        // is walked.
        let reach = width as i64;
        let min = (-reach, -reach);
        let max = (self.width() as i64 - 1 + reach, self.height() as i64 - 1 + reach);
        let Some((from, to)) = geometry::clip_segment(from, to, min, max) else {
            return;
        };

        let footprint = geometry::brush_footprint(width);
        let rgb = to_rgb(color);

        for center in geometry::line_points(from, to) {
            for &(dx, dy) in &footprint {
                let p = Point::new(center.x + dx, center.y + dy);
                if self.contains(p) {
                    self.buffer.put_pixel(p.x as u32, p.y as u32, rgb);
                }
            }
        }
    }

    /// Write the buffer as an RGB PNG.
    ///
    /// The path is used as given; appending `.png` is the caller's job.
    pub fn export_png(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        write_png(&self.buffer, path.as_ref())
    }

    /// An owned copy of the pixels, safe to hand to another thread while
    /// drawing continues on this one.
    pub fn snapshot(&self) -> RgbImage {
        self.buffer.clone()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    fn out_of_bounds(&self, p: Point) -> CanvasError {
        CanvasError::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Write an RGB buffer to `path` as PNG
pub fn write_png(buffer: &RgbImage, path: &Path) -> CanvasResult<()> {
    buffer.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_non_background(surface: &RasterSurface) -> usize {
        surface
            .as_image()
            .pixels()
            .filter(|p| **p != to_rgb(BACKGROUND))
            .count()
    }

    #[test]
    fn test_new_surface_is_white() {
        let surface = RasterSurface::new(600, 400).unwrap();
        assert_eq!(surface.width(), 600);
        assert_eq!(surface.height(), 400);
        assert_eq!(surface.as_image().as_raw().len(), 600 * 400 * 3);
        assert_eq!(count_non_background(&surface), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 10), (10, 0), (-1, 10), (10, -5), (0, 0)] {
            assert!(matches!(
                RasterSurface::new(w, h),
                Err(CanvasError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_failed_resize_keeps_content() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.set_pixel(Point::new(3, 3), Color32::RED).unwrap();

        assert!(surface.resize(0, 20).is_err());
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.get_pixel(Point::new(3, 3)).unwrap(), Color32::RED);
    }

    #[test]
    fn test_resize_discards_content() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.draw_line(Point::new(0, 0), Point::new(19, 19), Color32::BLACK, 5);
        surface.resize(30, 10).unwrap();

        assert_eq!((surface.width(), surface.height()), (30, 10));
        assert_eq!(surface.as_image().as_raw().len(), 30 * 10 * 3);
        assert_eq!(count_non_background(&surface), 0);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut surface = RasterSurface::new(50, 40).unwrap();
        surface.draw_line(Point::new(5, 5), Point::new(45, 35), Color32::BLUE, 10);
        assert!(count_non_background(&surface) > 0);

        surface.clear();
        assert_eq!((surface.width(), surface.height()), (50, 40));
        assert_eq!(count_non_background(&surface), 0);
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let surface = RasterSurface::new(10, 10).unwrap();
        for p in [Point::new(-1, 0), Point::new(0, -1), Point::new(10, 0), Point::new(0, 10)] {
            assert!(matches!(
                surface.get_pixel(p),
                Err(CanvasError::OutOfBounds { .. })
            ));
        }
        assert!(surface.get_pixel(Point::new(9, 9)).is_ok());
    }

    #[test]
    fn test_degenerate_click_sets_single_pixel() {
        let mut surface = RasterSurface::new(600, 400).unwrap();
        surface.draw_line(Point::new(10, 10), Point::new(10, 10), Color32::BLACK, 1);

        assert_eq!(surface.get_pixel(Point::new(10, 10)).unwrap(), Color32::BLACK);
        assert_eq!(count_non_background(&surface), 1);
    }

    #[test]
    fn test_line_is_clipped_at_edges() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        surface.draw_line(Point::new(-50, 5), Point::new(50, 5), Color32::GREEN, 1);

        for x in 0..10 {
            assert_eq!(surface.get_pixel(Point::new(x, 5)).unwrap(), Color32::GREEN);
        }
        assert_eq!(count_non_background(&surface), 10);
    }

    #[test]
    fn test_far_away_line_draws_nothing() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        surface.draw_line(Point::new(100, 100), Point::new(200, 100), Color32::RED, 10);
        assert_eq!(count_non_background(&surface), 0);
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let max = u32::MAX as i64;
        for (w, h) in [(max, max), (100_000, 100_000), (max + 1, 1), (8193, 8192)] {
            assert!(matches!(
                RasterSurface::new(w, h),
                Err(CanvasError::InvalidDimension { .. })
            ));
        }
        assert!(RasterSurface::new(8192, 8192).is_ok());
    }

    #[test]
    fn test_oversized_resize_keeps_content() {
        let mut surface = RasterSurface::new(20, 20).unwrap();
        surface.set_pixel(Point::new(4, 4), Color32::BLUE).unwrap();
        let before = surface.snapshot();

        assert!(surface.resize(u32::MAX as i64, u32::MAX as i64).is_err());
        assert!(surface.resize(100_000, 100_000).is_err());
        assert_eq!(surface.snapshot(), before);
    }

    #[test]
    fn test_extreme_coordinates_are_clipped() {
        let mut surface = RasterSurface::new(50, 50).unwrap();
        surface.draw_line(Point::new(-10, 0), Point::new(i32::MAX, 0), Color32::RED, 1);
        for x in 0..50 {
            assert_eq!(surface.get_pixel(Point::new(x, 0)).unwrap(), Color32::RED);
        }
        assert_eq!(count_non_background(&surface), 50);

        surface.draw_line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), Color32::BLUE, 10);
        assert_eq!(surface.get_pixel(Point::new(25, 25)).unwrap(), Color32::BLUE);

        surface.clear();
        surface.draw_line(Point::new(0, 50_000_000), Point::new(50_000_000, 50_000_000), Color32::RED, 10);
        assert_eq!(count_non_background(&surface), 0);
    }
}
