//! Geometric primitives for the crop overlay.
//!
//! All rectangles are `f64` so that pointer drags stay sub-pixel accurate
//! while the user is interacting. They are only rounded to whole pixels
//! when a crop is actually applied to the raster buffer (see
//! [`Rect::to_pixels`]).
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the buffer
//! - x grows to the right, y grows downward
//! - Buffer space is the raster's own pixel grid; display space is the same
//!   grid after the page has scaled it for layout

mod mapper;

pub use mapper::{delta_to_buffer, to_buffer, to_display, MappingError, Scale};

use serde::{Deserialize, Serialize};

/// A pointer position or a pointer delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Width and height of a surface (buffer or on-screen presentation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds of a raster with integer dimensions.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }

    /// True when either side is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// An axis-aligned rectangle.
///
/// Rectangles published by the editor always satisfy `width > 0`,
/// `height > 0`, `x >= 0`, `y >= 0` and stay inside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Rect {
    /// Placeholder shown before any image is loaded.
    fn default() -> Self {
        Self::new(0.0, 0.0, 100.0, 100.0)
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the whole of `bounds`.
    pub fn full(bounds: Bounds) -> Self {
        Self::new(0.0, 0.0, bounds.width, bounds.height)
    }

    /// Centered rectangle covering `fraction` of each axis.
    ///
    /// With the default fraction of 0.8 this leaves a 10% margin on every
    /// side, e.g. `{80, 60, 640, 480}` for an 800x600 buffer.
    pub fn default_crop(bounds: Bounds, fraction: f64) -> Self {
        let fraction = fraction.clamp(f64::MIN_POSITIVE, 1.0);
        let width = bounds.width * fraction;
        let height = bounds.height * fraction;
        Self::new(
            (bounds.width - width) / 2.0,
            (bounds.height - height) / 2.0,
            width,
            height,
        )
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check the rectangle lies inside `bounds` with positive area.
    ///
    /// A small tolerance absorbs floating point error from scale round trips.
    pub fn fits_within(&self, bounds: Bounds) -> bool {
        const EPS: f64 = 1e-9;
        self.width > 0.0
            && self.height > 0.0
            && self.x >= -EPS
            && self.y >= -EPS
            && self.right() <= bounds.width + EPS
            && self.bottom() <= bounds.height + EPS
    }

    /// Force the rectangle into `bounds`.
    ///
    /// The origin is pulled inside the buffer first, then the size is
    /// shrunk so the far edge does not overflow. Each side keeps at least
    /// `min_size` (or the whole axis, if the buffer is smaller than that).
    pub fn clamp_to(&self, bounds: Bounds, min_size: f64) -> Self {
        let (x, width) = clamp_span(self.x, self.width, bounds.width, min_size);
        let (y, height) = clamp_span(self.y, self.height, bounds.height, min_size);
        Self::new(x, y, width, height)
    }

    /// Round to a whole-pixel region inside a `buffer_width` x
    /// `buffer_height` raster.
    ///
    /// The origin is clamped into the buffer and the size is clamped so the
    /// region does not overflow, with a minimum of 1x1.
    pub fn to_pixels(&self, buffer_width: u32, buffer_height: u32) -> PixelRegion {
        let (x, width) = pixel_span(self.x, self.width, buffer_width);
        let (y, height) = pixel_span(self.y, self.height, buffer_height);
        PixelRegion {
            x,
            y,
            width,
            height,
        }
    }
}

/// Clamp one axis of a rectangle into `[0, extent]`.
fn clamp_span(start: f64, size: f64, extent: f64, min_size: f64) -> (f64, f64) {
    let extent = extent.max(0.0);
    let min_size = min_size.max(0.0).min(extent);
    let start = if start.is_finite() { start } else { 0.0 };
    let size = if size.is_finite() { size } else { extent };

    let start = start.clamp(0.0, extent - min_size);
    let size = size.max(min_size).min(extent - start);
    (start, size)
}

fn pixel_span(start: f64, size: f64, extent: u32) -> (u32, u32) {
    let extent_f = f64::from(extent);
    let start = if start.is_finite() { start } else { 0.0 };
    let size = if size.is_finite() { size } else { extent_f };

    let px_start = start.round().clamp(0.0, extent_f) as u32;
    let px_start = px_start.min(extent.saturating_sub(1));
    let px_size = size.round().max(1.0).min(extent_f - f64::from(px_start)) as u32;
    (px_start, px_size.max(1))
}

/// Integer pixel region inside a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_crop_800x600() {
        let rect = Rect::default_crop(Bounds::new(800.0, 600.0), 0.8);
        assert_eq!(rect, Rect::new(80.0, 60.0, 640.0, 480.0));
    }

    #[test]
    fn test_full_rect() {
        let rect = Rect::full(Bounds::new(400.0, 300.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_placeholder_rect() {
        assert_eq!(Rect::default(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_point_delta() {
        let d = Point::new(130.0, 90.0).delta_from(Point::new(80.0, 60.0));
        assert_eq!(d, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_degenerate_bounds() {
        assert!(Bounds::new(0.0, 10.0).is_degenerate());
        assert!(Bounds::new(10.0, -1.0).is_degenerate());
        assert!(Bounds::new(f64::NAN, 10.0).is_degenerate());
        assert!(!Bounds::new(10.0, 10.0).is_degenerate());
    }

    #[test]
    fn test_clamp_to_pulls_origin_inside() {
        let bounds = Bounds::new(100.0, 100.0);
        let rect = Rect::new(-10.0, -5.0, 50.0, 50.0).clamp_to(bounds, 20.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_clamp_to_shrinks_far_edge() {
        let bounds = Bounds::new(100.0, 100.0);
        let rect = Rect::new(70.0, 10.0, 50.0, 200.0).clamp_to(bounds, 20.0);
        assert_eq!(rect, Rect::new(70.0, 10.0, 30.0, 90.0));
        assert!(rect.fits_within(bounds));
    }

    #[test]
    fn test_clamp_to_enforces_minimum() {
        let bounds = Bounds::new(100.0, 100.0);
        let rect = Rect::new(95.0, 0.0, 1.0, 1.0).clamp_to(bounds, 20.0);
        assert_eq!(rect, Rect::new(80.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_clamp_to_tiny_buffer() {
        // Buffer narrower than the minimum: the whole axis is used
        let bounds = Bounds::new(8.0, 100.0);
        let rect = Rect::new(2.0, 0.0, 4.0, 50.0).clamp_to(bounds, 20.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 8.0);
    }

    #[test]
    fn test_clamp_to_nan_is_replaced() {
        let bounds = Bounds::new(100.0, 50.0);
        let rect = Rect::new(f64::NAN, 0.0, f64::NAN, 10.0).clamp_to(bounds, 1.0);
        assert!(rect.fits_within(bounds));
        assert_eq!(rect.width, 100.0);
    }

    #[test]
    fn test_to_pixels_rounds() {
        let region = Rect::new(10.4, 20.6, 50.5, 30.2).to_pixels(200, 200);
        assert_eq!(
            region,
            PixelRegion {
                x: 10,
                y: 21,
                width: 51,
                height: 30
            }
        );
    }

    #[test]
    fn test_to_pixels_clamps_to_buffer() {
        let region = Rect::new(190.0, -5.0, 50.0, 500.0).to_pixels(200, 100);
        assert_eq!(region.x, 190);
        assert_eq!(region.width, 10);
        assert_eq!(region.y, 0);
        assert_eq!(region.height, 100);
    }

    #[test]
    fn test_to_pixels_minimum_one_pixel() {
        let region = Rect::new(500.0, 500.0, 0.1, 0.0).to_pixels(10, 10);
        assert_eq!(region.x, 9);
        assert_eq!(region.y, 9);
        assert_eq!(region.width, 1);
        assert_eq!(region.height, 1);
    }
}
