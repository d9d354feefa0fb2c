//! Conversion between buffer space and display space.
//!
//! The page shows the raster scaled to fit its layout box, so a pointer
//! position reported by the browser is in display space while the crop
//! rectangle lives in buffer space. `Scale` is the per-axis ratio
//! `display / buffer` and is derived on demand, never stored across a
//! dimension change.

use thiserror::Error;

use super::{Bounds, Point, Rect};

/// Errors from coordinate mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    /// A scale factor is zero, negative or not finite.
    #[error("Degenerate scale: {scale_x} x {scale_y}")]
    DegenerateScale { scale_x: f64, scale_y: f64 },

    /// The buffer or its on-screen presentation has no area.
    #[error("Degenerate layout: buffer {buffer_width}x{buffer_height}, display {display_width}x{display_height}")]
    DegenerateLayout {
        buffer_width: f64,
        buffer_height: f64,
        display_width: f64,
        display_height: f64,
    },
}

/// Ratio of displayed size to buffer size on each axis.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Scale {
    /// Display space equals buffer space.
    pub const IDENTITY: Scale = Scale {
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub const fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }

    /// Derive the scale from the buffer size and the measured layout size.
    ///
    /// # Errors
    ///
    /// Returns `MappingError::DegenerateLayout` if either size has no area.
    pub fn from_layout(buffer: Bounds, display: Bounds) -> Result<Self, MappingError> {
        if buffer.is_degenerate() || display.is_degenerate() {
            return Err(MappingError::DegenerateLayout {
                buffer_width: buffer.width,
                buffer_height: buffer.height,
                display_width: display.width,
                display_height: display.height,
            });
        }
        Ok(Self::new(
            display.width / buffer.width,
            display.height / buffer.height,
        ))
    }

    /// True when both factors can be divided by.
    pub fn is_invertible(&self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.scale_x > 0.0
            && self.scale_y > 0.0
    }

    fn check(&self) -> Result<(), MappingError> {
        if self.is_invertible() {
            Ok(())
        } else {
            Err(MappingError::DegenerateScale {
                scale_x: self.scale_x,
                scale_y: self.scale_y,
            })
        }
    }
}

/// Project a buffer-space rectangle into display space.
///
/// x and width scale by `scale_x`, y and height by `scale_y`. No clamping
/// is done; the input is trusted to already be inside the buffer.
pub fn to_display(rect: Rect, scale: Scale) -> Rect {
    Rect::new(
        rect.x * scale.scale_x,
        rect.y * scale.scale_y,
        rect.width * scale.scale_x,
        rect.height * scale.scale_y,
    )
}

/// Map a display-space rectangle back into buffer space.
///
/// # Errors
///
/// Returns `MappingError::DegenerateScale` when a factor is zero or not
/// finite, so a collapsed layout never produces a NaN rectangle.
pub fn to_buffer(display_rect: Rect, scale: Scale) -> Result<Rect, MappingError> {
    scale.check()?;
    Ok(Rect::new(
        display_rect.x / scale.scale_x,
        display_rect.y / scale.scale_y,
        display_rect.width / scale.scale_x,
        display_rect.height / scale.scale_y,
    ))
}

/// Map a display-space pointer delta into buffer space.
///
/// # Errors
///
/// Same as [`to_buffer`].
pub fn delta_to_buffer(delta: Point, scale: Scale) -> Result<Point, MappingError> {
    scale.check()?;
    Ok(Point::new(delta.x / scale.scale_x, delta.y / scale.scale_y))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
