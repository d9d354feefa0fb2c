//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::encode::ExportFormat;
use crate::engine::DEFAULT_MIN_CROP_SIZE;

/// Tunables for an `EditorSurface`.
///
/// Every field has a default, so a partial object from the page
/// (`{ "maxWidth": 1024 }`) deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Width of the display envelope loaded images are fitted into.
    pub max_width: u32,
    /// Height of the display envelope loaded images are fitted into.
    pub max_height: u32,
    /// Smallest crop side in buffer pixels.
    pub min_crop_size: f64,
    /// Share of each axis covered by the crop box after load/reset.
    pub initial_crop_fraction: f64,
    /// Resampling filter for load, reset and resize.
    pub resize_filter: FilterType,
    /// Format used by `export`.
    pub export_format: ExportFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 600,
            min_crop_size: DEFAULT_MIN_CROP_SIZE,
            initial_crop_fraction: 0.8,
            resize_filter: FilterType::Bilinear,
            export_format: ExportFormat::Png,
        }
    }
}

impl EditorConfig {
    /// Replace out-of-range values with their defaults.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.max_width == 0 {
            self.max_width = defaults.max_width;
        }
        if self.max_height == 0 {
            self.max_height = defaults.max_height;
        }
        if !(self.min_crop_size.is_finite() && self.min_crop_size > 0.0) {
            self.min_crop_size = defaults.min_crop_size;
        }
        if !(self.initial_crop_fraction > 0.0 && self.initial_crop_fraction <= 1.0) {
            self.initial_crop_fraction = defaults.initial_crop_fraction;
        }
        if let ExportFormat::Jpeg { quality } = &mut self.export_format {
            *quality = (*quality).clamp(1, 100);
        }
        self
    }
}
