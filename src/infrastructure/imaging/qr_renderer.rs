//! QR code implementation of [`ImageRenderer`].

use qrcode::{Color, QrCode};
use serde_json::json;

use crate::domain::ImageRenderer;
use crate::error::AppError;

/// Pixel value of a dark module.
const DARK: u8 = 0x00;
/// Pixel value of a light module or the quiet zone.
const LIGHT: u8 = 0xFF;

/// Renders QR codes as a raw 8-bit grayscale pixel dump.
///
/// The image is square, `(modules + 2 * border) * box_size` pixels on a side,
/// stored row by row with one byte per pixel. The smallest QR version that
/// fits the data is chosen.
#[derive(Debug, Clone, Copy)]
pub struct QrRenderer {
    box_size: usize,
    border: usize,
}

impl QrRenderer {
    pub const DEFAULT_BOX_SIZE: usize = 10;
    pub const DEFAULT_BORDER: usize = 5;
    pub const MAX_BOX_SIZE: usize = 40;
    pub const MAX_BORDER: usize = 20;

    pub fn new(box_size: usize, border: usize) -> Self {
        Self { box_size, border }
    }

    /// Side length in pixels for a code `modules` wide, or `None` on overflow.
    pub fn side_length(&self, modules: usize) -> Option<usize> {
        self.border
            .checked_mul(2)?
            .checked_add(modules)?
            .checked_mul(self.box_size)
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BOX_SIZE, Self::DEFAULT_BORDER)
    }
}

impl ImageRenderer for QrRenderer {
    fn render(&self, data: &str) -> Result<Vec<u8>, AppError> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| {
            AppError::internal(
                "Failed to encode QR code",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let modules = code.width();
        let colors = code.to_colors();
        let (side, area) = self
            .side_length(modules)
            .and_then(|side| Some((side, side.checked_mul(side)?)))
            .ok_or_else(|| {
                AppError::internal(
                    "QR image dimensions overflow",
                    json!({ "box_size": self.box_size, "border": self.border }),
                )
            })?;
        let mut pixels = vec![LIGHT; area];

        for (index, color) in colors.iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }

            let left = (index % modules + self.border) * self.box_size;
            let top = (index / modules + self.border) * self.box_size;

            for y in top..top + self.box_size {
                let row = y * side;
                pixels[row + left..row + left + self.box_size].fill(DARK);
            }
        }

        Ok(pixels)
    }
}
