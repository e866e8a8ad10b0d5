use log::debug;
use thiserror::Error;

/// A single pixel in R,G,B order.
pub type Rgb = [u8; 3];

#[derive(Error, Debug)]
pub enum PaintError {
    #[error("invalid canvas dimensions {width}x{height}: both sides must be nonzero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Fill rule applied to every pixel of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// One color for the whole canvas.
    Solid(Rgb),
    /// Three horizontal bars in the accent color over a background.
    Glyph { background: Rgb, accent: Rgb },
}

/// Bar placement for the glyph, derived from the canvas size alone.
///
/// All values use floor division. At small sizes this collapses the bars
/// to single-pixel rows (16x16 in particular); that rounding is part of
/// the icon's look and must not be replaced with float geometry.
struct GlyphLayout {
    padding: i64,
    line_height: i64,
    line_spacing: i64,
    start_x: i64,
    end_x: i64,
    center_y: i64,
}

impl GlyphLayout {
    fn derive(width: u32, height: u32) -> Self {
        let w = i64::from(width);
        let h = i64::from(height);
        Self {
            padding: w / 8,
            line_height: (w / 20).max(1),
            line_spacing: w / 6,
            start_x: w / 4,
            end_x: w - w / 4,
            center_y: h / 2,
        }
    }

    /// Whether (x, y) lies on one of the three bars.
    fn covers(&self, x: i64, y: i64, width: i64, height: i64) -> bool {
        // Outside the padding frame nothing is drawn.
        if x < self.padding || x >= width - self.padding {
            return false;
        }
        if y < self.padding || y >= height - self.padding {
            return false;
        }
        if x < self.start_x || x > self.end_x {
            return false;
        }

        let centers = [
            self.center_y - self.line_spacing,
            self.center_y,
            self.center_y + self.line_spacing,
        ];
        centers
            .iter()
            .any(|&center| (y - center).abs() <= self.line_height / 2)
    }
}

/// Paints a width x height canvas into a raw scanline stream.
///
/// Each of the `height` rows is one filter-type byte (0, "none") followed
/// by `width` RGB triples, top to bottom. The stream is what [`crate::png::encode`]
/// expects; no chunking or compression happens here.
pub fn paint(width: u32, height: u32, fill: Fill) -> Result<Vec<u8>, PaintError> {
    if width == 0 || height == 0 {
        return Err(PaintError::InvalidDimensions { width, height });
    }

    debug!("Painting {}x{} canvas with {:?}", width, height, fill);

    let mut scanlines = Vec::with_capacity(height as usize * (1 + width as usize * 3));

    match fill {
        Fill::Solid(color) => {
            for _ in 0..height {
                scanlines.push(0); // Filter type: none
                for _ in 0..width {
                    scanlines.extend_from_slice(&color);
                }
            }
        }
        Fill::Glyph { background, accent } => {
            let layout = GlyphLayout::derive(width, height);
            for y in 0..height {
                scanlines.push(0); // Filter type: none
                for x in 0..width {
                    let color = if layout.covers(
                        i64::from(x),
                        i64::from(y),
                        i64::from(width),
                        i64::from(height),
                    ) {
                        accent
                    } else {
                        background
                    };
                    scanlines.extend_from_slice(&color);
                }
            }
        }
    }

    Ok(scanlines)
}
