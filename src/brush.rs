use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

/// The fixed, ordered set of brush widths in pixels.
pub const BRUSH_WIDTHS: [u32; 4] = [1, 2, 5, 10];

/// Direction for stepping through [`BRUSH_WIDTHS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Decrease,
    Increase,
}

/// A brush width that is guaranteed to be one of the presets.
///
/// Stored as an index into [`BRUSH_WIDTHS`]; serialized as the pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BrushWidth {
    index: usize,
}

impl BrushWidth {
    pub const SMALLEST: BrushWidth = BrushWidth { index: 0 };
    pub const LARGEST: BrushWidth = BrushWidth {
        index: BRUSH_WIDTHS.len() - 1,
    };

    /// Look up a preset by its pixel width
    pub fn new(pixels: u32) -> CanvasResult<Self> {
        BRUSH_WIDTHS
            .iter()
            .position(|&w| w == pixels)
            .map(|index| Self { index })
            .ok_or_else(|| {
                CanvasError::InvalidArgument(format!(
                    "brush width {} is not one of {:?}",
                    pixels, BRUSH_WIDTHS
                ))
            })
    }

    pub fn pixels(self) -> u32 {
        BRUSH_WIDTHS[self.index]
    }

    /// The neighbouring preset in the given direction, or `self` at either end.
    pub fn step(self, step: Step) -> Self {
        let index = match step {
            Step::Decrease => self.index.saturating_sub(1),
            Step::Increase => (self.index + 1).min(BRUSH_WIDTHS.len() - 1),
        };
        Self { index }
    }

    pub fn all() -> impl Iterator<Item = BrushWidth> {
        (0..BRUSH_WIDTHS.len()).map(|index| BrushWidth { index })
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self::SMALLEST
    }
}

impl TryFrom<u32> for BrushWidth {
    type Error = CanvasError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        Self::new(pixels)
    }
}

impl From<BrushWidth> for u32 {
    fn from(width: BrushWidth) -> Self {
        width.pixels()
    }
}

impl std::fmt::Display for BrushWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} px", self.pixels())
    }
}
