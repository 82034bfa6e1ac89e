// ABOUTME: Grid layout planner for the kidase-slides application
// ABOUTME: Partitions a slide into one region per language (columns or a 2x2 grid)

use crate::errors::{KidaseError, Result};

/// A rectangle in slide space, in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRegion {
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
}

impl SlideRegion {
    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// True when the two rectangles share interior area.
    pub fn overlaps(&self, other: &SlideRegion) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// How a slide is split for a given number of languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Side-by-side columns for 1 to 3 languages.
    Columns(usize),
    /// 2x2 grid for exactly 4 languages.
    Quadrants,
}

impl GridLayout {
    pub fn for_count(language_count: usize) -> Result<Self> {
        match language_count {
            1..=3 => Ok(GridLayout::Columns(language_count)),
            4 => Ok(GridLayout::Quadrants),
            n => Err(KidaseError::UnsupportedLanguageCount(n)),
        }
    }

    /// Regions in language order.
    pub fn regions(&self, slide_width: u64, slide_height: u64) -> Vec<SlideRegion> {
        match *self {
            GridLayout::Columns(n) => (0..n)
                .map(|j| {
                    let (x, width) = span(j, n, slide_width);
                    SlideRegion {
                        x,
                        y: 0,
                        width,
                        height: slide_height,
                    }
                })
                .collect(),
            GridLayout::Quadrants => (0..4)
                .map(|j| {
                    let (x, width) = span(j % 2, 2, slide_width);
                    let (y, height) = span(j / 2, 2, slide_height);
                    SlideRegion {
                        x,
                        y,
                        width,
                        height,
                    }
                })
                .collect(),
        }
    }
}

/// Offset and length of cell `index` when `total` is cut into `parts`.
/// Edges are computed independently so adjacent cells meet exactly.
fn span(index: usize, parts: usize, total: u64) -> (u64, u64) {
    let parts = parts as u64;
    let index = index as u64;
    let start = index * total / parts;
    let end = (index + 1) * total / parts;
    (start, end - start)
}

/// One region per language for a slide of the given size.
pub fn plan(language_count: usize, slide_width: u64, slide_height: u64) -> Result<Vec<SlideRegion>> {
    Ok(GridLayout::for_count(language_count)?.regions(slide_width, slide_height))
}
