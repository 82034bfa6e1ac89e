// ABOUTME: Slide composition for the kidase-slides application
// ABOUTME: Pairs each language's tokens with its layout region and appends the slide to a deck

use crate::errors::{KidaseError, Result};
use crate::keywords::KeywordClassifier;
use crate::layout::SlideRegion;
use crate::pptx::Presentation;
use crate::style::SlideStyle;
use crate::table::LiturgyRow;
use crate::tokenizer::{tokenize, Token};
use log::debug;

/// One language's box on a slide
#[derive(Debug, Clone, PartialEq)]
pub struct PaneSpec {
    pub language: String,
    pub region: SlideRegion,
    pub tokens: Vec<Token>,
}

/// Everything needed to draw one row as one slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec<'a> {
    pub row_index: usize,
    pub panes: Vec<PaneSpec>,
    pub style: &'a SlideStyle,
}

/// Turns liturgy rows into slides using a fixed marker table and style
#[derive(Debug, Clone)]
pub struct SlideRenderer {
    classifier: KeywordClassifier,
    style: SlideStyle,
}

impl SlideRenderer {
    pub fn new(classifier: KeywordClassifier, style: SlideStyle) -> Self {
        Self { classifier, style }
    }

    pub fn style(&self) -> &SlideStyle {
        &self.style
    }

    pub fn classifier(&self) -> &KeywordClassifier {
        &self.classifier
    }

    /// Tokenize each language of `row` and pair it with its region.
    pub fn compose(&self, row: &LiturgyRow, regions: &[SlideRegion]) -> Result<SlideSpec<'_>> {
        if regions.len() != row.language_count() {
            return Err(KidaseError::ValidationError(format!(
                "Row {} has {} languages but the layout has {} regions",
                row.index(),
                row.language_count(),
                regions.len()
            )));
        }

        let panes = row
            .iter()
            .zip(regions)
            .map(|((language, text), region)| PaneSpec {
                language: language.to_string(),
                region: *region,
                tokens: tokenize(text, &self.classifier),
            })
            .collect();

        Ok(SlideSpec {
            row_index: row.index(),
            panes,
            style: &self.style,
        })
    }

    /// Append one slide for `row` to `deck` and return its 1-based number.
    pub fn render(
        &self,
        deck: &mut Presentation,
        row: &LiturgyRow,
        regions: &[SlideRegion],
    ) -> Result<usize> {
        let spec = self.compose(row, regions)?;
        let markers: usize = spec
            .panes
            .iter()
            .map(|p| p.tokens.iter().filter(|t| t.is_marker()).count())
            .sum();
        let slide_number = deck.add_slide(&spec);
        debug!(
            "Rendered row {} as slide {} ({} role markers)",
            row.index(),
            slide_number,
            markers
        );
        Ok(slide_number)
    }
}

impl Default for SlideRenderer {
    fn default() -> Self {
        Self::new(KeywordClassifier::default(), SlideStyle::default())
    }
}
