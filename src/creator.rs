// ABOUTME: Deck creation pipeline for the kidase-slides application
// ABOUTME: Renders every liturgy row, in source order, into one presentation

use crate::errors::Result;
use crate::keywords::KeywordClassifier;
use crate::layout::plan;
use crate::pptx::{Presentation, DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
use crate::render::SlideRenderer;
use crate::style::SlideStyle;
use crate::table::LiturgyTable;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::Path;

/// Settings shared by every slide in a deck
#[derive(Debug, Clone)]
pub struct SlideSettings {
    pub style: SlideStyle,
    pub slide_width: u64,
    pub slide_height: u64,
    pub title: String,
    pub show_progress: bool,
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            style: SlideStyle::default(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: "Kidase".to_string(),
            show_progress: false,
        }
    }
}

pub struct KidaseCreator {
    table: LiturgyTable,
    settings: SlideSettings,
    renderer: SlideRenderer,
}

impl KidaseCreator {
    /// Load the liturgy workbook from `data_dir` for `languages`.
    pub fn new(data_dir: &Path, languages: &[String], settings: SlideSettings) -> Result<Self> {
        let table = LiturgyTable::from_data_dir(data_dir, languages)?;
        Ok(Self::from_table(table, settings))
    }

    pub fn from_table(table: LiturgyTable, settings: SlideSettings) -> Self {
        let renderer = SlideRenderer::new(KeywordClassifier::default(), settings.style.clone());
        Self {
            table,
            settings,
            renderer,
        }
    }

    /// Swap in a custom marker table.
    pub fn with_classifier(mut self, classifier: KeywordClassifier) -> Self {
        self.renderer = SlideRenderer::new(classifier, self.settings.style.clone());
        self
    }

    pub fn table(&self) -> &LiturgyTable {
        &self.table
    }

    /// Build the deck: one slide per row, in row order.
    pub fn create_presentation(&self) -> Result<Presentation> {
        let languages = self.table.languages();
        // Fails before the first slide if the language count is unsupported
        let regions = plan(
            languages.len(),
            self.settings.slide_width,
            self.settings.slide_height,
        )?;

        info!(
            "Creating {} slides for {} languages: {:?}",
            self.table.len(),
            languages.len(),
            languages
        );

        let mut deck = Presentation::new(self.settings.slide_width, self.settings.slide_height)
            .with_title(self.settings.title.clone());

        let progress_bar = if self.settings.show_progress {
            ProgressBar::new(self.table.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        let bar_style = ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(bar_style.progress_chars("=>-"));
        progress_bar.set_message("Creating slides");

        for row in self.table.rows() {
            self.renderer.render(&mut deck, row, &regions)?;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!("Created {} slides", deck.slide_count());
        Ok(deck)
    }

    /// Build the whole deck, then write it. Nothing is written if any row fails.
    pub fn write_presentation(&self, output_file: &Path) -> Result<usize> {
        let deck = self.create_presentation()?;
        deck.save(output_file)?;
        Ok(deck.slide_count())
    }
}
