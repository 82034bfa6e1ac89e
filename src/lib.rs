// ABOUTME: Library module for the kidase-slides program.
// ABOUTME: Contains the table loader, marker tokenizer, layout planner, and PPTX writer.

// Reexport modules
pub mod config;
pub mod creator;
pub mod errors;
pub mod keywords;
pub mod layout;
pub mod pptx;
pub mod render;
pub mod style;
pub mod table;
pub mod tokenizer;
pub mod xlsx;

// Reexport common types and functions
pub use config::Config;
pub use creator::{KidaseCreator, SlideSettings};
pub use errors::{KidaseError, Result};
pub use keywords::{KeywordClassifier, Role};
pub use layout::{plan, GridLayout, SlideRegion};
pub use pptx::Presentation;
pub use render::{PaneSpec, SlideRenderer, SlideSpec};
pub use style::{Rgb, SlideStyle};
pub use table::{read_workbook, CellValue, LiturgyRow, LiturgyTable, RawTable, DATA_FILE_NAME};
pub use tokenizer::{tokenize, Token};
