// ABOUTME: Liturgy table for the kidase-slides application
// ABOUTME: Loads spreadsheet rows and validates the requested language columns

use crate::errors::{KidaseError, Result};
use crate::xlsx;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Name of the order-of-the-liturgy workbook inside the data directory.
pub const DATA_FILE_NAME: &str = "ሥርዓተ_ቅዳሴ.xlsx";

/// Most languages a slide can show at once.
pub const MAX_LANGUAGES: usize = 4;

/// Locate the liturgy workbook inside `data_dir`.
pub fn workbook_path(data_dir: &Path) -> Result<PathBuf> {
    if !data_dir.is_dir() {
        return Err(KidaseError::PathNotFoundError(data_dir.to_path_buf()));
    }
    let path = data_dir.join(DATA_FILE_NAME);
    if !path.is_file() {
        return Err(KidaseError::PathNotFoundError(path));
    }
    Ok(path)
}

/// Read the first sheet of the liturgy workbook in `data_dir`.
pub fn read_workbook(data_dir: &Path) -> Result<RawTable> {
    let path = workbook_path(data_dir)?;
    info!("Loading liturgy from {:?}", path);
    xlsx::read_sheet(&path)
}

/// A raw spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// String form used for slide text. Empty cells become `""`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// Header row plus data rows, as read from a sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// First column whose header equals `name` exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `(row, column)`; cells past the end of a short row are empty.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// One liturgical unit: the text of each configured language, in language order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiturgyRow {
    index: usize,
    texts: Vec<(String, String)>,
}

impl LiturgyRow {
    /// 0-based position of the row in the source.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.texts
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, text)| text.as_str())
    }

    /// `(language, text)` pairs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.texts.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    pub fn language_count(&self) -> usize {
        self.texts.len()
    }
}

/// Validated rows of the liturgy for a fixed language selection
#[derive(Debug, Clone)]
pub struct LiturgyTable {
    rows: Vec<LiturgyRow>,
    languages: Vec<String>,
    available_languages: Vec<String>,
}

impl LiturgyTable {
    /// Check `languages` against `source` and copy out their columns.
    ///
    /// Fails before touching any row if the count is outside 1..=4 or a
    /// language has no matching column.
    pub fn load(source: &RawTable, languages: &[String]) -> Result<Self> {
        if languages.is_empty() || languages.len() > MAX_LANGUAGES {
            return Err(KidaseError::UnsupportedLanguageCount(languages.len()));
        }

        let mut columns = Vec::with_capacity(languages.len());
        for lang in languages {
            match source.column_index(lang) {
                Some(col) => columns.push(col),
                None => return Err(KidaseError::MissingLanguage(lang.clone())),
            }
        }
        debug!("Language columns resolved: {:?}", columns);

        let rows = (0..source.rows.len())
            .map(|i| LiturgyRow {
                index: i,
                texts: languages
                    .iter()
                    .zip(&columns)
                    .map(|(lang, &col)| (lang.clone(), source.cell(i, col).to_text()))
                    .collect(),
            })
            .collect();

        Ok(Self {
            rows,
            languages: languages.to_vec(),
            available_languages: source.headers.clone(),
        })
    }

    /// Read `DATA_FILE_NAME` from `data_dir` and load it.
    pub fn from_data_dir(data_dir: &Path, languages: &[String]) -> Result<Self> {
        let raw = read_workbook(data_dir)?;
        let table = Self::load(&raw, languages)?;
        info!(
            "Loaded {} rows for languages {:?}",
            table.len(),
            table.languages()
        );
        Ok(table)
    }

    pub fn rows(&self) -> &[LiturgyRow] {
        &self.rows
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn available_languages(&self) -> &[String] {
        &self.available_languages
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn source() -> RawTable {
        RawTable::new(
            langs(&["ግእዝ", "ትግርኛ", "english", "amharic"]),
            vec![
                vec![
                    CellValue::Text("፠ ካህን፡ ሰላም ለኩልክሙ።".into()),
                    CellValue::Text("፠ ካህን፦ ሰላም ምስ ኩልኹም።".into()),
                    CellValue::Text("፠ Priest: Peace be with you.".into()),
                ],
                vec![
                    CellValue::Empty,
                    CellValue::Number(12.0),
                    CellValue::Text("፠ People: And with your spirit.".into()),
                    CellValue::Bool(true),
                ],
            ],
        )
    }

    #[test]
    fn test_load_keeps_row_count_and_order() {
        let table = LiturgyTable::load(&source(), &langs(&["english", "ግእዝ"])).unwrap();
        assert_eq!(table.len(), 2);
        let first: Vec<_> = table.rows()[0].iter().map(|(l, _)| l).collect();
        assert_eq!(first, vec!["english", "ግእዝ"]);
        assert_eq!(table.rows()[1].index(), 1);
        assert_eq!(table.available_languages().len(), 4);
    }

    #[test]
    fn test_missing_and_short_cells_become_empty() {
        let table = LiturgyTable::load(&source(), &langs(&["ግእዝ", "amharic"])).unwrap();
        assert_eq!(table.rows()[0].get("amharic"), Some(""));
        assert_eq!(table.rows()[1].get("ግእዝ"), Some(""));
        assert_eq!(table.rows()[1].get("amharic"), Some("TRUE"));
    }

    #[test]
    fn test_numeric_cells_coerced_to_text() {
        let table = LiturgyTable::load(&source(), &langs(&["ትግርኛ"])).unwrap();
        assert_eq!(table.rows()[1].get("ትግርኛ"), Some("12"));
        assert_eq!(CellValue::Number(2.5).to_text(), "2.5");
    }

    #[test]
    fn test_missing_language_is_named() {
        let err = LiturgyTable::load(&source(), &langs(&["english", "français"])).unwrap_err();
        match err {
            KidaseError::MissingLanguage(lang) => assert_eq!(lang, "français"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_language_match_is_exact() {
        assert!(LiturgyTable::load(&source(), &langs(&["English"])).is_err());
        assert!(LiturgyTable::load(&source(), &langs(&["english "])).is_err());
    }

    #[test]
    fn test_language_count_bounds() {
        let err = LiturgyTable::load(&source(), &[]).unwrap_err();
        assert!(matches!(err, KidaseError::UnsupportedLanguageCount(0)));
        let five = langs(&["ግእዝ", "ትግርኛ", "english", "amharic", "english"]);
        let err = LiturgyTable::load(&source(), &five).unwrap_err();
        assert!(matches!(err, KidaseError::UnsupportedLanguageCount(5)));
    }

    #[test]
    fn test_from_data_dir_without_workbook() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = LiturgyTable::from_data_dir(dir.path(), &langs(&["english"])).unwrap_err();
        match err {
            KidaseError::PathNotFoundError(path) => {
                assert_eq!(path, dir.path().join(DATA_FILE_NAME))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_workbook_path_requires_a_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        match workbook_path(&missing).unwrap_err() {
            KidaseError::PathNotFoundError(path) => assert_eq!(path, missing),
            other => panic!("unexpected error: {:?}", other),
        }

        // A directory named like the workbook is not a workbook
        std::fs::create_dir(dir.path().join(DATA_FILE_NAME)).unwrap();
        assert!(matches!(
            workbook_path(dir.path()),
            Err(KidaseError::PathNotFoundError(_))
        ));
    }
}
