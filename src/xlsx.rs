// ABOUTME: Minimal XLSX reader for the kidase-slides application
// ABOUTME: Reads the first worksheet of a workbook into a header row and cell rows

use crate::errors::{KidaseError, Result};
use crate::table::{CellValue, RawTable};
use log::{debug, info};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const WORKBOOK_PATH: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PATH: &str = "xl/_rels/workbook.xml.rels";
const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";
const DEFAULT_SHEET_PATH: &str = "xl/worksheets/sheet1.xml";

// Worksheet bounds: column XFD, row 1048576
const MAX_COLUMNS: usize = 16_384;
const MAX_ROWS: usize = 1_048_576;

/// Read the first sheet of the workbook at `path`.
pub fn read_sheet(path: &Path) -> Result<RawTable> {
    let file = fs::File::open(path).map_err(KidaseError::FileReadError)?;
    read_sheet_from(file)
}

/// Read the first sheet from any seekable XLSX stream.
pub fn read_sheet_from<R: Read + Seek>(reader: R) -> Result<RawTable> {
    let mut archive = ZipArchive::new(reader)
        .map_err(|e| KidaseError::TableError(format!("Not an XLSX archive: {}", e)))?;

    let shared_strings = match read_entry(&mut archive, SHARED_STRINGS_PATH)? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };
    debug!("Read {} shared strings", shared_strings.len());

    let sheet_path = first_sheet_path(&mut archive)?;
    info!("Reading worksheet {}", sheet_path);
    let sheet_xml = read_entry(&mut archive, &sheet_path)?
        .ok_or_else(|| KidaseError::TableError(format!("Worksheet {} is missing", sheet_path)))?;

    let cells = parse_sheet(&sheet_xml, &shared_strings)?;
    build_table(cells)
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(KidaseError::TableError(format!("Failed to open {}: {}", name, e))),
    };
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(KidaseError::FileReadError)?;
    Ok(Some(content))
}

fn attribute(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Resolve the first `<sheet>` in the workbook to its part name.
fn first_sheet_path<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<String> {
    let (workbook, rels) = match (
        read_entry(archive, WORKBOOK_PATH)?,
        read_entry(archive, WORKBOOK_RELS_PATH)?,
    ) {
        (Some(workbook), Some(rels)) => (workbook, rels),
        _ => return Ok(DEFAULT_SHEET_PATH.to_string()),
    };

    let mut rel_id = None;
    let mut reader = Reader::from_str(&workbook);
    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sheet" => {
                rel_id = attribute(e, b"id")?;
                break;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    let Some(rel_id) = rel_id else {
        return Err(KidaseError::TableError("Workbook has no sheets".to_string()));
    };

    let mut reader = Reader::from_str(&rels);
    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if attribute(e, b"Id")?.as_deref() == Some(rel_id.as_str()) {
                    if let Some(target) = attribute(e, b"Target")? {
                        return Ok(match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("xl/{}", target),
                        });
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(DEFAULT_SHEET_PATH.to_string())
}

/// Each `<si>` item is the concatenation of its `<t>` texts, skipping phonetic runs.
fn parse_shared_strings(xml: &str) -> Result<Vec<String>> {
    let mut strings = Vec::new();
    let mut reader = Reader::from_str(xml);
    let mut current = String::new();
    let mut in_text = false;
    let mut in_phonetic = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"si" => current.clear(),
                b"t" => in_text = true,
                b"rPh" => in_phonetic = true,
                _ => {}
            },
            Event::Empty(ref e) if e.local_name().as_ref() == b"si" => strings.push(String::new()),
            Event::Text(ref e) if in_text && !in_phonetic => current.push_str(&e.unescape()?),
            Event::CData(ref e) if in_text && !in_phonetic => {
                current.push_str(&String::from_utf8_lossy(e))
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"si" => strings.push(std::mem::take(&mut current)),
                b"t" => in_text = false,
                b"rPh" => in_phonetic = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(strings)
}

/// Split an `A1`-style reference into 0-based (row, column).
fn parse_reference(reference: &str) -> Option<(usize, usize)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() {
        return None;
    }
    let mut column = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = c.to_ascii_uppercase() as usize - 'A' as usize + 1;
        column = column.checked_mul(26)?.checked_add(digit)?;
        if column > MAX_COLUMNS {
            return None;
        }
    }
    let row: usize = digits.parse().ok()?;
    if row > MAX_ROWS {
        return None;
    }
    Some((row.checked_sub(1)?, column - 1))
}

fn cell_value(kind: Option<&str>, raw: &str, shared: &[String]) -> Result<CellValue> {
    let value = match kind {
        Some("s") => {
            let idx: usize = raw.trim().parse().map_err(|_| {
                KidaseError::TableError(format!("Invalid shared string index '{}'", raw))
            })?;
            let text = shared.get(idx).ok_or_else(|| {
                KidaseError::TableError(format!("Shared string {} out of range", idx))
            })?;
            CellValue::Text(text.clone())
        }
        Some("inlineStr") | Some("str") | Some("e") | Some("d") => CellValue::Text(raw.to_string()),
        Some("b") => CellValue::Bool(raw.trim() == "1"),
        _ if raw.is_empty() => CellValue::Empty,
        _ => match raw.trim().parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(raw.to_string()),
        },
    };
    Ok(value)
}

type SheetCells = BTreeMap<usize, BTreeMap<usize, CellValue>>;

fn parse_sheet(xml: &str, shared: &[String]) -> Result<SheetCells> {
    let mut cells = SheetCells::new();
    let mut reader = Reader::from_str(xml);

    let mut row: Option<usize> = None;
    let mut next_column = 0usize;
    let mut cell: Option<(usize, Option<String>)> = None;
    let mut buffer = String::new();
    let mut in_text = false;
    let mut in_phonetic = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"row" => {
                let index = match attribute(e, b"r")?.and_then(|r| r.trim().parse::<usize>().ok()) {
                    Some(r) if r > 0 && r <= MAX_ROWS => r - 1,
                    _ => row.map_or(0, |r| r + 1),
                };
                row = Some(index);
                next_column = 0;
            }
            Event::Start(ref e) if e.local_name().as_ref() == b"c" => {
                let column = attribute(e, b"r")?
                    .and_then(|r| parse_reference(&r))
                    .map_or(next_column, |(_, c)| c);
                next_column = column + 1;
                cell = Some((column, attribute(e, b"t")?));
                buffer.clear();
            }
            Event::Empty(ref e) if e.local_name().as_ref() == b"c" => {
                let column = attribute(e, b"r")?
                    .and_then(|r| parse_reference(&r))
                    .map_or(next_column, |(_, c)| c);
                next_column = column + 1;
            }
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"v" | b"t" => in_text = true,
                b"rPh" => in_phonetic = true,
                _ => {}
            },
            Event::Text(ref e) if in_text && !in_phonetic && cell.is_some() => {
                buffer.push_str(&e.unescape()?)
            }
            Event::CData(ref e) if in_text && !in_phonetic && cell.is_some() => {
                buffer.push_str(&String::from_utf8_lossy(e))
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"v" | b"t" => in_text = false,
                b"rPh" => in_phonetic = false,
                b"c" => {
                    if let (Some(r), Some((column, kind))) = (row, cell.take()) {
                        let value = cell_value(kind.as_deref(), &buffer, shared)?;
                        if !value.is_empty() {
                            cells.entry(r).or_default().insert(column, value);
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(cells)
}

/// First populated row becomes the header; gaps after it stay as empty rows.
fn build_table(mut cells: SheetCells) -> Result<RawTable> {
    let Some((&header_row, _)) = cells.iter().next() else {
        return Err(KidaseError::TableError("Worksheet is empty".to_string()));
    };
    let header_cells = cells.remove(&header_row).unwrap_or_default();
    let width = header_cells.keys().next_back().map_or(0, |&c| c + 1);

    let mut headers = vec![String::new(); width];
    for (column, value) in header_cells {
        headers[column] = value.to_text();
    }

    let last_row = cells.keys().next_back().copied().unwrap_or(header_row);
    let rows = (header_row + 1..=last_row)
        .map(|r| {
            let mut values = vec![CellValue::Empty; width];
            if let Some(row_cells) = cells.remove(&r) {
                for (column, value) in row_cells {
                    if column < width {
                        values[column] = value;
                    }
                }
            }
            values
        })
        .collect();

    Ok(RawTable::new(headers, rows))
}
