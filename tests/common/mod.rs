// Shared fixtures: writes a small liturgy workbook the way spreadsheet apps do,
// with text in xl/sharedStrings.xml and the sheet resolved through workbook rels.

use std::fs;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

pub const DATA_FILE_NAME: &str = "ሥርዓተ_ቅዳሴ.xlsx";

pub fn sample_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["ግእዝ", "ትግርኛ", "english"],
        vec![
            "፠ ካህን፡ ሰላም ለኩልክሙ።",
            "፠ ካህን፦ ሰላም ምስ ኩልኹም ይኹን።",
            "፠ Priest: Peace be with you.",
        ],
        vec![
            "፠ ሕዝብ፡ ምስለ መንፈስከ።",
            "፠ ህዝቢ፦ ምስ መንፈስካ ውን።",
            "፠ People: And with your spirit.",
        ],
        vec!["፠ ዲያቆን፡ ተንሥኡ ለጸሎት።", "", "፠ Deacon: Stand up for prayer."],
    ]
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Write `rows` (header first) as `<dir>/ሥርዓተ_ቅዳሴ.xlsx`.
pub fn write_liturgy_workbook(dir: &Path, rows: &[Vec<&str>]) {
    let mut shared: Vec<String> = Vec::new();
    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, row) in rows.iter().enumerate() {
        sheet.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            shared.push(escape(text));
            sheet.push_str(&format!(
                r#"<c r="{}{}" t="s"><v>{}</v></c>"#,
                column_letter(c),
                r + 1,
                shared.len() - 1
            ));
        }
        sheet.push_str("</row>");
    }
    sheet.push_str("</sheetData></worksheet>");

    let shared_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{n}" uniqueCount="{n}">{items}</sst>"#,
        n = shared.len(),
        items = shared
            .iter()
            .map(|s| format!(r#"<si><t xml:space="preserve">{}</t></si>"#, s))
            .collect::<String>()
    );

    let workbook = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    let workbook_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    let file = fs::File::create(dir.join(DATA_FILE_NAME)).expect("Failed to create workbook");
    let mut zip = ZipWriter::new(file);
    for (name, content) in [
        ("xl/workbook.xml", workbook.to_string()),
        ("xl/_rels/workbook.xml.rels", workbook_rels.to_string()),
        ("xl/sharedStrings.xml", shared_xml),
        ("xl/worksheets/sheet1.xml", sheet),
    ] {
        zip.start_file(name, FileOptions::default())
            .expect("Failed to start workbook part");
        zip.write_all(content.as_bytes())
            .expect("Failed to write workbook part");
    }
    zip.finish().expect("Failed to finish workbook");
}
