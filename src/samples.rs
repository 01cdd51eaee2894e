//! Built-in sample data for demos and smoke tests.

use log::info;
use rust_xlsxwriter::Workbook;
use std::path::Path;

use crate::batch::Table;
use crate::error::Result;

/// Ten example messages spanning every emotion.
pub const TEXT_SAMPLES: &[&str] = &[
    "I feel extremely stressed about my upcoming exams and deadlines. The pressure is overwhelming.",
    "I'm so happy today! Everything is going great and I feel blessed.",
    "I feel worthless and alone. Nothing seems to matter anymore.",
    "Work is getting intense but I'm managing it well with breaks.",
    "I'm excited about my new project! Can't wait to see the results.",
    "Feeling anxious about the presentation tomorrow. Hope it goes well.",
    "Life feels empty and meaningless. I don't see the point anymore.",
    "Had an amazing day with friends! Feeling grateful and loved.",
    "The constant pressure is making me exhausted and burnt out.",
    "Just feeling okay today, nothing special happening.",
];

/// Sample table with a `text` column plus metadata columns.
pub const SAMPLE_CSV: &str = "text,timestamp,user_id
I feel so stressed about work deadlines,2025-10-27 09:00,user001
I'm having an amazing day full of joy!,2025-10-27 09:15,user002
Feeling lonely and depressed today,2025-10-27 09:30,user003
Everything is overwhelming me right now,2025-10-27 09:45,user004
Life is wonderful and I'm so grateful,2025-10-27 10:00,user005
Can't handle the pressure anymore,2025-10-27 10:15,user006
Feeling anxious about everything lately,2025-10-27 10:30,user007
Had a great workout! Feeling energized,2025-10-27 10:45,user008
I feel hopeless and worthless today,2025-10-27 11:00,user009
Pretty good day overall,2025-10-27 11:15,user010";

/// Sample line-delimited text.
pub const SAMPLE_TXT: &str = "I feel extremely stressed about my job
I'm so happy and excited about life
Feeling depressed and alone today
Work pressure is getting too much
Having an amazing day with family
I can't cope with this anxiety anymore
Feeling worthless and hopeless
Life is beautiful and full of joy
Overwhelmed with everything going on
Just a normal day nothing special";

pub const SAMPLE_CSV_FILE: &str = "sample_data.csv";
pub const SAMPLE_TXT_FILE: &str = "sample_data.txt";
pub const SAMPLE_XLSX_FILE: &str = "sample_data.xlsx";

/// Write `sample_data.csv`, `sample_data.xlsx` and `sample_data.txt` into
/// `dir`, creating it if needed. The workbook holds the same rows as the CSV.
pub fn write_sample_files<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let csv_path = dir.join(SAMPLE_CSV_FILE);
    std::fs::write(&csv_path, format!("{}\n", SAMPLE_CSV))?;
    info!("sample CSV file created: {}", csv_path.display());

    let xlsx_path = dir.join(SAMPLE_XLSX_FILE);
    write_workbook(&Table::from_csv_str(SAMPLE_CSV)?, &xlsx_path)?;
    info!("sample Excel file created: {}", xlsx_path.display());

    let txt_path = dir.join(SAMPLE_TXT_FILE);
    std::fs::write(&txt_path, format!("{}\n", SAMPLE_TXT))?;
    info!("sample TXT file created: {}", txt_path.display());

    Ok(())
}

fn write_workbook(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in table.headers().iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }
    for (row, cells) in table.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                sheet.write_string(row as u32 + 1, col as u16, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Table, TextSource};
    use tempfile::TempDir;

    #[test]
    fn test_sample_csv_uses_text_column() {
        let table = Table::from_csv_str(SAMPLE_CSV).unwrap();
        assert_eq!(table.text_column(), Some(0));

        let messages = table.messages().unwrap();
        assert_eq!(messages.len(), 10);
        assert_eq!(messages[9].source.as_deref(), Some("user010"));
    }

    #[test]
    fn test_write_sample_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested");
        write_sample_files(&out).unwrap();

        let csv = TextSource::from_path(out.join(SAMPLE_CSV_FILE)).unwrap();
        assert_eq!(csv.extract().unwrap().len(), 10);

        let xlsx = TextSource::from_path(out.join(SAMPLE_XLSX_FILE)).unwrap();
        let messages = xlsx.messages().unwrap();
        assert_eq!(messages.len(), 10);
        assert_eq!(messages[0].text, "I feel so stressed about work deadlines");
        assert_eq!(messages[9].source.as_deref(), Some("user010"));
        assert_eq!(messages[9].timestamp.as_deref(), Some("2025-10-27 11:15"));

        let txt = TextSource::from_path(out.join(SAMPLE_TXT_FILE)).unwrap();
        assert_eq!(txt.extract().unwrap()[0], "I feel extremely stressed about my job");
    }
}
