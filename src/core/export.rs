use crate::domain::model::{GutiNumber, PredictionResult};
use crate::utils::error::{Result, TeerError};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const CSV_FILE: &str = "predictions.csv";
pub const TSV_FILE: &str = "predictions.tsv";
pub const JSON_FILE: &str = "predictions.json";
pub const GUTI_FILE: &str = "guti.json";

const COLUMNS: [&str; 6] = [
    "date",
    "first_round",
    "second_round",
    "prediction",
    "verdict",
    "mark",
];

pub fn to_csv(predictions: &[PredictionResult]) -> Result<String> {
    write_delimited(predictions, b',')
}

pub fn to_tsv(predictions: &[PredictionResult]) -> Result<String> {
    write_delimited(predictions, b'\t')
}

fn write_delimited(predictions: &[PredictionResult], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for p in predictions {
        writer.write_record([
            p.date.as_str(),
            p.first_round.as_str(),
            p.second_round.as_str(),
            p.prediction.as_str(),
            p.verdict.label(),
            p.verdict.glyph(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TeerError::ProcessingError {
            message: format!("Failed to flush delimited output: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| TeerError::ProcessingError {
        message: format!("Delimited output is not UTF-8: {}", e),
    })
}

/// Contents of the export archive.
pub struct ExportBundle<'a> {
    pub formats: &'a [String],
    pub csv_output: &'a str,
    pub tsv_output: &'a str,
    pub predictions: &'a [PredictionResult],
    pub guti: Option<&'a GutiNumber>,
}

impl ExportBundle<'_> {
    fn wants(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }

    pub fn file_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.wants("csv") {
            names.push(CSV_FILE);
        }
        if self.wants("tsv") {
            names.push(TSV_FILE);
        }
        if self.wants("json") {
            names.push(JSON_FILE);
            if self.guti.is_some() {
                names.push(GUTI_FILE);
            }
        }
        names
    }

    pub fn to_zip(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for name in self.file_names() {
            let content = match name {
                CSV_FILE => self.csv_output.to_string(),
                TSV_FILE => self.tsv_output.to_string(),
                JSON_FILE => serde_json::to_string_pretty(self.predictions)?,
                _ => serde_json::to_string_pretty(&self.guti)?,
            };
            zip.start_file::<_, ()>(name, FileOptions::default())?;
            zip.write_all(content.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
