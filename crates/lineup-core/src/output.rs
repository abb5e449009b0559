//! Table writer - serializes the lineup table as CSV, TSV or an Excel workbook

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};
use tracing::info;

use crate::{ChannelTable, Error, Result, TerritoryCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Xlsx,
}

impl OutputFormat {
    /// Pick the format from the output file extension (case-insensitive).
    ///
    /// # Errors
    /// `UnsupportedOutputFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("tsv") => Ok(OutputFormat::Tsv),
            Some("xlsx") => Ok(OutputFormat::Xlsx),
            _ => Err(Error::UnsupportedOutputFormat(path.to_path_buf())),
        }
    }

    /// Field separator for the delimited formats; `None` for the workbook.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
            OutputFormat::Xlsx => None,
        }
    }
}

/// Write header and sorted rows to any writer.
pub fn write_rows<W: Write>(writer: W, table: &ChannelTable, format: OutputFormat) -> Result<()> {
    match format.delimiter() {
        Some(delimiter) => write_delimited(writer, table, delimiter),
        None => write_workbook(writer, table),
    }
}

fn write_delimited<W: Write>(writer: W, table: &ChannelTable, delimiter: u8) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    out.write_record(ChannelTable::headers())?;
    for row in table.rows() {
        out.write_record(row.cells())?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Single worksheet: header row, then the index and flags as numbers and
/// the channel name as text.
fn write_workbook<W: Write>(mut writer: W, table: &ChannelTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in ChannelTable::headers().iter().enumerate() {
        let col = ColNum::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)?;
        sheet.write_string(0, col, header)?;
    }
    for (i, row) in table.rows().iter().enumerate() {
        let r = RowNum::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        // exact up to 2^53, far beyond any channel number
        sheet.write_number(r, 0, row.index as f64)?;
        sheet.write_string(r, 1, &row.name)?;
        for (col, territory) in (2..).zip(TerritoryCode::ALL) {
            sheet.write_number(r, col, row.flag(territory))?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    writer.write_all(&bytes).map_err(XlsxError::from)?;
    writer.flush().map_err(XlsxError::from)?;
    Ok(())
}

/// Create (or truncate) `path` and write the table to it.
pub fn write_table(table: &ChannelTable, path: &Path, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_rows(file, table, format)?;
    info!(path = %path.display(), rows = table.len(), ?format, "table written");
    Ok(())
}
