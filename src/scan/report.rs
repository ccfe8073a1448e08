//! Match table output.
//!
//! All matches are held in memory and written in one pass; nothing is
//! emitted incrementally. The output file is overwritten on every run.

use std::path::Path;

use crate::error::{DecondaError, Result};

use super::Match;

/// Write all matches to a CSV file with a header row.
pub fn write_matches(path: &Path, matches: &[Match]) -> Result<()> {
    let to_csv_err = |e: csv::Error| DecondaError::CsvWriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_csv_err)?;
    writer
        .write_record(["file_path", "line_number", "word"])
        .map_err(to_csv_err)?;
    for m in matches {
        writer
            .write_record([
                m.file_path.display().to_string(),
                m.line_number.to_string(),
                m.word.to_string(),
            ])
            .map_err(to_csv_err)?;
    }
    writer.flush().map_err(|e| DecondaError::CsvWriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}
