use std::path::{Path, PathBuf};
use std::{fmt, io};

use csv::StringRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing required file: {0}")]
    MissingFile(String),
    #[error("{path}: missing required column: {column}")]
    MissingColumn { path: String, column: String },
    #[error("{path}: invalid row at line {line}: {reason}")]
    DataFormat {
        path: String,
        line: usize,
        reason: String,
    },
    #[error("no usable rows in {0}")]
    EmptyInput(String),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingFile(path_display(path).to_string()));
    }
    let file = std::fs::File::open(path)?;
    if is_gzip(path) {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

/// Opens a headered delimited table; the delimiter follows the file extension.
pub fn open_table(path: &Path) -> Result<csv::Reader<Box<dyn io::BufRead>>, InputError> {
    let reader = open_reader(path)?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(true)
        .from_reader(reader))
}

/// Tab for `.tsv`, `.txt` and `.tab` (a trailing `.gz` is ignored), comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match plain_extension(path).as_deref() {
        Some("tsv") | Some("txt") | Some("tab") => b'\t',
        _ => b',',
    }
}

/// File name with `.gz` and the table extension removed.
pub fn table_stem(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name = name.strip_suffix(".gz").unwrap_or(name);
    let stem = match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    };
    Some(stem.to_string())
}

pub fn is_table_file(path: &Path) -> bool {
    matches!(
        plain_extension(path).as_deref(),
        Some("csv") | Some("tsv") | Some("txt") | Some("tab")
    )
}

pub fn column_index(
    headers: &StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| InputError::MissingColumn {
            path: path_display(path).to_string(),
            column: column.to_string(),
        })
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("gz")
}

fn plain_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name = name.strip_suffix(".gz").unwrap_or(name);
    let pos = name.rfind('.')?;
    Some(name[pos + 1..].to_ascii_lowercase())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
