pub mod headers;
pub mod records;
pub mod tokenize;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

pub use records::RecordReader;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid delimiter {0:?}: must be an ASCII character other than a quote or line break")]
    InvalidDelimiter(char),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Options shared by every record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl ReadOptions {
    pub fn with_delimiter(delimiter: char) -> Result<Self, InputError> {
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\'' | '\n' | '\r') {
            return Err(InputError::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }

    pub fn delimiter_char(&self) -> char {
        self.delimiter as char
    }
}

/// How the fields of a source are recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Proper delimited file, read with the csv reader.
    Delimited,
    /// Plain text, each line passed through the quote-aware tokenizer.
    Freeform,
}

impl SourceFormat {
    pub fn detect(path: &Path) -> Self {
        let mut ext = path.extension().and_then(|s| s.to_str());
        if ext == Some("gz") {
            ext = path
                .file_stem()
                .map(Path::new)
                .and_then(|p| p.extension())
                .and_then(|s| s.to_str());
        }
        match ext {
            Some(e) if e.eq_ignore_ascii_case("csv") => SourceFormat::Delimited,
            _ => SourceFormat::Freeform,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Delimited => write!(f, "delimited"),
            SourceFormat::Freeform => write!(f, "freeform"),
        }
    }
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
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

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
