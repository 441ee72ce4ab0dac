use std::io::{self, BufRead};
use std::path::Path;

use crate::input::tokenize::tokenize_with;
use crate::input::{InputError, ReadOptions, SourceFormat, open_reader};

/// Forward-only source of field sequences, one per record.
pub struct RecordReader {
    inner: Inner,
}

enum Inner {
    Delimited(csv::StringRecordsIntoIter<Box<dyn BufRead>>),
    Freeform {
        lines: io::Lines<Box<dyn BufRead>>,
        delimiter: char,
    },
}

impl RecordReader {
    pub fn open(path: &Path, opts: ReadOptions) -> Result<Self, InputError> {
        let reader = open_reader(path)?;
        Ok(Self::from_reader(reader, SourceFormat::detect(path), opts))
    }

    pub fn from_reader(reader: Box<dyn BufRead>, format: SourceFormat, opts: ReadOptions) -> Self {
        let inner = match format {
            SourceFormat::Delimited => {
                let csv_reader = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .delimiter(opts.delimiter)
                    .from_reader(reader);
                Inner::Delimited(csv_reader.into_records())
            }
            SourceFormat::Freeform => Inner::Freeform {
                lines: reader.lines(),
                delimiter: opts.delimiter_char(),
            },
        };
        Self { inner }
    }

    pub fn from_text(text: &str, format: SourceFormat, opts: ReadOptions) -> Self {
        let cursor = io::Cursor::new(text.as_bytes().to_vec());
        Self::from_reader(Box::new(cursor), format, opts)
    }
}

impl Iterator for RecordReader {
    type Item = Result<Vec<String>, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item: Result<Vec<String>, InputError> = match &mut self.inner {
            Inner::Delimited(records) => records
                .next()?
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(InputError::from),
            Inner::Freeform { lines, delimiter } => loop {
                match lines.next()? {
                    Ok(line) if line.is_empty() => continue,
                    Ok(line) => break Ok(tokenize_with(&line, *delimiter)),
                    Err(e) => break Err(InputError::from(e)),
                }
            },
        };
        Some(item)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/records.rs"]
mod tests;
