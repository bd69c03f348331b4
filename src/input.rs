//! This module implements the data loader for delimited text files of categorical values.
//!
//! The first line holds the column names: the feature names followed by the label name. Every
//! following non-empty line is a training row with one field per column.
//!
//! # Example
//! ```rust
//! use id3tree::input::{self, InputFormat};
//! let fmt = InputFormat::csv_format();
//! let (headers, dv) = input::load("dataset/weather/train.csv", fmt).unwrap();
//! assert_eq!(headers.last().unwrap(), "play");
//! assert_eq!(dv.len(), 14);
//! ```

use crate::decision_tree::{duplicate_name, DataVec, Row};
use crate::errors::{Id3Error, Result};

use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use log::debug;
use regex::Regex;

/// Delimiters recognised by [infer](fn.infer.html), in order of preference.
const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// The input file format struct.
#[derive(Copy, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFormat {
    /// Delimiter of the data file. Must be an ASCII character. (default = ',')
    pub delimiter: char,

    /// Whether the first line holds the column names. Without a header the columns are named
    /// `feature_0`, `feature_1`, ... and `label`. (default = true)
    pub has_header: bool,

    /// Whether leading and trailing whitespace is removed from every field. (default = true)
    pub trim: bool,
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::csv_format()
    }
}

impl InputFormat {
    /// Return a default CSV input format.
    /// # Example
    /// ```rust
    /// use id3tree::input::InputFormat;
    /// let fmt = InputFormat::csv_format();
    /// println!("{}", fmt.to_string());
    /// ```
    pub fn csv_format() -> InputFormat {
        InputFormat {
            delimiter: ',',
            has_header: true,
            trim: true,
        }
    }

    /// Transform the input format to human readable string.
    pub fn to_string(&self) -> String {
        let mut s = String::from("");
        s.push_str(&format!("Has header: {}\n", self.has_header));
        s.push_str(&format!("Trim fields: {}\n", self.trim));
        s.push_str(&format!("Delimiter: [{}]", self.delimiter));
        s
    }

    /// Set the delimiter.
    /// # Example
    /// ```rust
    /// use id3tree::input::InputFormat;
    /// let mut fmt = InputFormat::csv_format();
    /// fmt.set_delimiter(';');
    /// ```
    pub fn set_delimiter(&mut self, delim: char) {
        self.delimiter = delim;
    }

    pub fn set_header(&mut self, has_header: bool) {
        self.has_header = has_header;
    }

    pub fn set_trim(&mut self, trim: bool) {
        self.trim = trim;
    }
}

/// Guess the input format from the first line of `reader`: the most frequent of `,` `;` `\t` `|`
/// becomes the delimiter. Comma is kept when none of them occurs or on a tie.
pub fn infer_reader<R: BufRead>(mut reader: R) -> Result<InputFormat> {
    let mut first_line = String::new();
    if reader.read_line(&mut first_line)? == 0 {
        return Err(Id3Error::EmptyInput);
    }

    let reg = Regex::new(r"[,;\t|]").map_err(|e| Id3Error::InvalidData(e.to_string()))?;
    let mut counts = [0usize; 4];
    for m in reg.find_iter(&first_line) {
        if let Some(i) = DELIMITER_CANDIDATES
            .iter()
            .position(|c| m.as_str().starts_with(*c))
        {
            counts[i] += 1;
        }
    }

    let mut input_format = InputFormat::csv_format();
    let mut max_cnt = 0;
    for (i, cnt) in counts.iter().enumerate() {
        if *cnt > max_cnt {
            max_cnt = *cnt;
            input_format.delimiter = DELIMITER_CANDIDATES[i];
        }
    }
    debug!("inferred delimiter [{}]", input_format.delimiter);
    Ok(input_format)
}

/// Guess the input format of a file. See [infer_reader](fn.infer_reader.html).
///
/// # Example
/// ```rust
/// use id3tree::input::infer;
/// let fmt = infer("dataset/weather/train.csv").unwrap();
/// assert_eq!(fmt.delimiter, ',');
/// ```
pub fn infer(file_name: &str) -> Result<InputFormat> {
    let file = File::open(file_name)?;
    infer_reader(BufReader::new(file))
}

/// Read the header set and the training rows from `reader`.
///
/// # Error
/// Returns `Id3Error::EmptyInput` if there is no line at all, `Id3Error::InconsistentRow` if a
/// row's field count differs from the header's, and `Id3Error::InvalidData` if the header has
/// fewer than two columns or the delimiter is not ASCII.
///
/// # Example
/// ```rust
/// use id3tree::input::{load_csv, InputFormat};
/// let data = "weather,temp,play\nsunny,hot,no\nrainy,cool,yes\n";
/// let (headers, dv) = load_csv(data.as_bytes(), InputFormat::csv_format()).unwrap();
/// assert_eq!(headers, vec!["weather", "temp", "play"]);
/// assert_eq!(dv[1], vec!["rainy", "cool", "yes"]);
/// ```
pub fn load_csv<R: Read>(reader: R, input_format: InputFormat) -> Result<(Vec<String>, DataVec)> {
    if !input_format.delimiter.is_ascii() {
        return Err(Id3Error::InvalidData(format!(
            "delimiter [{}] is not an ASCII character",
            input_format.delimiter
        )));
    }
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(input_format.delimiter as u8)
        .trim(if input_format.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut dv: DataVec = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let fields: Row = record.iter().map(String::from).collect();

        let expected = match headers.as_ref().map(Vec::len) {
            Some(n) => n,
            None => {
                let names = if input_format.has_header {
                    fields.clone()
                } else {
                    default_headers(fields.len())
                };
                if names.len() < 2 {
                    return Err(Id3Error::InvalidData(format!(
                        "line {} names {} column(s), need at least one feature and a label",
                        line,
                        names.len()
                    )));
                }
                if let Some(name) = duplicate_name(&names) {
                    return Err(Id3Error::InvalidData(format!(
                        "line {} names column {} twice",
                        line, name
                    )));
                }
                headers = Some(names);
                if input_format.has_header {
                    continue;
                }
                fields.len()
            }
        };

        if fields.len() != expected {
            return Err(Id3Error::InconsistentRow {
                line,
                expected,
                found: fields.len(),
            });
        }
        dv.push(fields);
    }

    let headers = headers.ok_or(Id3Error::EmptyInput)?;
    debug!("loaded {} rows with {} columns", dv.len(), headers.len());
    Ok((headers, dv))
}

/// Column names for a file without a header line.
fn default_headers(columns: usize) -> Vec<String> {
    let mut names: Vec<String> = (0..columns.saturating_sub(1))
        .map(|i| format!("feature_{}", i))
        .collect();
    names.push(String::from("label"));
    names
}

/// Load a file with certain input format.
///
/// # Error
/// Raise error if file cannot be open or read correctly.
pub fn load(file_name: &str, input_format: InputFormat) -> Result<(Vec<String>, DataVec)> {
    let file = File::open(file_name)?;
    load_csv(file, input_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputformat_csv_format() {
        let fmt = InputFormat::csv_format();
        assert_eq!(fmt.delimiter, ',');
        assert_eq!(fmt.has_header, true);
        assert_eq!(fmt.trim, true);
        assert_eq!(
            fmt.to_string(),
            "Has header: true\nTrim fields: true\nDelimiter: [,]"
        );
    }

    #[test]
    fn inputformat_setters() {
        let mut fmt = InputFormat::csv_format();
        fmt.set_delimiter(';');
        fmt.set_header(false);
        fmt.set_trim(false);
        assert_eq!(
            fmt,
            InputFormat {
                delimiter: ';',
                has_header: false,
                trim: false
            }
        );
    }

    #[test]
    fn load_splits_header_and_rows() {
        let data = "a , b,label\nx, y ,1\n\nz,w,0\n";
        let (headers, dv) = load_csv(data.as_bytes(), InputFormat::csv_format()).unwrap();
        assert_eq!(headers, vec!["a", "b", "label"]);
        assert_eq!(dv, vec![vec!["x", "y", "1"], vec!["z", "w", "0"]]);
    }

    #[test]
    fn load_without_trim_keeps_spaces() {
        let mut fmt = InputFormat::csv_format();
        fmt.set_trim(false);
        let (_, dv) = load_csv("a,label\n x,1\n".as_bytes(), fmt).unwrap();
        assert_eq!(dv[0][0], " x");
    }

    #[test]
    fn load_reports_inconsistent_row() {
        let data = "a,b,label\nx,y,1\nz,0\n";
        match load_csv(data.as_bytes(), InputFormat::csv_format()) {
            Err(Id3Error::InconsistentRow {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn load_empty_input() {
        match load_csv("".as_bytes(), InputFormat::csv_format()) {
            Err(Id3Error::EmptyInput) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn load_rejects_single_column() {
        assert!(load_csv("label\nyes\n".as_bytes(), InputFormat::csv_format()).is_err());
    }

    #[test]
    fn load_rejects_duplicate_header() {
        match load_csv("a,a,label\nx,p,1\n".as_bytes(), InputFormat::csv_format()) {
            Err(Id3Error::InvalidData(msg)) => assert_eq!(msg, "line 1 names column a twice"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn load_rejects_non_ascii_delimiter() {
        let mut fmt = InputFormat::csv_format();
        fmt.set_delimiter('§');
        assert!(load_csv("a§b\n".as_bytes(), fmt).is_err());
    }

    #[test]
    fn load_without_header() {
        let mut fmt = InputFormat::csv_format();
        fmt.set_header(false);
        let (headers, dv) = load_csv("x,y,1\nz,w,0\n".as_bytes(), fmt).unwrap();
        assert_eq!(headers, vec!["feature_0", "feature_1", "label"]);
        assert_eq!(dv.len(), 2);
    }

    #[test]
    fn infer_delimiter() {
        let fmt = infer_reader("a;b;label\nx;y;1\n".as_bytes()).unwrap();
        assert_eq!(fmt.delimiter, ';');
        let fmt = infer_reader("a\tb,c\tlabel\n".as_bytes()).unwrap();
        assert_eq!(fmt.delimiter, '\t');
        let fmt = infer_reader("a b label\n".as_bytes()).unwrap();
        assert_eq!(fmt.delimiter, ',');
        assert!(infer_reader("".as_bytes()).is_err());
    }

    #[test]
    fn load_weather_file() {
        let fmt = infer("dataset/weather/train.csv").unwrap();
        let (headers, dv) = load("dataset/weather/train.csv", fmt).unwrap();
        assert_eq!(
            headers,
            vec!["outlook", "temperature", "humidity", "wind", "play"]
        );
        assert_eq!(dv.len(), 14);
        assert!(dv.iter().all(|row| row.len() == headers.len()));
    }

    #[test]
    fn load_missing_file() {
        assert!(load("dataset/missing.csv", InputFormat::csv_format()).is_err());
    }
}
