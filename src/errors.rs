use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

pub type Result<T> = std::result::Result<T, Id3Error>;

#[derive(Debug)]
pub enum Id3Error {
    /// The input contains no header row.
    EmptyInput,
    /// A data row does not have as many fields as the header. `line` is 1-based.
    InconsistentRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The training input violates a precondition of the tree builder.
    InvalidData(String),
    IO(io::Error),
    Csv(csv::Error),
    SerdeJson(serde_json::Error),
}

impl From<&str> for Id3Error {
    fn from(err: &str) -> Id3Error {
        Id3Error::InvalidData(err.to_string())
    }
}

impl From<io::Error> for Id3Error {
    fn from(err: io::Error) -> Id3Error {
        Id3Error::IO(err)
    }
}

impl From<csv::Error> for Id3Error {
    fn from(err: csv::Error) -> Id3Error {
        Id3Error::Csv(err)
    }
}

impl From<serde_json::Error> for Id3Error {
    fn from(err: serde_json::Error) -> Id3Error {
        Id3Error::SerdeJson(err)
    }
}

impl Display for Id3Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            Id3Error::EmptyInput => write!(f, "Input has no header row"),
            Id3Error::InconsistentRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {} has {} fields, expected {}",
                line, found, expected
            ),
            Id3Error::InvalidData(ref s) => write!(f, "Invalid data: {}", s),
            Id3Error::IO(ref e) => write!(f, "IO error: {}", e),
            Id3Error::Csv(ref e) => write!(f, "CSV error: {}", e),
            Id3Error::SerdeJson(ref e) => write!(f, "SerdeJson error: {}", e),
        }
    }
}

impl Error for Id3Error {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Id3Error::EmptyInput => None,
            Id3Error::InconsistentRow { .. } => None,
            Id3Error::InvalidData(_) => None,
            Id3Error::IO(ref e) => Some(e),
            Id3Error::Csv(ref e) => Some(e),
            Id3Error::SerdeJson(ref e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_inconsistent_row() {
        let err = Id3Error::InconsistentRow {
            line: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Line 4 has 2 fields, expected 3");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_has_source() {
        let err: Id3Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.to_string().starts_with("IO error: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn from_str_is_invalid_data() {
        let err: Id3Error = "no rows".into();
        assert_eq!(err.to_string(), "Invalid data: no rows");
    }
}
