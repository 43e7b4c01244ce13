use serde::{Serialize, Serializer};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Field delimiter. Chosen once per parse and applied to every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    Comma,
    #[default]
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            _ => None,
        }
    }

    /// Hex code of the delimiter byte, as written in JSON output
    pub fn hex(self) -> String {
        format!("{:02X}", self.as_char() as u8)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," | "csv" => Ok(Delimiter::Comma),
            "tab" | "\\t" | "\t" | "tsv" => Ok(Delimiter::Tab),
            other => Err(format!(
                "unknown delimiter \"{}\" (expected comma or tab)",
                other
            )),
        }
    }
}

/// One parsed data row, keyed by header name.
///
/// Cells missing from a short line are `None`, which is distinct from an
/// empty-string cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    cells: HashMap<String, Option<String>>,
}

impl Record {
    /// Build a record from header names and the fields of one line.
    /// Extra fields are dropped; missing ones map to `None`.
    pub fn from_fields(headers: &[String], fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let cells = headers
            .iter()
            .map(|h| (h.clone(), fields.next()))
            .collect();
        Record { cells }
    }

    /// `None` if the header is unknown or the cell is absent.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).and_then(|v| v.as_deref())
    }

    pub fn is_absent(&self, header: &str) -> bool {
        matches!(self.cells.get(header), Some(None))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in header order
    pub fn values<'a>(&'a self, headers: &'a [String]) -> impl Iterator<Item = Option<&'a str>> {
        headers.iter().map(move |h| self.get(h))
    }
}

/// Headers plus ordered records. Built fresh on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseResult {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
    pub delimiter: Delimiter,
}

impl ParseResult {
    pub fn last_column(&self) -> Option<&str> {
        self.headers.last().map(|h| h.as_str())
    }

    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a str>> {
        self.rows.iter().map(move |r| r.get(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

/// Result of numeric normalization
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericValue {
    Number(f64),
    #[default]
    NotANumber,
}

impl NumericValue {
    pub fn is_nan(&self) -> bool {
        matches!(self, NumericValue::NotANumber)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(n) => Some(*n),
            NumericValue::NotANumber => None,
        }
    }

    /// Value an aggregate adds for this cell
    pub fn or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }
}

impl From<Option<f64>> for NumericValue {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(n) if n.is_finite() => NumericValue::Number(n),
            _ => NumericValue::NotANumber,
        }
    }
}

/// Column classification: every non-empty cell is numeric, or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    Number,
    #[default]
    Text,
}

impl Serialize for ColumnKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            ColumnKind::Number => "number",
            ColumnKind::Text => "string",
        })
    }
}

/// Error codes written to JSON error output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum TabsumErrorType {
    Process = 0,       // Unhandled failure
    Source = 1,        // Could not obtain the raw text
    Empty = 2,         // No header line in the text
    Binary = 3,        // Input is binary
    ColumnMissing = 4, // Requested column not in headers
    Config = 5,        // Bad configuration value
}

impl fmt::Display for TabsumErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl TabsumErrorType {
    pub fn message(&self) -> &'static str {
        match self {
            TabsumErrorType::Process => "Unhandled exception",
            TabsumErrorType::Source => "Could not load the table data",
            TabsumErrorType::Empty => "No table data found. Is the input empty?",
            TabsumErrorType::Binary => "Input is a binary file",
            TabsumErrorType::ColumnMissing => "Column not found in table header",
            TabsumErrorType::Config => "Configuration error",
        }
    }
}

/// Constants
pub mod constants {
    /// Byte-order mark stripped from the start of the text
    pub const BOM: char = '\u{FEFF}';
    pub const QUOTE: char = '"';
    pub const ESCAPE: char = '\\';

    pub const DEFAULT_PREVIEW_ROWS: usize = 10;
    pub const BUFF_SIZE: usize = 10240; // 10KB
    pub const CHARSET_GUESS_SIZE: usize = 5120; // 5KB threshold for quick charset guess
    pub const BINARY_PERCENT: usize = 20;

    pub const CONFIG_SECTION: &str = "TABSUM";
    pub const ENV_DELIMITER: &str = "TABSUM_DELIMITER";
    pub const ENV_COLUMN: &str = "TABSUM_COLUMN";
    pub const ENV_PREVIEW_ROWS: &str = "TABSUM_PREVIEW_ROWS";
}
