pub mod aggregate;
pub mod config;
pub mod detection;
pub mod error;
pub mod number;
pub mod output;
pub mod parser;
pub mod render;
pub mod source;
pub mod summarizer;
pub mod types;

pub use aggregate::{sum, sum_last_column, summarize_column, ColumnSummary};
pub use config::Config;
pub use error::{Result, TabsumError};
pub use number::parse_number;
pub use parser::{parse, parse_with};
pub use render::to_delimited_text;
pub use summarizer::TableSummarizer;
pub use types::{ColumnKind, Delimiter, NumericValue, ParseResult, Record, TabsumErrorType};
