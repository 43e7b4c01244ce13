use crate::aggregate::summarize_column;
use crate::config::Config;
use crate::detection::detect_column_kind;
use crate::error::{Result, TabsumError};
use crate::output::{ErrorResponse, SuccessResponse};
use crate::parser::parse_with;
use crate::source::TextSource;
use crate::types::{ParseResult, TabsumErrorType};
use tracing::{debug, info, warn};

/// Loads table text, parses it and sums a column.
///
/// The parsed table is handed back to the caller; nothing is cached here
/// between loads.
pub struct TableSummarizer {
    config: Config,
}

impl TableSummarizer {
    pub fn new(config: Config) -> Self {
        TableSummarizer { config }
    }

    /// Run the whole pipeline and return JSON
    pub fn run(&self, source: &mut dyn TextSource) -> String {
        let result = self
            .load(source)
            .and_then(|table| self.summarize(&table));

        match result {
            Ok(response) => response.to_json(),
            Err(e) => {
                warn!("Failed to summarize {}: {}", source.describe(), e);
                ErrorResponse::new(e.error_type())
                    .with_internal_message(e.to_string())
                    .with_source(source.describe())
                    .to_json()
            }
        }
    }

    /// Obtain text from the source and parse it
    pub fn load(&self, source: &mut dyn TextSource) -> Result<ParseResult> {
        debug!("Loading {}", source.describe());
        let text = source.read_text()?;
        let table = parse_with(&text, self.config.delimiter);
        info!(
            "Loaded {} rows x {} columns from {}",
            table.rows.len(),
            table.headers.len(),
            source.describe()
        );
        Ok(table)
    }

    /// Build the response for an already parsed table
    pub fn summarize(&self, table: &ParseResult) -> Result<SuccessResponse> {
        let column = match &self.config.column {
            Some(name) if table.has_column(name) => name.as_str(),
            Some(name) => return Err(TabsumError::Column(name.clone())),
            None => table
                .last_column()
                .ok_or(TabsumError::Table(TabsumErrorType::Empty))?,
        };

        let summary = summarize_column(&table.rows, column);
        if summary.skipped_count > 0 {
            debug!(
                "{} cells in column \"{}\" counted as zero",
                summary.skipped_count, column
            );
        }

        let mut response = SuccessResponse::new(table.delimiter);
        response.header_names = table.headers.clone();
        response.column_kinds = table
            .headers
            .iter()
            .map(|h| detect_column_kind(table.column(h)))
            .collect();
        response.row_count = table.rows.len();
        response.summary = Some(summary);

        let preview: Vec<Vec<Option<String>>> = table
            .rows
            .iter()
            .take(self.config.preview_rows)
            .map(|row| row.values(&table.headers).map(|v| v.map(str::to_string)).collect())
            .collect();
        response.data = if preview.is_empty() {
            None
        } else {
            Some(preview)
        };

        Ok(response)
    }
}
