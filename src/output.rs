use crate::aggregate::ColumnSummary;
use crate::types::{ColumnKind, Delimiter, TabsumErrorType};
use serde::Serialize;

/// Success response JSON structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuccessResponse {
    pub field_separator: String,
    pub header_names: Vec<String>,
    pub column_kinds: Vec<ColumnKind>,
    pub row_count: usize,
    #[serde(flatten)]
    pub summary: Option<ColumnSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Vec<Option<String>>>>,
}

impl SuccessResponse {
    pub fn new(delimiter: Delimiter) -> Self {
        SuccessResponse {
            field_separator: delimiter.hex(),
            header_names: Vec::new(),
            column_kinds: Vec::new(),
            row_count: 0,
            summary: None,
            data: None,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Error response JSON structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: TabsumErrorType,
    pub error_msg_user: String,
    pub error_msg_internal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ErrorResponse {
    pub fn new(error_type: TabsumErrorType) -> Self {
        ErrorResponse {
            error: error_type,
            error_msg_user: error_type.message().to_string(),
            error_msg_internal: String::new(),
            source: None,
        }
    }

    /// Set internal error message
    pub fn with_internal_message(mut self, msg: String) -> Self {
        self.error_msg_internal = msg;
        self
    }

    /// Name the source the text was read from
    pub fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
