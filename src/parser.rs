use crate::detection::detect_delimiter;
use crate::types::constants::{BOM, ESCAPE, QUOTE};
use crate::types::{Delimiter, ParseResult, Record};

/// Strip a leading BOM and turn CRLF and lone CR into LF.
pub fn normalize_text(text: &str) -> String {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse text, detecting the delimiter from the first line.
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, None)
}

/// Parse text into headers and records.
///
/// Never fails: irregular input always produces some table. Empty lines are
/// skipped, the first remaining line is the header, and every following
/// line becomes one record.
pub fn parse_with(text: &str, delimiter: Option<Delimiter>) -> ParseResult {
    let text = normalize_text(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(lines[0]));

    let mut non_empty = lines.iter().filter(|line| !line.is_empty());

    let headers = match non_empty.next() {
        Some(line) => parse_line(line, delimiter),
        None => {
            return ParseResult {
                headers: Vec::new(),
                rows: Vec::new(),
                delimiter,
            }
        }
    };

    let rows: Vec<Record> = non_empty
        .map(|line| Record::from_fields(&headers, parse_line(line, delimiter)))
        .collect();

    tracing::debug!(
        "Parsed {} columns, {} rows with delimiter {}",
        headers.len(),
        rows.len(),
        delimiter
    );

    ParseResult {
        headers,
        rows,
        delimiter,
    }
}

/// Split one line into trimmed fields.
///
/// A `"` toggles quoting unless the raw character before it is `\`, in which
/// case the quote is kept as a literal (the backslash stays too). Doubled
/// quotes are not an escape. An unclosed quote runs to the end of the line.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut inside_quotes = false;
    let mut prev: Option<char> = None;

    for c in line.chars() {
        if c == QUOTE && prev != Some(ESCAPE) {
            inside_quotes = !inside_quotes;
        } else if c == delim && !inside_quotes {
            fields.push(trim_field(&current_field));
            current_field.clear();
        } else {
            current_field.push(c);
        }
        prev = Some(c);
    }

    // Don't forget the last field
    fields.push(trim_field(&current_field));

    fields
}

/// Trim whitespace and stray BOMs from both ends of a field
fn trim_field(field: &str) -> String {
    field
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_string()
}
