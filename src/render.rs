use crate::types::constants::QUOTE;
use crate::types::{Delimiter, ParseResult};

/// Write a parsed table back out as delimited text.
///
/// Parsing the output gives back the same table. Fields containing the
/// delimiter are quoted, trailing absent cells are left off so they stay
/// absent, and a line that would come out empty is written as `""` so it is
/// not skipped.
pub fn to_delimited_text(result: &ParseResult, delimiter: Delimiter) -> String {
    if result.headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(result.rows.len() + 1);
    lines.push(render_line(
        result.headers.iter().map(|h| Some(h.as_str())),
        delimiter,
    ));
    for row in &result.rows {
        lines.push(render_line(row.values(&result.headers), delimiter));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn render_line<'a, I>(values: I, delimiter: Delimiter) -> String
where
    I: Iterator<Item = Option<&'a str>>,
{
    let mut cells: Vec<Option<&str>> = values.collect();
    while let Some(None) = cells.last() {
        cells.pop();
    }

    let line = cells
        .iter()
        .map(|cell| render_field(cell.unwrap_or(""), delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.as_char().to_string());

    if line.is_empty() {
        format!("{QUOTE}{QUOTE}")
    } else {
        line
    }
}

fn render_field(value: &str, delimiter: Delimiter) -> String {
    if value.contains(delimiter.as_char()) {
        format!("{QUOTE}{value}{QUOTE}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, parse_with};

    fn round_trip(text: &str) {
        let first = parse(text);
        let rendered = to_delimited_text(&first, first.delimiter);
        let second = parse_with(&rendered, Some(first.delimiter));
        assert_eq!(first, second, "rendered text was {:?}", rendered);
    }

    #[test]
    fn test_render_simple() {
        let table = parse("a,b\n1,2");
        assert_eq!(to_delimited_text(&table, Delimiter::Comma), "a,b\n1,2\n");
        assert_eq!(to_delimited_text(&table, Delimiter::Tab), "a\tb\n1\t2\n");
    }

    #[test]
    fn test_render_quotes_delimiter() {
        let table = parse("name,\"Smith, John\"\nx,\"Doe, Jane\"");
        assert_eq!(
            to_delimited_text(&table, Delimiter::Comma),
            "name,\"Smith, John\"\nx,\"Doe, Jane\"\n"
        );
    }

    #[test]
    fn test_render_omits_absent_cells() {
        let table = parse("a,b,c\n1,2\n,,");
        assert_eq!(to_delimited_text(&table, Delimiter::Comma), "a,b,c\n1,2\n,,\n");
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(to_delimited_text(&parse(""), Delimiter::Comma), "");
    }

    #[test]
    fn test_round_trip() {
        round_trip("a,b,c\n1,2,3\n4,5");
        round_trip(" a , b \n 1 ,2 ,3");
        round_trip("name,\"Smith, John\",age\nrow,\"Doe, Jane\",30");
        round_trip("a\tb\n1,5\t2\n \n");
        round_trip("\u{FEFF}q,r\r\n\r\nx\\\"y,z\r\n");
        round_trip("a,b\n\"\"\n");
    }
}
