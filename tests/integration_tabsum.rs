use std::io::Write;
use tabsum::source::{FileSource, TextSource};
use tabsum::{
    parse, parse_number, parse_with, sum, sum_last_column, to_delimited_text, Config, Delimiter,
    TableSummarizer, TabsumErrorType,
};

fn write_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_delimiter_detection() {
    assert_eq!(parse("a,b,c\n1,2,3").delimiter, Delimiter::Comma);
    assert_eq!(parse("a\tb\tc\n1\t2\t3").delimiter, Delimiter::Tab);
    assert_eq!(parse("a,b\tc\n1,2\t3").delimiter, Delimiter::Tab);
}

#[test]
fn test_quoted_field_stays_single() {
    let table = parse("name,\"Smith, John\",age\nrow,\"Doe, Jane\",30");
    assert_eq!(table.headers.len(), 3);
    assert_eq!(table.rows[0].get("Smith, John"), Some("Doe, Jane"));
}

#[test]
fn test_escaped_quote_is_literal() {
    let table = parse("a,b\nx\\\"y,2");
    assert_eq!(table.rows[0].get("a"), Some("x\\\"y"));
    assert_eq!(table.rows[0].get("b"), Some("2"));
}

#[test]
fn test_missing_trailing_cell_is_absent_not_empty() {
    let table = parse("a,b,c\n1,2");
    assert!(table.rows[0].is_absent("c"));
    assert_ne!(table.rows[0].get("c"), Some(""));
}

#[test]
fn test_numeric_normalization_outcomes() {
    assert!(parse_number(Some("$1,234.56")).is_nan());
    assert_eq!(parse_number(Some("42.5")).as_f64(), Some(42.5));
    assert_eq!(parse_number(Some("-3")).as_f64(), Some(-3.0));
    assert!(parse_number(Some("")).is_nan());
    assert!(parse_number(None).is_nan());
}

#[test]
fn test_sum_over_empty_data() {
    assert_eq!(sum(&[], "total"), 0.0);
    assert_eq!(sum_last_column(&parse("total\n")), 0.0);
}

#[test]
fn test_blank_lines_do_not_shift_rows() {
    assert_eq!(parse("a,b\n\n1,2\n\n3,4"), parse("a,b\n1,2\n3,4"));
}

#[test]
fn test_render_then_parse_is_stable() {
    let text = " id ,\"label, long\" ,amount\n1, first ,\"2,5\"\n\n2,second\n";
    let first = parse(text);
    let rendered = to_delimited_text(&first, first.delimiter);
    let second = parse_with(&rendered, Some(first.delimiter));
    assert_eq!(first, second);

    // and once more from the rendered form
    let again = to_delimited_text(&second, second.delimiter);
    assert_eq!(rendered, again);
}

#[test]
fn test_file_source_with_bom_and_crlf() {
    let file = write_fixture(b"\xEF\xBB\xBFitem,price\r\nTea,2.50\r\nCake,\"4,25\"\r\n");
    let mut source = FileSource::new(file.path());

    let text = source.read_text().unwrap();
    assert_eq!(source.charset(), Some("utf8"));

    let table = parse(&text);
    assert_eq!(table.headers, vec!["item", "price"]);
    assert_eq!(sum_last_column(&table), 6.75);
}

#[test]
fn test_file_source_utf16() {
    let text = "name\tamount\nÅsa\t3\nBo\t4\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let file = write_fixture(&bytes);

    let mut source = FileSource::new(file.path());
    let table = parse(&source.read_text().unwrap());
    assert_eq!(table.delimiter, Delimiter::Tab);
    assert_eq!(table.rows[0].get("name"), Some("Åsa"));
    assert_eq!(sum(&table.rows, "amount"), 7.0);
}

#[test]
fn test_summarizer_on_file() {
    let file = write_fixture(b"region;ignored\tqty\tprice\nnorth\t2\t10\nsouth\t1\tn/a\n");
    let summarizer = TableSummarizer::new(Config::new().with_column("qty"));

    let mut source = FileSource::new(file.path());
    let table = summarizer.load(&mut source).unwrap();
    let response = summarizer.summarize(&table).unwrap();

    let summary = response.summary.unwrap();
    assert_eq!(summary.column, "qty");
    assert_eq!(summary.sum, 3.0);
    assert_eq!(response.header_names, vec!["region;ignored", "qty", "price"]);
}

#[test]
fn test_summarizer_missing_file_json() {
    let summarizer = TableSummarizer::new(Config::new());
    let mut source = FileSource::new("/nonexistent/tabsum/data.csv");
    let json = summarizer.run(&mut source);
    assert!(json.contains(&format!("\"Error\":{}", TabsumErrorType::Source as u8)));
}
