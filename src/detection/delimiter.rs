use crate::types::Delimiter;
use memchr::memchr_iter;

/// Detect the field delimiter from the first line of the text.
///
/// Comma wins only when it yields strictly more fields than tab; a tie
/// (including a line with neither) falls back to tab.
pub fn detect_delimiter(first_line: &str) -> Delimiter {
    let commas = count_fields(Delimiter::Comma, first_line);
    let tabs = count_fields(Delimiter::Tab, first_line);

    if commas > tabs {
        Delimiter::Comma
    } else {
        Delimiter::Tab
    }
}

/// Number of fields a plain split on `delimiter` would produce.
/// Quotes are not taken into account.
pub fn count_fields(delimiter: Delimiter, line: &str) -> usize {
    // Both delimiters are ASCII, so a byte search is exact on UTF-8.
    memchr_iter(delimiter.as_char() as u8, line.as_bytes()).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma_delimiter() {
        assert_eq!(detect_delimiter("a,b,c"), Delimiter::Comma);
    }

    #[test]
    fn test_detect_tab_delimiter() {
        assert_eq!(detect_delimiter("a\tb\tc"), Delimiter::Tab);
    }

    #[test]
    fn test_tie_prefers_tab() {
        assert_eq!(detect_delimiter("a,b\tc"), Delimiter::Tab);
        assert_eq!(detect_delimiter("single"), Delimiter::Tab);
        assert_eq!(detect_delimiter(""), Delimiter::Tab);
    }

    #[test]
    fn test_quoted_commas_still_counted() {
        // "x,y,w"\tz: 3 fields by comma, 2 by tab
        assert_eq!(detect_delimiter("\"x,y,w\"\tz"), Delimiter::Comma);
        // "a,b"\tc\td: 3 fields either way, so tab
        assert_eq!(detect_delimiter("\"a,b\"\tc\td"), Delimiter::Tab);
    }

    #[test]
    fn test_count_fields() {
        assert_eq!(count_fields(Delimiter::Comma, "hello,world,test"), 3);
        assert_eq!(count_fields(Delimiter::Tab, "hello,world,test"), 1);
        assert_eq!(count_fields(Delimiter::Comma, "é,ü"), 2);
    }
}
