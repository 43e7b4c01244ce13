use crate::number::parse_number;
use crate::types::ColumnKind;

/// Classify a column as numeric or text.
///
/// Absent and empty cells are ignored. A column with nothing left to look
/// at is text.
pub fn detect_column_kind<'a, I>(values: I) -> ColumnKind
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen_value = false;

    for value in values.into_iter().flatten() {
        if value.is_empty() {
            continue;
        }
        if parse_number(Some(value)).is_nan() {
            return ColumnKind::Text;
        }
        seen_value = true;
    }

    if seen_value {
        ColumnKind::Number
    } else {
        ColumnKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_column() {
        let values = vec![Some("1"), Some("2,5"), Some("-3")];
        assert_eq!(detect_column_kind(values), ColumnKind::Number);
    }

    #[test]
    fn test_text_column() {
        let values = vec![Some("1"), Some("hello"), Some("3")];
        assert_eq!(detect_column_kind(values), ColumnKind::Text);
    }

    #[test]
    fn test_blank_and_absent_cells_ignored() {
        let values = vec![Some("4"), None, Some(""), Some("5")];
        assert_eq!(detect_column_kind(values), ColumnKind::Number);
    }

    #[test]
    fn test_empty_column_is_text() {
        assert_eq!(detect_column_kind(Vec::new()), ColumnKind::Text);
        assert_eq!(detect_column_kind(vec![None, Some("")]), ColumnKind::Text);
    }

    #[test]
    fn test_thousands_separator_column_is_text() {
        let values = vec![Some("$1,234.56"), Some("10")];
        assert_eq!(detect_column_kind(values), ColumnKind::Text);
    }
}
