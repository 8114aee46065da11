//! CSV table model: raw delimited text to a header plus positional rows.
//!
//! The parse is deliberately simple: lines split on `'\n'`, fields split on
//! `','`, no quoting or escaping support. A field containing a comma splits
//! into two fields — a documented limitation of the dataset format, not
//! something this module tries to repair.

/// A single data row: ordered string fields, positionally aligned to the
/// header. A malformed line may produce a row whose length differs from the
/// header's; no invariant is enforced here.
pub type Row = Vec<String>;

/// Ordered column names taken from the first line of a dataset.
///
/// Names are unique by convention only; `index_of` resolves to the first
/// match when they are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Header(columns)
    }

    /// Position of `column` in the header, or `None` if absent. Callers
    /// decide whether a missing column is an error or just an empty match.
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.0.iter().position(|c| c == column)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A parsed dataset: header plus data rows in original file order.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Table {
    /// Parse comma-delimited text into a header and data rows.
    ///
    /// The first line becomes the header; every remaining line becomes one
    /// row, in order. A trailing newline yields a final one-field empty row
    /// (`[""]`) — the parser does not filter empty rows, callers handle
    /// them where it matters. Never fails on a field-count mismatch.
    pub fn parse(text: &str) -> Table {
        let mut lines = text.split('\n');
        let header = lines
            .next()
            .map(split_fields)
            .unwrap_or_default();
        let rows = lines.map(split_fields).collect();
        Table {
            header: Header(header),
            rows,
        }
    }
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_returns_header_and_rows_in_order() {
        let table = Table::parse("a,b,c\n1,2,3\n4,5,6");
        assert_eq!(table.header.columns(), ["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["1", "2", "3"]);
        assert_eq!(table.rows[1], ["4", "5", "6"]);
    }

    #[test]
    fn trailing_newline_yields_one_field_empty_row() {
        let table = Table::parse("a,b\n1,2\n");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], [""]);
    }

    #[test]
    fn no_quoting_support_splits_on_every_comma() {
        let table = Table::parse("a,b\n\"x,y\",2");
        assert_eq!(table.rows[0], ["\"x", "y\"", "2"]);
    }

    #[test]
    fn row_length_may_differ_from_header() {
        let table = Table::parse("a,b,c\n1,2");
        assert_eq!(table.header.len(), 3);
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn empty_input_gives_single_empty_column_header() {
        let table = Table::parse("");
        assert_eq!(table.header.columns(), [""]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn index_of_finds_first_match() {
        let header = Header::new(vec!["a".into(), "b".into(), "b".into()]);
        assert_eq!(header.index_of("b"), Some(1));
        assert_eq!(header.index_of("a"), Some(0));
    }

    #[test]
    fn index_of_missing_column_is_none() {
        let header = Header::new(vec!["a".into()]);
        assert_eq!(header.index_of("z"), None);
    }
}
