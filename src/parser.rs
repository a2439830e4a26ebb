//! Row parser for census tract lines.

use std::str::FromStr;

use csv::{ByteRecord, ReaderBuilder};

use crate::config::{ColumnLayout, RollupConfig};
use crate::stats::AreaKey;

/// One accepted tract row. Lives only until it is folded into a [`crate::stats::CoreArea`].
#[derive(Debug, Clone, PartialEq)]
pub struct TractRecord {
    pub area_code: i64,
    pub area_title: String,
    pub population_2000: i128,
    pub population_2010: i128,
    pub percent_change: f64,
}

impl TractRecord {
    pub fn key(&self) -> AreaKey {
        AreaKey::new(self.area_code, self.area_title.clone())
    }
}

/// Per-line reader buffer; census rows are a few hundred bytes.
const LINE_BUFFER_CAPACITY: usize = 512;

/// Splits single lines into fields and coerces the consumed columns.
pub struct RowParser {
    builder: ReaderBuilder,
    columns: ColumnLayout,
    last_column: usize,
    thousands_separator: char,
}

impl RowParser {
    pub fn new(config: &RollupConfig) -> Self {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .buffer_capacity(LINE_BUFFER_CAPACITY)
            .delimiter(config.delimiter)
            .quote(config.quote);

        Self {
            builder,
            columns: config.columns,
            last_column: config.last_column(),
            thousands_separator: config.thousands_separator,
        }
    }

    /// Parses one raw line.
    ///
    /// Returns `None` when any consumed column is missing, fails to coerce,
    /// or the title is empty. The caller drops such rows without a trace.
    pub fn parse_line(&self, line: &[u8]) -> Option<TractRecord> {
        let mut reader = self.builder.from_reader(line);
        let mut record = ByteRecord::new();
        if !reader.read_byte_record(&mut record).ok()? {
            return None;
        }
        if record.len() <= self.last_column {
            return None;
        }

        let field = |idx: usize| record.get(idx).and_then(|b| std::str::from_utf8(b).ok());
        let cols = &self.columns;

        let area_code = parse_int(field(cols.area_code)?)?;
        let area_title = field(cols.area_title)?;
        let population_2000 = self.parse_population(field(cols.population_2000)?)?;
        let population_2010 = self.parse_population(field(cols.population_2010)?)?;
        let percent_change = parse_float(field(cols.percent_change)?)?;

        if area_title.is_empty() {
            return None;
        }

        Some(TractRecord {
            area_code,
            area_title: area_title.to_string(),
            population_2000,
            population_2010,
            percent_change,
        })
    }

    fn parse_population(&self, raw: &str) -> Option<i128> {
        parse_int(&raw.replace(self.thousands_separator, ""))
    }
}

/// Integer coercion tolerant of surrounding whitespace and an explicit sign.
pub fn parse_int<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Float coercion tolerant of surrounding whitespace.
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> RowParser {
        RowParser::new(&RollupConfig::default())
    }

    fn line(code: &str, title: &str, pop00: &str, pop10: &str, pct: &str) -> String {
        format!(
            "01001020100,01,001,020100,3.9,0,388,{code},{title},2,,,{pop00},693,{pop10},760,6,{pct},67,9.67\n"
        )
    }

    #[test]
    fn test_parse_plain_row() {
        let row = line("10180", "Abilene", "3047", "2965", "-2.69");
        let tract = parser().parse_line(row.as_bytes()).unwrap();

        assert_eq!(tract.area_code, 10180);
        assert_eq!(tract.area_title, "Abilene");
        assert_eq!(tract.population_2000, 3047);
        assert_eq!(tract.population_2010, 2965);
        assert_eq!(tract.percent_change, -2.69);
    }

    #[test]
    fn test_quoted_title_with_delimiter_is_one_field() {
        let row = line("33860", "\"Montgomery, AL\"", "\"1,906\"", "\"1,912\"", "0.31");
        let tract = parser().parse_line(row.as_bytes()).unwrap();

        assert_eq!(tract.area_code, 33860);
        assert_eq!(tract.area_title, "Montgomery, AL");
        assert_eq!(tract.population_2000, 1906);
        assert_eq!(tract.population_2010, 1912);
        assert_eq!(tract.key().quoted_title(), "\"Montgomery, AL\"");
    }

    #[test]
    fn test_crlf_and_whitespace() {
        let row = line(" 100 ", "Downtown", "500", " 600", "10.0 ").replace('\n', "\r\n");
        let tract = parser().parse_line(row.as_bytes()).unwrap();

        assert_eq!(tract.area_code, 100);
        assert_eq!(tract.population_2010, 600);
        assert_eq!(tract.percent_change, 10.0);
    }

    #[test]
    fn test_non_numeric_fields_are_skipped() {
        let p = parser();
        assert!(p.parse_line(line("abc", "X", "1", "2", "3").as_bytes()).is_none());
        assert!(p.parse_line(line("1", "X", "(X)", "2", "3").as_bytes()).is_none());
        assert!(p.parse_line(line("1", "X", "1", "", "3").as_bytes()).is_none());
        assert!(p.parse_line(line("1", "X", "1", "2", "n/a").as_bytes()).is_none());
    }

    #[test]
    fn test_empty_title_is_skipped() {
        let row = line("100", "", "500", "600", "10.0");
        assert!(parser().parse_line(row.as_bytes()).is_none());

        let quoted_empty = line("100", "\"\"", "500", "600", "10.0");
        assert!(parser().parse_line(quoted_empty.as_bytes()).is_none());
    }

    #[test]
    fn test_short_and_blank_rows_are_skipped() {
        let p = parser();
        assert!(p.parse_line(b"1,2,3,4,5,6,7,100,Downtown,9,10,11,500\n").is_none());
        assert!(p.parse_line(b"\n").is_none());
        assert!(p.parse_line(b"").is_none());
    }

    #[test]
    fn test_invalid_utf8_title_is_skipped() {
        let mut row = b"0,1,2,3,4,5,6,100,".to_vec();
        row.extend_from_slice(&[0xFF, 0xFE]);
        row.extend_from_slice(b",9,10,11,500,13,600,15,16,1.5\n");
        assert!(parser().parse_line(&row).is_none());
    }

    #[test]
    fn test_population_beyond_i64_is_kept() {
        let row = line("100", "Downtown", "\"10,000,000,000,000,000,000\"", "1", "1.0");
        let tract = parser().parse_line(row.as_bytes()).unwrap();

        assert_eq!(tract.population_2000, 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_int::<i64>("+42"), Some(42));
        assert_eq!(parse_int::<i64>("-7"), Some(-7));
        assert_eq!(parse_int::<i64>(""), None);
        assert_eq!(parse_int::<i64>("4.2"), None);
        assert_eq!(parse_float("5.5"), Some(5.5));
        assert_eq!(parse_float(""), None);
    }
}
