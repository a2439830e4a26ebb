//! Input layout settings for the rollup.

/// Column positions consumed from each tract row.
///
/// Defaults follow the census tract file (`CBSA09`, `CBSA_T`, `POP00`,
/// `POP10`, `PPCHG`). Every other column is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub area_code: usize,
    pub area_title: usize,
    pub population_2000: usize,
    pub population_2010: usize,
    pub percent_change: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            area_code: 7,
            area_title: 8,
            population_2000: 12,
            population_2010: 14,
            percent_change: 17,
        }
    }
}

/// Settings shared by the row parser and the pipeline.
#[derive(Debug, Clone)]
pub struct RollupConfig {
    pub delimiter: u8,
    pub quote: u8,
    /// Stripped from population fields before integer conversion.
    pub thousands_separator: char,
    pub columns: ColumnLayout,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            thousands_separator: ',',
            columns: ColumnLayout::default(),
        }
    }
}

impl RollupConfig {
    /// Index of the right-most consumed column.
    pub fn last_column(&self) -> usize {
        let c = &self.columns;
        [
            c.area_code,
            c.area_title,
            c.population_2000,
            c.population_2010,
            c.percent_change,
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }
}
