use crate::parser::TractRecord;
use crate::rollup::utility::{mean, round2, sum};

/// Grouping key for a core area. Two tracts share an aggregate only when
/// both code and title match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaKey {
    pub code: i64,
    pub title: String,
}

impl AreaKey {
    pub fn new(code: i64, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
        }
    }

    /// Title wrapped in literal double quotes, as written to the output.
    pub fn quoted_title(&self) -> String {
        format!("\"{}\"", self.title)
    }
}

/// Running statistics for one core area.
///
/// `tract_count` always equals the length of each value list.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreArea {
    pub key: AreaKey,
    pub tract_count: usize,
    pub population_2000: Vec<i128>,
    pub population_2010: Vec<i128>,
    pub percent_change: Vec<f64>,
}

impl CoreArea {
    pub fn from_tract(tract: TractRecord) -> Self {
        CoreArea {
            key: AreaKey::new(tract.area_code, tract.area_title),
            tract_count: 1,
            population_2000: vec![tract.population_2000],
            population_2010: vec![tract.population_2010],
            percent_change: vec![tract.percent_change],
        }
    }

    pub fn add_tract(&mut self, tract: &TractRecord) {
        self.tract_count += 1;
        self.population_2000.push(tract.population_2000);
        self.population_2010.push(tract.population_2010);
        self.percent_change.push(tract.percent_change);
    }

    /// `None` when the total does not fit in an `i128`.
    pub fn total_population_2000(&self) -> Option<i128> {
        sum(&self.population_2000)
    }

    pub fn total_population_2010(&self) -> Option<i128> {
        sum(&self.population_2010)
    }

    /// Unweighted mean across tracts, rounded to 2 decimal places.
    pub fn average_percent_change(&self) -> f64 {
        round2(mean(&self.percent_change))
    }
}
