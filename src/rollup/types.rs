//! Data types produced by the rollup pipeline.

use serde::{Serialize, Serializer};

use crate::error::RollupError;
use crate::rollup::utility::format_decimal;
use crate::stats::CoreArea;

/// One rendered output row. Field order is the column order on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreAreaSummary {
    pub area_code: i64,
    /// Already wrapped in double quotes.
    pub area_title: String,
    pub tract_count: usize,
    pub total_population_2000: i128,
    pub total_population_2010: i128,
    #[serde(serialize_with = "serialize_decimal")]
    pub average_percent_change: f64,
}

impl TryFrom<&CoreArea> for CoreAreaSummary {
    type Error = RollupError;

    fn try_from(area: &CoreArea) -> Result<Self, Self::Error> {
        let overflow = || RollupError::PopulationOverflow {
            code: area.key.code,
            title: area.key.title.clone(),
        };

        Ok(CoreAreaSummary {
            area_code: area.key.code,
            area_title: area.key.quoted_title(),
            tract_count: area.tract_count,
            total_population_2000: area.total_population_2000().ok_or_else(overflow)?,
            total_population_2010: area.total_population_2010().ok_or_else(overflow)?,
            average_percent_change: area.average_percent_change(),
        })
    }
}

fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_decimal(*value))
}
