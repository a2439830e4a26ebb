//! Tract-to-core-area rollup.
//!
//! Streams tract rows, folds them into per-core-area running statistics,
//! then renders one summary row per core area.

pub mod aggregate;
pub mod process;
pub mod types;
pub mod utility;

pub use aggregate::CoreAreaMap;
pub use process::RollupProcess;
pub use types::CoreAreaSummary;
