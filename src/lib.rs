pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod rollup;
pub mod stats;
