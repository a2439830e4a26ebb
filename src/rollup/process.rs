use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::info;

use crate::config::RollupConfig;
use crate::error::{RollupError, RollupResult};
use crate::output::{create_writer, write_summaries};
use crate::parser::RowParser;
use crate::rollup::aggregate::CoreAreaMap;
use crate::rollup::types::CoreAreaSummary;

/// One rollup run from a tract file to a core-area file.
#[derive(Debug, Clone)]
pub struct RollupProcess {
    input: PathBuf,
    output: PathBuf,
    config: RollupConfig,
}

impl RollupProcess {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self::with_config(input, output, RollupConfig::default())
    }

    pub fn with_config(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        config: RollupConfig,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config,
        }
    }

    /// Streams the input line by line and folds every accepted tract.
    ///
    /// The first line is discarded unread. Rows the parser rejects are
    /// dropped silently.
    #[tracing::instrument(skip(self), fields(input = %self.input.display()))]
    pub fn process_file(&self) -> RollupResult<CoreAreaMap> {
        let file = File::open(&self.input).map_err(RollupError::OpenInput)?;
        let mut reader = BufReader::new(file);
        let parser = RowParser::new(&self.config);
        let mut areas = CoreAreaMap::new();

        let mut line = Vec::new();
        reader
            .read_until(b'\n', &mut line)
            .map_err(RollupError::ReadInput)?;

        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(RollupError::ReadInput)?;
            if read == 0 {
                break;
            }
            if let Some(tract) = parser.parse_line(&line) {
                areas.add(tract);
            }
        }

        info!(core_areas = areas.len(), "Input processed");
        Ok(areas)
    }

    /// Renders each core area and writes it out. Returns the number of rows written.
    #[tracing::instrument(skip(self, areas), fields(output = %self.output.display()))]
    pub fn save_file(&self, areas: &CoreAreaMap) -> RollupResult<usize> {
        let mut writer = create_writer(&self.output, self.config.delimiter)?;
        let written = write_summaries(&mut writer, areas.iter().map(CoreAreaSummary::try_from))?;

        info!(rows = written, "Output written");
        Ok(written)
    }

    /// Runs the whole pipeline. The output is not touched if the input cannot be opened.
    pub fn run(&self) -> RollupResult<usize> {
        let areas = self.process_file()?;
        self.save_file(&areas)
    }
}
