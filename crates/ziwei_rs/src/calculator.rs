//! Reusable calculator holding a chart configuration.

use ziwei_base::ZiweiError;

use crate::chart::{ChartResult, assemble};
use crate::config::ChartConfig;
use crate::convenience::{LuckInfo, luck_info};
use crate::input::BirthInput;

/// Stateless chart calculator. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartCalculator {
    config: ChartConfig,
}

impl ChartCalculator {
    pub const fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn chart(&self, input: &BirthInput) -> Result<ChartResult, ZiweiError> {
        assemble(input, &self.config)
    }

    /// Luck info for `target_year`, independent of the configured reference year.
    pub fn luck_info(&self, input: &BirthInput, target_year: i32) -> Result<LuckInfo, ZiweiError> {
        luck_info(input, target_year)
    }
}
