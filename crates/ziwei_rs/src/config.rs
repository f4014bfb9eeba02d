//! Chart assembly options.

use serde::{Deserialize, Serialize};

/// Options controlling what a chart carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Place the minor stars (天刑 红鸾 天喜 天姚 咸池). Default: true.
    pub include_minor_stars: bool,
    /// Compute birth, self and flying transformations. Default: true.
    pub include_sihua: bool,
    /// Year whose annual palace and minor limit are labelled. Default: none.
    pub reference_year: Option<i32>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            include_minor_stars: true,
            include_sihua: true,
            reference_year: None,
        }
    }
}

impl ChartConfig {
    pub const fn with_minor_stars(mut self, include: bool) -> Self {
        self.include_minor_stars = include;
        self
    }

    pub const fn with_sihua(mut self, include: bool) -> Self {
        self.include_sihua = include;
        self
    }

    pub const fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }
}
