//! Convenience facade for the ziwei natal chart engine.
//!
//! Takes lunar birth data, validates it, and assembles a complete
//! twelve-palace chart with stars, brightness, transformations and luck
//! cycles. Partial queries (palace positions, relationships, luck info,
//! year pillar) are available without building a chart.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ziwei_rs::*;
//!
//! let input = BirthInput::new(1984, 1, 1, 0, Gender::Male);
//! let chart = chart(&input).expect("valid input");
//!
//! println!("{} {}", chart.lunar_date, chart.bureau.name());
//! for p in &chart.palaces {
//!     let stars: Vec<_> = p.stars.iter().map(|s| s.star.name()).collect();
//!     println!("{}: {}", p.label(), stars.join(" "));
//! }
//! ```

pub mod calculator;
pub mod chart;
pub mod config;
pub mod convenience;
pub mod input;

// Primary re-exports; users should only need `use ziwei_rs::*`
pub use calculator::ChartCalculator;
pub use chart::{ChartResult, Palace, PlacedStar, annotate};
pub use config::ChartConfig;
pub use convenience::{
    LuckInfo, PalacePositions, chart, chart_with_config, luck_info, monthly, palace_positions,
    palace_relationship, relationships, year_pillar,
};
pub use input::{BirthInput, MAX_YEAR, MIN_YEAR};

// Re-export engine types so callers don't need to depend on ziwei_base directly.
pub use ziwei_base::{
    ALL_BRANCHES, ALL_STARS, AnnualInfo, BirthSihua, BodyLifeRelation, Branch, Brightness, Bureau,
    DecadePeriod, Direction, Element, FlyingTransformation, FourPillars, GanZhi, Gender,
    MAIN_STARS, MarkSource, MonthlyInfo, PalaceName, PalaceRelationship, Polarity,
    SelfTransformation, SolarDate, Star, StarCategory, Stem, TaggedMark, Transformation,
    ZiweiError, hour_branch,
};
