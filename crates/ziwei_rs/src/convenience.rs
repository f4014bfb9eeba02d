use serde::{Deserialize, Serialize};
use tracing::warn;
use ziwei_base::{
    AnnualInfo, BodyLifeRelation, Branch, DecadePeriod, Direction, GanZhi, MonthlyInfo,
    PalaceRelationship, ZiweiError, annual_for_year, body_life_relation, body_palace, bureau_for,
    decade_direction, decade_for_age, decades, life_palace, minor_limit, monthly_palace,
    palace_stems, relationship, year_ganzhi,
};

use crate::chart::{ChartResult, assemble};
use crate::config::ChartConfig;
use crate::input::BirthInput;

/// Assemble a chart with the default configuration.
pub fn chart(input: &BirthInput) -> Result<ChartResult, ZiweiError> {
    assemble(input, &ChartConfig::default())
}

/// Assemble a chart with explicit options.
pub fn chart_with_config(
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<ChartResult, ZiweiError> {
    assemble(input, config)
}

/// Life and body palaces without a full chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalacePositions {
    pub hour_branch: Branch,
    pub life: Branch,
    pub body: Branch,
    pub relation: BodyLifeRelation,
}

/// Life and body palaces for a lunar month and clock hour.
pub fn palace_positions(lunar_month: u8, clock_hour: u8) -> Result<PalacePositions, ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidBirthInput("month must be 1-12"));
    }
    if clock_hour > 23 {
        return Err(ZiweiError::InvalidBirthInput("hour must be 0-23"));
    }
    let hour_branch = ziwei_base::hour_branch(clock_hour);
    let life = life_palace(lunar_month, hour_branch);
    let body = body_palace(lunar_month, hour_branch);
    Ok(PalacePositions {
        hour_branch,
        life,
        body,
        relation: body_life_relation(life, body),
    })
}

/// Trine and opposite partners of a palace.
pub fn relationships(branch: Branch) -> PalaceRelationship {
    relationship(branch)
}

/// Same as [`relationships`], taking a raw ring index (子 = 0).
pub fn palace_relationship(index: u8) -> Result<PalaceRelationship, ZiweiError> {
    Ok(relationship(Branch::try_from_index(index)?))
}

/// Luck position of a birth in one target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckInfo {
    pub nominal_age: u32,
    pub direction: Direction,
    /// `None` before the first decade starts.
    pub decade: Option<DecadePeriod>,
    pub annual: AnnualInfo,
    pub minor_limit: Branch,
}

/// Decade, annual palace and minor limit for `target_year`.
pub fn luck_info(input: &BirthInput, target_year: i32) -> Result<LuckInfo, ZiweiError> {
    if let Err(e) = input.validate() {
        warn!(error = %e, "birth input rejected");
        return Err(e);
    }
    let annual = annual_for_year(input.year, target_year)?;

    let year = year_ganzhi(input.year);
    let life = life_palace(input.month, input.hour_branch());
    let bureau = bureau_for(year.stem, life);
    let direction = decade_direction(year.stem, input.gender);
    let periods = decades(bureau, life, direction, &palace_stems(year.stem));

    Ok(LuckInfo {
        nominal_age: annual.nominal_age,
        direction,
        decade: decade_for_age(&periods, annual.nominal_age).copied(),
        annual,
        minor_limit: minor_limit(year.branch, input.gender, annual.nominal_age),
    })
}

/// Year pillar of any year.
pub fn year_pillar(year: i32) -> GanZhi {
    year_ganzhi(year)
}

/// Monthly palace of a lunar month in `target_year`.
pub fn monthly(target_year: i32, lunar_month: u8) -> Result<MonthlyInfo, ZiweiError> {
    monthly_palace(target_year, lunar_month)
}
