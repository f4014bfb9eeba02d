//! Luck cycles: decades (大限), years (流年), minor limits (小限) and months (流月).
//!
//! The decade walk has its own direction, taken from year-stem polarity and
//! gender. Yang-year males and yin-year females walk forward; everyone else
//! walks backward. This is unrelated to the direction of the main-star walks.
//!
//! The first decade sits on the life palace and starts at the bureau number.
//! Each following decade moves one palace and ten years on.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bureau::Bureau;
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Direction, GanZhi, Stem, Triad, month_ganzhi, year_ganzhi};
use crate::palace::{PalaceName, palace_names};

/// Gender of the chart owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl FromStr for Gender {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(ZiweiError::InvalidBirthInput(
                "gender must be \"male\" or \"female\"",
            )),
        }
    }
}

/// Decade walking direction for a year stem and gender.
pub const fn decade_direction(year_stem: Stem, gender: Gender) -> Direction {
    match (year_stem.polarity().is_yang(), gender) {
        (true, Gender::Male) | (false, Gender::Female) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// One ten-year period on one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadePeriod {
    /// 1-based position in the sequence.
    pub order: u8,
    pub branch: Branch,
    pub stem: Stem,
    /// First nominal age (虚岁), inclusive.
    pub start_age: u8,
    /// Last nominal age, inclusive.
    pub end_age: u8,
}

impl DecadePeriod {
    pub const fn contains(&self, age: u32) -> bool {
        self.start_age as u32 <= age && age <= self.end_age as u32
    }

    /// e.g. "丙寅 4-13".
    pub fn label(&self) -> String {
        format!(
            "{}{} {}-{}",
            self.stem.name(),
            self.branch.name(),
            self.start_age,
            self.end_age
        )
    }
}

/// The 12 decades in walking order, first one on the life palace.
pub fn decades(
    bureau: Bureau,
    life: Branch,
    direction: Direction,
    palace_stems: &[Stem; 12],
) -> [DecadePeriod; 12] {
    std::array::from_fn(|i| {
        let branch = life.walk(direction, i as i32);
        let start_age = bureau.number() + 10 * i as u8;
        DecadePeriod {
            order: i as u8 + 1,
            branch,
            stem: palace_stems[branch.index() as usize],
            start_age,
            end_age: start_age + 9,
        }
    })
}

/// Decade covering a nominal age. Ages before the first decade have none.
pub fn decade_for_age(decades: &[DecadePeriod], age: u32) -> Option<&DecadePeriod> {
    decades.iter().find(|d| d.contains(age))
}

/// Decade on a given palace.
pub fn decade_at(decades: &[DecadePeriod; 12], branch: Branch) -> &DecadePeriod {
    let i = decades
        .iter()
        .position(|d| d.branch == branch)
        .unwrap_or_default();
    &decades[i]
}

/// Annual (流年) palace for a nominal age: the year branch moved `age - 1`.
pub const fn annual_palace(year_branch: Branch, nominal_age: u32) -> Branch {
    year_branch.offset((nominal_age as i64 - 1).rem_euclid(12) as i32)
}

/// One year of the annual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualInfo {
    pub year: i32,
    pub ganzhi: GanZhi,
    /// 虚岁: 1 in the birth year.
    pub nominal_age: u32,
    pub branch: Branch,
}

/// Annual palace for `target_year`.
pub fn annual_for_year(birth_year: i32, target_year: i32) -> Result<AnnualInfo, ZiweiError> {
    if target_year < birth_year {
        return Err(ZiweiError::InvalidTargetYear {
            birth_year,
            target_year,
        });
    }
    let nominal_age = u32::try_from(target_year as i64 - birth_year as i64 + 1).map_err(|_| {
        ZiweiError::InvalidTargetYear {
            birth_year,
            target_year,
        }
    })?;
    let branch = annual_palace(year_ganzhi(birth_year).branch, nominal_age);
    Ok(AnnualInfo {
        year: target_year,
        ganzhi: year_ganzhi(target_year),
        nominal_age,
        branch,
    })
}

/// Minor limit (小限) palace.
///
/// Age 1 sits on a fixed palace per year-branch triad (寅午戌→辰, 申子辰→戌,
/// 巳酉丑→未, 亥卯未→丑). Males count forward, females backward.
pub const fn minor_limit(year_branch: Branch, gender: Gender, nominal_age: u32) -> Branch {
    let start = match year_branch.triad() {
        Triad::YinWuXu => Branch::Chen,
        Triad::ShenZiChen => Branch::Xu,
        Triad::SiYouChou => Branch::Wei,
        Triad::HaiMaoWei => Branch::Chou,
    };
    let direction = match gender {
        Gender::Male => Direction::Forward,
        Gender::Female => Direction::Backward,
    };
    start.walk(direction, (nominal_age as i64 - 1).rem_euclid(12) as i32)
}

/// One month of the monthly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInfo {
    pub year: i32,
    pub lunar_month: u8,
    pub ganzhi: GanZhi,
    pub branch: Branch,
}

/// Monthly (流月) palace: the month branch of `lunar_month` in `target_year`.
pub fn monthly_palace(target_year: i32, lunar_month: u8) -> Result<MonthlyInfo, ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidLunarMonth(lunar_month));
    }
    let ganzhi = month_ganzhi(year_ganzhi(target_year).stem, lunar_month);
    Ok(MonthlyInfo {
        year: target_year,
        lunar_month,
        ganzhi,
        branch: ganzhi.branch,
    })
}

/// Palace names of an overlay (大限 or 流年) whose 命 sits at `anchor`.
pub fn overlay_names(anchor: Branch) -> [PalaceName; 12] {
    palace_names(anchor)
}
