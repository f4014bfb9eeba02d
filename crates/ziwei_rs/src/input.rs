//! Birth input accepted by the chart facade.

use serde::{Deserialize, Serialize};
use ziwei_base::{Branch, Gender, SolarDate, ZiweiError};

/// Earliest supported lunar year.
pub const MIN_YEAR: i32 = 1900;
/// Latest supported lunar year.
pub const MAX_YEAR: i32 = 2100;

/// Lunar birth data plus an optional solar date for the day/hour pillars.
///
/// Conversion from a solar calendar date is the caller's job; this type
/// carries the lunar fields as already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthInput {
    /// Lunar year, 1900..=2100.
    pub year: i32,
    /// Lunar month, 1..=12.
    pub month: u8,
    /// Lunar day, 1..=30.
    pub day: u8,
    /// Clock hour, 0..=23.
    pub hour: u8,
    pub gender: Gender,
    /// The lunar month is a leap month (闰月). Only affects the date label.
    #[serde(default)]
    pub leap_month: bool,
    /// Solar civil date of the birth, when known.
    #[serde(default)]
    pub solar: Option<SolarDate>,
}

impl BirthInput {
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            gender,
            leap_month: false,
            solar: None,
        }
    }

    /// Attach the solar date used for the day and hour pillars.
    pub const fn with_solar(mut self, solar: SolarDate) -> Self {
        self.solar = Some(solar);
        self
    }

    pub const fn with_leap_month(mut self, leap_month: bool) -> Self {
        self.leap_month = leap_month;
        self
    }

    /// Check every field against its supported range.
    pub fn validate(&self) -> Result<(), ZiweiError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ZiweiError::InvalidBirthInput("year must be 1900-2100"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ZiweiError::InvalidBirthInput("month must be 1-12"));
        }
        if !(1..=30).contains(&self.day) {
            return Err(ZiweiError::InvalidBirthInput("lunar day must be 1-30"));
        }
        if self.hour > 23 {
            return Err(ZiweiError::InvalidBirthInput("hour must be 0-23"));
        }
        if let Some(solar) = self.solar {
            if !solar.is_valid() {
                return Err(ZiweiError::InvalidBirthInput("solar date is not a valid date"));
            }
        }
        Ok(())
    }

    /// Two-hour branch of the birth hour.
    pub const fn hour_branch(&self) -> Branch {
        ziwei_base::hour_branch(self.hour)
    }
}
