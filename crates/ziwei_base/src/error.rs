//! Error types for chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ZiWei chart calculations.
///
/// `InvalidBirthInput`, `InvalidTargetYear`, `InvalidLunarMonth` and
/// `InvalidPalaceIndex` are caller errors.
/// `UnresolvableBureau` and `UnresolvableAnchor` mean a lookup fell outside
/// its table; with validated input they indicate a bug.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ZiweiError {
    /// A birth field is outside its supported range.
    InvalidBirthInput(&'static str),
    /// A luck query asked for a year before the birth year, or one whose
    /// nominal age does not fit in a `u32`.
    InvalidTargetYear { birth_year: i32, target_year: i32 },
    /// A monthly query used a lunar month outside 1..=12.
    InvalidLunarMonth(u8),
    /// Palace (branch) index outside 0..=11.
    InvalidPalaceIndex(u8),
    /// Bureau number outside 2..=6.
    UnresolvableBureau(u8),
    /// No 紫微 position for this bureau number and lunar day.
    UnresolvableAnchor { bureau: u8, day: u8 },
}

impl Display for ZiweiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBirthInput(msg) => write!(f, "invalid birth input: {msg}"),
            Self::InvalidTargetYear {
                birth_year,
                target_year,
            } => write!(
                f,
                "invalid target year: {target_year} for birth year {birth_year}"
            ),
            Self::InvalidLunarMonth(m) => write!(f, "invalid lunar month: {m} (1-12)"),
            Self::InvalidPalaceIndex(i) => write!(f, "invalid palace index: {i} (0-11)"),
            Self::UnresolvableBureau(n) => write!(f, "unresolvable bureau number: {n}"),
            Self::UnresolvableAnchor { bureau, day } => {
                write!(f, "unresolvable ziwei anchor: bureau {bureau}, lunar day {day}")
            }
        }
    }
}

impl Error for ZiweiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ZiweiError::InvalidBirthInput("month must be 1-12").to_string(),
            "invalid birth input: month must be 1-12"
        );
        assert_eq!(
            ZiweiError::UnresolvableAnchor { bureau: 4, day: 31 }.to_string(),
            "unresolvable ziwei anchor: bureau 4, lunar day 31"
        );
        assert_eq!(
            ZiweiError::InvalidLunarMonth(13).to_string(),
            "invalid lunar month: 13 (1-12)"
        );
    }
}
