//! Five-elements bureau (五行局) resolution.
//!
//! The bureau is the 纳音 element of the life palace's own stem-branch pair.
//! Because palace stems are fixed by the year stem (五虎遁), the result
//! collapses to a 5×6 table keyed by the year-stem combination and the
//! branch pair of the life palace.

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Element, Stem};

/// The five bureaus. The number is the divisor used when locating 紫微.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// All bureaus in ascending bureau-number order.
pub const ALL_BUREAUS: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    /// Bureau number (2..=6).
    pub const fn number(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Chinese name, e.g. "水二局".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    pub const fn from_element(element: Element) -> Self {
        match element {
            Element::Water => Self::Water2,
            Element::Wood => Self::Wood3,
            Element::Metal => Self::Metal4,
            Element::Earth => Self::Earth5,
            Element::Fire => Self::Fire6,
        }
    }

    /// Bureau from its number. Anything outside 2..=6 is unresolvable.
    pub const fn from_number(number: u8) -> Result<Self, ZiweiError> {
        match number {
            2 => Ok(Self::Water2),
            3 => Ok(Self::Wood3),
            4 => Ok(Self::Metal4),
            5 => Ok(Self::Earth5),
            6 => Ok(Self::Fire6),
            _ => Err(ZiweiError::UnresolvableBureau(number)),
        }
    }

    /// 0-based position in [`ALL_BUREAUS`].
    pub const fn index(self) -> u8 {
        self.number() - 2
    }
}

/// Rows: 甲己, 乙庚, 丙辛, 丁壬, 戊癸.
/// Columns: 子丑, 寅卯, 辰巳, 午未, 申酉, 戌亥.
const BUREAU_TABLE: [[Bureau; 6]; 5] = {
    use Bureau::{Earth5 as E, Fire6 as F, Metal4 as M, Water2 as W, Wood3 as T};
    [
        [W, F, T, E, M, F],
        [F, E, M, T, W, E],
        [E, T, W, M, F, T],
        [T, M, F, W, E, M],
        [M, W, E, F, T, W],
    ]
};

/// Bureau for a year stem and life-palace branch.
pub const fn bureau_for(year_stem: Stem, life: Branch) -> Bureau {
    BUREAU_TABLE[(year_stem.index() % 5) as usize][(life.index() / 2) as usize]
}
