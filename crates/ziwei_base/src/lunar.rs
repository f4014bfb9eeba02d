//! Chinese labels for lunar dates, e.g. "甲子年 正月初一".

use crate::error::ZiweiError;
use crate::ganzhi::GanZhi;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Name of lunar month 1..=12.
pub const fn lunar_month_name(month: u8) -> Option<&'static str> {
    if month >= 1 && month <= 12 {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Name of lunar day 1..=30.
pub const fn lunar_day_name(day: u8) -> Option<&'static str> {
    if day >= 1 && day <= 30 {
        Some(DAY_NAMES[(day - 1) as usize])
    } else {
        None
    }
}

/// Full label `"{干支}年 {月}{日}"`, with 闰 before a leap month.
pub fn lunar_date_string(
    year: GanZhi,
    month: u8,
    day: u8,
    leap_month: bool,
) -> Result<String, ZiweiError> {
    let m = lunar_month_name(month).ok_or(ZiweiError::InvalidBirthInput("month must be 1-12"))?;
    let d = lunar_day_name(day).ok_or(ZiweiError::InvalidBirthInput("lunar day must be 1-30"))?;
    let leap = if leap_month { "闰" } else { "" };
    Ok(format!("{year}年 {leap}{m}{d}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::year_ganzhi;

    #[test]
    fn names() {
        assert_eq!(lunar_month_name(1), Some("正月"));
        assert_eq!(lunar_month_name(11), Some("冬月"));
        assert_eq!(lunar_month_name(13), None);
        assert_eq!(lunar_day_name(20), Some("二十"));
        assert_eq!(lunar_day_name(21), Some("廿一"));
        assert_eq!(lunar_day_name(0), None);
    }

    #[test]
    fn full_label() {
        assert_eq!(
            lunar_date_string(year_ganzhi(1984), 1, 1, false).unwrap(),
            "甲子年 正月初一"
        );
        assert_eq!(
            lunar_date_string(year_ganzhi(2023), 2, 15, true).unwrap(),
            "癸卯年 闰二月十五"
        );
        assert!(lunar_date_string(year_ganzhi(2023), 2, 31, false).is_err());
    }
}
