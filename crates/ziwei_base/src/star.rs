//! Star identities, categories and brightness (庙旺得利平不陷).
//!
//! Every star has one static [`StarDefinition`] holding its element,
//! polarity, category and a 12-entry brightness row. Rows are indexed by
//! ring offset from 子, so [`brightness`] is a plain array lookup and is
//! total for every star and every branch.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Element, Polarity};
use crate::star_data::STAR_DEFINITIONS;

/// Brightness levels, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brightness {
    /// 庙
    Miao,
    /// 旺
    Wang,
    /// 得
    De,
    /// 利
    Li,
    /// 平
    Ping,
    /// 不
    Bu,
    /// 陷
    Xian,
}

/// All 7 levels, strongest first.
pub const ALL_BRIGHTNESS: [Brightness; 7] = [
    Brightness::Miao,
    Brightness::Wang,
    Brightness::De,
    Brightness::Li,
    Brightness::Ping,
    Brightness::Bu,
    Brightness::Xian,
];

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }

    /// Strength score, 7 for 庙 down to 1 for 陷.
    pub const fn score(self) -> u8 {
        match self {
            Self::Miao => 7,
            Self::Wang => 6,
            Self::De => 5,
            Self::Li => 4,
            Self::Ping => 3,
            Self::Bu => 2,
            Self::Xian => 1,
        }
    }

    /// 庙, 旺 and 得 count as bright.
    pub const fn is_bright(self) -> bool {
        self.score() >= 5
    }
}

/// Coarse star classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarCategory {
    /// The 14 main stars (十四主星).
    Main,
    /// Lucky, wealth and malefic auxiliaries (六吉, 禄马, 六煞).
    Auxiliary,
    /// Minor stars; optional in a chart.
    Minor,
}

impl StarCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "主星",
            Self::Auxiliary => "辅星",
            Self::Minor => "杂曜",
        }
    }
}

/// Traditional star families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarGroup {
    NorthDipper,
    SouthDipper,
    Central,
    SixLucky,
    LuMa,
    SixMalefic,
    Punishment,
    Romance,
}

impl StarGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthDipper => "北斗",
            Self::SouthDipper => "南斗",
            Self::Central => "中天",
            Self::SixLucky => "六吉",
            Self::LuMa => "禄马",
            Self::SixMalefic => "六煞",
            Self::Punishment => "刑曜",
            Self::Romance => "桃花",
        }
    }
}

/// Number of stars the engine places.
pub const STAR_COUNT: usize = 33;

/// Every star the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Star {
    // 14 main stars, 紫微 group then 天府 group
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    // auxiliaries
    ZuoFu,
    YouBi,
    WenChang,
    WenQu,
    TianKui,
    TianYue,
    LuCun,
    TianMa,
    QingYang,
    TuoLuo,
    HuoXing,
    LingXing,
    DiKong,
    DiJie,
    // minor
    TianXing,
    HongLuan,
    TianXi,
    TianYao,
    XianChi,
}

/// All stars in definition order.
pub const ALL_STARS: [Star; STAR_COUNT] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
    Star::ZuoFu,
    Star::YouBi,
    Star::WenChang,
    Star::WenQu,
    Star::TianKui,
    Star::TianYue,
    Star::LuCun,
    Star::TianMa,
    Star::QingYang,
    Star::TuoLuo,
    Star::HuoXing,
    Star::LingXing,
    Star::DiKong,
    Star::DiJie,
    Star::TianXing,
    Star::HongLuan,
    Star::TianXi,
    Star::TianYao,
    Star::XianChi,
];

/// The 14 main stars.
pub const MAIN_STARS: [Star; 14] = [
    Star::ZiWei,
    Star::TianJi,
    Star::TaiYang,
    Star::WuQu,
    Star::TianTong,
    Star::LianZhen,
    Star::TianFu,
    Star::TaiYin,
    Star::TanLang,
    Star::JuMen,
    Star::TianXiang,
    Star::TianLiang,
    Star::QiSha,
    Star::PoJun,
];

impl Star {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天机",
            Self::TaiYang => "太阳",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉贞",
            Self::TianFu => "天府",
            Self::TaiYin => "太阴",
            Self::TanLang => "贪狼",
            Self::JuMen => "巨门",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七杀",
            Self::PoJun => "破军",
            Self::ZuoFu => "左辅",
            Self::YouBi => "右弼",
            Self::WenChang => "文昌",
            Self::WenQu => "文曲",
            Self::TianKui => "天魁",
            Self::TianYue => "天钺",
            Self::LuCun => "禄存",
            Self::TianMa => "天马",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀罗",
            Self::HuoXing => "火星",
            Self::LingXing => "铃星",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::TianXing => "天刑",
            Self::HongLuan => "红鸾",
            Self::TianXi => "天喜",
            Self::TianYao => "天姚",
            Self::XianChi => "咸池",
        }
    }

    /// 0-based position in [`ALL_STARS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < STAR_COUNT {
            Some(ALL_STARS[index as usize])
        } else {
            None
        }
    }

    /// Look up a star by its Chinese name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STARS.iter().copied().find(|s| s.name() == name)
    }

    /// Static definition of this star.
    pub fn definition(self) -> &'static StarDefinition {
        &STAR_DEFINITIONS[self.index() as usize]
    }

    pub fn category(self) -> StarCategory {
        self.definition().category
    }

    pub fn is_main(self) -> bool {
        matches!(self.category(), StarCategory::Main)
    }
}

/// Static per-star data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarDefinition {
    pub star: Star,
    pub category: StarCategory,
    pub group: StarGroup,
    pub element: Element,
    pub polarity: Polarity,
    /// Brightness by ring offset from 子.
    pub brightness: [Brightness; 12],
}

impl StarDefinition {
    /// Brightness when placed at `branch`.
    pub const fn brightness_at(&self, branch: Branch) -> Brightness {
        self.brightness[branch.index() as usize]
    }
}

/// Brightness of `star` when placed at `branch`.
pub fn brightness(star: Star, branch: Branch) -> Brightness {
    star.definition().brightness_at(branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_BRANCHES;

    #[test]
    fn definitions_align_with_enum_order() {
        for (i, star) in ALL_STARS.iter().enumerate() {
            assert_eq!(star.index() as usize, i);
            assert_eq!(STAR_DEFINITIONS[i].star, *star, "row {i}");
        }
    }

    #[test]
    fn category_counts() {
        let count = |c: StarCategory| ALL_STARS.iter().filter(|s| s.category() == c).count();
        assert_eq!(count(StarCategory::Main), 14);
        assert_eq!(count(StarCategory::Auxiliary), 14);
        assert_eq!(count(StarCategory::Minor), 5);
        assert!(MAIN_STARS.iter().all(|s| s.is_main()));
    }

    #[test]
    fn brightness_samples() {
        assert_eq!(brightness(Star::ZiWei, Branch::Wu), Brightness::Miao);
        assert_eq!(brightness(Star::TaiYang, Branch::Zi), Brightness::Xian);
        assert_eq!(brightness(Star::TaiYang, Branch::Wu), Brightness::Miao);
        assert_eq!(brightness(Star::TaiYin, Branch::Zi), Brightness::Miao);
        assert_eq!(brightness(Star::TaiYin, Branch::Wu), Brightness::Xian);
        assert_eq!(brightness(Star::DiKong, Branch::Yin), Brightness::Xian);
        assert_eq!(brightness(Star::TianFu, Branch::Hai), Brightness::Miao);
    }

    #[test]
    fn same_palace_different_brightness() {
        // 紫微 and 破军 both at 子 read their own rows.
        assert_eq!(brightness(Star::ZiWei, Branch::Zi), Brightness::Miao);
        assert_eq!(brightness(Star::PoJun, Branch::Zi), Brightness::De);
    }

    #[test]
    fn lookup_is_total() {
        for star in ALL_STARS {
            for branch in ALL_BRANCHES {
                let b = brightness(star, branch);
                assert!(ALL_BRIGHTNESS.contains(&b));
            }
        }
    }

    #[test]
    fn attribute_rows() {
        let def = |s: Star| &STAR_DEFINITIONS[s.index() as usize];
        assert_eq!(def(Star::TanLang).element, Element::Water);
        assert_eq!(def(Star::JuMen).element, Element::Earth);
        assert_eq!(def(Star::ZiWei).polarity, Polarity::Yang);
        assert_eq!(def(Star::QiSha).polarity, Polarity::Yang);
        assert_eq!(def(Star::DiJie).polarity, Polarity::Yin);
        assert_eq!(def(Star::TianJi).group, StarGroup::NorthDipper);
    }

    #[test]
    fn name_lookup() {
        assert_eq!(Star::from_name("天府"), Some(Star::TianFu));
        assert_eq!(Star::from_name("咸池"), Some(Star::XianChi));
        assert_eq!(Star::from_name("太白"), None);
        assert_eq!(Star::from_index(33), None);
    }

    #[test]
    fn brightness_scores_descend() {
        for pair in ALL_BRIGHTNESS.windows(2) {
            assert!(pair[0].score() > pair[1].score());
        }
        assert!(Brightness::De.is_bright());
        assert!(!Brightness::Li.is_bright());
    }
}
