//! Palace locator: life/body palaces, palace stems and palace names.
//!
//! Counting starts from 寅 for the first lunar month. The life palace then
//! counts the birth hour backward, the body palace counts it forward.
//! Names run counter-clockwise from the life palace (命宫 at the life branch,
//! 兄弟 one step back, and so on).

use serde::{Deserialize, Serialize};

use crate::ganzhi::{ALL_BRANCHES, Branch, Stem, tiger_stem};
use crate::star::Star;

/// The 12 palace names (十二宫).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalaceName {
    /// 命宫
    Life,
    /// 兄弟
    Siblings,
    /// 夫妻
    Spouse,
    /// 子女
    Children,
    /// 财帛
    Wealth,
    /// 疾厄
    Health,
    /// 迁移
    Travel,
    /// 交友
    Friends,
    /// 官禄
    Career,
    /// 田宅
    Property,
    /// 福德
    Fortune,
    /// 父母
    Parents,
}

/// Palace names in counting order from the life palace.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Life,
    PalaceName::Siblings,
    PalaceName::Spouse,
    PalaceName::Children,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Travel,
    PalaceName::Friends,
    PalaceName::Career,
    PalaceName::Property,
    PalaceName::Fortune,
    PalaceName::Parents,
];

impl PalaceName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "官禄",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// Short single-character label used for overlay names (大命, 流财 ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Life => "命",
            Self::Siblings => "兄",
            Self::Spouse => "夫",
            Self::Children => "子",
            Self::Wealth => "财",
            Self::Health => "疾",
            Self::Travel => "迁",
            Self::Friends => "友",
            Self::Career => "官",
            Self::Property => "田",
            Self::Fortune => "福",
            Self::Parents => "父",
        }
    }

    /// Position counted from the life palace (命宫 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Life palace (命宫) for lunar month 1..=12 and hour branch.
pub const fn life_palace(lunar_month: u8, hour: Branch) -> Branch {
    Branch::Yin.offset(lunar_month as i32 - 1 - hour.index() as i32)
}

/// Body palace (身宫) for lunar month 1..=12 and hour branch.
pub const fn body_palace(lunar_month: u8, hour: Branch) -> Branch {
    Branch::Yin.offset(lunar_month as i32 - 1 + hour.index() as i32)
}

/// 斗君 for lunar month 1..=12 and hour branch: start at 寅 as month 1,
/// step forward to the birth month, then forward by the hour.
///
/// Lands on the same branch as [`body_palace`].
pub const fn dou_jun(lunar_month: u8, hour: Branch) -> Branch {
    Branch::Yin.offset(lunar_month as i32 - 1 + hour.index() as i32)
}

/// 先天斗君: the life palace carried forward by the year branch.
pub const fn innate_dou_jun(life: Branch, year_branch: Branch) -> Branch {
    life.offset(year_branch.index() as i32)
}

/// Stem of the palace at `branch` (寅 takes the five-tiger stem).
///
/// 子 and 丑 sit ten steps after 寅 and so repeat the stems of 寅 and 卯.
pub const fn palace_stem(year_stem: Stem, branch: Branch) -> Stem {
    tiger_stem(year_stem).offset(Branch::Yin.steps_to(branch) as i32)
}

/// All 12 palace stems, indexed by branch.
pub fn palace_stems(year_stem: Stem) -> [Stem; 12] {
    ALL_BRANCHES.map(|b| palace_stem(year_stem, b))
}

/// Name of the palace at `branch` when the life palace is at `life`.
pub const fn palace_name(life: Branch, branch: Branch) -> PalaceName {
    ALL_PALACE_NAMES[branch.steps_to(life) as usize]
}

/// All 12 palace names, indexed by branch.
pub fn palace_names(life: Branch) -> [PalaceName; 12] {
    ALL_BRANCHES.map(|b| palace_name(life, b))
}

/// Branch holding the named palace.
pub const fn branch_of(life: Branch, name: PalaceName) -> Branch {
    life.offset(-(name.index() as i32))
}

/// 来因宫: the palace among 寅..亥 whose stem equals the year stem.
///
/// 寅..亥 carry ten consecutive stems, so exactly one matches.
pub const fn lai_yin_palace(year_stem: Stem) -> Branch {
    Branch::Yin.offset(tiger_stem(year_stem).steps_to(year_stem) as i32)
}

/// 命主, keyed by the life-palace branch.
pub const fn life_lord(life: Branch) -> Star {
    match life {
        Branch::Zi => Star::TanLang,
        Branch::Chou | Branch::Hai => Star::JuMen,
        Branch::Yin | Branch::Xu => Star::LuCun,
        Branch::Mao | Branch::You => Star::WenQu,
        Branch::Chen | Branch::Shen => Star::LianZhen,
        Branch::Si | Branch::Wei => Star::WuQu,
        Branch::Wu => Star::PoJun,
    }
}

/// 身主, keyed by the year branch.
pub const fn body_lord(year_branch: Branch) -> Star {
    match year_branch {
        Branch::Zi => Star::HuoXing,
        Branch::Wu => Star::LingXing,
        Branch::Chou | Branch::Wei => Star::TianXiang,
        Branch::Yin | Branch::Shen => Star::TianLiang,
        Branch::Mao | Branch::You => Star::TianTong,
        Branch::Chen | Branch::Xu => Star::WenChang,
        Branch::Si | Branch::Hai => Star::TianJi,
    }
}

/// Where the body palace sits relative to the life palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyLifeRelation {
    SamePalace,
    Opposite,
    Trine,
    Other,
}

impl BodyLifeRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SamePalace => "身命同宫",
            Self::Opposite => "身在对宫",
            Self::Trine => "身在三方",
            Self::Other => "其他",
        }
    }
}

pub const fn body_life_relation(life: Branch, body: Branch) -> BodyLifeRelation {
    match life.steps_to(body) {
        0 => BodyLifeRelation::SamePalace,
        6 => BodyLifeRelation::Opposite,
        4 | 8 => BodyLifeRelation::Trine,
        _ => BodyLifeRelation::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::{ALL_STEMS, hour_branch};

    #[test]
    fn dou_jun_positions() {
        assert_eq!(dou_jun(1, Branch::Zi), Branch::Yin);
        assert_eq!(dou_jun(12, Branch::Wei), Branch::Shen);
        assert_eq!(dou_jun(6, Branch::Wu), Branch::Chou);
        for m in 1..=12 {
            for h in ALL_BRANCHES {
                assert_eq!(dou_jun(m, h), body_palace(m, h));
            }
        }
    }

    #[test]
    fn innate_dou_jun_positions() {
        assert_eq!(innate_dou_jun(Branch::Zi, Branch::Wu), Branch::Wu);
        assert_eq!(innate_dou_jun(Branch::Yin, Branch::Zi), Branch::Yin);
        assert_eq!(innate_dou_jun(Branch::Chou, Branch::Wu), Branch::Wei);
        assert_eq!(innate_dou_jun(Branch::Hai, Branch::Hai), Branch::Xu);
    }

    #[test]
    fn first_month_zi_hour_is_yin() {
        assert_eq!(life_palace(1, Branch::Zi), Branch::Yin);
        assert_eq!(body_palace(1, Branch::Zi), Branch::Yin);
    }

    #[test]
    fn life_and_body_move_opposite_ways() {
        // 正月 丑时: 命 in 丑, 身 in 卯
        assert_eq!(life_palace(1, Branch::Chou), Branch::Chou);
        assert_eq!(body_palace(1, Branch::Chou), Branch::Mao);
        // 五月 午时: 命 in 子, 身 in 子
        assert_eq!(life_palace(5, Branch::Wu), Branch::Zi);
        assert_eq!(body_palace(5, Branch::Wu), Branch::Zi);
        // 十二月 亥时
        assert_eq!(life_palace(12, Branch::Hai), Branch::Yin);
        assert_eq!(body_palace(12, Branch::Hai), Branch::Zi);
    }

    #[test]
    fn clock_hour_23_counts_as_zi() {
        assert_eq!(life_palace(3, hour_branch(23)), life_palace(3, hour_branch(0)));
    }

    #[test]
    fn jia_year_palace_stems() {
        let stems = palace_stems(Stem::Jia);
        assert_eq!(stems[Branch::Yin.index() as usize], Stem::Bing);
        assert_eq!(stems[Branch::Mao.index() as usize], Stem::Ding);
        assert_eq!(stems[Branch::Hai.index() as usize], Stem::Yi);
        assert_eq!(stems[Branch::Zi.index() as usize], Stem::Bing);
        assert_eq!(stems[Branch::Chou.index() as usize], Stem::Ding);
    }

    #[test]
    fn names_run_counter_clockwise() {
        let names = palace_names(Branch::Yin);
        assert_eq!(names[Branch::Yin.index() as usize], PalaceName::Life);
        assert_eq!(names[Branch::Chou.index() as usize], PalaceName::Siblings);
        assert_eq!(names[Branch::Shen.index() as usize], PalaceName::Travel);
        assert_eq!(names[Branch::Mao.index() as usize], PalaceName::Parents);
        assert_eq!(branch_of(Branch::Yin, PalaceName::Career), Branch::Wu);
    }

    #[test]
    fn every_name_used_once() {
        let names = palace_names(Branch::Si);
        for n in ALL_PALACE_NAMES {
            assert_eq!(names.iter().filter(|&&x| x == n).count(), 1, "{}", n.name());
        }
    }

    #[test]
    fn lai_yin_samples() {
        assert_eq!(lai_yin_palace(Stem::Jia), Branch::Xu);
        assert_eq!(lai_yin_palace(Stem::Yi), Branch::You);
        assert_eq!(lai_yin_palace(Stem::Wu), Branch::Wu);
        // 壬 year: 子 also carries 壬 but is skipped
        assert_eq!(lai_yin_palace(Stem::Ren), Branch::Yin);
        assert_eq!(lai_yin_palace(Stem::Gui), Branch::Hai);
    }

    #[test]
    fn lai_yin_stem_matches_year() {
        for s in ALL_STEMS {
            let b = lai_yin_palace(s);
            assert_eq!(palace_stem(s, b), s);
            assert!(b != Branch::Zi && b != Branch::Chou);
        }
    }

    #[test]
    fn lords() {
        assert_eq!(life_lord(Branch::Zi), Star::TanLang);
        assert_eq!(life_lord(Branch::Wu), Star::PoJun);
        assert_eq!(life_lord(Branch::Xu), Star::LuCun);
        assert_eq!(body_lord(Branch::Zi), Star::HuoXing);
        assert_eq!(body_lord(Branch::Wu), Star::LingXing);
        assert_eq!(body_lord(Branch::Hai), Star::TianJi);
    }

    #[test]
    fn body_life_relations() {
        assert_eq!(
            body_life_relation(Branch::Zi, Branch::Zi),
            BodyLifeRelation::SamePalace
        );
        assert_eq!(
            body_life_relation(Branch::Zi, Branch::Wu),
            BodyLifeRelation::Opposite
        );
        assert_eq!(
            body_life_relation(Branch::Zi, Branch::Shen),
            BodyLifeRelation::Trine
        );
        assert_eq!(
            body_life_relation(Branch::Zi, Branch::Chou),
            BodyLifeRelation::Other
        );
    }
}
