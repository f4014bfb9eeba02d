//! Star placement: the 紫微 anchor, the two main-star walks, and the
//! auxiliary/minor star rules.
//!
//! The 紫微 anchor comes from a 30×5 table of lunar day × bureau built on the
//! borrow/give rule. With quotient `q = ceil(day / n)` and borrowed days
//! `r = q·n - day`, count `q - 1` steps forward from 寅, then move forward `r`
//! steps when `r` is even or backward `r` steps when it is odd.
//!
//! The 14 main stars hang off two leaders. The 紫微 group walks backward from
//! 紫微 and the 天府 group walks forward from 天府, which mirrors 紫微 across
//! the 寅申 axis. The two sequences keep their own direction and offsets.
//!
//! Auxiliary and minor stars never look at the anchor. Each is keyed by the
//! lunar month, the hour branch, the year stem or the year branch.

use crate::bureau::Bureau;
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Direction, GanZhi, Stem, Triad};
use crate::star::{STAR_COUNT, Star, StarCategory};

/// 紫微 position, rows lunar day 1..=30, columns bureau 2..=6.
const ZIWEI_TABLE: [[Branch; 5]; 30] = {
    use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
    [
        [Chou, Chen, Hai, Wu, You], // 1
        [Yin, Chou, Chen, Hai, Wu], // 2
        [Yin, Yin, Chou, Chen, Hai], // 3
        [Mao, Si, Yin, Chou, Chen], // 4
        [Mao, Yin, Zi, Yin, Chou], // 5
        [Chen, Mao, Si, Wei, Yin], // 6
        [Chen, Wu, Yin, Zi, Xu], // 7
        [Si, Mao, Mao, Si, Wei], // 8
        [Si, Chen, Chou, Yin, Zi], // 9
        [Wu, Wei, Wu, Mao, Si], // 10
        [Wu, Chen, Mao, Shen, Yin], // 11
        [Wei, Si, Chen, Chou, Mao], // 12
        [Wei, Shen, Yin, Wu, Hai], // 13
        [Shen, Si, Wei, Mao, Shen], // 14
        [Shen, Wu, Chen, Chen, Chou], // 15
        [You, You, Si, You, Wu], // 16
        [You, Wu, Mao, Yin, Mao], // 17
        [Xu, Wei, Shen, Wei, Chen], // 18
        [Xu, Xu, Si, Chen, Zi], // 19
        [Hai, Wei, Wu, Si, You], // 20
        [Hai, Shen, Chen, Xu, Yin], // 21
        [Zi, Hai, You, Mao, Wei], // 22
        [Zi, Shen, Wu, Shen, Chen], // 23
        [Chou, You, Wei, Si, Si], // 24
        [Chou, Zi, Si, Wu, Chou], // 25
        [Yin, You, Xu, Hai, Xu], // 26
        [Yin, Xu, Wei, Chen, Mao], // 27
        [Mao, Chou, Shen, You, Shen], // 28
        [Mao, Xu, Wu, Wu, Si], // 29
        [Chen, Hai, Hai, Wei, Wu], // 30
    ]
};

/// 紫微 position for a bureau and lunar day 1..=30.
pub const fn ziwei_anchor(bureau: Bureau, lunar_day: u8) -> Result<Branch, ZiweiError> {
    if lunar_day < 1 || lunar_day > 30 {
        return Err(ZiweiError::UnresolvableAnchor {
            bureau: bureau.number(),
            day: lunar_day,
        });
    }
    Ok(ZIWEI_TABLE[(lunar_day - 1) as usize][bureau.index() as usize])
}

/// Same as [`ziwei_anchor`], taking a raw bureau number.
pub fn ziwei_anchor_for_number(bureau_number: u8, lunar_day: u8) -> Result<Branch, ZiweiError> {
    let bureau = Bureau::from_number(bureau_number)?;
    ziwei_anchor(bureau, lunar_day)
}

/// 天府 position: the mirror of 紫微 across the 寅申 axis.
pub const fn tianfu_position(ziwei: Branch) -> Branch {
    Branch::Chen.offset(-(ziwei.index() as i32))
}

/// A leader star and its followers, walking one way around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarWalk {
    pub direction: Direction,
    /// `(star, steps from the leader)`; the leader itself has 0 steps.
    pub members: &'static [(Star, u8)],
}

impl StarWalk {
    /// Positions of every member when the leader stands at `start`.
    pub fn place(&self, start: Branch) -> impl Iterator<Item = (Star, Branch)> + '_ {
        let direction = self.direction;
        self.members
            .iter()
            .map(move |&(star, steps)| (star, start.walk(direction, steps as i32)))
    }
}

/// 紫微 天机 _ 太阳 武曲 天同 _ _ 廉贞, walking backward.
pub const ZIWEI_WALK: StarWalk = StarWalk {
    direction: Direction::Backward,
    members: &[
        (Star::ZiWei, 0),
        (Star::TianJi, 1),
        (Star::TaiYang, 3),
        (Star::WuQu, 4),
        (Star::TianTong, 5),
        (Star::LianZhen, 8),
    ],
};

/// 天府 太阴 贪狼 巨门 天相 天梁 七杀 _ _ _ 破军, walking forward.
pub const TIANFU_WALK: StarWalk = StarWalk {
    direction: Direction::Forward,
    members: &[
        (Star::TianFu, 0),
        (Star::TaiYin, 1),
        (Star::TanLang, 2),
        (Star::JuMen, 3),
        (Star::TianXiang, 4),
        (Star::TianLiang, 5),
        (Star::QiSha, 6),
        (Star::PoJun, 10),
    ],
};

/// Positions of the 14 main stars.
pub fn main_star_positions(
    bureau: Bureau,
    lunar_day: u8,
) -> Result<[(Star, Branch); 14], ZiweiError> {
    let ziwei = ziwei_anchor(bureau, lunar_day)?;
    let tianfu = tianfu_position(ziwei);

    let mut out = [(Star::ZiWei, ziwei); 14];
    for (slot, placed) in out
        .iter_mut()
        .zip(ZIWEI_WALK.place(ziwei).chain(TIANFU_WALK.place(tianfu)))
    {
        *slot = placed;
    }
    Ok(out)
}

/// 左辅 右弼 天姚 天刑, counted from the first lunar month.
pub const fn month_stars(lunar_month: u8) -> [(Star, Branch); 4] {
    let m = lunar_month as i32 - 1;
    [
        (Star::ZuoFu, Branch::Chen.offset(m)),
        (Star::YouBi, Branch::Xu.offset(-m)),
        (Star::TianYao, Branch::Chou.offset(m)),
        (Star::TianXing, Branch::You.offset(m)),
    ]
}

/// 文昌 文曲 地空 地劫, counted from the 子 hour.
pub const fn hour_stars(hour: Branch) -> [(Star, Branch); 4] {
    let h = hour.index() as i32;
    [
        (Star::WenChang, Branch::Xu.offset(-h)),
        (Star::WenQu, Branch::Chen.offset(h)),
        (Star::DiKong, Branch::Hai.offset(-h)),
        (Star::DiJie, Branch::Hai.offset(h)),
    ]
}

/// 天魁 and 天钺 for a year stem.
pub const fn kui_yue(year_stem: Stem) -> (Branch, Branch) {
    match year_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => (Branch::Chou, Branch::Wei),
        Stem::Yi | Stem::Ji => (Branch::Zi, Branch::Shen),
        Stem::Bing | Stem::Ding => (Branch::Hai, Branch::You),
        Stem::Xin => (Branch::Wu, Branch::Yin),
        Stem::Ren | Stem::Gui => (Branch::Mao, Branch::Si),
    }
}

/// 禄存 for a year stem.
pub const fn lu_cun(year_stem: Stem) -> Branch {
    match year_stem {
        Stem::Jia => Branch::Yin,
        Stem::Yi => Branch::Mao,
        Stem::Bing | Stem::Wu => Branch::Si,
        Stem::Ding | Stem::Ji => Branch::Wu,
        Stem::Geng => Branch::Shen,
        Stem::Xin => Branch::You,
        Stem::Ren => Branch::Hai,
        Stem::Gui => Branch::Zi,
    }
}

/// 天魁 天钺 禄存 擎羊 陀罗. 擎羊 and 陀罗 flank 禄存.
pub const fn stem_stars(year_stem: Stem) -> [(Star, Branch); 5] {
    let (kui, yue) = kui_yue(year_stem);
    let lu = lu_cun(year_stem);
    [
        (Star::TianKui, kui),
        (Star::TianYue, yue),
        (Star::LuCun, lu),
        (Star::QingYang, lu.offset(1)),
        (Star::TuoLuo, lu.offset(-1)),
    ]
}

/// 天马: the branch clashing with the first member of the year's triad.
pub const fn tian_ma(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        Triad::ShenZiChen => Branch::Yin,
        Triad::HaiMaoWei => Branch::Si,
        Triad::YinWuXu => Branch::Shen,
        Triad::SiYouChou => Branch::Hai,
    }
}

/// 咸池 (桃花) for the year's triad.
pub const fn xian_chi(year_branch: Branch) -> Branch {
    match year_branch.triad() {
        Triad::ShenZiChen => Branch::You,
        Triad::SiYouChou => Branch::Wu,
        Triad::YinWuXu => Branch::Mao,
        Triad::HaiMaoWei => Branch::Zi,
    }
}

/// 天马 红鸾 天喜 咸池. 红鸾 counts back from 卯; 天喜 sits opposite.
pub const fn branch_stars(year_branch: Branch) -> [(Star, Branch); 4] {
    let hong_luan = Branch::Mao.offset(-(year_branch.index() as i32));
    [
        (Star::TianMa, tian_ma(year_branch)),
        (Star::HongLuan, hong_luan),
        (Star::TianXi, hong_luan.opposite()),
        (Star::XianChi, xian_chi(year_branch)),
    ]
}

/// 火星 and 铃星: a triad base from the year branch, then forward by hour.
pub const fn fire_bell_stars(year_branch: Branch, hour: Branch) -> [(Star, Branch); 2] {
    let (huo, ling) = match year_branch.triad() {
        Triad::YinWuXu => (Branch::Chou, Branch::Mao),
        Triad::ShenZiChen => (Branch::Yin, Branch::Xu),
        Triad::SiYouChou => (Branch::Mao, Branch::Xu),
        Triad::HaiMaoWei => (Branch::You, Branch::Xu),
    };
    let h = hour.index() as i32;
    [
        (Star::HuoXing, huo.offset(h)),
        (Star::LingXing, ling.offset(h)),
    ]
}

/// Birth data the non-anchor rules read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementContext {
    pub year: GanZhi,
    pub lunar_month: u8,
    pub hour: Branch,
}

/// Every auxiliary star, plus minor stars when `include_minor` is set.
pub fn auxiliary_star_positions(ctx: &PlacementContext, include_minor: bool) -> Vec<(Star, Branch)> {
    let month = month_stars(ctx.lunar_month);
    let hour = hour_stars(ctx.hour);
    let stem = stem_stars(ctx.year.stem);
    let branch = branch_stars(ctx.year.branch);
    let fire_bell = fire_bell_stars(ctx.year.branch, ctx.hour);

    month
        .into_iter()
        .chain(hour)
        .chain(stem)
        .chain(branch)
        .chain(fire_bell)
        .filter(|(star, _)| include_minor || star.category() != StarCategory::Minor)
        .collect()
}

/// Where each star sits. Stars not placed are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarLayout {
    positions: [Option<Branch>; STAR_COUNT],
}

impl Default for StarLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl StarLayout {
    pub const fn new() -> Self {
        Self {
            positions: [None; STAR_COUNT],
        }
    }

    /// Put `star` at `branch`, replacing any earlier position.
    pub fn place(&mut self, star: Star, branch: Branch) {
        self.positions[star.index() as usize] = Some(branch);
    }

    pub fn position(&self, star: Star) -> Option<Branch> {
        self.positions[star.index() as usize]
    }

    /// Stars at `branch`, main stars first.
    pub fn stars_at(&self, branch: Branch) -> impl Iterator<Item = Star> + '_ {
        self.placed()
            .filter(move |&(_, b)| b == branch)
            .map(|(star, _)| star)
    }

    /// Every placed star with its branch, in definition order.
    pub fn placed(&self) -> impl Iterator<Item = (Star, Branch)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, pos)| Some((Star::from_index(i as u8)?, (*pos)?)))
    }

    pub fn len(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Place every star for a chart.
pub fn place_stars(
    bureau: Bureau,
    lunar_day: u8,
    ctx: &PlacementContext,
    include_minor: bool,
) -> Result<StarLayout, ZiweiError> {
    let mut layout = StarLayout::new();
    for (star, branch) in main_star_positions(bureau, lunar_day)? {
        layout.place(star, branch);
    }
    for (star, branch) in auxiliary_star_positions(ctx, include_minor) {
        layout.place(star, branch);
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bureau::ALL_BUREAUS;
    use crate::ganzhi::{ALL_BRANCHES, ALL_STEMS, year_ganzhi};
    use crate::star::MAIN_STARS;

    /// The borrow/give rule, evaluated directly.
    fn borrow_rule(bureau: u8, day: u8) -> Branch {
        let (d, n) = (day as i32, bureau as i32);
        let q = (d + n - 1) / n;
        let r = q * n - d;
        let base = Branch::Yin.offset(q - 1);
        if r % 2 == 0 { base.offset(r) } else { base.offset(-r) }
    }

    #[test]
    fn table_matches_borrow_rule() {
        for bureau in ALL_BUREAUS {
            for day in 1..=30u8 {
                assert_eq!(
                    ziwei_anchor(bureau, day).unwrap(),
                    borrow_rule(bureau.number(), day),
                    "{} day {day}",
                    bureau.name()
                );
            }
        }
    }

    #[test]
    fn published_anchor_values() {
        assert_eq!(ziwei_anchor(Bureau::Water2, 1).unwrap(), Branch::Chou);
        assert_eq!(ziwei_anchor(Bureau::Water2, 2).unwrap(), Branch::Yin);
        assert_eq!(ziwei_anchor(Bureau::Wood3, 1).unwrap(), Branch::Chen);
        assert_eq!(ziwei_anchor(Bureau::Wood3, 2).unwrap(), Branch::Chou);
        assert_eq!(ziwei_anchor(Bureau::Metal4, 1).unwrap(), Branch::Hai);
        assert_eq!(ziwei_anchor(Bureau::Earth5, 1).unwrap(), Branch::Wu);
        assert_eq!(ziwei_anchor(Bureau::Fire6, 1).unwrap(), Branch::You);
        assert_eq!(ziwei_anchor(Bureau::Fire6, 30).unwrap(), Branch::Wu);
    }

    #[test]
    fn days_dividing_evenly_land_on_yin_plus_quotient() {
        for bureau in ALL_BUREAUS {
            let n = bureau.number();
            for q in 1..=(30 / n) {
                let expected = Branch::Yin.offset(q as i32 - 1);
                assert_eq!(ziwei_anchor(bureau, q * n).unwrap(), expected);
            }
        }
    }

    #[test]
    fn out_of_range_days_are_unresolvable() {
        assert_eq!(
            ziwei_anchor(Bureau::Wood3, 0),
            Err(ZiweiError::UnresolvableAnchor { bureau: 3, day: 0 })
        );
        assert_eq!(
            ziwei_anchor(Bureau::Fire6, 31),
            Err(ZiweiError::UnresolvableAnchor { bureau: 6, day: 31 })
        );
        assert_eq!(
            ziwei_anchor_for_number(9, 1),
            Err(ZiweiError::UnresolvableBureau(9))
        );
    }

    #[test]
    fn tianfu_mirrors_across_yin_shen() {
        assert_eq!(tianfu_position(Branch::Yin), Branch::Yin);
        assert_eq!(tianfu_position(Branch::Shen), Branch::Shen);
        assert_eq!(tianfu_position(Branch::Zi), Branch::Chen);
        assert_eq!(tianfu_position(Branch::Wu), Branch::Xu);
        for b in ALL_BRANCHES {
            assert_eq!(tianfu_position(tianfu_position(b)), b);
        }
    }

    #[test]
    fn ziwei_at_yin_layout() {
        // 木三局 day 3: 紫微 天府 together at 寅
        let pos = main_star_positions(Bureau::Wood3, 3).unwrap();
        let at = |s: Star| pos.iter().find(|(x, _)| *x == s).unwrap().1;
        assert_eq!(at(Star::ZiWei), Branch::Yin);
        assert_eq!(at(Star::TianJi), Branch::Chou);
        assert_eq!(at(Star::TaiYang), Branch::Hai);
        assert_eq!(at(Star::WuQu), Branch::Xu);
        assert_eq!(at(Star::TianTong), Branch::You);
        assert_eq!(at(Star::LianZhen), Branch::Wu);
        assert_eq!(at(Star::TianFu), Branch::Yin);
        assert_eq!(at(Star::TaiYin), Branch::Mao);
        assert_eq!(at(Star::TanLang), Branch::Chen);
        assert_eq!(at(Star::JuMen), Branch::Si);
        assert_eq!(at(Star::TianXiang), Branch::Wu);
        assert_eq!(at(Star::TianLiang), Branch::Wei);
        assert_eq!(at(Star::QiSha), Branch::Shen);
        assert_eq!(at(Star::PoJun), Branch::Zi);
    }

    #[test]
    fn main_stars_each_placed_once() {
        for bureau in ALL_BUREAUS {
            for day in 1..=30 {
                let pos = main_star_positions(bureau, day).unwrap();
                for star in MAIN_STARS {
                    assert_eq!(pos.iter().filter(|(s, _)| *s == star).count(), 1);
                }
            }
        }
    }

    #[test]
    fn walks_keep_their_own_direction() {
        assert_eq!(ZIWEI_WALK.direction, Direction::Backward);
        assert_eq!(TIANFU_WALK.direction, Direction::Forward);
        assert_eq!(ZIWEI_WALK.members.len() + TIANFU_WALK.members.len(), 14);
    }

    #[test]
    fn month_and_hour_rules() {
        let m = month_stars(1);
        assert_eq!(m[0], (Star::ZuoFu, Branch::Chen));
        assert_eq!(m[1], (Star::YouBi, Branch::Xu));
        let m = month_stars(12);
        assert_eq!(m[0], (Star::ZuoFu, Branch::Mao));
        assert_eq!(m[1], (Star::YouBi, Branch::Hai));
        assert_eq!(m[2], (Star::TianYao, Branch::Zi));

        let h = hour_stars(Branch::Zi);
        assert_eq!(h[0], (Star::WenChang, Branch::Xu));
        assert_eq!(h[1], (Star::WenQu, Branch::Chen));
        assert_eq!(h[2], (Star::DiKong, Branch::Hai));
        assert_eq!(h[3], (Star::DiJie, Branch::Hai));
        let h = hour_stars(Branch::Wu);
        assert_eq!(h[0], (Star::WenChang, Branch::Chen));
        assert_eq!(h[1], (Star::WenQu, Branch::Xu));
        assert_eq!(h[2], (Star::DiKong, Branch::Si));
        assert_eq!(h[3], (Star::DiJie, Branch::Si));
    }

    #[test]
    fn lu_cun_is_flanked() {
        for s in ALL_STEMS {
            let stars = stem_stars(s);
            let lu = stars[2].1;
            assert_eq!(stars[3].1, lu.offset(1), "擎羊 for {}", s.name());
            assert_eq!(stars[4].1, lu.offset(-1), "陀罗 for {}", s.name());
        }
        assert_eq!(lu_cun(Stem::Jia), Branch::Yin);
        assert_eq!(lu_cun(Stem::Gui), Branch::Zi);
        assert_eq!(kui_yue(Stem::Xin), (Branch::Wu, Branch::Yin));
    }

    #[test]
    fn year_branch_rules() {
        let b = branch_stars(Branch::Zi);
        assert_eq!(b[0], (Star::TianMa, Branch::Yin));
        assert_eq!(b[1], (Star::HongLuan, Branch::Mao));
        assert_eq!(b[2], (Star::TianXi, Branch::You));
        assert_eq!(b[3], (Star::XianChi, Branch::You));
        let b = branch_stars(Branch::Wu);
        assert_eq!(b[0], (Star::TianMa, Branch::Shen));
        assert_eq!(b[1], (Star::HongLuan, Branch::You));
        assert_eq!(b[3], (Star::XianChi, Branch::Mao));
    }

    #[test]
    fn fire_bell_rules() {
        assert_eq!(
            fire_bell_stars(Branch::Wu, Branch::Zi),
            [(Star::HuoXing, Branch::Chou), (Star::LingXing, Branch::Mao)]
        );
        assert_eq!(
            fire_bell_stars(Branch::Hai, Branch::Chou),
            [(Star::HuoXing, Branch::Xu), (Star::LingXing, Branch::Hai)]
        );
    }

    #[test]
    fn minor_stars_are_optional() {
        let ctx = PlacementContext {
            year: year_ganzhi(1990),
            lunar_month: 5,
            hour: Branch::Wu,
        };
        let with = auxiliary_star_positions(&ctx, true);
        let without = auxiliary_star_positions(&ctx, false);
        assert_eq!(with.len(), 19);
        assert_eq!(without.len(), 14);
        assert!(without.iter().all(|(s, _)| s.category() == StarCategory::Auxiliary));
    }

    #[test]
    fn layout_places_everything() {
        let ctx = PlacementContext {
            year: year_ganzhi(1984),
            lunar_month: 1,
            hour: Branch::Zi,
        };
        let layout = place_stars(Bureau::Fire6, 1, &ctx, true).unwrap();
        assert_eq!(layout.len(), STAR_COUNT);
        assert_eq!(layout.position(Star::ZiWei), Some(Branch::You));
        let total: usize = ALL_BRANCHES.iter().map(|&b| layout.stars_at(b).count()).sum();
        assert_eq!(total, STAR_COUNT);
    }
}
