//! Heavenly stems, earthly branches and the sexagenary (干支) cycle.
//!
//! Stems form a ring of 10 and branches a ring of 12. Every offset on either
//! ring goes through [`Stem::offset`] / [`Branch::offset`], which wrap with
//! `rem_euclid`, so callers never do their own `% 12`.
//!
//! Pillar rules:
//! - year: epoch 4 CE = 甲子
//! - month: five-tiger rule (五虎遁), first lunar month = 寅
//! - day: counted from the Julian Day Number, JDN 2451545 = 戊午
//! - hour: five-rat rule (五鼠遁), 23:00-00:59 = 子
//!
//! Clean-room implementation from the traditional Chinese calendar rules.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;

/// The five phases (五行).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (木火土金水).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name of the element.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

/// Yin/yang polarity (阴阳).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese name of the polarity.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    /// Polarity of an even (yang) or odd (yin) ring index.
    const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// Walking direction around the branch ring.
///
/// Forward follows the branch order 子→丑→寅 (clockwise on the printed chart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Chinese name (顺行/逆行).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based cycle index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem from a 0-based index. Returns `None` for index >= 10.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem `steps` positions along the ring (negative walks backward).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }

    /// Forward distance from `self` to `other` (0..=9).
    pub const fn steps_to(self, other: Self) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(10) as u8
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Element of the stem pair combination (天干五合).
    ///
    /// 甲己→土, 乙庚→金, 丙辛→水, 丁壬→木, 戊癸→火.
    pub const fn combined_element(self) -> Element {
        match self.index() % 5 {
            0 => Element::Earth,
            1 => Element::Metal,
            2 => Element::Water,
            3 => Element::Wood,
            _ => Element::Fire,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

/// The 12 earthly branches (地支), one per palace slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ring order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based ring index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch from a 0-based index. Returns `None` for index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch from a 0-based index, as a checked palace index.
    pub const fn try_from_index(index: u8) -> Result<Self, ZiweiError> {
        match Self::from_index(index) {
            Some(b) => Ok(b),
            None => Err(ZiweiError::InvalidPalaceIndex(index)),
        }
    }

    /// Branch `steps` positions along the ring (negative walks backward).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_BRANCHES[(self.index() as i32 + steps).rem_euclid(12) as usize]
    }

    /// Branch reached after `steps` moves in `direction`.
    pub const fn walk(self, direction: Direction, steps: i32) -> Self {
        self.offset(direction.sign() * steps)
    }

    /// Forward distance from `self` to `other` (0..=11).
    pub const fn steps_to(self, other: Self) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }

    /// The branch six positions away (对宫).
    pub const fn opposite(self) -> Self {
        self.offset(6)
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// The three-harmony group (三合) containing this branch.
    pub const fn triad(self) -> Triad {
        match self.index() % 4 {
            0 => Triad::ShenZiChen,
            1 => Triad::SiYouChou,
            2 => Triad::YinWuXu,
            _ => Triad::HaiMaoWei,
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

/// Three-harmony branch groups (三合局).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Triad {
    /// 申子辰, water frame.
    ShenZiChen,
    /// 亥卯未, wood frame.
    HaiMaoWei,
    /// 寅午戌, fire frame.
    YinWuXu,
    /// 巳酉丑, metal frame.
    SiYouChou,
}

impl Triad {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShenZiChen => "申子辰",
            Self::HaiMaoWei => "亥卯未",
            Self::YinWuXu => "寅午戌",
            Self::SiYouChou => "巳酉丑",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::ShenZiChen => Element::Water,
            Self::HaiMaoWei => Element::Wood,
            Self::YinWuXu => Element::Fire,
            Self::SiYouChou => Element::Metal,
        }
    }

    /// The three member branches, in the order of the traditional name.
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::ShenZiChen => [Branch::Shen, Branch::Zi, Branch::Chen],
            Self::HaiMaoWei => [Branch::Hai, Branch::Mao, Branch::Wei],
            Self::YinWuXu => [Branch::Yin, Branch::Wu, Branch::Xu],
            Self::SiYouChou => [Branch::Si, Branch::You, Branch::Chou],
        }
    }
}

/// A stem-branch pair of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanZhi {
    /// Pair a stem with a branch. Returns `None` when their polarities differ,
    /// since such pairs never occur in the 60-cycle.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair at position `index` of the 60-cycle (甲子 = 0); wraps modulo 60.
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: ALL_STEMS[(i % 10) as usize],
            branch: ALL_BRANCHES[(i % 12) as usize],
        }
    }

    /// Position in the 60-cycle (甲子 = 0 .. 癸亥 = 59).
    pub const fn cycle_index(self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Two-character name, e.g. "甲子".
    pub fn name(self) -> String {
        self.to_string()
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// A proleptic Gregorian civil date, used only for the day pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl SolarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Whether the month/day combination exists in the Gregorian calendar.
    pub const fn is_valid(self) -> bool {
        if self.month < 1 || self.month > 12 || self.day < 1 {
            return false;
        }
        self.day <= days_in_month(self.year, self.month)
    }

    /// Integer Julian Day Number of this date.
    pub const fn jdn(self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Integer Julian Day Number for a proleptic Gregorian date
/// (Fliegel & Van Flandern, 1968).
pub const fn julian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Year pillar. Valid for any year; 1984 = 甲子.
pub const fn year_ganzhi(year: i32) -> GanZhi {
    GanZhi::from_cycle_index((year as i64 - 4).rem_euclid(60) as u8)
}

/// Stem of the 寅 month for a given year stem (五虎遁).
pub const fn tiger_stem(year_stem: Stem) -> Stem {
    match year_stem.index() % 5 {
        0 => Stem::Bing,
        1 => Stem::Wu,
        2 => Stem::Geng,
        3 => Stem::Ren,
        _ => Stem::Jia,
    }
}

/// Month pillar for lunar month 1..=12 (month 1 = 寅).
pub const fn month_ganzhi(year_stem: Stem, lunar_month: u8) -> GanZhi {
    let steps = lunar_month as i32 - 1;
    GanZhi {
        stem: tiger_stem(year_stem).offset(steps),
        branch: Branch::Yin.offset(steps),
    }
}

/// Day pillar from an integer Julian Day Number.
pub const fn day_ganzhi(jdn: i64) -> GanZhi {
    GanZhi::from_cycle_index((jdn + 49).rem_euclid(60) as u8)
}

/// Branch of the two-hour period containing a clock hour 0..=23.
///
/// 23:00 belongs to 子 together with 00:00.
pub const fn hour_branch(clock_hour: u8) -> Branch {
    ALL_BRANCHES[((clock_hour as usize + 1) / 2) % 12]
}

/// Stem of the 子 hour for a given day stem (五鼠遁).
pub const fn rat_stem(day_stem: Stem) -> Stem {
    match day_stem.index() % 5 {
        0 => Stem::Jia,
        1 => Stem::Bing,
        2 => Stem::Wu,
        3 => Stem::Geng,
        _ => Stem::Ren,
    }
}

/// Hour pillar from the day stem and the hour branch.
pub const fn hour_ganzhi(day_stem: Stem, hour: Branch) -> GanZhi {
    GanZhi {
        stem: rat_stem(day_stem).offset(hour.index() as i32),
        branch: hour,
    }
}

/// 纳音 elements of the 30 consecutive pairs of the 60-cycle.
const NAYIN: [Element; 30] = [
    Element::Metal, // 甲子乙丑 海中金
    Element::Fire,  // 丙寅丁卯 炉中火
    Element::Wood,  // 戊辰己巳 大林木
    Element::Earth, // 庚午辛未 路旁土
    Element::Metal, // 壬申癸酉 剑锋金
    Element::Fire,  // 甲戌乙亥 山头火
    Element::Water, // 丙子丁丑 涧下水
    Element::Earth, // 戊寅己卯 城头土
    Element::Metal, // 庚辰辛巳 白蜡金
    Element::Wood,  // 壬午癸未 杨柳木
    Element::Water, // 甲申乙酉 泉中水
    Element::Earth, // 丙戌丁亥 屋上土
    Element::Fire,  // 戊子己丑 霹雳火
    Element::Wood,  // 庚寅辛卯 松柏木
    Element::Water, // 壬辰癸巳 长流水
    Element::Metal, // 甲午乙未 沙中金
    Element::Fire,  // 丙申丁酉 山下火
    Element::Wood,  // 戊戌己亥 平地木
    Element::Earth, // 庚子辛丑 壁上土
    Element::Metal, // 壬寅癸卯 金箔金
    Element::Fire,  // 甲辰乙巳 覆灯火
    Element::Water, // 丙午丁未 天河水
    Element::Earth, // 戊申己酉 大驿土
    Element::Metal, // 庚戌辛亥 钗钏金
    Element::Wood,  // 壬子癸丑 桑柘木
    Element::Water, // 甲寅乙卯 大溪水
    Element::Earth, // 丙辰丁巳 沙中土
    Element::Fire,  // 戊午己未 天上火
    Element::Wood,  // 庚申辛酉 石榴木
    Element::Water, // 壬戌癸亥 大海水
];

/// 纳音 element of a sexagenary pair.
pub const fn nayin_element(gz: GanZhi) -> Element {
    NAYIN[(gz.cycle_index() / 2) as usize]
}

/// The four pillars (四柱) of a birth.
///
/// Day and hour pillars need the solar civil date; they are `None` when the
/// calendar collaborator supplied only the lunar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: Option<GanZhi>,
    pub hour: Option<GanZhi>,
}

/// Compute the four pillars from lunar year/month, clock hour and an optional
/// solar date for the day pillar.
pub const fn four_pillars(
    lunar_year: i32,
    lunar_month: u8,
    clock_hour: u8,
    solar: Option<SolarDate>,
) -> FourPillars {
    let year = year_ganzhi(lunar_year);
    let month = month_ganzhi(year.stem, lunar_month);
    let (day, hour) = match solar {
        Some(date) => {
            let day = day_ganzhi(date.jdn());
            (Some(day), Some(hour_ganzhi(day.stem, hour_branch(clock_hour))))
        }
        None => (None, None),
    };
    FourPillars {
        year,
        month,
        day,
        hour,
    }
}
