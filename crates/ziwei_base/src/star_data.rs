//! Static star definitions.
//!
//! One row per [`Star`] in enum order. Brightness rows run 子 through 亥.
//! 天刑 is 庙 at 寅卯酉戌 and 平 elsewhere; 咸池 is 平 throughout.

use crate::ganzhi::{Element, Polarity};
use crate::star::{Brightness, STAR_COUNT, Star, StarCategory, StarDefinition, StarGroup};

const MIAO: Brightness = Brightness::Miao;
const WANG: Brightness = Brightness::Wang;
const DE: Brightness = Brightness::De;
const LI: Brightness = Brightness::Li;
const PING: Brightness = Brightness::Ping;
const BU: Brightness = Brightness::Bu;
const XIAN: Brightness = Brightness::Xian;

const fn def(
    star: Star,
    category: StarCategory,
    group: StarGroup,
    element: Element,
    polarity: Polarity,
    brightness: [Brightness; 12],
) -> StarDefinition {
    StarDefinition {
        star,
        category,
        group,
        element,
        polarity,
        brightness,
    }
}

/// Definitions indexed by [`Star::index`].
pub static STAR_DEFINITIONS: [StarDefinition; STAR_COUNT] = [
    // 紫微
    def(
        Star::ZiWei,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Earth,
        Polarity::Yang,
        [MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI, PING, BU],
    ),
    // 天机
    def(
        Star::TianJi,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Wood,
        Polarity::Yang,
        [PING, MIAO, WANG, DE, LI, BU, XIAN, PING, MIAO, WANG, DE, LI],
    ),
    // 太阳
    def(
        Star::TaiYang,
        StarCategory::Main,
        StarGroup::Central,
        Element::Fire,
        Polarity::Yang,
        [XIAN, BU, PING, LI, DE, WANG, MIAO, WANG, DE, LI, PING, BU],
    ),
    // 武曲
    def(
        Star::WuQu,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Metal,
        Polarity::Yin,
        [DE, LI, PING, BU, XIAN, MIAO, WANG, DE, LI, PING, BU, MIAO],
    ),
    // 天同
    def(
        Star::TianTong,
        StarCategory::Main,
        StarGroup::SouthDipper,
        Element::Water,
        Polarity::Yang,
        [LI, PING, BU, XIAN, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG],
    ),
    // 廉贞
    def(
        Star::LianZhen,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Fire,
        Polarity::Yin,
        [PING, BU, XIAN, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE],
    ),
    // 天府
    def(
        Star::TianFu,
        StarCategory::Main,
        StarGroup::SouthDipper,
        Element::Earth,
        Polarity::Yang,
        [MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO],
    ),
    // 太阴
    def(
        Star::TaiYin,
        StarCategory::Main,
        StarGroup::Central,
        Element::Water,
        Polarity::Yin,
        [MIAO, WANG, DE, LI, PING, BU, XIAN, BU, PING, LI, DE, WANG],
    ),
    // 贪狼
    def(
        Star::TanLang,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Water,
        Polarity::Yang,
        [WANG, DE, LI, PING, BU, XIAN, MIAO, WANG, DE, LI, PING, BU],
    ),
    // 巨门
    def(
        Star::JuMen,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Earth,
        Polarity::Yin,
        [BU, XIAN, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI],
    ),
    // 天相
    def(
        Star::TianXiang,
        StarCategory::Main,
        StarGroup::SouthDipper,
        Element::Water,
        Polarity::Yang,
        [DE, LI, PING, BU, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG],
    ),
    // 天梁
    def(
        Star::TianLiang,
        StarCategory::Main,
        StarGroup::SouthDipper,
        Element::Earth,
        Polarity::Yang,
        [PING, BU, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI],
    ),
    // 七杀
    def(
        Star::QiSha,
        StarCategory::Main,
        StarGroup::SouthDipper,
        Element::Metal,
        Polarity::Yang,
        [MIAO, WANG, DE, LI, PING, BU, XIAN, MIAO, WANG, DE, LI, PING],
    ),
    // 破军
    def(
        Star::PoJun,
        StarCategory::Main,
        StarGroup::NorthDipper,
        Element::Water,
        Polarity::Yin,
        [DE, LI, PING, BU, XIAN, MIAO, WANG, DE, LI, PING, BU, MIAO],
    ),
    // 左辅
    def(
        Star::ZuoFu,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Earth,
        Polarity::Yang,
        [MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO],
    ),
    // 右弼
    def(
        Star::YouBi,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Water,
        Polarity::Yin,
        [MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO],
    ),
    // 文昌
    def(
        Star::WenChang,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Metal,
        Polarity::Yang,
        [MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI, PING, BU],
    ),
    // 文曲
    def(
        Star::WenQu,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Water,
        Polarity::Yin,
        [PING, BU, MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI],
    ),
    // 天魁
    def(
        Star::TianKui,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Fire,
        Polarity::Yang,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
    // 天钺
    def(
        Star::TianYue,
        StarCategory::Auxiliary,
        StarGroup::SixLucky,
        Element::Fire,
        Polarity::Yin,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
    // 禄存
    def(
        Star::LuCun,
        StarCategory::Auxiliary,
        StarGroup::LuMa,
        Element::Earth,
        Polarity::Yang,
        [MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO, MIAO],
    ),
    // 天马
    def(
        Star::TianMa,
        StarCategory::Auxiliary,
        StarGroup::LuMa,
        Element::Fire,
        Polarity::Yang,
        [MIAO, WANG, DE, LI, PING, BU, MIAO, WANG, DE, LI, PING, BU],
    ),
    // 擎羊
    def(
        Star::QingYang,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Metal,
        Polarity::Yang,
        [XIAN, BU, PING, LI, DE, WANG, XIAN, BU, PING, LI, DE, WANG],
    ),
    // 陀罗
    def(
        Star::TuoLuo,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Metal,
        Polarity::Yin,
        [WANG, DE, LI, PING, BU, XIAN, WANG, DE, LI, PING, BU, XIAN],
    ),
    // 火星
    def(
        Star::HuoXing,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Fire,
        Polarity::Yang,
        [DE, MIAO, WANG, DE, LI, PING, BU, XIAN, BU, PING, LI, DE],
    ),
    // 铃星
    def(
        Star::LingXing,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Fire,
        Polarity::Yin,
        [BU, XIAN, BU, PING, LI, DE, MIAO, WANG, DE, MIAO, WANG, DE],
    ),
    // 地空
    def(
        Star::DiKong,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Fire,
        Polarity::Yang,
        [XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN],
    ),
    // 地劫
    def(
        Star::DiJie,
        StarCategory::Auxiliary,
        StarGroup::SixMalefic,
        Element::Fire,
        Polarity::Yin,
        [XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN, XIAN],
    ),
    // 天刑
    def(
        Star::TianXing,
        StarCategory::Minor,
        StarGroup::Punishment,
        Element::Fire,
        Polarity::Yang,
        [PING, PING, MIAO, MIAO, PING, PING, PING, PING, PING, MIAO, MIAO, PING],
    ),
    // 红鸾
    def(
        Star::HongLuan,
        StarCategory::Minor,
        StarGroup::Romance,
        Element::Water,
        Polarity::Yin,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
    // 天喜
    def(
        Star::TianXi,
        StarCategory::Minor,
        StarGroup::Romance,
        Element::Water,
        Polarity::Yang,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
    // 天姚
    def(
        Star::TianYao,
        StarCategory::Minor,
        StarGroup::Romance,
        Element::Water,
        Polarity::Yin,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
    // 咸池
    def(
        Star::XianChi,
        StarCategory::Minor,
        StarGroup::Romance,
        Element::Water,
        Polarity::Yin,
        [PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING, PING],
    ),
];
