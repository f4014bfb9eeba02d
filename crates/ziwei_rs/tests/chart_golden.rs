//! Golden charts checked against hand-worked traditional layouts.

use ziwei_rs::*;

/// 甲子 year, 正月初一, 子 hour, male. Solar date 1984-02-02.
fn jiazi_new_year() -> ChartResult {
    let input = BirthInput::new(1984, 1, 1, 0, Gender::Male).with_solar(SolarDate::new(1984, 2, 2));
    chart(&input).unwrap()
}

#[test]
fn jiazi_header() {
    let c = jiazi_new_year();
    assert_eq!(c.lunar_date, "甲子年 正月初一");
    assert_eq!(c.pillars.year.to_string(), "甲子");
    assert_eq!(c.pillars.month.to_string(), "丙寅");
    assert_eq!(c.pillars.day.map(|g| g.to_string()).as_deref(), Some("丙寅"));
    assert_eq!(c.pillars.hour.map(|g| g.to_string()).as_deref(), Some("戊子"));
    assert_eq!(c.bureau, Bureau::Fire6);
    assert_eq!(c.life_palace, Branch::Yin);
    assert_eq!(c.body_palace, Branch::Yin);
    assert_eq!(c.lai_yin_palace, Branch::Xu);
    assert_eq!(c.life_lord, Star::LuCun);
    assert_eq!(c.body_lord, Star::HuoXing);
    assert_eq!(c.dou_jun, Branch::Yin);
    assert_eq!(c.innate_dou_jun, Branch::Yin);
    assert_eq!(c.decade_direction, Direction::Forward);
}

#[test]
fn jiazi_main_stars() {
    let c = jiazi_new_year();
    let expected = [
        (Star::ZiWei, Branch::You),
        (Star::TianJi, Branch::Shen),
        (Star::TaiYang, Branch::Wu),
        (Star::WuQu, Branch::Si),
        (Star::TianTong, Branch::Chen),
        (Star::LianZhen, Branch::Chou),
        (Star::TianFu, Branch::Wei),
        (Star::TaiYin, Branch::Shen),
        (Star::TanLang, Branch::You),
        (Star::JuMen, Branch::Xu),
        (Star::TianXiang, Branch::Hai),
        (Star::TianLiang, Branch::Zi),
        (Star::QiSha, Branch::Chou),
        (Star::PoJun, Branch::Si),
    ];
    for (star, branch) in expected {
        let (palace, _) = c.find_star(star).unwrap();
        assert_eq!(palace.branch, branch, "{}", star.name());
    }
    // Empty life palace.
    assert_eq!(c.life().main_stars().count(), 0);
}

#[test]
fn jiazi_palace_headers() {
    let c = jiazi_new_year();
    assert_eq!(c.life().label(), "丙寅 命宫");
    assert_eq!(c.palace(Branch::Chou).label(), "丁丑 兄弟");
    assert_eq!(c.palace(Branch::Zi).label(), "丙子 夫妻");
    assert_eq!(c.palace(Branch::Xu).stem, Stem::Jia);
    assert!(c.palace(Branch::Xu).is_lai_yin);
}

#[test]
fn jiazi_birth_transformations() {
    let c = jiazi_new_year();
    let located: Vec<_> = c.sihua.iter().map(|b| (b.mark, b.star, b.branch)).collect();
    assert_eq!(
        located,
        vec![
            (Transformation::Lu, Star::LianZhen, Some(Branch::Chou)),
            (Transformation::Quan, Star::PoJun, Some(Branch::Si)),
            (Transformation::Ke, Star::WuQu, Some(Branch::Si)),
            (Transformation::Ji, Star::TaiYang, Some(Branch::Wu)),
        ]
    );
    let (_, tai_yang) = c.find_star(Star::TaiYang).unwrap();
    assert!(tai_yang.has_mark(Transformation::Ji));
}

#[test]
fn jiazi_decades() {
    let c = jiazi_new_year();
    assert_eq!(c.decades[0].branch, Branch::Yin);
    assert_eq!((c.decades[0].start_age, c.decades[0].end_age), (6, 15));
    assert_eq!(c.decades[1].branch, Branch::Mao);
    assert_eq!(c.decade_for_age(41).map(|d| d.branch), Some(Branch::Si));
}

#[test]
fn jiazi_reference_year() {
    let input = BirthInput::new(1984, 1, 1, 0, Gender::Male);
    let c = chart_with_config(&input, &ChartConfig::default().with_reference_year(2024)).unwrap();
    let annual: Vec<_> = c.palaces.iter().filter_map(|p| p.annual).collect();
    assert_eq!(annual.len(), 1);
    assert_eq!(annual[0].branch, Branch::Chen);
    assert_eq!(annual[0].nominal_age, 41);
    assert!(c.palace(Branch::Yin).is_minor_limit);
    assert_eq!(c.palaces.iter().filter(|p| p.is_minor_limit).count(), 1);
}

#[test]
fn ziwei_at_chou() {
    // 庚午 year, 六月十五, 午 hour: 己丑 life palace, 火六局, 紫微 丑 / 天府 卯.
    let input = BirthInput::new(1990, 6, 15, 12, Gender::Female);
    let c = chart(&input).unwrap();
    assert_eq!(c.life_palace, Branch::Chou);
    assert_eq!(c.body_palace, Branch::Chou);
    assert_eq!(c.life().stem, Stem::Ji);
    assert_eq!(c.bureau, Bureau::Fire6);
    assert_eq!(c.find_star(Star::ZiWei).map(|(p, _)| p.branch), Some(Branch::Chou));
    assert_eq!(c.find_star(Star::TianFu).map(|(p, _)| p.branch), Some(Branch::Mao));
    // Yang year, female: backward.
    assert_eq!(c.decade_direction, Direction::Backward);
    assert_eq!(c.decades[1].branch, Branch::Zi);
    assert_eq!(c.dou_jun, Branch::Chou);
    assert_eq!(c.innate_dou_jun, Branch::Wei);
}

#[test]
fn jiazi_luck_info() {
    let input = BirthInput::new(1984, 1, 1, 0, Gender::Male);
    let info = luck_info(&input, 2024).unwrap();
    assert_eq!(info.nominal_age, 41);
    assert_eq!(info.decade.map(|d| (d.order, d.branch)), Some((4, Branch::Si)));
    assert_eq!(info.annual.branch, Branch::Chen);
    assert_eq!(info.minor_limit, Branch::Yin);
}
