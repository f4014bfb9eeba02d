//! Full chart assembly.
//!
//! `assemble` runs the engine pipeline in order: pillars, palaces, bureau,
//! star layout, transformations, luck cycles. The result is a plain value
//! that owns everything it reports.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace, warn};
use ziwei_base::{
    ALL_BRANCHES, AnnualInfo, BirthSihua, BodyLifeRelation, Branch, Brightness, Bureau,
    DecadePeriod, Direction, FlyingTransformation, FourPillars, PalaceName, PlacementContext,
    SelfTransformation, SihuaChart, Star, StarCategory, StarLayout, Stem, TaggedMark,
    Transformation, ZiweiError, annual_for_year, body_life_relation, body_lord, body_palace,
    brightness, bureau_for, decade_at, decade_direction, decade_for_age, decades, dou_jun,
    four_pillars, innate_dou_jun, lai_yin_palace, life_lord, life_palace, lunar_date_string,
    minor_limit, palace_names, palace_stems, place_stars, year_ganzhi, ziwei_anchor,
};

use crate::config::ChartConfig;
use crate::input::BirthInput;

/// One star instance inside a palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedStar {
    pub star: Star,
    pub category: StarCategory,
    pub brightness: Brightness,
    /// Birth-year, self and flying marks, each tagged with its channel.
    pub marks: Vec<TaggedMark>,
}

impl PlacedStar {
    fn new(star: Star, branch: Branch) -> Self {
        Self {
            star,
            category: star.category(),
            brightness: brightness(star, branch),
            marks: Vec::new(),
        }
    }

    pub fn has_mark(&self, mark: Transformation) -> bool {
        self.marks.iter().any(|m| m.mark == mark)
    }
}

/// One of the 12 palaces with everything placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palace {
    pub branch: Branch,
    pub stem: Stem,
    pub name: PalaceName,
    /// Main stars first, then auxiliary, then minor.
    pub stars: Vec<PlacedStar>,
    pub is_life: bool,
    pub is_body: bool,
    pub is_lai_yin: bool,
    /// The decade that runs through this palace.
    pub decade: DecadePeriod,
    /// Set on the annual palace of the reference year.
    pub annual: Option<AnnualInfo>,
    /// This palace is the minor limit of the reference year.
    pub is_minor_limit: bool,
}

impl Palace {
    pub fn main_stars(&self) -> impl Iterator<Item = &PlacedStar> {
        self.stars.iter().filter(|s| s.category == StarCategory::Main)
    }

    pub fn has_star(&self, star: Star) -> bool {
        self.stars.iter().any(|s| s.star == star)
    }

    /// Header label, e.g. "甲寅 命宫".
    pub fn label(&self) -> String {
        format!("{}{} {}", self.stem.name(), self.branch.name(), self.name.name())
    }
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    pub input: BirthInput,
    pub pillars: FourPillars,
    /// e.g. "甲子年 正月初一".
    pub lunar_date: String,
    pub bureau: Bureau,
    pub life_palace: Branch,
    pub body_palace: Branch,
    pub lai_yin_palace: Branch,
    pub life_lord: Star,
    pub body_lord: Star,
    pub body_life_relation: BodyLifeRelation,
    /// 斗君, the month-1 palace of the annual cycle.
    pub dou_jun: Branch,
    /// 先天斗君.
    pub innate_dou_jun: Branch,
    pub decade_direction: Direction,
    /// Indexed by branch (子 = 0).
    pub palaces: [Palace; 12],
    /// Birth-year marks; empty when transformations are disabled.
    pub sihua: Vec<BirthSihua>,
    pub self_transforms: Vec<SelfTransformation>,
    pub flying: Vec<FlyingTransformation>,
    /// In walking order, first on the life palace.
    pub decades: [DecadePeriod; 12],
}

impl ChartResult {
    pub fn palace(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    pub fn life(&self) -> &Palace {
        self.palace(self.life_palace)
    }

    pub fn body(&self) -> &Palace {
        self.palace(self.body_palace)
    }

    pub fn palace_by_name(&self, name: PalaceName) -> &Palace {
        self.palace(ziwei_base::branch_of(self.life_palace, name))
    }

    /// The palace holding `star` and its instance there.
    pub fn find_star(&self, star: Star) -> Option<(&Palace, &PlacedStar)> {
        self.palaces
            .iter()
            .find_map(|p| p.stars.iter().find(|s| s.star == star).map(|s| (p, s)))
    }

    pub fn main_star_count(&self) -> usize {
        self.palaces.iter().map(|p| p.main_stars().count()).sum()
    }

    /// Flying transformations landing on `branch`.
    pub fn incoming(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flying.iter().filter(move |e| e.target == branch)
    }

    /// Flying transformations sent by the stem of `branch`.
    pub fn outgoing(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flying.iter().filter(move |e| e.source == branch)
    }

    pub fn decade_for_age(&self, nominal_age: u32) -> Option<&DecadePeriod> {
        decade_for_age(&self.decades, nominal_age)
    }
}

/// Attach every tagged mark to the star instances it lands on.
pub fn annotate(palaces: &mut [Palace; 12], sihua: &SihuaChart) {
    for star in palaces.iter_mut().flat_map(|p| p.stars.iter_mut()) {
        star.marks = sihua.marks_for(star.star);
    }
}

fn palace_stars(layout: &StarLayout, branch: Branch) -> Vec<PlacedStar> {
    layout
        .stars_at(branch)
        .map(|star| PlacedStar::new(star, branch))
        .collect()
}

pub(crate) fn assemble(
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<ChartResult, ZiweiError> {
    let span = debug_span!(
        "chart",
        year = input.year,
        month = input.month,
        day = input.day,
        hour = input.hour
    );
    let _enter = span.enter();

    if let Err(e) = input.validate() {
        warn!(error = %e, "birth input rejected");
        return Err(e);
    }

    let year = year_ganzhi(input.year);
    let hour = input.hour_branch();
    let pillars = four_pillars(input.year, input.month, input.hour, input.solar);
    let lunar_date = lunar_date_string(year, input.month, input.day, input.leap_month)?;

    let life = life_palace(input.month, hour);
    let body = body_palace(input.month, hour);
    let lai_yin = lai_yin_palace(year.stem);
    let stems = palace_stems(year.stem);
    let names = palace_names(life);

    let bureau = bureau_for(year.stem, life);
    let anchor = ziwei_anchor(bureau, input.day)?;
    let ctx = PlacementContext {
        year,
        lunar_month: input.month,
        hour,
    };
    let layout = place_stars(bureau, input.day, &ctx, config.include_minor_stars)?;
    debug!(
        bureau = bureau.name(),
        anchor = anchor.name(),
        stars = layout.len(),
        "stars placed"
    );

    let direction = decade_direction(year.stem, input.gender);
    let decades = decades(bureau, life, direction, &stems);
    debug!(direction = direction.name(), "decades resolved");

    let annual = config
        .reference_year
        .map(|target| annual_for_year(input.year, target))
        .transpose()?;
    let minor = annual.map(|a| minor_limit(year.branch, input.gender, a.nominal_age));

    let mut palaces = ALL_BRANCHES.map(|branch| {
        let i = branch.index() as usize;
        Palace {
            branch,
            stem: stems[i],
            name: names[i],
            stars: palace_stars(&layout, branch),
            is_life: branch == life,
            is_body: branch == body,
            is_lai_yin: branch == lai_yin,
            decade: *decade_at(&decades, branch),
            annual: annual.filter(|a| a.branch == branch),
            is_minor_limit: minor == Some(branch),
        }
    });

    let (sihua, self_transforms, flying) = if config.include_sihua {
        let chart = SihuaChart::compute(year.stem, &stems, &layout);
        annotate(&mut palaces, &chart);
        trace!(
            self_transforms = chart.self_transforms.len(),
            flying = chart.flying.len(),
            "transformations resolved"
        );
        (chart.birth.to_vec(), chart.self_transforms, chart.flying)
    } else {
        (Vec::new(), Vec::new(), Vec::new())
    };

    Ok(ChartResult {
        input: *input,
        pillars,
        lunar_date,
        bureau,
        life_palace: life,
        body_palace: body,
        lai_yin_palace: lai_yin,
        life_lord: life_lord(life),
        body_lord: body_lord(year.branch),
        body_life_relation: body_life_relation(life, body),
        dou_jun: dou_jun(input.month, hour),
        innate_dou_jun: innate_dou_jun(life, year.branch),
        decade_direction: direction,
        palaces,
        sihua,
        self_transforms,
        flying,
        decades,
    })
}
