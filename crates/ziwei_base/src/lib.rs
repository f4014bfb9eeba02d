//! Rule tables and pure calculations for ZiWei DouShu (紫微斗数) charts.
//!
//! This crate provides:
//! - Stem/branch ring types and the four pillars
//! - Five-elements bureau resolution
//! - Palace location, palace stems and names, life/body lords
//! - 紫微 anchor and main/auxiliary/minor star placement
//! - Per-star brightness tables
//! - Four transformations: birth year, self, flying and incoming
//! - Palace relationships (三方四正)
//! - Decade, annual, minor-limit and monthly luck cycles
//!
//! Every function is deterministic and free of I/O. Tables are `const` or
//! `static` data shared by all callers.

pub mod bureau;
pub mod error;
pub mod ganzhi;
pub mod luck;
pub mod lunar;
pub mod palace;
pub mod placement;
pub mod relationship;
pub mod sihua;
pub mod star;
mod star_data;

pub use bureau::{ALL_BUREAUS, Bureau, bureau_for};
pub use error::ZiweiError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, Direction, Element, FourPillars, GanZhi,
    Polarity, SolarDate, Stem, Triad, day_ganzhi, four_pillars, hour_branch, hour_ganzhi,
    julian_day_number, month_ganzhi, nayin_element, year_ganzhi,
};
pub use luck::{
    AnnualInfo, DecadePeriod, Gender, MonthlyInfo, annual_for_year, annual_palace, decade_at,
    decade_direction, decade_for_age, decades, minor_limit, monthly_palace, overlay_names,
};
pub use lunar::{lunar_date_string, lunar_day_name, lunar_month_name};
pub use palace::{
    ALL_PALACE_NAMES, BodyLifeRelation, PalaceName, body_life_relation, body_lord, body_palace,
    branch_of, dou_jun, innate_dou_jun, lai_yin_palace, life_lord, life_palace, palace_name,
    palace_names, palace_stem, palace_stems,
};
pub use placement::{
    PlacementContext, StarLayout, StarWalk, TIANFU_WALK, ZIWEI_WALK, auxiliary_star_positions,
    main_star_positions, place_stars, tianfu_position, ziwei_anchor, ziwei_anchor_for_number,
};
pub use relationship::{
    PalaceRelationship, RelationKind, essence, related, relationship, relationship_table, square,
};
pub use sihua::{
    ALL_TRANSFORMATIONS, BirthSihua, FlyingTransformation, MarkSource, SelfTransformation,
    SihuaChart, TaggedMark, Transformation, sihua_for_stem, sihua_stars, transformation_of,
};
pub use star::{
    ALL_BRIGHTNESS, ALL_STARS, Brightness, MAIN_STARS, STAR_COUNT, Star, StarCategory,
    StarDefinition, StarGroup, brightness,
};
