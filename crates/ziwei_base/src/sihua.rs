//! Four transformations (四化): 化禄, 化权, 化科, 化忌.
//!
//! Each stem transforms four fixed stars. Applied to a chart this gives
//! three annotation channels:
//! - birth year: the year stem's four stars, wherever they sit
//! - self (自化): a palace stem hitting a star in its own palace
//! - flying (飞化): a palace stem hitting a star in another palace, recorded
//!   as a directed edge source → target
//!
//! Incoming transformations are the flying edges read from the target side.
//! A star can hold marks from all channels at once; they never replace each
//! other.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{ALL_BRANCHES, Branch, Stem};
use crate::placement::StarLayout;
use crate::star::Star;

/// The four transformation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transformation {
    /// 化禄
    Lu,
    /// 化权
    Quan,
    /// 化科
    Ke,
    /// 化忌
    Ji,
}

/// All four marks in 禄权科忌 order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    /// Letter code: A=禄, B=权, C=科, D=忌.
    pub const fn code(self) -> char {
        match self {
            Self::Lu => 'A',
            Self::Quan => 'B',
            Self::Ke => 'C',
            Self::Ji => 'D',
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The stars a stem transforms, in 禄权科忌 order.
pub const fn sihua_stars(stem: Stem) -> [Star; 4] {
    match stem {
        Stem::Jia => [Star::LianZhen, Star::PoJun, Star::WuQu, Star::TaiYang],
        Stem::Yi => [Star::TianJi, Star::TianLiang, Star::ZiWei, Star::TaiYin],
        Stem::Bing => [Star::TianTong, Star::TianJi, Star::WenChang, Star::LianZhen],
        Stem::Ding => [Star::TaiYin, Star::TianTong, Star::TianJi, Star::JuMen],
        Stem::Wu => [Star::TanLang, Star::TaiYin, Star::YouBi, Star::TianJi],
        Stem::Ji => [Star::WuQu, Star::TanLang, Star::TianLiang, Star::WenQu],
        Stem::Geng => [Star::TaiYang, Star::WuQu, Star::TaiYin, Star::TianTong],
        Stem::Xin => [Star::JuMen, Star::TaiYang, Star::WenQu, Star::WenChang],
        Stem::Ren => [Star::TianLiang, Star::ZiWei, Star::ZuoFu, Star::WuQu],
        Stem::Gui => [Star::PoJun, Star::JuMen, Star::TaiYin, Star::TanLang],
    }
}

/// `(mark, star)` pairs for a stem.
pub const fn sihua_for_stem(stem: Stem) -> [(Transformation, Star); 4] {
    let [lu, quan, ke, ji] = sihua_stars(stem);
    [
        (Transformation::Lu, lu),
        (Transformation::Quan, quan),
        (Transformation::Ke, ke),
        (Transformation::Ji, ji),
    ]
}

/// The mark `stem` puts on `star`, if any.
pub fn transformation_of(stem: Stem, star: Star) -> Option<Transformation> {
    sihua_for_stem(stem)
        .into_iter()
        .find(|&(_, s)| s == star)
        .map(|(mark, _)| mark)
}

/// Which channel a mark came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkSource {
    BirthYear,
    /// 自化: the stem of the star's own palace.
    SelfTransform,
    /// 飞化: the stem of another palace.
    Flying { from: Branch },
}

/// A mark on a star instance, tagged with its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedMark {
    pub mark: Transformation,
    pub source: MarkSource,
}

impl TaggedMark {
    /// Display code: `A` birth year, `xA` self, `iA` from the opposite
    /// palace (向心), `PA` from any other palace.
    pub fn code(&self, at: Branch) -> String {
        let c = self.mark.code();
        match self.source {
            MarkSource::BirthYear => c.to_string(),
            MarkSource::SelfTransform => format!("x{c}"),
            MarkSource::Flying { from } if from == at.opposite() => format!("i{c}"),
            MarkSource::Flying { .. } => format!("P{c}"),
        }
    }
}

/// One birth-year mark and where its star sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthSihua {
    pub mark: Transformation,
    pub star: Star,
    /// `None` when the star is not in the layout.
    pub branch: Option<Branch>,
}

/// A palace stem transforming a star inside the same palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTransformation {
    pub branch: Branch,
    pub star: Star,
    pub mark: Transformation,
}

/// Directed edge: the stem of `source` transforms `star`, which sits in `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyingTransformation {
    pub source: Branch,
    pub target: Branch,
    pub star: Star,
    pub mark: Transformation,
}

impl FlyingTransformation {
    /// Whether the edge comes straight across the chart (向心).
    pub fn is_centripetal(&self) -> bool {
        self.source == self.target.opposite()
    }
}

/// Every transformation in one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SihuaChart {
    pub year_stem: Stem,
    pub birth: [BirthSihua; 4],
    pub self_transforms: Vec<SelfTransformation>,
    pub flying: Vec<FlyingTransformation>,
}

impl SihuaChart {
    /// Resolve all channels from the year stem, palace stems (indexed by
    /// branch) and the star layout.
    pub fn compute(year_stem: Stem, palace_stems: &[Stem; 12], layout: &StarLayout) -> Self {
        let birth = sihua_for_stem(year_stem).map(|(mark, star)| BirthSihua {
            mark,
            star,
            branch: layout.position(star),
        });

        let mut self_transforms = Vec::new();
        let mut flying = Vec::new();
        for source in ALL_BRANCHES {
            let stem = palace_stems[source.index() as usize];
            for (mark, star) in sihua_for_stem(stem) {
                let Some(target) = layout.position(star) else {
                    continue;
                };
                if target == source {
                    self_transforms.push(SelfTransformation {
                        branch: source,
                        star,
                        mark,
                    });
                } else {
                    flying.push(FlyingTransformation {
                        source,
                        target,
                        star,
                        mark,
                    });
                }
            }
        }

        Self {
            year_stem,
            birth,
            self_transforms,
            flying,
        }
    }

    /// Birth-year mark on `star`, if any.
    pub fn birth_mark(&self, star: Star) -> Option<Transformation> {
        self.birth.iter().find(|b| b.star == star).map(|b| b.mark)
    }

    /// Self transformations inside `branch`.
    pub fn self_transforms_at(&self, branch: Branch) -> impl Iterator<Item = &SelfTransformation> {
        self.self_transforms.iter().filter(move |t| t.branch == branch)
    }

    /// Edges leaving `branch`.
    pub fn outgoing(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flying.iter().filter(move |e| e.source == branch)
    }

    /// Edges landing on `branch` (incoming transformations).
    pub fn incoming(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.flying.iter().filter(move |e| e.target == branch)
    }

    /// Incoming edges from the opposite palace (向心自化).
    pub fn centripetal(&self, branch: Branch) -> impl Iterator<Item = &FlyingTransformation> {
        self.incoming(branch).filter(|e| e.is_centripetal())
    }

    /// All tagged marks on `star`: birth year first, then self, then flying.
    pub fn marks_for(&self, star: Star) -> Vec<TaggedMark> {
        let birth = self
            .birth
            .iter()
            .filter(|b| b.star == star && b.branch.is_some())
            .map(|b| TaggedMark {
                mark: b.mark,
                source: MarkSource::BirthYear,
            });
        let own = self
            .self_transforms
            .iter()
            .filter(|t| t.star == star)
            .map(|t| TaggedMark {
                mark: t.mark,
                source: MarkSource::SelfTransform,
            });
        let flown = self
            .flying
            .iter()
            .filter(|e| e.star == star)
            .map(|e| TaggedMark {
                mark: e.mark,
                source: MarkSource::Flying { from: e.source },
            });
        birth.chain(own).chain(flown).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    #[test]
    fn every_stem_covers_four_distinct_marks() {
        for stem in ALL_STEMS {
            let pairs = sihua_for_stem(stem);
            for (i, mark) in ALL_TRANSFORMATIONS.iter().enumerate() {
                assert_eq!(pairs[i].0, *mark);
            }
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(pairs[i].1, pairs[j].1, "{} repeats a star", stem.name());
                }
            }
        }
    }

    #[test]
    fn known_rows() {
        assert_eq!(
            sihua_stars(Stem::Jia),
            [Star::LianZhen, Star::PoJun, Star::WuQu, Star::TaiYang]
        );
        assert_eq!(
            sihua_stars(Stem::Ren),
            [Star::TianLiang, Star::ZiWei, Star::ZuoFu, Star::WuQu]
        );
        assert_eq!(transformation_of(Stem::Wu, Star::YouBi), Some(Transformation::Ke));
        assert_eq!(transformation_of(Stem::Wu, Star::ZiWei), None);
    }

    #[test]
    fn mark_codes() {
        let at = Branch::Zi;
        let mk = |source| TaggedMark {
            mark: Transformation::Ji,
            source,
        };
        assert_eq!(mk(MarkSource::BirthYear).code(at), "D");
        assert_eq!(mk(MarkSource::SelfTransform).code(at), "xD");
        assert_eq!(mk(MarkSource::Flying { from: Branch::Wu }).code(at), "iD");
        assert_eq!(mk(MarkSource::Flying { from: Branch::Yin }).code(at), "PD");
    }

    #[test]
    fn self_and_flying_split_by_palace() {
        // 甲 year: 寅 palace stem 丙 transforms 天同/天机/文昌/廉贞.
        let stems = crate::palace::palace_stems(Stem::Jia);
        let mut layout = StarLayout::new();
        layout.place(Star::TianTong, Branch::Yin);
        layout.place(Star::LianZhen, Branch::Wu);
        let chart = SihuaChart::compute(Stem::Jia, &stems, &layout);

        let own: Vec<_> = chart.self_transforms_at(Branch::Yin).collect();
        assert!(own.iter().any(|t| t.star == Star::TianTong && t.mark == Transformation::Lu));

        let edge = chart
            .outgoing(Branch::Yin)
            .find(|e| e.star == Star::LianZhen)
            .unwrap();
        assert_eq!(edge.target, Branch::Wu);
        assert_eq!(edge.mark, Transformation::Ji);
        assert!(chart.incoming(Branch::Wu).any(|e| e.source == Branch::Yin));
    }

    #[test]
    fn birth_marks_missing_star_has_no_branch() {
        let stems = crate::palace::palace_stems(Stem::Jia);
        let layout = StarLayout::new();
        let chart = SihuaChart::compute(Stem::Jia, &stems, &layout);
        assert!(chart.birth.iter().all(|b| b.branch.is_none()));
        assert!(chart.flying.is_empty());
        assert!(chart.marks_for(Star::LianZhen).is_empty());
    }

    #[test]
    fn channels_stack_on_one_star() {
        // 甲 year, 廉贞 at 寅 (stem 丙): birth 禄 and self 忌 on the same star.
        let stems = crate::palace::palace_stems(Stem::Jia);
        let mut layout = StarLayout::new();
        layout.place(Star::LianZhen, Branch::Yin);
        let chart = SihuaChart::compute(Stem::Jia, &stems, &layout);
        let marks = chart.marks_for(Star::LianZhen);
        assert!(marks.contains(&TaggedMark {
            mark: Transformation::Lu,
            source: MarkSource::BirthYear
        }));
        assert!(marks.contains(&TaggedMark {
            mark: Transformation::Ji,
            source: MarkSource::SelfTransform
        }));
    }
}
