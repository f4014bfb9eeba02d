//! Fixed palace relationships on the branch ring.
//!
//! Trines sit 4 and 8 steps away and the opposite palace 6 steps away.
//! Together with the palace itself they form 三方四正. None of this depends
//! on birth data.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{ALL_BRANCHES, Branch};

/// Trine and opposite partners of one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PalaceRelationship {
    pub palace: Branch,
    /// Partners at +4 and +8.
    pub trine: [Branch; 2],
    pub opposite: Branch,
}

impl PalaceRelationship {
    /// 三方四正: the palace, its two trines, and its opposite.
    pub const fn three_sides_four_directions(&self) -> [Branch; 4] {
        [self.palace, self.trine[0], self.trine[1], self.opposite]
    }
}

/// Relationship of `palace` to the rest of the ring.
pub const fn relationship(palace: Branch) -> PalaceRelationship {
    PalaceRelationship {
        palace,
        trine: [palace.offset(4), palace.offset(8)],
        opposite: palace.offset(6),
    }
}

/// Relationships for all 12 palaces, indexed by branch.
pub fn relationship_table() -> [PalaceRelationship; 12] {
    ALL_BRANCHES.map(relationship)
}

/// The 1-4-7-10 cross in palace order: the palace, then the 4th, 7th and
/// 10th palaces counted from it (counter-clockwise).
pub const fn square(palace: Branch) -> [Branch; 4] {
    [palace, palace.offset(-3), palace.offset(-6), palace.offset(-9)]
}

/// 一六共宗: the palace and the 6th palace counted from it, so 命宫 pairs
/// with 疾厄.
pub const fn essence(palace: Branch) -> [Branch; 2] {
    [palace, palace.offset(-5)]
}

/// How two palaces relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Same,
    Trine,
    Opposite,
    /// 3 or 9 steps apart.
    Square,
    None,
}

pub const fn related(a: Branch, b: Branch) -> RelationKind {
    match a.steps_to(b) {
        0 => RelationKind::Same,
        4 | 8 => RelationKind::Trine,
        6 => RelationKind::Opposite,
        3 | 9 => RelationKind::Square,
        _ => RelationKind::None,
    }
}
