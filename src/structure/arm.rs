//! Mechanical arm structures and their interaction points.

use std::str::FromStr;

use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use crate::error::StructureError;
use crate::structure::io::Structure;
use crate::structure::position::relative_pos;
use crate::structure::template;
use crate::types::{BlockPos, WORLD_ORIGIN};

/// Denotes whether an arm treats an interaction point as a pick-up or a
/// drop-off target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Take,
    Deposit,
}

impl InteractionMode {
    /// Returns the spelling stored in the structure file.
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionMode::Take => "TAKE",
            InteractionMode::Deposit => "DEPOSIT",
        }
    }
}

impl FromStr for InteractionMode {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TAKE" => Ok(InteractionMode::Take),
            "DEPOSIT" => Ok(InteractionMode::Deposit),
            other => Err(StructureError::InvalidMode(other.to_string())),
        }
    }
}

/// A pick-up or drop-off target appended to an arm. The position is stored
/// relative to the arm's origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionPoint {
    /// Block identifier of the targeted machine (e.g. `create:depot`).
    pub target: String,
    pub mode: InteractionMode,
    pub pos: BlockPos,
}

/**
 * Builder for a single mechanical arm structure. The arm binds a fixed origin
 * to a fresh template tree; every appended interaction point is relativized
 * against that origin and kept in insertion order. Order is meaningful: the
 * game addresses points by index through TargetPointIndex.
 */
#[derive(Debug, Clone)]
pub struct Arm {
    origin: BlockPos,
    nbt: NbtCompound,
}

impl Arm {
    /// Creates an arm anchored at `origin` with an empty interaction point
    /// list.
    pub fn new(origin: BlockPos) -> Self {
        Self {
            origin,
            nbt: template::arm_template(),
        }
    }

    /// Returns the origin every interaction point is relativized against.
    pub fn origin(&self) -> BlockPos {
        self.origin
    }

    /// Appends an interaction point for the block of kind `target` at the
    /// absolute position `pos`. Previously appended points keep their order;
    /// the new point goes last.
    pub fn add_interaction_point(&mut self, target: &str, mode: InteractionMode, pos: BlockPos) {
        let rel = relative_pos(pos, self.origin);

        let mut point = NbtCompound::new();
        point.insert("Type", target);
        point.insert("Mode", mode.as_str());
        point.insert("Pos", NbtTag::IntArray(rel.to_vec()));

        self.points_mut().push(NbtTag::Compound(point));
    }

    /// Returns the appended interaction points in insertion order.
    pub fn interaction_points(&self) -> Vec<InteractionPoint> {
        let points: &NbtList = template::block_entity(&self.nbt)
            .get("InteractionPoints")
            .expect("arm template has an InteractionPoints list");

        (0..points.len())
            .map(|index| {
                let point: &NbtCompound = points.get(index).expect("point entry is a compound");
                let target: &str = point.get("Type").expect("point has a Type tag");
                let mode: &str = point.get("Mode").expect("point has a Mode tag");
                let pos: &[i32] = point.get("Pos").expect("point has a Pos tag");
                InteractionPoint {
                    target: target.to_owned(),
                    mode: mode.parse().expect("stored mode spelling is valid"),
                    pos: pos.try_into().expect("stored position is a triple"),
                }
            })
            .collect()
    }

    fn points_mut(&mut self) -> &mut NbtList {
        template::block_entity_mut(&mut self.nbt)
            .get_mut("InteractionPoints")
            .expect("arm template has an InteractionPoints list")
    }
}

impl Default for Arm {
    fn default() -> Self {
        Self::new(WORLD_ORIGIN)
    }
}

impl Structure for Arm {
    fn nbt(&self) -> &NbtCompound {
        &self.nbt
    }
}
