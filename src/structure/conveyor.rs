//! Chain conveyor structures and their connection lists.

use quartz_nbt::{NbtCompound, NbtList, NbtTag};

use crate::structure::io::Structure;
use crate::structure::position::relative_pos;
use crate::structure::template;
use crate::types::{BlockPos, WORLD_ORIGIN};

/**
 * Builder for a single chain conveyor structure. The conveyor binds a fixed
 * origin to a fresh template tree; every appended connection is relativized
 * against that origin. Duplicate connections are allowed and insertion order
 * is preserved.
 */
#[derive(Debug, Clone)]
pub struct Conveyor {
    origin: BlockPos,
    nbt: NbtCompound,
}

impl Conveyor {
    /// Creates a conveyor anchored at `origin` with an empty connection list.
    pub fn new(origin: BlockPos) -> Self {
        Self {
            origin,
            nbt: template::conveyor_template(),
        }
    }

    /// Returns the origin every connection is relativized against.
    pub fn origin(&self) -> BlockPos {
        self.origin
    }

    /// Appends a single connection to the block at the absolute position
    /// `pos`.
    pub fn add_connection(&mut self, pos: BlockPos) {
        let rel = relative_pos(pos, self.origin);
        self.connections_mut().push(NbtTag::IntArray(rel.to_vec()));
    }

    /// Appends one connection per position, in the given order.
    pub fn add_connections<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = BlockPos>,
    {
        for pos in positions {
            self.add_connection(pos);
        }
    }

    /// Returns the appended connections in insertion order, still relative to
    /// the conveyor's origin.
    pub fn connections(&self) -> Vec<BlockPos> {
        let connections: &NbtList = template::block_entity(&self.nbt)
            .get("Connections")
            .expect("conveyor template has a Connections list");

        (0..connections.len())
            .map(|index| {
                let connection: &[i32] = connections
                    .get(index)
                    .expect("connection entry is an int array");
                connection.try_into().expect("stored connection is a triple")
            })
            .collect()
    }

    fn connections_mut(&mut self) -> &mut NbtList {
        template::block_entity_mut(&mut self.nbt)
            .get_mut("Connections")
            .expect("conveyor template has a Connections list")
    }
}

impl Default for Conveyor {
    fn default() -> Self {
        Self::new(WORLD_ORIGIN)
    }
}

impl Structure for Conveyor {
    fn nbt(&self) -> &NbtCompound {
        &self.nbt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_connection_is_relativized_against_origin() {
        let mut conveyor = Conveyor::new([1, 0, 0]);
        conveyor.add_connection([1, 2, 3]);
        assert_eq!(conveyor.connections(), vec![[0, 2, 3]]);
    }

    #[test]
    fn batch_append_preserves_given_order() {
        let mut conveyor = Conveyor::new([1, 0, 0]);
        conveyor.add_connections([[1, 0, 0], [0, 2, 0]]);
        assert_eq!(conveyor.connections(), vec![[0, 0, 0], [-1, 2, 0]]);
    }

    #[test]
    fn duplicate_connections_are_kept() {
        let mut conveyor = Conveyor::default();
        conveyor.add_connection([4, 0, 0]);
        conveyor.add_connection([4, 0, 0]);
        assert_eq!(conveyor.connections(), vec![[4, 0, 0], [4, 0, 0]]);
    }

    #[test]
    fn default_conveyor_is_anchored_at_world_origin() {
        let conveyor = Conveyor::default();
        assert_eq!(conveyor.origin(), WORLD_ORIGIN);
        assert!(conveyor.connections().is_empty());
    }
}
