//! Fixed tag-tree templates for the supported machine blocks.
//!
//! Each builder returns a fresh, fully independent tree; the mutator types
//! rely on never sharing substructure between two builder calls.

use quartz_nbt::{NbtCompound, NbtList};

use crate::types::DATA_VERSION;

/// Block identifier of the mechanical arm.
pub const ARM_BLOCK_ID: &str = "create:mechanical_arm";

/// Block identifier of the chain conveyor.
pub const CONVEYOR_BLOCK_ID: &str = "create:chain_conveyor";

/// Wraps a block-entity tag and its palette entry in the common single-block
/// structure shell: size 1x1x1, one block record at the local origin, one
/// palette entry, no entities.
fn single_block_structure(block_entity: NbtCompound, palette_entry: NbtCompound) -> NbtCompound {
    let mut block = NbtCompound::new();
    block.insert("state", 0i32);
    block.insert("pos", NbtList::from(vec![0i32, 0, 0]));
    block.insert("nbt", block_entity);

    let mut root = NbtCompound::new();
    root.insert("size", NbtList::from(vec![1i32, 1, 1]));
    root.insert("blocks", NbtList::from(vec![block]));
    root.insert("palette", NbtList::from(vec![palette_entry]));
    root.insert("entities", NbtList::new());
    root.insert("DataVersion", DATA_VERSION);
    root
}

/// Builds a fresh mechanical arm structure with default machine state and an
/// empty interaction point list.
pub fn arm_template() -> NbtCompound {
    let mut entity = NbtCompound::new();
    entity.insert("NeedsSpeedUpdate", 1i8);
    entity.insert("Phase", "SEARCH_INPUTS");
    entity.insert("InteractionPoints", NbtList::new());
    entity.insert("id", ARM_BLOCK_ID);
    entity.insert("Speed", 0.0f32);
    entity.insert("Powered", 0i8);
    entity.insert("Goggles", 0i8);
    entity.insert("ScrollValue", 0i32);
    entity.insert("MovementProgress", 0.0f32);
    entity.insert("TargetPointIndex", 0i32);
    entity.insert("HeldItem", NbtCompound::new());

    let mut properties = NbtCompound::new();
    properties.insert("ceiling", "false");
    let mut palette_entry = NbtCompound::new();
    palette_entry.insert("Name", ARM_BLOCK_ID);
    palette_entry.insert("Properties", properties);

    single_block_structure(entity, palette_entry)
}

/// Builds a fresh chain conveyor structure with empty package and connection
/// lists.
pub fn conveyor_template() -> NbtCompound {
    let mut entity = NbtCompound::new();
    entity.insert("LoopingPackages", NbtList::new());
    entity.insert("NeedsSpeedUpdate", 1i8);
    entity.insert("id", CONVEYOR_BLOCK_ID);
    entity.insert("Speed", 0.0f32);
    entity.insert("TravellingPackages", NbtList::new());
    entity.insert("Connections", NbtList::new());

    let mut palette_entry = NbtCompound::new();
    palette_entry.insert("Name", CONVEYOR_BLOCK_ID);

    single_block_structure(entity, palette_entry)
}

/// Resolves the block-entity tag of a structure built by this module.
/// The template shape is a crate invariant, so a miss is a bug.
pub(crate) fn block_entity(root: &NbtCompound) -> &NbtCompound {
    let blocks: &NbtList = root.get("blocks").expect("template has a blocks list");
    let block: &NbtCompound = blocks.get(0).expect("template has a single block record");
    block.get("nbt").expect("block record carries entity data")
}

/// Mutable counterpart of [`block_entity`].
pub(crate) fn block_entity_mut(root: &mut NbtCompound) -> &mut NbtCompound {
    let blocks: &mut NbtList = root.get_mut("blocks").expect("template has a blocks list");
    let block: &mut NbtCompound = blocks.get_mut(0).expect("template has a single block record");
    block.get_mut("nbt").expect("block record carries entity data")
}
