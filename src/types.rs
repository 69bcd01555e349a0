//! Shared primitive types used across the structure generator.

// A block position is a world coordinate triple, absolute at the API boundary
// and origin-relative once stored inside a structure.
pub type BlockPos = [i32; 3];

/// Default origin for structures that are not anchored anywhere in particular.
pub const WORLD_ORIGIN: BlockPos = [0, 0, 0];

/*
 * The world data version declared by every emitted structure file.
 */
pub const DATA_VERSION: i32 = 3955;
