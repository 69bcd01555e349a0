//! Generation of Create mod machine structures in the vanilla structure NBT
//! format.
//!
//! The crate builds single-block structure files for two machine kinds: a
//! mechanical arm holding a list of interaction points, and a chain conveyor
//! holding a list of spatial connections. Callers supply absolute world
//! coordinates; every stored position is expressed relative to the owning
//! structure's origin before it lands in the tag tree.

pub mod error;
pub mod structure;
pub mod types;

// Re-export the main types for easier access
pub use error::StructureError;
pub use structure::{Arm, Conveyor, InteractionMode, InteractionPoint, Structure};
pub use structure::generate_connected_conveyors;
pub use types::{BlockPos, DATA_VERSION, WORLD_ORIGIN};
