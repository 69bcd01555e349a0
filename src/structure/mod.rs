//! Construction and serialization of single-block machine structures.

pub mod arm;
pub mod conveyor;
pub mod generator;
pub mod io;
pub mod position;
pub mod template;

#[cfg(test)]
mod tests;

// Re-export the main types for easier access
pub use arm::{Arm, InteractionMode, InteractionPoint};
pub use conveyor::Conveyor;
pub use generator::generate_connected_conveyors;
pub use io::Structure;
pub use position::{block_pos, relative_pos};
pub use template::{arm_template, conveyor_template};
