//! Serialization of structure trees through the NBT codec.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use quartz_nbt::NbtCompound;
use quartz_nbt::io::{Flavor, write_nbt};

use crate::error::StructureError;

/// Common serialization surface of the structure builders.
///
/// Implementors expose the root of their tag tree; encoding runs through the
/// standard structure-file codec with an unnamed root compound, gzip-compressed
/// unless asked otherwise. Write failures surface unchanged and nothing is
/// retried.
pub trait Structure {
    /// Returns the root compound of the structure tree.
    fn nbt(&self) -> &NbtCompound;

    /// Encodes the structure into `writer`.
    fn write_to<W: Write>(&self, writer: &mut W, compressed: bool) -> Result<(), StructureError> {
        let flavor = if compressed {
            Flavor::GzCompressed
        } else {
            Flavor::Uncompressed
        };
        write_nbt(writer, None, self.nbt(), flavor)?;
        Ok(())
    }

    /// Writes the structure to `path`, gzip-compressed, overwriting any
    /// existing file.
    fn save(&self, path: impl AsRef<Path>) -> Result<(), StructureError> {
        let mut file = File::create(path)?;
        self.write_to(&mut file, true)
    }

    /// Writes the structure to `path` without compression.
    fn save_uncompressed(&self, path: impl AsRef<Path>) -> Result<(), StructureError> {
        let mut file = File::create(path)?;
        self.write_to(&mut file, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{Arm, InteractionMode};
    use quartz_nbt::io::read_nbt;
    use std::io::Cursor;

    #[test]
    fn uncompressed_encoding_round_trips() {
        let mut arm = Arm::new([1, 1, 1]);
        arm.add_interaction_point("create:depot", InteractionMode::Take, [3, 2, 0]);

        let mut encoded = Vec::new();
        arm.write_to(&mut encoded, false).expect("encode to memory");

        let (decoded, root_name) =
            read_nbt(&mut Cursor::new(encoded), Flavor::Uncompressed).expect("decode");
        assert_eq!(root_name, "");
        assert_eq!(&decoded, arm.nbt());
    }

    #[test]
    fn compressed_encoding_starts_with_gzip_magic() {
        let arm = Arm::default();
        let mut encoded = Vec::new();
        arm.write_to(&mut encoded, true).expect("encode to memory");
        assert_eq!(&encoded[..2], &[0x1f, 0x8b]);
    }
}
