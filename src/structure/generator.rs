//! Emits matched main/inverse conveyor file sets.

use std::path::{Path, PathBuf};

use crate::error::StructureError;
use crate::structure::conveyor::Conveyor;
use crate::structure::io::Structure;
use crate::types::BlockPos;

/// Writes a main conveyor anchored at `origin` plus one inverse conveyor per
/// entry in `connections`.
///
/// The main file carries every connection relative to `origin` and lands next
/// to `base_path` under a `_main.nbt` name; the inverse for the connection at
/// 1-based index `i` lands under `_{i}.nbt`. Each inverse is anchored at its
/// own connection position and carries a single connection to `origin`, so its
/// stored vector is `origin - connection` and both ends of the pair line up
/// when placed in the world. Files are written sequentially with no rollback;
/// a failed write leaves the earlier files of the set on disk.
pub fn generate_connected_conveyors(
    connections: &[BlockPos],
    origin: BlockPos,
    base_path: impl AsRef<Path>,
) -> Result<(), StructureError> {
    let base_path = base_path.as_ref();

    let mut main = Conveyor::new(origin);
    main.add_connections(connections.iter().copied());
    main.save(variant_path(base_path, "main"))?;

    for (index, &connection) in connections.iter().enumerate() {
        let mut inverse = Conveyor::new(connection);
        inverse.add_connection(origin);
        inverse.save(variant_path(base_path, &(index + 1).to_string()))?;
    }

    Ok(())
}

/// Derives the output path of one file in the set, replacing a trailing
/// `.nbt` with `_{label}.nbt` or appending when the suffix is missing.
fn variant_path(base: &Path, label: &str) -> PathBuf {
    let name = base
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = name.strip_suffix(".nbt").unwrap_or(name);
    base.with_file_name(format!("{stem}_{label}.nbt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_path_replaces_trailing_suffix() {
        assert_eq!(
            variant_path(Path::new("conveyor.nbt"), "main"),
            PathBuf::from("conveyor_main.nbt")
        );
        assert_eq!(
            variant_path(Path::new("out/loop.nbt"), "2"),
            PathBuf::from("out/loop_2.nbt")
        );
    }

    #[test]
    fn variant_path_appends_when_suffix_is_missing() {
        assert_eq!(
            variant_path(Path::new("conveyor"), "main"),
            PathBuf::from("conveyor_main.nbt")
        );
    }

    #[test]
    fn variant_path_only_touches_the_trailing_suffix() {
        assert_eq!(
            variant_path(Path::new("a.nbt/conveyor.nbt"), "1"),
            PathBuf::from("a.nbt/conveyor_1.nbt")
        );
    }
}
