//! Coordinate arithmetic for origin-relative block positions.

use crate::error::StructureError;
use crate::types::BlockPos;

/// Computes the position of `pos` relative to `origin`, component-wise.
///
/// Negative components are valid and mean the target sits behind or below
/// the origin block.
pub fn relative_pos(pos: BlockPos, origin: BlockPos) -> BlockPos {
    std::array::from_fn(|i| pos[i] - origin[i])
}

/// Converts a borrowed coordinate slice into a [`BlockPos`], rejecting any
/// slice that does not hold exactly three components.
pub fn block_pos(coords: &[i32]) -> Result<BlockPos, StructureError> {
    coords
        .try_into()
        .map_err(|_| StructureError::InvalidTriple(coords.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_pos_subtracts_component_wise() {
        assert_eq!(relative_pos([5, 5, 5], [1, 2, 3]), [4, 3, 2]);
    }

    #[test]
    fn relative_pos_allows_negative_components() {
        assert_eq!(relative_pos([0, 0, 0], [1, 2, 3]), [-1, -2, -3]);
        assert_eq!(relative_pos([-4, 7, 0], [0, 0, 0]), [-4, 7, 0]);
    }

    #[test]
    fn relative_pos_to_default_origin_is_identity() {
        assert_eq!(relative_pos([10, -63, 2], [0, 0, 0]), [10, -63, 2]);
    }

    #[test]
    fn block_pos_rejects_wrong_lengths() {
        assert!(matches!(
            block_pos(&[1, 2]),
            Err(StructureError::InvalidTriple(2))
        ));
        assert!(matches!(
            block_pos(&[1, 2, 3, 4]),
            Err(StructureError::InvalidTriple(4))
        ));
        assert_eq!(block_pos(&[1, 2, 3]).unwrap(), [1, 2, 3]);
    }
}
