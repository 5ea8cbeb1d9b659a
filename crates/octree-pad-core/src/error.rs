use crate::Depth;

use thiserror::Error;

/// Why an octree level snapshot failed validation.
///
/// All of these are deterministic input faults. The level is simply never
/// constructed; there is nothing to retry.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MetadataError {
    #[error("octree depth must be at least 1, got {depth}")]
    InvalidDepth { depth: Depth },

    #[error(
        "node {node} maps to compact slot {slot}, \
         but the level only has {num_nonempty} non-empty nodes"
    )]
    SlotOutOfRange {
        node: u32,
        slot: i32,
        num_nonempty: u32,
    },

    #[error("compact slot {slot} is claimed by more than one node (node {node})")]
    DuplicateSlot { node: u32, slot: u32 },

    #[error("children table maps {actual} nodes, but the level declares {expected} non-empty nodes")]
    NonemptyCountMismatch { expected: u32, actual: u32 },
}
