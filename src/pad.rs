use crate::executor::{Executor, SerialExecutor};
use crate::features::FeatureArray;
use crate::mapping::{mappings, slot_action, SlotAction};

use octree_pad_core::{Depth, OctreeLevel};
use thiserror::Error;

/// Why a transform refused to run.
///
/// These are all deterministic precondition violations, reported before any
/// output is allocated. A failed call writes nothing.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PadError {
    #[error("feature arrays must have at least one channel")]
    NoChannels,

    #[error("feature array has width {actual}, but depth {depth} expects width {expected}")]
    WidthMismatch {
        depth: Depth,
        expected: u32,
        actual: u32,
    },
}

/// Expands `compact` into the full representation of `level`.
///
/// Every non-empty node receives the feature vector of its compact slot; every
/// empty node reads as exact zero in all channels and batches. Requires
/// `compact.width() == level.num_nonempty()`.
pub fn pad(level: &OctreeLevel, compact: &FeatureArray) -> Result<FeatureArray, PadError> {
    pad_with(&SerialExecutor, level, compact)
}

/// [`pad`] with an explicit execution strategy. All executors produce
/// bit-identical output.
pub fn pad_with<E: Executor>(
    executor: &E,
    level: &OctreeLevel,
    compact: &FeatureArray,
) -> Result<FeatureArray, PadError> {
    check_channels(compact)?;
    check_width(level, compact.width(), level.num_nonempty())?;

    log::trace!(
        "padding {} rows from width {} to width {} at depth {}",
        compact.num_rows(),
        compact.width(),
        level.num_nodes(),
        level.depth()
    );

    // Zero-initialized output is part of the contract: empty nodes must read
    // as exact zero.
    let mut full = FeatureArray::zeros(compact.batch(), compact.channels(), level.num_nodes());

    let in_width = compact.width() as usize;
    let out_width = level.num_nodes() as usize;
    let src = compact.values();
    executor.for_each_row(full.values_mut(), out_width, |row, out_row| {
        let in_row = &src[row * in_width..(row + 1) * in_width];
        for (i, out) in out_row.iter_mut().enumerate() {
            if let SlotAction::Copy(slot) = slot_action(level, i as u32) {
                *out = in_row[slot as usize];
            }
        }
    });

    Ok(full)
}

/// Collapses `full` into the compact representation of `level`.
///
/// The structural transpose of [`pad`]: for every non-empty node, the feature
/// vector at its full position is written to its compact slot, and empty
/// positions are dropped. Requires `full.width() == level.num_nodes()`.
pub fn depad(level: &OctreeLevel, full: &FeatureArray) -> Result<FeatureArray, PadError> {
    depad_with(&SerialExecutor, level, full)
}

/// [`depad`] with an explicit execution strategy. All executors produce
/// bit-identical output.
pub fn depad_with<E: Executor>(
    executor: &E,
    level: &OctreeLevel,
    full: &FeatureArray,
) -> Result<FeatureArray, PadError> {
    check_channels(full)?;
    check_width(level, full.width(), level.num_nodes())?;

    log::trace!(
        "depadding {} rows from width {} to width {} at depth {}",
        full.num_rows(),
        full.width(),
        level.num_nonempty(),
        level.depth()
    );

    // The table bijection guarantees every slot gets exactly one write, so
    // zeros here are unreachable; a zero row in the output would make a
    // violated table invariant visible instead of leaving garbage.
    let mut compact = FeatureArray::zeros(full.batch(), full.channels(), level.num_nonempty());

    let in_width = full.width() as usize;
    let out_width = level.num_nonempty() as usize;
    let src = full.values();
    executor.for_each_row(compact.values_mut(), out_width, |row, out_row| {
        let in_row = &src[row * in_width..(row + 1) * in_width];
        for (i, slot) in mappings(level) {
            out_row[slot as usize] = in_row[i as usize];
        }
    });

    Ok(compact)
}

fn check_channels(features: &FeatureArray) -> Result<(), PadError> {
    if features.channels() == 0 {
        return Err(PadError::NoChannels);
    }
    Ok(())
}

fn check_width(level: &OctreeLevel, actual: u32, expected: u32) -> Result<(), PadError> {
    if actual != expected {
        return Err(PadError::WidthMismatch {
            depth: level.depth(),
            expected,
            actual,
        });
    }
    Ok(())
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
