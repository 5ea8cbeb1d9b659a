//! Octree-guided padding and depadding of sparse feature arrays.
//!
//! # Representations
//!
//! Feature data at one octree depth has two array forms. The *full* form holds one
//! feature vector per node at that depth. The *compact* form keeps only the
//! non-empty nodes, ordered by compact slot. An [`OctreeLevel`] snapshot relates
//! the two: its children table gives each node either a compact slot or a
//! sentinel.
//!
//! [`pad`] expands compact to full, writing exact zeros into every node without a
//! compact counterpart, so downstream consumers can use zero as a mask. [`depad`]
//! is the structural transpose: it gathers the non-empty positions of a full
//! array back into compact form. Depadding what pad produced restores the input
//! element-for-element, which is what lets the pair serve as forward and adjoint
//! of one another when gradients flow through the full representation.
//!
//! # Parallelism
//!
//! Output rows (one per batch/channel pair) never alias, so they can run in any
//! order on any number of threads. [`pad_with`] and [`depad_with`] accept an
//! [`Executor`] choosing the strategy; [`SerialExecutor`] is the [`pad`]/[`depad`]
//! default and [`RayonExecutor`] spreads rows across the rayon thread pool.

mod executor;
mod features;
mod mapping;
mod pad;
mod shape;

pub use executor::*;
pub use features::*;
pub use mapping::*;
pub use pad::*;
pub use shape::*;

pub use octree_pad_core::*;

#[cfg(test)]
mod proptests;
