use octree_pad_core::OctreeLevel;

/// What a transform does with one node of the full representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotAction {
    /// The node is non-empty; its features live at this compact slot.
    Copy(u32),
    /// The node has no compact counterpart; pad writes zeros, depad skips it.
    Zero,
}

/// The action for node `full_index` of `level`.
///
/// A pure positional lookup into the children table. The table was validated
/// when `level` was built, so a returned slot is always in
/// `[0, level.num_nonempty())`.
#[inline]
pub fn slot_action(level: &OctreeLevel, full_index: u32) -> SlotAction {
    match level.compact_slot(full_index) {
        Some(slot) => SlotAction::Copy(slot),
        None => SlotAction::Zero,
    }
}

/// All (full position, compact slot) pairs of `level`, in full-position order.
///
/// Exactly `level.num_nonempty()` pairs are produced, and the slots form a
/// bijection with `[0, level.num_nonempty())`.
pub fn mappings(level: &OctreeLevel) -> impl Iterator<Item = (u32, u32)> + '_ {
    (0..level.num_nodes()).filter_map(move |i| level.compact_slot(i).map(|slot| (i, slot)))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
