/// One axis extent of a feature array, as far as it is known before execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dim {
    Known(u32),
    /// Resolved only at execution time, from the node counts of the octree
    /// level supplied with the data.
    Deferred,
}

/// Static shape of a feature array: batch and channel extents plus the node
/// axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureShape {
    pub batch: u32,
    pub channels: u32,
    pub width: Dim,
}

/// Output shape of both [`pad`](crate::pad()) and [`depad`](crate::depad()) for
/// a given input shape.
///
/// Batch and channel extents pass through unchanged; the node axis becomes
/// [`Dim::Deferred`] because the output width depends on octree metadata that
/// is only available at execution time. Callers must not assume static width
/// propagation through either transform.
pub fn transform_shape(input: FeatureShape) -> FeatureShape {
    FeatureShape {
        width: Dim::Deferred,
        ..input
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
