use ndshape::{RuntimeShape, Shape};
use thiserror::Error;

/// Why a [`FeatureArray`] could not be built from raw values.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ShapeError {
    #[error("shape {batch}x{channels}x{width} holds {expected} values, got {actual}")]
    LengthMismatch {
        batch: u32,
        channels: u32,
        width: u32,
        expected: usize,
        actual: usize,
    },
}

/// Batched per-node features at one octree level.
///
/// Axes are (batch, channel, node) with the node axis varying fastest, so the
/// features of all nodes for one (batch, channel) pair form one contiguous row.
/// Whether the node axis spans all nodes of a level or only the non-empty ones is
/// up to the transform consuming the array.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureArray {
    batch: u32,
    channels: u32,
    width: u32,
    values: Vec<f32>,
}

impl FeatureArray {
    /// An all-zero array of the given shape.
    pub fn zeros(batch: u32, channels: u32, width: u32) -> Self {
        let len = batch as usize * channels as usize * width as usize;
        Self {
            batch,
            channels,
            width,
            values: vec![0.0; len],
        }
    }

    /// Wraps `values` in the given shape. Fails if the flat length disagrees
    /// with the shape.
    pub fn from_vec(
        batch: u32,
        channels: u32,
        width: u32,
        values: Vec<f32>,
    ) -> Result<Self, ShapeError> {
        let expected = batch as usize * channels as usize * width as usize;
        if values.len() != expected {
            return Err(ShapeError::LengthMismatch {
                batch,
                channels,
                width,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            batch,
            channels,
            width,
            values,
        })
    }

    #[inline]
    pub fn batch(&self) -> u32 {
        self.batch
    }

    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Extent of the node axis.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of contiguous rows, one per (batch, channel) pair.
    #[inline]
    pub fn num_rows(&self) -> u32 {
        self.batch * self.channels
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    fn linear_shape(&self) -> RuntimeShape<u32, 3> {
        RuntimeShape::<u32, 3>::new([self.width, self.channels, self.batch])
    }

    /// The feature value of `node` at `channel` in `batch`.
    #[inline]
    pub fn at(&self, batch: u32, channel: u32, node: u32) -> f32 {
        self.values[self.linear_shape().linearize([node, channel, batch]) as usize]
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
