use rayon::prelude::*;

/// Strategy for running row-level work.
///
/// One unit of work is one output row: the features of every node for a single
/// (batch, channel) pair. Rows never alias, so implementations are free to run
/// them in any order and on any number of threads; results are identical
/// either way.
pub trait Executor {
    /// Calls `work` exactly once for every `row_len`-sized row of `values`,
    /// passing the row index and the row itself.
    fn for_each_row<F>(&self, values: &mut [f32], row_len: usize, work: F)
    where
        F: Fn(usize, &mut [f32]) + Sync;
}

/// Runs rows one after another on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialExecutor;

impl Executor for SerialExecutor {
    fn for_each_row<F>(&self, values: &mut [f32], row_len: usize, work: F)
    where
        F: Fn(usize, &mut [f32]) + Sync,
    {
        if row_len == 0 {
            return;
        }
        for (row, values) in values.chunks_exact_mut(row_len).enumerate() {
            work(row, values);
        }
    }
}

/// Spreads rows across the rayon thread pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct RayonExecutor;

impl Executor for RayonExecutor {
    fn for_each_row<F>(&self, values: &mut [f32], row_len: usize, work: F)
    where
        F: Fn(usize, &mut [f32]) + Sync,
    {
        if row_len == 0 {
            return;
        }
        values
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(row, values)| work(row, values));
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
