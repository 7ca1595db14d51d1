//! Parallel sampling of a 2D function onto a pixel grid.

use rayon::prelude::*;

use crate::function::Function2D;

/// Samples `f` on a `width × height` grid, row-major.
///
/// The value at column `col` of row `row` is
/// `f.evaluate(col * scale, row * scale)`. Rows are filled in parallel.
/// A zero `width` or `height` yields an empty buffer.
pub fn sample_grid<F>(f: &F, width: usize, height: usize, scale: f32) -> Vec<f32>
where
    F: Function2D + Sync + ?Sized,
{
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut values = vec![0.0f32; width * height];
    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, line)| {
            let y = row as f32 * scale;
            for (col, value) in line.iter_mut().enumerate() {
                *value = f.evaluate(col as f32 * scale, y);
            }
        });
    values
}
