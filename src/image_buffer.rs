// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use image::flat::{FlatSamples, SampleLayout};
use image::{ImageBuffer, Luma};
use tracing::debug;

use crate::grid::IntensityGrid;

/// Single channel images where each pixel's brightness is its stored intensity.
pub type LuminanceImage = ImageBuffer<Luma<u8>, Vec<u8>>;

/// Turn an intensity grid into a luminance image, one grid cell per pixel.
///
/// Grid rows become pixel rows, so the pixel at `(x, y)` is the grid value at `[[y, x]]`.
pub(crate) fn to_luma_image(grid: IntensityGrid) -> anyhow::Result<LuminanceImage> {
    let (row_count, col_count) = grid.dim();
    let height = row_count as u32;
    let width = col_count as u32;
    // Force the layout to row-major. If it's already in that order, this is a noop.
    let grid = if grid.is_standard_layout() {
        grid
    } else {
        debug!("Copying intensity grid into row-major order");
        grid.as_standard_layout().into_owned()
    };
    let layout = SampleLayout::row_major_packed(1, width, height);
    let buffer_image = FlatSamples {
        samples: grid.into_raw_vec(),
        layout,
        color_hint: None,
    };
    buffer_image
        .try_into_buffer()
        // try_into_buffer uses a 2-tuple as the error type, with the actual Error being the
        // first item in the tuple.
        .map_err(|e| e.0)
        .context("Unable to convert intensity grid into an ImageBuffer")
}
