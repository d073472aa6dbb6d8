// SPDX-License-Identifier: GPL-3.0-or-later
use ndarray::Array2;

mod normalize;
pub(crate) mod orient;
mod parse;

pub(crate) use normalize::{normalize, RangePolicy};
pub(crate) use orient::Orientation;
pub(crate) use parse::parse_file;

/// Depth values as read from the input, one row per line.
pub(crate) type DepthGrid = Array2<f64>;

/// Grayscale intensities, ready to be turned into a luminance image.
pub(crate) type IntensityGrid = Array2<u8>;
