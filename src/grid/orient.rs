// SPDX-License-Identifier: GPL-3.0-or-later
use ndarray::{s, Axis};
use serde::Deserialize;
use serde_repr::Deserialize_repr;
use tracing::debug;

use super::IntensityGrid;

/// Clockwise rotation, in degrees.
#[derive(Clone, Copy, Deserialize_repr, PartialEq, Eq, Debug)]
#[repr(u16)]
pub(crate) enum Rotation {
    Zero = 0,
    Ninety = 90,
    OneEighty = 180,
    TwoSeventy = 270,
}

/// How the intensity grid is mapped onto the image raster.
///
/// Flips are applied first, then the rotation. The default rotates by 90 degrees, which
/// transposes the grid and then mirrors it left to right.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Orientation {
    pub(crate) rotation: Rotation,
    pub(crate) flip_horizontal: bool,
    pub(crate) flip_vertical: bool,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation: Rotation::Ninety,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

impl Orientation {
    pub(crate) fn apply(&self, mut grid: IntensityGrid) -> IntensityGrid {
        if self.flip_vertical {
            grid.invert_axis(Axis(0));
        }
        if self.flip_horizontal {
            grid.invert_axis(Axis(1));
        }
        debug!(rotation = ?self.rotation, "Orienting intensity grid");
        let grid = match self.rotation {
            Rotation::Zero => grid,
            Rotation::Ninety => reorient(grid),
            Rotation::OneEighty => grid.slice_move(s![..;-1, ..;-1]),
            Rotation::TwoSeventy => grid.reversed_axes().slice_move(s![..;-1, ..]),
        };
        // Hand back a row-major grid regardless of how the axes ended up
        grid.as_standard_layout().into_owned()
    }
}

/// Transpose the grid, then mirror it left to right (a 90 degree clockwise rotation).
pub(crate) fn reorient(grid: IntensityGrid) -> IntensityGrid {
    let mut grid = grid.reversed_axes();
    grid.invert_axis(Axis(1));
    grid
}
