// SPDX-License-Identifier: GPL-3.0-or-later
use structopt::StructOpt;

use std::path::PathBuf;

use crate::grid::RangePolicy;

/// Show a grid of depth values as a grayscale image.
#[derive(Debug, StructOpt)]
#[structopt()]
pub(crate) struct Args {
    /// Path to a configuration file.
    #[structopt(short, long, parse(from_os_str))]
    pub(crate) config_path: Option<PathBuf>,

    /// How to handle depth values outside of [0, 1], either "reject" or "clamp".
    #[structopt(short, long)]
    pub(crate) range_policy: Option<RangePolicy>,

    /// The depth grid to display. Overrides the path from the configuration file.
    #[structopt(parse(from_os_str))]
    pub(crate) input: Option<PathBuf>,
}
