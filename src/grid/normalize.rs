// SPDX-License-Identifier: GPL-3.0-or-later
use std::convert::TryFrom;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use super::{DepthGrid, IntensityGrid};
use crate::error::GridError;

/// What to do with depth values outside of the [0, 1] range.
///
/// NaN is never accepted, whatever the policy. Names are matched case-insensitively, both on the
/// command line and in the configuration file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub(crate) enum RangePolicy {
    /// Fail on the first out of range value.
    Reject,

    /// Clamp values to [0, 1] before scaling them.
    Clamp,
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self::Reject
    }
}

impl FromStr for RangePolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_ascii_lowercase() as &str {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            _ => Err("unknown range policy"),
        }
    }
}

impl TryFrom<String> for RangePolicy {
    type Error = &'static str;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl RangePolicy {
    fn accepts(self, value: f64) -> bool {
        match self {
            Self::Reject => (0.0..=1.0).contains(&value),
            Self::Clamp => !value.is_nan(),
        }
    }
}

/// Scale a single depth value to an 8-bit intensity, truncating toward zero.
fn scale(value: f64) -> u8 {
    (value.max(0.0).min(1.0) * 255.0) as u8
}

/// Convert a depth grid into grayscale intensities.
pub(crate) fn normalize(grid: &DepthGrid, policy: RangePolicy) -> Result<IntensityGrid, GridError> {
    if let Some(((row, column), &value)) = grid.indexed_iter().find(|(_, v)| !policy.accepts(**v))
    {
        return Err(GridError::OutOfRange { row, column, value });
    }
    debug!(?policy, "Scaling depth grid to intensities");
    Ok(grid.mapv(scale))
}
