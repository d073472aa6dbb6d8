// SPDX-License-Identifier: GPL-3.0-or-later
use serde::Deserialize;

/// Settings for the program used to display the rendered image.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct ViewerSettings {
    /// The program to open the image with. The image path is passed as its only argument.
    ///
    /// When this is not given, the platform's default opener is used.
    #[serde(default)]
    pub(crate) command: Option<String>,

    /// Wait for the viewer to exit, then remove the image file.
    ///
    /// Only useful with a `command` that stays in the foreground until its window is closed.
    /// Otherwise the image file is left in the temporary directory for the viewer to read.
    #[serde(default)]
    pub(crate) wait: bool,
}
