// SPDX-License-Identifier: GPL-3.0-or-later
use crate::image_buffer::LuminanceImage;

mod settings;
mod viewer;

pub(crate) use settings::ViewerSettings;
pub(crate) use viewer::SystemViewer;

/// Something that can show a finished image to the user.
pub(crate) trait Presenter {
    /// Display the image.
    ///
    /// Implementations are not expected to wait for the user to finish looking at it.
    fn present(&mut self, image: &LuminanceImage) -> anyhow::Result<()>;
}
