// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use tracing::{info, info_span};

use crate::grid::{self, IntensityGrid};
use crate::image_buffer::to_luma_image;
use crate::render::{Presenter, SystemViewer};
use crate::settings::Settings;

/// Reads a depth grid, turns it into an image and hands it to a [Presenter].
pub(crate) struct Pipeline<P> {
    settings: Settings,
    presenter: P,
}

impl Pipeline<SystemViewer> {
    pub(crate) fn new(settings: Settings) -> Self {
        let presenter = SystemViewer::new(&settings.viewer);
        Self::with_presenter(settings, presenter)
    }
}

impl<P> Pipeline<P>
where
    P: Presenter,
{
    pub(crate) fn with_presenter(settings: Settings, presenter: P) -> Self {
        Self {
            settings,
            presenter,
        }
    }

    /// Load the depth grid and scale it to intensities, laid out as they should be displayed.
    fn intensities(&self) -> anyhow::Result<IntensityGrid> {
        let depths = grid::parse_file(&self.settings.input)?;
        let intensities = grid::normalize(&depths, self.settings.range_policy).with_context(
            || format!("Invalid depth values in {}", self.settings.input.display()),
        )?;
        Ok(self.settings.orientation.apply(intensities))
    }

    /// Run the whole pipeline once.
    ///
    /// Nothing is shown unless every step before presenting the image succeeded.
    pub(crate) fn run(&mut self) -> anyhow::Result<()> {
        let span = info_span!("pipeline", input = ?self.settings.input);
        let _enter = span.enter();
        let intensities = self.intensities()?;
        let image = to_luma_image(intensities)?;
        info!(
            width = image.width(),
            height = image.height(),
            "Presenting depth image"
        );
        self.presenter
            .present(&image)
            .context("Unable to display depth image")
    }
}
