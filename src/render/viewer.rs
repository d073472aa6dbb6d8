// SPDX-License-Identifier: GPL-3.0-or-later
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context as _;
use image::codecs::png::PngEncoder;
use image::ColorType;
use tracing::{debug, info, warn};

use super::{Presenter, ViewerSettings};
use crate::image_buffer::LuminanceImage;

/// Shows images with an external image viewer.
///
/// The image is written to a PNG file in the temporary directory, and the viewer is launched with
/// the path to that file. Unless `wait` is set, the file is left behind, as the viewer may well
/// still be reading it after this program has exited.
#[derive(Clone, Debug)]
pub(crate) struct SystemViewer {
    command: Option<String>,
    wait: bool,
}

impl SystemViewer {
    pub(crate) fn new(settings: &ViewerSettings) -> Self {
        Self {
            command: settings.command.clone(),
            wait: settings.wait,
        }
    }

    /// Launch the viewer for the image file at `path`.
    fn open(&self, path: &Path) -> anyhow::Result<()> {
        let mut command = self.command(path);
        info!(command = ?command, wait = self.wait, "Opening image viewer");
        if !self.wait {
            command
                .spawn()
                .with_context(|| format!("Unable to launch image viewer {:?}", command))?;
            return Ok(());
        }
        let status = command
            .status()
            .with_context(|| format!("Unable to launch image viewer {:?}", command));
        // Clean up before reporting how the viewer went
        if let Err(err) = std::fs::remove_file(path) {
            warn!(path = ?path, error = %err, "Unable to remove image file");
        }
        let status = status?;
        if !status.success() {
            anyhow::bail!("Image viewer {:?} exited with {}", command, status);
        }
        Ok(())
    }

    /// Build the command that will open the file at `path`.
    fn command(&self, path: &Path) -> Command {
        match &self.command {
            Some(program) => {
                let mut command = Command::new(program);
                command.arg(path);
                command
            }
            None => platform_opener(path),
        }
    }
}

#[cfg(target_os = "windows")]
fn platform_opener(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    // The empty argument is the window title `start` expects before the path.
    command.args(&["/C", "start", ""]).arg(path);
    command
}

#[cfg(target_os = "macos")]
fn platform_opener(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_opener(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Encode the image as a PNG into a temporary file that outlives this process.
fn write_handoff_file(image: &LuminanceImage) -> anyhow::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("depthmap-")
        .suffix(".png")
        .tempfile()
        .context("Unable to create a temporary file for the image")?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        PngEncoder::new(&mut writer)
            .encode(
                image.as_raw(),
                image.width(),
                image.height(),
                ColorType::L8,
            )
            .context("Unable to encode image as PNG")?;
        writer.flush().context("Unable to write image file")?;
    }
    let path = file
        .into_temp_path()
        .keep()
        .context("Unable to keep the temporary image file")?;
    debug!(path = ?path, "Wrote image for viewer");
    Ok(path)
}

impl Presenter for SystemViewer {
    fn present(&mut self, image: &LuminanceImage) -> anyhow::Result<()> {
        let path = write_handoff_file(image)?;
        self.open(&path)
    }
}
