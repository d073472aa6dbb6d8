// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod error;
mod grid;
mod image_buffer;
mod pipeline;
mod render;
mod settings;

use crate::pipeline::Pipeline;
use crate::settings::{Args, Settings};

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up logging")
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::from_args();
    let settings = Settings::from_args(args).context("Error loading configuration")?;
    Pipeline::new(settings).run()
}
