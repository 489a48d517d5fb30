use anyhow::Result;
use clap::Parser;

use spinning_quad::app::{run_headless, run_windowed, WindowSettings};
use spinning_quad::cli::Cli;
use spinning_quad::core::SpinningQuad;
use spinning_quad::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    let quad = SpinningQuad::new(
        cli.width,
        cli.height,
        cli.world_window()?,
        cli.animation_config()?,
    )?;

    if let Some(frames) = cli.headless {
        run_headless(quad, frames)?;
        return Ok(());
    }

    log::info!("Spinning Quad - press Escape to quit");
    run_windowed(
        WindowSettings {
            title: cli.title,
            width: cli.width,
            height: cli.height,
        },
        quad,
    )
}
