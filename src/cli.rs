// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::core::animation::{
    AnimationConfig, DEFAULT_PULSE_AMPLITUDE, DEFAULT_PULSE_RATE, DEFAULT_ROTATION_STEP,
};
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::math::WorldWindow;

#[derive(Parser, Debug, Clone)]
#[command(name = "spinning-quad")]
#[command(about = "Software-rasterized spinning quad", long_about = None)]
pub struct Cli {
    /// Window and pixel surface width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window and pixel surface height
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "Spinning Quad")]
    pub title: String,

    /// Rotation in radians per frame
    #[arg(long, default_value_t = DEFAULT_ROTATION_STEP, allow_negative_numbers = true)]
    pub rotation_step: f32,

    /// Pulsation phase rate as a multiplier of the rotation step
    #[arg(long, default_value_t = DEFAULT_PULSE_RATE, allow_negative_numbers = true)]
    pub pulse_rate: f32,

    /// Pulsation amplitude; scale oscillates within 1 ± amplitude
    #[arg(long, default_value_t = DEFAULT_PULSE_AMPLITUDE)]
    pub pulse_amplitude: f32,

    /// Lower world bound on both axes
    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    pub world_min: f32,

    /// Upper world bound on both axes
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub world_max: f32,

    /// Run this many frames without opening a window
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Log filter (env_logger syntax); overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn animation_config(&self) -> Result<AnimationConfig> {
        AnimationConfig::new(self.rotation_step, self.pulse_rate, self.pulse_amplitude)
    }

    pub fn world_window(&self) -> Result<WorldWindow> {
        WorldWindow::square(self.world_min, self.world_max)
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            filter: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["spinning-quad"]);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.title, "Spinning Quad");
        assert_eq!(cli.headless, None);
        assert_eq!(cli.animation_config().unwrap(), AnimationConfig::default());
        assert_eq!(cli.world_window().unwrap(), WorldWindow::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "spinning-quad",
            "--width",
            "320",
            "--rotation-step",
            "0.02",
            "--world-min",
            "-2",
            "--world-max",
            "2",
            "--headless",
            "60",
        ]);
        assert_eq!(cli.width, 320);
        assert_eq!(cli.rotation_step, 0.02);
        assert_eq!(cli.headless, Some(60));
        assert_eq!(cli.world_window().unwrap(), WorldWindow::square(-2.0, 2.0).unwrap());
    }

    #[test]
    fn test_negative_rotation_step_is_invalid_config() {
        let cli = Cli::parse_from(["spinning-quad", "--rotation-step", "-0.02"]);
        assert_eq!(cli.rotation_step, -0.02);
        assert!(matches!(cli.animation_config(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_world_window() {
        let cli = Cli::parse_from(["spinning-quad", "--world-min", "3", "--world-max", "1"]);
        assert!(cli.world_window().is_err());
    }

    #[test]
    fn test_logging_config() {
        let cli = Cli::parse_from(["spinning-quad", "--log-level", "debug"]);
        assert_eq!(cli.logging_config().filter.as_deref(), Some("debug"));
    }
}
