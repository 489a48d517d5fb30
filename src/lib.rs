pub mod app;
pub mod cli;
pub mod core;
pub mod display;
pub mod error;
pub mod logging;
pub mod math;

pub use error::{Error, Result};
