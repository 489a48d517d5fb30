mod color;
mod transform;

pub use color::Color;
pub use transform::{world_to_screen_x, world_to_screen_y, ScreenTransform, WorldWindow};
