#![allow(clippy::many_single_char_names)]

pub mod buffer;
pub mod builder;
pub mod camera;
pub mod error;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod scene;

pub use buffer::PixelBuffer;
pub use builder::SceneBuilder;
pub use error::{RenderError, Result};
pub use scene::{RenderSettings, Scene};
