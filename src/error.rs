//! Error types for scene assembly and rendering.

use thiserror::Error;

/// Errors that can occur while assembling a scene or rendering it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("anti-aliasing factor must be 1, 2 or 3, got {0}")]
    InvalidAntiAliasing(u32),

    #[error("the {0} vector has no direction (zero length or not finite)")]
    DegenerateVector(&'static str),

    #[error("the view plane must lie a positive, finite distance in front of the camera, got {0}")]
    InvalidPlaneDistance(f64),

    #[error("the scene has no camera, call `init_camera` before building it")]
    MissingCamera,

    #[error("cannot render a {width}x{height} image with a view plane width of {view_plane_width}")]
    InvalidResolution {
        width: u32,
        height: u32,
        view_plane_width: f64,
    },

    #[error("failed to build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("worker rendering pixel ({x}, {y}) panicked: {message}")]
    WorkerPanicked { x: u32, y: u32, message: String },

    #[error("pixel ({x}, {y}) shaded to a non-finite color")]
    NonFiniteColor { x: u32, y: u32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for scene and render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
