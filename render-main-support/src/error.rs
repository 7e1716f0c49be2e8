use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("gif encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("square size must be at least 1 pixel")]
    InvalidSquareSize,

    #[error("square size {0} leaves no room for grid lines")]
    GridLinesTooThin(u32),

    #[error("frame of {width}x{height} pixels exceeds the gif size limit")]
    FrameTooLarge { width: u64, height: u64 },

    #[error("animation has no frames")]
    EmptyAnimation,
}
