use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image must be at least 1x1 pixels, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },

    #[error("samples per pixel must be at least 1")]
    InvalidSampleCount,

    #[error("camera basis is degenerate: eye equals target or up is parallel to the view")]
    DegenerateView,

    #[error("pixel buffer holds {actual} colors, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
