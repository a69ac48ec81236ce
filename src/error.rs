//! Error types shared by the carousel library and its loaders.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    /// The auto-advance interval must be strictly positive
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path:?}: {message}")]
    ImageDecode { path: PathBuf, message: String },

    #[error("failed to create texture for {path:?}: {message}")]
    Texture { path: PathBuf, message: String },

    #[error("failed to parse testimonials from {path:?}: {source}")]
    TestimonialParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Ratings are shown as five stars
    #[error("testimonial from {name} has rating {rating}, expected 0..=5")]
    InvalidRating { name: String, rating: u8 },
}

impl CarouselError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
