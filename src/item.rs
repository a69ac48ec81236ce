use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CarouselError, Result};

/// One gallery picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    pub source: PathBuf,
    pub alt_text: String,
    pub caption: Option<String>,
}

impl ImageItem {
    /// Builds a descriptor whose alt text is derived from the file name,
    /// e.g. `french-tips_02.jpg` becomes "french tips 02".
    pub fn from_path(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let alt_text = alt_text_for(&source);
        Self {
            source,
            alt_text,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }
}

fn alt_text_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A client review shown on a testimonial card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    pub rating: u8,
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    pub fn new(name: &str, quote: &str, rating: u8) -> Self {
        Self {
            name: name.to_string(),
            quote: quote.to_string(),
            rating,
            avatar: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rating > Self::MAX_RATING {
            return Err(CarouselError::InvalidRating {
                name: self.name.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    /// Up to two uppercase initials, drawn in place of a missing avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
