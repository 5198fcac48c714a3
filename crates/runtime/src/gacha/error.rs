use std::fmt;

use serde::Serialize;

/// The pool a selection was drawing from when it came up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PoolKind {
    FeaturedFiveStar,
    StandardFiveStar,
    FeaturedFourStar,
    StandardFourStar,
    ThreeStar,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FeaturedFiveStar => "featured 5-star",
            Self::StandardFiveStar => "standard 5-star",
            Self::FeaturedFourStar => "featured 4-star",
            Self::StandardFourStar => "standard 4-star",
            Self::ThreeStar => "3-star",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    #[error("invalid count {0}: must be 1 or 10")]
    InvalidCount(u32),

    #[error("{0} pool is empty")]
    PoolExhausted(PoolKind),

    #[error("banner {0} not found")]
    UnknownBanner(i64),

    #[error("banner misconfigured: {0}")]
    InvalidBanner(String),

    #[error("catalog read failed: {0}")]
    Catalog(#[from] anyhow::Error),
}
