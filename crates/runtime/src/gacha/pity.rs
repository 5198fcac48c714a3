use serde::{Deserialize, Serialize};

use crate::gacha::Tier;

/// Pity counters and 50/50 guarantees, owned by the caller between batches.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PityState {
    #[serde(rename = "pity5Star")]
    pub pity5: u32,
    #[serde(rename = "pity4Star")]
    pub pity4: u32,
    #[serde(rename = "guaranteed5StarFeatured")]
    pub guarantee5: bool,
    #[serde(rename = "guaranteed4StarFeatured")]
    pub guarantee4: bool,
}

impl PityState {
    pub fn new(pity5: u32, pity4: u32, guarantee5: bool, guarantee4: bool) -> Self {
        Self { pity5, pity4, guarantee5, guarantee4 }
    }

    /// Counts one more pull toward both tiers.
    pub fn advance(self) -> Self {
        Self {
            pity5: self.pity5.saturating_add(1),
            pity4: self.pity4.saturating_add(1),
            ..self
        }
    }

    /// State after a pull of `tier` landed featured or not.
    ///
    /// Only the resolved tier's counter resets and only its guarantee moves;
    /// a 3★ changes nothing.
    pub fn after_pull(self, tier: Tier, is_featured: bool) -> Self {
        match tier {
            Tier::FiveStar => Self {
                pity5: 0,
                guarantee5: !is_featured,
                ..self
            },
            Tier::FourStar => Self {
                pity4: 0,
                guarantee4: !is_featured,
                ..self
            },
            Tier::ThreeStar => self,
        }
    }
}
