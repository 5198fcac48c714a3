use serde::{Deserialize, Serialize};

use crate::gacha::{RandomSource, RateTable};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    FiveStar,
    FourStar,
    ThreeStar,
}

impl Tier {
    pub fn rarity(&self) -> u8 {
        match self {
            Self::FiveStar => 5,
            Self::FourStar => 4,
            Self::ThreeStar => 3,
        }
    }

    /// Picks the tier of one pull. Both counters must already include this pull.
    ///
    /// The 5★ check runs first, so a pull at both hard pities is a 5★. A draw
    /// is only consumed when the tier's hard pity has not been reached.
    pub fn resolve<R>(rates: &RateTable, pity5: u32, pity4: u32, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        if pity5 >= rates.five_star_hard_pity
            || rng.next_percent() < rates.five_star_rate(pity5)
        {
            return Self::FiveStar;
        }

        if pity4 >= rates.four_star_hard_pity || rng.next_percent() < rates.four_star_rate {
            return Self::FourStar;
        }

        Self::ThreeStar
    }
}
