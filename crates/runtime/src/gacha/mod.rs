use serde::{Deserialize, Serialize};

mod engine;
mod error;
mod outcome;
mod pity;
mod pool;
mod rates;
mod rng;
mod selector;
mod service;
mod tier;

pub use engine::{GachaEngine, RollBatch};
pub use error::{GachaError, PoolKind};
pub use outcome::RollOutcome;
pub use pity::PityState;
pub use pool::{BannerConfig, ItemPool, STANDARD_FIVE_STAR_NAMES};
pub use rates::{five_star_rate, RateTable};
pub use rng::{RandomSource, ScriptedSource};
pub use selector::{select_item, wins_featured};
pub use service::{load_item_pool, perform_gacha, GachaRequest};
pub use tier::Tier;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum DrawType {
    #[default]
    Single,
    Ten,
}

impl DrawType {
    pub fn count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Ten => 10,
        }
    }
}

impl TryFrom<u32> for DrawType {
    type Error = GachaError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Self::Single),
            10 => Ok(Self::Ten),
            other => Err(GachaError::InvalidCount(other)),
        }
    }
}
