use serde::{Deserialize, Serialize};

use crate::gacha::{
    select_item, BannerConfig, DrawType, GachaError, ItemPool, PityState, RandomSource, RateTable,
    RollOutcome, Tier,
};

/// Outcomes of one batch in pull order, and the state to send back next time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RollBatch {
    pub items: Vec<RollOutcome>,
    #[serde(flatten)]
    pub state: PityState,
}

/// Stateless roll engine. Everything a pull depends on is passed in.
#[derive(Debug, Clone, Default)]
pub struct GachaEngine {
    rates: RateTable,
}

impl GachaEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// One pull: count it, pick the tier, pick the item, move the pity state.
    pub fn pull<R>(
        &self,
        banner: &BannerConfig,
        pool: &ItemPool,
        state: PityState,
        rng: &mut R,
    ) -> Result<(RollOutcome, PityState), GachaError>
    where
        R: RandomSource + ?Sized,
    {
        let state = state.advance();
        let tier = Tier::resolve(&self.rates, state.pity5, state.pity4, rng);
        let outcome = select_item(tier, banner, pool, state.guarantee5, state.guarantee4, &self.rates, rng)?;

        tracing::debug!(
            "[GachaEngine::pull] banner {} pity5 {} pity4 {} -> {:?} {} (featured: {})",
            banner.banner_id, state.pity5, state.pity4, tier, outcome.name, outcome.is_featured
        );

        let next = state.after_pull(tier, outcome.is_featured);
        Ok((outcome, next))
    }

    /// Runs `count` pulls (1 or 10), threading the state from one pull into the next.
    ///
    /// The count is checked before anything is drawn. Any failed pull fails
    /// the whole batch and no outcomes are returned.
    pub fn roll<R>(
        &self,
        banner: &BannerConfig,
        pool: &ItemPool,
        count: u32,
        state: PityState,
        rng: &mut R,
    ) -> Result<RollBatch, GachaError>
    where
        R: RandomSource + ?Sized,
    {
        let draw_type = DrawType::try_from(count)?;

        let mut items = Vec::with_capacity(draw_type.count());
        let mut state = state;
        for _ in 0..draw_type.count() {
            let (outcome, next) = self.pull(banner, pool, state, rng)?;
            items.push(outcome);
            state = next;
        }

        tracing::info!(
            "[GachaEngine::roll] banner {} {:?} draw -> pity5 {} pity4 {} guarantee5 {} guarantee4 {}",
            banner.banner_id, draw_type, state.pity5, state.pity4, state.guarantee5, state.guarantee4
        );

        Ok(RollBatch { items, state })
    }
}
