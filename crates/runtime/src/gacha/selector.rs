use crate::catalog::{BannerKind, CatalogItem};
use crate::gacha::{BannerConfig, GachaError, ItemPool, PoolKind, RandomSource, RateTable, RollOutcome, Tier};

/// Decides featured-vs-standard for a 5★ or 4★.
///
/// A set guarantee forces the featured side without consuming a draw.
pub fn wins_featured<R>(guaranteed: bool, rates: &RateTable, rng: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    guaranteed || rng.next_unit() < rates.featured_chance
}

fn pick<'a, R>(items: &'a [CatalogItem], pool: PoolKind, rng: &mut R) -> Result<&'a CatalogItem, GachaError>
where
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(GachaError::PoolExhausted(pool));
    }
    Ok(&items[rng.next_index(items.len())])
}

/// Picks the concrete item for a resolved tier.
///
/// `guarantee5`/`guarantee4` are the carried-over 50/50 flags. Weapon banners
/// always give their featured 5★ and ignore `guarantee5`.
pub fn select_item<R>(
    tier: Tier,
    banner: &BannerConfig,
    pool: &ItemPool,
    guarantee5: bool,
    guarantee4: bool,
    rates: &RateTable,
    rng: &mut R,
) -> Result<RollOutcome, GachaError>
where
    R: RandomSource + ?Sized,
{
    match tier {
        Tier::FiveStar => select_five_star(banner, pool, guarantee5, rates, rng),
        Tier::FourStar => {
            if wins_featured(guarantee4, rates, rng) {
                let item = pick(&banner.featured_four_star, PoolKind::FeaturedFourStar, rng)?;
                Ok(RollOutcome::from_item(item, tier, true))
            } else {
                let item = pick(&pool.standard_four_star, PoolKind::StandardFourStar, rng)?;
                Ok(RollOutcome::from_item(item, tier, false))
            }
        }
        Tier::ThreeStar => {
            let item = pick(&pool.three_star, PoolKind::ThreeStar, rng)?;
            Ok(RollOutcome::from_item(item, tier, false))
        }
    }
}

fn select_five_star<R>(
    banner: &BannerConfig,
    pool: &ItemPool,
    guarantee5: bool,
    rates: &RateTable,
    rng: &mut R,
) -> Result<RollOutcome, GachaError>
where
    R: RandomSource + ?Sized,
{
    let featured = || {
        banner.featured_five_star.as_ref()
            .map(|item| RollOutcome::from_item(item, Tier::FiveStar, true))
            .ok_or(GachaError::PoolExhausted(PoolKind::FeaturedFiveStar))
    };

    match banner.kind {
        BannerKind::Weapon => featured(),
        BannerKind::Character => {
            if wins_featured(guarantee5, rates, rng) {
                featured()
            } else {
                let item = pick(&pool.standard_five_star, PoolKind::StandardFiveStar, rng)?;
                Ok(RollOutcome::from_item(item, Tier::FiveStar, false))
            }
        }
    }
}
