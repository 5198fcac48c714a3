use serde::{Deserialize, Serialize};

use crate::catalog::{BannerKind, CatalogSource};
use crate::gacha::{
    BannerConfig, DrawType, GachaEngine, GachaError, ItemPool, PityState, RandomSource, RollBatch,
    STANDARD_FIVE_STAR_NAMES,
};

/// A roll request as sent by the client, carrying its own pity state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GachaRequest {
    pub banner_id: i64,
    pub count: u32,
    #[serde(flatten)]
    pub state: PityState,
    /// Makes the batch reproducible when set.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Reads every pool a banner of `kind` can draw from, in one pass.
pub async fn load_item_pool(catalog: &dyn CatalogSource, kind: BannerKind) -> anyhow::Result<ItemPool> {
    let standard_five_star = match kind {
        BannerKind::Character => catalog.characters_by_names(&STANDARD_FIVE_STAR_NAMES).await?,
        BannerKind::Weapon => vec![],
    };
    let four_star_characters = catalog.characters_of_rarity(4).await?;
    let four_star_weapons = match kind {
        BannerKind::Character => vec![],
        BannerKind::Weapon => catalog.weapons_of_rarity(4).await?,
    };
    let three_star_weapons = catalog.weapons_of_rarity(3).await?;

    Ok(ItemPool::build(
        kind,
        standard_five_star,
        four_star_characters,
        four_star_weapons,
        three_star_weapons,
    ))
}

/// Validates the request, snapshots the banner and its pools, then runs the batch.
pub async fn perform_gacha<R>(
    engine: &GachaEngine,
    catalog: &dyn CatalogSource,
    request: &GachaRequest,
    rng: &mut R,
) -> Result<RollBatch, GachaError>
where
    R: RandomSource + Send + ?Sized,
{
    DrawType::try_from(request.count)?;

    let banner = catalog.banner(request.banner_id).await?
        .ok_or(GachaError::UnknownBanner(request.banner_id))?;
    let config = BannerConfig::from_banner(&banner)?;
    let pool = load_item_pool(catalog, config.kind).await?;

    tracing::debug!(
        "[perform_gacha] banner {} ({:?}): {} standard 5★, {} standard 4★, {} 3★",
        config.banner_id,
        config.kind,
        pool.standard_five_star.len(),
        pool.standard_four_star.len(),
        pool.three_star.len()
    );

    engine.roll(&config, &pool, request.count, request.state, rng)
}
