mod catalog;
mod gacha;

pub use catalog::{
    featured_five_star_ids, Banner, BannerKind, CatalogItem, CatalogSnapshot, CatalogSource,
    FeaturedFiveStarIds, InMemoryCatalog, ItemKind,
};
pub use gacha::{
    five_star_rate, load_item_pool, perform_gacha, select_item, wins_featured, BannerConfig,
    DrawType, GachaEngine, GachaError, GachaRequest, ItemPool, PityState, PoolKind, RandomSource,
    RateTable, RollBatch, RollOutcome, ScriptedSource, Tier, STANDARD_FIVE_STAR_NAMES,
};
