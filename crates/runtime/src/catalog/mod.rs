use anyhow::Result;
use chrono::NaiveDateTime;

mod banner;
mod item;
mod memory;

pub use banner::{featured_five_star_ids, Banner, BannerKind, FeaturedFiveStarIds};
pub use item::{CatalogItem, ItemKind};
pub use memory::{CatalogSnapshot, InMemoryCatalog};

/// Read-only view of the character/weapon/banner catalog.
///
/// The roll engine calls these once per batch, before any pull happens.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn banner(&self, banner_id: i64) -> Result<Option<Banner>>;

    async fn characters_by_names(&self, names: &[&str]) -> Result<Vec<CatalogItem>>;
    async fn characters_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>>;
    async fn weapons_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>>;

    /// Banners that are enabled and scheduled around `now`.
    async fn current_banners(&self, now: NaiveDateTime) -> Result<Vec<Banner>>;
}
