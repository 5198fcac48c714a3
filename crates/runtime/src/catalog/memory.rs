use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::{Banner, CatalogItem, CatalogSource, ItemKind};

/// Serialized form of a whole catalog, as loaded from a JSON file.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub characters: Vec<CatalogItem>,
    #[serde(default)]
    pub weapons: Vec<CatalogItem>,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    snapshot: CatalogSnapshot,
}

impl InMemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog snapshot {}", path.display()))?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalog snapshot {}", path.display()))?;

        tracing::info!(
            "loaded catalog snapshot: {} characters, {} weapons, {} banners",
            snapshot.characters.len(),
            snapshot.weapons.len(),
            snapshot.banners.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn with_item(mut self, item: CatalogItem) -> Self {
        match item.kind {
            ItemKind::Character => self.snapshot.characters.push(item),
            ItemKind::Weapon => self.snapshot.weapons.push(item),
        }
        self
    }

    pub fn with_banner(mut self, banner: Banner) -> Self {
        self.snapshot.banners.push(banner);
        self
    }
}

#[async_trait::async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn banner(&self, banner_id: i64) -> Result<Option<Banner>> {
        Ok(self.snapshot.banners.iter().find(|b| b.id == banner_id).cloned())
    }

    async fn characters_by_names(&self, names: &[&str]) -> Result<Vec<CatalogItem>> {
        Ok(self.snapshot.characters.iter()
            .filter(|c| names.contains(&c.name.as_str()))
            .cloned()
            .collect())
    }

    async fn characters_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>> {
        Ok(self.snapshot.characters.iter()
            .filter(|c| c.rarity == rarity)
            .cloned()
            .collect())
    }

    async fn weapons_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>> {
        Ok(self.snapshot.weapons.iter()
            .filter(|w| w.rarity == rarity)
            .cloned()
            .collect())
    }

    async fn current_banners(&self, now: NaiveDateTime) -> Result<Vec<Banner>> {
        let mut banners = self.snapshot.banners.iter()
            .filter(|b| b.is_running_at(now))
            .cloned()
            .collect::<Vec<_>>();
        banners.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(banners)
    }
}
