use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, ItemKind};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerKind {
    #[default]
    Character,
    Weapon,
}

impl BannerKind {
    /// Item kind the banner's featured slots are filled with.
    pub fn featured_item_kind(&self) -> ItemKind {
        match self {
            Self::Character => ItemKind::Character,
            Self::Weapon => ItemKind::Weapon,
        }
    }
}

/// Banner row as read from the catalog, with its featured references resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub name: String,
    pub kind: BannerKind,

    #[serde(default)]
    pub featured_five_star: Option<CatalogItem>,
    #[serde(default)]
    pub featured_four_star: Vec<CatalogItem>,

    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Banner {
    /// Whether the banner is enabled and `now` falls inside its schedule, bounds included.
    pub fn is_running_at(&self, now: NaiveDateTime) -> bool {
        self.is_active && self.start_date <= now && now <= self.end_date
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedFiveStarIds {
    pub character_ids: BTreeSet<i64>,
    pub weapon_ids: BTreeSet<i64>,
}

/// Collects the featured 5★ ids of the given banners, split by banner kind.
pub fn featured_five_star_ids(banners: &[Banner]) -> FeaturedFiveStarIds {
    let mut ids = FeaturedFiveStarIds::default();
    for banner in banners {
        let Some(featured) = &banner.featured_five_star else {
            continue;
        };
        match banner.kind {
            BannerKind::Character => ids.character_ids.insert(featured.id),
            BannerKind::Weapon => ids.weapon_ids.insert(featured.id),
        };
    }
    ids
}
