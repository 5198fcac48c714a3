use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, ItemKind};
use crate::gacha::Tier;

/// The item one pull produced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub rarity: u8,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub element: Option<String>,
    pub weapon_type: Option<String>,
    pub is_featured: bool,
    pub tier: Tier,
}

impl RollOutcome {
    pub fn from_item(item: &CatalogItem, tier: Tier, is_featured: bool) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            rarity: item.rarity,
            kind: item.kind,
            element: match item.kind {
                ItemKind::Character => item.element.clone(),
                ItemKind::Weapon => None,
            },
            weapon_type: item.weapon_type.clone(),
            is_featured,
            tier,
        }
    }
}
