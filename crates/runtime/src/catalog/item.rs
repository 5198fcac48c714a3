use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Character,
    Weapon,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "CHARACTER",
            Self::Weapon => "WEAPON",
        }
    }
}

/// A character or weapon as the roll engine sees it: identity, rarity and
/// the fields shown on a result card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rarity: u8,
    pub kind: ItemKind,

    // weapons never carry an element
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub weapon_type: Option<String>,
}

impl CatalogItem {
    pub fn character(id: i64, name: impl Into<String>, rarity: u8) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
            rarity,
            kind: ItemKind::Character,
            element: None,
            weapon_type: None,
        }
    }

    pub fn weapon(id: i64, name: impl Into<String>, rarity: u8) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
            rarity,
            kind: ItemKind::Weapon,
            element: None,
            weapon_type: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        if self.kind == ItemKind::Character {
            self.element = Some(element.into());
        }
        self
    }

    pub fn with_weapon_type(mut self, weapon_type: impl Into<String>) -> Self {
        self.weapon_type = Some(weapon_type.into());
        self
    }
}
