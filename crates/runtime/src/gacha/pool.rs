use serde::{Deserialize, Serialize};

use crate::catalog::{Banner, BannerKind, CatalogItem, ItemKind};
use crate::gacha::GachaError;

/// Characters a character banner's lost 50/50 can land on, whatever banner is running.
pub const STANDARD_FIVE_STAR_NAMES: [&str; 5] = ["Calcharo", "Lingyang", "Verina", "Encore", "Jianxin"];

pub const FEATURED_FOUR_STAR_SLOTS: usize = 3;

/// Immutable view of a banner for the length of one batch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    pub banner_id: i64,
    pub name: String,
    pub kind: BannerKind,
    pub featured_five_star: Option<CatalogItem>,
    pub featured_four_star: Vec<CatalogItem>,
}

impl BannerConfig {
    /// Checks every featured reference against the slot's rarity and the banner's item kind.
    ///
    /// Empty slots are accepted here; a pull that needs one fails with `PoolExhausted`.
    pub fn from_banner(banner: &Banner) -> Result<Self, GachaError> {
        let expected_kind = banner.kind.featured_item_kind();

        if let Some(item) = &banner.featured_five_star {
            check_featured(banner, item, 5, expected_kind)?;
        }

        if banner.featured_four_star.len() > FEATURED_FOUR_STAR_SLOTS {
            return Err(GachaError::InvalidBanner(format!(
                "banner {} has {} featured 4-star items, at most {} allowed",
                banner.id,
                banner.featured_four_star.len(),
                FEATURED_FOUR_STAR_SLOTS
            )));
        }
        for item in &banner.featured_four_star {
            check_featured(banner, item, 4, expected_kind)?;
        }

        Ok(Self {
            banner_id: banner.id,
            name: banner.name.clone(),
            kind: banner.kind,
            featured_five_star: banner.featured_five_star.clone(),
            featured_four_star: banner.featured_four_star.clone(),
        })
    }
}

fn check_featured(banner: &Banner, item: &CatalogItem, rarity: u8, kind: ItemKind) -> Result<(), GachaError> {
    if item.rarity != rarity {
        return Err(GachaError::InvalidBanner(format!(
            "banner {}: featured {}-star slot holds {} with rarity {}",
            banner.id, rarity, item.name, item.rarity
        )));
    }
    if item.kind != kind {
        return Err(GachaError::InvalidBanner(format!(
            "banner {}: featured slot holds {} {} but the banner is a {} banner",
            banner.id, item.kind.as_str(), item.name, kind.as_str()
        )));
    }
    Ok(())
}

/// Non-featured candidates per tier for one banner kind.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemPool {
    pub standard_five_star: Vec<CatalogItem>,
    pub standard_four_star: Vec<CatalogItem>,
    pub three_star: Vec<CatalogItem>,
}

impl ItemPool {
    /// Partitions catalog rows into the pools a banner of `kind` draws from.
    ///
    /// Inputs are filtered again on rarity and kind, so a loose catalog query
    /// cannot leak a wrong item into a pool. Weapon banners never use a
    /// standard 5★ pool; their 4★ standard pool mixes characters and weapons.
    /// The 3★ tier is weapons only.
    pub fn build(
        kind: BannerKind,
        standard_five_star_candidates: Vec<CatalogItem>,
        four_star_characters: Vec<CatalogItem>,
        four_star_weapons: Vec<CatalogItem>,
        three_star_weapons: Vec<CatalogItem>,
    ) -> Self {
        let standard_five_star = match kind {
            BannerKind::Character => standard_five_star_candidates.into_iter()
                .filter(|c| c.kind == ItemKind::Character && c.rarity == 5)
                .filter(|c| STANDARD_FIVE_STAR_NAMES.contains(&c.name.as_str()))
                .collect(),
            BannerKind::Weapon => vec![],
        };

        let mut standard_four_star = four_star_characters.into_iter()
            .filter(|c| c.kind == ItemKind::Character && c.rarity == 4)
            .collect::<Vec<_>>();
        if kind == BannerKind::Weapon {
            standard_four_star.extend(four_star_weapons.into_iter()
                .filter(|w| w.kind == ItemKind::Weapon && w.rarity == 4));
        }

        let three_star = three_star_weapons.into_iter()
            .filter(|w| w.kind == ItemKind::Weapon && w.rarity == 3)
            .collect();

        Self {
            standard_five_star,
            standard_four_star,
            three_star,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn banner(kind: BannerKind, five: CatalogItem, four: Vec<CatalogItem>) -> Banner {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        Banner {
            id: 7,
            name: "test".into(),
            kind,
            featured_five_star: Some(five),
            featured_four_star: four,
            start_date: day,
            end_date: day,
            is_active: true,
        }
    }

    #[test]
    fn rejects_wrong_rarity_in_five_star_slot() {
        let b = banner(BannerKind::Character, CatalogItem::character(1, "Chixia", 4), vec![]);
        assert!(matches!(BannerConfig::from_banner(&b), Err(GachaError::InvalidBanner(_))));
    }

    #[test]
    fn rejects_weapon_on_character_banner() {
        let b = banner(
            BannerKind::Character,
            CatalogItem::character(1, "Jinhsi", 5),
            vec![CatalogItem::weapon(2, "Lustrous Razor", 4)],
        );
        assert!(matches!(BannerConfig::from_banner(&b), Err(GachaError::InvalidBanner(_))));
    }

    #[test]
    fn rejects_more_than_three_featured_four_stars() {
        let four = (0..4).map(|i| CatalogItem::weapon(10 + i, format!("w{i}"), 4)).collect();
        let b = banner(BannerKind::Weapon, CatalogItem::weapon(1, "Ages of Harvest", 5), four);
        assert!(matches!(BannerConfig::from_banner(&b), Err(GachaError::InvalidBanner(_))));
    }

    #[test]
    fn standard_five_star_pool_is_the_fixed_allow_list() {
        let pool = ItemPool::build(
            BannerKind::Character,
            vec![
                CatalogItem::character(1, "Verina", 5),
                CatalogItem::character(2, "Jinhsi", 5),
                CatalogItem::character(3, "Encore", 4),
            ],
            vec![],
            vec![],
            vec![],
        );
        let names = pool.standard_five_star.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Verina"]);
    }

    #[test]
    fn weapon_banner_mixes_four_star_kinds_and_drops_five_star_pool() {
        let pool = ItemPool::build(
            BannerKind::Weapon,
            vec![CatalogItem::character(1, "Verina", 5)],
            vec![CatalogItem::character(2, "Sanhua", 4)],
            vec![CatalogItem::weapon(3, "Hollow Mirage", 4)],
            vec![CatalogItem::weapon(4, "Originite: Type I", 3), CatalogItem::character(5, "Rover", 3)],
        );
        assert!(pool.standard_five_star.is_empty());
        assert_eq!(pool.standard_four_star.len(), 2);
        assert_eq!(pool.three_star.len(), 1);

        let character_pool = ItemPool::build(
            BannerKind::Character,
            vec![],
            vec![CatalogItem::character(2, "Sanhua", 4)],
            vec![CatalogItem::weapon(3, "Hollow Mirage", 4)],
            vec![],
        );
        assert_eq!(character_pool.standard_four_star.len(), 1);
    }
}
