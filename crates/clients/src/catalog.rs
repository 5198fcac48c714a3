use anyhow::{anyhow, bail, Result};
use chrono::NaiveDateTime;
use convene_common::ModuleClient;
use convene_runtime::{Banner, BannerKind, CatalogItem, CatalogSource, ItemKind};
use sqlx::FromRow;

use crate::PostgresClient;

const CHARACTER_COLUMNS: &str = "id, name, rarity, element, weapon_type, image_url";
const WEAPON_COLUMNS: &str = "id, name, rarity, weapon_type, image_url";
const BANNER_COLUMNS: &str = "id, name, banner_type, start_date, end_date, is_active, \
    featured_5star_character_id, featured_4star_character_1_id, featured_4star_character_2_id, featured_4star_character_3_id, \
    featured_5star_weapon_id, featured_4star_weapon_1_id, featured_4star_weapon_2_id, featured_4star_weapon_3_id";

#[derive(Debug, FromRow)]
struct CharacterRow {
    id: i64,
    name: String,
    rarity: i32,
    element: Option<String>,
    weapon_type: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, FromRow)]
struct WeaponRow {
    id: i64,
    name: String,
    rarity: i32,
    weapon_type: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, FromRow)]
struct BannerRow {
    id: i64,
    name: String,
    banner_type: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    is_active: bool,

    featured_5star_character_id: Option<i64>,
    featured_4star_character_1_id: Option<i64>,
    featured_4star_character_2_id: Option<i64>,
    featured_4star_character_3_id: Option<i64>,

    featured_5star_weapon_id: Option<i64>,
    featured_4star_weapon_1_id: Option<i64>,
    featured_4star_weapon_2_id: Option<i64>,
    featured_4star_weapon_3_id: Option<i64>,
}

fn rarity(id: i64, raw: i32) -> Result<u8> {
    u8::try_from(raw).map_err(|_| anyhow!("catalog item {} has out-of-range rarity {}", id, raw))
}

impl TryFrom<CharacterRow> for CatalogItem {
    type Error = anyhow::Error;

    fn try_from(row: CharacterRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            rarity: rarity(row.id, row.rarity)?,
            name: row.name,
            image_url: row.image_url,
            kind: ItemKind::Character,
            element: row.element,
            weapon_type: row.weapon_type,
        })
    }
}

impl TryFrom<WeaponRow> for CatalogItem {
    type Error = anyhow::Error;

    fn try_from(row: WeaponRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            rarity: rarity(row.id, row.rarity)?,
            name: row.name,
            image_url: row.image_url,
            kind: ItemKind::Weapon,
            element: None,
            weapon_type: row.weapon_type,
        })
    }
}

fn parse_banner_kind(raw: &str) -> Result<BannerKind> {
    match raw {
        "CHARACTER" => Ok(BannerKind::Character),
        "WEAPON" => Ok(BannerKind::Weapon),
        other => Err(anyhow!("unknown banner type {:?}", other)),
    }
}

/// Pairs each set featured slot with its fetched item, in slot order.
/// Every id a slot sets must resolve; unset slots are skipped.
fn match_featured_slots(
    banner_id: i64,
    five_id: Option<i64>,
    four_ids: &[Option<i64>],
    items: &[CatalogItem],
) -> Result<(Option<CatalogItem>, Vec<CatalogItem>)> {
    let find = |id: i64| items.iter().find(|item| item.id == id).cloned();
    let mut missing = Vec::new();

    let five_star = five_id.and_then(|id| {
        let item = find(id);
        if item.is_none() {
            missing.push(id);
        }
        item
    });

    let mut four_star = Vec::with_capacity(four_ids.len());
    for id in four_ids.iter().flatten().copied() {
        match find(id) {
            Some(item) => four_star.push(item),
            None => missing.push(id),
        }
    }

    if !missing.is_empty() {
        bail!("banner {} references missing featured items {:?}", banner_id, missing);
    }
    Ok((five_star, four_star))
}

/// Catalog reads against the admin backend's Postgres schema.
#[derive(Clone)]
pub struct PostgresCatalog {
    db: PostgresClient,
}

impl PostgresCatalog {
    pub fn new(db: PostgresClient) -> Self {
        Self { db }
    }

    async fn characters_where(&self, clause: &str, bind: CatalogBind) -> Result<Vec<CatalogItem>> {
        let sql = format!("SELECT {} FROM characters WHERE {} ORDER BY id", CHARACTER_COLUMNS, clause);
        let query = sqlx::query_as::<_, CharacterRow>(&sql);
        let rows = match bind {
            CatalogBind::Ids(ids) => query.bind(ids),
            CatalogBind::Names(names) => query.bind(names),
            CatalogBind::Rarity(rarity) => query.bind(rarity),
        }
        .fetch_all(&**self.db.get_client())
        .await?;

        rows.into_iter().map(CatalogItem::try_from).collect()
    }

    async fn weapons_where(&self, clause: &str, bind: CatalogBind) -> Result<Vec<CatalogItem>> {
        let sql = format!("SELECT {} FROM weapons WHERE {} ORDER BY id", WEAPON_COLUMNS, clause);
        let query = sqlx::query_as::<_, WeaponRow>(&sql);
        let rows = match bind {
            CatalogBind::Ids(ids) => query.bind(ids),
            CatalogBind::Names(names) => query.bind(names),
            CatalogBind::Rarity(rarity) => query.bind(rarity),
        }
        .fetch_all(&**self.db.get_client())
        .await?;

        rows.into_iter().map(CatalogItem::try_from).collect()
    }

    /// Resolves the featured slots of a banner row, keeping slot order.
    async fn resolve_banner(&self, row: BannerRow) -> Result<Banner> {
        let kind = parse_banner_kind(&row.banner_type)?;

        let (five_id, four_ids) = match kind {
            BannerKind::Character => (
                row.featured_5star_character_id,
                [row.featured_4star_character_1_id, row.featured_4star_character_2_id, row.featured_4star_character_3_id],
            ),
            BannerKind::Weapon => (
                row.featured_5star_weapon_id,
                [row.featured_4star_weapon_1_id, row.featured_4star_weapon_2_id, row.featured_4star_weapon_3_id],
            ),
        };

        let wanted = five_id.into_iter().chain(four_ids.iter().flatten().copied()).collect::<Vec<_>>();
        let items = match kind {
            BannerKind::Character => self.characters_where("id = ANY($1)", CatalogBind::Ids(wanted)).await?,
            BannerKind::Weapon => self.weapons_where("id = ANY($1)", CatalogBind::Ids(wanted)).await?,
        };
        let (featured_five_star, featured_four_star) = match_featured_slots(row.id, five_id, &four_ids, &items)?;

        Ok(Banner {
            id: row.id,
            name: row.name,
            kind,
            featured_five_star,
            featured_four_star,
            start_date: row.start_date,
            end_date: row.end_date,
            is_active: row.is_active,
        })
    }
}

enum CatalogBind {
    Ids(Vec<i64>),
    Names(Vec<String>),
    Rarity(i32),
}

#[async_trait::async_trait]
impl CatalogSource for PostgresCatalog {
    async fn banner(&self, banner_id: i64) -> Result<Option<Banner>> {
        let sql = format!("SELECT {} FROM banners WHERE id = $1", BANNER_COLUMNS);
        let row = sqlx::query_as::<_, BannerRow>(&sql)
            .bind(banner_id)
            .fetch_optional(&**self.db.get_client())
            .await?;

        match row {
            Some(row) => Ok(Some(self.resolve_banner(row).await?)),
            None => Ok(None),
        }
    }

    async fn characters_by_names(&self, names: &[&str]) -> Result<Vec<CatalogItem>> {
        let names = names.iter().map(|n| n.to_string()).collect();
        self.characters_where("name = ANY($1)", CatalogBind::Names(names)).await
    }

    async fn characters_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>> {
        self.characters_where("rarity = $1", CatalogBind::Rarity(i32::from(rarity))).await
    }

    async fn weapons_of_rarity(&self, rarity: u8) -> Result<Vec<CatalogItem>> {
        self.weapons_where("rarity = $1", CatalogBind::Rarity(i32::from(rarity))).await
    }

    async fn current_banners(&self, now: NaiveDateTime) -> Result<Vec<Banner>> {
        let sql = format!(
            "SELECT {} FROM banners WHERE is_active = true AND $1 >= start_date AND $1 <= end_date ORDER BY start_date DESC",
            BANNER_COLUMNS
        );
        let rows = sqlx::query_as::<_, BannerRow>(&sql)
            .bind(now)
            .fetch_all(&**self.db.get_client())
            .await?;

        let mut banners = Vec::with_capacity(rows.len());
        for row in rows {
            banners.push(self.resolve_banner(row).await?);
        }
        Ok(banners)
    }
}
