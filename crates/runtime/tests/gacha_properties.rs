use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use convene_runtime::{
    five_star_rate, BannerConfig, BannerKind, CatalogItem, GachaEngine, GachaError, ItemPool,
    PityState, PoolKind, ScriptedSource, Tier,
};

fn character_banner() -> (BannerConfig, ItemPool) {
    let banner = BannerConfig {
        banner_id: 1,
        name: "When Thunder Pours".into(),
        kind: BannerKind::Character,
        featured_five_star: Some(CatalogItem::character(100, "Yinlin", 5)),
        featured_four_star: vec![
            CatalogItem::character(40, "Taoqi", 4),
            CatalogItem::character(41, "Aalto", 4),
            CatalogItem::character(42, "Yuanwu", 4),
        ],
    };
    let pool = ItemPool {
        standard_five_star: vec![
            CatalogItem::character(1, "Calcharo", 5),
            CatalogItem::character(2, "Lingyang", 5),
            CatalogItem::character(3, "Verina", 5),
            CatalogItem::character(4, "Encore", 5),
            CatalogItem::character(5, "Jianxin", 5),
        ],
        standard_four_star: vec![
            CatalogItem::character(43, "Chixia", 4),
            CatalogItem::character(44, "Mortefi", 4),
        ],
        three_star: vec![
            CatalogItem::weapon(300, "Tyro Sword", 3),
            CatalogItem::weapon(301, "Guardian Pistols", 3),
        ],
    };
    (banner, pool)
}

fn weapon_banner() -> (BannerConfig, ItemPool) {
    let banner = BannerConfig {
        banner_id: 2,
        name: "Stringmaster".into(),
        kind: BannerKind::Weapon,
        featured_five_star: Some(CatalogItem::weapon(500, "Stringmaster", 5)),
        featured_four_star: vec![
            CatalogItem::weapon(501, "Cadenza", 4),
            CatalogItem::weapon(502, "Overture", 4),
            CatalogItem::weapon(503, "Commando of Conviction", 4),
        ],
    };
    let pool = ItemPool {
        standard_five_star: vec![],
        standard_four_star: vec![
            CatalogItem::character(43, "Chixia", 4),
            CatalogItem::weapon(504, "Hollow Mirage", 4),
        ],
        three_star: vec![CatalogItem::weapon(300, "Tyro Sword", 3)],
    };
    (banner, pool)
}

#[test]
fn rate_curve_is_monotonic() {
    for low in 0..120u32 {
        for high in low + 1..=120 {
            assert!(five_star_rate(low) <= five_star_rate(high), "{low} vs {high}");
        }
    }
}

#[test]
fn hard_pity_always_gives_five_star() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (outcome, state) = engine.pull(&banner, &pool, PityState::new(79, 3, false, false), &mut rng)?;
        assert_eq!(outcome.tier, Tier::FiveStar);
        assert_eq!(state.pity5, 0);
        assert_eq!(state.guarantee5, !outcome.is_featured);
    }
    Ok(())
}

#[test]
fn four_star_hard_pity_never_gives_three_star() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (outcome, _) = engine.pull(&banner, &pool, PityState::new(10, 9, false, false), &mut rng)?;
        assert_ne!(outcome.tier, Tier::ThreeStar);
    }
    Ok(())
}

#[test]
fn lost_fifty_fifty_is_guaranteed_next_time() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();

    // hard pity, 0.9 loses the 50/50, 0.0 picks Calcharo
    let mut rng = ScriptedSource::new([0.9, 0.0]);
    let (lost, state) = engine.pull(&banner, &pool, PityState::new(79, 0, false, false), &mut rng)?;
    assert!(!lost.is_featured);
    assert_eq!(lost.name, "Calcharo");
    assert!(state.guarantee5);

    // a draw sequence that would lose any 50/50 still yields the featured 5★
    let mut rng = ScriptedSource::constant(0.99);
    let state = PityState { pity5: 79, ..state };
    let (won, state) = engine.pull(&banner, &pool, state, &mut rng)?;
    assert!(won.is_featured);
    assert_eq!(won.id, 100);
    assert!(!state.guarantee5);
    Ok(())
}

#[test]
fn lost_four_star_fifty_fifty_is_guaranteed_next_time() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();

    // 0.99 misses the 5★ roll, 4★ hard pity, 0.9 loses the 50/50, 0.0 picks Chixia
    let mut rng = ScriptedSource::new([0.99, 0.9, 0.0]);
    let (lost, state) = engine.pull(&banner, &pool, PityState::new(0, 9, false, false), &mut rng)?;
    assert_eq!(lost.tier, Tier::FourStar);
    assert!(!lost.is_featured);
    assert_eq!(lost.name, "Chixia");
    assert!(state.guarantee4);
    assert!(!state.guarantee5);

    let mut rng = ScriptedSource::constant(0.99);
    let state = PityState { pity4: 9, ..state };
    let (won, state) = engine.pull(&banner, &pool, state, &mut rng)?;
    assert_eq!(won.tier, Tier::FourStar);
    assert!(won.is_featured);
    assert_eq!(won.id, 42);
    assert!(!state.guarantee4);
    assert_eq!(state.pity4, 0);
    // the 5★ roll and the featured index, no 50/50 draw
    assert_eq!(rng.consumed(), 2);
    Ok(())
}

#[test]
fn weapon_banner_five_star_is_always_featured() -> Result<()> {
    let (banner, pool) = weapon_banner();
    let engine = GachaEngine::default();

    let mut five_stars = 0;
    let mut state = PityState::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let batch = engine.roll(&banner, &pool, 10, state, &mut rng)?;
        for outcome in batch.items.iter().filter(|o| o.tier == Tier::FiveStar) {
            assert!(outcome.is_featured);
            assert_eq!(outcome.id, 500);
            five_stars += 1;
        }
        assert!(!batch.state.guarantee5);
        state = batch.state;
    }
    assert!(five_stars > 0);
    Ok(())
}

#[test]
fn batches_return_exactly_count_outcomes_in_pull_order() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();

    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(engine.roll(&banner, &pool, 1, PityState::default(), &mut rng)?.items.len(), 1);

    // replaying the same seed pull by pull gives the batch's order
    let mut rng = StdRng::seed_from_u64(99);
    let batch = engine.roll(&banner, &pool, 10, PityState::new(70, 5, false, false), &mut rng)?;
    assert_eq!(batch.items.len(), 10);

    let mut rng = StdRng::seed_from_u64(99);
    let mut state = PityState::new(70, 5, false, false);
    for expected in &batch.items {
        let (outcome, next) = engine.pull(&banner, &pool, state, &mut rng)?;
        assert_eq!(&outcome, expected);
        state = next;
    }
    assert_eq!(state, batch.state);
    Ok(())
}

#[test]
fn pity_gap_never_exceeds_hard_pity() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();
    let mut rng = StdRng::seed_from_u64(2024);

    let mut state = PityState::default();
    let mut since_five = 0;
    let mut since_four = 0;
    for _ in 0..2_000 {
        let batch = engine.roll(&banner, &pool, 10, state, &mut rng)?;
        for outcome in &batch.items {
            assert_eq!(outcome.rarity, outcome.tier.rarity());
            since_five += 1;
            since_four += 1;
            match outcome.tier {
                Tier::FiveStar => since_five = 0,
                Tier::FourStar => since_four = 0,
                Tier::ThreeStar => {}
            }
            assert!(since_five < 80);
            // a 5★ at 4★ hard pity pushes the 4★ one pull further
            assert!(since_four < 20);
        }
        state = batch.state;
    }
    Ok(())
}

#[test]
fn featured_rate_is_near_half_without_guarantees() -> Result<()> {
    let (banner, pool) = character_banner();
    let engine = GachaEngine::default();
    let mut rng = StdRng::seed_from_u64(5);

    let mut featured: u32 = 0;
    let trials: u32 = 4_000;
    for _ in 0..trials {
        let (outcome, _) = engine.pull(&banner, &pool, PityState::new(79, 0, false, false), &mut rng)?;
        if outcome.is_featured {
            featured += 1;
        }
    }
    let ratio = f64::from(featured) / f64::from(trials);
    assert!((0.45..0.55).contains(&ratio), "featured ratio {ratio}");
    Ok(())
}

#[test]
fn exhausted_pool_aborts_the_batch() {
    let (banner, mut pool) = character_banner();
    pool.three_star.clear();

    let mut rng = ScriptedSource::constant(0.99);
    let result = GachaEngine::default().roll(&banner, &pool, 10, PityState::default(), &mut rng);
    assert!(matches!(result, Err(GachaError::PoolExhausted(PoolKind::ThreeStar))));
}

#[test]
fn missing_standard_five_star_pool_fails_on_a_lost_fifty_fifty() {
    let (banner, mut pool) = character_banner();
    pool.standard_five_star.clear();

    let mut rng = ScriptedSource::constant(0.99);
    let result = GachaEngine::default().pull(&banner, &pool, PityState::new(79, 0, false, false), &mut rng);
    assert!(matches!(result, Err(GachaError::PoolExhausted(PoolKind::StandardFiveStar))));
}
