use super::*;

#[test]
fn query_key_is_extracted() {
    assert_eq!(page_key_from_query("?key=about"), Some("about".to_string()));
    assert_eq!(page_key_from_query("key=about"), Some("about".to_string()));
}

#[test]
fn query_key_found_among_other_pairs() {
    assert_eq!(
        page_key_from_query("?utm=x&key=games&lang=en"),
        Some("games".to_string())
    );
}

#[test]
fn malformed_queries_yield_none() {
    assert_eq!(page_key_from_query(""), None);
    assert_eq!(page_key_from_query("?"), None);
    assert_eq!(page_key_from_query("?key="), None);
    assert_eq!(page_key_from_query("?keys=about"), None);
    assert_eq!(page_key_from_query("about"), None);
}

#[test]
fn first_key_pair_wins() {
    assert_eq!(
        page_key_from_query("?key=a&key=b"),
        Some("a".to_string())
    );
}

#[test]
fn ctx_texture_width_requires_loaded_texture() {
    use crate::stage::memory::{MemoryStage, StaticAssets};

    let mut stage = MemoryStage::new(800.0, 600.0);
    let mut assets = StaticAssets::new();
    assets.insert("logo", 120.0, 40.0);
    let mut ctx = StageCtx {
        stage: &mut stage,
        assets: &mut assets,
    };

    assert!(ctx.texture_width("logo").is_err());
    ctx.load_textures(["logo"]).unwrap();
    assert_eq!(ctx.texture_width("logo").unwrap(), 120.0);
}

#[test]
fn ctx_load_textures_stops_at_unknown_key() {
    use crate::stage::memory::{MemoryStage, StaticAssets};

    let mut stage = MemoryStage::new(800.0, 600.0);
    let mut assets = StaticAssets::new();
    assets.insert("a", 10.0, 10.0);
    let mut ctx = StageCtx {
        stage: &mut stage,
        assets: &mut assets,
    };

    let err = ctx.load_textures(["a", "missing", "a"]).unwrap_err();
    assert!(matches!(err, MarqueeError::Asset(_)));
}
