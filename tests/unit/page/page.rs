use super::*;
use crate::page::model::NavSpec;
use crate::stage::memory::{MemoryStage, NodeKind, StaticAssets};

struct DemoPage;

impl PageBehavior for DemoPage {
    fn settings(&self) -> PageSettings {
        PageSettings {
            tm_title: true,
            textures: vec!["art".to_string()],
            nav: vec![NavSpec {
                texture: "navHome".to_string(),
                page: "home".to_string(),
            }],
            story: vec!["first slide".to_string(), "second slide".to_string()],
            ..PageSettings::default()
        }
    }

    fn init(&mut self, body: &mut PageBody, ctx: &mut StageCtx<'_>) -> MarqueeResult<()> {
        let art = ctx.stage.create_visual("art", None);
        body.push_frame(art, ctx.stage);
        body.attach_story(ctx.stage);
        Ok(())
    }
}

fn demo_assets() -> StaticAssets {
    let mut assets = StaticAssets::new();
    assets.insert("title", 600.0, 200.0);
    assets.insert("titleShadow", 600.0, 200.0);
    assets.insert("slogan", 400.0, 100.0);
    assets.insert("sloganShadow", 400.0, 100.0);
    assets.insert("TM", 32.0, 32.0);
    assets.insert("art", 500.0, 500.0);
    assets.insert("navHome", 180.0, 60.0);
    assets
}

fn demo_page(stage: &mut MemoryStage, assets: &mut StaticAssets) -> Page {
    let mut ctx = StageCtx { stage, assets };
    Page::init("demo", Box::new(DemoPage), &mut ctx, true).unwrap()
}

#[test]
fn init_loads_textures_and_builds_furniture() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let page = demo_page(&mut stage, &mut assets);

    for key in ["title", "titleShadow", "slogan", "sloganShadow", "art", "navHome"] {
        assert!(assets.is_loaded(key), "texture '{key}' not loaded");
    }

    let body = page.body();
    assert_eq!(page.key(), "demo");
    assert_eq!(body.frames().len(), 2);
    assert_eq!(body.cycle().frame_count(), 2);

    // Shadow sits under its owner in creation order.
    assert!(body.title_shadow < body.title);
    assert!(body.slogan_shadow < body.slogan);

    let tm = body.tm_title.unwrap();
    assert_eq!(stage.node(tm).alpha, 0.125);
    assert!(body.tm_slogan.is_none());
}

#[test]
fn init_wires_click_actions() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let page = demo_page(&mut stage, &mut assets);
    let body = page.body();

    assert_eq!(
        stage.click_action(body.title),
        Some(&ClickAction::AdvanceFrame {
            offset: 1,
            emphasis: Emphasis::Title,
        })
    );
    assert_eq!(
        stage.click_action(body.slogan),
        Some(&ClickAction::AdvanceFrame {
            offset: 1,
            emphasis: Emphasis::Slogan,
        })
    );

    let nav_node = stage
        .children(body.container)
        .into_iter()
        .find(|id| {
            matches!(
                &stage.node(*id).kind,
                NodeKind::Visual { texture } if texture == "navHome"
            )
        })
        .unwrap();
    assert_eq!(
        stage.click_action(nav_node),
        Some(&ClickAction::LoadPage("home".to_string()))
    );

    let story_node = body.frames()[1].node;
    assert_eq!(stage.click_action(story_node), Some(&ClickAction::AdvanceStory));
}

#[test]
fn hidden_ui_hides_nav() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut ctx = StageCtx {
        stage: &mut stage,
        assets: &mut assets,
    };
    let page = Page::init("demo", Box::new(DemoPage), &mut ctx, false).unwrap();

    let nav_node = stage
        .children(page.body().container)
        .into_iter()
        .find(|id| {
            matches!(
                &stage.node(*id).kind,
                NodeKind::Visual { texture } if texture == "navHome"
            )
        })
        .unwrap();
    assert!(!stage.node(nav_node).visible);
}

#[test]
fn only_first_frame_starts_visible() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let page = demo_page(&mut stage, &mut assets);

    let frames = page.body().frames();
    assert!(stage.node(frames[0].node).visible);
    assert!(!stage.node(frames[1].node).visible);
}

#[test]
fn layout_places_title_and_slogan_on_golden_anchors() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);
    let viewport = Viewport::new(1920.0, 1080.0);

    {
        let mut ctx = StageCtx {
            stage: &mut stage,
            assets: &mut assets,
        };
        page.layout_base(&mut ctx, &viewport).unwrap();
    }

    let body = page.body();
    let title = stage.node(body.title);
    assert_eq!(title.pos.x, 0.0);
    assert!((title.pos.y - (-INV_PHI * viewport.world_center_y())).abs() < 1e-9);

    let shadow = stage.node(body.title_shadow);
    assert!((shadow.pos.x - (title.pos.x + 20.0)).abs() < 1e-9);
    assert!((shadow.pos.y - (title.pos.y + 20.0)).abs() < 1e-9);

    let slogan = stage.node(body.slogan);
    assert!((slogan.pos.y - INV_PHI * viewport.world_center_y()).abs() < 1e-9);
    assert_eq!(slogan.scale, 0.75);

    // Story frame keeps unit scale in landscape.
    assert_eq!(stage.node(body.frames()[1].node).scale, 1.0);
}

#[test]
fn portrait_layout_enlarges_story_frame() {
    let mut stage = MemoryStage::new(1080.0, 1920.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);
    let viewport = Viewport::new(1080.0, 1920.0);

    let mut ctx = StageCtx {
        stage: &mut stage,
        assets: &mut assets,
    };
    page.layout_base(&mut ctx, &viewport).unwrap();
    drop(ctx);

    assert_eq!(stage.node(page.body().frames()[1].node).scale, 1.5);
}

#[test]
fn frame_advance_flips_visibility_once() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);

    assert!(page.request_frame_advance(1));
    assert!(!page.request_frame_advance(1));

    let frames: Vec<_> = page.body().frames().iter().map(|f| f.node).collect();
    let mut flips = 0;
    let mut incoming_shown = false;
    for _ in 0..25 {
        let mut ctx = StageCtx {
            stage: &mut stage,
            assets: &mut assets,
        };
        page.update_base(&mut ctx, 1.0, Rgb::new(10, 20, 30));
        drop(ctx);
        let shown = stage.node(frames[1]).visible;
        if shown != incoming_shown {
            flips += 1;
            incoming_shown = shown;
        }
        assert_ne!(stage.node(frames[0]).visible, shown);
    }
    assert_eq!(flips, 1);
    assert!(incoming_shown);
    assert!(!page.body().cycle().is_transitioning());
}

#[test]
fn visible_story_ticks_and_takes_tint() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);

    // Bring the story frame (index 1) on screen.
    page.request_frame_advance(1);
    for _ in 0..25 {
        let mut ctx = StageCtx {
            stage: &mut stage,
            assets: &mut assets,
        };
        page.update_base(&mut ctx, 1.0, Rgb::new(10, 20, 30));
    }

    let story = page.body().frames()[1].story.as_ref().unwrap();
    assert_eq!(story.rotator.current_index(), 0);
    let slides = stage.children(story.node);
    assert!(stage.node(slides[0]).visible);
    assert!(!stage.node(slides[1]).visible);
    assert_eq!(stage.node(slides[0]).tint, Some(Rgb::new(10, 20, 30)));

    // Dwell time advances at one hundredth of tick time.
    let before = story.rotator.elapsed();
    let mut ctx = StageCtx {
        stage: &mut stage,
        assets: &mut assets,
    };
    page.update_base(&mut ctx, 1.0, Rgb::new(10, 20, 30));
    drop(ctx);
    let story = page.body().frames()[1].story.as_ref().unwrap();
    assert!((story.rotator.elapsed() - before - 0.01).abs() < 1e-9);
}

#[test]
fn advance_story_only_touches_visible_story_frame() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);

    // Frame 0 (no story) is visible; the click is a no-op.
    page.advance_story();
    let story = page.body().frames()[1].story.as_ref().unwrap();
    assert_eq!(story.rotator.current_index(), 0);

    page.request_frame_advance(1);
    for _ in 0..25 {
        let mut ctx = StageCtx {
            stage: &mut stage,
            assets: &mut assets,
        };
        page.update_base(&mut ctx, 1.0, Rgb::default());
    }
    page.advance_story();
    let story = page.body().frames()[1].story.as_ref().unwrap();
    assert_eq!(story.rotator.current_index(), 1);
}

#[test]
fn reload_resets_frames_and_story() {
    let mut stage = MemoryStage::new(1920.0, 1080.0);
    let mut assets = demo_assets();
    let mut page = demo_page(&mut stage, &mut assets);

    page.request_frame_advance(1);
    for _ in 0..25 {
        let mut ctx = StageCtx {
            stage: &mut stage,
            assets: &mut assets,
        };
        page.update_base(&mut ctx, 1.0, Rgb::default());
    }
    page.advance_story();

    page.reload(&mut stage);
    let body = page.body();
    assert_eq!(body.cycle().visible_index(), 0);
    assert!(stage.node(body.frames()[0].node).visible);
    assert!(!stage.node(body.frames()[1].node).visible);
    let story = body.frames()[1].story.as_ref().unwrap();
    assert_eq!(story.rotator.current_index(), 0);
    assert_eq!(stage.node(body.frame_container).scale, 1.0);
}
