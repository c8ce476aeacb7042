use kurbo::Point;

use crate::{
    animation::accel::Emphasis,
    foundation::core::{INV_PHI, Rgb},
    foundation::error::MarqueeResult,
    layout::solver::{RowAlign, RowArgs, RowItem, Viewport, arrange_row},
    page::frames::FrameCycle,
    page::model::{PageBehavior, PageSettings},
    page::story::StoryRotator,
    stage::backend::{ClickAction, NodeId, Stage, StageCtx},
};

/// Tick-time scale applied to story dwell time.
const STORY_TIME_SCALE: f64 = 0.01;
/// Per-slide dwell in story time units.
const STORY_DWELL: f64 = 3.0;
/// Alpha of trademark marks.
const TM_ALPHA: f64 = 0.125;
/// World-unit drop offset of title/slogan shadows.
const SHADOW_OFFSET: f64 = 20.0;

/// A story frame: a container of slide visuals plus its rotation state.
#[derive(Debug)]
pub struct Story {
    /// Container node doubling as the frame node.
    pub node: NodeId,
    slides: Vec<NodeId>,
    /// Rotation state machine.
    pub rotator: StoryRotator,
}

/// One of a page's mutually exclusive visual states.
#[derive(Debug)]
pub struct Frame {
    /// Display node shown when this frame is active.
    pub node: NodeId,
    /// Present when the frame rotates story slides.
    pub story: Option<Story>,
}

#[derive(Debug)]
struct NavNode {
    node: NodeId,
    texture: String,
}

/// The shared scaffold every page is built on.
///
/// Owns the page's display nodes, its frame collection and cycle state, and
/// the story prepared from settings. Behaviors receive `&mut PageBody` in
/// their hooks to add frames and adjust furniture.
#[derive(Debug)]
pub struct PageBody {
    key: String,
    settings: PageSettings,
    /// Root node of the page, attached to the controller on display.
    pub container: NodeId,
    /// Parent node of all frames.
    pub frame_container: NodeId,
    /// Title visual.
    pub title: NodeId,
    /// Title drop shadow visual.
    pub title_shadow: NodeId,
    /// Slogan visual.
    pub slogan: NodeId,
    /// Slogan drop shadow visual.
    pub slogan_shadow: NodeId,
    /// Trademark mark next to the title, when configured.
    pub tm_title: Option<NodeId>,
    /// Trademark mark next to the slogan, when configured.
    pub tm_slogan: Option<NodeId>,
    nav: Vec<NavNode>,
    frames: Vec<Frame>,
    cycle: FrameCycle,
    pending_story: Option<Story>,
}

impl PageBody {
    /// Stable page key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Settings the scaffold was built from.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Frames in cycling order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame cycle state.
    pub fn cycle(&self) -> &FrameCycle {
        &self.cycle
    }

    /// Append a plain frame. Frames are fixed once the page goes live; this
    /// is only meaningful inside [`PageBehavior::init`].
    pub fn push_frame(&mut self, node: NodeId, stage: &mut dyn Stage) {
        stage.attach(self.frame_container, node);
        self.frames.push(Frame { node, story: None });
    }

    /// Append the story prepared from settings as a frame. No-op when the
    /// settings declared no story.
    pub fn attach_story(&mut self, stage: &mut dyn Stage) {
        if let Some(story) = self.pending_story.take() {
            stage.attach(self.frame_container, story.node);
            self.frames.push(Frame {
                node: story.node,
                story: Some(story),
            });
        }
    }

    /// Position a node at viewport-percentage coordinates in world units.
    pub fn place(
        &self,
        stage: &mut dyn Stage,
        viewport: &Viewport,
        node: NodeId,
        x_percent: f64,
        y_percent: f64,
        scale: f64,
    ) {
        stage.set_position(
            node,
            Point::new(
                x_percent * viewport.world_center_x(),
                y_percent * viewport.world_center_y(),
            ),
        );
        stage.set_scale(node, scale);
    }

    fn reset_frames(&mut self, stage: &mut dyn Stage) {
        self.cycle = FrameCycle::new(self.frames.len());
        stage.set_scale(self.frame_container, 1.0);
        for (index, frame) in self.frames.iter_mut().enumerate() {
            stage.set_visible(frame.node, index == 0);
            if let Some(story) = &mut frame.story {
                story.rotator.reset();
                apply_story(stage, story, None);
            }
        }
    }
}

/// A fully initialized page: scaffold plus its behavior.
pub struct Page {
    body: PageBody,
    behavior: Box<dyn PageBehavior>,
}

impl Page {
    /// Build and initialize a page in one step.
    ///
    /// Loads every texture the settings name, creates the standard furniture,
    /// wires click actions, prepares the story, runs the behavior's init hook
    /// and resets the frame cycle. Called exactly once per key; the
    /// controller caches the result.
    pub fn init(
        key: &str,
        mut behavior: Box<dyn PageBehavior>,
        ctx: &mut StageCtx<'_>,
        ui_visible: bool,
    ) -> MarqueeResult<Self> {
        let settings = behavior.settings();
        let title_shadow_key = format!("{}Shadow", settings.title);
        let slogan_shadow_key = format!("{}Shadow", settings.slogan);

        ctx.load_textures(
            [
                settings.title.as_str(),
                title_shadow_key.as_str(),
                settings.slogan.as_str(),
                slogan_shadow_key.as_str(),
            ]
            .into_iter()
            .chain(settings.textures.iter().map(String::as_str)),
        )?;

        let container = ctx.stage.create_container(None);

        let mut nav = Vec::with_capacity(settings.nav.len());
        for spec in &settings.nav {
            ctx.assets.load_texture(&spec.texture)?;
            let node = ctx.stage.create_visual(&spec.texture, Some(container));
            ctx.stage.apply_effects(node, &["glow", "dropShadow"]);
            ctx.stage
                .register_click(node, ClickAction::LoadPage(spec.page.clone()));
            ctx.stage.set_visible(node, ui_visible);
            nav.push(NavNode {
                node,
                texture: spec.texture.clone(),
            });
        }

        let title_shadow = ctx.stage.create_visual(&title_shadow_key, Some(container));
        let title = ctx.stage.create_visual(&settings.title, Some(container));
        let tm_title = settings.tm_title.then(|| {
            let node = ctx.stage.create_visual("TM", Some(container));
            ctx.stage.set_alpha(node, TM_ALPHA);
            node
        });

        let slogan_shadow = ctx.stage.create_visual(&slogan_shadow_key, Some(container));
        let slogan = ctx.stage.create_visual(&settings.slogan, Some(container));
        let tm_slogan = settings.tm_slogan.then(|| {
            let node = ctx.stage.create_visual("TM", Some(container));
            ctx.stage.set_alpha(node, TM_ALPHA);
            node
        });

        let frame_container = ctx.stage.create_container(Some(container));

        ctx.stage.apply_effects(title, &["glow"]);
        ctx.stage.apply_effects(slogan, &["glow"]);

        let pending_story = if settings.story.is_empty() {
            None
        } else {
            let story_node = ctx.stage.create_container(None);
            let slides = settings
                .story
                .iter()
                .map(|text| {
                    let slide = ctx.stage.create_text(text, Some(story_node));
                    ctx.stage
                        .apply_effects(slide, &["outline", "glow", "dropShadow"]);
                    slide
                })
                .collect();
            ctx.stage
                .register_click(story_node, ClickAction::AdvanceStory);
            Some(Story {
                node: story_node,
                slides,
                rotator: StoryRotator::new(settings.story.len(), STORY_DWELL),
            })
        };

        ctx.stage.register_click(
            title,
            ClickAction::AdvanceFrame {
                offset: 1,
                emphasis: Emphasis::Title,
            },
        );
        ctx.stage.register_click(
            slogan,
            ClickAction::AdvanceFrame {
                offset: 1,
                emphasis: Emphasis::Slogan,
            },
        );

        let mut body = PageBody {
            key: key.to_string(),
            settings,
            container,
            frame_container,
            title,
            title_shadow,
            slogan,
            slogan_shadow,
            tm_title,
            tm_slogan,
            nav,
            frames: Vec::new(),
            cycle: FrameCycle::new(0),
            pending_story,
        };

        behavior.init(&mut body, ctx)?;
        body.reset_frames(ctx.stage);

        tracing::debug!(key = %body.key, frames = body.frames.len(), "page initialized");
        Ok(Self { body, behavior })
    }

    /// Stable page key.
    pub fn key(&self) -> &str {
        &self.body.key
    }

    /// Root display node.
    pub fn container(&self) -> NodeId {
        self.body.container
    }

    /// Scaffold state (used by tests and embedders).
    pub fn body(&self) -> &PageBody {
        &self.body
    }

    /// Reset frames and stories when the page is (re)displayed.
    pub fn reload(&mut self, stage: &mut dyn Stage) {
        self.body.reset_frames(stage);
    }

    /// Start a frame transition; dropped while one is already running.
    pub fn request_frame_advance(&mut self, offset: i64) -> bool {
        self.body.cycle.request_advance(offset)
    }

    /// Skip the visible story frame to its next slide, if there is one.
    pub fn advance_story(&mut self) {
        let visible = self.body.cycle.visible_index();
        if let Some(frame) = self.body.frames.get_mut(visible)
            && let Some(story) = &mut frame.story
        {
            story.rotator.advance_by_user();
        }
    }

    /// Arrange the standard furniture and call the behavior's layout hook.
    pub fn layout_base(&mut self, ctx: &mut StageCtx<'_>, viewport: &Viewport) -> MarqueeResult<()> {
        let body = &mut self.body;
        let horizontal = viewport.is_horizontal();

        let title_y = if horizontal { -INV_PHI } else { -0.7 };
        body.place(ctx.stage, viewport, body.title, 0.0, title_y, 1.0);
        let title_pos = Point::new(0.0, title_y * viewport.world_center_y());
        ctx.stage.set_position(
            body.title_shadow,
            Point::new(title_pos.x + SHADOW_OFFSET, title_pos.y + SHADOW_OFFSET),
        );

        body.place(ctx.stage, viewport, body.slogan, 0.0, INV_PHI, 0.75);
        let slogan_pos = Point::new(0.0, INV_PHI * viewport.world_center_y());
        ctx.stage.set_position(
            body.slogan_shadow,
            Point::new(slogan_pos.x + SHADOW_OFFSET, slogan_pos.y + SHADOW_OFFSET),
        );
        ctx.stage.set_scale(body.slogan_shadow, 0.75);

        if let Some(tm) = body.tm_title
            && let Some((w, h)) = ctx.assets.texture_size(&body.settings.title)
        {
            ctx.stage
                .set_position(tm, Point::new(title_pos.x + w / 2.0 + 80.0, title_pos.y - h * 0.4));
        }
        if let Some(tm) = body.tm_slogan
            && let Some((w, h)) = ctx.assets.texture_size(&body.settings.slogan)
        {
            ctx.stage.set_position(
                tm,
                Point::new(slogan_pos.x + w / 2.0 + 80.0, slogan_pos.y - h * 0.4),
            );
        }

        if !body.nav.is_empty() {
            let items = body
                .nav
                .iter()
                .map(|n| {
                    Ok(RowItem {
                        width: ctx.texture_width(&n.texture)?,
                        scale: 1.0,
                    })
                })
                .collect::<MarqueeResult<Vec<_>>>()?;
            let scale = if horizontal { 0.2 } else { 0.3 };
            let args = RowArgs {
                align: RowAlign::Start,
                x: -viewport.world_center_x() + if horizontal { 50.0 } else { 75.0 },
                spacing: 40.0,
                scale,
            };
            let y = -viewport.world_center_y() + if horizontal { 150.0 } else { 200.0 };
            for (nav, x) in body.nav.iter().zip(arrange_row(&items, &args)) {
                ctx.stage.set_position(nav.node, Point::new(x, y));
                ctx.stage.set_scale(nav.node, scale);
            }
        }

        for frame in &body.frames {
            if frame.story.is_some() {
                ctx.stage
                    .set_scale(frame.node, if horizontal { 1.0 } else { 1.5 });
            }
        }
        ctx.stage.set_position(
            body.frame_container,
            Point::new(
                0.0,
                if horizontal {
                    viewport.world_center_y() * 0.07
                } else {
                    0.0
                },
            ),
        );

        self.behavior.layout(&mut self.body, ctx, viewport);
        Ok(())
    }

    /// Advance frame and story state for one tick, then run the behavior's
    /// update hook. `story_tint` colors the active story slide.
    pub fn update_base(&mut self, ctx: &mut StageCtx<'_>, dt: f64, story_tint: Rgb) {
        let body = &mut self.body;

        if let Some(motion) = body.cycle.tick(dt) {
            ctx.stage
                .set_scale(body.frame_container, motion.container_scale);
            ctx.stage
                .set_visible(body.frames[motion.outgoing].node, !motion.incoming_visible);
            ctx.stage
                .set_visible(body.frames[motion.incoming].node, motion.incoming_visible);
            if motion.completed
                && let Some(story) = &mut body.frames[motion.incoming].story
            {
                story.rotator.reset();
            }
        }

        let visible = body.cycle.visible_index();
        if let Some(frame) = body.frames.get_mut(visible)
            && let Some(story) = &mut frame.story
        {
            story.rotator.tick(dt * STORY_TIME_SCALE);
            apply_story(ctx.stage, story, Some(story_tint));
        }

        self.behavior.update(&mut self.body, ctx, dt);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("body", &self.body).finish()
    }
}

fn apply_story(stage: &mut dyn Stage, story: &Story, tint: Option<Rgb>) {
    let active = story.rotator.current_index();
    for (index, slide) in story.slides.iter().enumerate() {
        stage.set_visible(*slide, index == active);
    }
    let slide = story.slides[active];
    stage.set_alpha(slide, story.rotator.current_alpha());
    if let Some(tint) = tint {
        stage.set_tint(slide, tint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/page.rs"]
mod tests;
