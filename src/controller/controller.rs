use std::collections::BTreeMap;

use kurbo::Point;
use serde_json::json;

use crate::{
    animation::accel::{Accelerator, Emphasis},
    animation::ambient::{AmbientField, AmbientSpec},
    animation::oscillator::{ColorOscillator, OscillatorSpec},
    controller::fade::FadeTransition,
    foundation::core::Rng64,
    foundation::error::{MarqueeError, MarqueeResult},
    layout::debounce::Debounce,
    layout::solver::{RowAlign, RowArgs, RowItem, Viewport, arrange_row},
    page::model::PageRegistry,
    page::page::Page,
    stage::backend::{AssetSource, ClickAction, NodeId, Shell, Stage, StageCtx},
};

/// Tick time divisor applied to oscillator advance.
const OSC_TIME_SCALE: f64 = 1.0 / 100.0;
/// Effect-time advance per unit of tick time.
const EFFECT_TIME_RATE: f64 = 0.01;
/// Boost applied to an emphasis accelerator on interaction.
const ACCEL_BUMP: f64 = 8.0;
/// Overlay alpha held while a page is constructed.
const LOADING_OVERLAY_ALPHA: f64 = 0.5;
/// Debounce quiet period in tick units (roughly 300 ms at 60 Hz).
const LAYOUT_QUIET: f64 = 18.0;
/// Oscillator sampled for the story slide tint.
const STORY_OSCILLATOR: usize = 3;

/// An external link shown in the controller's bottom rail.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LinkSpec {
    /// Texture key for the button.
    pub texture: String,
    /// URL opened on click.
    pub url: String,
    /// Per-element scale relative to the rail scale.
    pub width_ratio: f64,
}

/// A visual effect declared at startup; parameters are opaque to the core.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EffectSpec {
    /// Stable key effects are referenced by.
    pub key: String,
    /// Effect kind identifier understood by the stage.
    pub kind: String,
    /// Opaque effect parameters.
    pub params: serde_json::Value,
}

/// Controller-wide configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ControllerSettings {
    /// Page shown for absent or unknown keys.
    #[serde(default = "default_page_key")]
    pub default_key: String,
    /// Whether the `p` key toggles pausing.
    #[serde(default)]
    pub pause_enabled: bool,
    /// Hide navigation/link chrome (kiosk mode).
    #[serde(default)]
    pub hide_ui: bool,
    /// External link buttons.
    #[serde(default)]
    pub links: Vec<LinkSpec>,
    /// Ambient background layer.
    #[serde(default)]
    pub ambient: AmbientSpec,
    /// Oscillator bank; the first three pair with the emphasis accelerators.
    #[serde(default = "default_oscillators")]
    pub oscillators: Vec<OscillatorSpec>,
    /// Effects declared on the stage at startup.
    #[serde(default = "default_effects")]
    pub effects: Vec<EffectSpec>,
    /// Seed for deterministic ambient placement.
    #[serde(default)]
    pub seed: u64,
}

fn default_page_key() -> String {
    "home".to_string()
}

fn default_oscillators() -> Vec<OscillatorSpec> {
    vec![
        OscillatorSpec::with_velocities(1.0, 1.5, 4.0 / 3.0),
        OscillatorSpec::with_velocities(1.5, 4.0 / 3.0, 1.0),
        OscillatorSpec::with_velocities(4.0 / 3.0, 1.0, 1.5),
        OscillatorSpec::with_velocities(9.0 / 7.0, 13.0 / 9.0, 139.0 / 126.0),
    ]
}

fn default_effects() -> Vec<EffectSpec> {
    let spec = |key: &str, kind: &str, params: serde_json::Value| EffectSpec {
        key: key.to_string(),
        kind: kind.to_string(),
        params,
    };
    vec![
        spec("bevel", "bevel", json!({})),
        spec("asciiSmall", "ascii", json!({"size": 4, "replace_color": true})),
        spec("bloom", "bloom", json!({"threshold": 0.1})),
        spec("glow", "glow", json!({})),
        spec("godray", "godray", json!({"parallel": false})),
        spec("dropShadow", "drop_shadow", json!({})),
        spec("outline", "outline", json!({"color": 0, "thickness": 6})),
    ]
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_key: default_page_key(),
            pause_enabled: false,
            hide_ui: false,
            links: Vec::new(),
            ambient: AmbientSpec::default(),
            oscillators: default_oscillators(),
            effects: default_effects(),
            seed: 0,
        }
    }
}

/// Fixed chrome nodes created once during [`PageController::init`].
#[derive(Debug)]
struct Chrome {
    background_container: NodeId,
    background_rect: NodeId,
    drifter_nodes: Vec<NodeId>,
    ground: NodeId,
    flutter_nodes: Vec<NodeId>,
    ui_container: NodeId,
    expand: NodeId,
    unexpand: NodeId,
    link_nodes: Vec<NodeId>,
    page_container: NodeId,
    fade_rect: NodeId,
    loading: NodeId,
}

/// Top-level orchestrator: page registry and cache, cross-page fade,
/// ambient animation state, and the master tick.
///
/// One controller owns all shared state for the run of the application. The
/// embedder drives it: one [`PageController::tick`] per display refresh,
/// [`PageController::resized`] on window resizes, and input events forwarded
/// through the `handle_*` methods. All mutation happens inside the tick; user
/// interactions only record intent that the next tick realizes.
pub struct PageController<S: Stage, A: AssetSource, H: Shell> {
    settings: ControllerSettings,
    stage: S,
    assets: A,
    shell: H,
    registry: PageRegistry,
    pages: BTreeMap<String, Page>,
    current: Option<String>,
    fade: FadeTransition,
    oscillators: Vec<ColorOscillator>,
    accels: [Accelerator; 3],
    ambient: AmbientField,
    total_time: f64,
    effect_time: f64,
    paused: bool,
    fullscreen: bool,
    pointer: Point,
    viewport: Viewport,
    layout_debounce: Debounce,
    chrome: Option<Chrome>,
}

impl<S: Stage, A: AssetSource, H: Shell> PageController<S, A, H> {
    /// Create a controller over the given collaborators.
    ///
    /// Fails when the registry does not contain the default page or the
    /// oscillator bank is empty. Call [`PageController::init`] next.
    pub fn new(
        stage: S,
        assets: A,
        shell: H,
        registry: PageRegistry,
        settings: ControllerSettings,
    ) -> MarqueeResult<Self> {
        if !registry.contains(&settings.default_key) {
            return Err(MarqueeError::validation(format!(
                "default page '{}' is not registered",
                settings.default_key
            )));
        }
        if settings.oscillators.is_empty() {
            return Err(MarqueeError::validation("oscillator bank must be non-empty"));
        }

        let (width, height) = stage.screen_size();
        let oscillators = settings
            .oscillators
            .iter()
            .map(|spec| ColorOscillator::new(*spec))
            .collect();

        Ok(Self {
            stage,
            assets,
            shell,
            registry,
            pages: BTreeMap::new(),
            current: None,
            fade: FadeTransition::new(),
            oscillators,
            accels: [
                Accelerator::new(0.99, 0.001), // title
                Accelerator::new(0.99, 0.01),  // glow
                Accelerator::new(0.99, 0.001), // slogan
            ],
            ambient: AmbientField::default(),
            total_time: 0.0,
            effect_time: 0.0,
            paused: false,
            fullscreen: false,
            pointer: Point::ZERO,
            viewport: Viewport::new(width, height),
            layout_debounce: Debounce::new(LAYOUT_QUIET),
            chrome: None,
            settings,
        })
    }

    /// Load base assets, build the chrome, and display the initial page.
    ///
    /// `initial_key` usually comes from the startup URL via
    /// [`crate::page_key_from_query`]; unknown keys fall back to the default.
    #[tracing::instrument(skip(self))]
    pub fn init(&mut self, initial_key: Option<&str>) -> MarqueeResult<()> {
        if self.chrome.is_some() {
            return Err(MarqueeError::validation("controller already initialized"));
        }

        self.assets.load_texture("loading")?;
        for key in ["expand", "unexpand", "TM"] {
            self.assets.load_texture(key)?;
        }
        self.assets.load_texture(&self.settings.ambient.ground_texture)?;
        self.assets
            .load_texture(&self.settings.ambient.drifter_texture)?;
        for key in self.settings.ambient.flutter_textures.clone() {
            self.assets.load_texture(&key)?;
        }
        for link in self.settings.links.clone() {
            self.assets.load_texture(&link.texture)?;
        }

        for effect in &self.settings.effects {
            self.stage
                .define_effect(&effect.key, &effect.kind, &effect.params);
        }

        let stage = &mut self.stage;
        let background_container = stage.create_container(None);
        stage.set_visible(background_container, false);
        let background_rect = stage.create_rect(Some(background_container));
        stage.apply_effects(background_rect, &["godray"]);

        let drifter_nodes = (0..self.settings.ambient.drifter_count)
            .map(|_| {
                let node = stage.create_visual(
                    &self.settings.ambient.drifter_texture,
                    Some(background_container),
                );
                stage.apply_effects(node, &["dropShadow"]);
                node
            })
            .collect();

        let ground = stage.create_visual(
            &self.settings.ambient.ground_texture,
            Some(background_container),
        );
        stage.apply_effects(ground, &["outline"]);

        let textures = &self.settings.ambient.flutter_textures;
        let flutter_count = if textures.is_empty() {
            0
        } else {
            self.settings.ambient.flutter_count
        };
        let flutter_nodes = (0..flutter_count)
            .map(|i| {
                let node =
                    stage.create_visual(&textures[i % textures.len()], Some(background_container));
                stage.apply_effects(node, &["dropShadow"]);
                node
            })
            .collect();

        let ui_container = stage.create_container(None);
        stage.set_visible(ui_container, false);
        let expand = stage.create_visual("expand", Some(ui_container));
        let unexpand = stage.create_visual("unexpand", Some(ui_container));
        stage.apply_effects(expand, &["glow", "dropShadow"]);
        stage.apply_effects(unexpand, &["glow", "dropShadow"]);
        stage.register_click(expand, ClickAction::ToggleFullscreen);
        stage.register_click(unexpand, ClickAction::ToggleFullscreen);

        let link_nodes = self
            .settings
            .links
            .iter()
            .map(|link| {
                let node = stage.create_visual(&link.texture, Some(ui_container));
                stage.apply_effects(node, &["glow", "dropShadow"]);
                stage.register_click(node, ClickAction::OpenExternal(link.url.clone()));
                node
            })
            .collect();

        let page_container = stage.create_container(None);
        let fade_rect = stage.create_rect(None);
        stage.set_visible(fade_rect, false);
        let loading = stage.create_visual("loading", None);
        loading_to_center(stage, loading, &self.viewport);

        self.chrome = Some(Chrome {
            background_container,
            background_rect,
            drifter_nodes,
            ground,
            flutter_nodes,
            ui_container,
            expand,
            unexpand,
            link_nodes,
            page_container,
            fade_rect,
            loading,
        });

        let initial = initial_key.map(str::to_string);
        self.load_page(initial.as_deref().unwrap_or_default())
    }

    /// Resolve a requested key to a registered one (case-insensitive),
    /// falling back to the default page.
    pub fn resolve_key(&self, key: &str) -> String {
        let key = key.to_lowercase();
        if !key.is_empty() && self.registry.contains(&key) {
            key
        } else {
            self.settings.default_key.clone()
        }
    }

    /// Navigate to a page, constructing and caching it on first visit.
    ///
    /// Starts (or retargets) the crossfade; the actual swap happens inside a
    /// later tick when the fade-out leg completes. The first loaded page is
    /// displayed immediately and revealed from the overlay.
    #[tracing::instrument(skip(self))]
    pub fn load_page(&mut self, key: &str) -> MarqueeResult<()> {
        let key = self.resolve_key(key);
        self.ensure_page(&key)?;

        if self.current.is_none() {
            self.set_page(&key)?;
            self.fade.begin_reveal();
        } else {
            self.fade.begin(&key, self.current.as_deref());
        }

        let Some(chrome) = &self.chrome else {
            return Err(MarqueeError::validation("controller not initialized"));
        };
        self.stage.set_visible(chrome.background_container, true);
        self.stage
            .set_visible(chrome.ui_container, !self.settings.hide_ui);
        self.shell.reflect_page_key(&key);
        Ok(())
    }

    fn ensure_page(&mut self, key: &str) -> MarqueeResult<()> {
        if self.pages.contains_key(key) {
            return Ok(());
        }
        let Some(chrome) = &self.chrome else {
            return Err(MarqueeError::validation("controller not initialized"));
        };

        // Keep the spinner and a half-opaque overlay up while the page's
        // assets load; set_page hides them once the page is displayable.
        self.stage.set_visible(chrome.loading, true);
        self.stage.set_visible(chrome.fade_rect, true);
        self.stage
            .set_alpha(chrome.fade_rect, LOADING_OVERLAY_ALPHA);

        let behavior = self
            .registry
            .create(key)
            .ok_or_else(|| MarqueeError::page(format!("no factory for page '{key}'")))?;
        let mut ctx = StageCtx {
            stage: &mut self.stage,
            assets: &mut self.assets,
        };
        let page = Page::init(key, behavior, &mut ctx, !self.settings.hide_ui)?;
        self.pages.insert(key.to_string(), page);
        self.stage.set_visible(chrome.loading, false);
        Ok(())
    }

    fn set_page(&mut self, key: &str) -> MarqueeResult<()> {
        let Some(chrome) = &self.chrome else {
            return Err(MarqueeError::validation("controller not initialized"));
        };
        let page_container = chrome.page_container;
        let loading = chrome.loading;

        if let Some(previous) = self.current.as_ref()
            && let Some(page) = self.pages.get(previous)
        {
            self.stage.detach(page.container());
        }

        self.current = Some(key.to_string());
        let page = self
            .pages
            .get_mut(key)
            .ok_or_else(|| MarqueeError::page(format!("page '{key}' missing from cache")))?;
        self.stage.attach(page_container, page.container());
        page.reload(&mut self.stage);

        tracing::debug!(key, "page displayed");
        self.relayout()?;
        self.stage.set_visible(loading, false);
        Ok(())
    }

    /// Note a resize; the recompute runs after a quiet period.
    pub fn resized(&mut self) {
        self.layout_debounce.trigger(self.total_time);
    }

    /// Recompute layout immediately (programmatic trigger, e.g. page show).
    #[tracing::instrument(skip(self))]
    pub fn relayout(&mut self) -> MarqueeResult<()> {
        let Some(chrome) = &self.chrome else {
            return Err(MarqueeError::validation("controller not initialized"));
        };

        let (width, height) = self.stage.screen_size();
        let viewport = Viewport::new(width, height);
        self.viewport = viewport;
        self.layout_debounce.cancel();

        let stage = &mut self.stage;
        stage.resize_rect(chrome.background_rect, width, height);
        stage.resize_rect(chrome.fade_rect, width, height);

        let drifter_width = self
            .assets
            .texture_size(&self.settings.ambient.drifter_texture)
            .map(|(w, _)| w)
            .unwrap_or_default();
        let flutter_widths: Vec<f64> = self
            .settings
            .ambient
            .flutter_textures
            .iter()
            .map(|key| {
                self.assets
                    .texture_size(key)
                    .map(|(w, _)| w)
                    .unwrap_or_default()
            })
            .collect();
        let mut rng = Rng64::new(self.settings.seed);
        self.ambient.seed(
            &self.settings.ambient,
            width,
            height,
            drifter_width,
            &flutter_widths,
            &mut rng,
        );
        for (node, drifter) in chrome.drifter_nodes.iter().zip(self.ambient.drifters()) {
            stage.set_scale(*node, drifter.scale);
            stage.set_position(*node, drifter.pos);
        }
        for (node, flutter) in chrome.flutter_nodes.iter().zip(self.ambient.flutters()) {
            stage.set_scale(*node, flutter.scale);
            stage.set_position(*node, flutter.pos);
            stage.set_rotation(*node, flutter.rotation);
        }

        if let Some((ground_width, _)) = self
            .assets
            .texture_size(&self.settings.ambient.ground_texture)
            && ground_width > 0.0
        {
            stage.set_scale(chrome.ground, width / ground_width);
        }
        stage.set_position(chrome.ground, Point::new(viewport.center_x(), height));

        let horizontal = viewport.is_horizontal();
        stage.set_position(
            chrome.ui_container,
            Point::new(viewport.center_x(), viewport.center_y()),
        );
        stage.set_scale(chrome.ui_container, viewport.scale);

        // Expand/unexpand share one slot in the top-right corner.
        let expander_scale = if horizontal { 0.2 } else { 0.4 };
        for node in [chrome.expand, chrome.unexpand] {
            let item = RowItem {
                width: expander_width(&self.assets),
                scale: 1.0,
            };
            let positions = arrange_row(
                &[item],
                &RowArgs {
                    align: RowAlign::End,
                    x: viewport.world_center_x() - if horizontal { 10.0 } else { 15.0 },
                    spacing: 40.0,
                    scale: expander_scale,
                },
            );
            let y = -viewport.world_center_y() + if horizontal { 75.0 } else { 125.0 };
            stage.set_position(node, Point::new(positions[0], y));
            stage.set_scale(node, expander_scale);
        }

        if !self.settings.links.is_empty() {
            let rail_scale = if horizontal { 0.75 } else { 1.35 };
            let items: Vec<RowItem> = self
                .settings
                .links
                .iter()
                .map(|link| RowItem {
                    width: self
                        .assets
                        .texture_size(&link.texture)
                        .map(|(w, _)| w)
                        .unwrap_or_default(),
                    scale: link.width_ratio,
                })
                .collect();
            let positions = arrange_row(
                &items,
                &RowArgs {
                    align: RowAlign::Center,
                    x: 0.0,
                    spacing: if horizontal { 50.0 } else { 75.0 },
                    scale: rail_scale,
                },
            );
            let y = viewport.world_center_y() - if horizontal { 100.0 } else { 150.0 };
            for ((node, link), x) in chrome
                .link_nodes
                .iter()
                .zip(&self.settings.links)
                .zip(positions)
            {
                stage.set_position(*node, Point::new(x, y));
                stage.set_scale(*node, rail_scale * link.width_ratio);
            }
        }

        stage.set_position(
            chrome.page_container,
            Point::new(viewport.center_x(), viewport.center_y()),
        );
        stage.set_scale(chrome.page_container, viewport.scale);

        stage.set_effect_scalar("dropShadow", "offset_x", 20.0 * viewport.scale);
        stage.set_effect_scalar("dropShadow", "offset_y", 20.0 * viewport.scale);
        stage.set_effect_scalar("glow", "outer_strength", 10.0 * viewport.scale);
        stage.set_effect_scalar("bloom", "blur", 16.0 * viewport.scale);
        stage.set_effect_scalar("godray", "center_x", width);

        loading_to_center(stage, chrome.loading, &viewport);

        if let Some(key) = self.current.clone() {
            let mut ctx = StageCtx {
                stage: &mut self.stage,
                assets: &mut self.assets,
            };
            if let Some(page) = self.pages.get_mut(&key) {
                page.layout_base(&mut ctx, &viewport)?;
            }
        }
        Ok(())
    }

    /// Run one master tick.
    ///
    /// Order: clock, debounced layout, chrome, oscillators and accelerator
    /// decay, ambient motion, the pending fade, then the current page.
    pub fn tick(&mut self, dt: f64) -> MarqueeResult<()> {
        let dt = if self.paused { 0.0 } else { dt };
        self.total_time += dt;

        if self.layout_debounce.fire(self.total_time) {
            self.relayout()?;
        }

        let Some(chrome) = &self.chrome else {
            return Err(MarqueeError::validation("controller not initialized"));
        };
        let stage = &mut self.stage;
        stage.set_visible(chrome.expand, !self.fullscreen);
        stage.set_visible(chrome.unexpand, self.fullscreen);

        let scaled = dt * OSC_TIME_SCALE;
        for emphasis in Emphasis::ALL {
            let index = emphasis.oscillator_index();
            let gain = self.accels[index].gain();
            if let Some(osc) = self.oscillators.get_mut(index) {
                osc.advance(scaled * gain);
            }
        }
        for osc in self.oscillators.iter_mut().skip(Emphasis::ALL.len()) {
            osc.advance(scaled);
        }
        for accel in &mut self.accels {
            accel.decay(dt);
        }

        self.effect_time += EFFECT_TIME_RATE * dt;
        if let Some(osc) = self.oscillators.get(Emphasis::Glow.oscillator_index()) {
            stage.set_effect_color("glow", osc.sample());
        }
        stage.set_effect_scalar("godray", "time", self.effect_time);

        self.ambient.tick(
            dt,
            self.total_time,
            self.viewport.width,
            self.viewport.height,
        );
        for (node, drifter) in chrome.drifter_nodes.iter().zip(self.ambient.drifters()) {
            stage.set_position(*node, drifter.pos);
        }
        for (node, flutter) in chrome.flutter_nodes.iter().zip(self.ambient.flutters()) {
            stage.set_position(*node, flutter.pos);
            stage.set_rotation(*node, flutter.rotation);
        }

        if let Some(frame) = self.fade.tick(dt) {
            let fade_rect = chrome.fade_rect;
            let stage = &mut self.stage;
            stage.set_visible(fade_rect, true);
            stage.set_alpha(fade_rect, frame.overlay_alpha);
            if let Some(key) = frame.swap_to {
                self.set_page(&key)?;
            }
            if frame.finished {
                self.stage.set_visible(fade_rect, false);
                tracing::trace!("page fade cleared");
            }
        }

        let story_tint = self
            .oscillators
            .get(STORY_OSCILLATOR)
            .or_else(|| self.oscillators.last())
            .map(|osc| osc.sample())
            .unwrap_or_default();
        if let Some(key) = self.current.clone() {
            let mut ctx = StageCtx {
                stage: &mut self.stage,
                assets: &mut self.assets,
            };
            if let Some(page) = self.pages.get_mut(&key) {
                page.update_base(&mut ctx, dt, story_tint);
            }
        }
        Ok(())
    }

    /// Realize a pointer-down on a registered node.
    pub fn handle_click(&mut self, action: ClickAction) -> MarqueeResult<()> {
        match action {
            ClickAction::LoadPage(key) => self.load_page(&key),
            ClickAction::AdvanceFrame { offset, emphasis } => {
                let index = emphasis.oscillator_index();
                if let Some(osc) = self.oscillators.get_mut(index) {
                    osc.advance(1.0);
                }
                self.accels[index].bump(ACCEL_BUMP);
                if let Some(key) = self.current.clone()
                    && let Some(page) = self.pages.get_mut(&key)
                {
                    page.request_frame_advance(offset);
                }
                Ok(())
            }
            ClickAction::AdvanceStory => {
                if let Some(key) = self.current.clone()
                    && let Some(page) = self.pages.get_mut(&key)
                {
                    page.advance_story();
                }
                Ok(())
            }
            ClickAction::ToggleFullscreen => {
                self.shell.toggle_fullscreen();
                Ok(())
            }
            ClickAction::OpenExternal(url) => {
                self.shell.open_external(&url);
                Ok(())
            }
        }
    }

    /// Forward a key press; `p` toggles pausing when enabled in settings.
    pub fn key_pressed(&mut self, key: char) {
        if self.settings.pause_enabled && key.eq_ignore_ascii_case(&'p') {
            self.paused = !self.paused;
        }
    }

    /// Track the pointer position (pages may sample it in update hooks).
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Reflect the embedder's fullscreen state into the chrome.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// Key of the displayed page, once the first load completed.
    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Cached page by key.
    pub fn page(&self, key: &str) -> Option<&Page> {
        self.pages.get(key)
    }

    /// Whether the master tick is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accumulated tick time.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Last computed viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Last tracked pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Oscillator by index (pages sample these for dynamic coloring).
    pub fn oscillator(&self, index: usize) -> Option<&ColorOscillator> {
        self.oscillators.get(index)
    }

    /// Pending fade target, if a fade-out leg is in flight.
    pub fn pending_fade_target(&self) -> Option<&str> {
        self.fade.pending_target()
    }

    /// Borrow the stage collaborator.
    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Mutably borrow the stage collaborator (the embedder owns resize and
    /// input plumbing on the stage side).
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// Borrow the asset collaborator.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// Borrow the shell collaborator.
    pub fn shell(&self) -> &H {
        &self.shell
    }
}

fn loading_to_center(stage: &mut dyn Stage, loading: NodeId, viewport: &Viewport) {
    stage.set_position(loading, Point::new(viewport.center_x(), viewport.center_y()));
    stage.set_scale(loading, viewport.scale);
}

fn expander_width(assets: &dyn AssetSource) -> f64 {
    assets
        .texture_size("expand")
        .map(|(w, _)| w)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/controller/controller.rs"]
mod tests;
