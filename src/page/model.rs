use std::collections::BTreeMap;

use crate::{
    foundation::error::MarqueeResult,
    layout::solver::Viewport,
    page::page::PageBody,
    stage::backend::StageCtx,
};

/// A clickable navigation element shown in a page's corner rail.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NavSpec {
    /// Texture key for the element.
    pub texture: String,
    /// Page key loaded when clicked.
    pub page: String,
}

/// Declarative description of a page's standard furniture.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageSettings {
    /// Title texture key; a `{title}Shadow` texture is loaded alongside.
    #[serde(default = "default_title")]
    pub title: String,
    /// Slogan texture key; a `{slogan}Shadow` texture is loaded alongside.
    #[serde(default = "default_slogan")]
    pub slogan: String,
    /// Whether the title carries a trademark mark.
    #[serde(default)]
    pub tm_title: bool,
    /// Whether the slogan carries a trademark mark.
    #[serde(default)]
    pub tm_slogan: bool,
    /// Extra textures the page needs before first display.
    #[serde(default)]
    pub textures: Vec<String>,
    /// Navigation elements.
    #[serde(default)]
    pub nav: Vec<NavSpec>,
    /// Story slides; empty means the page has no story frame.
    #[serde(default)]
    pub story: Vec<String>,
}

fn default_title() -> String {
    "title".to_string()
}

fn default_slogan() -> String {
    "slogan".to_string()
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            slogan: default_slogan(),
            tm_title: false,
            tm_slogan: false,
            textures: Vec::new(),
            nav: Vec::new(),
            story: Vec::new(),
        }
    }
}

/// Per-page behavior plugged into the shared page scaffold.
///
/// The scaffold builds the standard furniture from [`PageBehavior::settings`]
/// and calls the hooks at the matching lifecycle points. All hooks default to
/// no-ops; a purely declarative page only provides settings.
pub trait PageBehavior {
    /// Declarative furniture for this page.
    fn settings(&self) -> PageSettings;

    /// Called once after the scaffold is built, before the first layout.
    fn init(&mut self, body: &mut PageBody, ctx: &mut StageCtx<'_>) -> MarqueeResult<()> {
        let _ = (body, ctx);
        Ok(())
    }

    /// Called on every layout pass after the scaffold has been arranged.
    fn layout(&mut self, body: &mut PageBody, ctx: &mut StageCtx<'_>, viewport: &Viewport) {
        let _ = (body, ctx, viewport);
    }

    /// Called every tick after frame and story state have been applied.
    fn update(&mut self, body: &mut PageBody, ctx: &mut StageCtx<'_>, dt: f64) {
        let _ = (body, ctx, dt);
    }
}

/// Factory producing a fresh behavior value for a page key.
pub type PageFactory = Box<dyn Fn() -> Box<dyn PageBehavior>>;

/// Open registry mapping page keys to behavior factories.
///
/// Keys are stored lowercase; lookups are case-insensitive.
#[derive(Default)]
pub struct PageRegistry {
    factories: BTreeMap<String, PageFactory>,
}

impl PageRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page factory under `key`.
    pub fn register(&mut self, key: impl Into<String>, factory: PageFactory) {
        self.factories.insert(key.into().to_lowercase(), factory);
    }

    /// Whether a page is registered under `key` (case-insensitive).
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(&key.to_lowercase())
    }

    /// Produce a fresh behavior for `key`, if registered.
    pub fn create(&self, key: &str) -> Option<Box<dyn PageBehavior>> {
        self.factories.get(&key.to_lowercase()).map(|f| f())
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("keys", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
