use kurbo::Point;

use crate::{
    animation::accel::Emphasis,
    foundation::core::Rgb,
    foundation::error::{MarqueeError, MarqueeResult},
};

/// Opaque handle to a display node owned by a [`Stage`] implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// What a pointer-down on a registered node should do.
///
/// The core never takes callbacks from collaborators; clicks resolve to plain
/// action values that the embedder feeds back through
/// [`crate::PageController::handle_click`] on the next tick.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickAction {
    /// Navigate to another page (crossfade).
    LoadPage(String),
    /// Cycle the current page's frames and flash the given emphasis.
    AdvanceFrame {
        /// Signed frame offset; negative wraps backward.
        offset: i64,
        /// Emphasis accelerator to bump.
        emphasis: Emphasis,
    },
    /// Skip the current story slide immediately.
    AdvanceStory,
    /// Toggle fullscreen via the shell.
    ToggleFullscreen,
    /// Open an external link via the shell.
    OpenExternal(String),
}

/// External texture provider. Loading is idempotent per key.
pub trait AssetSource {
    /// Ensure the texture is available; repeat calls are no-ops.
    fn load_texture(&mut self, key: &str) -> MarqueeResult<()>;

    /// Unscaled pixel size of a loaded texture, if known.
    fn texture_size(&self, key: &str) -> Option<(f64, f64)>;
}

/// External scene/display provider.
///
/// The core only issues keyed, handle-based calls; rendering internals
/// (sprites, filters, gradients) stay on the other side of this trait.
pub trait Stage {
    /// Current screen size in pixels.
    fn screen_size(&self) -> (f64, f64);

    /// Create an empty grouping node under `parent` (or the root).
    fn create_container(&mut self, parent: Option<NodeId>) -> NodeId;

    /// Create a textured visual under `parent` (or the root).
    fn create_visual(&mut self, texture: &str, parent: Option<NodeId>) -> NodeId;

    /// Create a text visual under `parent` (or the root).
    fn create_text(&mut self, content: &str, parent: Option<NodeId>) -> NodeId;

    /// Create a full-screen-fillable rectangle under `parent` (or the root).
    fn create_rect(&mut self, parent: Option<NodeId>) -> NodeId;

    /// Resize a rectangle node.
    fn resize_rect(&mut self, node: NodeId, width: f64, height: f64);

    /// Reparent `child` under `parent`.
    fn attach(&mut self, parent: NodeId, child: NodeId);

    /// Remove `child` from its parent (keeps the node alive).
    fn detach(&mut self, child: NodeId);

    /// Show or hide a node.
    fn set_visible(&mut self, node: NodeId, visible: bool);

    /// Set node opacity in `[0, 1]`.
    fn set_alpha(&mut self, node: NodeId, alpha: f64);

    /// Set node position.
    fn set_position(&mut self, node: NodeId, pos: Point);

    /// Set uniform node scale.
    fn set_scale(&mut self, node: NodeId, scale: f64);

    /// Set node rotation in radians.
    fn set_rotation(&mut self, node: NodeId, radians: f64);

    /// Set node tint color.
    fn set_tint(&mut self, node: NodeId, color: Rgb);

    /// Declare a visual effect under a stable key; parameters are opaque.
    fn define_effect(&mut self, key: &str, kind: &str, params: &serde_json::Value);

    /// Replace the effect stack applied to a node.
    fn apply_effects(&mut self, node: NodeId, effect_keys: &[&str]);

    /// Update a scalar parameter of a declared effect.
    fn set_effect_scalar(&mut self, key: &str, param: &str, value: f64);

    /// Update the color of a declared effect.
    fn set_effect_color(&mut self, key: &str, color: Rgb);

    /// Make a node interactive and associate a click action with it.
    fn register_click(&mut self, node: NodeId, action: ClickAction);
}

/// Browser/window plumbing the core delegates to.
pub trait Shell {
    /// Reflect the current page key into the address bar.
    fn reflect_page_key(&mut self, key: &str);

    /// Open an external link.
    fn open_external(&mut self, url: &str);

    /// Toggle fullscreen mode.
    fn toggle_fullscreen(&mut self);
}

/// Borrowed bundle of the stage-side collaborators, passed down to pages.
pub struct StageCtx<'a> {
    /// Scene/display provider.
    pub stage: &'a mut dyn Stage,
    /// Texture provider.
    pub assets: &'a mut dyn AssetSource,
}

impl StageCtx<'_> {
    /// Load several textures in order; stops at the first failure.
    pub fn load_textures<'k>(
        &mut self,
        keys: impl IntoIterator<Item = &'k str>,
    ) -> MarqueeResult<()> {
        for key in keys {
            self.assets.load_texture(key)?;
        }
        Ok(())
    }

    /// Unscaled width of a loaded texture, as an error if unknown.
    pub fn texture_width(&self, key: &str) -> MarqueeResult<f64> {
        self.assets
            .texture_size(key)
            .map(|(w, _)| w)
            .ok_or_else(|| MarqueeError::asset(format!("texture '{key}' has no known size")))
    }
}

/// Extract the page key from an initial `?key=...` query string.
///
/// Absent or malformed keys yield `None`; the controller then falls back to
/// its default page.
pub fn page_key_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("key=")
            && !value.is_empty()
        {
            return Some(value.to_string());
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/stage/backend.rs"]
mod tests;
