use std::collections::{BTreeMap, HashMap};

use kurbo::Point;

use crate::{
    foundation::core::Rgb,
    foundation::error::{MarqueeError, MarqueeResult},
    stage::backend::{AssetSource, ClickAction, NodeId, Shell, Stage},
};

/// What a memory node displays.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Pure grouping node.
    Container,
    /// Textured visual.
    Visual {
        /// Texture key.
        texture: String,
    },
    /// Text visual.
    Text {
        /// Text content.
        content: String,
    },
    /// Fillable rectangle.
    Rect {
        /// Current width.
        width: f64,
        /// Current height.
        height: f64,
    },
}

/// Full retained state of one memory node.
#[derive(Clone, Debug)]
pub struct NodeRecord {
    /// Node kind.
    pub kind: NodeKind,
    /// Parent node, if attached.
    pub parent: Option<NodeId>,
    /// Visibility flag.
    pub visible: bool,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Position.
    pub pos: Point,
    /// Uniform scale.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Tint, if ever set.
    pub tint: Option<Rgb>,
    /// Applied effect keys.
    pub effects: Vec<String>,
}

impl NodeRecord {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            visible: true,
            alpha: 1.0,
            pos: Point::ZERO,
            scale: 1.0,
            rotation: 0.0,
            tint: None,
            effects: Vec::new(),
        }
    }
}

/// Declared effect plus every parameter update it has received.
#[derive(Clone, Debug, Default)]
pub struct EffectRecord {
    /// Effect kind identifier.
    pub kind: String,
    /// Opaque declaration parameters.
    pub params: serde_json::Value,
    /// Latest scalar parameter values.
    pub scalars: BTreeMap<String, f64>,
    /// Latest color, if ever set.
    pub color: Option<Rgb>,
}

/// Headless [`Stage`] that retains the full scene state in memory.
///
/// The reference implementation for tests and server-side runs, in the same
/// way the CPU renderer is the default backend in a GPU-capable pipeline.
#[derive(Debug, Default)]
pub struct MemoryStage {
    screen: (f64, f64),
    nodes: Vec<NodeRecord>,
    effects: BTreeMap<String, EffectRecord>,
    clicks: HashMap<NodeId, ClickAction>,
}

impl MemoryStage {
    /// Create a stage with the given screen size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            screen: (width, height),
            ..Self::default()
        }
    }

    /// Simulate a window resize. The controller still needs to be told via
    /// [`crate::PageController::resized`].
    pub fn set_screen_size(&mut self, width: f64, height: f64) {
        self.screen = (width, height);
    }

    /// Retained state of a node.
    pub fn node(&self, id: NodeId) -> &NodeRecord {
        &self.nodes[id.0 as usize]
    }

    /// Number of nodes ever created (node ids are dense indices).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `parent` in creation order.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(parent))
            .map(|(i, _)| NodeId(i as u64))
            .collect()
    }

    /// Click action registered on a node, if any.
    pub fn click_action(&self, node: NodeId) -> Option<&ClickAction> {
        self.clicks.get(&node)
    }

    /// Declared effect state.
    pub fn effect(&self, key: &str) -> Option<&EffectRecord> {
        self.effects.get(key)
    }

    /// Whether a node and all its ancestors are visible.
    pub fn effectively_visible(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let record = self.node(id);
            if !record.visible {
                return false;
            }
            cursor = record.parent;
        }
        true
    }

    fn push(&mut self, record: NodeRecord) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(record);
        id
    }
}

impl Stage for MemoryStage {
    fn screen_size(&self) -> (f64, f64) {
        self.screen
    }

    fn create_container(&mut self, parent: Option<NodeId>) -> NodeId {
        self.push(NodeRecord::new(NodeKind::Container, parent))
    }

    fn create_visual(&mut self, texture: &str, parent: Option<NodeId>) -> NodeId {
        self.push(NodeRecord::new(
            NodeKind::Visual {
                texture: texture.to_string(),
            },
            parent,
        ))
    }

    fn create_text(&mut self, content: &str, parent: Option<NodeId>) -> NodeId {
        self.push(NodeRecord::new(
            NodeKind::Text {
                content: content.to_string(),
            },
            parent,
        ))
    }

    fn create_rect(&mut self, parent: Option<NodeId>) -> NodeId {
        self.push(NodeRecord::new(
            NodeKind::Rect {
                width: 0.0,
                height: 0.0,
            },
            parent,
        ))
    }

    fn resize_rect(&mut self, node: NodeId, width: f64, height: f64) {
        if let NodeKind::Rect {
            width: w,
            height: h,
        } = &mut self.nodes[node.0 as usize].kind
        {
            *w = width;
            *h = height;
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0 as usize].parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        self.nodes[child.0 as usize].parent = None;
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.nodes[node.0 as usize].visible = visible;
    }

    fn set_alpha(&mut self, node: NodeId, alpha: f64) {
        self.nodes[node.0 as usize].alpha = alpha;
    }

    fn set_position(&mut self, node: NodeId, pos: Point) {
        self.nodes[node.0 as usize].pos = pos;
    }

    fn set_scale(&mut self, node: NodeId, scale: f64) {
        self.nodes[node.0 as usize].scale = scale;
    }

    fn set_rotation(&mut self, node: NodeId, radians: f64) {
        self.nodes[node.0 as usize].rotation = radians;
    }

    fn set_tint(&mut self, node: NodeId, color: Rgb) {
        self.nodes[node.0 as usize].tint = Some(color);
    }

    fn define_effect(&mut self, key: &str, kind: &str, params: &serde_json::Value) {
        self.effects.insert(
            key.to_string(),
            EffectRecord {
                kind: kind.to_string(),
                params: params.clone(),
                ..EffectRecord::default()
            },
        );
    }

    fn apply_effects(&mut self, node: NodeId, effect_keys: &[&str]) {
        self.nodes[node.0 as usize].effects =
            effect_keys.iter().map(|k| k.to_string()).collect();
    }

    fn set_effect_scalar(&mut self, key: &str, param: &str, value: f64) {
        self.effects
            .entry(key.to_string())
            .or_default()
            .scalars
            .insert(param.to_string(), value);
    }

    fn set_effect_color(&mut self, key: &str, color: Rgb) {
        self.effects.entry(key.to_string()).or_default().color = Some(color);
    }

    fn register_click(&mut self, node: NodeId, action: ClickAction) {
        self.clicks.insert(node, action);
    }
}

/// [`AssetSource`] over a fixed table of texture sizes.
///
/// Sizes become visible only once loaded, which catches load-order mistakes
/// in layout code.
#[derive(Debug, Default)]
pub struct StaticAssets {
    sizes: BTreeMap<String, (f64, f64)>,
    loaded: BTreeMap<String, bool>,
    load_log: Vec<String>,
}

impl StaticAssets {
    /// Empty asset table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a texture and its unscaled size.
    pub fn insert(&mut self, key: impl Into<String>, width: f64, height: f64) {
        self.sizes.insert(key.into(), (width, height));
    }

    /// Declare many textures at one uniform size.
    pub fn insert_uniform<'k>(&mut self, keys: impl IntoIterator<Item = &'k str>, size: f64) {
        for key in keys {
            self.insert(key, size, size);
        }
    }

    /// Whether the texture has been loaded.
    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded.get(key).copied().unwrap_or(false)
    }

    /// First-time loads in order (repeat loads are not recorded).
    pub fn load_log(&self) -> &[String] {
        &self.load_log
    }
}

impl AssetSource for StaticAssets {
    fn load_texture(&mut self, key: &str) -> MarqueeResult<()> {
        if !self.sizes.contains_key(key) {
            return Err(MarqueeError::asset(format!("unknown texture '{key}'")));
        }
        if !self.is_loaded(key) {
            self.loaded.insert(key.to_string(), true);
            self.load_log.push(key.to_string());
        }
        Ok(())
    }

    fn texture_size(&self, key: &str) -> Option<(f64, f64)> {
        if self.is_loaded(key) {
            self.sizes.get(key).copied()
        } else {
            None
        }
    }
}

/// [`Shell`] that records every call for inspection.
#[derive(Debug, Default)]
pub struct MemoryShell {
    /// Page keys reflected into the address bar, in order.
    pub reflected_keys: Vec<String>,
    /// External URLs opened, in order.
    pub opened_urls: Vec<String>,
    /// Number of fullscreen toggles requested.
    pub fullscreen_toggles: usize,
}

impl Shell for MemoryShell {
    fn reflect_page_key(&mut self, key: &str) {
        self.reflected_keys.push(key.to_string());
    }

    fn open_external(&mut self, url: &str) {
        self.opened_urls.push(url.to_string());
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen_toggles += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/memory.rs"]
mod tests;
