//! Marquee is the page lifecycle and animation timing engine behind a small
//! animated site: a handful of pages, each a stack of switchable frames,
//! tied together by crossfade navigation and continuously running ambient
//! motion.
//!
//! # Architecture overview
//!
//! 1. **Pages**: a [`PageRegistry`] maps keys to [`PageBehavior`] factories;
//!    [`Page`] builds the shared scaffold ([`PageBody`]) and runs the
//!    behavior's hooks at init, layout and update time.
//! 2. **Timing**: [`FrameCycle`] and [`StoryRotator`] advance per-page frame
//!    and slide state; [`ColorOscillator`], [`Accelerator`] and
//!    [`AmbientField`] drive the global animation layer.
//! 3. **Orchestration**: one [`PageController`] owns everything, runs the
//!    master [`PageController::tick`], and realizes navigation through a
//!    retargetable [`FadeTransition`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all timing state is a pure function of the
//!   tick deltas fed in; randomized placement comes from a seeded generator.
//! - **No rendering here**: drawing, input and window plumbing stay behind
//!   the [`Stage`], [`AssetSource`] and [`Shell`] traits; in-memory
//!   implementations back the test suite and headless embedders.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod controller;
mod foundation;
mod layout;
mod page;
mod stage;

pub use animation::accel::{Accelerator, Emphasis};
pub use animation::ambient::{AmbientField, AmbientSpec, Drifter, Flutter};
pub use animation::oscillator::{ChannelSpec, ColorOscillator, OscillatorSpec};
pub use controller::controller::{ControllerSettings, EffectSpec, LinkSpec, PageController};
pub use controller::fade::{FadeFrame, FadeTransition};
pub use foundation::core::{INV_PHI, Point, Rgb, Rng64, Vec2, wrap_phase};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use layout::debounce::Debounce;
pub use layout::solver::{RowAlign, RowArgs, RowItem, Viewport, arrange_row};
pub use page::frames::{FrameCycle, FrameMotion};
pub use page::model::{NavSpec, PageBehavior, PageFactory, PageRegistry, PageSettings};
pub use page::page::{Frame, Page, PageBody, Story};
pub use page::story::{FADE_FRACTION, StoryRotator};
pub use stage::backend::{
    AssetSource, ClickAction, NodeId, Shell, Stage, StageCtx, page_key_from_query,
};
pub use stage::memory::{EffectRecord, MemoryShell, MemoryStage, NodeKind, NodeRecord, StaticAssets};
