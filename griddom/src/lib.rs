//! Headless retained-mode scene graph.
//!
//! Nodes live in an arena owned by [`Scene`] and are addressed by
//! generational [`NodeId`] handles. The scene provides child containment,
//! class lists, inline geometry, scroll views with scrollers, and a signal
//! system with trickle-down/bubble dispatch. Layout and rendering are left
//! to the host: a layout pass writes resolved sizes back with
//! [`Scene::set_resolved_size`] and then calls [`Scene::flush_layout`].

pub mod dispatch;
pub mod error;
pub mod event;
pub mod layout;
pub mod node;
pub mod scene;
pub mod scroll;
pub mod types;

pub use error::SceneError;
pub use event::{Handler, HandlerId, Phase, Signal, SignalEvent, SignalKind};
pub use node::{InlineStyle, Node, NodeId, NodeKind, ScrollView, Scroller};
pub use scene::Scene;
pub use types::*;
