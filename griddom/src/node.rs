use std::fmt;

use crate::event::Registration;
use crate::types::{
    Axis, FlexDirection, Overflow, PickingMode, ScrollMode, ScrollerVisibility, Size, Vec2,
};

/// Generational handle to a node in a [`Scene`](crate::Scene).
///
/// A handle outlives its node safely: once the node is despawned and its
/// slot reused, the old handle no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}v{}", self.index, self.generation)
    }
}

/// Inline geometry properties. `None` means unset, so the style sheet or
/// layout engine decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    pub overflow: Option<Overflow>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
}

/// Scroll view bookkeeping. The content container and both scrollers are
/// ordinary child nodes of the scroll view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    pub mode: ScrollMode,
    pub content: NodeId,
    pub horizontal: NodeId,
    pub vertical: NodeId,
    pub offset: Vec2,
}

impl ScrollView {
    pub fn scroller(&self, axis: Axis) -> NodeId {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// One scrollbar of a scroll view.
#[derive(Debug, Clone, PartialEq)]
pub struct Scroller {
    pub axis: Axis,
    pub value: f32,
    pub visibility: ScrollerVisibility,
    pub(crate) owner: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element,
    Label(String),
    ScrollView(ScrollView),
    Scroller(Scroller),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: Option<String>,
    pub kind: NodeKind,
    pub style: InlineStyle,
    pub picking: PickingMode,
    pub enabled: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) classes: Vec<String>,
    pub(crate) style_sheets: Vec<String>,
    pub(crate) resolved: Size,
    pub(crate) handlers: Vec<Registration>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            kind,
            style: InlineStyle::default(),
            picking: PickingMode::Position,
            enabled: true,
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            style_sheets: Vec::new(),
            resolved: Size::ZERO,
            handlers: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style_sheets(&self) -> &[String] {
        &self.style_sheets
    }

    pub fn resolved_size(&self) -> Size {
        self.resolved
    }

    pub fn as_scroll_view(&self) -> Option<&ScrollView> {
        match &self.kind {
            NodeKind::ScrollView(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_scroller(&self) -> Option<&Scroller> {
        match &self.kind {
            NodeKind::Scroller(scroller) => Some(scroller),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Label(text) => Some(text),
            _ => None,
        }
    }
}
