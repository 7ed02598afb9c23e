/// A 2D vector, used for scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A resolved width/height pair written by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

/// Whether a node can be the target of pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickingMode {
    #[default]
    Position,
    /// Pointer input passes through to the nearest pickable ancestor.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollerVisibility {
    #[default]
    Auto,
    Hidden,
}

/// Which axes a scroll view may scroll along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    Horizontal,
    #[default]
    Vertical,
    Both,
}

impl ScrollMode {
    pub fn allows(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (ScrollMode::Both, _)
                | (ScrollMode::Horizontal, Axis::Horizontal)
                | (ScrollMode::Vertical, Axis::Vertical)
        )
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}
