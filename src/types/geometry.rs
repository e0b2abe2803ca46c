use serde::{Deserialize, Serialize};

/// A point in logical pixels. Window-local or global depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(&self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Window or view rectangle in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn moved_to(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }

    /// Shifts the edges named by `edges` by `delta`, leaving the others fixed.
    ///
    /// The result never shrinks below `min_width` x `min_height`; when it would,
    /// the dragged edge stops and the opposite edge stays put.
    pub fn resized(&self, edges: ResizeEdges, delta: Point, min_width: i32, min_height: i32) -> Rect {
        let (mut left, mut top, mut right, mut bottom) = (self.x, self.y, self.right(), self.bottom());

        if edges.top {
            top = (top + delta.y).min(bottom - min_height);
        }
        if edges.bottom {
            bottom = (bottom + delta.y).max(top + min_height);
        }
        if edges.left {
            left = (left + delta.x).min(right - min_width);
        }
        if edges.right {
            right = (right + delta.x).max(left + min_width);
        }

        Rect::new(left, top, right - left, bottom - top)
    }

    /// Edges of this rectangle within `margin` pixels of a window-local point.
    pub fn edges_near(&self, local: Point, margin: i32) -> ResizeEdges {
        if local.x < 0 || local.y < 0 || local.x > self.width || local.y > self.height {
            return ResizeEdges::NONE;
        }
        ResizeEdges {
            top: local.y <= margin,
            bottom: local.y >= self.height - margin,
            left: local.x <= margin,
            right: local.x >= self.width - margin,
        }
    }
}

/// Which window edges a resize drags. Corners set two flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ResizeEdges {
    pub const NONE: ResizeEdges = ResizeEdges {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    /// Parses names like `"top"`, `"bottom-left"` or `"right"`.
    pub fn from_direction(direction: &str) -> ResizeEdges {
        ResizeEdges {
            top: direction.contains("top"),
            bottom: direction.contains("bottom"),
            left: direction.contains("left"),
            right: direction.contains("right"),
        }
    }

    pub fn cursor(&self) -> CursorShape {
        match (self.top, self.bottom, self.left, self.right) {
            (true, _, true, _) => CursorShape::NwResize,
            (true, _, _, true) => CursorShape::NeResize,
            (_, true, true, _) => CursorShape::SwResize,
            (_, true, _, true) => CursorShape::SeResize,
            (true, _, _, _) => CursorShape::NResize,
            (_, true, _, _) => CursorShape::SResize,
            (_, _, true, _) => CursorShape::WResize,
            (_, _, _, true) => CursorShape::EResize,
            _ => CursorShape::Default,
        }
    }
}

/// Pointer cursor requested by the window chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorShape {
    #[default]
    Default,
    NResize,
    SResize,
    EResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
}
