use tracing::debug;

use crate::types::chrome::{PointerButton, PointerEvent};
use crate::types::geometry::{CursorShape, Point, Rect, ResizeEdges};
use crate::types::settings::{ChromeSettings, WindowSettings};

/// Window operation requested by the chrome, applied by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    /// Move the window's top-left corner to a global position.
    Move(Point),
    Maximize,
    Restore,
    Minimize,
    SetGeometry(Rect),
    SetCursor(CursorShape),
}

/// Title-bar drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Global press position.
    press: Point,
    /// Cursor position relative to the window's top-left corner.
    grab_offset: Point,
    /// Set once the pointer travelled past the drag threshold.
    moving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResizeState {
    edges: ResizeEdges,
    start_pointer: Point,
    start_geometry: Rect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Operation {
    #[default]
    Idle,
    Drag(DragState),
    Resize(ResizeState),
}

/// Trait defining the window chrome interface.
pub trait WindowManagerTrait {
    fn title_bar_press(&mut self, button: PointerButton, local: Point, global: Point, title_bar_width: i32) -> Vec<WindowAction>;
    fn title_bar_move(&mut self, left_held: bool, global: Point) -> Vec<WindowAction>;
    fn title_bar_release(&mut self, global: Point) -> Vec<WindowAction>;
    fn frame_press(&mut self, button: PointerButton, global: Point) -> Vec<WindowAction>;
    fn frame_move(&mut self, local: Point, global: Point) -> Vec<WindowAction>;
    fn frame_release(&mut self) -> Vec<WindowAction>;
    fn toggle_maximized(&mut self) -> Vec<WindowAction>;
    fn minimize(&mut self) -> Vec<WindowAction>;
    fn sync_geometry(&mut self, geometry: Rect, maximized: bool);
    fn is_maximized(&self) -> bool;
}

/// Frameless-window controller: drag-to-move, drag-to-top maximize, edge
/// resize, and the maximize/restore toggle.
///
/// Drag and resize are mutually exclusive. All state is cleared on release.
pub struct WindowManager {
    geometry: Rect,
    normal_geometry: Rect,
    maximized: bool,
    operation: Operation,
    resize_direction: ResizeEdges,
    drag_threshold: i32,
    resize_margin: i32,
    min_width: i32,
    min_height: i32,
}

impl WindowManager {
    pub fn new(window: &WindowSettings, chrome: &ChromeSettings) -> Self {
        let geometry = window.geometry();
        Self {
            geometry,
            normal_geometry: geometry,
            maximized: false,
            operation: Operation::Idle,
            resize_direction: ResizeEdges::NONE,
            drag_threshold: chrome.drag_threshold,
            resize_margin: chrome.resize_margin,
            min_width: window.min_width,
            min_height: window.min_height,
        }
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn normal_geometry(&self) -> Rect {
        self.normal_geometry
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.operation, Operation::Drag(DragState { moving: true, .. }))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.operation, Operation::Resize(_))
    }

    pub fn resize_direction(&self) -> ResizeEdges {
        self.resize_direction
    }

    /// Arms a resize for the given edges, as the cursor-edge hit test does.
    pub fn set_resize_direction(&mut self, edges: ResizeEdges) {
        self.resize_direction = edges;
    }

    /// Routes a chrome pointer event. A hovered edge takes precedence over the
    /// title bar so the top edge stays resizable.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> Vec<WindowAction> {
        if !self.resize_direction.is_empty() && !self.maximized {
            return self.frame_press(event.button, event.global());
        }
        if event.in_title_bar {
            return self.title_bar_press(event.button, event.local(), event.global(), event.title_bar_width);
        }
        Vec::new()
    }

    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> Vec<WindowAction> {
        match self.operation {
            Operation::Drag(_) => self.title_bar_move(event.left_held, event.global()),
            Operation::Resize(_) | Operation::Idle => self.frame_move(event.local(), event.global()),
        }
    }

    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> Vec<WindowAction> {
        match self.operation {
            Operation::Drag(_) => self.title_bar_release(event.global()),
            Operation::Resize(_) => self.frame_release(),
            Operation::Idle => Vec::new(),
        }
    }

    fn maximize(&mut self) -> Vec<WindowAction> {
        if !self.maximized {
            self.normal_geometry = self.geometry;
        }
        self.maximized = true;
        self.resize_direction = ResizeEdges::NONE;
        vec![WindowAction::Maximize]
    }

    fn restore(&mut self) -> Vec<WindowAction> {
        self.maximized = false;
        self.geometry = self.normal_geometry;
        vec![WindowAction::Restore]
    }
}

impl WindowManagerTrait for WindowManager {
    /// Starts tracking a possible title-bar drag.
    ///
    /// A maximized window is restored right away and moved so the same
    /// horizontal fraction of the title bar stays under the cursor.
    fn title_bar_press(&mut self, button: PointerButton, local: Point, global: Point, title_bar_width: i32) -> Vec<WindowAction> {
        if button != PointerButton::Left {
            return Vec::new();
        }
        let mut actions = Vec::new();
        let grab_offset = if self.maximized {
            let ratio = (local.x as f64 / title_bar_width.max(1) as f64).clamp(0.0, 1.0);
            actions.extend(self.restore());
            let grab_x = (ratio * self.normal_geometry.width as f64).round() as i32;
            let grab = Point::new(grab_x, local.y);
            let origin = Point::new(global.x - grab.x, global.y - grab.y);
            self.geometry = self.geometry.moved_to(origin);
            self.normal_geometry = self.geometry;
            actions.push(WindowAction::Move(origin));
            debug!(ratio, grab_x, "restored maximized window on title bar press");
            grab
        } else {
            global.offset_from(self.geometry.top_left())
        };
        self.operation = Operation::Drag(DragState {
            press: global,
            grab_offset,
            moving: false,
        });
        actions
    }

    /// Moves the window once the press travelled past the drag threshold.
    fn title_bar_move(&mut self, left_held: bool, global: Point) -> Vec<WindowAction> {
        let Operation::Drag(mut drag) = self.operation else {
            return Vec::new();
        };
        if !left_held {
            return Vec::new();
        }

        if !drag.moving {
            if global.manhattan(drag.press) <= self.drag_threshold {
                return Vec::new();
            }
            drag.moving = true;
        }

        let origin = Point::new(global.x - drag.grab_offset.x, global.y - drag.grab_offset.y);
        self.geometry = self.geometry.moved_to(origin);
        self.normal_geometry = self.geometry;
        self.operation = Operation::Drag(drag);
        vec![WindowAction::Move(origin)]
    }

    /// Ends a drag. Dropping at the top of the screen maximizes; a release
    /// before the threshold was crossed is a plain click.
    fn title_bar_release(&mut self, global: Point) -> Vec<WindowAction> {
        let operation = std::mem::take(&mut self.operation);
        match operation {
            Operation::Drag(DragState { moving: true, .. }) if global.y <= 0 => self.maximize(),
            _ => Vec::new(),
        }
    }

    fn frame_press(&mut self, button: PointerButton, global: Point) -> Vec<WindowAction> {
        if button != PointerButton::Left || self.resize_direction.is_empty() {
            return Vec::new();
        }
        self.operation = Operation::Resize(ResizeState {
            edges: self.resize_direction,
            start_pointer: global,
            start_geometry: self.geometry,
        });
        Vec::new()
    }

    /// Resizes during a resize operation; otherwise updates the hovered edge
    /// and its cursor.
    fn frame_move(&mut self, local: Point, global: Point) -> Vec<WindowAction> {
        if let Operation::Resize(resize) = self.operation {
            let delta = global.offset_from(resize.start_pointer);
            let rect = resize
                .start_geometry
                .resized(resize.edges, delta, self.min_width, self.min_height);
            if rect == self.geometry {
                return Vec::new();
            }
            self.geometry = rect;
            self.normal_geometry = rect;
            return vec![WindowAction::SetGeometry(rect)];
        }

        let edges = if self.maximized {
            ResizeEdges::NONE
        } else {
            self.geometry.edges_near(local, self.resize_margin)
        };
        if edges == self.resize_direction {
            return Vec::new();
        }
        self.resize_direction = edges;
        vec![WindowAction::SetCursor(edges.cursor())]
    }

    fn frame_release(&mut self) -> Vec<WindowAction> {
        if let Operation::Resize(_) = self.operation {
            self.operation = Operation::Idle;
        }
        self.resize_direction = ResizeEdges::NONE;
        vec![WindowAction::SetCursor(CursorShape::Default)]
    }

    fn toggle_maximized(&mut self) -> Vec<WindowAction> {
        if self.maximized {
            self.restore()
        } else {
            self.maximize()
        }
    }

    fn minimize(&mut self) -> Vec<WindowAction> {
        vec![WindowAction::Minimize]
    }

    /// Feeds back the geometry the window system actually applied.
    fn sync_geometry(&mut self, geometry: Rect, maximized: bool) {
        self.geometry = geometry;
        self.maximized = maximized;
        if !maximized {
            self.normal_geometry = geometry;
        }
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }
}
