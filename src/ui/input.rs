//! Input state for UI interaction

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub scroll: f32,         // Scroll wheel delta
}

impl MouseState {
    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is clicking inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// ID of the widget currently being dragged (if any)
    pub dragging: Option<u64>,
    /// ID of the widget that is "hot" (mouse hovering)
    pub hot: Option<u64>,
    /// Counter for generating unique IDs
    id_counter: u64,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            hot: None,
            id_counter: 0,
        }
    }

    /// Generate a unique ID for a widget
    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.id_counter = 0;

        // Clear dragging if mouse released
        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    /// Check if this widget is being dragged
    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    /// Start dragging a widget
    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    /// Set hot widget (hovering)
    pub fn set_hot(&mut self, id: u64) {
        // Only set hot if not dragging something else
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    /// Check if widget is hot
    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_at(x: f32, y: f32) -> MouseState {
        MouseState { x, y, left_down: true, left_pressed: true, ..Default::default() }
    }

    #[test]
    fn test_drag_survives_until_release() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(pressed_at(5.0, 5.0));
        let id = ctx.next_id();
        ctx.start_drag(id);

        ctx.begin_frame(MouseState { left_down: true, ..pressed_at(50.0, 5.0) });
        assert_eq!(ctx.next_id(), id);
        assert!(ctx.is_dragging(id));

        ctx.begin_frame(MouseState::default());
        assert!(!ctx.is_dragging(id));
    }

    #[test]
    fn test_hot_blocked_while_dragging_other() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(pressed_at(0.0, 0.0));
        ctx.start_drag(1);
        ctx.set_hot(2);
        assert!(!ctx.is_hot(2));
        ctx.set_hot(1);
        assert!(ctx.is_hot(1));
    }

    #[test]
    fn test_clicked_requires_press_inside() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(pressed_at(3.0, 3.0).clicked(&rect));
        assert!(!pressed_at(30.0, 3.0).clicked(&rect));
        let held = MouseState { left_pressed: false, ..pressed_at(3.0, 3.0) };
        assert!(held.clicking(&rect) && !held.clicked(&rect));
    }
}
