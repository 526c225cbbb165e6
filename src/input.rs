//! Pointer state tracking.
//!
//! A small abstraction over raw window events: the cursor position in
//! surface coordinates plus a pointer-over flag. The event handler writes it,
//! the physics step reads it. Both run on the UI thread, so the cell needs no
//! synchronization; a cursor update landing between two steps is simply
//! picked up by the next step (last writer wins, fine for a visual effect).

use glam::Vec2;
use winit::event::WindowEvent;

/// Where the cursor is parked while it is off the surface: far enough out
/// that no interaction radius can reach it.
pub const PARKED: Vec2 = Vec2::new(-10_000.0, -10_000.0);

/// Shared cursor state cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Vec2,
    over: bool,
}

impl PointerState {
    /// A fresh state: cursor parked off-surface, not over the window.
    pub fn new() -> Self {
        Self {
            position: PARKED,
            over: false,
        }
    }

    /// A state representing a cursor hovering at `position` (surface
    /// coordinates). Used by tests and benches to drive the physics step
    /// without a window.
    pub fn hovering(position: Vec2) -> Self {
        Self {
            position,
            over: true,
        }
    }

    /// Cursor position in surface pixel coordinates.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the cursor is currently over the render surface.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            _ => {}
        }
    }

    fn cursor_moved(&mut self, position: Vec2) {
        self.position = position;
        self.over = true;
    }

    fn cursor_left(&mut self) {
        self.position = PARKED;
        self.over = false;
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_parked() {
        let pointer = PointerState::new();
        assert!(!pointer.is_over());
        assert_eq!(pointer.position(), PARKED);
    }

    #[test]
    fn test_move_marks_over_and_records_position() {
        let mut pointer = PointerState::new();
        pointer.cursor_moved(Vec2::new(120.0, 40.0));

        assert!(pointer.is_over());
        assert_eq!(pointer.position(), Vec2::new(120.0, 40.0));

        pointer.cursor_moved(Vec2::new(10.0, 10.0));
        assert_eq!(pointer.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_leave_parks_the_cursor() {
        let mut pointer = PointerState::new();
        pointer.cursor_moved(Vec2::new(50.0, 50.0));
        pointer.cursor_left();

        assert!(!pointer.is_over());
        assert_eq!(pointer.position(), PARKED);
    }

    #[test]
    fn test_parked_position_is_outside_any_interaction_radius() {
        // The physics step also checks the over-flag, but the parked
        // coordinate alone must keep every on-canvas particle out of reach.
        let parked = PointerState::new().position();
        let farthest_canvas_point = Vec2::new(0.0, 0.0);
        assert!(parked.distance(farthest_canvas_point) > crate::physics::MOUSE_RADIUS);
    }
}
