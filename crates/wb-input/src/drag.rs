//! Drag state machine for the launcher icon.

use crate::geom::{clamp_to_viewport, Vec2};
use serde::{Deserialize, Serialize};

/// Phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    /// No button held over the icon.
    #[default]
    Idle,
    /// Button held; moves reposition the icon.
    Armed,
}

/// Outcome of a click event after drag discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Genuine click — open the panel.
    Activate,
    /// Click fired at the end of a drag; do nothing.
    SuppressedDrag,
}

/// Tracks one icon's position and drag lifecycle.
#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    /// Pointer offset inside the icon at pointer-down.
    grab_offset: Vec2,
    /// Whether any movement happened since the last pointer-down.
    dragged: bool,
    pos: Vec2,
    icon_size: Vec2,
    viewport: Vec2,
}

impl DragController {
    pub fn new(pos: Vec2, icon_size: Vec2, viewport: Vec2) -> Self {
        Self {
            phase: DragPhase::Idle,
            grab_offset: Vec2::ZERO,
            dragged: false,
            pos: clamp_to_viewport(pos, icon_size, viewport),
            icon_size,
            viewport,
        }
    }

    /// Current icon origin.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_armed(&self) -> bool {
        self.phase == DragPhase::Armed
    }

    /// Update the viewport bounds, re-clamping the current position so
    /// a window resize cannot strand the icon off-screen.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.pos = clamp_to_viewport(self.pos, self.icon_size, viewport);
    }

    /// Pointer pressed over the icon: record the grab offset and arm.
    pub fn pointer_down(&mut self, pointer: Vec2) {
        self.phase = DragPhase::Armed;
        self.grab_offset = pointer - self.pos;
        self.dragged = false;
    }

    /// Pointer moved. Ignored unless armed; while armed the icon
    /// follows the pointer (minus the grab offset), clamped to the
    /// viewport, and the move marks this press as a drag.
    pub fn pointer_move(&mut self, pointer: Vec2) -> Option<Vec2> {
        if self.phase != DragPhase::Armed {
            return None;
        }
        self.dragged = true;
        self.pos = clamp_to_viewport(pointer - self.grab_offset, self.icon_size, self.viewport);
        Some(self.pos)
    }

    /// Pointer released. Disarms unconditionally — the release may land
    /// outside the icon's bounds.
    pub fn pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Click event after pointer-up. Consumes the drag flag: a press
    /// that moved suppresses exactly one click.
    pub fn click(&mut self) -> ClickOutcome {
        if std::mem::take(&mut self.dragged) {
            ClickOutcome::SuppressedDrag
        } else {
            ClickOutcome::Activate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: Vec2 = Vec2 { x: 40.0, y: 40.0 };
    const VIEWPORT: Vec2 = Vec2 { x: 1280.0, y: 720.0 };

    fn controller() -> DragController {
        DragController::new(Vec2::new(100.0, 100.0), ICON, VIEWPORT)
    }

    #[test]
    fn plain_click_activates() {
        let mut drag = controller();

        drag.pointer_down(Vec2::new(110.0, 110.0));
        drag.pointer_up();

        assert_eq!(drag.click(), ClickOutcome::Activate);
    }

    #[test]
    fn click_after_move_is_suppressed_once() {
        let mut drag = controller();

        drag.pointer_down(Vec2::new(110.0, 110.0));
        drag.pointer_move(Vec2::new(140.0, 110.0));
        drag.pointer_up();

        assert_eq!(drag.click(), ClickOutcome::SuppressedDrag);

        // The flag is consumed: the next plain click goes through.
        drag.pointer_down(Vec2::new(140.0, 110.0));
        drag.pointer_up();
        assert_eq!(drag.click(), ClickOutcome::Activate);
    }

    #[test]
    fn move_keeps_grab_offset() {
        let mut drag = controller();

        // Grab the icon 10px inside its origin.
        drag.pointer_down(Vec2::new(110.0, 110.0));
        let pos = drag.pointer_move(Vec2::new(210.0, 310.0)).unwrap();

        assert_eq!(pos, Vec2::new(200.0, 300.0));
        assert_eq!(drag.pos(), pos);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut drag = controller();

        assert_eq!(drag.pointer_move(Vec2::new(500.0, 500.0)), None);
        assert_eq!(drag.pos(), Vec2::new(100.0, 100.0));
        assert_eq!(drag.click(), ClickOutcome::Activate);
    }

    #[test]
    fn drag_into_negative_space_clamps_to_origin() {
        let mut drag = controller();

        drag.pointer_down(Vec2::new(100.0, 100.0));
        let pos = drag.pointer_move(Vec2::new(-300.0, -300.0)).unwrap();

        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn drag_past_far_edge_clamps_to_viewport_minus_icon() {
        let mut drag = controller();

        drag.pointer_down(Vec2::new(100.0, 100.0));
        let pos = drag.pointer_move(Vec2::new(9999.0, 9999.0)).unwrap();

        assert_eq!(pos, Vec2::new(VIEWPORT.x - ICON.x, VIEWPORT.y - ICON.y));
    }

    #[test]
    fn release_outside_icon_still_disarms() {
        let mut drag = controller();

        drag.pointer_down(Vec2::new(110.0, 110.0));
        drag.pointer_move(Vec2::new(600.0, 400.0));
        drag.pointer_up();

        assert!(!drag.is_armed());
        // Further moves no longer reposition.
        assert_eq!(drag.pointer_move(Vec2::new(700.0, 500.0)), None);
    }

    #[test]
    fn viewport_shrink_reclamps_position() {
        let mut drag = DragController::new(Vec2::new(1200.0, 600.0), ICON, VIEWPORT);

        drag.set_viewport(Vec2::new(640.0, 480.0));

        assert_eq!(drag.pos(), Vec2::new(600.0, 440.0));
    }
}
