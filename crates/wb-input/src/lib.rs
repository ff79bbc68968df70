//! Pointer handling for the worldbook launcher icon.
//!
//! The icon must be draggable anywhere inside the viewport, and a drag
//! must never be mistaken for a click. All of that discrimination lives
//! here, free of any UI toolkit, so the state machine can be driven
//! directly in tests:
//!
//! ```text
//! pointer_down ──► Armed ──► pointer_move* ──► pointer_up ──► Idle
//!                                │                              │
//!                                └── sets `dragged` ────────────┤
//!                                                               ▼
//!                                              click() ──► Activate | SuppressedDrag
//! ```
//!
//! Moves are consumed only while armed; pointer-up always disarms,
//! including releases outside the icon's bounds. Any nonzero move while
//! armed counts as a drag — there is deliberately no distance
//! threshold, since a threshold would let small drags fire activation.

mod drag;
mod geom;

pub use drag::{ClickOutcome, DragController, DragPhase};
pub use geom::{clamp_to_viewport, Vec2};

/// Default launcher icon side length (logical pixels).
pub const DEFAULT_ICON_SIZE: f32 = 40.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn constants_are_reasonable() {
        assert!(DEFAULT_ICON_SIZE > 0.0);
    }
}
