//! Open/close state machine driving the sliding menu.
//!
//! Offsets are plain f32 pixels; the view converts to and from GPUI units
//! at the boundary. The invariant maintained throughout: the translate
//! offset stays clamped to `[0, menu_width]`, and the logical state is
//! always exactly one of open or closed.

use gpui::Point;
use tracing::trace;

/// Pointer travel below this (in pixels) is a tap, not a drag.
pub const TAP_SLOP: f32 = 3.0;

/// How a finished gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Pointer travel stayed within [`TAP_SLOP`]; treated as a tap on the
    /// toggle affordance.
    Tap,
    /// Drag released at or past half the menu width.
    SnapOpen,
    /// Drag released short of half the menu width.
    SnapClosed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    start: Point<f32>,
    last: Point<f32>,
}

impl DragGesture {
    fn dx(&self) -> f32 {
        self.last.x - self.start.x
    }
}

/// Logical open flag plus the continuous translate offset, with transient
/// drag tracking between a pointer-down and pointer-up pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    open: bool,
    menu_width: f32,
    offset: f32,
    drag: Option<DragGesture>,
}

impl MenuState {
    pub fn new(menu_width: f32, open: bool) -> Self {
        let menu_width = menu_width.max(0.0);
        Self {
            open,
            menu_width,
            offset: if open { menu_width } else { 0.0 },
            drag: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn menu_width(&self) -> f32 {
        self.menu_width
    }

    /// Current translate offset, always in `[0, menu_width]`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Open the menu. Returns false (and leaves the offset untouched) when
    /// the menu is already open and `force` is not set.
    pub fn open(&mut self, force: bool) -> bool {
        if !force && self.open {
            return false;
        }
        self.open = true;
        self.offset = self.menu_width;
        trace!(offset = self.offset, "menu open");
        true
    }

    /// Close the menu. Returns false when already closed and not forced.
    pub fn close(&mut self, force: bool) -> bool {
        if !force && !self.open {
            return false;
        }
        self.open = false;
        self.offset = 0.0;
        trace!("menu closed");
        true
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close(false)
        } else {
            self.open(false)
        }
    }

    /// Begin a gesture at the given pointer position.
    pub fn begin_drag(&mut self, position: Point<f32>) {
        self.drag = Some(DragGesture {
            start: position,
            last: position,
        });
    }

    /// Track pointer movement. Returns the new live offset, or `None` when
    /// no gesture is active.
    pub fn drag_to(&mut self, position: Point<f32>) -> Option<f32> {
        let drag = self.drag.as_mut()?;
        drag.last = position;
        let dx = drag.dx();
        let base = if self.open { self.menu_width } else { 0.0 };
        self.offset = (base + dx).clamp(0.0, self.menu_width);
        Some(self.offset)
    }

    /// Finish the gesture. Travel within [`TAP_SLOP`] toggles the menu;
    /// anything longer snaps to the nearer side of the half-width boundary,
    /// forced so the offset re-settles to the exact boundary value even
    /// when the logical state did not change.
    pub fn end_drag(&mut self) -> Option<GestureOutcome> {
        let drag = self.drag.take()?;
        let dx = drag.dx();
        if dx.abs() <= TAP_SLOP {
            self.toggle();
            return Some(GestureOutcome::Tap);
        }

        let base = if self.open { self.menu_width } else { 0.0 };
        let target = (base + dx).clamp(0.0, self.menu_width);
        if target >= self.menu_width / 2.0 {
            self.open(true);
            Some(GestureOutcome::SnapOpen)
        } else {
            self.close(true);
            Some(GestureOutcome::SnapClosed)
        }
    }

    /// Drop an in-flight gesture without resolving it and re-settle the
    /// offset at the logical resting value. Only used during container
    /// teardown.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            self.offset = if self.open { self.menu_width } else { 0.0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use gpui::point;

    use super::*;

    fn drag(state: &mut MenuState, from_x: f32, to_x: f32) -> GestureOutcome {
        state.begin_drag(point(from_x, 10.0));
        state.drag_to(point(to_x, 10.0));
        state.end_drag().expect("gesture was active")
    }

    #[test]
    fn starts_closed_by_default_option() {
        let state = MenuState::new(300.0, false);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn starts_open_when_requested() {
        let state = MenuState::new(300.0, true);
        assert!(state.is_open());
        assert_eq!(state.offset(), 300.0);
    }

    #[test]
    fn open_is_noop_when_already_open() {
        let mut state = MenuState::new(300.0, true);
        assert!(!state.open(false));
        assert!(state.is_open());
        assert_eq!(state.offset(), 300.0);
    }

    #[test]
    fn close_is_noop_when_already_closed() {
        let mut state = MenuState::new(300.0, false);
        assert!(!state.close(false));
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn forced_open_resettles_offset() {
        let mut state = MenuState::new(300.0, true);
        state.begin_drag(point(0.0, 0.0));
        state.drag_to(point(-40.0, 0.0));
        assert_eq!(state.offset(), 260.0);
        assert!(state.open(true));
        assert_eq!(state.offset(), 300.0);
    }

    #[test]
    fn double_toggle_returns_to_initial_state() {
        for initially_open in [false, true] {
            let mut state = MenuState::new(300.0, initially_open);
            state.toggle();
            state.toggle();
            assert_eq!(state.is_open(), initially_open);
            let expected = if initially_open { 300.0 } else { 0.0 };
            assert_eq!(state.offset(), expected);
        }
    }

    #[test]
    fn drag_offset_is_clamped_both_ways() {
        let mut state = MenuState::new(300.0, false);
        state.begin_drag(point(0.0, 0.0));
        assert_eq!(state.drag_to(point(-500.0, 0.0)), Some(0.0));
        assert_eq!(state.drag_to(point(1000.0, 0.0)), Some(300.0));
        assert_eq!(state.drag_to(point(120.0, 0.0)), Some(120.0));
    }

    #[test]
    fn drag_while_open_offsets_from_menu_width() {
        let mut state = MenuState::new(300.0, true);
        state.begin_drag(point(400.0, 0.0));
        assert_eq!(state.drag_to(point(300.0, 0.0)), Some(200.0));
    }

    #[test]
    fn tap_toggles_regardless_of_direction() {
        for dx in [-3.0, -1.0, 0.0, 2.0, 3.0] {
            let mut state = MenuState::new(300.0, false);
            assert_eq!(drag(&mut state, 50.0, 50.0 + dx), GestureOutcome::Tap);
            assert!(state.is_open());
            assert_eq!(state.offset(), 300.0);
        }
    }

    #[test]
    fn tap_while_open_closes() {
        let mut state = MenuState::new(300.0, true);
        assert_eq!(drag(&mut state, 50.0, 48.0), GestureOutcome::Tap);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn release_at_half_width_snaps_open() {
        let mut state = MenuState::new(300.0, false);
        assert_eq!(drag(&mut state, 0.0, 150.0), GestureOutcome::SnapOpen);
        assert!(state.is_open());
        assert_eq!(state.offset(), 300.0);
    }

    #[test]
    fn release_below_half_width_snaps_closed() {
        let mut state = MenuState::new(300.0, false);
        assert_eq!(drag(&mut state, 0.0, 149.0), GestureOutcome::SnapClosed);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn long_drag_from_closed_opens_at_350() {
        let mut state = MenuState::new(350.0, false);
        assert_eq!(drag(&mut state, 0.0, 200.0), GestureOutcome::SnapOpen);
        assert!(state.is_open());
        assert_eq!(state.offset(), 350.0);
    }

    #[test]
    fn short_drag_from_closed_stays_closed_at_350() {
        let mut state = MenuState::new(350.0, false);
        assert_eq!(drag(&mut state, 0.0, 100.0), GestureOutcome::SnapClosed);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn drag_back_past_half_closes_an_open_menu() {
        let mut state = MenuState::new(300.0, true);
        assert_eq!(drag(&mut state, 400.0, 200.0), GestureOutcome::SnapClosed);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn vertical_travel_does_not_count_as_drag_distance() {
        let mut state = MenuState::new(300.0, false);
        state.begin_drag(point(10.0, 0.0));
        state.drag_to(point(11.0, 250.0));
        assert_eq!(state.end_drag(), Some(GestureOutcome::Tap));
        assert!(state.is_open());
    }

    #[test]
    fn gesture_only_resolves_when_active() {
        let mut state = MenuState::new(300.0, false);
        assert_eq!(state.drag_to(point(100.0, 0.0)), None);
        assert_eq!(state.end_drag(), None);
        assert!(!state.is_open());
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn cancel_drops_the_gesture_without_moving_state() {
        let mut state = MenuState::new(300.0, false);
        state.begin_drag(point(0.0, 0.0));
        state.drag_to(point(200.0, 0.0));
        state.cancel_drag();
        assert!(!state.is_dragging());
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.end_drag(), None);
        assert!(!state.is_open());
    }
}
