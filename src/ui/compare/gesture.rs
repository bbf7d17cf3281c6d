// SPDX-License-Identifier: MPL-2.0
//! Drag gesture lifecycle: a two-state machine owning the active pointer.
//!
//! `Idle → Dragging` on a press over the slider surface, `Dragging → Idle`
//! on release anywhere (the pointer may leave the widget mid-drag). Move
//! events are only accepted while dragging, and only from the pointer source
//! that began the gesture, so a second finger or a stray mouse move cannot
//! steer someone else's drag.

use iced::touch;

/// The input device a gesture originates from. For touch input this pins the
/// gesture to the first finger that went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging(PointerSource),
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureState {
    phase: Phase,
}

impl GestureState {
    /// Enters `Dragging` for the given source.
    ///
    /// Returns `false` without side effects when a drag is already active;
    /// re-entrant begins are no-ops.
    pub fn begin(&mut self, source: PointerSource) -> bool {
        if matches!(self.phase, Phase::Dragging(_)) {
            return false;
        }
        self.phase = Phase::Dragging(source);
        true
    }

    /// Whether a move event from `source` should steer the slider.
    #[must_use]
    pub fn accepts(&self, source: PointerSource) -> bool {
        self.phase == Phase::Dragging(source)
    }

    /// Exits `Dragging` if the release came from the active source.
    ///
    /// Returns `true` only on the transition; releases while idle or from
    /// another finger are ignored.
    pub fn end(&mut self, source: PointerSource) -> bool {
        if self.phase == Phase::Dragging(source) {
            self.phase = Phase::Idle;
            true
        } else {
            false
        }
    }

    /// Forces the machine back to `Idle` regardless of the active source.
    ///
    /// Used when the surface is torn down mid-drag (pair navigation, load
    /// errors) so no stale gesture survives the teardown.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_end_transition_the_machine() {
        let mut gesture = GestureState::default();
        assert!(!gesture.is_dragging());

        assert!(gesture.begin(PointerSource::Mouse));
        assert!(gesture.is_dragging());

        assert!(gesture.end(PointerSource::Mouse));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn reentrant_begin_is_a_no_op() {
        let mut gesture = GestureState::default();
        assert!(gesture.begin(PointerSource::Mouse));
        assert!(!gesture.begin(PointerSource::Mouse));
        assert!(gesture.is_dragging());
    }

    #[test]
    fn moves_are_only_accepted_from_the_active_source() {
        let finger_a = touch::Finger(1);
        let finger_b = touch::Finger(2);

        let mut gesture = GestureState::default();
        gesture.begin(PointerSource::Finger(finger_a));

        assert!(gesture.accepts(PointerSource::Finger(finger_a)));
        assert!(!gesture.accepts(PointerSource::Finger(finger_b)));
        assert!(!gesture.accepts(PointerSource::Mouse));
    }

    #[test]
    fn release_from_another_finger_does_not_end_the_drag() {
        let finger_a = touch::Finger(1);
        let finger_b = touch::Finger(2);

        let mut gesture = GestureState::default();
        gesture.begin(PointerSource::Finger(finger_a));

        assert!(!gesture.end(PointerSource::Finger(finger_b)));
        assert!(gesture.is_dragging());
        assert!(gesture.end(PointerSource::Finger(finger_a)));
    }

    #[test]
    fn end_while_idle_is_ignored() {
        let mut gesture = GestureState::default();
        assert!(!gesture.end(PointerSource::Mouse));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn cancel_forces_idle_from_any_source() {
        let mut gesture = GestureState::default();
        gesture.begin(PointerSource::Mouse);
        gesture.cancel();
        assert!(!gesture.is_dragging());
        // Cancel while idle is harmless too.
        gesture.cancel();
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn no_moves_accepted_after_release() {
        let mut gesture = GestureState::default();
        gesture.begin(PointerSource::Mouse);
        gesture.end(PointerSource::Mouse);
        assert!(!gesture.accepts(PointerSource::Mouse));
    }
}
