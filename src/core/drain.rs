//=========================================================================
// Event Drain
//
// Consumes every pending platform event once per frame and folds it
// into the input snapshot and the application state.
//
// Architecture:
//   Platform::poll_event → EventDrain (this module) → InputSnapshot
//                                    └─────────────→ AppState
//
// Frame lifecycle:
//   1. Snapshot the pointer/scroll delta baselines, zero the text buffer
//   2. Poll until the platform queue is empty (never blocks)
//   3. Compute the frame deltas
//
// The drain must leave nothing in the platform queue: an unconsumed
// event would starve the platform's internal queue and corrupt the next
// frame's delta baseline.
//
// Application state persists between drains. Lifecycle events are the
// only writers; in particular nothing ever resets `Closed` back to
// `Opened`.
//
//=========================================================================

//=== External Crates =====================================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::input::InputSnapshot;
use crate::core::AppState;
use crate::platform::{Platform, PlatformEvent};

//=== EventDrain ==========================================================

/// Per-frame event consumer and lifecycle reducer.
///
/// Owns the application state; everything else it touches is borrowed
/// for the duration of one [`run`](EventDrain::run).
#[derive(Debug)]
pub(crate) struct EventDrain {
    state: AppState,
}

impl EventDrain {
    /// Creates a drain in the [`AppState::Opened`] state.
    pub fn new() -> Self {
        Self {
            state: AppState::Opened,
        }
    }

    /// Returns the application state as of the last drain.
    pub fn state(&self) -> AppState {
        self.state
    }

    //--- run() ------------------------------------------------------------

    /// Drains the platform queue into `input` and returns the resulting
    /// application state.
    ///
    /// `scale` is the current magnification factor, applied to pointer
    /// coordinates at write time.
    pub fn run<P: Platform>(
        &mut self,
        platform: &mut P,
        input: &mut InputSnapshot,
        scale: u32,
    ) -> AppState {
        input.begin_frame();

        let mut consumed = 0usize;
        while let Some(event) = platform.poll_event() {
            consumed += 1;
            self.apply(event, input, scale);
        }

        input.end_frame();

        if consumed > 0 {
            trace!(target: "shell::drain", "Consumed {} events, state {:?}", consumed, self.state);
        }

        self.state
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies one event according to the reduction table.
    fn apply(&mut self, event: PlatformEvent, input: &mut InputSnapshot, scale: u32) {
        match event {
            PlatformEvent::Quit => self.state = AppState::Closed,
            PlatformEvent::Suspended => self.state = AppState::Paused,
            PlatformEvent::Resumed => self.state = AppState::Opened,

            PlatformEvent::KeyDown(key) => input.press_key(key),
            PlatformEvent::KeyUp(key) => input.release_key(key),

            PlatformEvent::ButtonDown(button) => input.press_button(button),
            PlatformEvent::ButtonUp(button) => input.release_button(button),

            PlatformEvent::TextInput(text) | PlatformEvent::TextEditing(text) => {
                input.set_text(text.as_bytes());
            }

            PlatformEvent::PointerMoved { x, y } => input.set_pointer(x, y, scale),
            PlatformEvent::Scroll { x, y } => input.set_scroll(x, y),

            PlatformEvent::Unidentified => {
                // Consumed but ignored
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use crate::platform::testing::ScriptedPlatform;

    //--- Test Helpers -----------------------------------------------------

    fn drain_once(
        drain: &mut EventDrain,
        platform: &mut ScriptedPlatform,
        input: &mut InputSnapshot,
    ) -> AppState {
        drain.run(platform, input, 1)
    }

    //=====================================================================
    // Lifecycle Reduction Tests
    //=====================================================================

    /// Tests that Quit transitions to Closed and stays there.
    #[test]
    fn quit_is_sticky() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_event(PlatformEvent::Quit);
        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Closed);

        // Subsequent drains without lifecycle events keep Closed
        for _ in 0..3 {
            assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Closed);
        }
    }

    /// Tests that Paused and Opened can oscillate.
    #[test]
    fn suspend_resume_oscillates() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_event(PlatformEvent::Suspended);
        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Paused);

        platform.push_event(PlatformEvent::Resumed);
        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Opened);

        platform.push_event(PlatformEvent::Suspended);
        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Paused);
    }

    /// Tests that the last lifecycle event of a frame wins.
    #[test]
    fn last_lifecycle_event_of_frame_wins() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([
            PlatformEvent::Suspended,
            PlatformEvent::Resumed,
            PlatformEvent::Suspended,
        ]);

        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Paused);
    }

    /// Tests that state persists across an empty drain.
    #[test]
    fn state_persists_across_empty_drains() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_event(PlatformEvent::Suspended);
        drain_once(&mut drain, &mut platform, &mut input);

        assert_eq!(drain_once(&mut drain, &mut platform, &mut input), AppState::Paused);
        assert_eq!(drain.state(), AppState::Paused);
    }

    //=====================================================================
    // Queue Consumption Tests
    //=====================================================================

    /// Tests that the drain consumes every pending event in one pass.
    #[test]
    fn drain_leaves_queue_empty() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([
            PlatformEvent::KeyDown(KeyCode::KeyA),
            PlatformEvent::PointerMoved { x: 5, y: 5 },
            PlatformEvent::Unidentified,
            PlatformEvent::Scroll { x: 1, y: 1 },
        ]);

        drain_once(&mut drain, &mut platform, &mut input);

        assert!(platform.queue_is_empty(), "All pending events must be consumed");
    }

    /// Tests that an empty drain yields zero deltas and untouched sets.
    #[test]
    fn empty_drain_preserves_sets_and_zeroes_deltas() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([
            PlatformEvent::KeyDown(KeyCode::Space),
            PlatformEvent::ButtonDown(MouseButton::Left),
            PlatformEvent::PointerMoved { x: 30, y: 40 },
        ]);
        drain_once(&mut drain, &mut platform, &mut input);

        // Second frame: nothing pending
        let state = drain_once(&mut drain, &mut platform, &mut input);

        assert_eq!(state, AppState::Opened);
        assert_eq!(input.pointer_delta(), (0, 0));
        assert_eq!(input.scroll_delta(), (0, 0));
        assert!(input.is_key_down(KeyCode::Space), "Held key must survive empty drain");
        assert!(input.is_button_down(MouseButton::Left));
        assert_eq!(input.pointer_position(), (30, 40));
    }

    //=====================================================================
    // Input Reduction Tests
    //=====================================================================

    /// Tests press/release round trips through the membership sets.
    #[test]
    fn key_and_button_membership_follows_events() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([
            PlatformEvent::KeyDown(KeyCode::ArrowLeft),
            PlatformEvent::ButtonDown(MouseButton::Right),
        ]);
        drain_once(&mut drain, &mut platform, &mut input);
        assert!(input.is_key_down(KeyCode::ArrowLeft));
        assert!(input.is_button_down(MouseButton::Right));

        platform.push_events([
            PlatformEvent::KeyUp(KeyCode::ArrowLeft),
            PlatformEvent::ButtonUp(MouseButton::Right),
        ]);
        drain_once(&mut drain, &mut platform, &mut input);
        assert!(!input.is_key_down(KeyCode::ArrowLeft));
        assert!(!input.is_button_down(MouseButton::Right));
    }

    /// Tests the full motion-to-delta pipeline with magnification.
    ///
    /// Delta must equal last reported position minus the position at the
    /// start of the drain, with both scaled consistently.
    #[test]
    fn pointer_delta_scaled_relative_to_frame_start() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();
        let scale = 2;

        platform.push_event(PlatformEvent::PointerMoved { x: 100, y: 100 });
        drain.run(&mut platform, &mut input, scale);
        assert_eq!(input.pointer_position(), (50, 50));

        platform.push_events([
            PlatformEvent::PointerMoved { x: 300, y: 10 },
            PlatformEvent::PointerMoved { x: 160, y: 120 },
        ]);
        drain.run(&mut platform, &mut input, scale);

        assert_eq!(input.pointer_position(), (80, 60));
        assert_eq!(input.pointer_delta(), (30, 10), "delta = last reported - frame start");
    }

    /// Tests that text events overwrite the buffer and clear next frame.
    #[test]
    fn text_events_overwrite_then_clear() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([
            PlatformEvent::TextInput("a".to_string()),
            PlatformEvent::TextEditing("ab".to_string()),
        ]);
        drain_once(&mut drain, &mut platform, &mut input);
        assert_eq!(input.text_str(), "ab", "Most recent payload wins");

        drain_once(&mut drain, &mut platform, &mut input);
        assert_eq!(input.text(), &[0u8; crate::core::input::TEXT_CAPACITY]);
    }

    /// Tests that scroll reports are absolute positions.
    #[test]
    fn scroll_events_set_absolute_position() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_event(PlatformEvent::Scroll { x: 0, y: 3 });
        drain_once(&mut drain, &mut platform, &mut input);

        platform.push_event(PlatformEvent::Scroll { x: 0, y: 5 });
        drain_once(&mut drain, &mut platform, &mut input);

        assert_eq!(input.scroll_position(), (0, 5));
        assert_eq!(input.scroll_delta(), (0, 2));
    }

    /// Tests that unidentified events are consumed without effect.
    #[test]
    fn unidentified_events_consumed_and_ignored() {
        let mut platform = ScriptedPlatform::new();
        let mut drain = EventDrain::new();
        let mut input = InputSnapshot::new();

        platform.push_events([PlatformEvent::Unidentified, PlatformEvent::Unidentified]);
        let state = drain_once(&mut drain, &mut platform, &mut input);

        assert_eq!(state, AppState::Opened);
        assert!(platform.queue_is_empty());
        assert_eq!(input.pointer_position(), (0, 0));
    }
}
