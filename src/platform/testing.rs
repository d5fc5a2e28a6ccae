//=========================================================================
// Scripted Platform (test support)
//=========================================================================
//
// In-memory [`Platform`] implementation backing the timing and drain
// unit tests.
//
// The clock is hand-driven: tests advance it explicitly with
// `advance_ms`, and `delay` advances it by the slept amount so that a
// pacing sleep is observable on the next clock read, like on a real
// backend. Every call the shell makes (sleeps, presents, setters) is
// recorded for assertion.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::{Platform, PlatformEvent};

//=== ScriptedPlatform ====================================================

/// Deterministic platform double with a scripted event queue and a
/// manually advanced millisecond clock.
pub(crate) struct ScriptedPlatform {
    clock_ms: u64,
    events: VecDeque<PlatformEvent>,

    //--- Recorded Calls ---------------------------------------------------
    pub slept: Vec<Duration>,
    pub presented: Vec<(usize, usize)>,
    pub title: Option<String>,
    pub window_scale: Option<u32>,
    pub fullscreen: Option<bool>,
    pub vsync: Option<bool>,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self {
            clock_ms: 0,
            events: VecDeque::new(),
            slept: Vec::new(),
            presented: Vec::new(),
            title: None,
            window_scale: None,
            fullscreen: None,
            vsync: None,
        }
    }

    /// Moves the clock forward, simulating work done by the caller.
    pub fn advance_ms(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    /// Appends an event to the pending queue.
    pub fn push_event(&mut self, event: PlatformEvent) {
        self.events.push_back(event);
    }

    /// Appends several events in order.
    pub fn push_events(&mut self, events: impl IntoIterator<Item = PlatformEvent>) {
        self.events.extend(events);
    }

    /// Returns `true` once the drain has consumed every scripted event.
    pub fn queue_is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Platform for ScriptedPlatform {
    fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    fn delay(&mut self, duration: Duration) {
        self.slept.push(duration);
        self.clock_ms += duration.as_millis() as u64;
    }

    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.events.pop_front()
    }

    fn present(&mut self, pixels: &[u8], pitch: usize) {
        self.presented.push((pixels.len(), pitch));
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_window_scale(&mut self, scale: u32) {
        self.window_scale = Some(scale);
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        self.fullscreen = Some(enabled);
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.vsync = Some(enabled);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_polled_in_fifo_order() {
        let mut platform = ScriptedPlatform::new();
        platform.push_event(PlatformEvent::Suspended);
        platform.push_event(PlatformEvent::Resumed);

        assert_eq!(platform.poll_event(), Some(PlatformEvent::Suspended));
        assert_eq!(platform.poll_event(), Some(PlatformEvent::Resumed));
        assert_eq!(platform.poll_event(), None);
        assert!(platform.queue_is_empty());
    }

    #[test]
    fn delay_advances_clock_by_whole_milliseconds() {
        let mut platform = ScriptedPlatform::new();

        platform.delay(Duration::from_millis(16));
        platform.advance_ms(4);

        assert_eq!(platform.now_ms(), 20);
        assert_eq!(platform.slept.len(), 1);
    }
}
