//=========================================================================
// Platform Seam
//
// Narrow contract between the shell and the windowing/presentation
// platform underneath it.
//
// Architecture:
// ```text
//  Application:                      Platform backend:
//  ┌──────────────────────────┐     ┌─────────────────────┐
//  │  loop {                  │     │  Window / surface   │
//  │    shell.step(dt)  ──────┼────►│  now_ms / delay     │
//  │      │ (drain)           │     │  poll_event         │
//  │    shell.input()         │     │                     │
//  │    shell.display() ──────┼────►│  present            │
//  │  }                       │     └─────────────────────┘
//  └──────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Trait, not backend**: the shell never links a window system; it
//   consumes whatever implements [`Platform`]. Tests run against a
//   scripted in-memory implementation with a hand-driven clock.
// - **Pull-based events**: `poll_event` returns one event per call and
//   never blocks. The drain keeps calling until `None`, which is what
//   keeps the platform's internal queue empty between frames.
// - **Millisecond clock**: pacing assumes millisecond resolution and
//   converts to seconds at the scheduler; sub-millisecond precision is
//   neither guaranteed nor required.
//
// Responsibilities:
// - Define the event vocabulary crossing the seam ([`PlatformEvent`])
// - Define the platform contract consumed by the shell ([`Platform`])
//
//=========================================================================

//=== Submodules ==========================================================

#[cfg(test)]
pub(crate) mod testing;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, MouseButton};

//=== PlatformEvent =======================================================

/// A single discrete event polled from the platform queue.
///
/// This is the only vocabulary crossing the platform seam. Backends map
/// their native event types onto these variants; anything without a
/// mapping becomes [`PlatformEvent::Unidentified`] and is ignored by the
/// drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Window close requested or application terminating.
    Quit,

    /// Application entering or entered the background.
    Suspended,

    /// Application entering or entered the foreground.
    Resumed,

    /// Physical key pressed.
    KeyDown(KeyCode),

    /// Physical key released.
    KeyUp(KeyCode),

    /// Pointer button pressed.
    ButtonDown(MouseButton),

    /// Pointer button released.
    ButtonUp(MouseButton),

    /// Committed text input (a typed character or IME commit).
    TextInput(String),

    /// In-progress IME composition text.
    TextEditing(String),

    /// Pointer moved, in raw window coordinates (pre-magnification).
    PointerMoved { x: i32, y: i32 },

    /// Scroll position report (absolute, not a per-event delta).
    Scroll { x: i32, y: i32 },

    /// Any platform event without a mapping. Consumed and ignored.
    Unidentified,
}

//=== Platform ============================================================

/// Contract the shell consumes from the windowing/presentation backend.
///
/// One backend instance is owned by one [`Shell`](crate::Shell); the
/// shell is the only caller of these methods, always from the main
/// thread. The audio device is NOT part of this seam - it is driven by
/// its own execution context (see [`crate::audio`]).
///
/// # Contract
///
/// - `now_ms` is monotonic; it never goes backwards.
/// - `delay` blocks the calling thread for roughly the given duration.
///   Coarse granularity is acceptable.
/// - `poll_event` never blocks and returns `None` once the queue is
///   empty for this instant.
/// - `present` composites a tightly packed pixel buffer with the given
///   row pitch in bytes. Steady-state presentation has no failure
///   channel (spec'd fail-fast setup is the backend's concern).
pub trait Platform {
    /// Reads the monotonic clock, in milliseconds.
    fn now_ms(&self) -> u64;

    /// Blocks the calling thread for `duration`.
    fn delay(&mut self, duration: Duration);

    /// Removes and returns the next pending event, or `None` when the
    /// queue is empty. Must never block.
    fn poll_event(&mut self) -> Option<PlatformEvent>;

    /// Composites `pixels` (row pitch `pitch` bytes) to the screen.
    fn present(&mut self, pixels: &[u8], pitch: usize);

    /// Sets the window title.
    fn set_title(&mut self, title: &str);

    /// Resizes the window to `scale` times the logical resolution.
    fn set_window_scale(&mut self, scale: u32);

    /// Enters or leaves fullscreen.
    fn set_fullscreen(&mut self, enabled: bool);

    /// Enables or disables vertical sync on the presentation surface.
    fn set_vsync(&mut self, enabled: bool);
}

//=========================================================================
// Unit Tests
//=========================================================================
