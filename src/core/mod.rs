//=========================================================================
// Shell Core
//
// Frame-by-frame machinery behind the shell facade.
//
// Responsibilities:
// - Pace the main loop to a fixed time step (`scheduler`)
// - Fold pending platform events into per-frame input state (`drain`)
// - Aggregate input with previous-frame deltas (`input`)
//
// Notes:
// Everything in this module runs strictly sequentially on the main
// thread; the only suspension point is the scheduler's pacing sleep.
// The audio path lives in `crate::audio` and never touches this state.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod input;

pub(crate) mod drain;
pub(crate) mod scheduler;

//=== AppState ============================================================

/// Application lifecycle state, reduced from platform events once per
/// frame.
///
/// Read by the caller after every [`step`](crate::Shell::step) to decide
/// whether to continue looping. `Paused` and `Opened` may oscillate as
/// the application moves between foreground and background; `Closed` is
/// terminal for the loop's purposes (no event transitions out of it
/// short of a process restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Running in the foreground.
    Opened,

    /// In the background; the caller may skip simulation and display.
    Paused,

    /// Quit requested; the caller should stop calling `step`.
    Closed,
}

//=========================================================================
// Unit Tests
//=========================================================================
