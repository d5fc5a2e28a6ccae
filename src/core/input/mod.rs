//=========================================================================
// Input Subsystem
//
// Per-frame input aggregation for the shell.
//
// The event drain writes into an `InputSnapshot` once per frame; the
// application reads it back through read-only accessors on the shell.
// There is no event queue at this level: by the time application code
// runs, all of the frame's events have already been folded into the
// snapshot.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod snapshot;

//=== Public Exports ======================================================

pub use event::{KeyCode, MouseButton};
pub use snapshot::{InputSnapshot, TEXT_CAPACITY};
