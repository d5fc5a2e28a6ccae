//=========================================================================
// Lumen Shell — Library Root
//
// This crate defines the public API surface of the Lumen presentation
// shell: the real-time heartbeat of a minimalist pixel-buffer
// application.
//
// Responsibilities:
// - Pace the main loop to a fixed time step (`Shell::step`)
// - Convert the platform's polled event stream into a stable per-frame
//   input snapshot with previous-frame deltas
// - Bridge the pull-based audio device to an application-supplied
//   sample generator
//
// Typical usage:
// ```no_run
// use lumen_shell::{AppState, ShellBuilder};
// # use lumen_shell::{Platform, PlatformEvent};
// # use std::time::Duration;
// # struct Backend;
// # impl Platform for Backend {
// #     fn now_ms(&self) -> u64 { 0 }
// #     fn delay(&mut self, _: Duration) {}
// #     fn poll_event(&mut self) -> Option<PlatformEvent> { None }
// #     fn present(&mut self, _: &[u8], _: usize) {}
// #     fn set_title(&mut self, _: &str) {}
// #     fn set_window_scale(&mut self, _: u32) {}
// #     fn set_fullscreen(&mut self, _: bool) {}
// #     fn set_vsync(&mut self, _: bool) {}
// # }
//
// fn main() -> Result<(), lumen_shell::ShellError> {
//     let mut shell = ShellBuilder::new().with_title("Lumen").build(Backend)?;
//     while shell.step(1.0 / 60.0).0 != AppState::Closed {
//         // simulate, render, shell.display(...)
//     }
//     shell.shutdown();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the frame-by-frame machinery (input aggregation,
// pacing, event reduction). `platform` defines the seam a windowing
// backend implements. `audio` holds the mixer contract and the device
// bridge. All three are exposed for backend authors and power users;
// normal application code mostly talks to the top-level `Shell` facade.
//
pub mod audio;
pub mod core;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `shell` defines the facade and its builder.
//
mod shell;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the working vocabulary at the crate root so applications
// can `use lumen_shell::{Shell, AppState, KeyCode}` without knowing the
// internal module structure.
//
pub use crate::core::input::{InputSnapshot, KeyCode, MouseButton, TEXT_CAPACITY};
pub use crate::core::AppState;
pub use crate::platform::{Platform, PlatformEvent};
pub use crate::shell::{Shell, ShellBuilder, ShellError};
