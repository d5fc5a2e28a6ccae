//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use lumen_shell::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Shell facade
pub use crate::shell::{Shell, ShellBuilder, ShellError};

// Application lifecycle
pub use crate::core::AppState;

// Input snapshot
pub use crate::core::input::{InputSnapshot, KeyCode, MouseButton, TEXT_CAPACITY};

// Platform seam
pub use crate::platform::{Platform, PlatformEvent};

// Audio bridge
pub use crate::audio::{AudioBridge, AudioError, Mixer, SAMPLE_WIDTH};
