//=========================================================================
// Lumen Shell
//
// Main entry point and owner of the presentation-loop state.
//
// Architecture:
// ```text
//     ShellBuilder  ──build(platform)──>  Shell  ──step()──>  caller
//         │                                │
//         ├─ with_title()                  ├─ FrameScheduler (pacing)
//         ├─ with_scale()                  ├─ EventDrain     (events)
//         └─ with_mixer()                  ├─ InputSnapshot  (input)
//                                          └─ AudioOutput    (optional)
// ```
//
// Control flow per iteration: the caller invokes `step`, which paces
// the loop to the target time step and then drains every pending
// platform event into the input snapshot. The caller inspects the
// returned application state, queries `input()`, and pushes a frame
// with `display`. The audio device runs on its own cadence and never
// enters this loop.
//
// Everything hangs off this one owned context: there is no process-wide
// state, so multiple shells (and tests) can coexist.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::audio::{AudioBridge, AudioError, AudioOutput, Mixer};
use crate::core::drain::EventDrain;
use crate::core::input::InputSnapshot;
use crate::core::scheduler::FrameScheduler;
use crate::core::AppState;
use crate::platform::Platform;

//=== ShellError ==========================================================

/// Shell construction errors.
///
/// Setup is the only fallible phase; the steady-state loop is
/// error-free by construction.
#[derive(Debug)]
pub enum ShellError {
    /// Audio device setup failed.
    Audio(AudioError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audio(e) => write!(f, "Audio setup failed: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<AudioError> for ShellError {
    fn from(e: AudioError) -> Self {
        Self::Audio(e)
    }
}

//=== ShellBuilder ========================================================

/// Builder for configuring and constructing a [`Shell`].
///
/// # Default Values
///
/// - **Title**: empty
/// - **Scale**: 2 (window is twice the logical resolution)
/// - **Mixer**: none (no audio device is opened)
///
/// # Examples
///
/// ```no_run
/// # use lumen_shell::{Platform, PlatformEvent, ShellBuilder};
/// # use std::time::Duration;
/// # struct Backend;
/// # impl Platform for Backend {
/// #     fn now_ms(&self) -> u64 { 0 }
/// #     fn delay(&mut self, _: Duration) {}
/// #     fn poll_event(&mut self) -> Option<PlatformEvent> { None }
/// #     fn present(&mut self, _: &[u8], _: usize) {}
/// #     fn set_title(&mut self, _: &str) {}
/// #     fn set_window_scale(&mut self, _: u32) {}
/// #     fn set_fullscreen(&mut self, _: bool) {}
/// #     fn set_vsync(&mut self, _: bool) {}
/// # }
/// let shell = ShellBuilder::new()
///     .with_title("Lumen")
///     .with_scale(3)
///     .build(Backend)?;
/// # Ok::<(), lumen_shell::ShellError>(())
/// ```
pub struct ShellBuilder {
    title: String,
    scale: u32,
    mixer: Option<Box<dyn Mixer>>,
}

impl ShellBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            scale: 2,
            mixer: None,
        }
    }

    /// Sets the initial window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial magnification factor.
    ///
    /// The window is sized to `scale` times the logical resolution and
    /// pointer coordinates are divided by the same factor.
    ///
    /// # Panics
    ///
    /// Panics if `scale == 0`.
    pub fn with_scale(mut self, scale: u32) -> Self {
        assert!(scale > 0, "Scale must be positive");
        self.scale = scale;
        self
    }

    /// Registers the application's sample generator and enables audio.
    ///
    /// Without a mixer no audio device is opened and [`Shell::mute`] is
    /// a no-op.
    pub fn with_mixer(mut self, mixer: impl Mixer + 'static) -> Self {
        self.mixer = Some(Box::new(mixer));
        self
    }

    //--- build() ----------------------------------------------------------

    /// Builds the shell on top of `platform`.
    ///
    /// Opens the audio device if a mixer was registered and applies the
    /// initial window settings.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Audio`] if a mixer was registered but the
    /// audio device could not be opened or started.
    pub fn build<P: Platform>(self, mut platform: P) -> Result<Shell<P>, ShellError> {
        let audio = match self.mixer {
            Some(mixer) => Some(AudioOutput::new(AudioBridge::new(mixer))?),
            None => None,
        };

        platform.set_title(&self.title);
        platform.set_window_scale(self.scale);

        info!(target: "shell", "Shell started (scale {}, audio: {})", self.scale, audio.is_some());

        Ok(Shell {
            platform,
            scheduler: FrameScheduler::new(),
            drain: EventDrain::new(),
            input: InputSnapshot::new(),
            audio,
            scale: self.scale,
        })
    }
}

impl Default for ShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Shell ===============================================================

/// Owned presentation context: frame pacing, input aggregation and the
/// audio device, on top of one platform backend.
///
/// # Concurrency
///
/// The shell lives on the main thread and runs its components strictly
/// sequentially; the only suspension point is the pacing sleep inside
/// [`step`](Shell::step). The audio device drives the registered mixer
/// from its own execution context and shares no state with the input
/// side.
///
/// # Examples
///
/// ```no_run
/// # use lumen_shell::{AppState, Platform, PlatformEvent, ShellBuilder};
/// # use std::time::Duration;
/// # struct Backend;
/// # impl Platform for Backend {
/// #     fn now_ms(&self) -> u64 { 0 }
/// #     fn delay(&mut self, _: Duration) {}
/// #     fn poll_event(&mut self) -> Option<PlatformEvent> { None }
/// #     fn present(&mut self, _: &[u8], _: usize) {}
/// #     fn set_title(&mut self, _: &str) {}
/// #     fn set_window_scale(&mut self, _: u32) {}
/// #     fn set_fullscreen(&mut self, _: bool) {}
/// #     fn set_vsync(&mut self, _: bool) {}
/// # }
/// # let framebuffer = [0u8; 4];
/// let mut shell = ShellBuilder::new().build(Backend)?;
///
/// loop {
///     let (state, dt) = shell.step(1.0 / 60.0);
///     if state == AppState::Closed {
///         break;
///     }
///     if shell.input().is_key_down(lumen_shell::KeyCode::Escape) {
///         break;
///     }
///     // ... simulate with dt, render into the framebuffer ...
///     shell.display(&framebuffer, 4);
/// }
/// shell.shutdown();
/// # Ok::<(), lumen_shell::ShellError>(())
/// ```
pub struct Shell<P: Platform> {
    platform: P,
    scheduler: FrameScheduler,
    drain: EventDrain,
    input: InputSnapshot,
    audio: Option<AudioOutput>,
    scale: u32,
}

impl<P: Platform> Shell<P> {
    //--- Frame Loop -------------------------------------------------------

    /// Runs one loop iteration: paces to `target_step` seconds, drains
    /// all pending platform events, and returns the application state
    /// together with the measured elapsed time.
    ///
    /// The elapsed time is the true wall-clock delta since the previous
    /// call, not the target: simulate with it even though presentation
    /// is paced to the fixed step.
    pub fn step(&mut self, target_step: f64) -> (AppState, f64) {
        let delta = self.scheduler.pace(&mut self.platform, target_step);
        let state = self.drain.run(&mut self.platform, &mut self.input, self.scale);
        (state, delta)
    }

    /// Pushes a frame to the presentation surface.
    ///
    /// `pixels` is the logical framebuffer, `pitch` its row stride in
    /// bytes.
    pub fn display(&mut self, pixels: &[u8], pitch: usize) {
        self.platform.present(pixels, pitch);
    }

    /// Read-only view of the current frame's input snapshot.
    ///
    /// Valid until the next [`step`](Shell::step) overwrites it.
    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    /// Application state as of the last [`step`](Shell::step).
    pub fn state(&self) -> AppState {
        self.drain.state()
    }

    //--- Audio ------------------------------------------------------------

    /// Pauses or resumes audio output without tearing down the device.
    ///
    /// No-op when the shell was built without a mixer.
    pub fn mute(&mut self, muted: bool) {
        if let Some(audio) = &mut self.audio {
            audio.set_muted(muted);
        }
    }

    /// Returns the granted audio sample rate in Hz, or `None` when the
    /// shell was built without a mixer.
    pub fn sample_rate(&self) -> Option<u32> {
        self.audio.as_ref().map(AudioOutput::sample_rate)
    }

    //--- Window Settings --------------------------------------------------

    /// Sets the window title.
    pub fn set_title(&mut self, title: &str) {
        self.platform.set_title(title);
    }

    /// Changes the magnification factor: resizes the window and updates
    /// the pointer-coordinate divisor used by subsequent drains.
    ///
    /// # Panics
    ///
    /// Panics if `scale == 0`.
    pub fn set_scale(&mut self, scale: u32) {
        assert!(scale > 0, "Scale must be positive");
        self.scale = scale;
        self.platform.set_window_scale(scale);
    }

    /// Returns the current magnification factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Enters or leaves fullscreen.
    pub fn set_fullscreen(&mut self, enabled: bool) {
        self.platform.set_fullscreen(enabled);
    }

    /// Enables or disables vertical sync.
    pub fn set_vsync(&mut self, enabled: bool) {
        self.platform.set_vsync(enabled);
    }

    //--- Shutdown ---------------------------------------------------------

    /// Tears the shell down deliberately: stops the audio stream and
    /// releases the platform backend.
    ///
    /// Dropping the shell has the same effect; this entry point exists
    /// so that host applications shut down at a chosen moment rather
    /// than at an implicit scope end.
    pub fn shutdown(mut self) {
        if let Some(mut audio) = self.audio.take() {
            audio.set_muted(true);
        }
        debug!(target: "shell", "Platform backend released");
        info!(target: "shell", "Shell closed");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
