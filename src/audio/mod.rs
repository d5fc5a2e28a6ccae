//=========================================================================
// Audio Bridge
//
// Callback boundary between the pull-based audio device and the
// application's sample generator.
//
// Architecture:
// ```text
//  Audio device context:             Application:
//  ┌───────────────────────┐        ┌──────────────────┐
//  │  device needs data    │        │  impl Mixer      │
//  │   ↓                   │        │                  │
//  │  AudioBridge          │───────►│  mix(&mut [f32]) │
//  │   ├─ bytes → samples  │        │                  │
//  │   └─ delegates        │        └──────────────────┘
//  └───────────────────────┘
// ```
//
// Key Design Decisions:
// - **Registered once, driven externally**: the mixer moves into the
//   bridge at setup; afterwards the device's own execution context
//   invokes it on its own cadence, fully decoupled from frame pacing.
// - **No state across invocations**: each request stands alone. The
//   bridge mutates nothing but the buffer it is handed and must not
//   retain a reference to it past the call.
// - **No failure channel**: this runs in a hard-real-time context. An
//   underfilled buffer degrades audibly, never signals.
//
//=========================================================================

//=== Submodules ==========================================================

mod output;

//=== External Crates =====================================================

use log::error;

//=== Public Exports ======================================================

pub use output::{AudioError, BUFFER_FRAMES, CHANNEL_COUNT, REQUESTED_SAMPLE_RATE};

pub(crate) use output::AudioOutput;

//=== Constants ===========================================================

/// Byte width of one sample. The device format is fixed-width 32-bit
/// float, interleaved.
pub const SAMPLE_WIDTH: usize = std::mem::size_of::<f32>();

//=== Mixer ===============================================================

/// Application-supplied sample generator.
///
/// `mix` must write exactly `out.len()` interleaved samples. It is
/// invoked from the audio device's execution context, concurrently with
/// the main loop, so implementations must be `Send` and should be
/// non-blocking and allocation-free: a slow mixer starves the device
/// and the result is an audible glitch, not an error.
pub trait Mixer: Send {
    /// Fills `out` with interleaved samples.
    fn mix(&mut self, out: &mut [f32]);
}

/// Closures are mixers. Convenient for tests and small applications.
impl<F: FnMut(&mut [f32]) + Send> Mixer for F {
    fn mix(&mut self, out: &mut [f32]) {
        self(out)
    }
}

//=== AudioBridge =========================================================

/// Adapts the device's raw byte buffer to the mixer's sample slice.
///
/// Owns the mixer for the lifetime of the stream; holds no other state.
pub struct AudioBridge {
    mixer: Box<dyn Mixer>,
}

impl AudioBridge {
    /// Wraps a mixer for registration with the audio device.
    pub fn new(mixer: Box<dyn Mixer>) -> Self {
        Self { mixer }
    }

    //--- on_request() -----------------------------------------------------

    /// Entry point invoked by the device when it needs more data.
    ///
    /// Converts the byte length into a sample count (truncating any
    /// ragged tail) and delegates entirely to the mixer, which writes
    /// exactly that many samples.
    pub fn on_request(&mut self, stream: &mut [u8]) {
        let sample_count = stream.len() / SAMPLE_WIDTH;
        let bytes = &mut stream[..sample_count * SAMPLE_WIDTH];

        match bytemuck::try_cast_slice_mut::<u8, f32>(bytes) {
            Ok(samples) => self.mixer.mix(samples),
            Err(e) => {
                // Contract violation by the device layer. No failure
                // channel here, so the buffer stays as-is (silence or
                // stale data) and we log from the audio context only
                // because something is already badly wrong.
                error!(target: "audio", "Unusable device buffer: {}", e);
            }
        }
    }

    /// Sample-typed entry point for devices that already hand out `f32`
    /// buffers. Same contract as [`on_request`](Self::on_request).
    pub fn render(&mut self, samples: &mut [f32]) {
        self.mixer.mix(samples);
    }
}

impl std::fmt::Debug for AudioBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioBridge").finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
