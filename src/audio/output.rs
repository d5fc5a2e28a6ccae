//=========================================================================
// Audio Output
//=========================================================================
//
// Opens the platform audio device through cpal and registers the audio
// bridge as its data callback.
//
// Device negotiation mirrors the shell's informational policy: 44.1 kHz
// stereo f32 with 1024-frame buffers is requested, and whatever the
// device actually grants is accepted and logged, never treated as an
// error. Only the sample format is non-negotiable (the bridge contract
// is fixed-width f32).
//
// The stream starts unpaused and keeps running for the lifetime of this
// struct; `set_muted` pauses and resumes it without tearing the device
// down.
//
//=========================================================================

//=== External Crates =====================================================

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleFormat, SampleRate, StreamConfig};
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::AudioBridge;

//=== Constants ===========================================================

/// Sample rate requested from the device, in Hz.
pub const REQUESTED_SAMPLE_RATE: u32 = 44_100;

/// Interleaved channel count (stereo).
pub const CHANNEL_COUNT: u16 = 2;

/// Device buffer size requested, in frames.
pub const BUFFER_FRAMES: u32 = 1024;

//=== AudioError ==========================================================

/// Audio device setup errors.
///
/// These only surface from [`Shell`](crate::Shell) construction; once
/// the stream is running there is no recoverable error on the audio
/// path (runtime stream faults are logged by the error callback).
#[derive(Debug)]
pub enum AudioError {
    /// No output device is available on the default host.
    NoDevice,

    /// The device refused to enumerate or report its configurations.
    Config(String),

    /// The device's native sample format is not 32-bit float.
    UnsupportedFormat(SampleFormat),

    /// Stream construction failed.
    Stream(cpal::BuildStreamError),

    /// The freshly built stream refused to start.
    Playback(cpal::PlayStreamError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDevice => write!(f, "No audio output device available"),
            Self::Config(e) => write!(f, "Audio device configuration failed: {}", e),
            Self::UnsupportedFormat(fmt) => {
                write!(f, "Audio device format {:?} is not f32", fmt)
            }
            Self::Stream(e) => write!(f, "Audio stream creation failed: {}", e),
            Self::Playback(e) => write!(f, "Audio stream failed to start: {}", e),
        }
    }
}

impl std::error::Error for AudioError {}

//=== AudioOutput =========================================================

/// Owns the cpal stream driving the audio bridge.
///
/// Not `Send`: like the rest of the shell, this lives on the main
/// thread. The bridge itself moves into the stream callback and runs on
/// the device's own execution context.
pub(crate) struct AudioOutput {
    stream: cpal::Stream,
    sample_rate: u32,
    muted: bool,
}

impl AudioOutput {
    //--- Construction -----------------------------------------------------

    /// Opens the default output device and starts streaming through
    /// `bridge`.
    pub fn new(mut bridge: AudioBridge) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let (sample_rate, buffer_size) = Self::negotiate(&device)?;
        if sample_rate != REQUESTED_SAMPLE_RATE {
            debug!(target: "audio", "Device samplerate changed to {} Hz", sample_rate);
        }

        let config = StreamConfig {
            channels: CHANNEL_COUNT,
            sample_rate: SampleRate(sample_rate),
            buffer_size,
        };

        // The device callback hands over raw bytes deliberately: the
        // bridge owns the byte-to-sample conversion contract.
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    bridge.on_request(bytemuck::cast_slice_mut(data));
                },
                |err| error!(target: "audio", "Stream error: {}", err),
                None,
            )
            .map_err(AudioError::Stream)?;

        stream.play().map_err(AudioError::Playback)?;
        info!(target: "audio", "Audio device opened ({} Hz, {} ch)", sample_rate, CHANNEL_COUNT);

        Ok(Self {
            stream,
            sample_rate,
            muted: false,
        })
    }

    /// Picks the requested rate and buffer size when the device supports
    /// them in stereo f32, otherwise falls back to the device's defaults.
    ///
    /// Everything here is a request, not a demand: a different granted
    /// rate or buffer size is accepted and logged. Only a non-f32 device
    /// format is fatal.
    fn negotiate(device: &cpal::Device) -> Result<(u32, BufferSize), AudioError> {
        let ranges = device
            .supported_output_configs()
            .map_err(|e| AudioError::Config(e.to_string()))?;

        let mut matching = ranges.filter(|range| {
            range.sample_format() == SampleFormat::F32
                && range.channels() == CHANNEL_COUNT
                && range.min_sample_rate().0 <= REQUESTED_SAMPLE_RATE
                && REQUESTED_SAMPLE_RATE <= range.max_sample_rate().0
        });

        if let Some(range) = matching.next() {
            let buffer_size = match range.buffer_size() {
                cpal::SupportedBufferSize::Range { min, max }
                    if *min <= BUFFER_FRAMES && BUFFER_FRAMES <= *max =>
                {
                    BufferSize::Fixed(BUFFER_FRAMES)
                }
                _ => {
                    debug!(target: "audio", "Fixed {}-frame buffer refused, using device default", BUFFER_FRAMES);
                    BufferSize::Default
                }
            };
            return Ok((REQUESTED_SAMPLE_RATE, buffer_size));
        }

        let default = device
            .default_output_config()
            .map_err(|e| AudioError::Config(e.to_string()))?;
        if default.sample_format() != SampleFormat::F32 {
            return Err(AudioError::UnsupportedFormat(default.sample_format()));
        }

        Ok((default.sample_rate().0, BufferSize::Default))
    }

    //--- Playback Control -------------------------------------------------

    /// Pauses or resumes output without tearing down the device.
    ///
    /// Redundant calls are no-ops. Backend refusals are logged, not
    /// surfaced: mute is best-effort by contract.
    pub fn set_muted(&mut self, muted: bool) {
        if muted == self.muted {
            return;
        }

        let result = if muted {
            self.stream.pause().map_err(|e| e.to_string())
        } else {
            self.stream.play().map_err(|e| e.to_string())
        };

        match result {
            Ok(()) => self.muted = muted,
            Err(e) => warn!(target: "audio", "Mute({}) refused by backend: {}", muted, e),
        }
    }

    /// Returns the granted device sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
