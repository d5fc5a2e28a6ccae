//=========================================================================
// Input Snapshot
//=========================================================================
//
// Per-frame aggregate of pointer, scroll, key, button and text-entry
// state, with delta tracking against the previous frame.
//
// Architecture:
//   PlatformEvent → EventDrain → InputSnapshot (this module) → query
//
// Frame lifecycle: begin_frame() → apply events → end_frame() → query
//
// The snapshot is a pure data container: the only arithmetic it performs
// is the magnification divide on pointer writes and the delta subtraction
// at frame end. It is owned exclusively by the main thread; callers only
// ever see `&InputSnapshot`.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton};

//=== Constants ===========================================================

/// Capacity of the per-frame text-entry buffer, in bytes.
///
/// Text payloads longer than this are truncated; shorter payloads are
/// zero-padded. One frame's buffer holds at most one payload (the most
/// recent text event wins).
pub const TEXT_CAPACITY: usize = 32;

//=== InputSnapshot =======================================================

/// Aggregated input state for the current frame.
///
/// Positions are stored in logical (unscaled) coordinates: the pointer
/// write applies the magnification divide, so queries never need to know
/// the window scale. Deltas are relative to the positions captured at
/// the start of the current frame's drain, i.e. the previous frame's end
/// positions.
#[derive(Debug)]
pub struct InputSnapshot {
    //--- Persistent State (survives frame boundary) ----------------------
    pointer: (i32, i32),
    scroll: (i32, i32),
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,

    //--- Frame Deltas (recomputed every frame) ---------------------------
    pointer_delta: (i32, i32),
    scroll_delta: (i32, i32),

    //--- Frame-Local State (reset every frame) ---------------------------
    text: [u8; TEXT_CAPACITY],

    //--- Delta Baselines (captured at begin_frame) -----------------------
    pointer_baseline: (i32, i32),
    scroll_baseline: (i32, i32),
}

impl InputSnapshot {
    /// Creates an empty snapshot (pointer at origin, no keys or buttons
    /// down, zeroed text buffer).
    pub fn new() -> Self {
        Self {
            pointer: (0, 0),
            scroll: (0, 0),
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            pointer_delta: (0, 0),
            scroll_delta: (0, 0),
            text: [0; TEXT_CAPACITY],
            pointer_baseline: (0, 0),
            scroll_baseline: (0, 0),
        }
    }

    //--- Frame Lifecycle --------------------------------------------------

    /// Captures the delta baselines and clears the text buffer.
    ///
    /// Called once at the start of every drain, before any event of the
    /// frame is applied. Key/button membership is deliberately NOT
    /// touched: held keys stay held across frames.
    pub(crate) fn begin_frame(&mut self) {
        self.pointer_baseline = self.pointer;
        self.scroll_baseline = self.scroll;
        self.text = [0; TEXT_CAPACITY];
    }

    /// Computes the frame deltas as `current - baseline`.
    ///
    /// Called once at the end of every drain, after the last event of
    /// the frame has been applied.
    pub(crate) fn end_frame(&mut self) {
        self.pointer_delta = (
            self.pointer.0 - self.pointer_baseline.0,
            self.pointer.1 - self.pointer_baseline.1,
        );
        self.scroll_delta = (
            self.scroll.0 - self.scroll_baseline.0,
            self.scroll.1 - self.scroll_baseline.1,
        );
    }

    //--- Event Application ------------------------------------------------

    /// Marks a key as held.
    pub(crate) fn press_key(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    /// Clears a key from the held set. Spurious releases are harmless.
    pub(crate) fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Marks a pointer button as held.
    pub(crate) fn press_button(&mut self, button: MouseButton) {
        self.buttons_down.insert(button);
    }

    /// Clears a pointer button from the held set.
    pub(crate) fn release_button(&mut self, button: MouseButton) {
        self.buttons_down.remove(&button);
    }

    /// Updates the pointer position from raw window coordinates.
    ///
    /// The magnification divide happens here, at write time, so the
    /// stored position is always already in logical coordinate space.
    /// `scale` must be at least 1 (enforced by the shell builder).
    pub(crate) fn set_pointer(&mut self, raw_x: i32, raw_y: i32, scale: u32) {
        let scale = scale as i32;
        self.pointer = (raw_x / scale, raw_y / scale);
    }

    /// Updates the scroll position (absolute, not accumulated).
    pub(crate) fn set_scroll(&mut self, x: i32, y: i32) {
        self.scroll = (x, y);
    }

    /// Overwrites the text buffer with `payload`, truncated to
    /// [`TEXT_CAPACITY`] bytes and zero-padded.
    pub(crate) fn set_text(&mut self, payload: &[u8]) {
        let len = payload.len().min(TEXT_CAPACITY);
        self.text = [0; TEXT_CAPACITY];
        self.text[..len].copy_from_slice(&payload[..len]);
    }

    //=====================================================================
    // Query API - Pointer & Scroll
    //=====================================================================

    /// Returns the pointer position in logical coordinates.
    pub fn pointer_position(&self) -> (i32, i32) {
        self.pointer
    }

    /// Returns the pointer movement since the previous frame
    /// (`(0, 0)` if no movement).
    pub fn pointer_delta(&self) -> (i32, i32) {
        self.pointer_delta
    }

    /// Returns the scroll position as last reported by the platform.
    pub fn scroll_position(&self) -> (i32, i32) {
        self.scroll
    }

    /// Returns the scroll movement since the previous frame.
    pub fn scroll_delta(&self) -> (i32, i32) {
        self.scroll_delta
    }

    //=====================================================================
    // Query API - Keys & Buttons
    //=====================================================================

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` while the pointer button is held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    /// Returns an iterator over all pointer buttons currently held.
    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.buttons_down.iter()
    }

    //=====================================================================
    // Query API - Text Entry
    //=====================================================================

    /// Returns this frame's raw text buffer (zeroed when no text event
    /// arrived this frame).
    pub fn text(&self) -> &[u8; TEXT_CAPACITY] {
        &self.text
    }

    /// Returns this frame's text payload as a string slice, up to the
    /// first NUL byte. Empty when no text event arrived this frame or
    /// when truncation split a multi-byte character.
    pub fn text_str(&self) -> &str {
        let len = self.text.iter().position(|&b| b == 0).unwrap_or(TEXT_CAPACITY);
        std::str::from_utf8(&self.text[..len]).unwrap_or("")
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
