//=========================================================================
// Input Identifiers
//
// Defines the portable identifiers used by the input snapshot's
// membership sets.
//
// This module abstracts away platform-specific input codes (scancodes,
// button indices) into a unified, shell-friendly vocabulary used by the
// event drain and the input snapshot.
//
// Responsibilities:
// - Represent keyboard keys and pointer buttons in a stable, portable way
// - Provide equality and hashing semantics for set membership
//
// Design:
// Identifiers are:
// - Copy-cheap (fieldless enums, except `MouseButton::Other`)
// - Hash-stable for efficient HashSet usage
// - Bounded: the platform maps anything exotic to `Unidentified`/`Other`
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical pointer button identifier.
///
/// Abstracts platform-specific button representations (button indices,
/// native enums) into a stable, portable identifier for the button-down
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Middle button (wheel click).
    Middle,

    /// Secondary button (typically right).
    Right,

    /// First extra button (typically "back").
    X1,

    /// Second extra button (typically "forward").
    X2,

    /// Any other button, carrying the raw platform index.
    Other(u8),
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyA` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY). Characters are delivered through
/// the text buffer instead, never through key identifiers.
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys and navigation cluster
/// - Function keys F1-F12
/// - Modifier keys (left/right variants)
/// - Common special keys (Space, Enter, Escape, etc.)
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Navigation Cluster -----------------------------------------------

    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    //--- Modifier Keys ----------------------------------------------------

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    ///
    /// Used when the platform reports a key that isn't in the enum.
    /// Membership tracking still works; distinct unmapped keys simply
    /// alias to the same identifier.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================
