//! Input event types delivered to controls by the host event loop

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// A key press with no modifiers held
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// A key release with no modifiers held
    pub fn released(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
        }
    }

    /// Attach modifier state
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a key press
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Key codes relevant to form controls
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing and commit
    Enter,
    Escape,
    Tab,
    Space,
    Backspace,
    Delete,

    // Modifier keys (for tracking state)
    Shift,
    Ctrl,
    Alt,
    Meta,

    /// Printable character input
    Char(char),

    /// Unknown key
    Unknown,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a key code
    ///
    /// Single-character names become [`Key::Char`]; unrecognized names map
    /// to [`Key::Unknown`].
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            " " | "Spacebar" => Key::Space,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Shift" => Key::Shift,
            "Control" => Key::Ctrl,
            "Alt" => Key::Alt,
            "Meta" => Key::Meta,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Pointer buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Middle button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Focus Events
// ============================================================================

/// Focus change on a control's focus target
///
/// Controls forward these to host callbacks unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusEvent {
    /// The target gained focus
    Focus,
    /// The target lost focus
    Blur,
}
