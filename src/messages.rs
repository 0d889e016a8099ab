//! Message types for the Elm-style architecture
//!
//! All state changes of a text box flow through these message types.

/// A raw input event from the editable field.
///
/// Both variants carry the complete new value: the engine works on
/// whole-string snapshots, never on cursor-relative diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Typed edit; the field's full value after the keystroke
    Typed(String),
    /// Pasted text, which replaces the whole value
    Paste(String),
}

impl InputEvent {
    /// The new value carried by the event
    pub fn value(&self) -> &str {
        match self {
            InputEvent::Typed(v) | InputEvent::Paste(v) => v,
        }
    }

    pub fn is_paste(&self) -> bool {
        matches!(self, InputEvent::Paste(_))
    }
}

/// Text box messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited or pasted
    Input(InputEvent),
    /// Value supplied by the host (programmatic set, or the value an
    /// externally-managed host settled on)
    SetValue(String),
    /// Submission intent (e.g. Ctrl+Enter)
    Submit,
    /// Programmatic clear
    Clear,
}

impl Msg {
    pub fn typed(value: impl Into<String>) -> Self {
        Msg::Input(InputEvent::Typed(value.into()))
    }

    pub fn paste(value: impl Into<String>) -> Self {
        Msg::Input(InputEvent::Paste(value.into()))
    }
}
