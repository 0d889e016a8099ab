//! Update function for the Elm-style architecture
//!
//! All state transformations of a text box flow through [`update`]. The
//! value mode picked at construction decides whether edits are applied
//! directly or turned into change requests for the host.

use crate::commands::Cmd;
use crate::messages::{InputEvent, Msg};
use crate::model::{TextBoxModel, ValueMode};

#[cfg(debug_assertions)]
use crate::tracing::StateSummary;
#[cfg(debug_assertions)]
use tracing::{span, Level};
use tracing::debug;

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation and checks
/// model invariants after every message.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut TextBoxModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut TextBoxModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Input(event) => update_input(model, event),
        Msg::SetValue(value) => {
            let synced = model.sync(&value);
            Some(Cmd::Emit(model.apply(synced).clone()))
        }
        Msg::Submit => update_submit(model),
        Msg::Clear => {
            let snapshot = model.reset().clone();
            match model.mode() {
                ValueMode::SelfManaged => Some(Cmd::Emit(snapshot)),
                ValueMode::External => Some(Cmd::batch(vec![
                    Cmd::RequestChange(String::new()),
                    Cmd::Emit(snapshot),
                ])),
            }
        }
    }
}

fn update_input(model: &mut TextBoxModel, event: InputEvent) -> Option<Cmd> {
    let is_paste = event.is_paste();
    let synced = model.sync(event.value());

    debug!(
        paste = is_paste,
        overflow = synced.overflow.is_some(),
        "input synced"
    );

    match model.mode() {
        ValueMode::SelfManaged => Some(Cmd::Emit(model.apply(synced).clone())),
        // The host decides whether the value lands; it comes back as SetValue
        ValueMode::External => Some(Cmd::RequestChange(synced.visible)),
    }
}

fn update_submit(model: &mut TextBoxModel) -> Option<Cmd> {
    if !model.can_submit() {
        debug!(
            chars_left = model.snapshot().chars_left,
            "submit ignored by gate"
        );
        return None;
    }

    let submitted = model.snapshot().clone();
    match model.mode() {
        ValueMode::SelfManaged => {
            let cleared = model.reset().clone();
            Some(Cmd::batch(vec![Cmd::Submit(submitted), Cmd::Emit(cleared)]))
        }
        ValueMode::External => Some(Cmd::batch(vec![
            Cmd::Submit(submitted),
            Cmd::RequestChange(String::new()),
        ])),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut TextBoxModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSummary::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = StateSummary::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, "state changed");
    }

    model.assert_invariants();
    result
}

/// Get a display name for a message type
///
/// Text payloads are reduced to their char count to keep logs short.
/// Example outputs:
/// - `Input::Typed(12 chars)`
/// - `SetValue(0 chars)`
/// - `Submit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::util::char_len;

    match msg {
        Msg::Input(InputEvent::Typed(v)) => format!("Input::Typed({} chars)", char_len(v)),
        Msg::Input(InputEvent::Paste(v)) => format!("Input::Paste({} chars)", char_len(v)),
        Msg::SetValue(v) => format!("SetValue({} chars)", char_len(v)),
        Msg::Submit => "Submit".to_string(),
        Msg::Clear => "Clear".to_string(),
    }
}
