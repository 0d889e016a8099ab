//! Controller - runtime for one text box
//!
//! Owns a [`TextBoxModel`] and the [`Host`] that consumes its output. Every
//! operation runs `update` and then processes the resulting commands by
//! calling back into the host. The host is owned by the controller, so a
//! callback cannot re-enter the controller while it is dispatching.

use crate::commands::Cmd;
use crate::config::TextBoxConfig;
use crate::messages::{InputEvent, Msg};
use crate::model::{Snapshot, TextBoxModel};
use crate::update::update;

/// Receiver of controller output
pub trait Host {
    /// Called with a ready-to-use snapshot after every state change
    fn on_snapshot(&mut self, snapshot: &Snapshot);

    /// Externally-managed mode: the controller would like the value to be
    /// `value`. Feed the value that is actually adopted back through
    /// [`Controller::set_value`].
    fn on_change_requested(&mut self, value: &str) {
        let _ = value;
    }

    /// Submission gate passed; `snapshot` is the content being submitted
    fn on_submit(&mut self, snapshot: &Snapshot) {
        let _ = snapshot;
    }
}

/// Text box runtime
#[derive(Debug)]
pub struct Controller<H: Host> {
    model: TextBoxModel,
    host: H,
}

impl<H: Host> Controller<H> {
    pub fn new(config: TextBoxConfig, host: H) -> Self {
        Self {
            model: TextBoxModel::new(config),
            host,
        }
    }

    /// Typed edit or paste; either way the event value replaces the text
    pub fn on_input(&mut self, event: InputEvent) {
        self.send(Msg::Input(event));
    }

    /// Value supplied by the host
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.send(Msg::SetValue(value.into()));
    }

    /// Submission intent. Returns true if the gate passed and the host was
    /// asked to submit.
    pub fn on_submit_trigger(&mut self) -> bool {
        self.send(Msg::Submit)
    }

    /// Reset to an empty field
    pub fn clear(&mut self) {
        self.send(Msg::Clear);
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.model.snapshot()
    }

    pub fn text(&self) -> &str {
        self.model.raw_text()
    }

    pub fn encoded_text(&self) -> &str {
        self.model.encoded_text()
    }

    pub fn model(&self) -> &TextBoxModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one message through `update`, then process its command.
    /// Returns true if the command included a submission.
    fn send(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let submitted = cmd.is_submit();
                self.dispatch(cmd);
                submitted
            }
            None => false,
        }
    }

    fn dispatch(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Emit(snapshot) => self.host.on_snapshot(&snapshot),
            Cmd::RequestChange(value) => self.host.on_change_requested(&value),
            Cmd::Submit(snapshot) => self.host.on_submit(&snapshot),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.dispatch(cmd);
                }
            }
        }
    }
}

impl<H: Host + Default> Default for Controller<H> {
    fn default() -> Self {
        Self::new(TextBoxConfig::default(), H::default())
    }
}
