//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tagbox::model::ValueMode;
use tagbox::{Controller, Host, Snapshot, TextBoxConfig};

/// Host that records every callback in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub snapshots: Vec<Snapshot>,
    pub requests: Vec<String>,
    pub submits: Vec<Snapshot>,
}

impl RecordingHost {
    /// Most recent snapshot handed to the host
    pub fn last_snapshot(&self) -> &Snapshot {
        self.snapshots.last().expect("no snapshot emitted yet")
    }

    pub fn last_request(&self) -> Option<&str> {
        self.requests.last().map(String::as_str)
    }
}

impl Host for RecordingHost {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_change_requested(&mut self, value: &str) {
        self.requests.push(value.to_string());
    }

    fn on_submit(&mut self, snapshot: &Snapshot) {
        self.submits.push(snapshot.clone());
    }
}

/// Self-managed controller with the given limit
pub fn test_controller(limit: usize) -> Controller<RecordingHost> {
    Controller::new(TextBoxConfig::with_limit(limit), RecordingHost::default())
}

/// Externally-managed controller with the given limit
pub fn external_controller(limit: usize) -> Controller<RecordingHost> {
    let config = TextBoxConfig::with_limit(limit).mode(ValueMode::External);
    Controller::new(config, RecordingHost::default())
}

/// Type `text` one char at a time, each event carrying the full value so far
pub fn type_chars(controller: &mut Controller<RecordingHost>, text: &str) {
    let mut value = controller.text().to_string();
    for ch in text.chars() {
        value.push(ch);
        controller.on_input(tagbox::InputEvent::Typed(value.clone()));
        value = controller.text().to_string();
    }
}

/// Host that accepts every change request, like a form field bound to state
pub fn echo_requests(controller: &mut Controller<RecordingHost>) {
    let pending: Vec<String> = controller.host_mut().requests.drain(..).collect();
    for value in pending {
        controller.set_value(value);
    }
}
