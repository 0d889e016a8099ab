//! Command types for the Elm-style architecture
//!
//! Commands are the side effects the host performs after an update. The
//! engine itself never dispatches anything.

use crate::model::Snapshot;

/// Side effects requested by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Hand a fresh snapshot to the host
    Emit(Snapshot),
    /// Ask an externally-managed host to adopt a new value
    RequestChange(String),
    /// Submission gate passed; the host decides what to do with the content
    Submit(Snapshot),
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }

    /// The last snapshot this command emits, if any
    pub fn emitted(&self) -> Option<&Snapshot> {
        match self {
            Cmd::Emit(snapshot) => Some(snapshot),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::emitted),
            _ => None,
        }
    }

    /// Check if this command submits content
    pub fn is_submit(&self) -> bool {
        match self {
            Cmd::Submit(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_submit),
            _ => false,
        }
    }
}
