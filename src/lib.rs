//! tagbox - character-limited text box engine
//!
//! This crate provides the core types and logic for a compose box that
//! highlights hashtags, mentions, cashtags and URLs and keeps text past the
//! character limit as marked overflow, implementing the Elm Architecture
//! pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod entities;
pub mod messages;
pub mod model;
pub mod overflow;
pub mod render;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::TextBoxConfig;
pub use controller::{Controller, Host};
pub use entities::{extract, Entity, EntityKind, EntitySpan};
pub use messages::{InputEvent, Msg};
pub use model::{Snapshot, TextBoxModel, ValueMode};
pub use overflow::{decode, encode};
pub use render::{render, Links, Segment};
