//! `mailstart`: the onboarding "request permissions" screen of a
//! terminal email client.
//!
//! The screen asks for two optional capabilities (contacts access for
//! recipient completion, desktop notifications for new mail) and records
//! the answers in a consent ledger. Rendering is a pure function of an
//! immutable state snapshot; user actions flow back as intents through a
//! reducer. See the `ui` module for the architecture.

pub mod config;
pub mod logging;
pub mod permissions;
pub mod strings;
pub mod ui;
