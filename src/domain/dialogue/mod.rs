//! Dialogue domain module.
//!
//! The conversation state machine, the per-conversation session it
//! drives, and the text the assistant replies with.

pub mod messages;
mod session;
mod state;

pub use session::{FormProgress, Session};
pub use state::DialogueState;
