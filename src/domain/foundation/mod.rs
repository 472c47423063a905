//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait and error types
//! that the rest of the Agro Aid domain builds on.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::ConversationId;
pub use state_machine::StateMachine;
