//! Application layer - Orchestrates the domain through the ports.
//!
//! - `DialogueController` - Runs one conversation turn by turn
//! - `PredictionGateway` - Builds feature vectors and calls the predictors
//! - `FlowError` - Recoverable failures surfaced to the user as notices

mod dialogue_controller;
mod errors;
mod prediction_gateway;

pub use dialogue_controller::{DialogueController, DialogueDependencies};
pub use errors::FlowError;
pub use prediction_gateway::PredictionGateway;
