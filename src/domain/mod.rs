//! Domain layer containing the dialogue rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, state machine trait, errors)
//! - `form` - Form fields, question order and collected answers
//! - `encoding` - Category code tables and the feature encoder
//! - `prediction` - Feature vector assembly per predictor
//! - `catalog` - Government scheme tree and its navigator
//! - `dialogue` - Conversation states, session and reply text

pub mod catalog;
pub mod dialogue;
pub mod encoding;
pub mod form;
pub mod foundation;
pub mod prediction;
