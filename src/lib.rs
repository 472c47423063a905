//! Agro Aid - Conversational farming assistant
//!
//! A menu-driven dialogue that collects soil and weather readings to
//! recommend a crop or a fertilizer from pre-trained models, and lets the
//! farmer browse government support schemes by department.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
