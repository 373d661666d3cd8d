//! Core of the Snyk CLI greybeard: run the scanner, then have a chat model
//! restate its findings.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod preflight;
pub mod render;
pub mod runner;
pub mod transform;
