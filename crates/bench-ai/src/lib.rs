//! Core library for the bench-ai prescriptive shift board.
//!
//! The `workflows::roster` tree holds the classification pipeline (intake
//! guard, fatigue model, metric derivation, policy rule, ranked views);
//! `workflows::toi` imports time-on-ice report exports at the CSV boundary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
