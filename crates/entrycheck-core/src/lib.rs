//! entrycheck-core — Entry-requirement rules and eligibility evaluation.
//!
//! This crate defines the qualification and grade model, the data-driven
//! rule table, the evaluator, and the state of the single-screen checker
//! that the entrycheck CLI builds on.

pub mod engine;
pub mod error;
pub mod grade;
pub mod model;
pub mod parser;
pub mod report;
pub mod rules;
pub mod session;
