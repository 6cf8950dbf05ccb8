//! # Controller
//!
//! - `actions`: the plan a reconciliation pass produces
//! - `reconciler`: planning (matching, role classification, client and secret actions)
//! - `runner`: executing a plan through an [`runner::ActionRunner`]

pub mod actions;
pub mod reconciler;
pub mod runner;
