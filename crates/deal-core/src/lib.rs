//! # deal-core
//!
//! Core types, stage state machine, and error types for Dealflow.
//!
//! This crate provides the foundational types shared across all Dealflow crates:
//! - Entity structs for the pipeline (ventures, funding rounds, stage history)
//! - Pipeline enums, including the `Stage` state machine
//! - `Money` parsing for deal size and valuation strings
//! - Navigation routes for the host shell
//! - Stage transition actions
//! - Cross-cutting error types
//! - CLI response types

pub mod actions;
pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod money;
pub mod responses;
pub mod routes;
