//! # aer-core
//!
//! Core types for access exception review.
//!
//! This crate provides the foundational types shared across all AER crates:
//! - Entity structs for reviewable records, org-chart nodes and status events
//! - Status category and severity enums
//! - Row contracts that turn loosely typed table rows into entities
//! - Row validation errors
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod rows;
