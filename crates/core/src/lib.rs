//! Core business logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and the credit-limit
//! arithmetic live here.
//!
//! # Modules
//!
//! - `ledger` - Transaction kinds, submission validation, limit arithmetic

pub mod ledger;
