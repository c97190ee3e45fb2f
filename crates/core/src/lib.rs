//! Tamarind Core - Shared types library.
//!
//! This crate provides common types used across all Tamarind components:
//! - `storefront` - Client-side storefront logic (cart, data access, identity)
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
