//! Tamarind Storefront - client-side storefront logic.
//!
//! This crate holds everything the storefront needs below the presentation
//! layer. The hosting front end owns rendering; it consumes this crate for:
//!
//! - [`cart`] - The cart store: an in-memory state container mirrored to a
//!   durable client-side storage slot. The only stateful subsystem.
//! - [`db`] - Thin asynchronous wrappers over the hosted document store
//!   (products, users, posts, shops).
//! - [`services::identity`] - Client for the hosted identity provider
//!   (registration, login, OTP, SSO, password reset, email verification).
//!
//! # Architecture
//!
//! All durable state lives in the hosted backend or in the local cart
//! storage slot; there is no database here. Remote failures are normalized
//! at the wrapper boundary and surfaced as fixed, user-presentable messages.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod state;
