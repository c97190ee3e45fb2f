//! Clients for hosted services.

pub mod identity;
