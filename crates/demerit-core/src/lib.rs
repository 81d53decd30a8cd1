//! Core types and trait definitions for the demerit record system.
//!
//! This crate is deliberately free of HTTP and password-handling
//! dependencies. All other crates depend on it; it depends on nothing
//! proprietary.

pub mod error;
pub mod identity;
pub mod record;
pub mod session;
pub mod store;
pub mod view;

pub use error::{Error, Result};
