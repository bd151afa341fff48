//! FarmConnect Core - Shared types library.
//!
//! This crate provides the value types used by the storefront controller
//! and its tests:
//! - typed catalog ids
//! - ether prices and their wei conversion
//! - wallet addresses, transaction requests and hashes
//! - the login email
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no wallet
//! bindings, no rendering. This keeps it lightweight and allows it to be
//! used anywhere, including `wasm32` builds.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, amounts, addresses and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
