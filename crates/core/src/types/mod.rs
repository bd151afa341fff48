//! Core types for FarmConnect.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod email;
pub mod id;
pub mod price;
pub mod transaction;
pub mod wei;

pub use address::{Address, AddressError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Currency, Price};
pub use transaction::{TransactionRequest, TxHash};
pub use wei::{AmountError, Wei};
