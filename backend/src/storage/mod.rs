//! # Storage Module
//!
//! Holds live session state. Nothing is written to disk: a vending session
//! only lives as long as the UI that opened it.

pub mod session_store;

pub use session_store::*;
