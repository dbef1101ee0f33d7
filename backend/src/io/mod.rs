//! # IO Module
//!
//! Adapter layer between the presentation layer and the domain. Translates
//! HTTP requests into session operations and session state into JSON views;
//! holds no business rules of its own.

pub mod rest;

pub use rest::*;
