//! # Domain Module
//!
//! Business rules of the vending machine, independent of any UI or transport.
//!
//! - **transaction_session**: running total, pending input and narration log
//! - **currency_format**: thousands grouping and amount parsing shared by
//!   every display site
//! - **product_catalog**: the lineup behind the selection buttons
//! - **outcomes**: accepted/rejected results of session operations
//! - **messages**: log narration text

pub mod currency_format;
pub mod messages;
pub mod models;
pub mod outcomes;
pub mod product_catalog;
pub mod transaction_session;

pub use currency_format::*;
pub use models::Product;
pub use outcomes::*;
pub use product_catalog::*;
pub use transaction_session::*;
