//! Domain model for a product behind one of the machine's buttons.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price: u64, // whole currency units
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: u64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Button code derived from the price, e.g. `FE300`
    pub fn code_for_price(price: u64) -> String {
        format!("FE{}", price)
    }
}
