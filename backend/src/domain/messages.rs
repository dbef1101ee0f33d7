//! Log narration written by a transaction session.

use super::currency_format::{format_currency, format_won};

pub fn inserted(amount: u64) -> String {
    format!("{}을 투입했습니다.", format_won(amount))
}

pub fn refunded(amount: u64) -> String {
    format!("{}을 반환했습니다.", format_won(amount))
}

/// Dispense narration when only the price is known
pub fn dispensed_by_price(price: u64) -> String {
    format!("{} 상품이 나왔습니다.", format_won(price))
}

pub fn dispensed(product_name: &str, price: u64) -> String {
    format!("{} 상품이 나왔습니다. ({})", product_name, format_won(price))
}

pub fn insufficient_funds(price: u64, available: u64) -> String {
    format!(
        "잔액이 부족합니다. (상품 가격 {}원, 투입 금액 {}원)",
        format_currency(price),
        format_currency(available)
    )
}
