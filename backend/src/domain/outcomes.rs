//! Outcomes of the operations on a transaction session.
//!
//! None of the session operations can fail. Each returns one of these values
//! and a rejected outcome always means the session was left untouched.

use super::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    Accepted { amount: u64 },
    Rejected { reason: InsertRejection },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertRejection {
    /// Nothing typed
    EmptyInput,
    /// Typed amount was zero
    NonPositiveAmount,
    /// Typed digits do not fit in an amount
    AmountTooLarge,
    /// Adding the amount would overflow the running total
    TotalOverflow,
}

impl InsertRejection {
    pub fn hint(&self) -> String {
        match self {
            InsertRejection::EmptyInput => "투입할 금액을 입력해 주세요.".to_string(),
            InsertRejection::NonPositiveAmount => "0원보다 큰 금액을 입력해 주세요.".to_string(),
            InsertRejection::AmountTooLarge => "투입할 수 없는 금액입니다.".to_string(),
            InsertRejection::TotalOverflow => "더 이상 투입할 수 없습니다.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundResult {
    Refunded { amount: u64 },
    /// Total was already zero; no log entry is written
    NothingToRefund,
}

impl RefundResult {
    /// Cash to hand back (0 for `NothingToRefund`)
    pub fn amount(&self) -> u64 {
        match self {
            RefundResult::Refunded { amount } => *amount,
            RefundResult::NothingToRefund => 0,
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            RefundResult::Refunded { .. } => None,
            RefundResult::NothingToRefund => Some("반환할 금액이 없습니다.".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectResult {
    Dispensed { price: u64, remaining: u64 },
    InsufficientFunds { price: u64, available: u64 },
}

impl SelectResult {
    /// Total left in the machine after the selection
    pub fn remaining(&self) -> u64 {
        match self {
            SelectResult::Dispensed { remaining, .. } => *remaining,
            SelectResult::InsufficientFunds { available, .. } => *available,
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            SelectResult::Dispensed { .. } => None,
            SelectResult::InsufficientFunds { price, available } => {
                Some(messages::insufficient_funds(*price, *available))
            }
        }
    }
}
