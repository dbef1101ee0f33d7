//! Transaction state of one vending-machine interaction session.
//!
//! A session tracks three things: the total money inserted, the amount the
//! user has typed but not yet inserted, and the narration log shown in the
//! message box. All operations are synchronous and total; invalid requests
//! come back as rejected outcomes and leave the session unchanged.
//!
//! ## Invariants
//!
//! - `pending_input` is empty or a run of ASCII digits (of any length)
//! - `total_inserted` only grows through [`TransactionSession::insert`] and
//!   only shrinks through refunds and product dispensing
//! - `log` is append-only, one entry per successful insert, refund or dispense

use tracing::{debug, info};

use super::currency_format::{
    format_currency, format_pending_input, is_digit_string, parse_amount, strip_separators,
};
use super::messages;
use super::models::Product;
use super::outcomes::{InsertRejection, InsertResult, RefundResult, SelectResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSession {
    total_inserted: u64,
    pending_input: String,
    log: Vec<String>,
}

impl TransactionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_inserted(&self) -> u64 {
        self.total_inserted
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Running total for the machine's screen
    pub fn formatted_total(&self) -> String {
        format_currency(self.total_inserted)
    }

    /// Pending input echoed back into the input box
    pub fn formatted_pending_input(&self) -> String {
        format_pending_input(&self.pending_input)
    }

    /// Log entries joined for a multi-line message box
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }

    /// Replace the pending input with freshly typed text.
    ///
    /// Commas are stripped. Text that is not a whole, non-negative number is
    /// ignored and the previous input stays. Size is checked on insert, not
    /// here. Returns whether the text was taken.
    pub fn set_pending_input(&mut self, raw: &str) -> bool {
        let cleaned = strip_separators(raw);
        if !cleaned.is_empty() && !is_digit_string(&cleaned) {
            debug!("Ignoring non-numeric pending input {:?}", raw);
            return false;
        }

        self.pending_input = cleaned;
        true
    }

    /// Insert the pending amount into the machine
    pub fn insert(&mut self) -> InsertResult {
        if self.pending_input.is_empty() {
            return Self::reject_insert(InsertRejection::EmptyInput);
        }

        let amount = match parse_amount(&self.pending_input) {
            None => return Self::reject_insert(InsertRejection::AmountTooLarge),
            Some(0) => return Self::reject_insert(InsertRejection::NonPositiveAmount),
            Some(amount) => amount,
        };

        let Some(new_total) = self.total_inserted.checked_add(amount) else {
            return Self::reject_insert(InsertRejection::TotalOverflow);
        };

        self.total_inserted = new_total;
        self.log.push(messages::inserted(amount));
        self.pending_input.clear();

        info!("Inserted {} (total {})", amount, new_total);
        InsertResult::Accepted { amount }
    }

    fn reject_insert(reason: InsertRejection) -> InsertResult {
        debug!("Insert rejected: {:?}", reason);
        InsertResult::Rejected { reason }
    }

    /// Return every inserted unit to the user
    pub fn refund(&mut self) -> RefundResult {
        if self.total_inserted == 0 {
            debug!("Refund requested with nothing inserted");
            return RefundResult::NothingToRefund;
        }

        let amount = std::mem::take(&mut self.total_inserted);
        self.log.push(messages::refunded(amount));

        info!("Refunded {}", amount);
        RefundResult::Refunded { amount }
    }

    /// Buy something that costs `price` out of the inserted total
    pub fn select_product(&mut self, price: u64) -> SelectResult {
        self.charge(price, messages::dispensed_by_price(price))
    }

    /// Buy a catalog product, narrating it by name
    pub fn dispense(&mut self, product: &Product) -> SelectResult {
        self.charge(product.price, messages::dispensed(&product.name, product.price))
    }

    fn charge(&mut self, price: u64, entry: String) -> SelectResult {
        let available = self.total_inserted;
        if available < price {
            debug!("Insufficient funds: price {} > total {}", price, available);
            return SelectResult::InsufficientFunds { price, available };
        }

        let remaining = available - price;
        self.total_inserted = remaining;
        self.log.push(entry);

        info!("Dispensed product for {} (remaining {})", price, remaining);
        SelectResult::Dispensed { price, remaining }
    }

    /// Tear the session down to its initial zero/empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
