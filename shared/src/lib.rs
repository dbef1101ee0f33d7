use serde::{Deserialize, Serialize};

/// Snapshot of one vending session as rendered by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    /// RFC 3339 timestamp of session creation
    pub created_at: String,
    /// Whole currency units currently held by the machine
    pub total_inserted: u64,
    /// Thousands-grouped total, e.g. "1,500"
    pub formatted_total: String,
    /// Raw digits typed but not yet inserted (may be empty)
    pub pending_input: String,
    /// Echo of the pending input for the input box ("" when nothing is typed)
    pub formatted_pending_input: String,
    /// Transaction narration, oldest first
    pub log: Vec<String>,
    /// Log entries joined with newlines for a multi-line message box
    pub log_text: String,
    /// Codes of the products the current total can buy
    pub affordable_products: Vec<String>,
}

/// Request for replacing the pending input with freshly typed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPendingInputRequest {
    pub raw: String,
}

/// Response after setting the pending input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPendingInputResponse {
    /// False when the text was not a number and the previous input was kept
    pub accepted: bool,
    pub session: SessionView,
}

/// Response after pressing the insert button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertResponse {
    pub accepted: bool,
    pub amount: Option<u64>,
    pub formatted_amount: Option<String>,
    /// Hint for the user when the insert was rejected
    pub hint: Option<String>,
    pub session: SessionView,
}

/// Response after pressing the refund button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundResponse {
    pub refunded: bool,
    /// Cash to hand back to the user (0 when nothing was refunded)
    pub amount: u64,
    pub formatted_amount: String,
    pub hint: Option<String>,
    pub session: SessionView,
}

/// Response after pressing a product button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectProductResponse {
    pub dispensed: bool,
    pub product: ProductDto,
    /// Total left in the machine after the selection
    pub remaining: u64,
    pub formatted_remaining: String,
    pub hint: Option<String>,
    pub session: SessionView,
}

/// A product button as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub code: String,
    pub name: String,
    pub price: u64,
    /// Price with thousands grouping and currency unit, e.g. "1,100원"
    pub formatted_price: String,
}

/// Response containing the product lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> SessionView {
        SessionView {
            session_id: "2d1c7a4e-9c0b-4b8e-a1f3-6f2f2b0f5c11".to_string(),
            created_at: "2026-10-19T09:00:00Z".to_string(),
            total_inserted: 1500,
            formatted_total: "1,500".to_string(),
            pending_input: String::new(),
            formatted_pending_input: String::new(),
            log: vec!["1,500원을 투입했습니다.".to_string()],
            log_text: "1,500원을 투입했습니다.".to_string(),
            affordable_products: vec!["FE300".to_string()],
        }
    }

    #[test]
    fn test_session_view_json_field_names() {
        let json = serde_json::to_value(sample_view()).unwrap();

        assert_eq!(json["total_inserted"], 1500);
        assert_eq!(json["formatted_total"], "1,500");
        assert_eq!(json["log"][0], "1,500원을 투입했습니다.");
        assert_eq!(json["log_text"], "1,500원을 투입했습니다.");
        assert_eq!(json["affordable_products"][0], "FE300");
    }

    #[test]
    fn test_set_pending_input_request_from_json() {
        let request: SetPendingInputRequest =
            serde_json::from_str(r#"{ "raw": "12,000" }"#).unwrap();
        assert_eq!(request.raw, "12,000");
    }

    #[test]
    fn test_rejected_insert_response_serializes_nulls() {
        let response = InsertResponse {
            accepted: false,
            amount: None,
            formatted_amount: None,
            hint: Some("투입할 금액을 입력해 주세요.".to_string()),
            session: sample_view(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["accepted"], false);
        assert!(json["amount"].is_null());
        assert_eq!(json["hint"], "투입할 금액을 입력해 주세요.");
    }
}
