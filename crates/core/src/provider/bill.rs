//! Bill payloads sent to the gateway.

use serde::Serialize;

/// Body of a new-bill request.
///
/// `amount` is the powed integer form; `pow` is its exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBill {
    /// Powed amount.
    pub amount: String,
    /// Wallet receiving the payment.
    pub wallet: u64,
    /// Exponent of `amount`.
    pub pow: u32,
    /// Seconds the bill stays payable.
    pub lifetime: u32,
    /// Caller's own reference.
    pub tracking_id: Option<String>,
    /// Where the gateway posts status updates.
    pub callback_url: Option<String>,
}

/// A new-bill request: where to send it and what to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillRequest {
    /// Endpoint to post to.
    pub url: String,
    /// Request body.
    pub payload: NewBill,
}
