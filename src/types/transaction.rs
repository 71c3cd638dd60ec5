use bon::Builder;
use serde::{Deserialize, Serialize};

/// Finality of the price shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalPriceStatus {
    #[serde(rename = "FINAL")]
    Final,
    #[serde(rename = "ESTIMATED")]
    Estimated,
    #[serde(rename = "NOT_CURRENTLY_KNOWN")]
    NotCurrentlyKnown,
}

/// The `transactionInfo` section of a payment data request.
///
/// Price and currency are passed through verbatim; an absent value is left out of the document.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    #[builder(default = TotalPriceStatus::Final)]
    pub total_price_status: TotalPriceStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub total_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<String>,
}
