use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    types::{AnyJson, ApiVersion2, ApiVersionMinor0, PaymentMethod, TransactionInfo},
};

/// The full document passed to `PaymentDataRequest.fromJson`.
///
/// Field order is the key order of the rendered JSON.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDataRequest {
    #[builder(skip)]
    pub api_version: ApiVersion2,

    #[builder(skip)]
    pub api_version_minor: ApiVersionMinor0,

    pub allowed_payment_methods: Vec<PaymentMethod>,

    pub transaction_info: TransactionInfo,
}

impl PaymentDataRequest {
    /// Serialize to the compact JSON text expected by the Google Pay SDK.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<AnyJson> for PaymentDataRequest {
    type Error = crate::errors::Error;

    fn try_from(value: AnyJson) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::CardParameters;

    fn setup_request() -> PaymentDataRequest {
        PaymentDataRequest::builder()
            .allowed_payment_methods(vec![
                PaymentMethod::builder()
                    .parameters(
                        CardParameters::builder()
                            .allowed_card_networks(vec!["MASTERCARD".to_string()])
                            .build(),
                    )
                    .build(),
            ])
            .transaction_info(
                TransactionInfo::builder()
                    .total_price("1.50")
                    .currency_code("EUR")
                    .build(),
            )
            .build()
    }

    #[test]
    fn stamps_api_version() {
        let request = setup_request();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "apiVersion": 2,
                "apiVersionMinor": 0,
                "allowedPaymentMethods": [{
                    "type": "CARD",
                    "parameters": {
                        "allowedAuthMethods": ["PAN_ONLY", "CRYPTOGRAM_3DS"],
                        "allowedCardNetworks": ["MASTERCARD"]
                    }
                }],
                "transactionInfo": {
                    "totalPriceStatus": "FINAL",
                    "totalPrice": "1.50",
                    "currencyCode": "EUR"
                }
            })
        );
    }

    #[test]
    fn key_order_is_stable() {
        let json = setup_request().to_json().unwrap();

        let api_version = json.find("\"apiVersion\"").unwrap();
        let api_version_minor = json.find("\"apiVersionMinor\"").unwrap();
        let methods = json.find("\"allowedPaymentMethods\"").unwrap();
        let transaction = json.find("\"transactionInfo\"").unwrap();

        assert!(api_version < api_version_minor);
        assert!(api_version_minor < methods);
        assert!(methods < transaction);
    }

    #[test]
    fn parse_rendered_document() {
        let request = setup_request();
        let parsed = PaymentDataRequest::from_json(&request.to_json().unwrap()).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn rejects_other_api_versions() {
        let mut value = serde_json::to_value(setup_request()).unwrap();
        value["apiVersion"] = json!(1);
        assert!(PaymentDataRequest::try_from(value).is_err());
    }
}
