use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::TokenizationSpecification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethodType {
    #[serde(rename = "CARD")]
    Card,
}

/// Card authentication methods accepted by the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthMethod {
    /// Cards on file with the user's Google account.
    #[serde(rename = "PAN_ONLY")]
    PanOnly,
    /// Device tokens authenticated with a 3-D Secure cryptogram.
    #[serde(rename = "CRYPTOGRAM_3DS")]
    Cryptogram3ds,
}

impl AuthMethod {
    /// Every method this crate requests, in wire order.
    pub const ALL: [AuthMethod; 2] = [AuthMethod::PanOnly, AuthMethod::Cryptogram3ds];
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParameters {
    #[builder(default = AuthMethod::ALL.to_vec())]
    pub allowed_auth_methods: Vec<AuthMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_card_networks: Option<Vec<String>>,
}

/// An entry of `allowedPaymentMethods`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    #[builder(default = PaymentMethodType::Card)]
    pub payment_method_type: PaymentMethodType,

    pub parameters: CardParameters,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenization_specification: Option<TokenizationSpecification>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn card_defaults() {
        let method = PaymentMethod::builder()
            .parameters(
                CardParameters::builder()
                    .allowed_card_networks(vec!["VISA".to_string(), "AMEX".to_string()])
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({
                "type": "CARD",
                "parameters": {
                    "allowedAuthMethods": ["PAN_ONLY", "CRYPTOGRAM_3DS"],
                    "allowedCardNetworks": ["VISA", "AMEX"]
                }
            })
        );
    }

    #[test]
    fn unknown_auth_method_is_rejected() {
        let result = serde_json::from_value::<CardParameters>(json!({
            "allowedAuthMethods": ["PAN_ONLY", "BIOMETRIC"]
        }));
        assert!(result.is_err());
    }
}
