use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizationType {
    #[serde(rename = "PAYMENT_GATEWAY")]
    PaymentGateway,
}

/// Parameters handed to the payment gateway that tokenizes the card data.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayParameters {
    /// Gateway identifier, e.g. `stripe`.
    #[builder(into)]
    pub gateway: String,

    /// Publishable key issued by the gateway.
    #[serde(rename = "stripe:publishableKey")]
    #[builder(into)]
    pub gateway_token: String,

    /// Gateway API version the token is requested for.
    #[serde(rename = "stripe:version")]
    #[builder(into)]
    pub gateway_version: String,

    #[serde(rename = "gatewayMerchantId", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_merchant_id: Option<String>,
}

/// The `tokenizationSpecification` fragment of a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationSpecification {
    #[serde(rename = "type")]
    pub tokenization_type: TokenizationType,
    pub parameters: GatewayParameters,
}

impl TokenizationSpecification {
    pub fn payment_gateway(parameters: GatewayParameters) -> Self {
        Self {
            tokenization_type: TokenizationType::PaymentGateway,
            parameters,
        }
    }
}
