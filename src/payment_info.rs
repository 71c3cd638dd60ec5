//! [`PaymentInfo`] collects the caller's payment configuration and renders it into
//! the documents the Google Pay SDK consumes.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Error,
    types::{
        AnyJson, CardParameters, GatewayParameters, PaymentDataRequest, PaymentMethod,
        TokenizationSpecification, TransactionInfo,
    },
};

/// Payment request configuration.
///
/// ```
/// use google_pay_request::PaymentInfo;
///
/// let info = PaymentInfo::builder()
///     .total_price("10.00")
///     .currency_code("USD")
///     .allowed_card_networks(["VISA", "MASTERCARD"])?
///     .build();
///
/// let json = info.render_payment_data_request(false)?;
/// assert!(json.starts_with(r#"{"apiVersion":2,"apiVersionMinor":0,"#));
/// # Ok::<(), google_pay_request::errors::Error>(())
/// ```
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub total_price: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_merchant_id: Option<String>,

    /// Card brands accepted by the merchant, in the order given.
    ///
    /// The setter fails if any value does not encode as a JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(with = |networks: impl IntoIterator<Item = impl Serialize>| -> Result<_, Error> {
        encode_card_networks(networks)
    })]
    pub allowed_card_networks: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_version: Option<String>,
}

fn encode_card_networks(
    networks: impl IntoIterator<Item = impl Serialize>,
) -> Result<Vec<String>, Error> {
    networks
        .into_iter()
        .enumerate()
        .map(|(index, network)| match serde_json::to_value(&network)? {
            AnyJson::String(network) => Ok(network),
            other => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Card network at index {index} is not a string: {other}");
                Err(Error::UnencodableCardNetwork {
                    index,
                    value: other.to_string(),
                })
            }
        })
        .collect()
}

impl PaymentInfo {
    /// Parse a configuration object with camelCase keys.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The gateway tokenization fragment.
    ///
    /// Returns `None` unless gateway, token and version are all set.
    pub fn tokenization_specification(&self) -> Option<TokenizationSpecification> {
        let (Some(gateway), Some(token), Some(version)) =
            (&self.gateway, &self.gateway_token, &self.gateway_version)
        else {
            return None;
        };

        Some(TokenizationSpecification::payment_gateway(
            GatewayParameters::builder()
                .gateway(gateway)
                .gateway_token(token)
                .gateway_version(version)
                .maybe_gateway_merchant_id(self.gateway_merchant_id.as_ref())
                .build(),
        ))
    }

    /// Render the tokenization fragment, or `{}` when it is not available.
    pub fn render_tokenization_specification(&self) -> Result<String, Error> {
        let json = match self.tokenization_specification() {
            Some(spec) => serde_json::to_string(&spec)?,
            None => serde_json::to_string(&AnyJson::Object(Default::default()))?,
        };
        Ok(json)
    }

    /// Assemble the full request document.
    ///
    /// The tokenization fragment is embedded only when requested and available.
    pub fn payment_data_request(&self, with_tokenization: bool) -> PaymentDataRequest {
        let tokenization = if with_tokenization {
            self.tokenization_specification()
        } else {
            None
        };

        let card = PaymentMethod::builder()
            .parameters(
                CardParameters::builder()
                    .maybe_allowed_card_networks(self.allowed_card_networks.clone())
                    .build(),
            )
            .maybe_tokenization_specification(tokenization)
            .build();

        PaymentDataRequest::builder()
            .allowed_payment_methods(vec![card])
            .transaction_info(
                TransactionInfo::builder()
                    .maybe_total_price(self.total_price.as_ref())
                    .maybe_currency_code(self.currency_code.as_ref())
                    .build(),
            )
            .build()
    }

    /// Render the full request document as the JSON text accepted by
    /// `PaymentDataRequest.fromJson`.
    pub fn render_payment_data_request(&self, with_tokenization: bool) -> Result<String, Error> {
        let json = self.payment_data_request(with_tokenization).to_json()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Payment data request: {json}");

        Ok(json)
    }
}

impl TryFrom<AnyJson> for PaymentInfo {
    type Error = Error;

    fn try_from(value: AnyJson) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}
