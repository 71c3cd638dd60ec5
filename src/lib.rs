//! Google Pay request library.
//!
//! Builds the `PaymentDataRequest` JSON document accepted by the Google Pay SDK
//! from a small set of caller-supplied fields.

pub mod errors;
pub mod payment_info;
pub mod types;

pub use payment_info::PaymentInfo;
